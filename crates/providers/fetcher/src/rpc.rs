//! Contains the [`RpcBlockFetcher`].

use crate::{BlockFetcher, FetchError, block_record};
use alloy_eips::BlockNumberOrTag;
use alloy_provider::{Provider, ProviderBuilder};
use async_trait::async_trait;
use blockpost_primitives::BlockRecord;

/// A [`BlockFetcher`] backed by an Ethereum JSON-RPC endpoint.
///
/// The endpoint may be an `http(s)://` or `ws(s)://` URL, or an IPC socket path. A new
/// connection is opened for every fetch and released before the fetch returns.
#[derive(Clone)]
pub struct RpcBlockFetcher {
    endpoint: String,
}

impl core::fmt::Debug for RpcBlockFetcher {
    // Endpoints commonly embed provider API keys.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RpcBlockFetcher").finish_non_exhaustive()
    }
}

impl RpcBlockFetcher {
    /// Creates a new [`RpcBlockFetcher`] for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// Fetches the latest block through an already connected provider.
    ///
    /// Requests the latest header first, then the full block at that header's number.
    pub async fn fetch_latest<P: Provider>(provider: &P) -> Result<BlockRecord, FetchError> {
        let head = provider
            .get_block_by_number(BlockNumberOrTag::Latest)
            .await
            .map_err(FetchError::Header)?
            .ok_or(FetchError::HeaderNotFound)?;
        let number = head.header.number;
        trace!(target: "fetcher", block_number = number, "Received latest header");

        let block = provider
            .get_block_by_number(BlockNumberOrTag::Number(number))
            .full()
            .await
            .map_err(|source| FetchError::Block { number, source })?
            .ok_or(FetchError::BlockNotFound(number))?;

        block_record(&block)
    }
}

#[async_trait]
impl BlockFetcher for RpcBlockFetcher {
    async fn fetch(&self) -> Result<BlockRecord, FetchError> {
        let provider =
            ProviderBuilder::new().connect(&self.endpoint).await.map_err(FetchError::Connection)?;

        let record = Self::fetch_latest(&provider).await?;
        debug!(
            target: "fetcher",
            block_number = record.number,
            block_hash = %record.hash,
            transaction_count = record.transaction_count,
            "Fetched latest block"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::tests::{ALICE, eip1559_create, legacy_transfer, rpc_block};
    use alloy_primitives::{B256, U256};
    use alloy_rpc_types_eth::Block;
    use mockito::{Mock, Server, ServerGuard};
    use serde_json::{Value, json};

    /// Serves `eth_getBlockByNumber`, answering the `latest` query with `head` and numbered
    /// queries with the block of that number, if any.
    async fn mock_node(server: &mut ServerGuard, head: Option<Block>, blocks: Vec<Block>) -> Mock {
        server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body_from_request(move |request| {
                let call: Value =
                    serde_json::from_slice(request.body().expect("request body")).unwrap();
                let tag = call["params"][0].as_str().unwrap_or_default().to_string();
                let result = if tag == "latest" {
                    serde_json::to_value(&head).unwrap()
                } else {
                    let number = u64::from_str_radix(tag.trim_start_matches("0x"), 16).unwrap();
                    let block = blocks.iter().find(|block| block.header.number == number);
                    serde_json::to_value(block).unwrap()
                };
                serde_json::to_vec(&json!({ "jsonrpc": "2.0", "id": call["id"], "result": result }))
                    .unwrap()
            })
            .expect_at_least(1)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn test_fetch_requests_full_block_at_head_number() {
        let mut server = Server::new_async().await;
        let hash = B256::repeat_byte(0x77);
        let head = rpc_block(100, hash, Vec::new());
        let full = rpc_block(
            100,
            hash,
            vec![legacy_transfer(0, ALICE, U256::from(5)), eip1559_create(1)],
        );
        let mock = mock_node(&mut server, Some(head), vec![full]).await;

        let fetcher = RpcBlockFetcher::new(server.url());
        let record = fetcher.fetch().await.unwrap();

        assert_eq!(record.number, 100);
        assert_eq!(record.hash, hash);
        assert_eq!(record.transaction_count, 2);
        assert_eq!(record.transactions[0].to, Some(ALICE));
        assert_eq!(record.transactions[1].to, None);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_decodes_node_json() {
        let mut server = Server::new_async().await;
        let block: Value =
            serde_json::from_str(include_str!("../testdata/block_with_transactions.json")).unwrap();
        let mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body_from_request(move |request| {
                let call: Value =
                    serde_json::from_slice(request.body().expect("request body")).unwrap();
                serde_json::to_vec(&json!({ "jsonrpc": "2.0", "id": call["id"], "result": block }))
                    .unwrap()
            })
            .expect(2)
            .create_async()
            .await;

        let record = RpcBlockFetcher::new(server.url()).fetch().await.unwrap();

        assert_eq!(record.number, 15_000_000);
        assert_eq!(record.transaction_count, 3);
        assert_eq!(record.transactions[0].chain_id, U256::ZERO);
        assert!(record.transactions[2].is_create());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_missing_head() {
        let mut server = Server::new_async().await;
        let _mock = mock_node(&mut server, None, Vec::new()).await;

        let err = RpcBlockFetcher::new(server.url()).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::HeaderNotFound));
    }

    #[tokio::test]
    async fn test_fetch_missing_block() {
        let mut server = Server::new_async().await;
        let head = rpc_block(42, B256::repeat_byte(1), Vec::new());
        let _mock = mock_node(&mut server, Some(head), Vec::new()).await;

        let err = RpcBlockFetcher::new(server.url()).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::BlockNotFound(42)));
    }

    #[tokio::test]
    async fn test_fetch_header_transport_error() {
        let mut server = Server::new_async().await;
        let _mock = server.mock("POST", "/").with_status(503).create_async().await;

        let err = RpcBlockFetcher::new(server.url()).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Header(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn test_fetch_connection_error() {
        // Nothing listens on port 1, so the websocket handshake cannot complete.
        let err = RpcBlockFetcher::new("ws://127.0.0.1:1").fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Connection(_)), "unexpected error: {err}");
    }

    #[test]
    fn test_debug_hides_endpoint() {
        let fetcher = RpcBlockFetcher::new("https://mainnet.example/v3/secret-key");
        assert!(!format!("{fetcher:?}").contains("secret-key"));
    }
}
