//! Error type for the block fetcher.

use alloy_transport::TransportError;
use std::time::Duration;
use thiserror::Error;

/// An error that occurred while fetching the latest block.
///
/// Every variant is transient from the caller's point of view: the cycle is skipped and the
/// next tick tries again.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The chain client could not be reached.
    #[error("failed to connect to chain client: {0}")]
    Connection(#[source] TransportError),

    /// The latest block header could not be retrieved.
    #[error("failed to fetch latest block header: {0}")]
    Header(#[source] TransportError),

    /// The chain client returned no latest block.
    #[error("chain client returned no latest block header")]
    HeaderNotFound,

    /// The full block could not be retrieved.
    #[error("failed to fetch block {number}: {source}")]
    Block {
        /// The requested block number.
        number: u64,
        /// The underlying transport error.
        #[source]
        source: TransportError,
    },

    /// The chain client returned no block for the requested number.
    #[error("chain client returned no block {0}")]
    BlockNotFound(u64),

    /// The block was returned with transaction hashes instead of transaction bodies.
    #[error("block {number} returned {count} transaction hashes instead of transaction bodies")]
    MissingTransactions {
        /// The block number.
        number: u64,
        /// The number of hashes returned.
        count: usize,
    },

    /// The fetch did not complete within its deadline.
    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),
}
