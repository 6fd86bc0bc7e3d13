//! Normalization of JSON-RPC blocks into transport records.

use crate::FetchError;
use alloy_consensus::Transaction as _;
use alloy_primitives::U256;
use alloy_rpc_types_eth::{Block, BlockTransactions, Transaction};
use blockpost_primitives::{BlockRecord, TransactionRecord};

/// Builds a [`TransactionRecord`] from an RPC [`Transaction`].
///
/// Transactions without an EIP-155 chain id get a chain id of zero. Dynamic-fee transactions
/// report their fee cap as the gas price.
pub fn transaction_record(tx: &Transaction) -> TransactionRecord {
    TransactionRecord {
        hash: alloy_network_primitives::TransactionResponse::tx_hash(tx),
        chain_id: U256::from(tx.chain_id().unwrap_or_default()),
        value: tx.value(),
        to: tx.to(),
        gas: tx.gas_limit(),
        gas_price: U256::from(tx.max_fee_per_gas()),
    }
}

/// Builds a [`BlockRecord`] from an RPC [`Block`], preserving transaction order.
///
/// The transaction count is taken from the transactions actually present in the response.
/// A block that carries transaction hashes instead of bodies is rejected.
pub fn block_record(block: &Block) -> Result<BlockRecord, FetchError> {
    let number = block.header.number;
    let transactions = match &block.transactions {
        BlockTransactions::Full(txs) => txs.iter().map(transaction_record).collect(),
        BlockTransactions::Hashes(hashes) if !hashes.is_empty() => {
            return Err(FetchError::MissingTransactions { number, count: hashes.len() });
        }
        BlockTransactions::Hashes(_) | BlockTransactions::Uncle => Vec::new(),
    };

    Ok(BlockRecord::new(
        number,
        block.header.timestamp,
        block.header.difficulty.saturating_to(),
        block.header.hash,
        transactions,
    ))
}
