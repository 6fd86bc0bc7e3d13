//! Contains the [`TransactionRecord`] type.

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

/// A single transaction as carried inside a [`BlockRecord`](crate::BlockRecord).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// The transaction hash.
    pub hash: B256,
    /// The chain id the transaction was signed for. Zero for pre-EIP-155 transactions.
    #[serde(with = "blockpost_serde::quantity")]
    pub chain_id: U256,
    /// The amount of wei transferred.
    #[serde(with = "blockpost_serde::quantity")]
    pub value: U256,
    /// The recipient, or `None` for a contract creation.
    #[serde(with = "blockpost_serde::empty_address")]
    pub to: Option<Address>,
    /// The gas limit.
    pub gas: u64,
    /// The gas price, or the fee cap for dynamic-fee transactions.
    #[serde(with = "blockpost_serde::quantity")]
    pub gas_price: U256,
}

impl TransactionRecord {
    /// Returns `true` if the transaction deploys a contract.
    pub const fn is_create(&self) -> bool {
        self.to.is_none()
    }
}
