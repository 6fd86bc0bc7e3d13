//! Contains the [`BlockRecord`] type.

use crate::TransactionRecord;
use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// A block and its transactions, normalized for upload.
///
/// The serialized field names are the wire contract with the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// The block number.
    #[serde(rename = "block_number")]
    pub number: u64,
    /// The block timestamp, in seconds since the unix epoch.
    #[serde(rename = "block_time")]
    pub timestamp: u64,
    /// The block difficulty, saturated to 64 bits.
    #[serde(rename = "block_difficulty")]
    pub difficulty: u64,
    /// The block hash. Used as the deduplication key.
    #[serde(rename = "block_hash")]
    pub hash: B256,
    /// The number of transactions actually retrieved with the block.
    pub transaction_count: usize,
    /// The transactions, in on-chain order.
    pub transactions: Vec<TransactionRecord>,
}

impl BlockRecord {
    /// Creates a new [`BlockRecord`], deriving the transaction count from `transactions`.
    pub const fn new(
        number: u64,
        timestamp: u64,
        difficulty: u64,
        hash: B256,
        transactions: Vec<TransactionRecord>,
    ) -> Self {
        Self {
            number,
            timestamp,
            difficulty,
            hash,
            transaction_count: transactions.len(),
            transactions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, U256};

    fn transaction(seed: u8, to: Option<Address>) -> TransactionRecord {
        TransactionRecord {
            hash: B256::repeat_byte(seed),
            chain_id: U256::from(1),
            // Wider than 128 bits.
            value: U256::from(u128::MAX) * U256::from(1_000u64) + U256::from(seed),
            to,
            gas: 21_000 + seed as u64,
            gas_price: U256::from(u64::MAX) + U256::from(seed),
        }
    }

    #[test]
    fn test_new_counts_transactions() {
        let txs = vec![transaction(1, None), transaction(2, Some(Address::repeat_byte(2)))];
        let block = BlockRecord::new(10, 1_700_000_000, 0, B256::repeat_byte(0xaa), txs);
        assert_eq!(block.transaction_count, 2);
    }

    #[test]
    fn test_wire_field_names() {
        let block = BlockRecord::new(10, 1_700_000_000, 3, B256::repeat_byte(0xaa), vec![]);
        let value = serde_json::to_value(&block).unwrap();
        let object = value.as_object().unwrap();

        let mut keys = object.keys().map(String::as_str).collect::<Vec<_>>();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "block_difficulty",
                "block_hash",
                "block_number",
                "block_time",
                "transaction_count",
                "transactions",
            ]
        );
        assert_eq!(object["block_number"], 10);
        assert_eq!(object["block_time"], 1_700_000_000u64);
        assert_eq!(object["block_difficulty"], 3);
    }

    #[test]
    fn test_round_trip_preserves_wide_quantities() {
        let txs = (1..=3)
            .map(|seed| transaction(seed, (seed % 2 == 0).then(|| Address::repeat_byte(seed))))
            .collect::<Vec<_>>();
        let block = BlockRecord::new(19_000_000, 1_705_173_443, 0, B256::repeat_byte(0xbb), txs);

        let json = serde_json::to_string(&block).unwrap();
        let parsed: BlockRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.transactions.len(), 3);
        for (original, parsed) in block.transactions.iter().zip(&parsed.transactions) {
            assert_eq!(parsed.hash, original.hash);
            assert_eq!(parsed.value, original.value);
            assert_eq!(parsed.gas, original.gas);
            assert_eq!(parsed.gas_price, original.gas_price);
        }
        assert_eq!(parsed, block);
    }
}
