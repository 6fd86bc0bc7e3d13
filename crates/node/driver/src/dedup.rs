//! Contains the [`DedupState`].

use alloy_primitives::B256;

/// Tracks the hash of the last block the sink accepted.
///
/// Starts empty and lives only as long as its owner. It is advanced only after a confirmed
/// upload, so a block whose upload failed is still considered new.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DedupState {
    last_uploaded: Option<B256>,
}

impl DedupState {
    /// Returns the hash of the last uploaded block, if any.
    pub const fn last_uploaded(&self) -> Option<B256> {
        self.last_uploaded
    }

    /// Returns `true` if `hash` is the last uploaded block.
    pub fn is_duplicate(&self, hash: &B256) -> bool {
        self.last_uploaded.as_ref() == Some(hash)
    }

    /// Records `hash` as the last uploaded block.
    pub const fn mark_uploaded(&mut self, hash: B256) {
        self.last_uploaded = Some(hash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_has_no_duplicates() {
        let state = DedupState::default();
        assert_eq!(state.last_uploaded(), None);
        assert!(!state.is_duplicate(&B256::ZERO));
    }

    #[test]
    fn test_only_last_hash_is_duplicate() {
        let mut state = DedupState::default();
        state.mark_uploaded(B256::repeat_byte(1));
        state.mark_uploaded(B256::repeat_byte(2));

        assert!(state.is_duplicate(&B256::repeat_byte(2)));
        assert!(!state.is_duplicate(&B256::repeat_byte(1)));
    }
}
