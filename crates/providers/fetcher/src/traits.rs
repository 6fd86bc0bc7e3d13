//! The [`BlockFetcher`] trait.

use crate::FetchError;
use async_trait::async_trait;
use blockpost_primitives::BlockRecord;
use std::fmt::Debug;

/// A source of the chain's most recent block.
///
/// Implementations hold no state between calls. A fetch either yields a fully populated
/// [`BlockRecord`] or an error, never a partial record.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait BlockFetcher: Debug + Send + Sync {
    /// Fetches the latest block and its transactions.
    async fn fetch(&self) -> Result<BlockRecord, FetchError>;
}
