//! The [`BlockSink`] trait.

use crate::UploadError;
use async_trait::async_trait;
use blockpost_primitives::BlockRecord;
use std::fmt::Debug;

/// A destination for fetched blocks.
///
/// A sink performs exactly one delivery attempt per call and keeps no record of what it has
/// delivered. Deduplication is the caller's concern.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait BlockSink: Debug + Send + Sync {
    /// Uploads the record.
    async fn upload(&self, record: &BlockRecord) -> Result<(), UploadError>;
}
