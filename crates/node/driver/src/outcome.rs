//! Outcomes of driver cycles.

use alloy_primitives::B256;

/// The result of a single poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleOutcome {
    /// The fetch failed or timed out. Nothing was uploaded.
    FetchFailed,
    /// The fetched block was the last one uploaded. Nothing was uploaded.
    Duplicate,
    /// The upload failed or timed out. The last uploaded hash is unchanged.
    UploadFailed,
    /// The block was uploaded and recorded as the last uploaded hash.
    Uploaded,
}

impl CycleOutcome {
    /// Every cycle outcome.
    pub const ALL: [Self; 4] = [Self::FetchFailed, Self::Duplicate, Self::UploadFailed, Self::Uploaded];

    /// Returns the outcome as a metric label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FetchFailed => "fetch_failed",
            Self::Duplicate => "duplicate",
            Self::UploadFailed => "upload_failed",
            Self::Uploaded => "uploaded",
        }
    }
}

impl core::fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cycle counts accumulated over the lifetime of a [`PollDriver`](crate::PollDriver).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DriverSummary {
    /// Cycles whose fetch failed.
    pub fetch_failures: u64,
    /// Cycles that skipped an already uploaded block.
    pub duplicates: u64,
    /// Cycles whose upload failed.
    pub upload_failures: u64,
    /// Cycles that uploaded a block.
    pub uploads: u64,
    /// The hash of the last uploaded block.
    pub last_uploaded: Option<B256>,
}

impl DriverSummary {
    /// Returns the total number of completed cycles.
    pub const fn cycles(&self) -> u64 {
        self.fetch_failures + self.duplicates + self.upload_failures + self.uploads
    }

    pub(crate) const fn record(&mut self, outcome: CycleOutcome) {
        match outcome {
            CycleOutcome::FetchFailed => self.fetch_failures += 1,
            CycleOutcome::Duplicate => self.duplicates += 1,
            CycleOutcome::UploadFailed => self.upload_failures += 1,
            CycleOutcome::Uploaded => self.uploads += 1,
        }
    }
}
