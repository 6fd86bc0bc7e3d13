//! Contains the [`PollDriver`].

use crate::{CycleOutcome, DedupState, DriverConfig, DriverSummary};
use blockpost_fetcher::{BlockFetcher, FetchError};
use blockpost_primitives::BlockRecord;
use blockpost_sink::{BlockSink, UploadError};
use tokio::time::{Instant, MissedTickBehavior, interval_at, timeout};
use tokio_util::sync::CancellationToken;

/// Polls a [`BlockFetcher`] on a fixed interval and forwards new blocks to a [`BlockSink`].
///
/// The driver is the only owner of the deduplication state, so independent drivers never
/// observe each other's uploads.
#[derive(Debug)]
pub struct PollDriver<F, S> {
    /// The source of the latest block.
    fetcher: F,
    /// The destination for new blocks.
    sink: S,
    /// The driver configuration.
    config: DriverConfig,
    /// Stops the driver between cycles.
    cancellation: CancellationToken,
    /// The last uploaded block hash.
    dedup: DedupState,
    /// Cycle counts so far.
    summary: DriverSummary,
}

impl<F, S> PollDriver<F, S>
where
    F: BlockFetcher,
    S: BlockSink,
{
    /// Creates a new [`PollDriver`] with an empty deduplication state.
    pub fn new(
        fetcher: F,
        sink: S,
        config: DriverConfig,
        cancellation: CancellationToken,
    ) -> Self {
        Self {
            fetcher,
            sink,
            config,
            cancellation,
            dedup: DedupState::default(),
            summary: DriverSummary::default(),
        }
    }

    /// Returns the hash of the last block the sink accepted.
    pub const fn last_uploaded(&self) -> Option<alloy_primitives::B256> {
        self.dedup.last_uploaded()
    }

    /// Returns the cycle counts accumulated so far.
    pub const fn summary(&self) -> DriverSummary {
        let mut summary = self.summary;
        summary.last_uploaded = self.dedup.last_uploaded();
        summary
    }

    /// Runs the poll loop until cancelled, or until the configured number of cycles completed.
    ///
    /// The first cycle starts one interval after the call. Cancellation is only observed
    /// between cycles.
    pub async fn run(mut self) -> DriverSummary {
        let period = self.config.interval;
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(target: "driver", interval = ?period, "Poll driver started");

        loop {
            tokio::select! {
                biased;
                _ = self.cancellation.cancelled() => {
                    info!(target: "driver", "Cancellation requested, stopping poll driver");
                    break;
                }
                _ = ticker.tick() => {
                    self.cycle().await;
                    if self.config.max_cycles.is_some_and(|max| self.summary.cycles() >= max) {
                        info!(target: "driver", cycles = self.summary.cycles(), "Cycle limit reached, stopping poll driver");
                        break;
                    }
                }
            }
        }

        self.summary()
    }

    /// Runs a single fetch, deduplicate and upload cycle.
    pub async fn cycle(&mut self) -> CycleOutcome {
        let outcome = match self.fetch().await {
            Ok(record) => self.forward(record).await,
            Err(err) => {
                warn!(target: "driver", %err, "Failed to fetch latest block");
                CycleOutcome::FetchFailed
            }
        };

        self.summary.record(outcome);
        inc!(counter, CYCLES, "outcome", outcome.as_str());
        outcome
    }

    async fn fetch(&self) -> Result<BlockRecord, FetchError> {
        let deadline = self.config.fetch_timeout();
        timeout(deadline, self.fetcher.fetch())
            .await
            .unwrap_or(Err(FetchError::Timeout(deadline)))
    }

    async fn forward(&mut self, record: BlockRecord) -> CycleOutcome {
        if self.dedup.is_duplicate(&record.hash) {
            info!(
                target: "driver",
                block_number = record.number,
                block_hash = %record.hash,
                "Block already sent, skipping upload"
            );
            return CycleOutcome::Duplicate;
        }

        let deadline = self.config.upload_timeout();
        let result = timeout(deadline, self.sink.upload(&record))
            .await
            .unwrap_or(Err(UploadError::Timeout(deadline)));

        match result {
            Ok(()) => {
                self.dedup.mark_uploaded(record.hash);
                info!(
                    target: "driver",
                    block_number = record.number,
                    block_hash = %record.hash,
                    transaction_count = record.transaction_count,
                    "Uploaded block"
                );
                debug!(target: "driver", ?record, "Uploaded block record");
                set!(gauge, LAST_UPLOADED_BLOCK, record.number as f64);
                #[cfg(feature = "metrics")]
                metrics::counter!(crate::Metrics::UPLOADED_TRANSACTIONS)
                    .increment(record.transaction_count as u64);
                CycleOutcome::Uploaded
            }
            Err(err) => {
                error!(
                    target: "driver",
                    block_number = record.number,
                    block_hash = %record.hash,
                    %err,
                    "Failed to upload block"
                );
                CycleOutcome::UploadFailed
            }
        }
    }
}
