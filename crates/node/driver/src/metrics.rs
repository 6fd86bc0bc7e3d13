//! Metrics for the poll driver.

/// Container for the poll driver's metric identifiers.
#[derive(Debug, Clone)]
pub struct Metrics;

impl Metrics {
    /// Identifier for the counter of completed cycles, labeled by outcome.
    pub const CYCLES: &'static str = "blockpost_driver_cycles";

    /// Identifier for the counter of uploaded transactions.
    pub const UPLOADED_TRANSACTIONS: &'static str = "blockpost_driver_uploaded_transactions";

    /// Identifier for the gauge of the last uploaded block number.
    pub const LAST_UPLOADED_BLOCK: &'static str = "blockpost_driver_last_uploaded_block";

    /// Describes and zeroes every driver metric.
    ///
    /// Should be called once at startup, after the metrics recorder is installed.
    /// Does nothing without the `metrics` feature.
    pub fn init() {
        #[cfg(feature = "metrics")]
        {
            Self::describe();
            Self::zero();
        }
    }

    #[cfg(feature = "metrics")]
    fn describe() {
        metrics::describe_counter!(
            Self::CYCLES,
            metrics::Unit::Count,
            "Poll cycles completed, by outcome"
        );
        metrics::describe_counter!(
            Self::UPLOADED_TRANSACTIONS,
            metrics::Unit::Count,
            "Transactions contained in successfully uploaded blocks"
        );
        metrics::describe_gauge!(
            Self::LAST_UPLOADED_BLOCK,
            "Number of the most recent block uploaded to the sink"
        );
    }

    #[cfg(feature = "metrics")]
    fn zero() {
        for outcome in crate::CycleOutcome::ALL {
            metrics::counter!(Self::CYCLES, "outcome" => outcome.as_str()).absolute(0);
        }
        metrics::counter!(Self::UPLOADED_TRANSACTIONS).absolute(0);
        metrics::gauge!(Self::LAST_UPLOADED_BLOCK).set(0.0);
    }
}
