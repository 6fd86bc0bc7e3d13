//! Configuration for the [`PollDriver`](crate::PollDriver).

use std::time::Duration;

/// The default interval between two poll cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Configuration for the [`PollDriver`](crate::PollDriver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// The interval between two poll cycles.
    pub interval: Duration,
    /// The deadline for a single fetch. Derived from the interval when unset.
    pub fetch_timeout: Option<Duration>,
    /// The deadline for a single upload. Derived from the interval when unset.
    pub upload_timeout: Option<Duration>,
    /// Stop after this many cycles. Runs until cancelled when unset.
    pub max_cycles: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

impl DriverConfig {
    /// Creates a new [`DriverConfig`] with the given interval and derived timeouts.
    pub const fn new(interval: Duration) -> Self {
        Self { interval, fetch_timeout: None, upload_timeout: None, max_cycles: None }
    }

    /// Sets the fetch deadline.
    pub const fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    /// Sets the upload deadline.
    pub const fn with_upload_timeout(mut self, timeout: Duration) -> Self {
        self.upload_timeout = Some(timeout);
        self
    }

    /// Stops the driver after `max_cycles` cycles.
    pub const fn with_max_cycles(mut self, max_cycles: u64) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    /// Returns the fetch deadline, four fifths of the interval unless set explicitly.
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout.unwrap_or_else(|| self.derived_timeout())
    }

    /// Returns the upload deadline, four fifths of the interval unless set explicitly.
    pub fn upload_timeout(&self) -> Duration {
        self.upload_timeout.unwrap_or_else(|| self.derived_timeout())
    }

    fn derived_timeout(&self) -> Duration {
        self.interval * 4 / 5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval() {
        let config = DriverConfig::default();
        assert_eq!(config.interval, Duration::from_secs(5));
        assert_eq!(config.max_cycles, None);
    }

    #[test]
    fn test_derived_timeouts_are_shorter_than_interval() {
        let config = DriverConfig::default();
        assert_eq!(config.fetch_timeout(), Duration::from_secs(4));
        assert_eq!(config.upload_timeout(), Duration::from_secs(4));
    }

    #[test]
    fn test_explicit_timeouts() {
        let config = DriverConfig::new(Duration::from_secs(10))
            .with_fetch_timeout(Duration::from_secs(2))
            .with_upload_timeout(Duration::from_secs(3));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(2));
        assert_eq!(config.upload_timeout(), Duration::from_secs(3));
    }
}
