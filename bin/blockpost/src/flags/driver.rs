//! Poll driver flags.

use anyhow::{Result, bail};
use blockpost_driver::DriverConfig;
use clap::Parser;
use std::time::Duration;

/// Flags controlling the poll loop.
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
pub(crate) struct DriverArgs {
    /// Seconds between polls of the chain client.
    #[arg(long, default_value_t = 5, env = "BLOCKPOST_INTERVAL")]
    pub interval: u64,
    /// Seconds a single fetch may take. Defaults to four fifths of the interval.
    #[arg(long, env = "BLOCKPOST_FETCH_TIMEOUT")]
    pub fetch_timeout: Option<u64>,
    /// Seconds a single upload may take. Defaults to four fifths of the interval.
    #[arg(long, env = "BLOCKPOST_UPLOAD_TIMEOUT")]
    pub upload_timeout: Option<u64>,
    /// Runs a single cycle, one interval after startup, and exits.
    #[arg(long, default_value_t = false)]
    pub once: bool,
}

impl DriverArgs {
    /// Converts the flags into a [`DriverConfig`].
    pub(crate) fn config(&self) -> Result<DriverConfig> {
        if self.interval == 0 {
            bail!("--interval must be at least one second");
        }

        let mut config = DriverConfig::new(Duration::from_secs(self.interval));
        if let Some(secs) = self.fetch_timeout {
            config = config.with_fetch_timeout(Self::timeout("--fetch-timeout", secs)?);
        }
        if let Some(secs) = self.upload_timeout {
            config = config.with_upload_timeout(Self::timeout("--upload-timeout", secs)?);
        }
        if self.once {
            config = config.with_max_cycles(1);
        }
        Ok(config)
    }

    fn timeout(flag: &str, secs: u64) -> Result<Duration> {
        if secs == 0 {
            bail!("{flag} must be at least one second");
        }
        Ok(Duration::from_secs(secs))
    }
}
