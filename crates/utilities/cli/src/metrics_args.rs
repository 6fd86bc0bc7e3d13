//! Prometheus metrics arguments.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr};

/// Prometheus metrics arguments.
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
pub struct MetricsArgs {
    /// Serves Prometheus metrics over HTTP.
    #[arg(long = "metrics.enabled", global = true, default_value_t = false, env = "BLOCKPOST_METRICS_ENABLED")]
    pub enabled: bool,
    /// The address the metrics server listens on.
    #[arg(long = "metrics.addr", global = true, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED), env = "BLOCKPOST_METRICS_ADDR")]
    pub addr: IpAddr,
    /// The port the metrics server listens on.
    #[arg(long = "metrics.port", global = true, default_value_t = 9090, env = "BLOCKPOST_METRICS_PORT")]
    pub port: u16,
}

impl Default for MetricsArgs {
    fn default() -> Self {
        Self { enabled: false, addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 9090 }
    }
}

impl MetricsArgs {
    /// Starts the Prometheus server if metrics are enabled.
    ///
    /// Returns `true` if a recorder was installed.
    pub fn init_metrics(&self) -> crate::CliResult<bool> {
        if !self.enabled {
            return Ok(false);
        }
        crate::init_prometheus_server(self.addr, self.port)?;
        Ok(true)
    }
}
