//! Utilities for spinning up a prometheus metrics server.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::{IpAddr, SocketAddr};
use tracing::info;

/// Installs the global Prometheus recorder and serves it on the given address and port.
///
/// When called inside a Tokio runtime, the HTTP listener is spawned onto that runtime.
pub fn init_prometheus_server(addr: IpAddr, metrics_port: u16) -> crate::CliResult<()> {
    let socket = SocketAddr::from((addr, metrics_port));
    PrometheusBuilder::new().with_http_listener(socket).install()?;

    info!(target: "prometheus", "Serving metrics at: http://{}", socket);
    Ok(())
}
