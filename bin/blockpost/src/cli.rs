//! Contains the blockpost CLI.

use crate::flags::{DriverArgs, SinkArgs};
use anyhow::Result;
use blockpost_cli::{LogArgs, MetricsArgs, cli_styles, init_tracing_subscriber};
use blockpost_driver::{Metrics, PollDriver};
use blockpost_fetcher::RpcBlockFetcher;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Relays the latest block of an Ethereum chain to an HTTP document store.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, styles = cli_styles(), long_about = None)]
pub(crate) struct Cli {
    /// Logging arguments.
    #[command(flatten)]
    pub log: LogArgs,
    /// Prometheus metrics arguments.
    #[command(flatten)]
    pub metrics: MetricsArgs,
    /// Endpoint of the chain client: an http(s) or ws(s) URL, or an IPC socket path.
    #[arg(long, visible_alias = "rpc", env = "BLOCKPOST_CHAIN_RPC")]
    pub chain_rpc: String,
    /// Upload sink arguments.
    #[command(flatten)]
    pub sink: SinkArgs,
    /// Poll driver arguments.
    #[command(flatten)]
    pub driver: DriverArgs,
}

impl Cli {
    /// Runs the CLI.
    pub(crate) fn run(self) -> Result<()> {
        init_tracing_subscriber(&self.log)?;

        Self::tokio_runtime()?.block_on(self.start())
    }

    /// Starts the poll driver and runs it until ctrl-c, or until the cycle limit is reached.
    pub(crate) async fn start(self) -> Result<()> {
        if self.metrics.init_metrics()? {
            Metrics::init();
        }

        let fetcher = RpcBlockFetcher::new(self.chain_rpc);
        let sink = self.sink.build();
        let config = self.driver.config()?;

        info!(
            target: "blockpost",
            sink = %sink.endpoint(),
            interval = ?config.interval,
            "Starting blockpost"
        );

        let cancellation = CancellationToken::new();
        let signal = tokio::spawn(Self::cancel_on_ctrl_c(cancellation.clone()));

        let summary = PollDriver::new(fetcher, sink, config, cancellation).run().await;
        signal.abort();

        info!(
            target: "blockpost",
            cycles = summary.cycles(),
            uploads = summary.uploads,
            duplicates = summary.duplicates,
            fetch_failures = summary.fetch_failures,
            upload_failures = summary.upload_failures,
            "Stopped blockpost"
        );
        Ok(())
    }

    async fn cancel_on_ctrl_c(cancellation: CancellationToken) {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!(target: "blockpost", "Received ctrl-c, finishing current cycle"),
            Err(err) => warn!(target: "blockpost", %err, "Failed to listen for ctrl-c, stopping"),
        }
        cancellation.cancel();
    }

    /// Creates a new default tokio multi-thread [Runtime](tokio::runtime::Runtime) with all
    /// features enabled.
    pub(crate) fn tokio_runtime() -> Result<tokio::runtime::Runtime, std::io::Error> {
        tokio::runtime::Builder::new_multi_thread().enable_all().build()
    }
}
