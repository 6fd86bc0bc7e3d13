//! Error types for CLI utilities.

use thiserror::Error;

/// Errors that can occur in CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// The global tracing subscriber could not be installed.
    #[error("Failed to initialize tracing: {0}")]
    TracingInitialization(String),

    /// The filter directives could not be parsed.
    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// The Prometheus exporter could not be installed.
    #[error("Failed to initialize metrics: {0}")]
    MetricsInitialization(#[from] metrics_exporter_prometheus::BuildError),
}

/// Type alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;
