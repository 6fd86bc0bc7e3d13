//! Tracing subscriber setup.

use crate::{CliResult, LogArgs};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Filter directives from [`LogArgs::filter`] take precedence. Otherwise the verbosity selects the
/// level: info by default, debug with `-v`, trace with `-vv` and above.
pub fn init_tracing_subscriber(args: &LogArgs) -> CliResult<()> {
    let filter = match &args.filter {
        Some(directives) => EnvFilter::builder().parse(directives)?,
        None => EnvFilter::builder().with_default_directive(level(args.v).into()).parse("")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!args.no_color)
        .try_init()
        .map_err(|e| crate::CliError::TracingInitialization(e.to_string()))
}

const fn level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level(0), LevelFilter::INFO);
        assert_eq!(level(1), LevelFilter::DEBUG);
        assert_eq!(level(2), LevelFilter::TRACE);
        assert_eq!(level(9), LevelFilter::TRACE);
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let args = LogArgs { filter: Some("driver=loud".to_string()), ..Default::default() };
        assert!(matches!(
            init_tracing_subscriber(&args),
            Err(crate::CliError::InvalidLogFilter(_))
        ));
    }
}
