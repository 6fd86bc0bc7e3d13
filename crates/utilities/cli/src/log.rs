//! Logging arguments.

use clap::{ArgAction, Parser};

/// Logging arguments.
#[derive(Parser, Default, Clone, Debug, PartialEq, Eq)]
pub struct LogArgs {
    /// Verbosity level: `-v` for debug, `-vv` for trace. Defaults to info.
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub v: u8,
    /// Filter directives overriding the verbosity, in `RUST_LOG` syntax.
    #[arg(long = "log.filter", global = true, env = "RUST_LOG")]
    pub filter: Option<String>,
    /// Disables ANSI colors in log output.
    #[arg(long = "log.no-color", global = true, default_value_t = false)]
    pub no_color: bool,
}
