//! The `blockpost` binary.
//!
//! Polls an Ethereum node for the latest block and uploads each new block to an HTTP document
//! store.

use clap::Parser;

mod cli;
mod flags;

fn main() {
    blockpost_cli::backtrace::enable();

    if let Err(err) = cli::Cli::parse().run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
