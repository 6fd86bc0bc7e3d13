#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

#[macro_use]
mod macros;

mod config;
pub use config::{DEFAULT_POLL_INTERVAL, DriverConfig};

mod dedup;
pub use dedup::DedupState;

mod driver;
pub use driver::PollDriver;

mod metrics;
pub use metrics::Metrics;

mod outcome;
pub use outcome::{CycleOutcome, DriverSummary};
