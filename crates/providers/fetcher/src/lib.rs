#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

mod error;
pub use error::FetchError;

mod normalize;
pub use normalize::{block_record, transaction_record};

mod rpc;
pub use rpc::RpcBlockFetcher;

mod traits;
pub use traits::BlockFetcher;
#[cfg(any(test, feature = "test-utils"))]
pub use traits::MockBlockFetcher;
