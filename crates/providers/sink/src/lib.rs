#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

mod error;
pub use error::UploadError;

mod http;
pub use http::{HttpBlockSink, SinkAuth};

mod traits;
pub use traits::BlockSink;
#[cfg(any(test, feature = "test-utils"))]
pub use traits::MockBlockSink;
