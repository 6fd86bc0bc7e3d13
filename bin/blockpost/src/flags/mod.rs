//! Flags for the blockpost binary.

mod driver;
pub(crate) use driver::DriverArgs;

mod sink;
pub(crate) use sink::SinkArgs;
