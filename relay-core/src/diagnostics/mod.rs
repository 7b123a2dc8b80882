//! Diagnostic snapshot collection and persistence for `/relay dump`.

pub mod aggregator;
pub mod environment;
pub mod writer;

pub use aggregator::{DumpAggregator, ProxySnapshot};
pub use environment::collect_environment_info;
pub use writer::SnapshotWriter;
