//! Adapters - Swappable implementations of port interfaces

pub mod dataset;
pub mod index;
pub mod registry;
pub mod report;
pub mod session;

pub use dataset::{DatasetError, DatasetReader};
pub use index::ProximitySearchEngine;
pub use registry::PointRegistry;
pub use report::SearchReport;
