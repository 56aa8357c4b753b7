//! # Core Domain
//!
//! Pure math, no I/O.
//!
//! This module contains the fundamental types and operations:
//! - `Coordinates` - A position in the plane
//! - `Metric` - Distance functions selectable by integer code
//! - `SearchConfig` - Dataset location, default metric, log level
//!
//! ## Design Principles
//!
//! - Distance functions are pure (deterministic, no side effects)
//! - No I/O beyond reading a configuration file
//! - Fully testable in isolation

mod coordinates;
pub mod config;
pub mod metric;

// Re-exports
pub use config::{ConfigError, SearchConfig};
pub use coordinates::Coordinates;
pub use metric::{InvalidMetricCode, Metric};

/// A named position
#[derive(Clone, Debug, PartialEq)]
pub struct NamedPoint {
    /// Unique name
    pub name: String,
    /// Position in the plane
    pub coordinates: Coordinates,
}

impl NamedPoint {
    /// Create a new named point
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}
