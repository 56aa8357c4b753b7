//! # Proximity Search
//!
//! Radius queries over a fixed set of named points in the plane.
//!
//! ## Overview
//!
//! Load named points into a [`PointRegistry`], then ask a
//! [`ProximitySearchEngine`] for every point within a radius of a reference
//! point under one of three metrics:
//!
//! | Code | Metric    | Distance             |
//! |------|-----------|----------------------|
//! | 0    | Euclidean | `sqrt(dx² + dy²)`    |
//! | 1    | Chebyshev | `max(|dx|, |dy|)`    |
//! | 2    | Manhattan | `|dx| + |dy|`        |
//!
//! Results are ranked by ascending distance; ties keep the registry's
//! ascending-by-name order. The reference point is part of its own result at
//! distance 0.
//!
//! ## Usage
//!
//! ```rust
//! use proximity_search::{Coordinates, Near, Place, PointRegistry, ProximitySearchEngine};
//!
//! let mut registry = PointRegistry::new();
//! registry.add("A", Coordinates::new(0.0, 0.0));
//! registry.add("B", Coordinates::new(0.0, 5.0));
//! registry.add("C", Coordinates::new(0.0, -5.0));
//!
//! let engine = ProximitySearchEngine::new(&registry);
//! let ranked = engine.search("A", 5.0, 0)?;
//!
//! assert_eq!(ranked.names().collect::<Vec<_>>(), vec!["A", "B", "C"]);
//! assert_eq!(engine.northern_count("A", &ranked)?, 1);
//! # Ok::<(), proximity_search::SearchError>(())
//! ```

pub mod adapters;
pub mod core;
pub mod logging;
pub mod ports;

// Re-exports for convenience
pub use crate::adapters::{DatasetError, DatasetReader, PointRegistry, ProximitySearchEngine, SearchReport};
pub use crate::core::{Coordinates, Metric, NamedPoint, SearchConfig};
pub use crate::ports::{Near, NearResult, Place, RankedEntry, RankedResult, SearchError};
