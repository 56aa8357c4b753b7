//! # Search Adapters
//!
//! Implementations of the Near port.
//!
//! Available adapters:
//! - `ProximitySearchEngine` - Brute force radius search (exact, O(n) per query)

mod flat;

pub use flat::ProximitySearchEngine;
