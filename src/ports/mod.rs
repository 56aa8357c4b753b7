//! # Ports
//!
//! Trait definitions for adapters. Contracts only, no implementations.
//!
//! - Ports define WHAT operations are needed
//! - Adapters define HOW they're implemented
//!
//! The CORE doesn't know about adapters.
//! Adapters implement these port traits.

mod near;
mod place;

// Re-export traits
pub use near::Near;
pub use place::Place;

// Re-export types from near
pub use near::{NearResult, RankedEntry, RankedResult, SearchError};
