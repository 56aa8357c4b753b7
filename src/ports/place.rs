//! # Place Port
//!
//! Trait for placing named points in the plane.
//!
//! `Place: fn(name, coordinates)` - Exist in space
//!
//! Implemented by registry adapters. Search adapters only read through it.

use crate::core::Coordinates;

use super::NearResult;

/// Trait for storing named points
pub trait Place {
    /// Insert a point, replacing any previous entry with the same name
    fn add(&mut self, name: &str, coordinates: Coordinates);

    /// Get the coordinates of a named point
    ///
    /// Fails with `SearchError::UnknownPoint` if the name is absent.
    fn lookup(&self, name: &str) -> NearResult<Coordinates>;

    /// Iterate over all points in a stable, deterministic order
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, Coordinates)> + '_>;

    /// Get the number of stored points
    fn len(&self) -> usize;

    /// Check if a point exists
    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_ok()
    }

    /// Check if the registry is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
