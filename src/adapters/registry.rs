//! # Point Registry
//!
//! The canonical name -> coordinates store.
//!
//! Backed by a `BTreeMap`, so enumeration is always ascending by name no
//! matter what order points were added in. Search adapters rely on this
//! order for tie-breaking.

use std::collections::BTreeMap;

use crate::core::{Coordinates, NamedPoint};
use crate::ports::{NearResult, Place, SearchError};

/// Sorted registry of named points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointRegistry {
    points: BTreeMap<String, Coordinates>,
}

impl PointRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }
}

impl Place for PointRegistry {
    fn add(&mut self, name: &str, coordinates: Coordinates) {
        if let Some(previous) = self.points.insert(name.to_string(), coordinates) {
            tracing::warn!(
                point = name,
                %previous,
                %coordinates,
                "Overwriting existing point"
            );
        }
    }

    fn lookup(&self, name: &str) -> NearResult<Coordinates> {
        self.points
            .get(name)
            .copied()
            .ok_or_else(|| SearchError::unknown_point(name))
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, Coordinates)> + '_> {
        Box::new(
            self.points
                .iter()
                .map(|(name, coordinates)| (name.as_str(), *coordinates)),
        )
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}

impl FromIterator<NamedPoint> for PointRegistry {
    fn from_iter<I: IntoIterator<Item = NamedPoint>>(iter: I) -> Self {
        let mut registry = PointRegistry::new();
        registry.extend(iter);
        registry
    }
}

impl Extend<NamedPoint> for PointRegistry {
    fn extend<I: IntoIterator<Item = NamedPoint>>(&mut self, iter: I) {
        for point in iter {
            self.add(&point.name, point.coordinates);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut registry = PointRegistry::new();
        registry.add("A", Coordinates::new(1.0, 2.0));

        assert_eq!(registry.lookup("A").unwrap(), Coordinates::new(1.0, 2.0));
        assert!(registry.contains("A"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = PointRegistry::new();
        assert!(registry.is_empty());

        match registry.lookup("Z") {
            Err(SearchError::UnknownPoint { name }) => assert_eq!(name, "Z"),
            other => panic!("Expected UnknownPoint error, got {:?}", other),
        }
    }

    #[test]
    fn test_add_overwrites() {
        let mut registry = PointRegistry::new();
        registry.add("A", Coordinates::new(1.0, 2.0));
        registry.add("A", Coordinates::new(3.0, 4.0));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("A").unwrap(), Coordinates::new(3.0, 4.0));
    }

    #[test]
    fn test_entries_sorted_by_name() {
        let mut registry = PointRegistry::new();
        registry.add("Charlie", Coordinates::new(0.0, 0.0));
        registry.add("Alpha", Coordinates::new(0.0, 0.0));
        registry.add("Bravo", Coordinates::new(0.0, 0.0));

        let names: Vec<&str> = registry.entries().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn test_from_iterator() {
        let registry: PointRegistry = vec![
            NamedPoint::new("B", Coordinates::new(0.0, 1.0)),
            NamedPoint::new("A", Coordinates::new(1.0, 0.0)),
        ]
        .into_iter()
        .collect();

        let entries: Vec<(&str, Coordinates)> = registry.entries().collect();
        assert_eq!(
            entries,
            vec![
                ("A", Coordinates::new(1.0, 0.0)),
                ("B", Coordinates::new(0.0, 1.0)),
            ]
        );
    }
}
