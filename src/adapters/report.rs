//! Human-readable summary of a proximity query.

use std::fmt;

use crate::ports::{Near, NearResult, RankedResult};

/// What a query found, with the reference point left out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Matches other than the reference
    pub found: usize,

    /// Result of `Near::northern_count`
    pub northern: usize,

    /// Match names in ranked order, reference excluded
    pub names: Vec<String>,
}

impl SearchReport {
    /// Summarize `ranked`, a result of searching around `reference`
    pub fn build<N: Near + ?Sized>(
        engine: &N,
        reference: &str,
        ranked: &RankedResult,
    ) -> NearResult<Self> {
        let northern = engine.northern_count(reference, ranked)?;
        let names: Vec<String> = ranked
            .names()
            .filter(|name| *name != reference)
            .map(str::to_string)
            .collect();

        Ok(Self {
            found: ranked.count_excluding(reference),
            northern,
            names,
        })
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search result:")?;
        writeln!(f, "{} city/cities found in the given radius.", self.found)?;
        writeln!(
            f,
            "{} cities are to the north of the selected city.",
            self.northern
        )?;
        writeln!(f, "City list:")?;
        for name in &self.names {
            writeln!(f, "{name}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{PointRegistry, ProximitySearchEngine};
    use crate::core::Coordinates;
    use crate::ports::Place;

    fn setup_registry() -> PointRegistry {
        let mut registry = PointRegistry::new();
        registry.add("A", Coordinates::new(0.0, 0.0));
        registry.add("B", Coordinates::new(0.0, 5.0));
        registry.add("C", Coordinates::new(0.0, -5.0));
        registry.add("D", Coordinates::new(3.0, 4.0));
        registry
    }

    #[test]
    fn test_build_report() {
        let registry = setup_registry();
        let engine = ProximitySearchEngine::new(&registry);
        let ranked = engine.search("A", 5.0, 0).unwrap();

        let report = SearchReport::build(&engine, "A", &ranked).unwrap();

        assert_eq!(report.found, 3);
        assert_eq!(report.northern, 1);
        assert_eq!(report.names, vec!["B", "C", "D"]);
    }

    #[test]
    fn test_empty_report() {
        let registry = setup_registry();
        let engine = ProximitySearchEngine::new(&registry);
        let ranked = engine.search("A", -1.0, 0).unwrap();

        let report = SearchReport::build(&engine, "A", &ranked).unwrap();

        assert_eq!(report.found, 0);
        assert_eq!(report.northern, 0);
        assert!(report.names.is_empty());
    }

    #[test]
    fn test_display() {
        let report = SearchReport {
            found: 2,
            northern: 1,
            names: vec!["B".to_string(), "C".to_string()],
        };

        assert_eq!(
            report.to_string(),
            "Search result:\n\
             2 city/cities found in the given radius.\n\
             1 cities are to the north of the selected city.\n\
             City list:\n\
             B\n\
             C\n"
        );
    }
}
