//! # Flat Search Adapter
//!
//! Brute force radius search.
//! Compares the reference against ALL points - O(n) per query, plus an
//! O(m log m) sort of the m matches.
//!
//! Nothing is cached between queries; every search is recomputed from the
//! registry.

use crate::core::Metric;
use crate::ports::{Near, NearResult, Place, RankedEntry, RankedResult};

/// Linear-scan search engine over a borrowed registry
pub struct ProximitySearchEngine<'a, P: Place + ?Sized> {
    registry: &'a P,
}

impl<'a, P: Place + ?Sized> ProximitySearchEngine<'a, P> {
    /// Create an engine reading from `registry`
    pub fn new(registry: &'a P) -> Self {
        Self { registry }
    }
}

impl<P: Place + ?Sized> Near for ProximitySearchEngine<'_, P> {
    fn search_with(
        &self,
        reference: &str,
        radius: f64,
        metric: Metric,
    ) -> NearResult<RankedResult> {
        let origin = self.registry.lookup(reference)?;

        // (distance, enumeration index, name)
        let mut matches: Vec<(f64, usize, &str)> = self
            .registry
            .entries()
            .enumerate()
            .filter_map(|(index, (name, coordinates))| {
                let distance = metric.distance(&origin, &coordinates);
                (distance <= radius).then_some((distance, index, name))
            })
            .collect();

        // Ties keep registry enumeration order
        matches.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        tracing::debug!(
            reference,
            radius,
            metric = metric.name(),
            scanned = self.registry.len(),
            matched = matches.len(),
            "Proximity search"
        );

        Ok(RankedResult::new(
            matches
                .into_iter()
                .map(|(distance, _, name)| RankedEntry::new(distance, name))
                .collect(),
        ))
    }

    fn northern_count(&self, reference: &str, ranked: &RankedResult) -> NearResult<usize> {
        let reference_y = self.registry.lookup(reference)?.y();

        let mut count = 0;
        for entry in ranked {
            let coordinates = self.registry.lookup(&entry.name)?;
            if entry.name == reference {
                continue;
            }
            if coordinates.y() < reference_y {
                count += 1;
            }
        }

        Ok(count)
    }
}
