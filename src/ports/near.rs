//! # Near Port
//!
//! Trait for finding the points around a reference point.
//!
//! `Near: fn(reference, radius, metric) -> ranked names` - What's close?
//!
//! Implemented by search adapters (linear scan today).

use crate::core::{InvalidMetricCode, Metric};

/// Result type for near operations
pub type NearResult<T> = Result<T, SearchError>;

/// Errors that can occur during registry lookups and searches
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The named point is not registered
    #[error("unknown point: {name}")]
    UnknownPoint { name: String },

    /// The metric code is not one of 0, 1, 2
    #[error("invalid metric code: {code}")]
    InvalidMetric { code: i64 },
}

impl SearchError {
    pub fn unknown_point(name: impl Into<String>) -> Self {
        SearchError::UnknownPoint { name: name.into() }
    }
}

impl From<InvalidMetricCode> for SearchError {
    fn from(err: InvalidMetricCode) -> Self {
        SearchError::InvalidMetric { code: err.0 }
    }
}

/// One match: a point name and its distance from the reference
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    /// Distance from the reference point
    pub distance: f64,

    /// The matched point's name
    pub name: String,
}

impl RankedEntry {
    pub fn new(distance: f64, name: impl Into<String>) -> Self {
        Self {
            distance,
            name: name.into(),
        }
    }
}

/// Matches of a single query, ascending by distance
///
/// Entries at equal distance keep the registry's enumeration order.
/// The reference point itself is included (at distance 0) when the radius
/// is non-negative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedResult {
    entries: Vec<RankedEntry>,
}

impl RankedResult {
    /// Rank entries by distance
    ///
    /// The sort is stable: entries at equal distance keep the given order.
    /// Distances compare with `f64::total_cmp`, so NaN never panics.
    pub fn new(mut entries: Vec<RankedEntry>) -> Self {
        entries.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// The closest entry, if any
    pub fn first(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Names in ranked order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Number of entries not named `name`
    ///
    /// Use this to report matches without counting the reference itself.
    pub fn count_excluding(&self, name: &str) -> usize {
        self.entries.iter().filter(|e| e.name != name).count()
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Trait for finding points near a reference point
///
/// Search adapters implement this trait.
pub trait Near {
    /// Find every point within `radius` of `reference`, using a metric code
    ///
    /// The metric code is validated before the reference is resolved.
    fn search(&self, reference: &str, radius: f64, metric_code: i64) -> NearResult<RankedResult> {
        let metric = Metric::from_code(metric_code)?;
        self.search_with(reference, radius, metric)
    }

    /// Find every point within `radius` of `reference`
    ///
    /// A negative radius yields an empty result.
    fn search_with(&self, reference: &str, radius: f64, metric: Metric)
        -> NearResult<RankedResult>;

    /// Count ranked entries whose y-coordinate is below the reference's
    ///
    /// The reference itself is never counted.
    fn northern_count(&self, reference: &str, ranked: &RankedResult) -> NearResult<usize>;
}
