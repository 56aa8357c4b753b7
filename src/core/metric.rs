//! # Metric
//!
//! Distance functions over a coordinate delta.
//!
//! Callers select a metric by integer code:
//! - `0` - Euclidean (L2)
//! - `1` - Chebyshev (L∞)
//! - `2` - Manhattan (L1)
//!
//! Every metric returns a value in [0, ∞) where 0 means identical.

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A metric code outside the supported set
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid metric code {0}: expected 0 (Euclidean), 1 (Chebyshev) or 2 (Manhattan)")]
pub struct InvalidMetricCode(pub i64);

/// Supported distance metrics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Straight-line distance, `sqrt(dx² + dy²)`
    #[default]
    Euclidean,

    /// Largest axis difference, `max(|dx|, |dy|)`
    Chebyshev,

    /// Sum of axis differences, `|dx| + |dy|`
    Manhattan,
}

impl Metric {
    /// All metrics, in code order
    pub const ALL: [Metric; 3] = [Metric::Euclidean, Metric::Chebyshev, Metric::Manhattan];

    /// Resolve a metric from its integer code
    ///
    /// # Example
    /// ```
    /// use proximity_search::Metric;
    /// assert_eq!(Metric::from_code(1).unwrap(), Metric::Chebyshev);
    /// assert!(Metric::from_code(9).is_err());
    /// ```
    pub fn from_code(code: i64) -> Result<Self, InvalidMetricCode> {
        match code {
            0 => Ok(Metric::Euclidean),
            1 => Ok(Metric::Chebyshev),
            2 => Ok(Metric::Manhattan),
            other => Err(InvalidMetricCode(other)),
        }
    }

    /// The integer code of this metric
    pub fn code(self) -> i64 {
        match self {
            Metric::Euclidean => 0,
            Metric::Chebyshev => 1,
            Metric::Manhattan => 2,
        }
    }

    /// Name of this metric (for logging/config)
    pub fn name(self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Chebyshev => "chebyshev",
            Metric::Manhattan => "manhattan",
        }
    }

    /// Apply the metric to a coordinate delta
    pub fn norm(self, dx: f64, dy: f64) -> f64 {
        match self {
            Metric::Euclidean => dx.hypot(dy),
            Metric::Chebyshev => dx.abs().max(dy.abs()),
            Metric::Manhattan => dx.abs() + dy.abs(),
        }
    }

    /// Distance between two positions
    ///
    /// # Example
    /// ```
    /// use proximity_search::{Coordinates, Metric};
    /// let a = Coordinates::new(0.0, 0.0);
    /// let b = Coordinates::new(3.0, 4.0);
    /// assert_eq!(Metric::Euclidean.distance(&a, &b), 5.0);
    /// assert_eq!(Metric::Chebyshev.distance(&a, &b), 4.0);
    /// assert_eq!(Metric::Manhattan.distance(&a, &b), 7.0);
    /// ```
    pub fn distance(self, a: &Coordinates, b: &Coordinates) -> f64 {
        let (dx, dy) = a.delta(b);
        self.norm(dx, dy)
    }
}

impl TryFrom<i64> for Metric {
    type Error = InvalidMetricCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Metric::from_code(code)
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
