//! # Coordinates
//!
//! A position in the plane. The fundamental primitive.
//!
//! No range validation is applied: any pair of reals is a valid position.

use serde::{Deserialize, Serialize};

/// An immutable `(x, y)` pair
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    x: f64,
    y: f64,
}

impl Coordinates {
    /// Create coordinates from their two components
    ///
    /// # Example
    /// ```
    /// use proximity_search::Coordinates;
    /// let c = Coordinates::new(3.0, -4.0);
    /// assert_eq!(c.x(), 3.0);
    /// assert_eq!(c.y(), -4.0);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// First component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Second component. Larger values are further "north".
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Component-wise difference `self - other`
    ///
    /// # Example
    /// ```
    /// use proximity_search::Coordinates;
    /// let a = Coordinates::new(3.0, 4.0);
    /// let b = Coordinates::new(1.0, 1.0);
    /// assert_eq!(a.delta(&b), (2.0, 3.0));
    /// ```
    pub fn delta(&self, other: &Coordinates) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_coordinates() {
        let c = Coordinates::new(1.5, -2.5);
        assert_eq!(c.x(), 1.5);
        assert_eq!(c.y(), -2.5);
    }

    #[test]
    fn test_delta_is_antisymmetric() {
        let a = Coordinates::new(3.0, 4.0);
        let b = Coordinates::new(-1.0, 2.0);
        let (dx, dy) = a.delta(&b);
        let (rx, ry) = b.delta(&a);
        assert_eq!((dx, dy), (4.0, 2.0));
        assert_eq!((rx, ry), (-4.0, -2.0));
    }

    #[test]
    fn test_from_tuple() {
        let c: Coordinates = (7.0, 8.0).into();
        assert_eq!(c, Coordinates::new(7.0, 8.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinates::new(1.0, -2.5).to_string(), "(1, -2.5)");
    }
}
