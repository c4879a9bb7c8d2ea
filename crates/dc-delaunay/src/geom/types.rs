//! Point type and tolerance configuration.
//!
//! - `GeomCfg`: centralizes the equality tolerance used for deduplication.
//! - `Point`: immutable `(x, y)` pair with tolerant equality and a total
//!   lexicographic order exposed as explicit methods, not operators.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Default coordinate tolerance for point equality.
pub const DEFAULT_EPS: f64 = 1e-4;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Two points are equal iff both coordinate differences are `< eps`.
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: DEFAULT_EPS }
    }
}

/// A point in the plane.
///
/// The derived `PartialEq` is exact bitwise-value equality; use
/// [`Point::tolerant_eq`] for the tolerance-aware notion used by the
/// triangulator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite. Non-finite points are treated as absent input.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// `|Δx| < eps && |Δy| < eps`.
    #[inline]
    pub fn tolerant_eq(&self, other: &Point, eps: f64) -> bool {
        (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
    }

    /// Lexicographic order on `(x, y)` using `f64::total_cmp`, with `-0.0`
    /// and `0.0` ordered equal.
    #[inline]
    pub fn lex_cmp(&self, other: &Point) -> Ordering {
        let (a, b) = (self.without_negative_zero(), other.without_negative_zero());
        a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
    }

    /// Same point with any `-0.0` coordinate replaced by `0.0`.
    #[inline]
    pub fn without_negative_zero(self) -> Point {
        Point::new(self.x + 0.0, self.y + 0.0)
    }

    /// Lexicographic order that reports `Equal` for tolerant-equal points.
    ///
    /// Tolerant equality is not transitive, so this is a total order only on
    /// sets that are already deduplicated with the same `eps`.
    #[inline]
    pub fn cmp_eps(&self, other: &Point, eps: f64) -> Ordering {
        if self.tolerant_eq(other, eps) {
            Ordering::Equal
        } else {
            self.lex_cmp(other)
        }
    }

    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f64 {
        (self.as_vector() - other.as_vector()).norm_squared()
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    #[inline]
    pub fn as_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}
