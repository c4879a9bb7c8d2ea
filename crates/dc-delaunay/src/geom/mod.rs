//! Planar points, tolerances, and the orientation/in-circle predicates.
//!
//! Purpose
//! - Provide the `Point` value type with explicit tolerant equality and a
//!   lexicographic total order, plus the predicates every higher layer uses.
//! - Keep tolerances in one place (`GeomCfg`) so callers pass them explicitly.
//!
//! Conventions
//! - Predicates are strict: collinear triples are not counterclockwise and
//!   points on a circumcircle are not inside it.
//! - Near-collinear and near-cocircular configurations may produce
//!   inconsistent answers under floating-point rounding. This is a known,
//!   accepted limitation; no exact-arithmetic fallback is attempted.
//!
//! Code cross-refs: `quad_edge::Subdivision`, `triangulate::merge`.

pub mod predicates;
mod types;
mod util;

pub use predicates::{in_circle, in_circle_det, is_ccw, left_of, orient2d, right_of};
pub use types::{GeomCfg, Point, DEFAULT_EPS};
pub use util::{boundary_point_count, convex_hull, dedup_sorted};
