//! Divide-and-conquer Delaunay triangulation (Guibas–Stolfi).
//!
//! Purpose
//! - Deduplicate and sort the input, recursively triangulate halves of the
//!   sorted array on a quad-edge subdivision, zip adjacent halves together,
//!   and flatten the result into an edge list.
//!
//! Model
//! - `divide`: base cases of two and three points, midpoint split otherwise.
//!   Sub-ranges of at least `TriangulateCfg::parallel_threshold` points run
//!   both halves with `rayon::join` in separate arenas; the join is the only
//!   synchronization point.
//! - `merge`: lower common tangent, then the zipper that deletes edges failing
//!   the in-circle test and rises until the upper tangent.
//! - `extract`: ring walk from a temporary hull edge.
//!
//! Notes
//! - Output is a pure function of the deduplicated point set. Edge order is
//!   unspecified; only membership is meaningful.
//! - Results for near-degenerate inputs depend on `f64` rounding in the
//!   predicates (see `geom`).
//!
//! Code cross-refs: `geom::{dedup_sorted, is_ccw, in_circle}`, `quad_edge::Subdivision`.

mod divide;
mod extract;
mod merge;
mod types;

use tracing::debug;

use crate::error::{Result, TriangulationError};
use crate::geom::{dedup_sorted, Point};

pub use types::{Partition, TriangulateCfg, Triangulation, DEFAULT_PARALLEL_THRESHOLD};

use divide::Divider;
use extract::extract;

/// Delaunay triangulation edges of `points` with default tolerances.
///
/// Non-finite points are dropped and tolerant duplicates collapsed first.
/// Each undirected edge appears once, as a pair of (deduplicated) input points.
pub fn triangulate(points: &[Point]) -> Result<Vec<(Point, Point)>> {
    Ok(triangulate_with(points.iter().copied(), &TriangulateCfg::default())?.into_segments())
}

/// Delaunay triangulation with explicit configuration, returning vertices and index edges.
pub fn triangulate_with<I>(points: I, cfg: &TriangulateCfg) -> Result<Triangulation>
where
    I: IntoIterator<Item = Point>,
{
    let input: Vec<Point> = points.into_iter().collect();
    let pts = dedup_sorted(input.iter().copied(), cfg.geom.eps);
    if pts.len() < 2 {
        return Err(TriangulationError::InvalidInput { distinct: pts.len() });
    }
    debug!(
        input = input.len(),
        distinct = pts.len(),
        parallel = pts.len() >= cfg.parallel_threshold,
        "triangulate"
    );

    let (mut sub, top) = Divider::new(&pts, cfg.parallel_threshold).build(0, pts.len())?;
    let edges = extract(&mut sub, top, pts.len());
    if edges.len() != sub.edge_count() {
        return Err(TriangulationError::InvariantViolation(
            "edge walk did not reach every live edge",
        ));
    }
    debug!(edges = edges.len(), "triangulate done");

    Ok(Triangulation { points: pts, edges })
}

#[cfg(test)]
mod tests;
