//! Configuration, the divide/merge contract, and the result type.

use serde::Serialize;

use crate::geom::{GeomCfg, Point};
use crate::quad_edge::{EdgeRef, VertexId};

/// Sub-ranges with at least this many points fork into parallel tasks.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Triangulation configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangulateCfg {
    pub geom: GeomCfg,
    /// Minimum sub-range size that is split with `rayon::join`. Smaller
    /// ranges recurse sequentially in a single arena. `usize::MAX` disables
    /// parallelism; values below 4 are treated as 4.
    pub parallel_threshold: usize,
}

impl Default for TriangulateCfg {
    fn default() -> Self {
        Self {
            geom: GeomCfg::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl TriangulateCfg {
    /// Default tolerances, never forks.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }
}

/// Hull summary of one sub-triangulation, passed from divide to merge.
///
/// - `left`: counterclockwise hull edge leaving the leftmost vertex.
/// - `right`: clockwise hull edge leaving the rightmost vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partition {
    pub left: EdgeRef,
    pub right: EdgeRef,
}

impl Partition {
    #[inline]
    pub(crate) fn shifted(self, quads: usize) -> Self {
        Self {
            left: self.left.shifted(quads),
            right: self.right.shifted(quads),
        }
    }
}

/// Result of a run: the deduplicated, lexicographically sorted vertices and
/// every undirected triangulation edge exactly once, as vertex-index pairs.
///
/// Edge order and the direction within each pair are unspecified.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Triangulation {
    pub points: Vec<Point>,
    pub edges: Vec<[VertexId; 2]>,
}

impl Triangulation {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn point(&self, v: VertexId) -> Point {
        self.points[v.0]
    }

    /// Edges as coordinate pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.edges.iter().map(|&[a, b]| (self.point(a), self.point(b)))
    }

    pub fn into_segments(self) -> Vec<(Point, Point)> {
        self.segments().collect()
    }

    /// Adjacency lists indexed by vertex id.
    pub fn neighbors(&self) -> Vec<Vec<VertexId>> {
        let mut adj = vec![Vec::new(); self.points.len()];
        for &[a, b] in &self.edges {
            adj[a.0].push(b);
            adj[b.0].push(a);
        }
        adj
    }
}
