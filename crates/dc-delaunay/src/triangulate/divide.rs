//! Recursive divide step with fork-join above a size threshold.

use crate::error::{Result, TriangulationError};
use crate::geom::{self, Point};
use crate::quad_edge::{Subdivision, VertexId};

use super::merge::merge;
use super::types::Partition;

/// Divides a sorted, deduplicated point slice and merges the halves.
pub(crate) struct Divider<'a> {
    points: &'a [Point],
    parallel_threshold: usize,
}

impl<'a> Divider<'a> {
    pub(crate) fn new(points: &'a [Point], parallel_threshold: usize) -> Self {
        Self {
            points,
            parallel_threshold: parallel_threshold.max(4),
        }
    }

    /// Triangulate `points[lo..hi]` into a fresh arena.
    ///
    /// Ranges of at least `parallel_threshold` points are split and both halves
    /// are built concurrently in their own arenas; the right arena is appended
    /// to the left one before the merge.
    pub(crate) fn build(&self, lo: usize, hi: usize) -> Result<(Subdivision, Partition)> {
        let n = hi.saturating_sub(lo);
        if n >= self.parallel_threshold {
            let mid = split_point(lo, hi);
            let (left, right) = rayon::join(|| self.build(lo, mid), || self.build(mid, hi));
            let (mut sub, lp) = left?;
            let (rsub, rp) = right?;
            let offset = sub.absorb(rsub);
            let merged = merge(&mut sub, self.points, lp, rp.shifted(offset));
            return Ok((sub, merged));
        }
        let mut sub = Subdivision::with_capacity(3 * n);
        let p = self.subdivide(&mut sub, lo, hi)?;
        Ok((sub, p))
    }

    /// Sequential recursion over `points[lo..hi]` in a shared arena.
    pub(crate) fn subdivide(&self, sub: &mut Subdivision, lo: usize, hi: usize) -> Result<Partition> {
        match hi.saturating_sub(lo) {
            0 | 1 => Err(TriangulationError::InvariantViolation(
                "subdivide reached a range with fewer than two points",
            )),
            2 => {
                let a = sub.make_edge(VertexId(lo), VertexId(lo + 1));
                Ok(Partition {
                    left: a,
                    right: a.sym(),
                })
            }
            3 => Ok(self.triangle(sub, lo)),
            _ => {
                let mid = split_point(lo, hi);
                let left = self.subdivide(sub, lo, mid)?;
                let right = self.subdivide(sub, mid, hi)?;
                Ok(merge(sub, self.points, left, right))
            }
        }
    }

    /// Base case for `points[lo..lo + 3]`: a triangle, or an open path when collinear.
    fn triangle(&self, sub: &mut Subdivision, lo: usize) -> Partition {
        let (s1, s2, s3) = (VertexId(lo), VertexId(lo + 1), VertexId(lo + 2));
        let a = sub.make_edge(s1, s2);
        let b = sub.make_edge(s2, s3);
        sub.splice(a.sym(), b);

        let (p1, p2, p3) = (&self.points[lo], &self.points[lo + 1], &self.points[lo + 2]);
        if geom::is_ccw(p1, p2, p3) {
            sub.connect_left(b, a);
            Partition {
                left: a,
                right: b.sym(),
            }
        } else if geom::is_ccw(p1, p3, p2) {
            let c = sub.connect_left(b, a);
            Partition {
                left: c.sym(),
                right: c,
            }
        } else {
            Partition {
                left: a,
                right: b.sym(),
            }
        }
    }
}

/// Left half gets the extra point of an odd range, so both halves keep at
/// least two points whenever the range has at least four.
#[inline]
fn split_point(lo: usize, hi: usize) -> usize {
    lo + (hi - lo + 1) / 2
}
