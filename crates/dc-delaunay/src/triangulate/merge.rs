//! Merge of two adjacent sub-triangulations: lower common tangent, then the
//! zipper that walks up the seam legalizing candidates until the upper tangent.

use tracing::trace;

use crate::geom::{self, Point};
use crate::quad_edge::{EdgeRef, Subdivision, VertexId};

use super::types::Partition;

/// Merge `left` and `right` (x-separated, `left` entirely before `right`)
/// into one Delaunay triangulation and return its hull summary.
pub(crate) fn merge(sub: &mut Subdivision, points: &[Point], left: Partition, right: Partition) -> Partition {
    Zipper { sub, points }.run(left, right)
}

struct Zipper<'a> {
    sub: &'a mut Subdivision,
    points: &'a [Point],
}

impl Zipper<'_> {
    fn run(&mut self, left: Partition, right: Partition) -> Partition {
        let Partition { left: mut ldo, right: ldi } = left;
        let Partition { left: rdi, right: mut rdo } = right;

        let (ldi, rdi) = self.lower_common_tangent(ldi, rdi);

        // base edge runs right-to-left along the lower tangent
        let mut basel = self.sub.connect_left(rdi.sym(), ldi);
        if self.sub.org(ldi) == self.sub.org(ldo) {
            ldo = basel.sym();
        }
        if self.sub.org(rdi) == self.sub.org(rdo) {
            rdo = basel;
        }

        let mut rises = 0usize;
        loop {
            let lcand = self.left_candidate(basel);
            let rcand = self.right_candidate(basel);

            let lvalid = self.above(lcand, basel);
            let rvalid = self.above(rcand, basel);
            if !lvalid && !rvalid {
                break;
            }

            let pick_right = !lvalid
                || (rvalid
                    && self.in_circle(
                        self.sub.dest(rcand),
                        self.sub.dest(lcand),
                        self.sub.org(lcand),
                        self.sub.org(rcand),
                    ));
            basel = if pick_right {
                self.sub.connect_left(rcand, basel.sym())
            } else {
                self.sub.connect_right(lcand, basel).sym()
            };
            rises += 1;
        }
        trace!(rises, "merge");

        Partition { left: ldo, right: rdo }
    }

    /// Advance `ldi` counterclockwise and `rdi` clockwise along their hulls
    /// until neither origin sees past the other's edge.
    fn lower_common_tangent(&self, mut ldi: EdgeRef, mut rdi: EdgeRef) -> (EdgeRef, EdgeRef) {
        loop {
            if self.left_of(self.sub.org(rdi), ldi) {
                ldi = self.sub.lnext(ldi);
            } else if self.right_of(self.sub.org(ldi), rdi) {
                rdi = self.sub.rprev(rdi);
            } else {
                return (ldi, rdi);
            }
        }
    }

    /// First edge counterclockwise from the base around its left endpoint,
    /// after deleting the edges that fail the in-circle test.
    fn left_candidate(&mut self, basel: EdgeRef) -> EdgeRef {
        let mut lcand = self.sub.onext(basel.sym());
        if self.above(lcand, basel) {
            loop {
                let next = self.sub.onext(lcand);
                if !self.in_circle(
                    self.sub.dest(next),
                    self.sub.dest(basel),
                    self.sub.org(basel),
                    self.sub.dest(lcand),
                ) {
                    break;
                }
                self.sub.delete(lcand);
                lcand = next;
            }
        }
        lcand
    }

    /// Mirror of `left_candidate` around the right endpoint, clockwise.
    fn right_candidate(&mut self, basel: EdgeRef) -> EdgeRef {
        let mut rcand = self.sub.oprev(basel);
        if self.above(rcand, basel) {
            loop {
                let next = self.sub.oprev(rcand);
                if !self.in_circle(
                    self.sub.dest(next),
                    self.sub.dest(basel),
                    self.sub.org(basel),
                    self.sub.dest(rcand),
                ) {
                    break;
                }
                self.sub.delete(rcand);
                rcand = next;
            }
        }
        rcand
    }

    #[inline]
    fn pt(&self, v: VertexId) -> &Point {
        &self.points[v.0]
    }

    #[inline]
    fn left_of(&self, v: VertexId, e: EdgeRef) -> bool {
        geom::left_of(self.pt(v), self.pt(self.sub.org(e)), self.pt(self.sub.dest(e)))
    }

    #[inline]
    fn right_of(&self, v: VertexId, e: EdgeRef) -> bool {
        geom::right_of(self.pt(v), self.pt(self.sub.org(e)), self.pt(self.sub.dest(e)))
    }

    /// Far end of `cand` is strictly above the base, i.e. still ahead of the front.
    #[inline]
    fn above(&self, cand: EdgeRef, basel: EdgeRef) -> bool {
        self.right_of(self.sub.dest(cand), basel)
    }

    /// `p` strictly inside the circle through ccw `(a, b, c)`; never true when
    /// `p` is one of the three vertices.
    #[inline]
    fn in_circle(&self, p: VertexId, a: VertexId, b: VertexId, c: VertexId) -> bool {
        if p == a || p == b || p == c {
            return false;
        }
        geom::in_circle(self.pt(p), self.pt(a), self.pt(b), self.pt(c))
    }
}
