//! Independent checks of a `Triangulation`.
//!
//! These do not touch the quad-edge structure; they rebuild faces from the
//! edge list alone (angularly sorted vertex rings), so they can catch defects
//! in the triangulator itself.

use std::collections::HashSet;

use thiserror::Error;

use crate::geom::{boundary_point_count, convex_hull, in_circle_det, is_ccw, orient2d, Point};
use crate::quad_edge::VertexId;
use crate::triangulate::Triangulation;

/// Relative tolerance for the empty-circumcircle check.
pub const DEFAULT_DELAUNAY_TOL: f64 = 1e-10;

/// Ways a triangulation can be wrong.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("edge {0:?} references a vertex outside the point set")]
    ForeignEndpoint([VertexId; 2]),

    #[error("edge {0:?} is a loop")]
    SelfLoop([VertexId; 2]),

    #[error("edge {0:?} is reported more than once")]
    DuplicateEdge([VertexId; 2]),

    #[error("edges {first:?} and {second:?} cross")]
    Crossing {
        first: [VertexId; 2],
        second: [VertexId; 2],
    },

    #[error("vertex {point:?} lies inside the circumcircle of triangle {triangle:?}")]
    DelaunayViolation {
        triangle: [VertexId; 3],
        point: VertexId,
    },

    #[error("expected {expected} edges for this point set, found {found}")]
    EdgeCount { expected: usize, found: usize },
}

/// Counts gathered by a successful [`validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub vertices: usize,
    pub edges: usize,
    pub triangles: usize,
    pub hull_boundary: usize,
}

/// Run every check; first failure wins.
pub fn validate(tri: &Triangulation, tol: f64) -> Result<Summary, ValidationError> {
    check_endpoints(tri)?;
    check_edge_count(tri)?;
    check_planar(tri)?;
    let faces = triangles(tri);
    check_delaunay_faces(tri, &faces, tol)?;
    Ok(Summary {
        vertices: tri.vertex_count(),
        edges: tri.edge_count(),
        triangles: faces.len(),
        hull_boundary: boundary_point_count(&tri.points),
    })
}

/// Every endpoint is a vertex; no loops; no edge twice.
pub fn check_endpoints(tri: &Triangulation) -> Result<(), ValidationError> {
    let n = tri.vertex_count();
    let mut seen = HashSet::with_capacity(tri.edge_count());
    for &edge in &tri.edges {
        let [a, b] = edge;
        if a.0 >= n || b.0 >= n {
            return Err(ValidationError::ForeignEndpoint(edge));
        }
        if a == b {
            return Err(ValidationError::SelfLoop(edge));
        }
        if !seen.insert((a.min(b), a.max(b))) {
            return Err(ValidationError::DuplicateEdge(edge));
        }
    }
    Ok(())
}

/// Edges a full triangulation of `points` must have.
///
/// With `b` points on the hull boundary, `3n − 3 − b`; this is `3n − 2h − 3`
/// when no point lies in the relative interior of a hull edge. Collinear sets
/// give the path, `n − 1`.
pub fn expected_edge_count(points: &[Point]) -> usize {
    let n = points.len();
    if n < 2 {
        return 0;
    }
    if convex_hull(points).len() < 3 {
        return n - 1;
    }
    3 * n - 3 - boundary_point_count(points)
}

pub fn check_edge_count(tri: &Triangulation) -> Result<(), ValidationError> {
    let expected = expected_edge_count(&tri.points);
    if tri.edge_count() != expected {
        return Err(ValidationError::EdgeCount {
            expected,
            found: tri.edge_count(),
        });
    }
    Ok(())
}

/// No two edges meet except at a shared endpoint (quadratic scan).
pub fn check_planar(tri: &Triangulation) -> Result<(), ValidationError> {
    for (i, &first) in tri.edges.iter().enumerate() {
        for &second in &tri.edges[i + 1..] {
            if segments_cross(tri, first, second) {
                return Err(ValidationError::Crossing { first, second });
            }
        }
    }
    Ok(())
}

fn segments_cross(tri: &Triangulation, [a, b]: [VertexId; 2], [c, d]: [VertexId; 2]) -> bool {
    if a == c || a == d || b == c || b == d {
        // sharing an endpoint, they can still overlap if collinear
        let shared = if a == c || a == d { a } else { b };
        let p = if shared == a { b } else { a };
        let q = if shared == c { d } else { c };
        let (s, p, q) = (tri.point(shared), tri.point(p), tri.point(q));
        return orient2d(&s, &p, &q) == 0.0 && (p.x - s.x) * (q.x - s.x) + (p.y - s.y) * (q.y - s.y) > 0.0;
    }
    let (pa, pb, pc, pd) = (tri.point(a), tri.point(b), tri.point(c), tri.point(d));
    let o1 = orient2d(&pa, &pb, &pc);
    let o2 = orient2d(&pa, &pb, &pd);
    let o3 = orient2d(&pc, &pd, &pa);
    let o4 = orient2d(&pc, &pd, &pb);
    if o1 * o2 < 0.0 && o3 * o4 < 0.0 {
        return true;
    }
    // an endpoint lying on the other segment's interior
    (o1 == 0.0 && on_segment(&pc, &pa, &pb))
        || (o2 == 0.0 && on_segment(&pd, &pa, &pb))
        || (o3 == 0.0 && on_segment(&pa, &pc, &pd))
        || (o4 == 0.0 && on_segment(&pb, &pc, &pd))
}

#[inline]
fn on_segment(p: &Point, a: &Point, b: &Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Bounded triangular faces implied by the edge list, each once, counterclockwise.
///
/// For a directed edge `u → v`, the face on its left is `(u, v, w)` where `w`
/// precedes `u` in the counterclockwise ring of `v`.
pub fn triangles(tri: &Triangulation) -> Vec<[VertexId; 3]> {
    let rings = sorted_rings(tri);
    let adjacent: HashSet<(VertexId, VertexId)> = tri
        .edges
        .iter()
        .flat_map(|&[a, b]| [(a, b), (b, a)])
        .collect();

    let mut out = Vec::new();
    for &[a, b] in &tri.edges {
        for (u, v) in [(a, b), (b, a)] {
            let ring = &rings[v.0];
            let Some(k) = ring.iter().position(|&x| x == u) else {
                continue;
            };
            let w = ring[(k + ring.len() - 1) % ring.len()];
            // emit from the edge whose origin is the smallest id
            if w == u || u > v || u > w || !adjacent.contains(&(u, w)) {
                continue;
            }
            if is_ccw(&tri.point(u), &tri.point(v), &tri.point(w)) {
                out.push([u, v, w]);
            }
        }
    }
    out
}

fn sorted_rings(tri: &Triangulation) -> Vec<Vec<VertexId>> {
    let mut rings = tri.neighbors();
    for (i, ring) in rings.iter_mut().enumerate() {
        let c = tri.points[i];
        ring.sort_by(|p, q| {
            let (pp, qq) = (tri.point(*p), tri.point(*q));
            let ap = (pp.y - c.y).atan2(pp.x - c.x);
            let aq = (qq.y - c.y).atan2(qq.x - c.x);
            ap.total_cmp(&aq)
        });
    }
    rings
}

/// No vertex lies strictly inside the circumcircle of any face.
pub fn check_delaunay(tri: &Triangulation, tol: f64) -> Result<(), ValidationError> {
    check_delaunay_faces(tri, &triangles(tri), tol)
}

fn check_delaunay_faces(tri: &Triangulation, faces: &[[VertexId; 3]], tol: f64) -> Result<(), ValidationError> {
    for &triangle in faces {
        let [a, b, c] = triangle.map(|v| tri.point(v));
        for (i, p) in tri.points.iter().enumerate() {
            let point = VertexId(i);
            if triangle.contains(&point) {
                continue;
            }
            let scale = p.distance_squared(&a) + p.distance_squared(&b) + p.distance_squared(&c);
            if in_circle_det(p, &a, &b, &c) > tol * scale * scale {
                return Err(ValidationError::DelaunayViolation { triangle, point });
            }
        }
    }
    Ok(())
}
