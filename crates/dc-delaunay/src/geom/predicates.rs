//! Orientation and in-circle predicates (plain `f64`, strict inequalities).

use nalgebra::Matrix2;

use super::types::Point;

/// Twice the signed area of triangle `(a, b, c)`:
/// `(b.x−a.x)(c.y−a.y) − (b.y−a.y)(c.x−a.x)`.
///
/// Positive for counterclockwise, negative for clockwise, zero if collinear.
#[inline]
pub fn orient2d(a: &Point, b: &Point, c: &Point) -> f64 {
    let m = Matrix2::from_columns(&[b.as_vector() - a.as_vector(), c.as_vector() - a.as_vector()]);
    m.determinant()
}

/// Strictly counterclockwise. Collinear and clockwise triples are `false`.
#[inline]
pub fn is_ccw(a: &Point, b: &Point, c: &Point) -> bool {
    orient2d(a, b, c) > 0.0
}

/// `p` lies strictly left of the directed line `org → dest`.
#[inline]
pub fn left_of(p: &Point, org: &Point, dest: &Point) -> bool {
    is_ccw(p, org, dest)
}

/// `p` lies strictly right of the directed line `org → dest`.
#[inline]
pub fn right_of(p: &Point, org: &Point, dest: &Point) -> bool {
    is_ccw(p, dest, org)
}

/// Lifted 3×3 in-circle determinant with `p` translated to the origin.
///
/// Positive iff `p` lies inside the circle through `a, b, c` when `(a, b, c)`
/// is counterclockwise; the sign flips for a clockwise triple.
#[inline]
pub fn in_circle_det(p: &Point, a: &Point, b: &Point, c: &Point) -> f64 {
    let adx = a.x - p.x;
    let ady = a.y - p.y;
    let bdx = b.x - p.x;
    let bdy = b.y - p.y;
    let cdx = c.x - p.x;
    let cdy = c.y - p.y;

    let alift = adx * adx + ady * ady;
    let blift = bdx * bdx + bdy * bdy;
    let clift = cdx * cdx + cdy * cdy;

    alift * (bdx * cdy - bdy * cdx) + blift * (cdx * ady - cdy * adx) + clift * (adx * bdy - ady * bdx)
}

/// `p` lies strictly inside the circumcircle of the counterclockwise triangle `(a, b, c)`.
///
/// Points on the circle are not inside. Coincidence by vertex identity is
/// handled one level up (`triangulate::merge`), where vertices carry ids.
#[inline]
pub fn in_circle(p: &Point, a: &Point, b: &Point, c: &Point) -> bool {
    in_circle_det(p, a, b, c) > 0.0
}
