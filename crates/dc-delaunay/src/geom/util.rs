use std::collections::HashMap;

use super::predicates::orient2d;
use super::types::Point;

/// Drop non-finite points, sort lexicographically, and collapse tolerant duplicates.
///
/// Signed zeros are normalized to `0.0`. The first point of each tolerant
/// cluster in sorted order is kept. Because the sort is total, the result does
/// not depend on the input order.
pub fn dedup_sorted<I>(points: I, eps: f64) -> Vec<Point>
where
    I: IntoIterator<Item = Point>,
{
    let mut pts: Vec<Point> = points
        .into_iter()
        .filter(Point::is_finite)
        .map(Point::without_negative_zero)
        .collect();
    pts.sort_by(Point::lex_cmp);
    if eps.is_nan() || eps <= 0.0 {
        pts.dedup();
        return pts;
    }

    // Bucket kept points by eps-cell; a tolerant duplicate of `p` can only sit
    // in the 3x3 block of cells around `p`.
    let cell = |p: &Point| ((p.x / eps).floor() as i64, (p.y / eps).floor() as i64);
    let mut grid: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
    let mut kept: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts {
        let (cx, cy) = cell(&p);
        let dup = (-1i64..=1).any(|dx| {
            (-1i64..=1).any(|dy| {
                grid.get(&(cx.saturating_add(dx), cy.saturating_add(dy)))
                    .is_some_and(|ids| ids.iter().any(|&i| kept[i].tolerant_eq(&p, eps)))
            })
        });
        if !dup {
            grid.entry((cx, cy)).or_default().push(kept.len());
            kept.push(p);
        }
    }
    kept
}

/// Andrew’s monotone chain convex hull (returns strict hull corners in CCW order).
///
/// Collinear input yields its two extreme points; a single point yields itself.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(Point::lex_cmp);
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && orient2d(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && orient2d(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Number of points on the hull boundary: corners plus points lying exactly on hull edges.
///
/// For collinear (or fewer than three) points every point is on the boundary.
pub fn boundary_point_count(points: &[Point]) -> usize {
    let hull = convex_hull(points);
    if hull.len() < 3 {
        return points.len();
    }
    points
        .iter()
        .filter(|p| {
            (0..hull.len()).any(|k| {
                let a = &hull[k];
                let b = &hull[(k + 1) % hull.len()];
                orient2d(a, b, p) == 0.0
                    && p.x >= a.x.min(b.x)
                    && p.x <= a.x.max(b.x)
                    && p.y >= a.y.min(b.y)
                    && p.y <= a.y.max(b.y)
            })
        })
        .count()
}
