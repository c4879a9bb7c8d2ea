use super::divide::Divider;
use super::*;
use crate::geom::{boundary_point_count, in_circle, Point};
use crate::quad_edge::{Subdivision, VertexId};
use crate::validate::{validate, DEFAULT_DELAUNAY_TOL};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Undirected edges as sorted index pairs, sorted.
fn canonical(t: &Triangulation) -> Vec<[usize; 2]> {
    let mut out: Vec<[usize; 2]> = t
        .edges
        .iter()
        .map(|&[a, b]| if a < b { [a.0, b.0] } else { [b.0, a.0] })
        .collect();
    out.sort_unstable();
    out
}

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| p(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

#[test]
fn single_triangle() {
    let edges = triangulate(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]).unwrap();
    assert_eq!(edges.len(), 3);
    let t = triangulate_with([p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)], &TriangulateCfg::default()).unwrap();
    assert_eq!(canonical(&t), vec![[0, 1], [0, 2], [1, 2]]);
}

#[test]
fn unit_square_has_sides_and_one_diagonal() {
    let pts = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
    let t = triangulate_with(pts, &TriangulateCfg::default()).unwrap();
    // sorted: 0=(0,0) 1=(0,1) 2=(1,0) 3=(1,1)
    let e = canonical(&t);
    assert_eq!(e.len(), 5);
    for side in [[0, 1], [0, 2], [1, 3], [2, 3]] {
        assert!(e.contains(&side), "missing side {side:?}");
    }
    let diagonals = [[0, 3], [1, 2]].iter().filter(|d| e.contains(d)).count();
    assert_eq!(diagonals, 1);
    validate(&t, DEFAULT_DELAUNAY_TOL).unwrap();
}

#[test]
fn non_square_quad_picks_the_delaunay_diagonal() {
    // kite: the short diagonal (2,-0.5)-(2,0.5) is the Delaunay one
    let pts = [p(0.0, 0.0), p(2.0, -0.5), p(4.0, 0.0), p(2.0, 0.5)];
    let t = triangulate_with(pts, &TriangulateCfg::default()).unwrap();
    // sorted: 0=(0,0) 1=(2,-0.5) 2=(2,0.5) 3=(4,0)
    let e = canonical(&t);
    assert_eq!(e.len(), 5);
    assert!(e.contains(&[1, 2]));
    assert!(!e.contains(&[0, 3]));
}

#[test]
fn collinear_input_is_a_path() {
    let edges = triangulate(&[p(2.0, 0.0), p(0.0, 0.0), p(1.0, 0.0)]).unwrap();
    assert_eq!(edges.len(), 2);
    let t = triangulate_with([p(2.0, 0.0), p(0.0, 0.0), p(1.0, 0.0)], &TriangulateCfg::default()).unwrap();
    assert_eq!(canonical(&t), vec![[0, 1], [1, 2]]);

    // longer lines, horizontal and vertical, exercise the merge on degenerate hulls
    let horizontal: Vec<Point> = (0..17).map(|i| p(i as f64, 0.0)).collect();
    let t = triangulate_with(horizontal, &TriangulateCfg::default()).unwrap();
    assert_eq!(t.edge_count(), 16);
    validate(&t, DEFAULT_DELAUNAY_TOL).unwrap();
    let vertical: Vec<Point> = (0..9).map(|i| p(0.0, i as f64 * 0.5)).collect();
    let t = triangulate_with(vertical, &TriangulateCfg::default()).unwrap();
    assert_eq!(t.edge_count(), 8);
    validate(&t, DEFAULT_DELAUNAY_TOL).unwrap();
}

#[test]
fn signed_zeros_keep_geometric_order() {
    let t = triangulate_with([p(-0.0, 1.0), p(0.0, 0.0), p(0.0, 2.0)], &TriangulateCfg::default()).unwrap();
    assert_eq!(t.points, vec![p(0.0, 0.0), p(0.0, 1.0), p(0.0, 2.0)]);
    assert_eq!(canonical(&t), vec![[0, 1], [1, 2]]);
    crate::validate::check_planar(&t).unwrap();

    let mixed = [p(1.0, -0.0), p(-0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(-0.0, 0.5)];
    let t = triangulate_with(mixed, &TriangulateCfg::default()).unwrap();
    assert_eq!(t.vertex_count(), 5);
    validate(&t, DEFAULT_DELAUNAY_TOL).unwrap();
}

#[test]
fn long_vertical_column_is_a_path() {
    let column: Vec<Point> = (0..20_000)
        .map(|i| p(if i % 3 == 0 { -0.0 } else { 0.0 }, (i * 7919 % 20_000) as f64 * 0.01))
        .collect();
    let t = triangulate_with(column, &TriangulateCfg::default()).unwrap();
    assert_eq!(t.vertex_count(), 20_000);
    assert_eq!(t.edge_count(), 19_999);
    crate::validate::check_planar(&t).unwrap();
}

#[test]
fn two_points_give_one_edge() {
    let edges = triangulate(&[p(0.0, 0.0), p(3.0, 1.0)]).unwrap();
    assert_eq!(edges, vec![(p(0.0, 0.0), p(3.0, 1.0))]);
}

#[test]
fn too_few_distinct_points_is_invalid_input() {
    assert_eq!(triangulate(&[]), Err(TriangulationError::InvalidInput { distinct: 0 }));
    assert_eq!(
        triangulate(&[p(1.0, 1.0)]),
        Err(TriangulationError::InvalidInput { distinct: 1 })
    );
    assert_eq!(
        triangulate(&[p(1.0, 1.0), p(1.00001, 1.0), p(f64::NAN, 2.0)]),
        Err(TriangulationError::InvalidInput { distinct: 1 })
    );
}

#[test]
fn three_point_base_cases_honor_the_partition_contract() {
    let cases = [
        // ccw, cw, collinear (sorted order)
        [p(0.0, 0.0), p(1.0, -1.0), p(2.0, 0.0)],
        [p(0.0, 0.0), p(1.0, 1.0), p(2.0, 0.0)],
        [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)],
    ];
    for pts in cases {
        let mut sub = Subdivision::new();
        let part = Divider::new(&pts, usize::MAX).subdivide(&mut sub, 0, 3).unwrap();
        assert_eq!(sub.org(part.left), VertexId(0));
        assert_eq!(sub.org(part.right), VertexId(2));
        // hull edges leave the extreme points with the outer face on the correct side
        let l_dest = pts[sub.dest(part.left).0];
        let r_dest = pts[sub.dest(part.right).0];
        let third = |e| pts[3 - sub.org(e).0 - sub.dest(e).0];
        if sub.edge_count() == 3 {
            assert!(crate::geom::left_of(&third(part.left), &pts[0], &l_dest));
            assert!(crate::geom::right_of(&third(part.right), &pts[2], &r_dest));
        }
    }
}

#[test]
fn empty_range_is_an_invariant_violation() {
    let pts = [p(0.0, 0.0), p(1.0, 0.0)];
    let mut sub = Subdivision::new();
    let err = Divider::new(&pts, usize::MAX).subdivide(&mut sub, 1, 1).unwrap_err();
    assert!(matches!(err, TriangulationError::InvariantViolation(_)));
}

#[test]
fn random_cloud_is_delaunay_and_satisfies_euler() {
    let pts = random_points(300, 7);
    let t = triangulate_with(pts, &TriangulateCfg::default()).unwrap();
    let n = t.vertex_count();
    let h = boundary_point_count(&t.points);
    assert_eq!(t.edge_count(), 3 * n - h - 3);
    let s = validate(&t, DEFAULT_DELAUNAY_TOL).unwrap();
    assert_eq!(s.triangles, 2 * n - h - 2);
}

#[test]
fn every_edge_has_empty_adjacent_circumcircles() {
    // same property as the validator, checked through the point API
    let pts = random_points(80, 11);
    let t = triangulate_with(pts, &TriangulateCfg::default()).unwrap();
    for [a, b, c] in crate::validate::triangles(&t) {
        let (pa, pb, pc) = (t.point(a), t.point(b), t.point(c));
        for (i, q) in t.points.iter().enumerate() {
            if i == a.0 || i == b.0 || i == c.0 {
                continue;
            }
            assert!(!in_circle(q, &pa, &pb, &pc));
        }
    }
}

#[test]
fn grid_with_cocircular_quads_is_valid() {
    let pts: Vec<Point> = (0..12)
        .flat_map(|i| (0..12).map(move |j| p(i as f64, j as f64)))
        .collect();
    let t = triangulate_with(pts, &TriangulateCfg::default()).unwrap();
    // 144 points, 44 on the boundary
    assert_eq!(t.edge_count(), 3 * 144 - 3 - 44);
    validate(&t, DEFAULT_DELAUNAY_TOL).unwrap();
}

#[test]
fn parallel_and_sequential_agree() {
    let pts = random_points(2000, 3);
    let seq = triangulate_with(pts.iter().copied(), &TriangulateCfg::sequential()).unwrap();
    let par = triangulate_with(
        pts,
        &TriangulateCfg {
            parallel_threshold: 64,
            ..TriangulateCfg::default()
        },
    )
    .unwrap();
    assert_eq!(seq.points, par.points);
    assert_eq!(canonical(&seq), canonical(&par));
}

#[test]
fn input_order_and_duplicates_do_not_matter() {
    let pts = random_points(200, 5);
    let base = triangulate_with(pts.iter().copied(), &TriangulateCfg::default()).unwrap();

    let mut noisy = pts.clone();
    noisy.reverse();
    noisy.extend(pts.iter().take(40).copied());
    noisy.extend(pts.iter().skip(40).take(40).map(|q| p(q.x + 1e-6, q.y + 1e-6)));
    noisy.push(p(f64::NAN, 0.0));
    let other = triangulate_with(noisy, &TriangulateCfg::default()).unwrap();

    assert_eq!(base.points, other.points);
    assert_eq!(canonical(&base), canonical(&other));
}

#[test]
fn custom_tolerance_changes_what_counts_as_duplicate() {
    let pts = [p(0.0, 0.0), p(0.05, 0.0), p(1.0, 0.0), p(0.0, 1.0)];
    let fine = triangulate_with(pts, &TriangulateCfg::default()).unwrap();
    assert_eq!(fine.vertex_count(), 4);
    let coarse_cfg = TriangulateCfg {
        geom: crate::geom::GeomCfg { eps: 0.1 },
        ..TriangulateCfg::default()
    };
    let coarse = triangulate_with(pts, &coarse_cfg).unwrap();
    assert_eq!(coarse.vertex_count(), 3);
    assert_eq!(coarse.edge_count(), 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_sets_are_valid_triangulations(
        raw in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 3..60)
    ) {
        let pts: Vec<Point> = raw.into_iter().map(Point::from).collect();
        let t = triangulate_with(pts.iter().copied(), &TriangulateCfg::default()).unwrap();
        for &[a, b] in &t.edges {
            prop_assert!(pts.iter().any(|q| q.tolerant_eq(&t.point(a), 1e-4)));
            prop_assert!(pts.iter().any(|q| q.tolerant_eq(&t.point(b), 1e-4)));
        }
        prop_assert!(validate(&t, DEFAULT_DELAUNAY_TOL).is_ok());
    }

    #[test]
    fn signed_zero_and_shared_x_sets_are_planar(
        raw in prop::collection::vec(
            (prop_oneof![Just(0.0f64), Just(-0.0f64), Just(1.0f64), -3.0f64..3.0], -3.0f64..3.0),
            3..50,
        )
    ) {
        let pts: Vec<Point> = raw.into_iter().map(Point::from).collect();
        match triangulate_with(pts, &TriangulateCfg::default()) {
            Ok(t) => {
                prop_assert!(t.points.iter().all(|q| q.x.is_sign_positive() || q.x != 0.0));
                prop_assert!(crate::validate::check_endpoints(&t).is_ok());
                prop_assert!(crate::validate::check_planar(&t).is_ok());
                prop_assert!(crate::validate::check_edge_count(&t).is_ok());
            }
            Err(e) => prop_assert_eq!(e, TriangulationError::InvalidInput { distinct: 1 }),
        }
    }

    #[test]
    fn permutations_give_the_same_edges(
        raw in prop::collection::vec((-5.0f64..5.0, -5.0f64..5.0), 2..40),
        k in 0usize..40,
    ) {
        let pts: Vec<Point> = raw.into_iter().map(Point::from).collect();
        let mut rotated = pts.clone();
        rotated.rotate_left(k % pts.len());
        let a = triangulate_with(pts, &TriangulateCfg::default()).unwrap();
        let b = triangulate_with(rotated, &TriangulateCfg::default()).unwrap();
        prop_assert_eq!(canonical(&a), canonical(&b));
    }
}
