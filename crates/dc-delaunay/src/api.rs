//! Curated surface for the CLI, benches and ad-hoc experiments (UNSTABLE).
//!
//! Important
//! - Prefer these re-exports over reaching into submodules; internal paths
//!   move more often than the names here.

// Geometry
pub use crate::geom::{
    boundary_point_count, convex_hull, dedup_sorted, in_circle, is_ccw, orient2d, GeomCfg, Point,
    DEFAULT_EPS,
};
// Quad-edge subdivision
pub use crate::quad_edge::{EdgeRef, Subdivision, VertexId};
// Triangulation
pub use crate::triangulate::{
    triangulate, triangulate_with, TriangulateCfg, Triangulation, DEFAULT_PARALLEL_THRESHOLD,
};
pub use crate::error::TriangulationError;
// Checks
pub use crate::validate::{
    check_delaunay, check_edge_count, check_planar, expected_edge_count, triangles, validate,
    Summary, ValidationError, DEFAULT_DELAUNAY_TOL,
};
// Sampling
pub use crate::sample::{draw_cloud, CloudCfg, CloudKind, ReplayToken};
