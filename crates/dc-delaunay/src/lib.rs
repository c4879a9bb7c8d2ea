//! Divide-and-conquer Delaunay triangulation of planar point sets.
//!
//! Layout
//! - `geom`: points, tolerances, orientation and in-circle predicates, dedup, hulls.
//! - `quad_edge`: arena-backed quad-edge subdivision (handles, splice, connect, delete).
//! - `triangulate`: the recursive divide, the merge zipper, and edge extraction.
//! - `validate`: independent planarity, edge-count and Delaunay checks of a result.
//! - `sample`: reproducible point clouds for tests, benches and the CLI.
//!
//! API Policy
//! - `triangulate` and `triangulate_with` are the entry points; everything else
//!   is exposed for tests, benches and the CLI and may change.

pub mod api;
pub mod error;
pub mod geom;
pub mod quad_edge;
pub mod sample;
pub mod triangulate;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Result, TriangulationError};
pub use geom::{GeomCfg, Point};
pub use triangulate::{triangulate, triangulate_with, TriangulateCfg, Triangulation};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::TriangulationError;
    pub use crate::geom::{GeomCfg, Point, DEFAULT_EPS};
    pub use crate::sample::{draw_cloud, CloudCfg, CloudKind, ReplayToken};
    pub use crate::triangulate::{
        triangulate, triangulate_with, TriangulateCfg, Triangulation, DEFAULT_PARALLEL_THRESHOLD,
    };
    pub use crate::validate::{validate, Summary, ValidationError, DEFAULT_DELAUNAY_TOL};
}
