//! Triangulate one cloud of each shape and print its counts.
//!
//! Usage:
//!   cargo run -p dc-delaunay --example cloud_counts -- 2000
//!
//! Prints, per cloud kind: distinct vertices, edges, triangles, and points on
//! the hull boundary, plus whether every validator passed.

use dc_delaunay::prelude::*;

fn main() {
    let n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1000);
    for kind in CloudKind::ALL {
        let cfg = CloudCfg {
            kind,
            n,
            ..CloudCfg::default()
        };
        let pts = draw_cloud(cfg, ReplayToken::new(2025));
        match triangulate_with(pts, &TriangulateCfg::default()) {
            Ok(tri) => match validate(&tri, DEFAULT_DELAUNAY_TOL) {
                Ok(s) => println!(
                    "{kind:<8} V={:<6} E={:<6} T={:<6} B={:<6} ok",
                    s.vertices, s.edges, s.triangles, s.hull_boundary
                ),
                Err(e) => println!(
                    "{kind:<8} V={:<6} E={:<6} invalid: {e}",
                    tri.vertex_count(),
                    tri.edge_count()
                ),
            },
            Err(e) => println!("{kind:<8} error: {e}"),
        }
    }
}
