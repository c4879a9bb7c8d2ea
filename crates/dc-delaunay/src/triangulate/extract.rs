//! Flatten the final subdivision into a plain edge list.

use crate::quad_edge::{Subdivision, VertexId};

use super::types::Partition;

/// Walk every vertex ring reachable from the hull of `top` and collect each
/// undirected edge once as an `[origin, destination]` pair.
///
/// A temporary base edge joining the leftmost and rightmost vertices through
/// the outer face anchors the walk; it is deleted before returning and never
/// reported.
pub(crate) fn extract(sub: &mut Subdivision, top: Partition, vertex_count: usize) -> Vec<[VertexId; 2]> {
    let base = sub.connect_left(top.left.sym(), top.right);

    let mut seen_quad = vec![false; sub.slot_count()];
    let mut seen_vertex = vec![false; vertex_count];
    seen_quad[base.quad()] = true;

    let mut edges = Vec::with_capacity(sub.edge_count().saturating_sub(1));
    let mut stack = vec![base, base.sym()];
    while let Some(start) = stack.pop() {
        let v = sub.org(start);
        if seen_vertex[v.0] {
            continue;
        }
        seen_vertex[v.0] = true;

        let mut e = start;
        loop {
            let w = sub.dest(e);
            if !seen_quad[e.quad()] {
                seen_quad[e.quad()] = true;
                edges.push([v, w]);
            }
            if !seen_vertex[w.0] {
                stack.push(e.sym());
            }
            e = sub.onext(e);
            if e == start {
                break;
            }
        }
    }

    sub.delete(base);
    edges
}
