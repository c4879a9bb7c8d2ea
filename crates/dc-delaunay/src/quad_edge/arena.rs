//! Arena-backed quad-edge subdivision and its topological operators.

use crate::geom::Point;

use super::types::{EdgeRef, VertexId};

/// One undirected edge: four directed records sharing an arena slot.
#[derive(Clone, Debug)]
struct Quad {
    /// `onext` of each rotation.
    next: [EdgeRef; 4],
    /// Origins of rotation 0 and rotation 2.
    org: [VertexId; 2],
    live: bool,
}

/// Mutable planar subdivision owned by one triangulation run (or one branch of it).
#[derive(Clone, Debug, Default)]
pub struct Subdivision {
    quads: Vec<Quad>,
    free: Vec<usize>,
    live: usize,
}

impl Subdivision {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `edges` undirected edges.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            quads: Vec::with_capacity(edges),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Number of live (not deleted) undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.live
    }

    /// Arena slots ever allocated, live or free. Bounds `EdgeRef::quad()`.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.quads.len()
    }

    #[inline]
    pub fn is_live(&self, e: EdgeRef) -> bool {
        self.quads.get(e.quad()).is_some_and(|q| q.live)
    }

    /// Canonical primal record of every live quad.
    pub fn live_edges(&self) -> impl Iterator<Item = EdgeRef> + '_ {
        self.quads
            .iter()
            .enumerate()
            .filter(|(_, q)| q.live)
            .map(|(i, _)| EdgeRef::from_quad(i))
    }

    /// New isolated edge `org → dest`; its vertex rings are trivial loops.
    pub fn make_edge(&mut self, org: VertexId, dest: VertexId) -> EdgeRef {
        let slot = self.free.pop().unwrap_or(self.quads.len());
        let e = EdgeRef::from_quad(slot);
        let quad = Quad {
            next: [e, e.inv_rot(), e.sym(), e.rot()],
            org: [org, dest],
            live: true,
        };
        if slot == self.quads.len() {
            self.quads.push(quad);
        } else {
            self.quads[slot] = quad;
        }
        self.live += 1;
        e
    }

    /// Exchange the `onext` rings of `a` and `b` and of their left faces.
    ///
    /// Joins two distinct rings into one or splits one ring into two; applying
    /// it twice with the same arguments restores the original topology.
    pub fn splice(&mut self, a: EdgeRef, b: EdgeRef) {
        debug_assert!(self.is_live(a) && self.is_live(b), "splice on a deleted edge");
        let alpha = self.onext(a).rot();
        let beta = self.onext(b).rot();

        let a_next = self.onext(a);
        let b_next = self.onext(b);
        let alpha_next = self.onext(alpha);
        let beta_next = self.onext(beta);

        self.set_onext(a, b_next);
        self.set_onext(b, a_next);
        self.set_onext(alpha, beta_next);
        self.set_onext(beta, alpha_next);
    }

    /// New edge `a.dest → b.org` closing the face to the left of `a` and `b`.
    pub fn connect_left(&mut self, a: EdgeRef, b: EdgeRef) -> EdgeRef {
        let e = self.make_edge(self.dest(a), self.org(b));
        let a_lnext = self.lnext(a);
        self.splice(e, a_lnext);
        self.splice(e.sym(), b);
        e
    }

    /// New edge `a.dest → b.org`, spliced after `a.sym` and before `b` in the origin ring of `b`.
    pub fn connect_right(&mut self, a: EdgeRef, b: EdgeRef) -> EdgeRef {
        let e = self.make_edge(self.dest(a), self.org(b));
        self.splice(e, a.sym());
        let b_oprev = self.oprev(b);
        self.splice(e.sym(), b_oprev);
        e
    }

    /// Detach `e` from both endpoint rings and free its quad.
    ///
    /// No record of the quad may be traversed afterwards.
    pub fn delete(&mut self, e: EdgeRef) {
        let e_oprev = self.oprev(e);
        self.splice(e, e_oprev);
        let sym_oprev = self.oprev(e.sym());
        self.splice(e.sym(), sym_oprev);
        self.quads[e.quad()].live = false;
        self.free.push(e.quad());
        self.live -= 1;
    }

    /// Append `other`, remapping its handles. Returns the quad offset to pass
    /// to `EdgeRef::shifted` for handles that pointed into `other`.
    pub fn absorb(&mut self, other: Subdivision) -> usize {
        let offset = self.quads.len();
        self.quads.extend(other.quads.into_iter().map(|mut q| {
            for n in &mut q.next {
                *n = n.shifted(offset);
            }
            q
        }));
        self.free.extend(other.free.into_iter().map(|slot| slot + offset));
        self.live += other.live;
        offset
    }

    // --- navigation -------------------------------------------------------

    /// Next edge counterclockwise around the origin.
    #[inline]
    pub fn onext(&self, e: EdgeRef) -> EdgeRef {
        debug_assert!(self.is_live(e), "traversal of deleted edge {e:?}");
        self.quads[e.quad()].next[e.rotation()]
    }

    #[inline]
    fn set_onext(&mut self, e: EdgeRef, next: EdgeRef) {
        self.quads[e.quad()].next[e.rotation()] = next;
    }

    /// Next edge clockwise around the origin.
    #[inline]
    pub fn oprev(&self, e: EdgeRef) -> EdgeRef {
        self.onext(e.rot()).rot()
    }

    /// Next edge counterclockwise around the destination (into it).
    #[inline]
    pub fn dnext(&self, e: EdgeRef) -> EdgeRef {
        self.onext(e.sym()).sym()
    }

    /// Next edge clockwise around the destination (into it).
    #[inline]
    pub fn dprev(&self, e: EdgeRef) -> EdgeRef {
        self.onext(e.inv_rot()).inv_rot()
    }

    /// Next edge counterclockwise around the left face.
    #[inline]
    pub fn lnext(&self, e: EdgeRef) -> EdgeRef {
        self.onext(e.inv_rot()).rot()
    }

    /// Previous edge around the left face.
    #[inline]
    pub fn lprev(&self, e: EdgeRef) -> EdgeRef {
        self.onext(e).sym()
    }

    /// Next edge counterclockwise around the right face.
    #[inline]
    pub fn rnext(&self, e: EdgeRef) -> EdgeRef {
        self.onext(e.rot()).inv_rot()
    }

    /// Previous edge around the right face.
    #[inline]
    pub fn rprev(&self, e: EdgeRef) -> EdgeRef {
        self.onext(e.sym())
    }

    #[inline]
    pub fn org(&self, e: EdgeRef) -> VertexId {
        debug_assert!(e.is_primal(), "dual records have no origin");
        self.quads[e.quad()].org[e.rotation() >> 1]
    }

    #[inline]
    pub fn dest(&self, e: EdgeRef) -> VertexId {
        self.org(e.sym())
    }

    /// Euclidean length of a primal edge.
    pub fn length(&self, e: EdgeRef, points: &[Point]) -> f64 {
        points[self.org(e).0].distance(&points[self.dest(e).0])
    }

    /// All records in the origin ring of `e`, starting at `e`.
    pub fn origin_ring(&self, e: EdgeRef) -> Vec<EdgeRef> {
        let mut ring = vec![e];
        let mut f = self.onext(e);
        while f != e {
            ring.push(f);
            f = self.onext(f);
        }
        ring
    }
}
