//! Quad-edge subdivision (Guibas–Stolfi) stored in an index arena.
//!
//! Purpose
//! - Represent a planar subdivision as quads of four directed-edge records:
//!   the edge, its dual, its reverse, and the reverse dual.
//! - Expose the two topological operators `make_edge` and `splice`, and the
//!   derived `connect_left`, `connect_right`, and `delete`.
//!
//! Design
//! - Records are addressed by `EdgeRef` handles (`quad << 2 | rotation`), so
//!   `rot`/`sym`/`inv_rot` are pure arithmetic on the handle and four rotations
//!   are the identity by construction.
//! - Only `onext` is stored. Every other navigation (`oprev`, `lnext`, `rprev`,
//!   `dest`, ...) is computed from `onext` and rotations on each call.
//! - Deleted quads go on a free list and are reused by `make_edge`.
//! - `absorb` appends another arena (remapping handles), which is how the two
//!   halves of a fork-join recursion are combined before merging.
//!
//! Code cross-refs: `triangulate::{divide, merge, extract}`.

mod arena;
mod types;

pub use arena::Subdivision;
pub use types::{EdgeRef, VertexId};
