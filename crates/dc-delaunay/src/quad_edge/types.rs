//! Handle types for the quad-edge arena.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a vertex in the (deduplicated, sorted) point array of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub usize);

/// Directed-edge record handle: `quad << 2 | rotation`.
///
/// Rotation 0 is the primal edge, 1 its dual (`rot`), 2 the reverse (`sym`),
/// 3 the reverse dual (`inv_rot`). Rotations 0 and 2 carry an origin vertex;
/// 1 and 3 index faces and have none.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeRef(usize);

impl EdgeRef {
    #[inline]
    pub(crate) fn from_quad(quad: usize) -> Self {
        EdgeRef(quad << 2)
    }

    #[inline]
    pub fn quad(self) -> usize {
        self.0 >> 2
    }

    #[inline]
    pub fn rotation(self) -> usize {
        self.0 & 3
    }

    /// Primal records (rotation 0 or 2) connect vertices; dual records connect faces.
    #[inline]
    pub fn is_primal(self) -> bool {
        self.0 & 1 == 0
    }

    /// Dual edge, rotated 90° counterclockwise.
    #[inline]
    pub fn rot(self) -> Self {
        self.with_rotation(self.rotation() + 1)
    }

    /// Same edge, opposite direction.
    #[inline]
    pub fn sym(self) -> Self {
        self.with_rotation(self.rotation() + 2)
    }

    /// Dual edge, rotated 90° clockwise.
    #[inline]
    pub fn inv_rot(self) -> Self {
        self.with_rotation(self.rotation() + 3)
    }

    #[inline]
    fn with_rotation(self, r: usize) -> Self {
        EdgeRef((self.0 & !3) | (r & 3))
    }

    /// Same record after its arena was appended behind `quads` existing quads.
    #[inline]
    pub(crate) fn shifted(self, quads: usize) -> Self {
        EdgeRef(self.0 + (quads << 2))
    }
}

impl fmt::Debug for EdgeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}r{}", self.quad(), self.rotation())
    }
}
