//! Fixed neighbourhood offset tables.

/// A `(d_row, d_col)` unit offset.
pub type Offset = (i64, i64);

/// The 8 Moore offsets, clockwise starting at the north-west corner.
///
/// Order is significant: the block rotation rule moves the value at ring
/// index `i + 1` to ring index `i`.
pub const MOORE_RING: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// The 4 axis-aligned offsets: E, W, S, N.
///
/// Diffusion sums neighbours in this order.
pub const ORTHOGONAL: [Offset; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Named neighbourhood shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Neighbourhood {
    /// 8-connected ring (cardinal + diagonal), see [`MOORE_RING`].
    Moore,
    /// 4-connected cross, see [`ORTHOGONAL`].
    Orthogonal,
}

impl Neighbourhood {
    /// The offset table for this shape.
    pub fn offsets(self) -> &'static [Offset] {
        match self {
            Self::Moore => &MOORE_RING,
            Self::Orthogonal => &ORTHOGONAL,
        }
    }

    /// Number of neighbours in this shape.
    pub fn len(self) -> usize {
        self.offsets().len()
    }

    /// Always `false`.
    pub fn is_empty(self) -> bool {
        false
    }
}
