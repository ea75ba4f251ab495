// Step and ray tables shared by move generation and check detection.
// Each entry is a (row delta, col delta) pair; table order fixes move order.

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King steps, row-major around the king
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Queen rays: diagonals first, then orthogonals
pub const QUEEN_RAYS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

#[inline]
pub fn is_diagonal((dr, dc): (i8, i8)) -> bool {
    dr != 0 && dc != 0
}

#[inline]
pub fn is_orthogonal((dr, dc): (i8, i8)) -> bool {
    dr == 0 || dc == 0
}
