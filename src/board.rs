// Position model: mailbox 8x8 grid, row 0 = Black's back rank (FEN rank 8),
// row 7 = White's back rank (FEN rank 1). Columns 0..7 run a..h.

use std::fmt;

use crate::error::BoardError;

/// Side of the board. White moves first and starts on rows 6-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step for this side
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row from which this side's pawns may double-step
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which this side's pawns promote
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

/// A colored piece. Two pieces with the same color and kind are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub fn from_fen_char(ch: char) -> Option<Piece> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece { color, kind })
    }

    pub fn fen_char(self) -> char {
        let ch = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }
}

/// Zero-based (row, col) coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Build a square from coordinates already known to lie in `0..8`.
    /// Board accessors reject anything else in debug builds; use
    /// [`Square::try_new`] for untrusted input.
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Checked constructor for coordinates coming from outside (pointer input, text)
    pub fn try_new(row: i32, col: i32) -> Result<Self, BoardError> {
        if inside_board(row, col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(BoardError::OffBoard { row, col })
        }
    }

    pub fn is_on_board(self) -> bool {
        self.row < 8 && self.col < 8
    }

    /// Step by (dr, dc); `None` when the target leaves the board
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i32 + dr as i32;
        let col = self.col as i32 + dc as i32;
        if inside_board(row, col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Left-right reflection: column c maps to 7 - c
    pub fn mirrored(self) -> Square {
        Square::new(self.row, 7 - self.col)
    }
}

impl From<(u8, u8)> for Square {
    fn from((row, col): (u8, u8)) -> Self {
        Square::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[inline]
pub fn inside_board(row: i32, col: i32) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

/// An (origin, destination) pair. Carries no piece or capture information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: impl Into<Square>, to: impl Into<Square>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn mirrored(self) -> Move {
        Move {
            from: self.from.mirrored(),
            to: self.to.mirrored(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Placement of the standard starting position
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Immutable-by-convention board value. Rules and search never modify a board;
/// every move yields a fresh copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting position
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(Color::Black, kind));
            board.cells[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.cells[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.cells[7][col] = Some(Piece::new(Color::White, kind));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        debug_assert!(sq.is_on_board(), "square {} is off the board", sq);
        self.cells[sq.row as usize][sq.col as usize]
    }

    /// Place or clear a cell; meant for building positions, not for play
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        debug_assert!(sq.is_on_board(), "square {} is off the board", sq);
        self.cells[sq.row as usize][sq.col as usize] = piece;
    }

    /// Builder variant of [`Board::set_piece`]
    pub fn with_piece(mut self, sq: impl Into<Square>, piece: Piece) -> Self {
        self.set_piece(sq.into(), Some(piece));
        self
    }

    /// Occupied cells in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8u8).flat_map(move |row| {
            (0..8u8).filter_map(move |col| {
                let sq = Square::new(row, col);
                self.piece_at(sq).map(|p| (sq, p))
            })
        })
    }

    /// First king of `color` in row-major order
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, p)| p == Piece::new(color, PieceKind::King))
            .map(|(sq, _)| sq)
    }

    /// Return the board after `mv`. No legality check is made here: the origin
    /// is cleared and its piece lands on the destination, except that a pawn
    /// reaching its promotion row becomes a queen of the same color.
    pub fn apply_move(&self, mv: Move) -> Board {
        let mut next = *self;
        let moving = next.piece_at(mv.from);
        next.set_piece(mv.from, None);

        let landed = match moving {
            Some(p) if p.kind == PieceKind::Pawn && mv.to.row == p.color.promotion_row() => {
                Some(Piece::new(p.color, PieceKind::Queen))
            }
            other => other,
        };
        next.set_piece(mv.to, landed);
        next
    }

    /// Parse a FEN string. Only the placement field is required; a side-to-move
    /// field is accepted and ignored, as are any trailing fields.
    pub fn from_fen(fen: &str) -> Result<Board, BoardError> {
        let placement = fen.split_whitespace().next().ok_or(BoardError::Empty)?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(BoardError::RankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(ch).ok_or(BoardError::InvalidPiece { ch })?;
                if col >= 8 {
                    return Err(BoardError::RankLength { rank: row, files: col + 1 });
                }
                board.cells[row][col] = Some(piece);
                col += 1;
            }
            if col != 8 {
                return Err(BoardError::RankLength { rank: row, files: col });
            }
        }
        Ok(board)
    }

    /// Parse a FEN string that includes the side-to-move field
    pub fn from_fen_with_side(fen: &str) -> Result<(Board, Color), BoardError> {
        let board = Board::from_fen(fen)?;
        let side = match fen.split_whitespace().nth(1) {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(BoardError::InvalidSide {
                    side: other.to_string(),
                })
            }
        };
        Ok((board, side))
    }

    /// FEN placement field for this board
    pub fn to_fen_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..8 {
            let mut gap = 0;
            for col in 0..8 {
                match self.cells[row][col] {
                    Some(p) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        out.push(p.fen_char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen_placement())
    }
}

// Rows printed top to bottom, row 0 first
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", row)?;
            for col in 0..8 {
                match self.cells[row][col] {
                    Some(p) => write!(f, "{} ", p.fen_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  0 1 2 3 4 5 6 7")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::initial();
        assert_eq!(
            board.piece_at(Square::new(7, 4)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(Square::new(0, 3)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.to_fen_placement(), START_PLACEMENT);
    }

    #[test]
    fn test_fen_placement_matches_initial() {
        let parsed = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").unwrap();
        assert_eq!(parsed, Board::initial());
    }

    #[test]
    fn test_fen_errors() {
        assert_eq!(Board::from_fen(""), Err(BoardError::Empty));
        assert_eq!(
            Board::from_fen("8/8/8/8"),
            Err(BoardError::RankCount { found: 4 })
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/7x"),
            Err(BoardError::InvalidPiece { ch: 'x' })
        );
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/7"),
            Err(BoardError::RankLength { rank: 7, files: 7 })
        ));
        assert!(matches!(
            Board::from_fen_with_side("8/8/8/8/8/8/8/8 x"),
            Err(BoardError::InvalidSide { .. })
        ));
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let board = Board::initial();
        let snapshot = board;
        let next = board.apply_move(Move::new((6, 4), (4, 4)));

        assert_eq!(board, snapshot);
        assert_eq!(next.piece_at(Square::new(6, 4)), None);
        assert_eq!(
            next.piece_at(Square::new(4, 4)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
    }

    #[test]
    fn test_pawn_promotes_to_queen() {
        let board = Board::empty()
            .with_piece((1, 0), Piece::new(Color::White, PieceKind::Pawn))
            .with_piece((6, 7), Piece::new(Color::Black, PieceKind::Pawn));

        let white = board.apply_move(Move::new((1, 0), (0, 0)));
        assert_eq!(
            white.piece_at(Square::new(0, 0)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );

        let black = board.apply_move(Move::new((6, 7), (7, 7)));
        assert_eq!(
            black.piece_at(Square::new(7, 7)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
    }

    #[test]
    fn test_square_helpers() {
        let sq = Square::new(3, 1);
        assert_eq!(sq.mirrored(), Square::new(3, 6));
        assert_eq!(sq.offset(-4, 0), None);
        assert_eq!(sq.offset(1, -1), Some(Square::new(4, 0)));
        assert!(Square::try_new(8, 0).is_err());
        assert_eq!(Square::try_new(0, 7), Ok(Square::new(0, 7)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "off the board")]
    fn test_off_board_read_is_rejected() {
        Board::initial().piece_at(Square::new(8, 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "off the board")]
    fn test_off_board_write_is_rejected() {
        let _ = Board::empty().with_piece((0, 8), Piece::new(Color::White, PieceKind::Rook));
    }
}
