//! Static evaluation
//!
//! Three evaluators score a board from a fixed side's point of view (higher is
//! better for that side): material balance, piece-square tables, and their sum.
//! Each adds the same terminal and pressure terms, so the combined evaluator
//! counts them twice.

use crate::board::{Board, Color, PieceKind};
use crate::movegen::{is_checkmate, is_in_check};

/// Evaluation function signature used by every search strategy
pub type Evaluator = fn(&Board, Color) -> i32;

// ============================================================================
// MATERIAL
// ============================================================================
pub const PAWN_VALUE: i32 = 10;
pub const KNIGHT_VALUE: i32 = 30;
pub const BISHOP_VALUE: i32 = 30;
pub const ROOK_VALUE: i32 = 50;
pub const QUEEN_VALUE: i32 = 90;
pub const KING_VALUE: i32 = 1000;

/// Awarded when the opponent is checkmated (and charged when `side` is)
pub const CHECKMATE_BONUS: i32 = 10000;
/// Awarded while the opponent is in check
pub const CHECK_BONUS: i32 = 50;

pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

// ============================================================================
// PIECE-SQUARE TABLES
// ============================================================================
// Indexed [row][col] as seen by White (home row 7). Black pieces look up the
// vertically mirrored row (7 - row).

type Table = [[i32; 8]; 8];

const PAWN_PST: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_PST: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    // Not left-right symmetric; kept as tuned
    [-50, -40, -30, -30, -30, -30, -30, -40],
];

const BISHOP_PST: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK_PST: Table = [
    [0, 0, 0, 5, 5, 0, 0, 0],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const QUEEN_PST: Table = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

/// Middlegame king table: shelter on the home row, stay out of the centre
const KING_PST: Table = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

fn table_for(kind: PieceKind) -> &'static Table {
    match kind {
        PieceKind::Pawn => &PAWN_PST,
        PieceKind::Knight => &KNIGHT_PST,
        PieceKind::Bishop => &BISHOP_PST,
        PieceKind::Rook => &ROOK_PST,
        PieceKind::Queen => &QUEEN_PST,
        PieceKind::King => &KING_PST,
    }
}

/// Table entry for a piece of `color` standing on (row, col)
pub fn pst_value(kind: PieceKind, color: Color, row: u8, col: u8) -> i32 {
    let r = match color {
        Color::White => row,
        Color::Black => 7 - row,
    };
    table_for(kind)[r as usize][col as usize]
}

// ============================================================================
// EVALUATORS
// ============================================================================

/// Checkmate and check-pressure terms shared by all evaluators
fn terminal_bonus(board: &Board, side: Color) -> i32 {
    let opponent = side.opponent();
    let mut score = 0;

    if is_checkmate(board, opponent) {
        score += CHECKMATE_BONUS;
    } else if is_checkmate(board, side) {
        score -= CHECKMATE_BONUS;
    }

    if is_in_check(board, opponent) {
        score += CHECK_BONUS;
    }

    score
}

/// Signed material sum plus terminal terms
pub fn evaluate_material(board: &Board, side: Color) -> i32 {
    let material: i32 = board
        .pieces()
        .map(|(_, p)| {
            let v = piece_value(p.kind);
            if p.color == side {
                v
            } else {
                -v
            }
        })
        .sum();
    material + terminal_bonus(board, side)
}

/// Signed piece-square sum plus terminal terms; no material term
pub fn evaluate_pst(board: &Board, side: Color) -> i32 {
    let positional: i32 = board
        .pieces()
        .map(|(sq, p)| {
            let v = pst_value(p.kind, p.color, sq.row, sq.col);
            if p.color == side {
                v
            } else {
                -v
            }
        })
        .sum();
    positional + terminal_bonus(board, side)
}

/// Material plus piece-square score, terminal terms included by both
pub fn evaluate_combined(board: &Board, side: Color) -> i32 {
    evaluate_material(board, side) + evaluate_pst(board, side)
}

/// Named choice of evaluator, used for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Heuristic {
    Material,
    Pst,
    Combined,
}

impl Heuristic {
    pub fn evaluator(self) -> Evaluator {
        match self {
            Heuristic::Material => evaluate_material,
            Heuristic::Pst => evaluate_pst,
            Heuristic::Combined => evaluate_combined,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Heuristic::Material => "material",
            Heuristic::Pst => "piece-square tables",
            Heuristic::Combined => "combined",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
