//! Error types for board parsing and game sessions
//!
//! The rules and search functions are total and never fail; these errors only
//! surface at the edges, when text is turned into a board or when a session
//! is asked to do something it cannot.

use thiserror::Error;

use crate::board::Move;

/// Errors produced while building a [`crate::board::Board`] from text or coordinates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// FEN placement did not contain exactly eight ranks
    #[error("expected 8 ranks in placement, found {found}")]
    RankCount { found: usize },

    /// A rank described more or fewer than eight files
    #[error("rank {rank} describes {files} files (must be 8)")]
    RankLength { rank: usize, files: usize },

    /// Unknown character in the placement field
    #[error("invalid piece character '{ch}'")]
    InvalidPiece { ch: char },

    /// Side-to-move field other than `w` or `b`
    #[error("invalid side to move '{side}'")]
    InvalidSide { side: String },

    /// Coordinate outside the 8x8 grid
    #[error("square ({row}, {col}) is off the board")]
    OffBoard { row: i32, col: i32 },

    /// Empty input
    #[error("empty position string")]
    Empty,
}

/// Errors produced by [`crate::game::Game`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The move is not in the legal set of the side to move
    #[error("illegal move {mv}")]
    IllegalMove { mv: Move },

    /// The game already ended in checkmate or stalemate
    #[error("game is over")]
    GameOver,

    /// Move coordinates could not be turned into squares
    #[error(transparent)]
    Board(#[from] BoardError),
}
