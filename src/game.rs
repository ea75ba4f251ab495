//! Game session: one board, one side to move, and the outcome so far
//!
//! A `Game` is the explicit context a front end threads through play. It
//! validates human moves, asks a [`Search`] for engine moves, and consults
//! the check detector after every move to decide whether play continues.

use std::fmt;

use tracing::{debug, info};

use crate::board::{Board, Color, Move, Square};
use crate::error::GameError;
use crate::movegen::{is_checkmate, is_in_check, is_stalemate, is_valid_move, legal_targets};
use crate::search::{Search, TieBreaker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Color,
    status: GameStatus,
    last_move: Option<Move>,
    plies: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Initial position, White to move
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Color::White)
    }

    /// Arbitrary position. The status is computed immediately, so a game can
    /// start already decided.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            status: status_for(&board, to_move),
            last_move: None,
            plies: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Plies played in this session
    pub fn plies(&self) -> u32 {
        self.plies
    }

    /// Destinations of the piece on `from`, if it belongs to the side to move
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        legal_targets(&self.board, from, self.to_move)
    }

    /// Play `mv` for the side to move
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if !is_valid_move(&self.board, mv, self.to_move) {
            return Err(GameError::IllegalMove { mv });
        }
        Ok(self.commit(mv))
    }

    /// Play a move given as raw (row, col) pairs, as they arrive from
    /// pointer or text input
    pub fn play_coords(&mut self, from: (i32, i32), to: (i32, i32)) -> Result<GameStatus, GameError> {
        let from = Square::try_new(from.0, from.1)?;
        let to = Square::try_new(to.0, to.1)?;
        self.play(Move::new(from, to))
    }

    /// Let `search` pick and play a move for the side to move. Returns the
    /// move played, or `None` when the engine had nothing to play, in which
    /// case the game ends as checkmate or stalemate.
    pub fn play_engine<R: TieBreaker>(
        &mut self,
        search: &mut Search<R>,
    ) -> Result<Option<Move>, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let Some(mv) = search.choose_move(&self.board, self.to_move) else {
            self.status = if is_in_check(&self.board, self.to_move) {
                GameStatus::Checkmate {
                    winner: self.to_move.opponent(),
                }
            } else {
                GameStatus::Stalemate
            };
            info!(status = %self.status, plies = self.plies, "game over, engine found no move");
            return Ok(None);
        };

        if !is_valid_move(&self.board, mv, self.to_move) {
            return Err(GameError::IllegalMove { mv });
        }
        self.commit(mv);
        Ok(Some(mv))
    }

    fn commit(&mut self, mv: Move) -> GameStatus {
        self.board = self.board.apply_move(mv);
        self.to_move = self.to_move.opponent();
        self.last_move = Some(mv);
        self.plies += 1;
        self.status = status_for(&self.board, self.to_move);

        debug!(mv = %mv, ply = self.plies, next = %self.to_move, "move played");
        if self.status.is_over() {
            info!(status = %self.status, plies = self.plies, "game over");
        }
        self.status
    }
}

fn status_for(board: &Board, to_move: Color) -> GameStatus {
    if is_checkmate(board, to_move) {
        GameStatus::Checkmate {
            winner: to_move.opponent(),
        }
    } else if is_stalemate(board, to_move) {
        GameStatus::Stalemate
    } else {
        GameStatus::Ongoing
    }
}
