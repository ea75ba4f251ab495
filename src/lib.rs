pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod search;
pub mod symmetry;
pub mod utils;

pub use board::{Board, Color, Move, Piece, PieceKind, Square};
pub use error::{BoardError, GameError};
pub use eval::{Evaluator, Heuristic};
pub use game::{Game, GameStatus};

/// Install the stderr log subscriber used by the binaries. `RUST_LOG`
/// overrides the `info` default.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
