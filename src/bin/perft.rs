use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Position};
use tracing::{error, info, warn};

use specchio::board::{Board, START_PLACEMENT};
use specchio::movegen::perft;
use specchio::Color;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Placement field, optionally followed by the side to move
    #[arg(short, long, default_value_t = String::from(START_PLACEMENT))]
    fen: String,

    #[arg(short, long, default_value_t = 4)]
    depth: u8,

    /// Skip the shakmaty comparison
    #[arg(long)]
    no_reference: bool,
}

fn main() -> ExitCode {
    specchio::init_logging();
    let args = Args::parse();

    let (board, side) = match Board::from_fen_with_side(&args.fen) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("bad position '{}': {}", args.fen, e);
            return ExitCode::FAILURE;
        }
    };

    println!("Running perft on '{}' ({} to move) at depth {}", board.to_fen_placement(), side, args.depth);

    let start = Instant::now();
    let nodes = perft(&board, side, args.depth);
    let duration = start.elapsed();
    println!("specchio perft({}) = {} nodes ({} ms)", args.depth, nodes, duration.as_millis());

    if args.no_reference {
        return ExitCode::SUCCESS;
    }

    let pos = match reference_position(&board, side) {
        Ok(pos) => pos,
        Err(e) => {
            // shakmaty refuses positions standard chess forbids, e.g. a missing king
            warn!("no shakmaty reference for this position: {}", e);
            return ExitCode::SUCCESS;
        }
    };

    let start = Instant::now();
    let expected = perft_shakmaty(&pos, args.depth);
    let duration = start.elapsed();
    println!("shakmaty perft({}) = {} nodes ({} ms)", args.depth, expected, duration.as_millis());

    if nodes == expected {
        info!("counts agree");
    } else {
        warn!(
            ours = nodes,
            reference = expected,
            "counts differ; expected when castling, en passant or under-promotion is reachable"
        );
    }
    ExitCode::SUCCESS
}

/// Same placement for shakmaty, without castling rights or en passant
fn reference_position(board: &Board, side: Color) -> Result<Chess, String> {
    let fen = format!("{} {} - - 0 1", board.to_fen_placement(), side.fen_char());
    let fen: Fen = fen.parse().map_err(|e| format!("{}", e))?;
    fen.into_position(CastlingMode::Standard)
        .map_err(|e| format!("{}", e))
}

fn perft_shakmaty(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    let moves = pos.legal_moves();
    for m in moves {
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += perft_shakmaty(&new_pos, depth - 1);
    }
    nodes
}
