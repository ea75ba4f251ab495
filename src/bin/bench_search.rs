use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::error;

use specchio::board::{Board, START_PLACEMENT};
use specchio::search::{Search, SearchParams};

#[derive(Parser, Debug)]
#[command(author, version, about = "Time every preset on one position", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_PLACEMENT))]
    fen: String,

    #[arg(short, long, default_value_t = 3)]
    depth: u8,

    #[arg(long, default_value_t = 0)]
    seed: u64,
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

    println!("Benchmarking {} to move at depth {}...", side, args.depth);
    println!("{}", board);

    for (i, preset) in SearchParams::presets().into_iter().enumerate() {
        let mut search = Search::with_seed(preset.params.depth(args.depth), args.seed);

        let start = Instant::now();
        let mv = search.choose_move(&board, side);
        let elapsed = start.elapsed();

        let stats = search.stats();
        let nps = (stats.nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64;
        let shown = mv.map_or_else(|| "none".to_string(), |m| m.to_string());

        println!("{}. {}", i + 1, preset.name);
        println!("   Best move: {}", shown);
        println!("   Time: {:.2?}  Nodes: {}  NPS: {}", elapsed, stats.nodes, nps);
        println!(
            "   Evaluations: {}  Cutoffs: {}  Mirrored out: {}",
            stats.evaluations, stats.cutoffs, stats.symmetry_pruned
        );
        if let Some(score) = stats.score {
            println!("   Score: {}", score);
        }
    }
    ExitCode::SUCCESS
}
