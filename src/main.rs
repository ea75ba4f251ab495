//! Specchio headless match runner: two engine configurations play each other
//! and every ply is printed with the time the engine took.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{error, info};

use specchio::board::Board;
use specchio::eval::Heuristic;
use specchio::search::{Algorithm, Search, SearchParams};
use specchio::{Color, Game, GameStatus};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Preset number (1-8) for both sides; see --list-presets
    #[arg(short, long)]
    preset: Option<usize>,

    /// Preset number for Black, overriding --preset
    #[arg(long)]
    black_preset: Option<usize>,

    /// Strategy for both sides, overriding the preset
    #[arg(short, long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Evaluator for both sides, overriding the preset
    #[arg(long, value_enum)]
    heuristic: Option<Heuristic>,

    /// Enable left-right symmetry reduction for both sides
    #[arg(short, long)]
    symmetry: bool,

    /// Search depth in plies
    #[arg(short, long, default_value_t = 3)]
    depth: u8,

    /// Seed for greedy tie-breaks; OS randomness when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Start position (placement field, optional side to move)
    #[arg(short, long)]
    fen: Option<String>,

    /// Moves played before the engines take over, as `row,col-row,col`
    #[arg(long, num_args = 1.., value_delimiter = ' ')]
    opening: Vec<String>,

    /// Stop after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: u32,

    /// Print the preset menu and exit
    #[arg(long)]
    list_presets: bool,
}

fn main() -> ExitCode {
    specchio::init_logging();
    let args = Args::parse();

    if args.list_presets {
        for (i, preset) in SearchParams::presets().iter().enumerate() {
            println!("{}. {}", i + 1, preset.name);
        }
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            error!("{}", msg);
            ExitCode::FAILURE
        }
    }
}

fn params_for(args: &Args, preset: Option<usize>) -> Result<SearchParams, String> {
    let mut params = match preset {
        Some(n) => SearchParams::preset(n).ok_or_else(|| format!("no preset numbered {}", n))?,
        None => SearchParams::default(),
    };
    if let Some(algorithm) = args.algorithm {
        params = params.algorithm(algorithm);
    }
    if let Some(heuristic) = args.heuristic {
        params = params.heuristic(heuristic);
    }
    if args.symmetry {
        params = params.symmetry(true);
    }
    Ok(params.depth(args.depth))
}

fn engine(params: SearchParams, seed: Option<u64>) -> Search {
    match seed {
        Some(seed) => Search::with_seed(params, seed),
        None => Search::new(params),
    }
}

fn parse_coords(text: &str) -> Result<(i32, i32), String> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| format!("expected row,col but got '{}'", text))?;
    let row = row.trim().parse().map_err(|_| format!("bad row in '{}'", text))?;
    let col = col.trim().parse().map_err(|_| format!("bad column in '{}'", text))?;
    Ok((row, col))
}

fn play_opening(game: &mut Game, moves: &[String]) -> Result<(), String> {
    for text in moves.iter().filter(|m| !m.is_empty()) {
        let (from, to) = text
            .split_once('-')
            .ok_or_else(|| format!("expected from-to but got '{}'", text))?;
        game.play_coords(parse_coords(from)?, parse_coords(to)?)
            .map_err(|e| format!("opening move '{}': {}", text, e))?;
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), String> {
    let white_params = params_for(args, args.preset)?;
    let black_params = params_for(args, args.black_preset.or(args.preset))?;

    let mut game = match &args.fen {
        Some(fen) => {
            let (board, to_move) = Board::from_fen_with_side(fen).map_err(|e| e.to_string())?;
            Game::from_board(board, to_move)
        }
        None => Game::new(),
    };

    // Black's seed is offset so two greedy engines do not mirror each other's coin
    let mut white = engine(white_params, args.seed);
    let mut black = engine(black_params, args.seed.map(|s| s.wrapping_add(1)));

    play_opening(&mut game, &args.opening)?;

    info!(white = %white.params(), black = %black.params(), "starting match");
    println!("{}", game.board());

    while !game.status().is_over() && game.plies() < args.max_plies {
        let side = game.to_move();
        let started = Instant::now();
        let played = match side {
            Color::White => game.play_engine(&mut white),
            Color::Black => game.play_engine(&mut black),
        }
        .map_err(|e| e.to_string())?;
        let elapsed = started.elapsed();

        let Some(mv) = played else {
            break;
        };
        let stats = match side {
            Color::White => white.stats(),
            Color::Black => black.stats(),
        };
        println!(
            "{}. {} plays {}  ({:.3}s, {} nodes)",
            game.plies(),
            side,
            mv,
            elapsed.as_secs_f64(),
            stats.nodes
        );
        println!("{}", game.board());
    }

    match game.status() {
        GameStatus::Ongoing => println!("Stopped after {} plies", game.plies()),
        status => println!("Result: {}", status),
    }
    Ok(())
}
