//! Engine facade: one configured strategy plus the randomness it needs
//!
//! `Search` binds a [`SearchParams`] to a tie-break source and answers "which
//! move for this side on this board". It keeps no state between decisions
//! apart from the statistics of the last one and the tie-break generator.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::greedy::{choose_by_symmetry_only, choose_greedy_with_stats, TieBreaker};
use super::minimax::{alpha_beta_with_stats, minimax_with_stats, INFINITY};
use super::params::{Algorithm, SearchParams};
use super::stats::SearchStats;
use crate::board::{Board, Color, Move};

/// Configured move chooser
pub struct Search<R: TieBreaker = StdRng> {
    params: SearchParams,
    stats: SearchStats,
    tie: R,
}

impl Search<StdRng> {
    /// Engine with an OS-seeded generator
    pub fn new(params: SearchParams) -> Self {
        Self::with_tie_breaker(params, StdRng::from_os_rng())
    }

    /// Engine whose greedy tie-breaks are reproducible
    pub fn with_seed(params: SearchParams, seed: u64) -> Self {
        Self::with_tie_breaker(params, StdRng::seed_from_u64(seed))
    }
}

impl<R: TieBreaker> Search<R> {
    pub fn with_tie_breaker(params: SearchParams, tie: R) -> Self {
        Self {
            params,
            stats: SearchStats::new(),
            tie,
        }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Statistics of the most recent [`Search::choose_move`] call
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick a move for `side`, or `None` when the strategy finds nothing to
    /// play (no legal moves, or the position is already decided).
    ///
    /// The minimax strategies search at least one ply even when configured
    /// with depth 0, so the engine always answers in a live position.
    pub fn choose_move(&mut self, board: &Board, side: Color) -> Option<Move> {
        self.stats.reset();
        self.stats.start_timing();

        let params = self.params;
        let evaluate = params.heuristic.evaluator();
        let depth = params.depth.max(1);

        let chosen = match params.algorithm {
            Algorithm::AlphaBeta => {
                let (score, mv) = alpha_beta_with_stats(
                    board,
                    depth,
                    -INFINITY,
                    INFINITY,
                    true,
                    side,
                    evaluate,
                    params.use_symmetry,
                    &mut self.stats,
                );
                self.stats.score = Some(score);
                mv
            }
            Algorithm::Minimax => {
                let (score, mv) = minimax_with_stats(
                    board,
                    depth,
                    true,
                    side,
                    evaluate,
                    params.use_symmetry,
                    &mut self.stats,
                );
                self.stats.score = Some(score);
                mv
            }
            Algorithm::Greedy => choose_greedy_with_stats(
                board,
                side,
                evaluate,
                params.use_symmetry,
                &mut self.tie,
                &mut self.stats,
            ),
            Algorithm::SymmetryOnly => {
                self.stats.inc_node();
                choose_by_symmetry_only(board, side, params.use_symmetry)
            }
        };

        self.stats.update_timing();

        debug!(
            side = %side,
            algorithm = params.algorithm.label(),
            chosen = ?chosen,
            stats = %self.stats,
            "search finished"
        );

        chosen
    }
}
