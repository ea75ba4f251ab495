//! Depth-bounded minimax, with and without alpha-beta pruning
//!
//! Both searches score every node from the root mover's fixed point of view:
//! `maximizing` nodes belong to the root mover, minimizing nodes to its
//! opponent, and the evaluator is always called with the root side. This is
//! plain minimax, not negamax.

use super::stats::SearchStats;
use crate::board::{Board, Color, Move};
use crate::eval::Evaluator;
use crate::movegen::{generate_moves, is_checkmate, is_stalemate};
use crate::symmetry::reduce_symmetry;

/// Window bound for a full-width root call
pub const INFINITY: i32 = i32::MAX;

// Per-call settings threaded through the recursion
struct Context<'a> {
    root: Color,
    evaluate: Evaluator,
    use_symmetry: bool,
    stats: &'a mut SearchStats,
}

impl Context<'_> {
    fn leaf(&mut self, board: &Board) -> (i32, Option<Move>) {
        self.stats.inc_eval();
        ((self.evaluate)(board, self.root), None)
    }

    fn is_terminal(&self, board: &Board, depth: u8) -> bool {
        depth == 0
            || is_checkmate(board, self.root.opponent())
            || is_checkmate(board, self.root)
            || is_stalemate(board, self.root)
    }

    fn candidates(&mut self, board: &Board, maximizing: bool) -> Vec<Move> {
        let to_move = if maximizing {
            self.root
        } else {
            self.root.opponent()
        };
        let moves = generate_moves(board, to_move);
        if self.use_symmetry {
            let reduced = reduce_symmetry(&moves);
            self.stats.add_symmetry_pruned(moves.len(), reduced.len());
            reduced
        } else {
            moves
        }
    }
}

/// Alpha-beta minimax. Returns the best score for the node and, unless the
/// node is terminal or has no moves, the first move reaching it.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta(
    board: &Board,
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    root: Color,
    evaluate: Evaluator,
    use_symmetry: bool,
) -> (i32, Option<Move>) {
    let mut stats = SearchStats::new();
    alpha_beta_with_stats(
        board,
        depth,
        alpha,
        beta,
        maximizing,
        root,
        evaluate,
        use_symmetry,
        &mut stats,
    )
}

/// [`alpha_beta`] that also records node, evaluation and cutoff counts
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta_with_stats(
    board: &Board,
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    root: Color,
    evaluate: Evaluator,
    use_symmetry: bool,
    stats: &mut SearchStats,
) -> (i32, Option<Move>) {
    let mut ctx = Context {
        root,
        evaluate,
        use_symmetry,
        stats,
    };
    alpha_beta_node(&mut ctx, board, depth, alpha, beta, maximizing)
}

fn alpha_beta_node(
    ctx: &mut Context<'_>,
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> (i32, Option<Move>) {
    ctx.stats.inc_node();

    if ctx.is_terminal(board, depth) {
        return ctx.leaf(board);
    }

    let moves = ctx.candidates(board, maximizing);
    if moves.is_empty() {
        return ctx.leaf(board);
    }

    let mut best_move = None;

    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            let child = board.apply_move(mv);
            let (score, _) = alpha_beta_node(ctx, &child, depth - 1, alpha, beta, false);
            if score > best {
                best = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                ctx.stats.inc_cutoff();
                break;
            }
        }
        (best, best_move)
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            let child = board.apply_move(mv);
            let (score, _) = alpha_beta_node(ctx, &child, depth - 1, alpha, beta, true);
            if score < best {
                best = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
            if beta <= alpha {
                ctx.stats.inc_cutoff();
                break;
            }
        }
        (best, best_move)
    }
}

/// Full-width minimax without pruning; same terminal rules and tie handling
/// as [`alpha_beta`], so both agree on the score.
pub fn minimax(
    board: &Board,
    depth: u8,
    maximizing: bool,
    root: Color,
    evaluate: Evaluator,
    use_symmetry: bool,
) -> (i32, Option<Move>) {
    let mut stats = SearchStats::new();
    minimax_with_stats(board, depth, maximizing, root, evaluate, use_symmetry, &mut stats)
}

pub fn minimax_with_stats(
    board: &Board,
    depth: u8,
    maximizing: bool,
    root: Color,
    evaluate: Evaluator,
    use_symmetry: bool,
    stats: &mut SearchStats,
) -> (i32, Option<Move>) {
    let mut ctx = Context {
        root,
        evaluate,
        use_symmetry,
        stats,
    };
    minimax_node(&mut ctx, board, depth, maximizing)
}

fn minimax_node(
    ctx: &mut Context<'_>,
    board: &Board,
    depth: u8,
    maximizing: bool,
) -> (i32, Option<Move>) {
    ctx.stats.inc_node();

    if ctx.is_terminal(board, depth) {
        return ctx.leaf(board);
    }

    let moves = ctx.candidates(board, maximizing);
    if moves.is_empty() {
        return ctx.leaf(board);
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for mv in moves {
        let child = board.apply_move(mv);
        let (score, _) = minimax_node(ctx, &child, depth - 1, !maximizing);
        let improves = if maximizing { score > best } else { score < best };
        if improves {
            best = score;
            best_move = Some(mv);
        }
    }

    (best, best_move)
}
