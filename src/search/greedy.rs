//! One-ply choosers: greedy evaluation and symmetry-only selection

use rand::Rng;

use super::stats::SearchStats;
use crate::board::{Board, Color, Move};
use crate::eval::Evaluator;
use crate::movegen::generate_moves;
use crate::symmetry::reduce_symmetry;

/// Source of the coin flip used when two greedy candidates score the same.
/// Any [`rand::Rng`] flips a fair coin; tests can plug in fixed answers.
pub trait TieBreaker {
    /// `true` to replace the current best with an equally scored challenger
    fn prefer_challenger(&mut self) -> bool;
}

impl<R: Rng> TieBreaker for R {
    fn prefer_challenger(&mut self) -> bool {
        self.random_bool(0.5)
    }
}

/// Play each legal move once and keep the one `evaluate` likes best for
/// `side`. Exact ties are settled by `tie`, so the result is not
/// deterministic among equally scored moves.
pub fn choose_greedy<T: TieBreaker + ?Sized>(
    board: &Board,
    side: Color,
    evaluate: Evaluator,
    use_symmetry: bool,
    tie: &mut T,
) -> Option<Move> {
    let mut stats = SearchStats::new();
    choose_greedy_with_stats(board, side, evaluate, use_symmetry, tie, &mut stats)
}

pub fn choose_greedy_with_stats<T: TieBreaker + ?Sized>(
    board: &Board,
    side: Color,
    evaluate: Evaluator,
    use_symmetry: bool,
    tie: &mut T,
    stats: &mut SearchStats,
) -> Option<Move> {
    stats.inc_node();
    let mut moves = generate_moves(board, side);
    if moves.is_empty() {
        return None;
    }
    if use_symmetry {
        let reduced = reduce_symmetry(&moves);
        stats.add_symmetry_pruned(moves.len(), reduced.len());
        moves = reduced;
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for mv in moves {
        let child = board.apply_move(mv);
        stats.inc_node();
        stats.inc_eval();
        let score = evaluate(&child, side);

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        } else if score == best_score && tie.prefer_challenger() {
            best_move = Some(mv);
        }
    }

    stats.score = best_move.map(|_| best_score);
    best_move
}

/// Pick the first legal move, after symmetry reduction when `use_symmetry`
/// is set. Never evaluates; exists to measure what reduction alone does.
pub fn choose_by_symmetry_only(board: &Board, side: Color, use_symmetry: bool) -> Option<Move> {
    let moves = generate_moves(board, side);
    let first = *moves.first()?;
    if !use_symmetry {
        return Some(first);
    }
    Some(reduce_symmetry(&moves).first().copied().unwrap_or(first))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{evaluate_material, evaluate_pst};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Always(bool);

    impl TieBreaker for Always {
        fn prefer_challenger(&mut self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_greedy_takes_material() {
        let b = Board::from_fen("4k3/8/8/3q4/8/8/8/3RK3").unwrap();
        let mv = choose_greedy(&b, Color::White, evaluate_material, false, &mut Always(true));
        assert_eq!(mv, Some(Move::new((7, 3), (3, 3))));
    }

    #[test]
    fn test_tie_break_is_injected() {
        // Every opening move keeps material level
        let start = Board::initial();
        let moves = generate_moves(&start, Color::White);

        let keep = choose_greedy(&start, Color::White, evaluate_material, false, &mut Always(false));
        assert_eq!(keep, Some(moves[0]));

        let swap = choose_greedy(&start, Color::White, evaluate_material, false, &mut Always(true));
        assert_eq!(swap, moves.last().copied());
    }

    #[test]
    fn test_seeded_rng_picks_a_best_move() {
        let start = Board::initial();
        let mut rng = StdRng::seed_from_u64(7);
        let mv = choose_greedy(&start, Color::White, evaluate_pst, true, &mut rng).unwrap();

        let best = reduce_symmetry(&generate_moves(&start, Color::White))
            .into_iter()
            .map(|m| evaluate_pst(&start.apply_move(m), Color::White))
            .max()
            .unwrap();
        assert_eq!(evaluate_pst(&start.apply_move(mv), Color::White), best);
    }

    #[test]
    fn test_no_moves() {
        let stalemate = Board::from_fen("k7/2Q5/8/8/8/8/8/7K").unwrap();
        assert_eq!(
            choose_greedy(&stalemate, Color::Black, evaluate_material, true, &mut Always(true)),
            None
        );
        assert_eq!(choose_by_symmetry_only(&stalemate, Color::Black, true), None);
        assert_eq!(choose_by_symmetry_only(&stalemate, Color::Black, false), None);
    }

    #[test]
    fn test_symmetry_only_returns_first_move() {
        let b = Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R").unwrap();
        for side in [Color::White, Color::Black] {
            let moves = generate_moves(&b, side);
            assert_eq!(choose_by_symmetry_only(&b, side, false), Some(moves[0]));
            assert_eq!(
                choose_by_symmetry_only(&b, side, true),
                reduce_symmetry(&moves).first().copied()
            );
        }
    }
}
