//! Left-right mirror deduplication of move lists
//!
//! A move is dropped when it, or its column-mirrored twin, was already kept
//! earlier in the list. The position itself is never inspected, so this is a
//! lossy, order-dependent filter: a better move can be discarded because its
//! mirror partner happened to come first.

use std::collections::HashSet;

use crate::board::Move;

pub fn reduce_symmetry(moves: &[Move]) -> Vec<Move> {
    let mut seen: HashSet<Move> = HashSet::with_capacity(moves.len() * 2);
    let mut kept = Vec::with_capacity(moves.len());

    for &mv in moves {
        let mirror = mv.mirrored();
        if !seen.contains(&mv) && !seen.contains(&mirror) {
            kept.push(mv);
            seen.insert(mv);
            seen.insert(mirror);
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Color};
    use crate::movegen::generate_moves;

    #[test]
    fn test_mirror_pair_keeps_first() {
        let a = Move::new((6, 1), (5, 1));
        let b = Move::new((6, 6), (5, 6));
        assert_eq!(reduce_symmetry(&[a, b]), vec![a]);
        assert_eq!(reduce_symmetry(&[b, a]), vec![b]);
    }

    #[test]
    fn test_duplicates_and_self_mirrors() {
        let centre = Move::new((4, 3), (3, 4));
        // (4,3)->(3,4) mirrors to (4,4)->(3,3), a different move
        let twin = Move::new((4, 4), (3, 3));
        let other = Move::new((0, 0), (0, 1));
        assert_eq!(
            reduce_symmetry(&[centre, centre, other, twin]),
            vec![centre, other]
        );
    }

    #[test]
    fn test_initial_position_halves() {
        let moves = generate_moves(&Board::initial(), Color::White);
        let reduced = reduce_symmetry(&moves);
        // Pawn steps and knight moves pair up across the centre line
        assert_eq!(reduced.len(), 10);
        assert_eq!(reduced[0], moves[0]);
    }

    #[test]
    fn test_idempotent() {
        let b = Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R").unwrap();
        for side in [Color::White, Color::Black] {
            let once = reduce_symmetry(&generate_moves(&b, side));
            assert_eq!(reduce_symmetry(&once), once);
        }
        assert!(reduce_symmetry(&[]).is_empty());
    }
}
