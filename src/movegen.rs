//! Legal move generation and king-safety queries
//!
//! Generation is two-phase like any mailbox engine: pseudo-legal candidates
//! per piece kind, then a filter that plays each candidate on a copy of the
//! board and drops it if the mover's own king ends up attacked. No attack maps
//! are kept between calls.
//!
//! Rule set: no castling, no en passant, pawns always promote to a queen
//! (handled in [`Board::apply_move`]) and no generated move ever lands on the
//! enemy king.

use crate::board::{Board, Color, Move, PieceKind, Square};
use crate::utils::{
    is_diagonal, is_orthogonal, DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS, QUEEN_RAYS,
};

/// All legal moves for `side`, in board scan order (row 0 first, then column),
/// and per piece in the order of the step/ray tables.
pub fn generate_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(64);
    generate_pseudo_moves(board, side, &mut pseudo);
    pseudo
        .into_iter()
        .filter(|&mv| !is_in_check(&board.apply_move(mv), side))
        .collect()
}

/// Candidate moves before the self-check filter
pub fn generate_pseudo_moves(board: &Board, side: Color, out: &mut Vec<Move>) {
    for (from, piece) in board.pieces() {
        if piece.color != side {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => pawn_pseudos(board, from, side, out),
            PieceKind::Knight => step_pseudos(board, from, side, &KNIGHT_OFFSETS, out),
            PieceKind::Bishop => slider_pseudos(board, from, side, &DIAGONALS, out),
            PieceKind::Rook => slider_pseudos(board, from, side, &ORTHOGONALS, out),
            PieceKind::Queen => slider_pseudos(board, from, side, &QUEEN_RAYS, out),
            PieceKind::King => step_pseudos(board, from, side, &KING_OFFSETS, out),
        }
    }
}

// Empty squares and enemy non-king pieces may be landed on
#[inline]
fn can_land(board: &Board, to: Square, side: Color) -> bool {
    match board.piece_at(to) {
        None => true,
        Some(p) => p.color != side && p.kind != PieceKind::King,
    }
}

fn pawn_pseudos(board: &Board, from: Square, side: Color, out: &mut Vec<Move>) {
    let dir = side.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            out.push(Move { from, to: one });

            if from.row == side.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        out.push(Move { from, to: two });
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            match board.piece_at(to) {
                Some(p) if p.color != side && p.kind != PieceKind::King => {
                    out.push(Move { from, to });
                }
                _ => {}
            }
        }
    }
}

fn step_pseudos(
    board: &Board,
    from: Square,
    side: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            if can_land(board, to, side) {
                out.push(Move { from, to });
            }
        }
    }
}

fn slider_pseudos(
    board: &Board,
    from: Square,
    side: Color,
    rays: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(dr, dc) in rays {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.piece_at(to) {
                None => {
                    out.push(Move { from, to });
                    cur = to;
                }
                Some(p) => {
                    // An enemy king blocks the ray without being capturable
                    if p.color != side && p.kind != PieceKind::King {
                        out.push(Move { from, to });
                    }
                    break;
                }
            }
        }
    }
}

/// Whether `side`'s king is attacked by an enemy pawn, knight, bishop, rook or
/// queen. A board without a king for `side` reports `false`.
pub fn is_in_check(board: &Board, side: Color) -> bool {
    let Some(king) = board.king_square(side) else {
        return false;
    };
    let enemy = side.opponent();

    // Enemy pawns attack one row ahead in their own direction
    let pawn_dr = -enemy.pawn_direction();
    for dc in [-1, 1] {
        if let Some(sq) = king.offset(pawn_dr, dc) {
            if matches!(board.piece_at(sq), Some(p) if p.color == enemy && p.kind == PieceKind::Pawn)
            {
                return true;
            }
        }
    }

    for &(dr, dc) in &KNIGHT_OFFSETS {
        if let Some(sq) = king.offset(dr, dc) {
            if matches!(board.piece_at(sq), Some(p) if p.color == enemy && p.kind == PieceKind::Knight)
            {
                return true;
            }
        }
    }

    for &ray in &QUEEN_RAYS {
        let mut cur = king;
        while let Some(sq) = cur.offset(ray.0, ray.1) {
            if let Some(p) = board.piece_at(sq) {
                if p.color == enemy {
                    let hits = match p.kind {
                        PieceKind::Queen => true,
                        PieceKind::Bishop => is_diagonal(ray),
                        PieceKind::Rook => is_orthogonal(ray),
                        _ => false,
                    };
                    if hits {
                        return true;
                    }
                }
                break;
            }
            cur = sq;
        }
    }

    false
}

pub fn is_checkmate(board: &Board, side: Color) -> bool {
    is_in_check(board, side) && generate_moves(board, side).is_empty()
}

pub fn is_stalemate(board: &Board, side: Color) -> bool {
    !is_in_check(board, side) && generate_moves(board, side).is_empty()
}

/// Membership test against the full legal set for `side`. Used to vet moves
/// coming from outside the engine (e.g. a human drag-and-drop).
pub fn is_valid_move(board: &Board, mv: Move, side: Color) -> bool {
    if !mv.from.is_on_board() || !mv.to.is_on_board() {
        return false;
    }
    match board.piece_at(mv.from) {
        Some(p) if p.color == side => {}
        _ => return false,
    }
    generate_moves(board, side).contains(&mv)
}

/// Legal destinations of the piece standing on `from`
pub fn legal_targets(board: &Board, from: Square, side: Color) -> Vec<Square> {
    generate_moves(board, side)
        .into_iter()
        .filter(|mv| mv.from == from)
        .map(|mv| mv.to)
        .collect()
}

/// Number of leaf positions `depth` plies below `board`, sides alternating
/// starting with `side`
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = generate_moves(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| perft(&board.apply_move(mv), side.opponent(), depth - 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap()
    }

    #[test]
    fn test_initial_move_count() {
        let start = Board::initial();
        let white = generate_moves(&start, Color::White);
        assert_eq!(white.len(), 20);
        assert_eq!(
            white
                .iter()
                .filter(|m| start.piece_at(m.from).unwrap().kind == PieceKind::Pawn)
                .count(),
            16
        );
        assert_eq!(generate_moves(&start, Color::Black).len(), 20);
    }

    #[test]
    fn test_scan_order() {
        let start = Board::initial();
        let black = generate_moves(&start, Color::Black);
        // Knight on (0,1) is the first black piece with moves: (2,0) before (2,2)
        assert_eq!(black[0], Move::new((0, 1), (2, 0)));
        assert_eq!(black[1], Move::new((0, 1), (2, 2)));
        // Pawn single step precedes its double step
        assert_eq!(black[4], Move::new((1, 0), (2, 0)));
        assert_eq!(black[5], Move::new((1, 0), (3, 0)));
    }

    #[test]
    fn test_pinned_rook_stays_on_file() {
        let b = board("4r3/8/8/8/8/8/4R3/4K3");
        let rook_moves: Vec<Move> = generate_moves(&b, Color::White)
            .into_iter()
            .filter(|m| m.from == Square::new(6, 4))
            .collect();
        assert!(!rook_moves.is_empty());
        assert!(rook_moves.iter().all(|m| m.to.col == 4));
        assert!(rook_moves.contains(&Move::new((6, 4), (0, 4))));
    }

    #[test]
    fn test_never_targets_enemy_king() {
        // Black king sits in reach of a knight, pawn, king and queen
        let b = board("8/2N5/8/3k2Q1/2K1P3/8/8/8");
        let black_king = b.king_square(Color::Black).unwrap();
        for mv in generate_moves(&b, Color::White) {
            assert_ne!(mv.to, black_king, "{mv} captures the king");
        }
    }

    #[test]
    fn test_enemy_king_blocks_slider() {
        let b = board("8/8/8/8/R2k3r/8/8/4K3");
        let rook = Square::new(4, 0);
        let targets = legal_targets(&b, rook, Color::White);
        assert!(targets.contains(&Square::new(4, 2)));
        assert!(!targets.contains(&Square::new(4, 3)));
        assert!(!targets.contains(&Square::new(4, 7)));
    }

    #[test]
    fn test_pawn_double_step_needs_clear_path() {
        let b = board("4k3/8/8/8/8/4n3/4P3/4K3");
        assert!(legal_targets(&b, Square::new(6, 4), Color::White).is_empty());

        let b = board("4k3/8/8/8/4n3/8/4P3/4K3");
        assert_eq!(
            legal_targets(&b, Square::new(6, 4), Color::White),
            vec![Square::new(5, 4)]
        );
    }

    #[test]
    fn test_check_by_each_attacker() {
        assert!(is_in_check(&board("4k3/8/8/8/8/8/3p4/4K3"), Color::White));
        assert!(!is_in_check(&board("4k3/8/8/8/8/8/4p3/4K3"), Color::White));
        assert!(is_in_check(&board("4k3/5P2/8/8/8/8/8/4K3"), Color::Black));
        assert!(is_in_check(&board("4k3/8/8/8/8/5n2/8/4K3"), Color::White));
        assert!(is_in_check(&board("4k3/8/8/8/1b6/8/8/4K3"), Color::White));
        assert!(is_in_check(&board("4k3/8/8/8/8/8/8/r3K3"), Color::White));
        assert!(is_in_check(&board("4k3/8/8/8/4q3/8/8/4K3"), Color::White));
        // Rook on a diagonal and bishop on a file do not check
        assert!(!is_in_check(&board("4k3/8/8/8/1r6/8/8/4K3"), Color::White));
        assert!(!is_in_check(&board("4k3/8/8/8/4b3/8/8/4K3"), Color::White));
        // Own piece shields the king
        assert!(!is_in_check(&board("4k3/8/8/8/4q3/8/4P3/4K3"), Color::White));
    }

    #[test]
    fn test_adjacent_kings_are_not_check() {
        let b = board("8/8/8/3k4/3K4/8/8/8");
        assert!(!is_in_check(&b, Color::White));
        assert!(!is_in_check(&b, Color::Black));
        assert!(!legal_targets(&b, Square::new(4, 3), Color::White).contains(&Square::new(3, 3)));
    }

    #[test]
    fn test_missing_king_is_not_check() {
        let b = board("8/8/8/8/8/8/8/q6Q");
        assert!(!is_in_check(&b, Color::White));
        assert!(!is_in_check(&b, Color::Black));
    }

    #[test]
    fn test_fools_mate() {
        let b = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(is_in_check(&b, Color::White));
        assert!(generate_moves(&b, Color::White).is_empty());
        assert!(is_checkmate(&b, Color::White));
        assert!(!is_stalemate(&b, Color::White));
        assert!(!is_checkmate(&b, Color::Black));
    }

    #[test]
    fn test_stalemate() {
        let b = board("k7/2Q5/8/8/8/8/8/7K b - - 0 1");
        assert!(!is_in_check(&b, Color::Black));
        assert!(is_stalemate(&b, Color::Black));
        assert!(!is_checkmate(&b, Color::Black));
    }

    #[test]
    fn test_every_move_keeps_own_king_safe() {
        let positions = [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP3/RNBQKBNR",
            "4k3/8/8/8/1b6/8/3P4/4K3",
        ];
        for fen in positions {
            let b = board(fen);
            for side in [Color::White, Color::Black] {
                for mv in generate_moves(&b, side) {
                    assert!(!is_in_check(&b.apply_move(mv), side), "{fen}: {mv}");
                }
            }
        }
    }

    #[test]
    fn test_is_valid_move() {
        let start = Board::initial();
        assert!(is_valid_move(&start, Move::new((6, 4), (4, 4)), Color::White));
        // Wrong side, illegal geometry, off-board coordinates
        assert!(!is_valid_move(&start, Move::new((6, 4), (4, 4)), Color::Black));
        assert!(!is_valid_move(&start, Move::new((6, 4), (3, 4)), Color::White));
        assert!(!is_valid_move(&start, Move::new((7, 4), (6, 4)), Color::White));
        assert!(!is_valid_move(&start, Move::new((6, 4), (9, 4)), Color::White));
        assert!(!is_valid_move(&start, Move::new((4, 4), (3, 4)), Color::White));
    }

    #[test]
    fn test_promotion_square_is_generated() {
        let b = Board::empty()
            .with_piece((1, 0), Piece::new(Color::White, PieceKind::Pawn))
            .with_piece((7, 7), Piece::new(Color::White, PieceKind::King))
            .with_piece((0, 7), Piece::new(Color::Black, PieceKind::King));
        assert!(generate_moves(&b, Color::White).contains(&Move::new((1, 0), (0, 0))));
    }

    #[test]
    fn test_perft_start() {
        let start = Board::initial();
        assert_eq!(perft(&start, Color::White, 1), 20);
        assert_eq!(perft(&start, Color::White, 2), 400);
    }
}
