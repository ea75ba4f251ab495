use specchio::board::{Board, Piece, PieceKind, Square};
use specchio::movegen::{generate_moves, is_in_check};
use specchio::search::{Algorithm, Search, SearchParams};
use specchio::{Color, Game, GameError, GameStatus, Move};

#[test]
fn test_centre_pawn_opening() {
    let board = Board::initial();
    let next = board.apply_move(Move::new((6, 4), (4, 4)));

    assert_eq!(
        next.piece_at(Square::new(4, 4)),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(next.piece_at(Square::new(6, 4)), None);
    assert!(!generate_moves(&next, Color::Black).is_empty());
    assert!(!is_in_check(&next, Color::White));
    assert!(!is_in_check(&next, Color::Black));
}

#[test]
fn test_same_opening_through_a_session() {
    let mut game = Game::new();
    assert_eq!(game.play(Move::new((6, 4), (4, 4))), Ok(GameStatus::Ongoing));
    assert_eq!(game.to_move(), Color::Black);
    assert_eq!(game.board().to_fen_placement(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");
}

#[test]
fn test_engine_match_stays_legal() {
    let mut game = Game::new();
    let mut white = Search::with_seed(SearchParams::new().algorithm(Algorithm::Greedy), 1);
    let mut black = Search::with_seed(
        SearchParams::new().algorithm(Algorithm::AlphaBeta).depth(1).symmetry(true),
        2,
    );

    while !game.status().is_over() && game.plies() < 40 {
        let before = *game.board();
        let side = game.to_move();
        let played = match side {
            Color::White => game.play_engine(&mut white),
            Color::Black => game.play_engine(&mut black),
        }
        .expect("engine plays legally");

        match played {
            Some(mv) => {
                assert!(generate_moves(&before, side).contains(&mv));
                assert!(!is_in_check(game.board(), side));
            }
            None => assert!(game.status().is_over()),
        }
    }
}

#[test]
fn test_engine_delivers_mate() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1").unwrap();
    let mut game = Game::from_board(board, Color::White);
    let mut search = Search::with_seed(SearchParams::new().depth(2), 0);

    let mv = game.play_engine(&mut search).unwrap();
    assert_eq!(mv, Some(Move::new((7, 0), (0, 0))));
    assert_eq!(game.status(), GameStatus::Checkmate { winner: Color::White });
    assert_eq!(game.play_engine(&mut search), Err(GameError::GameOver));
}

#[test]
fn test_rejects_moves_into_check() {
    // The knight on e2 is pinned by the rook on e8
    let board = Board::from_fen("4r1k1/8/8/8/8/8/4N3/4K3").unwrap();
    let mut game = Game::from_board(board, Color::White);

    let unpin = Move::new((6, 4), (4, 5));
    assert_eq!(game.play(unpin), Err(GameError::IllegalMove { mv: unpin }));
    assert!(game.legal_targets(Square::new(6, 4)).is_empty());

    let board = Board::from_fen("4r1k1/8/8/8/8/8/8/3K4").unwrap();
    let mut game = Game::from_board(board, Color::White);
    let into_file = Move::new((7, 3), (7, 4));
    assert_eq!(game.play(into_file), Err(GameError::IllegalMove { mv: into_file }));
    assert_eq!(game.play(Move::new((7, 3), (7, 2))), Ok(GameStatus::Ongoing));
}
