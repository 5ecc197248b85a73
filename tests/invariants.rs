//! Property tests for the universal invariants, round-trip laws, and
//! concrete scenarios spec.md 8 lists.

use chess_core::{Color, Game, Piece, Square};
use proptest::prelude::*;

fn all_legal_moves(game: &mut Game) -> Vec<(Square, Square)> {
    let mut moves = Vec::new();
    for index in 0..64u8 {
        let from = Square::from_index(index);
        let mut destinations = game.get_moves(from);
        while let Some(to) = destinations.pop_lsb() {
            moves.push((from, to));
        }
    }
    moves
}

fn assert_exactly_one_king_per_side(game: &Game) {
    for color in [Color::White, Color::Black] {
        let kings = (0..64u8)
            .filter(|&i| game.get_piece(Square::from_index(i)) == Some((color, Piece::King)))
            .count();
        assert_eq!(kings, 1, "{color} must have exactly one king");
    }
}

fn assert_pieces_pairwise_disjoint(game: &Game) {
    let mut seen: Vec<Square> = Vec::new();
    for index in 0..64u8 {
        let square = Square::from_index(index);
        if game.get_piece(square).is_some() {
            assert!(!seen.contains(&square));
            seen.push(square);
        }
    }
}

proptest! {
    /// After any sequence of legal moves (each chosen as the nth legal
    /// move available, wrapped to however many exist), the board still
    /// holds the universal invariants: pieces pairwise disjoint, one
    /// king per side, side to move alternates (spec.md 8, invariants
    /// 1-3).
    #[test]
    fn invariants_hold_after_random_legal_move_sequences(choices in prop::collection::vec(0u32..64, 0..12)) {
        let mut game = Game::new();
        for choice in choices {
            let moves = all_legal_moves(&mut game);
            if moves.is_empty() {
                break;
            }
            let before_side = game.side_to_move();
            let (from, to) = moves[choice as usize % moves.len()];
            assert!(game.r#move(from, to));
            assert_ne!(game.side_to_move(), before_side);
            assert_pieces_pairwise_disjoint(&game);
            assert_exactly_one_king_per_side(&game);
        }
    }

    /// Undoing every applied move returns the exact starting position
    /// (spec.md 8, "undo/redo round-trip").
    #[test]
    fn undo_all_returns_to_starting_position(choices in prop::collection::vec(0u32..64, 0..12)) {
        let mut game = Game::new();
        let mut applied = 0;
        for choice in choices {
            let moves = all_legal_moves(&mut game);
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[choice as usize % moves.len()];
            assert!(game.r#move(from, to));
            applied += 1;
        }
        for _ in 0..applied {
            assert!(game.undo());
        }
        let fresh = Game::new();
        for index in 0..64u8 {
            let square = Square::from_index(index);
            assert_eq!(game.get_piece(square), fresh.get_piece(square));
        }
        assert_eq!(game.side_to_move(), fresh.side_to_move());
        assert!(!game.can_undo());
    }

    /// Redoing after undoing every applied move returns to the same
    /// position reached before the undos (spec.md 8, "undo/redo
    /// round-trip").
    #[test]
    fn undo_then_redo_all_reproduces_final_position(choices in prop::collection::vec(0u32..64, 1..12)) {
        let mut game = Game::new();
        let mut applied = 0;
        for choice in choices {
            let moves = all_legal_moves(&mut game);
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[choice as usize % moves.len()];
            assert!(game.r#move(from, to));
            applied += 1;
        }
        if applied == 0 {
            return Ok(());
        }
        let after_moves = game.clone();
        for _ in 0..applied {
            assert!(game.undo());
        }
        for _ in 0..applied {
            assert!(game.redo());
        }
        for index in 0..64u8 {
            let square = Square::from_index(index);
            assert_eq!(
                game.get_piece(square),
                after_moves.get_piece(square)
            );
        }
        assert!(!game.can_redo());
    }

    /// FEN round-trips: loading the FEN produced by `to_fen` reproduces
    /// the same piece placement, side to move, and castling rights
    /// (spec.md 8, "FEN round-trip").
    #[test]
    fn to_fen_then_load_fen_is_identity(choices in prop::collection::vec(0u32..64, 0..8)) {
        let mut game = Game::new();
        for choice in choices {
            let moves = all_legal_moves(&mut game);
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[choice as usize % moves.len()];
            assert!(game.r#move(from, to));
        }
        let fen = game.to_fen();
        let mut reloaded = Game::new();
        reloaded.load_fen(&fen).unwrap();
        for index in 0..64u8 {
            let square = Square::from_index(index);
            assert_eq!(game.get_piece(square), reloaded.get_piece(square));
        }
        assert_eq!(game.side_to_move(), reloaded.side_to_move());
        assert_eq!(reloaded.to_fen(), fen);
    }
}

#[test]
fn scholars_mate_is_checkmate() {
    let mut game = Game::new();
    assert!(game.r#move(Square::new(4, 1), Square::new(4, 3)));
    assert!(game.r#move(Square::new(4, 6), Square::new(4, 4)));
    assert!(game.r#move(Square::new(5, 0), Square::new(2, 3)));
    assert!(game.r#move(Square::new(1, 7), Square::new(2, 5)));
    assert!(game.r#move(Square::new(3, 0), Square::new(7, 4)));
    assert!(game.r#move(Square::new(6, 6), Square::new(6, 5)));
    assert!(game.r#move(Square::new(7, 4), Square::new(5, 6)));
    assert!(game.is_in_check(Color::Black));
    let mut total_moves = 0u32;
    for index in 0..64u8 {
        total_moves += game.get_moves(Square::from_index(index)).popcount();
    }
    assert_eq!(total_moves, 0, "black has no legal moves: checkmate");
}

#[test]
fn stalemate_position_has_no_legal_moves_and_is_not_check() {
    let mut game = Game::new();
    // Black king a8, no other black pieces; white king c7, white queen
    // b6: black to move is stalemated.
    game.load_fen("k7/8/1Q1K4/8/8/8/8/8 b - -").unwrap();
    assert!(!game.is_in_check(Color::Black));
    let mut total_moves = 0u32;
    for index in 0..64u8 {
        total_moves += game.get_moves(Square::from_index(index)).popcount();
    }
    assert_eq!(total_moves, 0);
}

#[test]
fn en_passant_capture_is_available_immediately_after_the_double_push() {
    let mut game = Game::new();
    assert!(game.r#move(Square::new(4, 1), Square::new(4, 3)));
    assert!(game.r#move(Square::new(0, 6), Square::new(0, 5)));
    assert!(game.r#move(Square::new(4, 3), Square::new(4, 4)));
    assert!(game.r#move(Square::new(3, 6), Square::new(3, 4)));
    let moves = game.get_moves(Square::new(4, 4));
    assert!(moves.contains(Square::new(3, 5)));
    assert!(game.r#move(Square::new(4, 4), Square::new(3, 5)));
    assert_eq!(game.get_piece(Square::new(3, 4)), None);
}

#[test]
fn en_passant_right_expires_after_one_ply() {
    let mut game = Game::new();
    assert!(game.r#move(Square::new(4, 1), Square::new(4, 3)));
    assert!(game.r#move(Square::new(0, 6), Square::new(0, 5)));
    assert!(game.r#move(Square::new(4, 3), Square::new(4, 4)));
    assert!(game.r#move(Square::new(7, 6), Square::new(7, 5)));
    assert!(game.r#move(Square::new(0, 1), Square::new(0, 2)));
    assert!(game.r#move(Square::new(3, 6), Square::new(3, 4)));
    let moves = game.get_moves(Square::new(4, 4));
    assert!(!moves.contains(Square::new(3, 5)));
}
