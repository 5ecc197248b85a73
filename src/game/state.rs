use crate::model::{Bitboard, CastlingRights, Color, Piece, Square};

use super::history::{HistoryEntry, MoveCache};

/// Rank index (0-based) of the rank a side's pieces start on.
pub(crate) const fn rear_rank(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// A single chess game: position, castling/en-passant state, move
/// history with an undo/redo cursor, and a per-position move cache.
///
/// The engine owns all of its state exclusively; queries return
/// copies, never interior references (spec.md 3, "Ownership").
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) cursor: usize,
    pub(crate) move_cache: MoveCache,
}

impl Game {
    /// The standard initial chess position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut game = Game {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling_rights: CastlingRights::new(),
            en_passant_square: None,
            history: Vec::with_capacity(crate::config::INITIAL_HISTORY_CAPACITY),
            cursor: 0,
            move_cache: MoveCache::new(),
        };
        game.set_starting_position();
        game
    }

    fn set_starting_position(&mut self) {
        const BACK_RANK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in BACK_RANK.into_iter().enumerate() {
            self.place_piece(Color::White, piece, Square::new(file as u8, 0));
            self.place_piece(Color::Black, piece, Square::new(file as u8, 7));
        }
        for file in 0..8u8 {
            self.place_piece(Color::White, Piece::Pawn, Square::new(file, 1));
            self.place_piece(Color::Black, Piece::Pawn, Square::new(file, 6));
        }
    }

    pub(crate) fn occupied(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    pub(crate) fn piece_type_at(&self, color: Color, square: Square) -> Option<Piece> {
        self.pieces[color.index()]
            .iter()
            .position(|bb| bb.contains(square))
            .map(piece_from_array_index)
    }

    /// The `(Color, Piece)` occupying a square, or `None` if empty.
    /// This is the idiomatic Rust shape for spec.md's `get_piece`.
    #[must_use]
    pub fn get_piece(&self, square: Square) -> Option<(Color, Piece)> {
        for color in [Color::White, Color::Black] {
            if let Some(piece) = self.piece_type_at(color, square) {
                return Some((color, piece));
            }
        }
        None
    }

    pub(crate) fn king_square(&self, color: Color) -> Square {
        self.pieces[color.index()][Piece::King.index()]
            .iter()
            .next()
            .expect("every color has exactly one king")
    }

    pub(crate) fn place_piece(&mut self, color: Color, piece: Piece, square: Square) {
        debug_assert!(
            self.get_piece(square).is_none(),
            "placing onto an occupied square"
        );
        self.pieces[color.index()][piece.index()].set(square);
        self.occupied[color.index()].set(square);
        self.all_occupied.set(square);
    }

    pub(crate) fn remove_piece(&mut self, color: Color, piece: Piece, square: Square) {
        debug_assert!(self.pieces[color.index()][piece.index()].contains(square));
        self.pieces[color.index()][piece.index()].clear(square);
        self.occupied[color.index()].clear(square);
        self.all_occupied.clear(square);
    }

    /// Debug-only check of the universal invariants that must hold
    /// after every public mutation (spec.md 8, invariants 1-2).
    #[cfg(debug_assertions)]
    pub(crate) fn debug_check_invariants(&self) {
        let mut seen = Bitboard::EMPTY;
        for color in [Color::White, Color::Black] {
            for piece_bb in self.pieces[color.index()] {
                debug_assert!(
                    !seen.intersects(piece_bb),
                    "piece bitboards must be pairwise disjoint"
                );
                seen = seen | piece_bb;
            }
            debug_assert_eq!(
                self.pieces[color.index()][Piece::King.index()].popcount(),
                1,
                "exactly one king per side"
            );
        }
        debug_assert!(self.cursor <= self.history.len(), "cursor out of bounds");
    }

    #[cfg(not(debug_assertions))]
    pub(crate) fn debug_check_invariants(&self) {}
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn piece_from_array_index(index: usize) -> Piece {
    match index {
        0 => Piece::Pawn,
        1 => Piece::Knight,
        2 => Piece::Bishop,
        3 => Piece::Rook,
        4 => Piece::Queen,
        5 => Piece::King,
        _ => unreachable!("piece array index out of range"),
    }
}
