//! The programmatic surface consumed by a UI and by the perft driver
//! (spec.md 6): querying legal moves, applying and retracting them,
//! and undo/redo bookkeeping.

use crate::config::PROMOTION_PIECES;
use crate::model::{Bitboard, Color, Piece, Square};

use super::state::Game;

impl Game {
    /// The colour to move next.
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Whether `color`'s king is currently attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }

    /// Legal destinations from `sq` for the side to move; empty if
    /// `sq` is empty or holds the wrong colour's piece. Consults the
    /// move cache first; on a miss, computes via the legality filter
    /// and stores the result.
    #[must_use]
    pub fn get_moves(&mut self, sq: Square) -> Bitboard {
        if let Some(cached) = self.move_cache.get(sq) {
            #[cfg(feature = "logging")]
            log::trace!("get_moves({sq}): cache hit");
            return cached;
        }
        let destinations = self.legal_destinations(sq);
        self.move_cache.store(sq, destinations);
        destinations
    }

    /// Applies `from -> to` for the side to move. If the move is a
    /// pawn reaching the far rank, promotes to a queen by default —
    /// callers that need a different promotion piece must use
    /// [`Game::move_and_promote`]. Returns `false`, mutating nothing,
    /// if the move is not legal.
    pub fn r#move(&mut self, from: Square, to: Square) -> bool {
        self.move_and_promote(from, to, Piece::Queen)
    }

    /// Applies `from -> to`, promoting to `promotion` if the move is
    /// a pawn reaching the far rank (ignored otherwise). Returns
    /// `false`, mutating nothing, if the move is not legal or
    /// `promotion` is not one of Knight, Bishop, Rook, Queen.
    pub fn move_and_promote(&mut self, from: Square, to: Square, promotion: Piece) -> bool {
        if !PROMOTION_PIECES.contains(&promotion) {
            return false;
        }
        if !self.get_moves(from).contains(to) {
            return false;
        }

        #[cfg(feature = "logging")]
        log::trace!("applying move {from}{to}");

        let entry = self.apply_internal(from, to, promotion);
        if self.cursor < self.history.len() {
            self.history.truncate(self.cursor);
        }
        self.history.push(entry);
        self.cursor = self.history.len();
        self.move_cache.invalidate();
        self.debug_check_invariants();
        true
    }

    /// Whether there is a move to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether there is a move to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.history.len()
    }

    /// Reverses the most recently applied move. Returns `false`,
    /// mutating nothing, if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        let entry = self.history[self.cursor - 1];

        #[cfg(feature = "logging")]
        log::trace!("undoing move {}{}", entry.from, entry.to);

        self.undo_internal(&entry);
        self.cursor -= 1;
        self.move_cache.invalidate();
        self.debug_check_invariants();
        true
    }

    /// Re-applies the move at the current cursor. Returns `false`,
    /// mutating nothing, if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        let entry = self.history[self.cursor];

        #[cfg(feature = "logging")]
        log::trace!("redoing move {}{}", entry.from, entry.to);

        let replayed = self.apply_internal(entry.from, entry.to, entry.promotion.unwrap_or(Piece::Queen));
        debug_assert_eq!(replayed, entry, "redo must reproduce the original entry");
        self.cursor += 1;
        self.move_cache.invalidate();
        self.debug_check_invariants();
        true
    }

    /// Squares a piece moved away from, for UI highlighting. For a
    /// castle this includes both the king's and the rook's origin.
    #[must_use]
    pub fn get_cells_moved_from(&self) -> Bitboard {
        let Some(entry) = self.last_applied_entry() else {
            return Bitboard::EMPTY;
        };
        let mut cells = Bitboard::bit(entry.from);
        if entry.is_castle() {
            let rear = entry.from.rank();
            let rook_from = if entry.is_castle_kingside { 7 } else { 0 };
            cells.set(Square::new(rook_from, rear));
        }
        cells
    }

    /// Squares a piece moved onto, for UI highlighting. For a castle
    /// this includes both the king's and the rook's destination.
    #[must_use]
    pub fn get_cells_moved_to(&self) -> Bitboard {
        let Some(entry) = self.last_applied_entry() else {
            return Bitboard::EMPTY;
        };
        let mut cells = Bitboard::bit(entry.to);
        if entry.is_castle() {
            let rear = entry.to.rank();
            let rook_to = if entry.is_castle_kingside { 5 } else { 3 };
            cells.set(Square::new(rook_to, rear));
        }
        cells
    }

    fn last_applied_entry(&self) -> Option<super::history::HistoryEntry> {
        if self.cursor == 0 {
            None
        } else {
            Some(self.history[self.cursor - 1])
        }
    }
}
