//! Component E: mechanical move application and reversal. These two
//! functions are the single source of truth for mutating the board;
//! both the legality filter (apply, test, unapply) and the public
//! `move`/`undo`/`redo` API funnel through them, so the two paths
//! cannot diverge (spec.md 4.D).

use crate::model::{Color, Piece, Square};

use super::history::HistoryEntry;
use super::state::{rear_rank, Game};

impl Game {
    /// Applies `(from, to)` for the side to move, assuming it is
    /// already known to be pseudo-legal. `promotion_choice` is used
    /// only if the move is in fact a pawn reaching the far rank;
    /// otherwise it is ignored. Returns the entry needed to reverse
    /// the move.
    pub(crate) fn apply_internal(
        &mut self,
        from: Square,
        to: Square,
        promotion_choice: Piece,
    ) -> HistoryEntry {
        let color = self.side_to_move;
        let mover = self
            .piece_type_at(color, from)
            .expect("apply_internal requires a side-to-move piece on `from`");

        let castling_rights_before = self.castling_rights;
        let en_passant_before = self.en_passant_square;

        let is_en_passant_capture = mover == Piece::Pawn
            && en_passant_before.is_some_and(|ep| ep.forward(color) == Some(to))
            && self.get_piece(to).is_none();

        let mut captured = None;
        if is_en_passant_capture {
            let captured_square = en_passant_before.expect("checked above");
            captured = Some(Piece::Pawn);
            self.remove_piece(color.opponent(), Piece::Pawn, captured_square);
        } else if let Some((cap_color, cap_piece)) = self.get_piece(to) {
            captured = Some(cap_piece);
            self.remove_piece(cap_color, cap_piece, to);
        }

        self.remove_piece(color, mover, from);
        let is_promotion = mover == Piece::Pawn && (to.rank() == 0 || to.rank() == 7);
        let promotion = if is_promotion {
            self.place_piece(color, promotion_choice, to);
            Some(promotion_choice)
        } else {
            self.place_piece(color, mover, to);
            None
        };

        let rear = rear_rank(color);
        let is_castle_kingside =
            mover == Piece::King && from == Square::new(4, rear) && to == Square::new(6, rear);
        let is_castle_queenside =
            mover == Piece::King && from == Square::new(4, rear) && to == Square::new(2, rear);
        if is_castle_kingside {
            self.remove_piece(color, Piece::Rook, Square::new(7, rear));
            self.place_piece(color, Piece::Rook, Square::new(5, rear));
        } else if is_castle_queenside {
            self.remove_piece(color, Piece::Rook, Square::new(0, rear));
            self.place_piece(color, Piece::Rook, Square::new(3, rear));
        }

        self.update_castling_rights(color, mover, from, captured, to);

        let is_double_push = mover == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2;
        self.en_passant_square = if is_double_push { Some(to) } else { None };

        self.side_to_move = color.opponent();
        self.move_cache.invalidate();

        HistoryEntry {
            from,
            to,
            captured,
            promotion,
            is_en_passant_capture,
            is_castle_kingside,
            is_castle_queenside,
            castling_rights_before,
            en_passant_before,
        }
    }

    fn update_castling_rights(
        &mut self,
        color: Color,
        mover: Piece,
        from: Square,
        captured: Option<Piece>,
        to: Square,
    ) {
        let rear = rear_rank(color);
        if mover == Piece::King {
            self.castling_rights.forbid_both(color);
        }
        if mover == Piece::Rook {
            if from == Square::new(0, rear) {
                self.castling_rights.forbid(color, false);
            } else if from == Square::new(7, rear) {
                self.castling_rights.forbid(color, true);
            }
        }
        if captured == Some(Piece::Rook) {
            let opponent = color.opponent();
            let opponent_rear = rear_rank(opponent);
            if to == Square::new(0, opponent_rear) {
                self.castling_rights.forbid(opponent, false);
            } else if to == Square::new(7, opponent_rear) {
                self.castling_rights.forbid(opponent, true);
            }
        }
    }

    /// Reverses a previously applied move, restoring every field it
    /// touched. `entry` must be the value `apply_internal` returned
    /// for this exact move, applied with no intervening mutation.
    pub(crate) fn undo_internal(&mut self, entry: &HistoryEntry) {
        let color = self.side_to_move.opponent();
        let current_piece = self
            .piece_type_at(color, entry.to)
            .expect("undo_internal requires the moved piece to still be on `to`");

        self.remove_piece(color, current_piece, entry.to);
        let original_mover = if entry.promotion.is_some() {
            Piece::Pawn
        } else {
            current_piece
        };
        self.place_piece(color, original_mover, entry.from);

        if entry.is_castle() {
            let rear = rear_rank(color);
            if entry.is_castle_kingside {
                self.remove_piece(color, Piece::Rook, Square::new(5, rear));
                self.place_piece(color, Piece::Rook, Square::new(7, rear));
            } else {
                self.remove_piece(color, Piece::Rook, Square::new(3, rear));
                self.place_piece(color, Piece::Rook, Square::new(0, rear));
            }
        }

        if let Some(captured) = entry.captured {
            if entry.is_en_passant_capture {
                let captured_square = entry.en_passant_before.expect("ep entries record the target");
                self.place_piece(color.opponent(), captured, captured_square);
            } else {
                self.place_piece(color.opponent(), captured, entry.to);
            }
        }

        self.castling_rights = entry.castling_rights_before;
        self.en_passant_square = entry.en_passant_before;
        self.side_to_move = color;
        self.move_cache.invalidate();
    }
}
