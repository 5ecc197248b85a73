//! Component D: the legality filter. Takes the pseudo-move set from
//! component C and keeps only destinations that do not leave the
//! mover's own king in check, by actually applying the move, testing,
//! and unapplying it (spec.md 4.D) — reusing the exact apply/undo
//! paths component E exposes, so the two can never disagree about
//! what a move does.

use crate::model::{Bitboard, Piece, Square};

use super::state::Game;

impl Game {
    /// Legal destinations for the piece on `from`, empty if `from` is
    /// empty or holds a piece of the wrong colour.
    pub(crate) fn legal_destinations(&mut self, from: Square) -> Bitboard {
        let color = self.side_to_move;
        let Some(piece) = self.piece_type_at(color, from) else {
            return Bitboard::EMPTY;
        };

        let mut pseudo = self.pseudo_moves(from, color, piece);
        let mut legal = Bitboard::EMPTY;
        while let Some(to) = pseudo.pop_lsb() {
            // En-passant must apply its capture (removing the enemy
            // pawn from the en-passant square, not from `to`) before
            // testing for check, since it can expose a horizontal
            // discovered check along the vacated rank. apply_internal
            // already does this unconditionally, so the generic test
            // below covers en-passant with no special case.
            // Promotion choice does not affect king safety: any piece
            // sitting on `to` blocks rays the same way, so Queen is
            // used as a placeholder regardless of which promotion the
            // caller will eventually choose.
            let entry = self.apply_internal(from, to, Piece::Queen);
            let king_square = self.king_square(color);
            let safe = !self.is_square_attacked(king_square, color.opponent());
            self.undo_internal(&entry);
            if safe {
                legal.set(to);
            }
        }
        legal
    }
}
