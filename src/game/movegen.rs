//! Component C: pseudo-move generation. Produces, for a piece on a
//! given square, the bitboard of squares it could reach ignoring
//! king safety. Castling legality (rights, empty path, attacked
//! transit squares) is handled here rather than in the legality
//! filter, since it cannot be expressed as a plain post-move check
//! test (the king must not pass *through* an attacked square, not
//! merely land off one).

use crate::model::{Bitboard, Color, Piece, Square};

use super::attacks::{bishop_attacks, king_attacks, knight_attacks, queen_attacks, rook_attacks};
use super::state::{rear_rank, Game};

impl Game {
    /// Pseudo-legal destinations for the piece of `color` on `from`.
    /// Caller must already know `from` holds a `color` piece of type
    /// `piece`.
    pub(crate) fn pseudo_moves(&self, from: Square, color: Color, piece: Piece) -> Bitboard {
        match piece {
            Piece::Pawn => self.pawn_pseudo_moves(from, color),
            Piece::Knight => knight_attacks(from) & !self.occupied(color),
            Piece::Bishop => bishop_attacks(from, self.all_occupied) & !self.occupied(color),
            Piece::Rook => rook_attacks(from, self.all_occupied) & !self.occupied(color),
            Piece::Queen => queen_attacks(from, self.all_occupied) & !self.occupied(color),
            Piece::King => self.king_pseudo_moves(from, color),
        }
    }

    fn pawn_pseudo_moves(&self, from: Square, color: Color) -> Bitboard {
        let from_bb = Bitboard::bit(from);
        let double_push_rank = match color {
            Color::White => Bitboard::RANK_4,
            Color::Black => Bitboard::RANK_5,
        };

        let single_push = from_bb.forward(color) & !self.all_occupied;
        let double_push = single_push.forward(color) & double_push_rank & !self.all_occupied;
        let mut moves = single_push | double_push;

        let east_target = from_bb.shift_east().forward(color) & !Bitboard::FILE_A;
        let west_target = from_bb.shift_west().forward(color) & !Bitboard::FILE_H;
        let en_passant_target = self
            .en_passant_square
            .and_then(|ep| ep.forward(color))
            .map(Bitboard::bit)
            .unwrap_or(Bitboard::EMPTY);
        let capturable = self.occupied(color.opponent()) | en_passant_target;
        moves = moves | (east_target & capturable) | (west_target & capturable);

        moves
    }

    fn king_pseudo_moves(&self, from: Square, color: Color) -> Bitboard {
        let mut moves = king_attacks(from) & !self.occupied(color);
        let rear = rear_rank(color);
        if from != Square::new(4, rear) {
            return moves;
        }
        let enemy = color.opponent();

        let kingside_clear = !self.all_occupied.contains(Square::new(5, rear))
            && !self.all_occupied.contains(Square::new(6, rear));
        let kingside_rook = self.piece_type_at(color, Square::new(7, rear)) == Some(Piece::Rook);
        if !self.castling_rights.can_never_castle(color, true)
            && kingside_rook
            && kingside_clear
            && !self.is_square_attacked(Square::new(4, rear), enemy)
            && !self.is_square_attacked(Square::new(5, rear), enemy)
            && !self.is_square_attacked(Square::new(6, rear), enemy)
        {
            moves.set(Square::new(6, rear));
        }

        let queenside_clear = !self.all_occupied.contains(Square::new(1, rear))
            && !self.all_occupied.contains(Square::new(2, rear))
            && !self.all_occupied.contains(Square::new(3, rear));
        let queenside_rook = self.piece_type_at(color, Square::new(0, rear)) == Some(Piece::Rook);
        if !self.castling_rights.can_never_castle(color, false)
            && queenside_rook
            && queenside_clear
            && !self.is_square_attacked(Square::new(4, rear), enemy)
            && !self.is_square_attacked(Square::new(3, rear), enemy)
            && !self.is_square_attacked(Square::new(2, rear), enemy)
        {
            moves.set(Square::new(2, rear));
        }

        moves
    }
}
