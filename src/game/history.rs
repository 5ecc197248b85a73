use crate::model::{Bitboard, CastlingRights, Piece, Square};

/// One entry of the move-history stack: enough information to reverse
/// a single applied move without having snapshotted the whole board
/// (spec.md 9, "History as undo log, not as state").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub promotion: Option<Piece>,
    pub is_en_passant_capture: bool,
    pub is_castle_kingside: bool,
    pub is_castle_queenside: bool,
    pub castling_rights_before: CastlingRights,
    pub en_passant_before: Option<Square>,
}

impl HistoryEntry {
    pub(crate) fn is_castle(&self) -> bool {
        self.is_castle_kingside || self.is_castle_queenside
    }
}

/// Per-position memoisation of legal destination bitboards, indexed
/// by source square (spec.md 4.F). A performance aid only; correct
/// engines must behave identically with this entirely disabled.
#[derive(Clone, Debug)]
pub(crate) struct MoveCache {
    legal_moves: [Bitboard; 64],
    valid: Bitboard,
}

impl MoveCache {
    pub(crate) fn new() -> Self {
        MoveCache {
            legal_moves: [Bitboard::EMPTY; 64],
            valid: Bitboard::EMPTY,
        }
    }

    pub(crate) fn get(&self, square: Square) -> Option<Bitboard> {
        if self.valid.contains(square) {
            Some(self.legal_moves[square.index() as usize])
        } else {
            None
        }
    }

    pub(crate) fn store(&mut self, square: Square, destinations: Bitboard) {
        self.legal_moves[square.index() as usize] = destinations;
        self.valid.set(square);
    }

    /// Every apply, undo, redo, and FEN load clears the whole
    /// valid-set unconditionally; there is no dirty-bit discipline
    /// subtle enough to be worth the risk (spec.md 9).
    pub(crate) fn invalidate(&mut self) {
        self.valid = Bitboard::EMPTY;
    }
}
