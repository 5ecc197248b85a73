//! Attack-set generation: knight/king leaper tables and rook/bishop
//! slider tables, lazily precomputed once per process. Grounded on
//! the teacher's `magic` module, which builds the same flattened
//! blocker-indexed lookup rather than true PEXT/magic multiplication.

use once_cell::sync::Lazy;

use crate::model::{Bitboard, Color, Piece, Square};

use super::state::Game;

static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    let mut table = [Bitboard::EMPTY; 64];
    for (index, slot) in table.iter_mut().enumerate() {
        let sq = Square::from_index(index as u8);
        *slot = knight_attacks_from_scratch(sq);
    }
    table
});

static KING_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    let mut table = [Bitboard::EMPTY; 64];
    for (index, slot) in table.iter_mut().enumerate() {
        let sq = Square::from_index(index as u8);
        *slot = king_attacks_from_scratch(sq);
    }
    table
});

fn knight_attacks_from_scratch(sq: Square) -> Bitboard {
    const DELTAS: [(i8, i8); 8] = [
        (1, 2),
        (2, 1),
        (2, -1),
        (1, -2),
        (-1, -2),
        (-2, -1),
        (-2, 1),
        (-1, 2),
    ];
    ray_deltas(sq, &DELTAS)
}

fn king_attacks_from_scratch(sq: Square) -> Bitboard {
    const DELTAS: [(i8, i8); 8] = [
        (1, 0),
        (1, 1),
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
        (0, -1),
        (1, -1),
    ];
    ray_deltas(sq, &DELTAS)
}

fn ray_deltas(sq: Square, deltas: &[(i8, i8)]) -> Bitboard {
    let mut bb = Bitboard::EMPTY;
    let file = sq.file() as i8;
    let rank = sq.rank() as i8;
    for (df, dr) in deltas {
        let f = file + df;
        let r = rank + dr;
        if (0..8).contains(&f) && (0..8).contains(&r) {
            bb.set(Square::new(f as u8, r as u8));
        }
    }
    bb
}

#[must_use]
pub(crate) fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index() as usize]
}

#[must_use]
pub(crate) fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index() as usize]
}

struct SliderTable {
    masks: [Bitboard; 64],
    flat: Vec<Bitboard>,
    offsets: [usize; 64],
}

fn build_slider_table(directions: &[(i8, i8)]) -> SliderTable {
    let mut masks = [Bitboard::EMPTY; 64];
    for (index, slot) in masks.iter_mut().enumerate() {
        *slot = relevant_occupancy_mask(Square::from_index(index as u8), directions);
    }

    let mut flat = Vec::new();
    let mut offsets = [0usize; 64];
    for sq in 0..64u8 {
        let mask = masks[sq as usize];
        let bits: Vec<u8> = (0..64u8).filter(|i| mask.contains(Square::from_index(*i))).collect();
        let table_size = 1usize << bits.len();
        offsets[sq as usize] = flat.len();
        for index in 0..table_size {
            let mut blockers = Bitboard::EMPTY;
            for (j, bit_square) in bits.iter().enumerate() {
                if (index >> j) & 1 != 0 {
                    blockers.set(Square::from_index(*bit_square));
                }
            }
            flat.push(slide_rays(Square::from_index(sq), directions, blockers));
        }
    }
    SliderTable { masks, flat, offsets }
}

fn relevant_occupancy_mask(sq: Square, directions: &[(i8, i8)]) -> Bitboard {
    let mut mask = Bitboard::EMPTY;
    let file = sq.file() as i8;
    let rank = sq.rank() as i8;
    for (df, dr) in directions {
        let mut f = file + df;
        let mut r = rank + dr;
        while (0..8).contains(&f) && (0..8).contains(&r) {
            // A blocker on the square the ray would stop at anyway
            // (the board edge in this direction) never changes the
            // attack set, so it is excluded from the relevant mask.
            if (*dr != 0 && (r == 0 || r == 7)) || (*df != 0 && (f == 0 || f == 7)) {
                break;
            }
            mask.set(Square::new(f as u8, r as u8));
            f += df;
            r += dr;
        }
    }
    mask
}

fn slide_rays(sq: Square, directions: &[(i8, i8)], occupancy: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    let file = sq.file() as i8;
    let rank = sq.rank() as i8;
    for (df, dr) in directions {
        let mut f = file + df;
        let mut r = rank + dr;
        while (0..8).contains(&f) && (0..8).contains(&r) {
            let target = Square::new(f as u8, r as u8);
            attacks.set(target);
            if occupancy.contains(target) {
                break;
            }
            f += df;
            r += dr;
        }
    }
    attacks
}

impl SliderTable {
    fn attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        let index = sq.index() as usize;
        let mask = self.masks[index];
        let blockers = occupancy & mask;
        let mut packed = 0usize;
        let mut bit = 0usize;
        for i in 0..64u8 {
            if mask.contains(Square::from_index(i)) {
                if blockers.contains(Square::from_index(i)) {
                    packed |= 1usize << bit;
                }
                bit += 1;
            }
        }
        self.flat[self.offsets[index] + packed]
    }
}

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

static ROOK_TABLE: Lazy<SliderTable> = Lazy::new(|| build_slider_table(&ROOK_DIRECTIONS));
static BISHOP_TABLE: Lazy<SliderTable> = Lazy::new(|| build_slider_table(&BISHOP_DIRECTIONS));

#[must_use]
pub(crate) fn rook_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    ROOK_TABLE.attacks(sq, occupancy)
}

#[must_use]
pub(crate) fn bishop_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    BISHOP_TABLE.attacks(sq, occupancy)
}

#[must_use]
pub(crate) fn queen_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    rook_attacks(sq, occupancy) | bishop_attacks(sq, occupancy)
}

/// Pawn attack squares (capture directions only, not push squares) for
/// a single pawn of `color` on `sq`.
pub(crate) fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    let bb = Bitboard::bit(sq);
    let east = bb.shift_east().forward(color) & !Bitboard::FILE_A;
    let west = bb.shift_west().forward(color) & !Bitboard::FILE_H;
    east | west
}

impl Game {
    /// Whether `square` is attacked by any piece of `by_color` in the
    /// current position. Pawns contribute only capture-direction
    /// attacks, matching spec.md 4.C's enemy attack set definition.
    #[must_use]
    pub(crate) fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        !self.attackers_to(square, by_color).is_empty()
    }

    /// Every square occupied by a `by_color` piece that attacks
    /// `square` in the current position. Used both for check
    /// detection and, in perft, to distinguish single/double/
    /// discovered checks.
    #[must_use]
    pub(crate) fn attackers_to(&self, square: Square, by_color: Color) -> Bitboard {
        let pieces = &self.pieces[by_color.index()];
        let mut attackers = Bitboard::EMPTY;
        attackers = attackers
            | (pawn_attacks(square, by_color.opponent()) & pieces[Piece::Pawn.index()]);
        attackers = attackers | (knight_attacks(square) & pieces[Piece::Knight.index()]);
        attackers = attackers | (king_attacks(square) & pieces[Piece::King.index()]);
        let sliders = rook_attacks(square, self.all_occupied)
            & (pieces[Piece::Rook.index()] | pieces[Piece::Queen.index()]);
        attackers = attackers | sliders;
        let diagonal_sliders = bishop_attacks(square, self.all_occupied)
            & (pieces[Piece::Bishop.index()] | pieces[Piece::Queen.index()]);
        attackers = attackers | diagonal_sliders;
        attackers
    }
}
