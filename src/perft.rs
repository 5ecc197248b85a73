//! Component H: the perft correctness oracle. Recursively enumerates
//! the legal-move tree to a given depth, counting leaf nodes and
//! (optionally) the bucketed sub-counts spec.md 8's published tables
//! check against.

use crate::config::PROMOTION_PIECES;
use crate::game::{Game, HistoryEntry};
use crate::model::{Color, Piece, Square};

/// Leaf-node count plus bucketed counts of captures, en-passant
/// captures, castles, promotions, checks, discovered checks, double
/// checks, and checkmates observed at the leaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PerftResult {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub discovered_checks: u64,
    pub double_checks: u64,
    pub checkmates: u64,
}

impl std::ops::Add for PerftResult {
    type Output = PerftResult;
    fn add(self, rhs: PerftResult) -> PerftResult {
        PerftResult {
            nodes: self.nodes + rhs.nodes,
            captures: self.captures + rhs.captures,
            en_passant: self.en_passant + rhs.en_passant,
            castles: self.castles + rhs.castles,
            promotions: self.promotions + rhs.promotions,
            checks: self.checks + rhs.checks,
            discovered_checks: self.discovered_checks + rhs.discovered_checks,
            double_checks: self.double_checks + rhs.double_checks,
            checkmates: self.checkmates + rhs.checkmates,
        }
    }
}

impl std::ops::AddAssign for PerftResult {
    fn add_assign(&mut self, rhs: PerftResult) {
        *self = *self + rhs;
    }
}

impl Game {
    /// Counts of leaf positions reachable in exactly `depth`
    /// half-moves, with bucketed sub-counts. Algorithm: recursive DFS
    /// taking the least-significant set bit of each source square's
    /// legal-move bitboard in turn; promotion destinations recurse
    /// once per promotion type. Counters are incremented at leaves,
    /// from the last applied move's recorded fields and a post-move
    /// position test, per spec.md 4.H.
    #[must_use]
    pub fn perft(&mut self, depth: u32) -> PerftResult {
        if depth == 0 {
            return PerftResult {
                nodes: 1,
                ..PerftResult::default()
            };
        }

        let mut total = PerftResult::default();
        for from_index in 0..64u8 {
            let from = Square::from_index(from_index);
            let mut destinations = self.get_moves(from);
            while let Some(to) = destinations.pop_lsb() {
                let is_promotion = self.get_piece(from).map(|(_, p)| p) == Some(Piece::Pawn)
                    && (to.rank() == 0 || to.rank() == 7);
                if is_promotion {
                    for &promotion in &PROMOTION_PIECES {
                        let entry = self.apply_internal(from, to, promotion);
                        total += self.perft_step(depth, &entry);
                        self.undo_internal(&entry);
                    }
                } else {
                    let entry = self.apply_internal(from, to, Piece::Queen);
                    total += self.perft_step(depth, &entry);
                    self.undo_internal(&entry);
                }
            }
        }
        total
    }

    fn perft_step(&mut self, depth: u32, entry: &HistoryEntry) -> PerftResult {
        if depth == 1 {
            self.leaf_counts(entry)
        } else {
            self.perft(depth - 1)
        }
    }

    fn leaf_counts(&mut self, entry: &HistoryEntry) -> PerftResult {
        let mover_color = self.side_to_move.opponent();
        let opponent = self.side_to_move;
        let king_square = self.king_square(opponent);
        let attackers = self.attackers_to(king_square, mover_color);
        let attacker_count = attackers.popcount();

        let is_check = attacker_count > 0;
        let is_double_check = attacker_count >= 2;
        let is_discovered_check = attacker_count > 0 && !attackers.contains(entry.to);
        let is_checkmate = is_check && self.no_legal_moves(opponent);

        let mut result = PerftResult {
            nodes: 1,
            ..PerftResult::default()
        };
        if entry.captured.is_some() {
            result.captures += 1;
        }
        if entry.is_en_passant_capture {
            result.en_passant += 1;
        }
        if entry.is_castle() {
            result.castles += 1;
        }
        if entry.promotion.is_some() {
            result.promotions += 1;
        }
        if is_check {
            result.checks += 1;
        }
        if is_discovered_check {
            result.discovered_checks += 1;
        }
        if is_double_check {
            result.double_checks += 1;
        }
        if is_checkmate {
            result.checkmates += 1;
        }
        result
    }

    fn no_legal_moves(&mut self, color: Color) -> bool {
        debug_assert_eq!(self.side_to_move, color);
        for from_index in 0..64u8 {
            if !self.get_moves(Square::from_index(from_index)).is_empty() {
                return false;
            }
        }
        true
    }

    /// Leaf-node count only, skipping every bucketed counter. Used
    /// for high-depth correctness checks where the extra bookkeeping
    /// would otherwise dominate runtime.
    #[must_use]
    pub fn fast_perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut total = 0u64;
        for from_index in 0..64u8 {
            let from = Square::from_index(from_index);
            let mut destinations = self.get_moves(from);
            while let Some(to) = destinations.pop_lsb() {
                let is_promotion = self.get_piece(from).map(|(_, p)| p) == Some(Piece::Pawn)
                    && (to.rank() == 0 || to.rank() == 7);
                if is_promotion {
                    for &promotion in &PROMOTION_PIECES {
                        let entry = self.apply_internal(from, to, promotion);
                        total += self.fast_perft(depth - 1);
                        self.undo_internal(&entry);
                    }
                } else {
                    let entry = self.apply_internal(from, to, Piece::Queen);
                    total += self.fast_perft(depth - 1);
                    self.undo_internal(&entry);
                }
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_one_from_start_matches_twenty() {
        let mut game = Game::new();
        assert_eq!(game.perft(1).nodes, 20);
    }

    #[test]
    fn perft_depth_two_from_start_matches_four_hundred() {
        let mut game = Game::new();
        assert_eq!(game.perft(2).nodes, 400);
    }

    #[test]
    fn fast_perft_matches_perft_node_count() {
        let mut game = Game::new();
        let detailed = game.perft(3).nodes;
        let fast = game.fast_perft(3);
        assert_eq!(detailed, fast);
    }
}
