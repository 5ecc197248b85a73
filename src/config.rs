//! Centralised tunable constants, following the teacher's
//! `core::config` pattern of keeping magic numbers in one place
//! instead of scattered through the engine.

/// Initial capacity of the move-history stack. Growth beyond this is
/// whatever `Vec`'s amortised-doubling strategy does; spec.md leaves
/// the exact growth policy as an implementation choice and recommends
/// doubling, which `Vec` already gives us.
pub const INITIAL_HISTORY_CAPACITY: usize = 256;

/// Order in which promotion pieces are enumerated by the legality
/// filter and by perft. Any order is spec-legal; this one matches the
/// external-interface table's listing order.
pub const PROMOTION_PIECES: [crate::model::Piece; 4] = [
    crate::model::Piece::Knight,
    crate::model::Piece::Bishop,
    crate::model::Piece::Rook,
    crate::model::Piece::Queen,
];
