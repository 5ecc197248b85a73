//! A core chess rules engine: bitboard position representation, fully
//! legal move generation, a reversible undo/redo move history, FEN
//! loading, and a perft correctness oracle.
//!
//! ```
//! use chess_core::Game;
//!
//! let mut game = Game::new();
//! assert!(game.r#move(chess_core::Square::new(4, 1), chess_core::Square::new(4, 3)));
//! assert!(game.can_undo());
//! ```
//!
//! Search, evaluation, opening books, tablebases, clocks, PGN/SAN
//! parsing, and draw detection by repetition or the fifty-move rule
//! are out of scope; see `SPEC_FULL.md` at the repository root.

pub mod config;
pub mod error;
pub mod game;
pub mod model;
pub mod perft;

pub use error::{FenError, SquareError};
pub use game::{Game, HistoryEntry};
pub use model::{Bitboard, CastlingRights, Color, Piece, Square};
pub use perft::PerftResult;
