//! Components B through G: the `Game` struct and every operation that
//! mutates or queries it. Split across files by responsibility the
//! way the teacher splits its own board module — state, attacks,
//! move generation, legality, apply/undo, history, FEN, and the
//! public query surface each get their own file, all contributing
//! `impl Game` blocks.

mod attacks;
mod fen;
mod history;
mod legality;
mod make_unmake;
mod movegen;
mod queries;
mod state;

pub use history::HistoryEntry;
pub use state::Game;
