//! Perft-divide diagnostic: prints, for each legal root move, the
//! leaf count below it. Timing and formatting here are outside the
//! engine's scope (spec.md 1); only the library calls it drives are.

use chess_core::{Game, Piece, Square};
use std::time::Instant;

fn main() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let mut game = Game::new();
    game.load_fen(fen).expect("fixed Kiwipete FEN is well-formed");
    let depth = 3;

    println!("Perft divide for Kiwipete depth {depth}");
    let start = Instant::now();
    let mut total = 0u64;

    let mut root_moves: Vec<(Square, Square)> = Vec::new();
    for from_index in 0..64u8 {
        let from = Square::from_index(from_index);
        let mut destinations = game.get_moves(from);
        while let Some(to) = destinations.pop_lsb() {
            root_moves.push((from, to));
        }
    }
    root_moves.sort_by_key(|(from, to)| (from.index(), to.index()));

    for (from, to) in root_moves {
        let is_promotion = game.get_piece(from).map(|(_, p)| p) == Some(Piece::Pawn)
            && (to.rank() == 0 || to.rank() == 7);
        let applied = if is_promotion {
            game.move_and_promote(from, to, Piece::Queen)
        } else {
            game.r#move(from, to)
        };
        debug_assert!(applied, "root move must have come from get_moves");
        let count = game.perft(depth - 1).nodes;
        game.undo();
        println!("  {from}{to}: {count}");
        total += count;
    }

    println!("Total: {total} in {:?}", start.elapsed());
}
