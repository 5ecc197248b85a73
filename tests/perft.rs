//! Perft oracle tests: the published node counts from spec.md 8 for
//! the starting position, the "Kiwipete" position, and Position-3.

use chess_core::Game;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -";

#[test]
fn starting_position_depth_one_through_four() {
    let mut game = Game::new();
    let r1 = game.perft(1);
    assert_eq!(r1.nodes, 20);

    let r2 = game.perft(2);
    assert_eq!(r2.nodes, 400);

    let r3 = game.perft(3);
    assert_eq!(r3.nodes, 8_902);
    assert_eq!(r3.captures, 34);
    assert_eq!(r3.checks, 12);

    let r4 = game.perft(4);
    assert_eq!(r4.nodes, 197_281);
    assert_eq!(r4.captures, 1_576);
    assert_eq!(r4.checks, 469);
    assert_eq!(r4.checkmates, 8);
}

#[test]
#[ignore = "several seconds at depth 5; run with --ignored"]
fn starting_position_depth_five() {
    let mut game = Game::new();
    let r5 = game.perft(5);
    assert_eq!(r5.nodes, 4_865_609);
    assert_eq!(r5.captures, 82_719);
    assert_eq!(r5.en_passant, 258);
    assert_eq!(r5.checks, 27_351);
    assert_eq!(r5.checkmates, 347);
}

#[test]
#[ignore = "minutes at depth 6; run with --ignored"]
fn starting_position_depth_six() {
    let mut game = Game::new();
    let r6 = game.perft(6);
    assert_eq!(r6.nodes, 119_060_324);
    assert_eq!(r6.captures, 2_812_008);
    assert_eq!(r6.en_passant, 5_248);
    assert_eq!(r6.checks, 809_099);
    assert_eq!(r6.checkmates, 10_828);
}

#[test]
fn kiwipete_depth_one_through_three() {
    let mut game = Game::new();
    game.load_fen(KIWIPETE).unwrap();
    assert_eq!(game.perft(1).nodes, 48);
    assert_eq!(game.perft(2).nodes, 2_039);
    assert_eq!(game.perft(3).nodes, 97_862);
}

#[test]
#[ignore = "tens of seconds at depth 4; run with --ignored"]
fn kiwipete_depth_four() {
    let mut game = Game::new();
    game.load_fen(KIWIPETE).unwrap();
    assert_eq!(game.perft(4).nodes, 4_085_603);
}

#[test]
fn position_3_depth_one() {
    let mut game = Game::new();
    game.load_fen(POSITION_3).unwrap();
    assert_eq!(game.perft(1).nodes, 14);
}

#[test]
#[ignore = "tens of seconds at depth 4-5; run with --ignored"]
fn position_3_depth_four_and_five() {
    let mut game = Game::new();
    game.load_fen(POSITION_3).unwrap();
    assert_eq!(game.perft(4).nodes, 43_238);
    assert_eq!(game.perft(5).nodes, 674_624);
}

#[test]
fn fast_perft_matches_full_perft_node_count_at_depth_four() {
    let mut game = Game::new();
    let full = game.perft(4).nodes;
    let fast = game.fast_perft(4);
    assert_eq!(full, fast);
}

#[test]
#[ignore = "several seconds; run with --ignored"]
fn fast_perft_five_from_start_matches_published_count() {
    let mut game = Game::new();
    assert_eq!(game.fast_perft(5), 4_865_609);
}

// The positions below are not in spec.md's oracle tables; they are
// additional independently-published perft positions that strengthen
// coverage without touching anything spec.md excludes.

#[test]
fn position_4_depth_one_through_three() {
    let mut game = Game::new();
    game.load_fen("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -")
        .unwrap();
    assert_eq!(game.fast_perft(1), 6);
    assert_eq!(game.fast_perft(2), 264);
    assert_eq!(game.fast_perft(3), 9_467);
}

#[test]
fn position_5_depth_one_through_three() {
    let mut game = Game::new();
    game.load_fen("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ -")
        .unwrap();
    assert_eq!(game.fast_perft(1), 44);
    assert_eq!(game.fast_perft(2), 1_486);
    assert_eq!(game.fast_perft(3), 62_379);
}

#[test]
fn position_6_depth_one_through_three() {
    let mut game = Game::new();
    game.load_fen("r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - -")
        .unwrap();
    assert_eq!(game.fast_perft(1), 46);
    assert_eq!(game.fast_perft(2), 2_079);
    assert_eq!(game.fast_perft(3), 89_890);
}

#[test]
fn castling_position_depth_one_through_three() {
    let mut game = Game::new();
    game.load_fen("r3k3/8/8/8/8/8/8/R3K2R w KQ -").unwrap();
    assert_eq!(game.fast_perft(1), 26);
    assert_eq!(game.fast_perft(2), 331);
    assert_eq!(game.fast_perft(3), 8_337);
}

#[test]
fn promotion_position_depth_one_through_three() {
    let mut game = Game::new();
    game.load_fen("n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - -").unwrap();
    assert_eq!(game.fast_perft(1), 24);
    assert_eq!(game.fast_perft(2), 496);
    assert_eq!(game.fast_perft(3), 9_483);
}
