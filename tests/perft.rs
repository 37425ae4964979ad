//! Published perft node counts for the standard validation positions.

use std::sync::Arc;

use plum_tree::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_tree::move_generation::perft::{perft, perft_multi_threaded, PerftCounts};
use plum_tree::Position;

fn nodes(fen: &str, depth: u8) -> usize {
    let position = Position::from_fen(fen).expect("fen should parse");
    perft(&LegalMoveGenerator, &position, depth).nodes
}

#[test]
fn startpos_node_counts() {
    let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    assert_eq!(nodes(fen, 1), 20);
    assert_eq!(nodes(fen, 2), 400);
    assert_eq!(nodes(fen, 3), 8902);
}

#[test]
fn kiwipete_node_counts() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    assert_eq!(nodes(fen, 1), 48);
    assert_eq!(nodes(fen, 2), 2039);
}

#[test]
fn rook_endgame_node_counts() {
    let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    assert_eq!(nodes(fen, 1), 14);
    assert_eq!(nodes(fen, 2), 191);
    assert_eq!(nodes(fen, 3), 2812);

    let position = Position::from_fen(fen).expect("fen should parse");
    let counts = perft(&LegalMoveGenerator, &position, 3);
    assert_eq!(counts.captures, 209);
    assert_eq!(counts.en_passant, 2);
    assert_eq!(counts.checks, 267);
}

#[test]
fn promotion_heavy_node_counts() {
    let fen = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
    assert_eq!(nodes(fen, 1), 6);
    assert_eq!(nodes(fen, 2), 264);
    assert_eq!(nodes(fen, 3), 9467);

    let mirrored = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";
    assert_eq!(nodes(mirrored, 3), 9467);
}

#[test]
fn position_five_node_counts() {
    let fen = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";
    assert_eq!(nodes(fen, 1), 44);
    assert_eq!(nodes(fen, 2), 1486);
    assert_eq!(nodes(fen, 3), 62_379);
}

#[test]
fn multi_threaded_perft_agrees_on_detailed_counts() {
    let position = Position::new_game();
    let counts = perft_multi_threaded(Arc::new(LegalMoveGenerator), &position, 4);
    assert_eq!(
        counts,
        PerftCounts {
            nodes: 197_281,
            captures: 1576,
            en_passant: 0,
            castles: 0,
            promotions: 0,
            checks: 469,
            checkmates: 8,
        }
    );
}
