//! Canonical chess-rule constants.
//!
//! Static rule literals shared by the FEN decoder, move generator, and
//! `derive`: the starting position, pawn home/promotion ranks, and the
//! castling corner squares.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Rank a pawn of `color` starts on (and may double-advance from).
#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Rank a pawn of `color` promotes on.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Rank a pawn of `color` must stand on to capture en passant.
#[inline]
pub const fn en_passant_capture_rank(color: Color) -> u8 {
    match color {
        Color::White => 4,
        Color::Black => 3,
    }
}

/// Forward rank direction for pawns of `color`.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Back rank for `color` (king and rook home rank).
#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

pub const KING_HOME_FILE: u8 = 4;
pub const KINGSIDE_ROOK_FILE: u8 = 7;
pub const QUEENSIDE_ROOK_FILE: u8 = 0;

pub const WHITE_QUEENSIDE_CORNER: Square = 0;
pub const WHITE_KINGSIDE_CORNER: Square = 7;
pub const BLACK_QUEENSIDE_CORNER: Square = 56;
pub const BLACK_KINGSIDE_CORNER: Square = 63;
