//! Square-name conversions (`e4` <-> square index).
//!
//! Used by the FEN decoder/encoder for the en-passant field and by
//! `ChessMove::to_long_algebraic`.

use crate::error::{ChessError, ChessResult};
use crate::game_state::chess_types::{file_of, rank_of, square_at, Square};

/// Convert a square name such as `"e4"` to its index.
pub fn algebraic_to_square(name: &str) -> ChessResult<Square> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::MalformedInput(format!(
            "invalid algebraic square: {name}"
        )));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::MalformedInput(format!(
            "invalid algebraic file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::MalformedInput(format!(
            "invalid algebraic rank: {}",
            rank as char
        )));
    }

    square_at(usize::from(rank - b'1'), usize::from(file - b'a'))
}

/// Name of a square (`0..=63`), for example `28 -> "e4"`.
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));
    format!("{file_char}{rank_char}")
}
