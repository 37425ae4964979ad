//! FEN-to-Position decoder.
//!
//! Placement, active color, and castling availability are required; the
//! en-passant, halfmove, and fullmove fields are optional and default to
//! `-`, `0`, and `1`. Anything that does not decode cleanly is rejected with
//! `ChessError::MalformedInput` rather than skipped.

use log::trace;

use crate::error::{ChessError, ChessResult};
use crate::game_state::chess_rules::en_passant_capture_rank;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| malformed("missing board layout in FEN"))?;
    let side_part = parts.next().ok_or_else(|| malformed("missing side-to-move in FEN"))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| malformed("missing castling rights in FEN"))?;
    let en_passant_part = parts.next().unwrap_or("-");
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(malformed("FEN has extra trailing fields"));
    }

    let squares = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_file = parse_en_passant(en_passant_part, side_to_move)?;
    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| malformed(format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| malformed(format!("invalid fullmove number: {fullmove_part}")))?;

    trace!("decoded FEN {fen}");

    Position::from_parts(
        squares,
        side_to_move,
        castling_rights,
        en_passant_file,
        halfmove_clock,
        fullmove_number,
    )
}

fn malformed(message: impl Into<String>) -> ChessError {
    ChessError::MalformedInput(message.into())
}

fn parse_board(board_part: &str) -> ChessResult<[Piece; 64]> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(malformed(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut squares = [Piece::Empty; 64];

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(malformed(format!("invalid empty-square count '{ch}'")));
                }
                file += run as usize;
            } else {
                let piece = piece_from_fen_char(ch)
                    .ok_or_else(|| malformed(format!("invalid piece character '{ch}'")))?;
                if file >= 8 {
                    return Err(malformed(format!("rank '{rank_str}' has too many files")));
                }
                squares[board_rank * 8 + file] = piece;
                file += 1;
            }

            if file > 8 {
                return Err(malformed(format!("rank '{rank_str}' has too many files")));
            }
        }

        if file != 8 {
            return Err(malformed(format!("rank '{rank_str}' does not sum to 8 files")));
        }
    }

    Ok(squares)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(malformed(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        let flag = match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(malformed(format!("invalid castling rights character: {ch}"))),
        };
        if rights & flag != 0 {
            return Err(malformed(format!("duplicate castling rights character: {ch}")));
        }
        rights |= flag;
    }

    Ok(rights)
}

/// The target square must sit directly behind the capturing side's
/// en-passant rank, otherwise the field cannot describe a double advance.
fn parse_en_passant(en_passant_part: &str, side_to_move: Color) -> ChessResult<Option<u8>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)?;
    let expected_rank = match side_to_move {
        Color::White => en_passant_capture_rank(Color::White) + 1,
        Color::Black => en_passant_capture_rank(Color::Black) - 1,
    };
    if rank_of(square) != expected_rank {
        return Err(malformed(format!(
            "en-passant square {en_passant_part} does not match side to move"
        )));
    }

    Ok(Some(file_of(square)))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
