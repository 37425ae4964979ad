//! Position-to-FEN serializer, the inverse of `fen_parser`.

use crate::game_state::chess_rules::en_passant_capture_rank;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(position: &Position) -> String {
    let side_to_move = match position.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };

    format!(
        "{} {} {} {} {} {}",
        generate_board_field(position),
        side_to_move,
        generate_castling_field(position.castling_rights()),
        generate_en_passant_field(position),
        position.halfmove_clock(),
        position.fullmove_number()
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::with_capacity(72);

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match position.piece(rank * 8 + file).fen_char() {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let out: String = [
        (CASTLE_WHITE_KINGSIDE, 'K'),
        (CASTLE_WHITE_QUEENSIDE, 'Q'),
        (CASTLE_BLACK_KINGSIDE, 'k'),
        (CASTLE_BLACK_QUEENSIDE, 'q'),
    ]
    .iter()
    .filter(|(flag, _)| rights & flag != 0)
    .map(|&(_, ch)| ch)
    .collect();

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}

/// The en-passant target sits behind the pawn that just double-advanced,
/// i.e. one rank towards the mover from the capturing pawns' rank.
fn generate_en_passant_field(position: &Position) -> String {
    let Some(file) = position.en_passant_file() else {
        return "-".to_owned();
    };

    let side = position.side_to_move();
    let capture_rank = en_passant_capture_rank(side);
    let target_rank = match side {
        Color::White => capture_rank + 1,
        Color::Black => capture_rank - 1,
    };
    square_to_algebraic(target_rank * 8 + file)
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, Position, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE};

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = Position::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(generate_fen(&parsed), STARTING_POSITION_FEN);
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let parsed = Position::from_fen(fen).expect("custom FEN should parse");
        let generated = generate_fen(&parsed);
        assert_eq!(generated, fen);

        let reparsed = Position::from_fen(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed.squares(), parsed.squares());
        assert_eq!(reparsed.side_to_move(), Color::Black);
        assert_eq!(
            reparsed.castling_rights(),
            CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE
        );
    }

    #[test]
    fn en_passant_square_is_reconstructed_from_file() {
        let start = Position::new_game();
        let after_e4 = start.derive(12, 28).expect("e2e4 should apply");
        assert_eq!(
            generate_fen(&after_e4),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );

        let after_d5 = after_e4.derive(51, 35).expect("d7d5 should apply");
        assert_eq!(
            generate_fen(&after_d5),
            "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2"
        );
    }
}
