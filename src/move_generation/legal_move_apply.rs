//! Position derivation: copy a parent and apply exactly one move.
//!
//! The steps run in a fixed order: copy, halfmove clock, side to move,
//! en-passant file, en-passant capture, king/castling, rook corner rights,
//! and finally the placement update.

use crate::error::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    BLACK_KINGSIDE_CORNER, BLACK_QUEENSIDE_CORNER, KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE,
    WHITE_KINGSIDE_CORNER, WHITE_QUEENSIDE_CORNER,
};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{
    ChessMove, MoveFlags, FLAG_CAPTURE, FLAG_CASTLING, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
    FLAG_PROMOTION,
};

/// Checked entry point behind `Position::derive`.
pub fn derive_position(parent: &Position, from: Square, to: Square) -> ChessResult<Position> {
    validate_move_squares(parent, from, to)?;
    Ok(apply_move(parent, from, to, None))
}

/// Checked entry point behind `Position::derive_promotion`.
pub fn derive_promotion_position(
    parent: &Position,
    from: Square,
    to: Square,
    promoted: PieceKind,
) -> ChessResult<Position> {
    validate_move_squares(parent, from, to)?;
    if !PROMOTION_KINDS.contains(&promoted) {
        return Err(ChessError::MalformedInput(format!(
            "cannot promote to {promoted:?}"
        )));
    }
    Ok(apply_move(parent, from, to, Some(promoted)))
}

fn validate_move_squares(parent: &Position, from: Square, to: Square) -> ChessResult<()> {
    if parent.piece_on(from)?.is_empty() {
        return Err(ChessError::EmptySquare(from));
    }
    parent.piece_on(to)?;
    Ok(())
}

/// Apply a move whose squares are known to be on the board and whose origin
/// holds a piece.
pub(crate) fn apply_move(
    parent: &Position,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Position {
    let moving = parent.piece(from);
    let captured = parent.piece(to);
    let mover = moving.color().unwrap_or(parent.side_to_move);
    let is_pawn = moving.is_kind(PieceKind::Pawn);

    let (from_rank, from_file) = (rank_of(from), file_of(from));
    let (to_rank, to_file) = (rank_of(to), file_of(to));
    let mut flags: MoveFlags = 0;

    let mut next = parent.clone();

    // Halfmove clock.
    if !captured.is_empty() {
        flags |= FLAG_CAPTURE;
    }
    next.halfmove_clock = if !captured.is_empty() || is_pawn {
        0
    } else {
        parent.halfmove_clock.saturating_add(1)
    };

    // Side to move.
    next.side_to_move = parent.side_to_move.opposite();
    if parent.side_to_move == Color::Black {
        next.fullmove_number = parent.fullmove_number.saturating_add(1);
    }

    // En-passant file.
    next.en_passant_file = if is_pawn && from_rank.abs_diff(to_rank) == 2 {
        flags |= FLAG_DOUBLE_PAWN_PUSH;
        Some(from_file)
    } else {
        None
    };

    // En-passant capture: diagonal pawn step onto an empty square removes the
    // pawn beside the origin.
    if is_pawn && captured.is_empty() && from_file != to_file && from_rank.abs_diff(to_rank) == 1 {
        let victim = from_rank * 8 + to_file;
        if next.piece(victim).is(mover.opposite(), PieceKind::Pawn) {
            next.squares[victim as usize] = Piece::Empty;
            flags |= FLAG_CAPTURE | FLAG_EN_PASSANT;
        }
    }

    // King moves drop both rights; a two-file step also moves the rook.
    if moving.is_kind(PieceKind::King) {
        next.castling_rights &= !(kingside_right(mover) | queenside_right(mover));

        if from_file.abs_diff(to_file) == 2 {
            let (rook_from_file, rook_to_file) = if to_file > from_file {
                (KINGSIDE_ROOK_FILE, 5)
            } else {
                (QUEENSIDE_ROOK_FILE, 3)
            };
            let rook_from = (from_rank * 8 + rook_from_file) as usize;
            let rook_to = (from_rank * 8 + rook_to_file) as usize;
            next.squares[rook_to] = next.squares[rook_from];
            next.squares[rook_from] = Piece::Empty;
            flags |= FLAG_CASTLING;
        }
    }

    // A rook leaving its corner, or anything landing on a corner, ends that
    // corner's right.
    if moving.is_kind(PieceKind::Rook) {
        next.castling_rights &= !corner_right(from);
    }
    next.castling_rights &= !corner_right(to);

    // Placement.
    next.squares[to as usize] = match promotion {
        Some(kind) => {
            flags |= FLAG_PROMOTION;
            Piece::new(mover, kind)
        }
        None => moving,
    };
    next.squares[from as usize] = Piece::Empty;

    next.last_move = Some(ChessMove {
        from,
        to,
        promotion,
        flags,
    });

    next
}

#[inline]
const fn corner_right(square: Square) -> CastlingRights {
    match square {
        WHITE_QUEENSIDE_CORNER => CASTLE_WHITE_QUEENSIDE,
        WHITE_KINGSIDE_CORNER => CASTLE_WHITE_KINGSIDE,
        BLACK_QUEENSIDE_CORNER => CASTLE_BLACK_QUEENSIDE,
        BLACK_KINGSIDE_CORNER => CASTLE_BLACK_KINGSIDE,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ChessError;
    use crate::game_state::chess_types::*;

    fn position(fen: &str) -> Position {
        Position::from_fen(fen).expect("fen should parse")
    }

    #[test]
    fn derive_flips_side_and_records_move() {
        let start = Position::new_game();
        let child = start.derive(6, 21).expect("Nf3 should apply");
        assert_eq!(child.side_to_move(), Color::Black);
        assert_eq!(child.piece_on(21), Ok(Piece::new(Color::White, PieceKind::Knight)));
        assert_eq!(child.piece_on(6), Ok(Piece::Empty));
        let mv = child.last_move().expect("derived position records its move");
        assert_eq!((mv.from, mv.to), (6, 21));
        assert_eq!(mv.to_long_algebraic(), "g1f3");
        // The parent is untouched.
        assert_eq!(start, Position::new_game());
    }

    #[test]
    fn halfmove_clock_resets_on_pawn_moves_and_captures() {
        let quiet = position("4k3/8/8/3p4/8/8/4P3/R3K3 w - - 12 40");
        assert_eq!(quiet.derive(0, 1).expect("Rb1").halfmove_clock(), 13);
        assert_eq!(quiet.derive(12, 20).expect("e3").halfmove_clock(), 0);
        assert_eq!(quiet.derive(0, 56).expect("Ra8").halfmove_clock(), 13);

        let capture = position("4k3/8/8/3p4/8/8/8/R2RK3 w - - 12 40");
        assert_eq!(capture.derive(3, 35).expect("Rxd5").halfmove_clock(), 0);
    }

    #[test]
    fn fullmove_number_advances_after_black_moves() {
        let start = Position::new_game();
        let after_white = start.derive(12, 28).expect("e4");
        assert_eq!(after_white.fullmove_number(), 1);
        let after_black = after_white.derive(52, 36).expect("e5");
        assert_eq!(after_black.fullmove_number(), 2);
    }

    #[test]
    fn double_push_sets_en_passant_file_and_next_move_clears_it() {
        let start = Position::new_game();
        let after_double = start.derive(11, 27).expect("d4");
        assert_eq!(after_double.en_passant_file(), Some(3));
        let after_reply = after_double.derive(62, 45).expect("Nf6");
        assert_eq!(after_reply.en_passant_file(), None);
        let single = start.derive(11, 19).expect("d3");
        assert_eq!(single.en_passant_file(), None);
    }

    #[test]
    fn en_passant_capture_removes_the_passed_pawn() {
        let before = position("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1");
        let after = before.derive(27, 20).expect("dxe3 e.p.");
        assert_eq!(after.piece_on(20), Ok(Piece::new(Color::Black, PieceKind::Pawn)));
        assert_eq!(after.piece_on(28), Ok(Piece::Empty));
        assert_eq!(after.piece_on(27), Ok(Piece::Empty));
        let mv = after.last_move().expect("move recorded");
        assert!(mv.is_en_passant() && mv.is_capture());
        assert_eq!(after.halfmove_clock(), 0);
    }

    #[test]
    fn castling_relocates_the_rook_and_clears_rights() {
        let before = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10");
        let kingside = before.derive(4, 6).expect("O-O");
        assert_eq!(kingside.piece_on(6), Ok(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(kingside.piece_on(5), Ok(Piece::new(Color::White, PieceKind::Rook)));
        assert_eq!(kingside.piece_on(7), Ok(Piece::Empty));
        assert_eq!(kingside.castling_rights(), CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
        assert!(kingside.last_move().is_some_and(|mv| mv.is_castling()));

        let queenside = before.derive(4, 2).expect("O-O-O");
        assert_eq!(queenside.piece_on(2), Ok(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(queenside.piece_on(3), Ok(Piece::new(Color::White, PieceKind::Rook)));
        assert_eq!(queenside.piece_on(0), Ok(Piece::Empty));

        let black = position("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 3 10")
            .derive(60, 58)
            .expect("...O-O-O");
        assert_eq!(black.piece_on(59), Ok(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(black.castling_rights(), CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE);
    }

    #[test]
    fn rook_moves_and_captures_clear_corner_rights() {
        let before = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let rook_left = before.derive(7, 15).expect("Rh2");
        assert_eq!(rook_left.castling_rights(), CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);

        // Rxh8 removes White's kingside right (rook left h1) and Black's kingside right.
        let captured_h8 = before.derive(7, 63).expect("Rxh8");
        assert_eq!(captured_h8.castling_rights(), CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_QUEENSIDE);

        // Rxa8 removes Black's queenside right, not the kingside one.
        let captured_a8 = before.derive(0, 56).expect("Rxa8");
        assert_eq!(captured_a8.castling_rights(), CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_KINGSIDE);
    }

    #[test]
    fn promotion_overwrites_the_destination() {
        let before = position("3rk3/2P5/8/8/8/8/8/4K3 w - - 5 50");
        let promoted = before
            .derive_promotion(50, 59, PieceKind::Knight)
            .expect("cxd8=N");
        assert_eq!(promoted.piece_on(59), Ok(Piece::new(Color::White, PieceKind::Knight)));
        assert_eq!(promoted.piece_on(50), Ok(Piece::Empty));
        assert_eq!(promoted.halfmove_clock(), 0);
        let mv = promoted.last_move().expect("move recorded");
        assert!(mv.is_promotion() && mv.is_capture());
        assert_eq!(mv.to_long_algebraic(), "c7d8n");
    }

    #[test]
    fn derive_rejects_bad_input() {
        let start = Position::new_game();
        assert_eq!(start.derive(64, 0), Err(ChessError::SquareOutOfRange(64)));
        assert_eq!(start.derive(12, 200), Err(ChessError::SquareOutOfRange(200)));
        assert_eq!(start.derive(28, 36), Err(ChessError::EmptySquare(28)));
        assert!(matches!(
            start.derive_promotion(12, 28, PieceKind::King),
            Err(ChessError::MalformedInput(_))
        ));
    }
}
