//! Attack detection and the legality filter.
//!
//! A candidate successor is legal when both colors still have exactly one
//! king and the side that just moved is not attacked on its king square.
//! Attacks are found by looking outward from the target square with the
//! same offsets and rays the generators use.

use log::trace;

use crate::error::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::occupied_by;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::slider_moves::{first_blocker, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::moves::step_moves::{king_targets, knight_targets, squares_in};

#[inline]
pub fn king_square(position: &Position, color: Color) -> Option<Square> {
    occupied_by(position, color)
        .find(|&(_, kind)| kind == PieceKind::King)
        .map(|(square, _)| square)
}

#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = king_square(position, color) else {
        return false;
    };
    is_square_attacked(position, king_sq, color.opposite())
}

pub fn is_square_attacked(position: &Position, square: Square, attacker: Color) -> bool {
    let holds = |target: Square, kind: PieceKind| position.piece(target).is(attacker, kind);

    // A pawn of `attacker` hits `square` from where a defending pawn on
    // `square` would itself capture.
    if squares_in(pawn_attacks(attacker.opposite(), square)).any(|from| holds(from, PieceKind::Pawn)) {
        return true;
    }

    if squares_in(knight_targets(square)).any(|from| holds(from, PieceKind::Knight)) {
        return true;
    }

    if squares_in(king_targets(square)).any(|from| holds(from, PieceKind::King)) {
        return true;
    }

    let slider_hits = |directions: &[(i8, i8)], kind: PieceKind| {
        directions.iter().any(|&direction| {
            first_blocker(position, square, direction)
                .is_some_and(|from| holds(from, kind) || holds(from, PieceKind::Queen))
        })
    };

    slider_hits(&BISHOP_DIRECTIONS, PieceKind::Bishop) || slider_hits(&ROOK_DIRECTIONS, PieceKind::Rook)
}

/// Exactly one king per color.
pub fn check_king_counts(position: &Position) -> ChessResult<()> {
    for color in [Color::White, Color::Black] {
        let kings = occupied_by(position, color)
            .filter(|&(_, kind)| kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(ChessError::InvalidPosition(format!(
                "{color:?} has {kings} kings"
            )));
        }
    }
    Ok(())
}

/// Structural check of a candidate successor.
pub fn check_position(position: &Position) -> ChessResult<()> {
    check_king_counts(position)?;

    let mover = position.side_to_move.opposite();
    if is_king_in_check(position, mover) {
        return Err(ChessError::InvalidPosition(format!(
            "{mover:?} king left under attack"
        )));
    }
    Ok(())
}

#[inline]
pub fn is_valid_position(position: &Position) -> bool {
    check_position(position).is_ok()
}

/// Drop every candidate that fails [`check_position`].
pub fn filter_invalid(mut candidates: Vec<Position>) -> Vec<Position> {
    candidates.retain(|candidate| match check_position(candidate) {
        Ok(()) => true,
        Err(reason) => {
            trace!("discarding candidate: {reason}");
            false
        }
    });
    candidates
}
