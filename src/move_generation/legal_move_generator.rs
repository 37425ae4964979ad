//! Full move generation pipeline.
//!
//! Walks the mover's pieces, dispatches to the per-piece generators to build
//! candidate successors, and optionally runs the legality filter over them.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::filter_invalid;
use crate::move_generation::legal_move_shared::occupied_by;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;

/// Generates and filters: only successors that keep the mover's king safe.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

/// Structural candidates only, before the legality filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_children(&self, position: &Position) -> Vec<Position> {
        generate_legal_children(position)
    }
}

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_children(&self, position: &Position) -> Vec<Position> {
        generate_pseudo_legal_children(position)
    }
}

pub fn generate_pseudo_legal_children(position: &Position) -> Vec<Position> {
    let mut out = Vec::with_capacity(64);

    for (from, kind) in occupied_by(position, position.side_to_move) {
        match kind {
            PieceKind::Pawn => generate_pawn_moves(position, from, &mut out),
            PieceKind::Knight => generate_knight_moves(position, from, &mut out),
            PieceKind::Bishop => generate_bishop_moves(position, from, &mut out),
            PieceKind::Rook => generate_rook_moves(position, from, &mut out),
            PieceKind::Queen => generate_queen_moves(position, from, &mut out),
            PieceKind::King => generate_king_moves(position, from, &mut out),
        }
    }

    out
}

#[inline]
pub fn generate_legal_children(position: &Position) -> Vec<Position> {
    filter_invalid(generate_pseudo_legal_children(position))
}
