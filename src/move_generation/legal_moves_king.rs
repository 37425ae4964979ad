use crate::game_state::chess_rules::{
    back_rank, KINGSIDE_ROOK_FILE, KING_HOME_FILE, QUEENSIDE_ROOK_FILE,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_unless_own_piece;
use crate::moves::step_moves::king_targets;

pub fn generate_king_moves(position: &Position, from: Square, out: &mut Vec<Position>) {
    push_unless_own_piece(position, from, king_targets(from), out);
    generate_castling_moves(position, from, out);
}

/// Castling needs the right, the rook on its corner, an empty path, and a
/// king that is not in check and does not cross an attacked square. The
/// destination square is checked here too; the legality filter re-checks it.
fn generate_castling_moves(position: &Position, king_from: Square, out: &mut Vec<Position>) {
    let side = position.side_to_move;
    let enemy = side.opposite();
    let rank_base = back_rank(side) * 8;

    if king_from != rank_base + KING_HOME_FILE {
        return;
    }
    let can_kingside = position.has_castling_right(kingside_right(side));
    let can_queenside = position.has_castling_right(queenside_right(side));
    if !can_kingside && !can_queenside {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(position, king_from, enemy) {
        return;
    }

    let rook_on = |file: u8| position.piece(rank_base + file).is(side, PieceKind::Rook);

    if can_kingside
        && rook_on(KINGSIDE_ROOK_FILE)
        && path_is_empty(position, rank_base, &[5, 6])
        && path_is_safe(position, rank_base, &[5, 6], enemy)
    {
        out.push(apply_move(position, king_from, rank_base + 6, None));
    }

    if can_queenside
        && rook_on(QUEENSIDE_ROOK_FILE)
        && path_is_empty(position, rank_base, &[1, 2, 3])
        && path_is_safe(position, rank_base, &[3, 2], enemy)
    {
        out.push(apply_move(position, king_from, rank_base + 2, None));
    }
}

fn path_is_empty(position: &Position, rank_base: Square, files: &[u8]) -> bool {
    files
        .iter()
        .all(|&file| position.piece(rank_base + file).is_empty())
}

fn path_is_safe(position: &Position, rank_base: Square, files: &[u8], enemy: Color) -> bool {
    files
        .iter()
        .all(|&file| !is_square_attacked(position, rank_base + file, enemy))
}
