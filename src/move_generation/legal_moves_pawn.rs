use crate::game_state::chess_rules::{
    en_passant_capture_rank, pawn_direction, pawn_home_rank, promotion_rank,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;

pub fn generate_pawn_moves(position: &Position, from: Square, out: &mut Vec<Position>) {
    let side = position.side_to_move;
    let direction = pawn_direction(side);
    let rank = rank_of(from) as i8;
    let file = file_of(from) as i8;

    if let Some(one_step) = offset_square(rank + direction, file) {
        if position.piece(one_step).is_empty() {
            push_pawn_move(position, from, one_step, out);

            if rank_of(from) == pawn_home_rank(side) {
                if let Some(two_step) = offset_square(rank + 2 * direction, file) {
                    if position.piece(two_step).is_empty() {
                        out.push(apply_move(position, from, two_step, None));
                    }
                }
            }
        }
    }

    // captures and en-passant
    for file_delta in [-1i8, 1i8] {
        let Some(to) = offset_square(rank + direction, file + file_delta) else {
            continue;
        };
        let target = position.piece(to);

        if target.is_color(side.opposite()) {
            push_pawn_move(position, from, to, out);
        } else if target.is_empty() && is_en_passant_capture(position, from, file + file_delta) {
            out.push(apply_move(position, from, to, None));
        }
    }
}

/// The adjacent pawn on `target_file` double-advanced on the previous ply.
fn is_en_passant_capture(position: &Position, from: Square, target_file: i8) -> bool {
    let side = position.side_to_move;
    if position.en_passant_file != Some(target_file as u8)
        || rank_of(from) != en_passant_capture_rank(side)
    {
        return false;
    }

    offset_square(rank_of(from) as i8, target_file)
        .is_some_and(|square| position.piece(square).is(side.opposite(), PieceKind::Pawn))
}

fn push_pawn_move(position: &Position, from: Square, to: Square, out: &mut Vec<Position>) {
    if rank_of(to) == promotion_rank(position.side_to_move) {
        for kind in PROMOTION_KINDS {
            out.push(apply_move(position, from, to, Some(kind)));
        }
    } else {
        out.push(apply_move(position, from, to, None));
    }
}
