use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_unless_own_piece;
use crate::moves::step_moves::knight_targets;

pub fn generate_knight_moves(position: &Position, from: Square, out: &mut Vec<Position>) {
    push_unless_own_piece(position, from, knight_targets(from), out);
}
