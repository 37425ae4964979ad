use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_unless_own_piece;
use crate::moves::slider_moves::{slider_attacks, QUEEN_DIRECTIONS};

pub fn generate_queen_moves(position: &Position, from: Square, out: &mut Vec<Position>) {
    let targets = slider_attacks(position, from, &QUEEN_DIRECTIONS);
    push_unless_own_piece(position, from, targets, out);
}
