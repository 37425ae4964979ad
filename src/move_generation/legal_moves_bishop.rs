use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_unless_own_piece;
use crate::moves::slider_moves::{slider_attacks, BISHOP_DIRECTIONS};

pub fn generate_bishop_moves(position: &Position, from: Square, out: &mut Vec<Position>) {
    let targets = slider_attacks(position, from, &BISHOP_DIRECTIONS);
    push_unless_own_piece(position, from, targets, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::chess_types::Position;

    #[test]
    fn bishop_on_open_board_from_d4() {
        let position = Position::from_fen("7k/8/8/8/3B4/8/8/K7 w - - 0 1").expect("fen should parse");
        let mut out = Vec::new();
        generate_bishop_moves(&position, 27, &mut out);
        // 13 diagonal squares minus a1 held by the own king
        assert_eq!(out.len(), 12);
    }
}
