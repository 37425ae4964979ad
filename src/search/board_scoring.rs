//! Material scoring exposed to the external evaluator.
//!
//! Only a fixed per-kind material count lives here; positional heuristics
//! belong to whoever drives the search and can plug in through
//! [`BoardScorer`].

use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, position: &Position) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 5000,
        }
    }

    /// Sum of piece values over all 64 squares, White positive.
    pub fn material_balance(position: &Position) -> i32 {
        position
            .squares()
            .iter()
            .map(|piece| match *piece {
                Piece::Empty => 0,
                Piece::Occupied(Color::White, kind) => Self::piece_value(kind),
                Piece::Occupied(Color::Black, kind) => -Self::piece_value(kind),
            })
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position) -> i32 {
        let white_minus_black = Self::material_balance(position);
        match position.side_to_move() {
            Color::White => white_minus_black,
            Color::Black => -white_minus_black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, MaterialScorer};
    use crate::game_state::chess_types::Position;

    #[test]
    fn starting_position_is_level() {
        let start = Position::new_game();
        assert_eq!(MaterialScorer::material_balance(&start), 0);
        assert_eq!(MaterialScorer.score(&start), 0);
    }

    #[test]
    fn missing_black_queen_favours_white() {
        let position = Position::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1")
            .expect("fen should parse");
        assert_eq!(position.evaluate_material(), 900);
        // Black to move sees the deficit.
        assert_eq!(MaterialScorer.score(&position), -900);
    }

    #[test]
    fn capture_changes_material_by_the_captured_value() {
        let position = Position::from_fen("4k3/8/8/3n4/4P3/8/8/4K3 w - - 0 1").expect("fen should parse");
        let before = position.evaluate_material();
        let after = position.derive(28, 35).expect("exd5").evaluate_material();
        assert_eq!(after - before, MaterialScorer::piece_value(crate::game_state::chess_types::PieceKind::Knight));
    }
}
