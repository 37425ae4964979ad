use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::moves::step_moves::squares_in;

/// Push a successor for every square in `targets` not held by the mover.
#[inline]
pub fn push_unless_own_piece(position: &Position, from: Square, targets: u64, out: &mut Vec<Position>) {
    let side = position.side_to_move;
    for to in squares_in(targets) {
        if !position.piece(to).is_color(side) {
            out.push(apply_move(position, from, to, None));
        }
    }
}

/// Squares holding pieces of `color`, lowest index first.
#[inline]
pub fn occupied_by(position: &Position, color: Color) -> impl Iterator<Item = (Square, PieceKind)> + '_ {
    position
        .squares
        .iter()
        .enumerate()
        .filter_map(move |(square, piece)| match *piece {
            Piece::Occupied(owner, kind) if owner == color => Some((square as Square, kind)),
            _ => None,
        })
}
