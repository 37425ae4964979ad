//! Ray walking for the sliding pieces over the square array.
//!
//! A ray runs from (but excluding) the origin towards the board edge and stops
//! on the first occupied square, which is included so the caller can decide
//! between capture and blocked.

use crate::game_state::chess_types::{file_of, offset_square, rank_of, Position, Square};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Every on-board square along `direction`, ignoring occupancy.
#[inline]
pub fn ray(square: Square, (rank_step, file_step): (i8, i8)) -> impl Iterator<Item = Square> {
    let rank = rank_of(square) as i8;
    let file = file_of(square) as i8;
    (1i8..8).map_while(move |distance| {
        offset_square(rank + rank_step * distance, file + file_step * distance)
    })
}

/// First occupied square along `direction`, if any.
#[inline]
pub fn first_blocker(position: &Position, square: Square, direction: (i8, i8)) -> Option<Square> {
    ray(square, direction).find(|&target| !position.piece(target).is_empty())
}

/// Squares a slider on `square` reaches along `directions`, blockers included.
pub fn slider_attacks(position: &Position, square: Square, directions: &[(i8, i8)]) -> u64 {
    let mut attacks = 0u64;
    for &direction in directions {
        for target in ray(square, direction) {
            attacks |= 1u64 << target;
            if !position.piece(target).is_empty() {
                break;
            }
        }
    }
    attacks
}
