//! Precomputed target masks for the fixed-offset movers (knight and king).
//!
//! Each table holds, per origin square, a one-bit-per-square mask of the
//! on-board destinations. Generators and the attack check iterate the set
//! bits with [`squares_in`].

use crate::game_state::chess_types::Square;

/// `(rank_delta, file_delta)` pairs a knight can jump by.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// `(rank_delta, file_delta)` pairs to the eight adjacent squares.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const KNIGHT_TARGETS: [u64; 64] = generate_step_table(&KNIGHT_OFFSETS);
pub const KING_TARGETS: [u64; 64] = generate_step_table(&KING_OFFSETS);

#[inline]
pub const fn knight_targets(square: Square) -> u64 {
    KNIGHT_TARGETS[square as usize]
}

#[inline]
pub const fn king_targets(square: Square) -> u64 {
    KING_TARGETS[square as usize]
}

/// Iterate the squares whose bits are set in `mask`, lowest first.
#[inline]
pub fn squares_in(mut mask: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let square = mask.trailing_zeros() as Square;
        mask &= mask - 1;
        Some(square)
    })
}

const fn generate_step_table(offsets: &[(i8, i8); 8]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut targets = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            targets |= bit_if_on_board(rank + offsets[i].0, file + offsets[i].1);
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}

const fn bit_if_on_board(rank: i8, file: i8) -> u64 {
    if rank < 0 || rank > 7 || file < 0 || file > 7 {
        return 0;
    }
    1u64 << (rank as u32 * 8 + file as u32)
}

#[cfg(test)]
mod tests {
    use super::{king_targets, knight_targets, squares_in};

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let d4 = 27u8;
        assert_eq!(knight_targets(d4).count_ones(), 8);
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let targets: Vec<u8> = squares_in(knight_targets(0)).collect();
        // b3 and c2
        assert_eq!(targets, vec![10, 17]);
    }

    #[test]
    fn king_from_a1_has_three_targets() {
        let targets: Vec<u8> = squares_in(king_targets(0)).collect();
        assert_eq!(targets, vec![1, 8, 9]);
    }

    #[test]
    fn king_in_centre_has_eight_targets() {
        assert_eq!(king_targets(36).count_ones(), 8);
    }
}
