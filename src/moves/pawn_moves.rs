//! Pawn capture masks.
//!
//! A pawn attacks the two forward diagonals only; the table for each color is
//! built once at compile time.

use crate::game_state::chess_types::{Color, Square};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);

/// Squares a pawn of `color` standing on `square` attacks.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_pawn_attacks(direction: i8) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let rank = (sq / 8) as i8 + direction;
        let file = (sq % 8) as i8;
        let mut attacks = 0u64;

        if rank >= 0 && rank <= 7 {
            if file > 0 {
                attacks |= 1u64 << (rank as u32 * 8 + (file - 1) as u32);
            }
            if file < 7 {
                attacks |= 1u64 << (rank as u32 * 8 + (file + 1) as u32);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::Color;

    #[test]
    fn white_pawn_on_e2_attacks_d3_and_f3() {
        let e2 = 12u8;
        assert_eq!(pawn_attacks(Color::White, e2), (1u64 << 19) | (1u64 << 21));
    }

    #[test]
    fn black_pawn_on_a7_attacks_only_b6() {
        let a7 = 48u8;
        assert_eq!(pawn_attacks(Color::Black, a7), 1u64 << 41);
    }

    #[test]
    fn pawn_on_last_rank_attacks_nothing() {
        assert_eq!(pawn_attacks(Color::White, 60), 0);
        assert_eq!(pawn_attacks(Color::Black, 3), 0);
    }
}
