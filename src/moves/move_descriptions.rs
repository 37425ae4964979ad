use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

pub type MoveFlags = u8;

pub const FLAG_CAPTURE: MoveFlags = 1 << 0;
pub const FLAG_DOUBLE_PAWN_PUSH: MoveFlags = 1 << 1;
pub const FLAG_EN_PASSANT: MoveFlags = 1 << 2;
pub const FLAG_CASTLING: MoveFlags = 1 << 3;
pub const FLAG_PROMOTION: MoveFlags = 1 << 4;

/// The move that turned a parent position into a derived one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub flags: MoveFlags,
}

impl ChessMove {
    #[inline]
    pub const fn has_flag(&self, flag: MoveFlags) -> bool {
        self.flags & flag != 0
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.has_flag(FLAG_CAPTURE)
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        self.has_flag(FLAG_EN_PASSANT)
    }

    #[inline]
    pub const fn is_castling(&self) -> bool {
        self.has_flag(FLAG_CASTLING)
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.has_flag(FLAG_PROMOTION)
    }

    /// Long algebraic form, e.g. `e2e4` or `e7e8q`.
    pub fn to_long_algebraic(&self) -> String {
        let mut out = String::with_capacity(5);
        out.push_str(&square_to_algebraic(self.from));
        out.push_str(&square_to_algebraic(self.to));
        if let Some(kind) = self.promotion {
            out.push(kind.letter());
        }
        out
    }
}
