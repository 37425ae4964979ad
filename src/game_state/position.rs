//! Immutable board snapshot.
//!
//! A `Position` owns its 64-square placement plus the side to move, castling
//! rights, en-passant file, and clocks. It is built either from raw placement
//! data (`from_parts`, `from_fen`) or by deriving it from a parent with one
//! move applied (`derive`, `derive_promotion`). Nothing mutates a position
//! after it is handed out.

use crate::error::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{derive_position, derive_promotion_position};
use crate::move_generation::legal_move_checks::{self, is_king_in_check};
use crate::move_generation::legal_move_generator::{
    generate_legal_children, generate_pseudo_legal_children,
};
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::MaterialScorer;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) squares: [Piece; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_file: Option<u8>,
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
    pub(crate) last_move: Option<ChessMove>,
}

impl Position {
    /// Standard starting position.
    pub fn new_game() -> Self {
        Self {
            squares: starting_squares(),
            side_to_move: Color::White,
            castling_rights: CASTLE_ALL,
            en_passant_file: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            last_move: None,
        }
    }

    /// Build a position from raw placement data.
    ///
    /// Fails with `MalformedInput` unless each color has exactly one king and
    /// the en-passant file (if any) is a real file.
    pub fn from_parts(
        squares: [Piece; 64],
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_file: Option<u8>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> ChessResult<Self> {
        if let Some(file) = en_passant_file {
            if file > 7 {
                return Err(ChessError::MalformedInput(format!(
                    "en-passant file {file} is off the board"
                )));
            }
        }

        let position = Self {
            squares,
            side_to_move,
            castling_rights: castling_rights & CASTLE_ALL,
            en_passant_file,
            halfmove_clock,
            fullmove_number,
            last_move: None,
        };

        legal_move_checks::check_king_counts(&position).map_err(|err| match err {
            ChessError::InvalidPosition(reason) => ChessError::MalformedInput(reason),
            other => other,
        })?;

        Ok(position)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Piece on the given coordinates; `OutOfBounds` outside `0..=7`.
    #[inline]
    pub fn piece_at(&self, rank: usize, file: usize) -> ChessResult<Piece> {
        square_at(rank, file).map(|square| self.piece(square))
    }

    /// Piece on a square index; `SquareOutOfRange` outside `0..=63`.
    #[inline]
    pub fn piece_on(&self, square: Square) -> ChessResult<Piece> {
        self.squares
            .get(square as usize)
            .copied()
            .ok_or(ChessError::SquareOutOfRange(square))
    }

    /// Unchecked lookup for squares produced by the generators.
    #[inline]
    pub(crate) fn piece(&self, square: Square) -> Piece {
        self.squares[square as usize]
    }

    /// Read-only view of the placement, indexed `rank * 8 + file`.
    #[inline]
    pub fn squares(&self) -> &[Piece; 64] {
        &self.squares
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    #[inline]
    pub fn en_passant_file(&self) -> Option<u8> {
        self.en_passant_file
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// The move that produced this position, `None` for a root position.
    #[inline]
    pub fn last_move(&self) -> Option<ChessMove> {
        self.last_move
    }

    /// This position after the piece on `from` moves to `to`.
    #[inline]
    pub fn derive(&self, from: Square, to: Square) -> ChessResult<Self> {
        derive_position(self, from, to)
    }

    /// As [`Position::derive`], with the arriving pawn replaced by `promoted`.
    #[inline]
    pub fn derive_promotion(&self, from: Square, to: Square, promoted: PieceKind) -> ChessResult<Self> {
        derive_promotion_position(self, from, to, promoted)
    }

    /// White-minus-Black material count.
    #[inline]
    pub fn evaluate_material(&self) -> i32 {
        MaterialScorer::material_balance(self)
    }

    /// Every structurally generated successor, before the legality filter.
    #[inline]
    pub fn generate_children(&self) -> Vec<Position> {
        generate_pseudo_legal_children(self)
    }

    /// Successors that do not leave the mover's king attacked.
    #[inline]
    pub fn legal_children(&self) -> Vec<Position> {
        generate_legal_children(self)
    }

    /// True when the side that just moved did not leave its own king attacked
    /// and both colors have exactly one king.
    #[inline]
    pub fn is_valid(&self) -> bool {
        legal_move_checks::is_valid_position(self)
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        legal_move_checks::king_square(self, color)
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && self.legal_children().is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && self.legal_children().is_empty()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

fn starting_squares() -> [Piece; 64] {
    const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    let mut squares = [Piece::Empty; 64];
    for (file, &kind) in BACK_RANK.iter().enumerate() {
        squares[file] = Piece::new(Color::White, kind);
        squares[8 + file] = Piece::new(Color::White, PieceKind::Pawn);
        squares[48 + file] = Piece::new(Color::Black, PieceKind::Pawn);
        squares[56 + file] = Piece::new(Color::Black, kind);
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_matches_starting_fen() {
        let parsed = Position::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(Position::new_game(), parsed);
        assert_eq!(Position::default().to_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn starting_position_is_balanced_with_twenty_moves() {
        let start = Position::new_game();
        assert_eq!(start.evaluate_material(), 0);
        assert_eq!(start.legal_children().len(), 20);
        assert_eq!(start.generate_children().len(), 20);
    }

    #[test]
    fn piece_at_is_bounds_checked() {
        let start = Position::new_game();
        assert_eq!(
            start.piece_at(0, 0),
            Ok(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(
            start.piece_at(8, 0),
            Err(ChessError::OutOfBounds { rank: 8, file: 0 })
        );
        assert_eq!(
            start.piece_at(3, 12),
            Err(ChessError::OutOfBounds { rank: 3, file: 12 })
        );
        assert_eq!(start.piece_on(64), Err(ChessError::SquareOutOfRange(64)));
    }

    #[test]
    fn from_parts_validates_kings_and_en_passant_file() {
        let squares = *Position::new_game().squares();
        assert!(Position::from_parts(squares, Color::White, CASTLE_ALL, None, 0, 1).is_ok());
        assert!(matches!(
            Position::from_parts(squares, Color::White, CASTLE_ALL, Some(8), 0, 1),
            Err(ChessError::MalformedInput(_))
        ));

        let mut no_black_king = squares;
        no_black_king[60] = Piece::Empty;
        assert!(matches!(
            Position::from_parts(no_black_king, Color::White, 0, None, 0, 1),
            Err(ChessError::MalformedInput(_))
        ));
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let position =
            Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .expect("fen should parse");
        assert!(position.is_in_check(Color::White));
        assert!(position.is_checkmate());
        assert!(!position.is_stalemate());
    }

    #[test]
    fn cornered_king_is_stalemate() {
        let position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("fen should parse");
        assert!(!position.is_in_check(Color::Black));
        assert!(position.is_stalemate());
        assert!(!position.is_checkmate());
    }
}
