//! Crate root module declarations for the Plum Tree move-generation core.
//!
//! This file exposes the position model, move generation and legality
//! checking, the concurrently grown search tree, and FEN helpers so tests,
//! benches, and embedding engines can import stable module paths.

pub mod error;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod moves {
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod slider_moves;
    pub mod step_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod search_tree;
    pub mod threading;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
}

pub use error::{ChessError, ChessResult};
pub use game_state::chess_types::{Color, Piece, PieceKind, Position, Square};
pub use search::search_tree::{NodeId, SearchTree};
pub use search::threading::{ExpanderHandle, ExpansionConfig, TreeExpander};
