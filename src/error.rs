//! Errors used throughout the move-generation and tree-growth core.
//!
//! `ChessError` is the single error type returned by the public API. Bounds
//! and input problems are reported to the caller; position-validity problems
//! found while generating moves never leave the crate (the offending
//! candidate is dropped by the legality filter instead).

use crate::game_state::chess_types::Square;
use crate::search::search_tree::NodeId;

/// Unified error type for the crate.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Rank/file coordinates outside `0..=7`.
    #[error("square coordinates out of bounds: rank {rank}, file {file}")]
    OutOfBounds { rank: usize, file: usize },

    /// Square index outside `0..=63`.
    #[error("square index out of range: {0}")]
    SquareOutOfRange(Square),

    /// FEN (or other textual input) that cannot be decoded.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A position that violates a structural invariant (for example a
    /// missing king).
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// Tried to move a piece from an empty square.
    #[error("no piece on square {0}")]
    EmptySquare(Square),

    /// Node id that does not belong to the tree arena.
    #[error("unknown tree node {0}")]
    UnknownNode(NodeId),

    /// The OS refused to start the background expander thread.
    #[error("failed to spawn expander thread: {0}")]
    ThreadSpawn(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
