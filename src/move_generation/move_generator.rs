use crate::game_state::chess_types::Position;

/// Produces the successor positions of a position.
///
/// Implementations must be shareable across threads so the tree expander
/// and the external search driver can use the same generator.
pub trait MoveGenerator: Send + Sync {
    fn generate_children(&self, position: &Position) -> Vec<Position>;
}
