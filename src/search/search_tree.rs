//! Arena-backed game tree shared between the background expander and
//! readers.
//!
//! Nodes live in an append-only arena and are addressed by stable
//! [`NodeId`]s. A node's child list is published exactly once through a
//! `OnceLock`, after the child nodes themselves are in the arena, so a reader
//! sees either no children or the complete list. Writers are serialized by
//! a separate mutex that readers never touch; the arena lock is only held
//! for the short append.

use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

use log::debug;

use crate::error::{ChessError, ChessResult};
use crate::game_state::chess_types::Position;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub type NodeId = usize;

#[derive(Debug)]
pub struct TreeNode {
    id: NodeId,
    parent: Option<NodeId>,
    depth: u16,
    position: Position,
    children: OnceLock<Arc<[NodeId]>>,
}

impl TreeNode {
    fn new(id: NodeId, parent: Option<NodeId>, depth: u16, position: Position) -> Self {
        Self {
            id,
            parent,
            depth,
            position,
            children: OnceLock::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Plies below the root.
    #[inline]
    pub fn depth(&self) -> u16 {
        self.depth
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// `None` until expanded; an expanded node with no legal moves yields an
    /// empty slice (checkmate or stalemate).
    #[inline]
    pub fn children(&self) -> Option<&[NodeId]> {
        self.children.get().map(|ids| &ids[..])
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.children.get().is_some()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.children().is_some_and(|ids| ids.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandOutcome {
    /// Children were generated and published.
    Expanded { children: usize },
    /// The node already had its child list; nothing changed.
    AlreadyExpanded,
}

#[derive(Debug)]
pub struct SearchTree {
    nodes: RwLock<Vec<Arc<TreeNode>>>,
    expansion: Mutex<()>,
}

impl SearchTree {
    pub const ROOT: NodeId = 0;

    pub fn new(root: Position) -> Self {
        Self {
            nodes: RwLock::new(vec![Arc::new(TreeNode::new(Self::ROOT, None, 0, root))]),
            expansion: Mutex::new(()),
        }
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Position::from_fen(fen).map(Self::new)
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    pub fn len(&self) -> usize {
        self.read_nodes().len()
    }

    /// Never true: the root is created with the tree.
    pub fn is_empty(&self) -> bool {
        self.read_nodes().is_empty()
    }

    /// Shared handle to a node. The handle stays valid (and its child list
    /// can still be published) after the arena lock is released.
    pub fn node(&self, id: NodeId) -> ChessResult<Arc<TreeNode>> {
        self.read_nodes()
            .get(id)
            .cloned()
            .ok_or(ChessError::UnknownNode(id))
    }

    pub fn position(&self, id: NodeId) -> ChessResult<Position> {
        Ok(self.node(id)?.position().clone())
    }

    pub fn children(&self, id: NodeId) -> ChessResult<Option<Arc<[NodeId]>>> {
        Ok(self.node(id)?.children.get().cloned())
    }

    pub fn is_expanded(&self, id: NodeId) -> ChessResult<bool> {
        Ok(self.node(id)?.is_expanded())
    }

    /// Expand with the legal move generator.
    pub fn expand(&self, id: NodeId) -> ChessResult<ExpandOutcome> {
        self.expand_with(id, &LegalMoveGenerator)
    }

    /// Generate `id`'s children with `generator` and publish them. A node
    /// that already has a child list is left alone.
    pub fn expand_with<G: MoveGenerator + ?Sized>(
        &self,
        id: NodeId,
        generator: &G,
    ) -> ChessResult<ExpandOutcome> {
        let node = self.node(id)?;
        if node.is_expanded() {
            return Ok(ExpandOutcome::AlreadyExpanded);
        }

        let _writer = self.expansion.lock().unwrap_or_else(PoisonError::into_inner);
        if node.is_expanded() {
            return Ok(ExpandOutcome::AlreadyExpanded);
        }

        let positions = generator.generate_children(node.position());
        let child_ids: Arc<[NodeId]> = {
            let mut nodes = self.nodes.write().unwrap_or_else(PoisonError::into_inner);
            let first = nodes.len();
            nodes.extend(positions.into_iter().enumerate().map(|(offset, position)| {
                Arc::new(TreeNode::new(first + offset, Some(id), node.depth + 1, position))
            }));
            (first..nodes.len()).collect()
        };

        let children = child_ids.len();
        let published = node.children.set(child_ids).is_ok();
        debug_assert!(published, "child list of node {id} published twice");

        debug!("expanded node {id} at depth {} into {children} children", node.depth);
        Ok(ExpandOutcome::Expanded { children })
    }

    /// First unexpanded node at index `from_index` or later whose depth is
    /// below `max_depth`. Arena order is breadth-first as long as nodes are
    /// expanded in the order this returns them.
    pub fn next_unexpanded(&self, max_depth: u16, from_index: NodeId) -> Option<NodeId> {
        self.read_nodes()
            .iter()
            .skip(from_index)
            .find(|node| node.depth < max_depth && !node.is_expanded())
            .map(|node| node.id)
    }

    /// Ids of every node whose children have not been generated yet.
    pub fn frontier(&self) -> Vec<NodeId> {
        self.read_nodes()
            .iter()
            .filter(|node| !node.is_expanded())
            .map(|node| node.id)
            .collect()
    }

    fn read_nodes(&self) -> std::sync::RwLockReadGuard<'_, Vec<Arc<TreeNode>>> {
        self.nodes.read().unwrap_or_else(PoisonError::into_inner)
    }
}
