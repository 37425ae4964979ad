//! Background tree growth.
//!
//! A [`TreeExpander`] repeatedly picks the shallowest unexpanded node of a
//! shared [`SearchTree`] (arena order, which is breadth-first) and expands
//! it. When nothing below the configured depth is left it idles and rescans,
//! so nodes added by other writers are picked up too. Cancellation is
//! cooperative: the stop flag is polled once per cycle.

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, info, warn};

use crate::error::{ChessError, ChessResult};
use crate::search::search_tree::{ExpandOutcome, NodeId, SearchTree};

/// Expander policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionConfig {
    /// Nodes at this depth or deeper are never expanded.
    pub max_depth: u16,
    /// Sleep between rescans once the tree is saturated.
    pub idle_interval: Duration,
    /// Return instead of idling when nothing is left to expand.
    pub stop_when_saturated: bool,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            idle_interval: Duration::from_millis(10),
            stop_when_saturated: false,
        }
    }
}

impl ExpansionConfig {
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            max_depth: self.max_depth.max(1),
            ..self
        }
    }
}

/// Totals reported by an expander.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionStats {
    pub expansions: u64,
    pub nodes_added: u64,
}

/// Stop flag and counters shared between an expander and its handle.
#[derive(Debug, Default)]
pub struct ExpansionControl {
    stop: AtomicBool,
    expansions: AtomicU64,
    nodes_added: AtomicU64,
}

impl ExpansionControl {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    #[inline]
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    #[inline]
    fn record_expansion(&self, children: usize) {
        self.expansions.fetch_add(1, Ordering::Relaxed);
        self.nodes_added.fetch_add(children as u64, Ordering::Relaxed);
    }

    pub fn stats(&self) -> ExpansionStats {
        ExpansionStats {
            expansions: self.expansions.load(Ordering::Relaxed),
            nodes_added: self.nodes_added.load(Ordering::Relaxed),
        }
    }
}

pub struct TreeExpander {
    tree: Arc<SearchTree>,
    config: ExpansionConfig,
    control: Arc<ExpansionControl>,
    // Every node before this index is expanded or too deep.
    cursor: NodeId,
}

impl TreeExpander {
    pub fn new(tree: Arc<SearchTree>, config: ExpansionConfig) -> Self {
        Self {
            tree,
            config: config.normalized(),
            control: ExpansionControl::new(),
            cursor: 0,
        }
    }

    #[inline]
    pub fn control(&self) -> Arc<ExpansionControl> {
        Arc::clone(&self.control)
    }

    #[inline]
    pub fn config(&self) -> ExpansionConfig {
        self.config
    }

    /// One scan-and-expand cycle. Returns the node that was handled, or
    /// `None` when nothing below `max_depth` is left.
    pub fn step(&mut self) -> ChessResult<Option<NodeId>> {
        let Some(id) = self.tree.next_unexpanded(self.config.max_depth, self.cursor) else {
            return Ok(None);
        };
        self.cursor = id;

        match self.tree.expand(id)? {
            ExpandOutcome::Expanded { children } => self.control.record_expansion(children),
            ExpandOutcome::AlreadyExpanded => debug!("node {id} was expanded by another writer"),
        }
        Ok(Some(id))
    }

    /// Run until stopped (or saturated, if configured).
    pub fn run(mut self) -> ExpansionStats {
        info!(
            "tree expander started: max_depth {}, idle {:?}",
            self.config.max_depth, self.config.idle_interval
        );

        while !self.control.should_stop() {
            match self.step() {
                Ok(Some(_)) => {}
                Ok(None) if self.config.stop_when_saturated => {
                    debug!("tree saturated at {} nodes", self.tree.len());
                    break;
                }
                Ok(None) => thread::sleep(self.config.idle_interval),
                Err(err) => {
                    warn!("tree expansion aborted: {err}");
                    break;
                }
            }
        }

        let stats = self.control.stats();
        info!(
            "tree expander stopped after {} expansions ({} nodes added)",
            stats.expansions, stats.nodes_added
        );
        stats
    }

    /// Start an expander on its own thread.
    pub fn spawn(tree: Arc<SearchTree>, config: ExpansionConfig) -> ChessResult<ExpanderHandle> {
        let expander = Self::new(tree, config);
        let control = expander.control();
        let handle = thread::Builder::new()
            .name("tree-expander".to_string())
            .spawn(move || expander.run())
            .map_err(|err| ChessError::ThreadSpawn(err.to_string()))?;

        Ok(ExpanderHandle {
            control,
            handle: Some(handle),
        })
    }
}

/// Owner of a running expander thread. Dropping it stops and joins the
/// thread.
pub struct ExpanderHandle {
    control: Arc<ExpansionControl>,
    handle: Option<JoinHandle<ExpansionStats>>,
}

impl ExpanderHandle {
    #[inline]
    pub fn stop(&self) {
        self.control.request_stop();
    }

    /// Counters so far; the thread may still be running.
    #[inline]
    pub fn stats(&self) -> ExpansionStats {
        self.control.stats()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Stop the expander and wait for it to exit.
    pub fn join(mut self) -> ExpansionStats {
        self.stop();
        self.finish()
    }

    /// Wait for the expander to exit on its own (only returns when
    /// `stop_when_saturated` is set or `stop` was called elsewhere).
    pub fn wait(mut self) -> ExpansionStats {
        self.finish()
    }

    fn finish(&mut self) -> ExpansionStats {
        match self.handle.take().map(JoinHandle::join) {
            Some(Ok(stats)) => stats,
            Some(Err(_)) => {
                warn!("tree expander thread panicked");
                self.control.stats()
            }
            None => self.control.stats(),
        }
    }
}

impl Drop for ExpanderHandle {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.stop();
            self.finish();
        }
    }
}
