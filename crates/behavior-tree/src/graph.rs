//! Executable behavior graph with an enable/disable lifecycle.
//!
//! A [`BehaviorGraph`] wraps a root node and gives its owner the four
//! operations it needs to drive the graph from an update loop: enable,
//! disable, tick once per frame, and reset. The owner never inspects the
//! nodes; it only reads back the [`Status`] of the last tick.

use crate::{Behavior, Status};

/// A root behavior plus its execution state.
pub struct BehaviorGraph<C> {
    name: &'static str,
    root: Box<dyn Behavior<C>>,
    enabled: bool,
    status: Option<Status>,
}

impl<C> BehaviorGraph<C> {
    /// Creates a disabled graph around `root`.
    pub fn new(name: &'static str, root: Box<dyn Behavior<C>>) -> Self {
        Self {
            name,
            root,
            enabled: false,
            status: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Allows subsequent ticks to run the graph.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stops ticking and aborts whatever was running.
    ///
    /// Safe to call on a graph that is already disabled.
    pub fn disable(&mut self) {
        if self.enabled && self.is_running() {
            self.root.reset();
        }
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Runs the graph for one frame.
    ///
    /// Returns `None` without touching the nodes when the graph is disabled.
    pub fn tick(&mut self, ctx: &mut C) -> Option<Status> {
        if !self.enabled {
            return None;
        }
        let status = self.root.tick(ctx);
        self.status = Some(status);
        Some(status)
    }

    /// Clears all node memory and the last reported status.
    pub fn reset(&mut self) {
        self.root.reset();
        self.status = None;
    }

    /// Status of the most recent tick, or `None` if it has not run since
    /// construction or the last [`reset`](Self::reset).
    pub fn execution_status(&self) -> Option<Status> {
        self.status
    }

    /// True while the graph is enabled and its last tick reported `Running`.
    pub fn is_running(&self) -> bool {
        self.enabled && self.status == Some(Status::Running)
    }
}
