//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior graph nodes. The trait is generic over a
//! context type `C`, allowing nodes to read agent state and emit commands.

use crate::Status;

/// A behavior graph node that can be evaluated against a context.
pub trait Behavior<C>: Send {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Nodes can read
    ///   agent state and modify it (e.g., to queue a command).
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if the behavior needs more ticks
    fn tick(&mut self, ctx: &mut C) -> Status;

    /// Clears any per-run memory (e.g., which child of a sequence was running).
    ///
    /// Leaves without memory can rely on the default no-op.
    fn reset(&mut self) {}
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}
