//! Leaf nodes built from plain functions.
//!
//! Most agent logic lives in leaves. Rather than declaring a struct per
//! condition, callers wrap a closure in [`Condition`] or [`Action`].

use crate::{Behavior, Status};

/// Succeeds when the predicate holds, fails otherwise. Never `Running`.
pub struct Condition<C> {
    predicate: Box<dyn Fn(&C) -> bool + Send>,
}

impl<C> Condition<C> {
    pub fn new(predicate: impl Fn(&C) -> bool + Send + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl<C> Behavior<C> for Condition<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        Status::from((self.predicate)(ctx))
    }
}

/// Runs a closure that may mutate the context and reports its own status.
pub struct Action<C> {
    run: Box<dyn FnMut(&mut C) -> Status + Send>,
}

impl<C> Action<C> {
    pub fn new(run: impl FnMut(&mut C) -> Status + Send + 'static) -> Self {
        Self { run: Box::new(run) }
    }
}

impl<C> Behavior<C> for Action<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        (self.run)(ctx)
    }
}
