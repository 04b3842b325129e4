//! Builder utilities for ergonomic behavior graph construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior graphs. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use crate::{Action, AlwaysSucceed, Behavior, Condition, Inverter, Selector, Sequence, Status};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}

/// Creates an always-succeed node.
///
/// Shorthand for `Box::new(AlwaysSucceed::new(child))`.
#[inline]
pub fn always_succeed<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(AlwaysSucceed::new(child))
}

/// Creates a condition leaf from a predicate.
#[inline]
pub fn condition<C: 'static>(
    predicate: impl Fn(&C) -> bool + Send + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Condition::new(predicate))
}

/// Creates an action leaf from a closure.
#[inline]
pub fn action<C: 'static>(
    run: impl FnMut(&mut C) -> Status + Send + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Action::new(run))
}
