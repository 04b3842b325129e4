//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision graphs: [`Sequence`] (AND logic), [`Selector`] (OR logic) and
//! [`UtilitySelector`] (highest score wins).
//!
//! Sequences and selectors remember a child that returned `Running` and resume
//! from it on the next tick instead of re-evaluating earlier children.

use crate::{Behavior, Status};

/// Type alias for a scored behavior option in utility-based decision making.
///
/// Each option consists of:
/// - A behavior to execute
/// - A scoring function that evaluates desirability (higher is better)
type ScoredOption<C> = (Box<dyn Behavior<C>>, Box<dyn Fn(&C) -> f32 + Send>);

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence returns `Running` and resumes
///   from that child on the next tick
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    running: Option<usize>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self {
            children,
            running: None,
        }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let start = self.running.take().unwrap_or(0);
        for (index, child) in self.children.iter_mut().enumerate().skip(start) {
            match child.tick(ctx) {
                Status::Success => continue,
                Status::Failure => return Status::Failure,
                Status::Running => {
                    self.running = Some(index);
                    return Status::Running;
                }
            }
        }
        Status::Success
    }

    fn reset(&mut self) {
        self.running = None;
        for child in &mut self.children {
            child.reset();
        }
    }
}

/// Executes child behaviors in sequence until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Running`, the selector returns `Running` and resumes
///   from that child on the next tick
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    running: Option<usize>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self {
            children,
            running: None,
        }
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let start = self.running.take().unwrap_or(0);
        for (index, child) in self.children.iter_mut().enumerate().skip(start) {
            match child.tick(ctx) {
                Status::Success => return Status::Success,
                Status::Failure => continue,
                Status::Running => {
                    self.running = Some(index);
                    return Status::Running;
                }
            }
        }
        Status::Failure
    }

    fn reset(&mut self) {
        self.running = None;
        for child in &mut self.children {
            child.reset();
        }
    }
}

/// Executes child behaviors based on utility scores.
///
/// # Semantics
///
/// A `UtilitySelector` node evaluates all children's scores and picks the highest:
/// - Each child has an associated scoring function
/// - All scoring functions are evaluated every tick
/// - The child with the highest score is executed; on ties the earlier option wins
/// - If no option scores above zero, the selector returns `Failure`
///
/// When the winner changes while another option is still running, the
/// interrupted option is reset before the new one starts.
///
/// # Example
///
/// ```rust,ignore
/// use behavior_tree::UtilitySelector;
///
/// let selector = UtilitySelector::new(vec![
///     (strafe_behavior(), Box::new(|ctx| strafe_score(ctx))),
///     (chase_behavior(), Box::new(|ctx| chase_score(ctx))),
/// ]);
/// ```
pub struct UtilitySelector<C> {
    options: Vec<ScoredOption<C>>,
    running: Option<usize>,
}

impl<C> UtilitySelector<C> {
    /// Creates a new utility selector with the given options.
    ///
    /// Each option is a tuple of (behavior, scoring_function).
    ///
    /// # Panics
    ///
    /// Panics if `options` is empty.
    pub fn new(options: Vec<ScoredOption<C>>) -> Self {
        assert!(
            !options.is_empty(),
            "UtilitySelector must have at least one option"
        );
        Self {
            options,
            running: None,
        }
    }
}

impl<C> Behavior<C> for UtilitySelector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let mut best: Option<(usize, f32)> = None;
        for (index, (_, scorer)) in self.options.iter().enumerate() {
            let score = scorer(ctx);
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((index, score));
            }
        }

        let Some((best_idx, _)) = best else {
            if let Some(previous) = self.running.take() {
                self.options[previous].0.reset();
            }
            return Status::Failure;
        };

        if let Some(previous) = self.running
            && previous != best_idx
        {
            self.options[previous].0.reset();
        }

        let status = self.options[best_idx].0.tick(ctx);
        self.running = status.is_running().then_some(best_idx);
        status
    }

    fn reset(&mut self) {
        self.running = None;
        for (behavior, _) in &mut self.options {
            behavior.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
    }

    struct Increment;
    impl Behavior<TestContext> for Increment {
        fn tick(&mut self, ctx: &mut TestContext) -> Status {
            ctx.value += 1;
            Status::Success
        }
    }

    struct Decrement;
    impl Behavior<TestContext> for Decrement {
        fn tick(&mut self, ctx: &mut TestContext) -> Status {
            ctx.value -= 1;
            Status::Success
        }
    }

    struct FailAlways;
    impl Behavior<TestContext> for FailAlways {
        fn tick(&mut self, _ctx: &mut TestContext) -> Status {
            Status::Failure
        }
    }

    /// Runs for `ticks` ticks, then succeeds.
    struct RunFor {
        ticks: u32,
        elapsed: u32,
    }

    impl RunFor {
        fn boxed(ticks: u32) -> Box<Self> {
            Box::new(Self { ticks, elapsed: 0 })
        }
    }

    impl Behavior<TestContext> for RunFor {
        fn tick(&mut self, _ctx: &mut TestContext) -> Status {
            self.elapsed += 1;
            if self.elapsed > self.ticks {
                Status::Success
            } else {
                Status::Running
            }
        }

        fn reset(&mut self) {
            self.elapsed = 0;
        }
    }

    fn option(
        behavior: Box<dyn Behavior<TestContext>>,
        scorer: impl Fn(&TestContext) -> f32 + Send + 'static,
    ) -> ScoredOption<TestContext> {
        (behavior, Box::new(scorer))
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Sequence::new(vec![Box::new(Increment), Box::new(Increment)]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(FailAlways),
            Box::new(Increment), // Should not execute
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn sequence_resumes_running_child() {
        let mut seq = Sequence::new(vec![Box::new(Increment), RunFor::boxed(1), Box::new(Increment)]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.value, 1);

        // First child must not run again while the second is in progress.
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let mut sel = Selector::new(vec![
            Box::new(FailAlways),
            Box::new(Increment),
            Box::new(Decrement), // Should not execute
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Selector::new(vec![Box::new(FailAlways), Box::new(FailAlways)]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn selector_reset_forgets_running_child() {
        let mut sel = Selector::new(vec![Box::new(FailAlways), RunFor::boxed(3)]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        sel.reset();
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        assert_eq!(sel.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn utility_selector_runs_highest_score() {
        let mut sel = UtilitySelector::new(vec![
            option(Box::new(Increment), |_| 0.2),
            option(Box::new(Decrement), |_| 0.7),
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, -1);
    }

    #[test]
    fn utility_selector_fails_when_nothing_scores() {
        let mut sel = UtilitySelector::new(vec![option(Box::new(Increment), |_| 0.0)]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 0);
    }
}
