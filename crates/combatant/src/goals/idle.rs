use super::{Goal, GoalKind};
use crate::context::GoalContext;

/// Initial and fallback state. Loses to any finite score.
pub struct NoGoal {
    entered: bool,
}

impl NoGoal {
    /// Starts entered: it is the arbiter's initial active goal.
    pub fn new() -> Self {
        Self { entered: true }
    }
}

impl Default for NoGoal {
    fn default() -> Self {
        Self::new()
    }
}

impl Goal for NoGoal {
    fn kind(&self) -> GoalKind {
        GoalKind::NoGoal
    }

    fn score(&self, _ctx: &GoalContext<'_>) -> f32 {
        f32::NEG_INFINITY
    }

    fn enter(&mut self, _ctx: &mut GoalContext<'_>) {
        self.entered = true;
    }

    fn update(&mut self, _ctx: &mut GoalContext<'_>) {}

    fn exit(&mut self, _ctx: &mut GoalContext<'_>) {
        self.entered = false;
    }

    fn is_entered(&self) -> bool {
        self.entered
    }
}
