//! Competing goals.
//!
//! Every goal reports a utility score each tick; the
//! [`GoalArbiter`](crate::GoalArbiter) keeps the best one active. Goals own
//! a behavior graph that turns their intent into [`Command`](crate::Command)s
//! while active.

mod fight;
mod idle;
mod pickups;
mod runner;
mod search;
mod wander;

pub use fight::Fight;
pub use idle::NoGoal;
pub use pickups::LookForPickups;
pub use search::SearchEnemy;
pub use wander::Wander;

pub(crate) use runner::GraphRunner;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::context::GoalContext;
use crate::error::{AiError, Result};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GoalKind {
    NoGoal,
    Wander,
    Fight,
    SearchEnemy,
    LookForPickups,
}

impl GoalKind {
    pub fn parse(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| AiError::UnknownGoal(name.to_owned()))
    }
}

/// A unit of intent competing for control of the agent.
///
/// `exit` must be safe to call on a goal that is not entered.
pub trait Goal: Send {
    fn kind(&self) -> GoalKind;

    /// Utility in the current situation. Must not have side effects.
    fn score(&self, ctx: &GoalContext<'_>) -> f32;

    fn enter(&mut self, ctx: &mut GoalContext<'_>);

    /// Called every tick while active.
    fn update(&mut self, ctx: &mut GoalContext<'_>);

    fn exit(&mut self, ctx: &mut GoalContext<'_>);

    fn is_entered(&self) -> bool;
}
