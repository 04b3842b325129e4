use arena_core::PickupId;
use behavior_tree::builder::sequence;

use super::{Goal, GoalKind, GraphRunner};
use crate::context::GoalContext;
use crate::error::Result;
use crate::nodes::{NodeRegistry, Var, keys};

/// Goes for whatever the pickup planner currently recommends.
pub struct LookForPickups {
    runner: GraphRunner,
    following: Option<PickupId>,
}

impl LookForPickups {
    pub fn new(registry: &NodeRegistry) -> Result<Self> {
        let root = sequence(vec![
            registry.condition("HasChosenPickup")?,
            registry.condition("HasDestination")?,
            registry.action("MoveToDestination")?,
            registry.action("Stop")?,
        ]);
        Ok(Self {
            runner: GraphRunner::new("look_for_pickups", root),
            following: None,
        })
    }

    pub fn following(&self) -> Option<PickupId> {
        self.following
    }
}

impl Goal for LookForPickups {
    fn kind(&self) -> GoalKind {
        GoalKind::LookForPickups
    }

    fn score(&self, ctx: &GoalContext<'_>) -> f32 {
        ctx.beliefs.planner.score() * ctx.config.pickup_weight
    }

    fn enter(&mut self, ctx: &mut GoalContext<'_>) {
        if self.runner.enter(ctx) {
            self.following = None;
        }
    }

    fn update(&mut self, ctx: &mut GoalContext<'_>) {
        self.runner.refresh(ctx);
        let choice = ctx.beliefs.planner.choice().copied();
        if choice.map(|c| c.pickup) != self.following {
            match choice {
                Some(choice) => {
                    tracing::debug!(entity = %ctx.owner, pickup = %choice.pickup, "Heading for pickup");
                    self.runner
                        .set(keys::DESTINATION, Var::Position(choice.position));
                    self.runner.set(keys::PICKUP, Var::Pickup(choice.pickup));
                }
                None => {
                    self.runner.unset(keys::DESTINATION);
                    self.runner.unset(keys::PICKUP);
                }
            }
            self.following = choice.map(|c| c.pickup);
        }
        self.runner.tick(ctx);
    }

    fn exit(&mut self, _ctx: &mut GoalContext<'_>) {
        self.runner.exit();
        self.following = None;
    }

    fn is_entered(&self) -> bool {
        self.runner.is_entered()
    }
}
