use std::f32::consts::TAU;

use arena_core::Vec3;
use behavior_tree::builder::sequence;
use rand::Rng;

use super::{Goal, GoalKind, GraphRunner};
use crate::context::GoalContext;
use crate::error::Result;
use crate::nodes::{NodeRegistry, Var, keys};

/// Explores the arena, preferring regions not visited for the longest time.
pub struct Wander {
    runner: GraphRunner,
}

impl Wander {
    pub fn new(registry: &NodeRegistry) -> Result<Self> {
        let root = sequence(vec![
            registry.condition("HasDestination")?,
            registry.action("MoveToDestination")?,
        ]);
        Ok(Self {
            runner: GraphRunner::new("wander", root),
        })
    }

    fn pick_destination(&mut self, ctx: &mut GoalContext<'_>) {
        let destination = match ctx.beliefs.map.recommended_destination(&mut *ctx.rng) {
            Ok(point) => point,
            Err(e) => {
                tracing::debug!(entity = %ctx.owner, error = %e, "Wandering to a random point");
                random_point(ctx)
            }
        };
        tracing::debug!(entity = %ctx.owner, ?destination, "Wander destination");
        self.runner.set(keys::DESTINATION, Var::Position(destination));
    }
}

fn random_point(ctx: &mut GoalContext<'_>) -> Vec3 {
    let radius = ctx.config.wander_radius.max(0.0);
    let angle = ctx.rng.gen_range(0.0..TAU);
    let distance = ctx.rng.gen_range(0.0..=radius);
    ctx.status.position() + Vec3::ground(angle.cos(), angle.sin()) * distance
}

impl Goal for Wander {
    fn kind(&self) -> GoalKind {
        GoalKind::Wander
    }

    fn score(&self, ctx: &GoalContext<'_>) -> f32 {
        if ctx.beliefs.map.can_be_used() {
            ctx.config.wander_score
        } else {
            ctx.config.degraded_wander_score
        }
    }

    fn enter(&mut self, ctx: &mut GoalContext<'_>) {
        if self.runner.enter(ctx) {
            self.pick_destination(ctx);
        }
    }

    fn update(&mut self, ctx: &mut GoalContext<'_>) {
        self.runner.refresh(ctx);
        let exec = self.runner.exec();
        if exec.destination().is_none_or(|d| exec.reached(d)) {
            self.pick_destination(ctx);
        }
        self.runner.tick(ctx);
    }

    fn exit(&mut self, _ctx: &mut GoalContext<'_>) {
        self.runner.exit();
    }

    fn is_entered(&self) -> bool {
        self.runner.is_entered()
    }
}

#[cfg(test)]
mod tests {
    use arena_core::MapKnowledgeConfig;

    use super::*;
    use crate::knowledge::MapKnowledge;
    use crate::nodes::Command;
    use crate::testing::Fixture;

    fn wander() -> Wander {
        Wander::new(&NodeRegistry::standard()).unwrap()
    }

    #[test]
    fn degrades_without_regions() {
        let mut fixture = Fixture::new();
        let goal = wander();
        assert_eq!(goal.score(&fixture.ctx(0.0)), 0.1);

        fixture.beliefs.map = MapKnowledge::new(&MapKnowledgeConfig::default(), Vec::new());
        assert_eq!(goal.score(&fixture.ctx(0.0)), 0.05);
    }

    #[test]
    fn heads_for_the_stale_region() {
        let mut fixture = Fixture::new();
        let mut goal = wander();
        goal.enter(&mut fixture.ctx(0.0));
        goal.update(&mut fixture.ctx(0.0));

        let region = fixture.beliefs.map.regions()[0];
        match fixture.commands.as_slice() {
            [Command::MoveTo { destination }] => assert!(region.contains(*destination)),
            other => panic!("unexpected commands {other:?}"),
        }
    }

    #[test]
    fn random_point_without_regions() {
        let mut fixture = Fixture::new();
        fixture.beliefs.map = MapKnowledge::new(&MapKnowledgeConfig::default(), Vec::new());
        let mut goal = wander();
        goal.enter(&mut fixture.ctx(0.0));
        let destination = goal.runner.exec().destination().unwrap();
        assert!(destination.length() <= fixture.config.goals.wander_radius + 1e-3);
    }

    #[test]
    fn exit_is_idempotent() {
        let mut fixture = Fixture::new();
        let mut goal = wander();
        goal.enter(&mut fixture.ctx(0.0));
        assert!(goal.is_entered());
        goal.exit(&mut fixture.ctx(0.1));
        goal.exit(&mut fixture.ctx(0.2));
        assert!(!goal.is_entered());
        assert!(goal.runner.exec().destination().is_none());
    }
}
