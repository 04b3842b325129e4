use arena_core::probability;
use behavior_tree::builder::{always_succeed, selector, sequence};
use rand::Rng;

use super::{Goal, GoalKind, GraphRunner};
use crate::context::GoalContext;
use crate::error::Result;
use crate::nodes::{Command, NodeRegistry, Var, keys};

fn recklessness(ctx: &GoalContext<'_>) -> f64 {
    probability(f64::from(ctx.config.recklessness))
}

/// Engages a detected target while ammo remains.
///
/// Posture (chase or strafe, and strafe side) is re-rolled only after a
/// decision freeze so the agent does not jitter between them every tick.
pub struct Fight {
    runner: GraphRunner,
    freeze_until: f32,
}

impl Fight {
    pub fn new(registry: &NodeRegistry) -> Result<Self> {
        let root = sequence(vec![
            registry.action("AimAtTarget")?,
            always_succeed(selector(vec![
                sequence(vec![
                    registry.condition("HasSeenTarget")?,
                    registry.condition("HasAmmo")?,
                    registry.action("FireAtTarget")?,
                ]),
                registry.action("CeaseFire")?,
            ])),
            selector(vec![
                sequence(vec![
                    registry.condition("IsChasing")?,
                    registry.action("ChaseTarget")?,
                ]),
                registry.action("Strafe")?,
            ]),
        ]);
        Ok(Self {
            runner: GraphRunner::new("fight", root),
            freeze_until: f32::NEG_INFINITY,
        })
    }

    fn roll_posture(&mut self, ctx: &mut GoalContext<'_>) {
        let chase = ctx.rng.gen_bool(recklessness(ctx));
        let direction = if ctx.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.runner.set(keys::CHASE, Var::Flag(chase));
        self.runner
            .set(keys::STRAFE_DIRECTION, Var::Number(direction));
        self.freeze_until = ctx.now + ctx.config.decision_freeze;
        tracing::debug!(entity = %ctx.owner, chase, direction, "Fight posture");
    }
}

impl Goal for Fight {
    fn kind(&self) -> GoalKind {
        GoalKind::Fight
    }

    fn score(&self, ctx: &GoalContext<'_>) -> f32 {
        if !ctx.beliefs.target.has_seen_target() || !ctx.status.has_ammo() {
            return 0.0;
        }
        let recklessness = recklessness(ctx) as f32;
        let nerve = recklessness + (1.0 - recklessness) * ctx.status.health.ratio();
        ctx.config.fight_score * nerve
    }

    fn enter(&mut self, ctx: &mut GoalContext<'_>) {
        if self.runner.enter(ctx) {
            self.freeze_until = f32::NEG_INFINITY;
        }
    }

    fn update(&mut self, ctx: &mut GoalContext<'_>) {
        self.runner.refresh(ctx);
        if ctx.now >= self.freeze_until {
            self.roll_posture(ctx);
        }
        self.runner.tick(ctx);
    }

    fn exit(&mut self, ctx: &mut GoalContext<'_>) {
        if self.runner.exit() {
            ctx.commands.push(Command::CeaseFire);
        }
    }

    fn is_entered(&self) -> bool {
        self.runner.is_entered()
    }
}

#[cfg(test)]
mod tests {
    use arena_core::{Meter, Vec3};

    use super::*;
    use crate::testing::Fixture;

    const TARGET: Vec3 = Vec3::ground(10.0, 0.0);

    fn spotted() -> Fixture {
        let mut fixture = Fixture::new();
        fixture.spot_target(TARGET);
        fixture
    }

    fn fight() -> Fight {
        Fight::new(&NodeRegistry::standard()).unwrap()
    }

    #[test]
    fn nan_recklessness_counts_as_cautious() {
        let mut fixture = spotted();
        fixture.config.goals.recklessness = f32::NAN;
        fixture.status.health = Meter::new(50.0, 100.0);
        let mut goal = fight();
        let score = goal.score(&fixture.ctx(1.0));
        assert!((score - 0.45).abs() < 1e-6);

        goal.enter(&mut fixture.ctx(1.0));
        goal.update(&mut fixture.ctx(1.0));
        assert!(goal.is_entered());
    }

    #[test]
    fn needs_a_detected_target_and_ammo() {
        let mut fixture = Fixture::new();
        assert_eq!(fight().score(&fixture.ctx(1.0)), 0.0);

        let mut fixture = spotted();
        assert!((fight().score(&fixture.ctx(1.0)) - 0.9).abs() < 1e-6);

        fixture.status.guns[0].ammo = Meter::new(0.0, 30.0);
        assert_eq!(fight().score(&fixture.ctx(1.0)), 0.0);
    }

    #[test]
    fn low_health_lowers_desire_unless_reckless() {
        let mut fixture = spotted();
        fixture.status.health = Meter::new(50.0, 100.0);
        // 0.9 * (0.3 + 0.7 * 0.5)
        assert!((fight().score(&fixture.ctx(1.0)) - 0.585).abs() < 1e-5);

        fixture.config.goals.recklessness = 1.0;
        assert!((fight().score(&fixture.ctx(1.0)) - 0.9).abs() < 1e-6);
    }

    #[test]
    fn posture_is_frozen_then_rerolled() {
        let mut fixture = spotted();
        let mut goal = fight();
        goal.enter(&mut fixture.ctx(1.0));
        goal.update(&mut fixture.ctx(1.0));
        assert_eq!(goal.freeze_until, 2.5);

        goal.update(&mut fixture.ctx(2.0));
        assert_eq!(goal.freeze_until, 2.5);

        goal.update(&mut fixture.ctx(2.5));
        assert_eq!(goal.freeze_until, 4.0);
    }

    #[test]
    fn aims_and_fires_at_the_target() {
        let mut fixture = spotted();
        let mut goal = fight();
        goal.enter(&mut fixture.ctx(1.0));
        goal.update(&mut fixture.ctx(1.0));

        assert_eq!(fixture.commands[0], Command::LookAt { position: TARGET });
        assert_eq!(fixture.commands[1], Command::Fire { at: TARGET });
        match fixture.commands[2] {
            Command::MoveTo { destination } => assert_eq!(destination, TARGET),
            Command::Strafe { around, .. } => assert_eq!(around, TARGET),
            other => panic!("unexpected movement {other:?}"),
        }
    }

    #[test]
    fn out_of_ammo_holds_fire() {
        let mut fixture = spotted();
        fixture.status.guns[0].ammo = Meter::new(0.0, 30.0);
        let mut goal = fight();
        goal.enter(&mut fixture.ctx(1.0));
        goal.update(&mut fixture.ctx(1.0));
        assert_eq!(fixture.commands[1], Command::CeaseFire);
    }

    #[test]
    fn exit_ceases_fire_once() {
        let mut fixture = spotted();
        let mut goal = fight();
        goal.enter(&mut fixture.ctx(1.0));
        goal.exit(&mut fixture.ctx(1.1));
        goal.exit(&mut fixture.ctx(1.2));
        assert_eq!(fixture.commands, vec![Command::CeaseFire]);
    }
}
