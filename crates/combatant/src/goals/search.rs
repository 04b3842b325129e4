use arena_core::Vec3;
use behavior_tree::builder::sequence;
use rand::Rng;

use super::{Goal, GoalKind, GraphRunner};
use crate::context::GoalContext;
use crate::error::Result;
use crate::nodes::{NodeRegistry, Var, keys};

/// Chance of investigating the freshest clue rather than an older one.
const FRESHEST_CLUE_BIAS: f64 = 0.75;

/// A hint of where the enemy is: when it was noticed and, if known, where.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Clue {
    time: f32,
    position: Option<Vec3>,
}

fn clues(ctx: &GoalContext<'_>) -> [Clue; 4] {
    let beliefs = ctx.beliefs;
    let lost = if !beliefs.target.is_target_alive() || beliefs.target.has_seen_target() {
        f32::NEG_INFINITY
    } else {
        beliefs.target.last_time_detected()
    };
    [
        Clue {
            time: lost,
            position: beliefs.target.last_known_position(),
        },
        Clue {
            time: beliefs.damage.last_noticed(ctx.now),
            position: beliefs.damage.last_source(),
        },
        Clue {
            time: beliefs.sound.last_heard(),
            position: beliefs.sound.last_position(),
        },
        Clue {
            time: beliefs.respawn.last_noticed(ctx.now),
            position: beliefs.respawn.last_position(),
        },
    ]
}

/// Hunts for an enemy that was recently lost, heard, or that hit the agent.
///
/// The score peaks right after the trigger and decays linearly to zero over
/// the search horizon, so the goal expires on its own.
pub struct SearchEnemy {
    runner: GraphRunner,
    freeze_until: f32,
}

impl SearchEnemy {
    pub fn new(registry: &NodeRegistry) -> Result<Self> {
        let root = sequence(vec![
            registry.condition("HasDestination")?,
            registry.action("MoveToDestination")?,
            registry.action("LookAround")?,
        ]);
        Ok(Self {
            runner: GraphRunner::new("search_enemy", root),
            freeze_until: f32::NEG_INFINITY,
        })
    }

    /// Time of the most recent trigger event, `-inf` if there was none.
    pub fn trigger_time(ctx: &GoalContext<'_>) -> f32 {
        clues(ctx)
            .iter()
            .map(|c| c.time)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    fn choose_point(&mut self, ctx: &mut GoalContext<'_>) {
        let mut known: Vec<(f32, Vec3)> = clues(ctx)
            .into_iter()
            .filter(|c| c.time.is_finite())
            .filter_map(|c| c.position.map(|p| (c.time, p)))
            .collect();
        known.sort_by(|a, b| b.0.total_cmp(&a.0));

        let point = match known.as_slice() {
            [] => ctx.status.position(),
            [(_, only)] => *only,
            [(_, freshest), older @ ..] => {
                if ctx.rng.gen_bool(FRESHEST_CLUE_BIAS) {
                    *freshest
                } else {
                    older[ctx.rng.gen_range(0..older.len())].1
                }
            }
        };
        tracing::debug!(entity = %ctx.owner, ?point, clues = known.len(), "Investigating");
        self.runner.set(keys::DESTINATION, Var::Position(point));
        self.freeze_until = ctx.now + ctx.config.decision_freeze;
    }
}

impl Goal for SearchEnemy {
    fn kind(&self) -> GoalKind {
        GoalKind::SearchEnemy
    }

    fn score(&self, ctx: &GoalContext<'_>) -> f32 {
        let trigger = Self::trigger_time(ctx);
        let horizon = ctx.config.search_horizon;
        if !trigger.is_finite() || horizon <= 0.0 {
            return 0.0;
        }
        let elapsed = (ctx.now - trigger).max(0.0);
        (ctx.config.search_peak_score * (1.0 - elapsed / horizon)).max(0.0)
    }

    fn enter(&mut self, ctx: &mut GoalContext<'_>) {
        if self.runner.enter(ctx) {
            self.freeze_until = f32::NEG_INFINITY;
        }
    }

    fn update(&mut self, ctx: &mut GoalContext<'_>) {
        self.runner.refresh(ctx);
        if ctx.now >= self.freeze_until {
            self.choose_point(ctx);
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
    use arena_core::{EntityId, TargetStatus, Transform};

    use super::*;
    use crate::nodes::Command;
    use crate::testing::{Clear, Fixture};

    fn search() -> SearchEnemy {
        SearchEnemy::new(&NodeRegistry::standard()).unwrap()
    }

    #[test]
    fn nothing_happened_scores_zero() {
        let mut fixture = Fixture::new();
        assert_eq!(search().score(&fixture.ctx(3.0)), 0.0);
    }

    #[test]
    fn damage_score_decays_over_horizon() {
        let mut fixture = Fixture::new();
        fixture.beliefs.damage.got_damaged(10.0, None);
        let goal = search();
        assert!((goal.score(&fixture.ctx(10.0)) - 0.7).abs() < 1e-6);
        assert!((goal.score(&fixture.ctx(12.5)) - 0.35).abs() < 1e-5);
        assert_eq!(goal.score(&fixture.ctx(15.0)), 0.0);
        assert_eq!(goal.score(&fixture.ctx(40.0)), 0.0);
    }

    #[test]
    fn killed_target_is_not_a_lost_target() {
        let mut fixture = Fixture::new();
        let position = Vec3::ground(10.0, 0.0);
        fixture.spot_target(position);
        let dead = TargetStatus {
            id: EntityId(2),
            transform: Transform::at(position),
            alive: false,
        };
        fixture
            .beliefs
            .target
            .update(1.05, 0.05, &fixture.status.transform, &dead, &Clear);

        assert!(!fixture.beliefs.target.is_target_alive());
        assert!(fixture.beliefs.target.last_time_detected().is_finite());
        assert_eq!(SearchEnemy::trigger_time(&fixture.ctx(1.1)), f32::NEG_INFINITY);
        assert_eq!(search().score(&fixture.ctx(1.1)), 0.0);
    }

    #[test]
    fn most_recent_trigger_counts() {
        let mut fixture = Fixture::new();
        fixture.beliefs.damage.got_damaged(1.0, None);
        fixture
            .beliefs
            .sound
            .hear(4.0, Vec3::ZERO, EntityId(9), Vec3::ground(3.0, 0.0), 100.0);
        assert_eq!(SearchEnemy::trigger_time(&fixture.ctx(5.0)), 4.0);
    }

    #[test]
    fn investigates_the_only_clue() {
        let mut fixture = Fixture::new();
        let source = Vec3::ground(8.0, 0.0);
        fixture.beliefs.damage.got_damaged(2.0, Some(source));
        let mut goal = search();
        goal.enter(&mut fixture.ctx(2.0));
        goal.update(&mut fixture.ctx(2.0));
        assert_eq!(
            fixture.commands,
            vec![Command::MoveTo {
                destination: source
            }]
        );
        assert_eq!(goal.freeze_until, 3.5);
    }

    #[test]
    fn no_position_means_looking_around_in_place() {
        let mut fixture = Fixture::new();
        fixture.beliefs.damage.got_damaged(2.0, None);
        let mut goal = search();
        goal.enter(&mut fixture.ctx(2.0));
        goal.update(&mut fixture.ctx(2.0));
        assert!(matches!(fixture.commands.as_slice(), [Command::LookAt { .. }]));
    }
}
