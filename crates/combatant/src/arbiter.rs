//! Goal arbitration with hysteresis.
//!
//! Every tick all goals are scored. The active goal keeps control unless
//! another goal scores strictly higher, so equal scores never cause
//! flip-flopping. Goals add their own smoothing on top (decision freezes,
//! decaying scores).

use std::collections::HashSet;

use arena_core::EntityId;

use crate::context::GoalContext;
use crate::error::Result;
use crate::events::{Event, EventBus};
use crate::goals::{Fight, Goal, GoalKind, LookForPickups, NoGoal, SearchEnemy, Wander};
use crate::nodes::NodeRegistry;

/// Outcome of one arbitration tick, for diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct ArbitrationReport {
    pub time: f32,
    /// Every goal's score in arbitration order.
    pub scores: Vec<(GoalKind, f32)>,
    pub previous: GoalKind,
    pub active: GoalKind,
}

impl ArbitrationReport {
    pub fn switched(&self) -> bool {
        self.previous != self.active
    }

    pub fn score_of(&self, kind: GoalKind) -> Option<f32> {
        self.scores
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, score)| *score)
    }
}

/// Owns the fixed goal set of one entity and keeps exactly one active.
pub struct GoalArbiter {
    owner: EntityId,
    bus: EventBus,
    goals: Vec<Box<dyn Goal>>,
    active: usize,
    disabled: HashSet<GoalKind>,
}

impl GoalArbiter {
    /// Standard goal set built from `registry`.
    pub fn new(owner: EntityId, bus: EventBus, registry: &NodeRegistry) -> Result<Self> {
        let goals: Vec<Box<dyn Goal>> = vec![
            Box::new(Wander::new(registry)?),
            Box::new(Fight::new(registry)?),
            Box::new(SearchEnemy::new(registry)?),
            Box::new(LookForPickups::new(registry)?),
        ];
        Ok(Self::with_goals(owner, bus, goals))
    }

    /// Custom goal set. [`NoGoal`] is always prepended as the initial state.
    pub fn with_goals(owner: EntityId, bus: EventBus, goals: Vec<Box<dyn Goal>>) -> Self {
        let mut all: Vec<Box<dyn Goal>> = Vec::with_capacity(goals.len() + 1);
        all.push(Box::new(NoGoal::new()));
        all.extend(goals);
        Self {
            owner,
            bus,
            goals: all,
            active: 0,
            disabled: HashSet::new(),
        }
    }

    pub fn active(&self) -> GoalKind {
        self.goals[self.active].kind()
    }

    /// Disabled goals score `-inf`. `NoGoal` cannot be disabled.
    pub fn set_enabled(&mut self, kind: GoalKind, enabled: bool) {
        if kind == GoalKind::NoGoal {
            return;
        }
        if enabled {
            self.disabled.remove(&kind);
        } else {
            self.disabled.insert(kind);
        }
    }

    pub fn is_enabled(&self, kind: GoalKind) -> bool {
        !self.disabled.contains(&kind)
    }

    /// Scores every goal without side effects.
    pub fn evaluate_all(&self, ctx: &GoalContext<'_>) -> Vec<(GoalKind, f32)> {
        self.goals
            .iter()
            .map(|goal| {
                let kind = goal.kind();
                let score = if self.is_enabled(kind) {
                    goal.score(ctx)
                } else {
                    f32::NEG_INFINITY
                };
                (kind, score)
            })
            .collect()
    }

    /// Scores, switches if a goal strictly beats the active one, then
    /// updates the active goal.
    pub fn tick(&mut self, ctx: &mut GoalContext<'_>) -> ArbitrationReport {
        let scores = self.evaluate_all(ctx);
        let previous = self.active;

        let mut best = self.active;
        let mut best_score = scores[best].1;
        for (index, &(_, score)) in scores.iter().enumerate() {
            if score > best_score {
                best = index;
                best_score = score;
            }
        }

        tracing::debug!(
            entity = %self.owner,
            now = ctx.now,
            scores = ?scores,
            best = %scores[best].0,
            "Arbitration"
        );

        if best != self.active {
            let from = self.goals[self.active].kind();
            let to = self.goals[best].kind();
            self.goals[self.active].exit(ctx);
            self.goals[best].enter(ctx);
            self.active = best;

            tracing::info!(entity = %self.owner, %from, %to, score = best_score, "Goal switched");
            self.bus.publish(Event::GoalChanged {
                entity: self.owner,
                from,
                to,
                time: ctx.now,
            });
        }

        self.goals[self.active].update(ctx);

        ArbitrationReport {
            time: ctx.now,
            scores,
            previous: self.goals[previous].kind(),
            active: self.goals[self.active].kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::events::Topic;
    use crate::testing::Fixture;

    /// Goal with a fixed score that counts its lifecycle calls.
    struct Constant {
        kind: GoalKind,
        score: f32,
        entered: bool,
        exits: Arc<AtomicU32>,
    }

    impl Constant {
        fn boxed(kind: GoalKind, score: f32) -> (Box<dyn Goal>, Arc<AtomicU32>) {
            let exits = Arc::new(AtomicU32::new(0));
            let goal: Box<dyn Goal> = Box::new(Self {
                kind,
                score,
                entered: false,
                exits: exits.clone(),
            });
            (goal, exits)
        }
    }

    impl Goal for Constant {
        fn kind(&self) -> GoalKind {
            self.kind
        }
        fn score(&self, _: &GoalContext<'_>) -> f32 {
            self.score
        }
        fn enter(&mut self, _: &mut GoalContext<'_>) {
            self.entered = true;
        }
        fn update(&mut self, _: &mut GoalContext<'_>) {}
        fn exit(&mut self, _: &mut GoalContext<'_>) {
            self.exits.fetch_add(1, Ordering::SeqCst);
            self.entered = false;
        }
        fn is_entered(&self) -> bool {
            self.entered
        }
    }

    #[test]
    fn zero_score_beats_no_goal() {
        let mut fixture = Fixture::new();
        let (goal, _) = Constant::boxed(GoalKind::Wander, 0.0);
        let mut arbiter = GoalArbiter::with_goals(fixture.owner, fixture.bus.clone(), vec![goal]);
        assert_eq!(arbiter.active(), GoalKind::NoGoal);

        let report = arbiter.tick(&mut fixture.ctx(0.0));
        assert_eq!(report.active, GoalKind::Wander);
        assert!(report.switched());
        assert_eq!(report.score_of(GoalKind::NoGoal), Some(f32::NEG_INFINITY));
    }

    #[test]
    fn ties_never_switch() {
        let mut fixture = Fixture::new();
        let (first, first_exits) = Constant::boxed(GoalKind::Wander, 0.5);
        let (second, second_exits) = Constant::boxed(GoalKind::Fight, 0.5);
        let mut arbiter =
            GoalArbiter::with_goals(fixture.owner, fixture.bus.clone(), vec![first, second]);

        for tick in 0..100 {
            let report = arbiter.tick(&mut fixture.ctx(tick as f32 * 0.1));
            assert_eq!(report.active, GoalKind::Wander);
        }
        assert_eq!(first_exits.load(Ordering::SeqCst), 0);
        assert_eq!(second_exits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn strictly_better_goal_takes_over_and_is_announced() {
        let mut fixture = Fixture::new();
        let mut decisions = fixture.bus.subscribe(Topic::Decision);
        let (low, low_exits) = Constant::boxed(GoalKind::Wander, 0.1);
        let (high, _) = Constant::boxed(GoalKind::SearchEnemy, 0.7);
        let mut arbiter =
            GoalArbiter::with_goals(fixture.owner, fixture.bus.clone(), vec![low, high]);

        arbiter.tick(&mut fixture.ctx(0.0));
        assert_eq!(arbiter.active(), GoalKind::SearchEnemy);
        assert_eq!(low_exits.load(Ordering::SeqCst), 0);
        assert_eq!(
            decisions.drain(),
            vec![Event::GoalChanged {
                entity: fixture.owner,
                from: GoalKind::NoGoal,
                to: GoalKind::SearchEnemy,
                time: 0.0,
            }]
        );
    }

    #[test]
    fn disabled_goals_cannot_win() {
        let mut fixture = Fixture::new();
        let (low, _) = Constant::boxed(GoalKind::Wander, 0.1);
        let (high, _) = Constant::boxed(GoalKind::Fight, 0.9);
        let mut arbiter =
            GoalArbiter::with_goals(fixture.owner, fixture.bus.clone(), vec![low, high]);
        arbiter.set_enabled(GoalKind::Fight, false);
        arbiter.set_enabled(GoalKind::NoGoal, false);

        arbiter.tick(&mut fixture.ctx(0.0));
        assert_eq!(arbiter.active(), GoalKind::Wander);
        assert!(arbiter.is_enabled(GoalKind::NoGoal));

        arbiter.set_enabled(GoalKind::Fight, true);
        arbiter.tick(&mut fixture.ctx(0.1));
        assert_eq!(arbiter.active(), GoalKind::Fight);
    }

    #[test]
    fn nan_scores_are_ignored() {
        let mut fixture = Fixture::new();
        let (broken, _) = Constant::boxed(GoalKind::Fight, f32::NAN);
        let (fallback, _) = Constant::boxed(GoalKind::Wander, 0.1);
        let mut arbiter =
            GoalArbiter::with_goals(fixture.owner, fixture.bus.clone(), vec![broken, fallback]);
        arbiter.tick(&mut fixture.ctx(0.0));
        assert_eq!(arbiter.active(), GoalKind::Wander);
    }

    #[test]
    fn standard_goals_start_wandering() {
        let mut fixture = Fixture::new();
        let mut arbiter =
            GoalArbiter::new(fixture.owner, fixture.bus.clone(), &NodeRegistry::standard()).unwrap();
        let report = arbiter.tick(&mut fixture.ctx(0.0));
        assert_eq!(report.active, GoalKind::Wander);
        assert!(!fixture.commands.is_empty());
    }
}
