//! The combatant: one decision core wired to its beliefs and goals.

use arena_core::{AgentConfig, EntityId, PickupId, PickupOracle, Region, Vec3};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::arbiter::{ArbitrationReport, GoalArbiter};
use crate::context::{Beliefs, Frame, GoalContext};
use crate::error::Result;
use crate::events::EventBus;
use crate::goals::GoalKind;
use crate::nodes::{Command, NodeRegistry};

/// Builder for [`Combatant`].
pub struct CombatantBuilder {
    id: EntityId,
    config: AgentConfig,
    regions: Vec<Region>,
    seed: u64,
    registry: Option<NodeRegistry>,
    disabled: Vec<GoalKind>,
}

impl CombatantBuilder {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            config: AgentConfig::default(),
            regions: Vec::new(),
            seed: u64::from(id.0),
            registry: None,
            disabled: Vec::new(),
        }
    }

    pub fn config(mut self, config: AgentConfig) -> Self {
        self.config = config;
        self
    }

    /// Exploration regions. Without any, wandering degrades to random points.
    pub fn regions(mut self, regions: Vec<Region>) -> Self {
        self.regions = regions;
        self
    }

    /// Seed of the combatant's private RNG. Defaults to the entity id.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Node registry for goal graphs. Defaults to [`NodeRegistry::standard`].
    pub fn registry(mut self, registry: NodeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn disable_goal(mut self, kind: GoalKind) -> Self {
        self.disabled.push(kind);
        self
    }

    /// Subscribes the sensors to `bus` and discovers pickups through `pickups`.
    pub fn build(self, bus: &EventBus, pickups: &dyn PickupOracle, now: f32) -> Result<Combatant> {
        let registry = self.registry.unwrap_or_else(NodeRegistry::standard);
        let mut arbiter = GoalArbiter::new(self.id, bus.clone(), &registry)?;
        for kind in self.disabled {
            arbiter.set_enabled(kind, false);
        }
        let beliefs = Beliefs::new(self.id, &self.config, bus, self.regions, pickups, now);

        tracing::info!(entity = %self.id, seed = self.seed, "Combatant ready");
        Ok(Combatant {
            id: self.id,
            config: self.config,
            rng: StdRng::seed_from_u64(self.seed),
            beliefs,
            arbiter,
            last_report: None,
        })
    }
}

/// Decision core of one non-player combatant.
///
/// The host calls [`tick`](Self::tick) once per simulation step and feeds
/// the returned commands to its movement and gun layers.
pub struct Combatant {
    id: EntityId,
    config: AgentConfig,
    rng: StdRng,
    beliefs: Beliefs,
    arbiter: GoalArbiter,
    last_report: Option<ArbitrationReport>,
}

impl Combatant {
    pub fn builder(id: EntityId) -> CombatantBuilder {
        CombatantBuilder::new(id)
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Runs sensors, knowledge, planner and arbitration in that order.
    ///
    /// A dead combatant still drains its event channels but decides nothing.
    pub fn tick(&mut self, frame: &Frame<'_>) -> Vec<Command> {
        if !frame.status.alive {
            self.beliefs.poll_sensors(frame, &mut self.rng);
            return Vec::new();
        }

        self.beliefs.update(frame, &mut self.rng);

        let mut commands = Vec::new();
        let mut ctx = GoalContext {
            owner: self.id,
            now: frame.now,
            dt: frame.dt,
            status: frame.status,
            config: &self.config.goals,
            beliefs: &self.beliefs,
            rng: &mut self.rng,
            commands: &mut commands,
        };
        self.last_report = Some(self.arbiter.tick(&mut ctx));
        commands
    }

    /// Direct notification of a hit, for hosts that bypass the event bus.
    pub fn on_damaged(&mut self, now: f32, source: Option<Vec3>) {
        self.beliefs.damage.got_damaged(now, source);
    }

    /// The combatant collected `pickup`; its respawn time is now known exactly.
    pub fn on_pickup_consumed(&mut self, pickup: PickupId, now: f32) -> Result<()> {
        self.beliefs.pickups.mark_consumed(pickup, now)?;
        self.beliefs.planner.force_update();
        Ok(())
    }

    /// Forgets hits and target sightings (e.g. after respawning).
    pub fn reset_beliefs(&mut self) {
        tracing::debug!(entity = %self.id, "Beliefs reset");
        self.beliefs.reset();
    }

    pub fn set_goal_enabled(&mut self, kind: GoalKind, enabled: bool) {
        self.arbiter.set_enabled(kind, enabled);
    }

    pub fn active_goal(&self) -> GoalKind {
        self.arbiter.active()
    }

    pub fn last_report(&self) -> Option<&ArbitrationReport> {
        self.last_report.as_ref()
    }

    pub fn beliefs(&self) -> &Beliefs {
        &self.beliefs
    }

    pub fn has_seen_target(&self) -> bool {
        self.beliefs.target.has_seen_target()
    }

    pub fn has_lost_target(&self) -> bool {
        self.beliefs.target.has_lost_target()
    }

    pub fn was_damaged_recently(&self, now: f32) -> bool {
        self.beliefs.damage.was_damaged_recently(now)
    }

    pub fn heard_shot_recently(&self, now: f32) -> bool {
        self.beliefs.sound.heard_shot_recently(now)
    }

    pub fn detected_respawn_recently(&self, now: f32) -> bool {
        self.beliefs.respawn.detected_respawn_recently(now)
    }

    pub fn chosen_pickup(&self) -> Option<PickupId> {
        self.beliefs.planner.chosen_pickup()
    }

    pub fn pickup_score(&self) -> f32 {
        self.beliefs.planner.score()
    }

    pub fn estimated_activation_time(&self) -> Option<f32> {
        self.beliefs.planner.estimated_activation_time()
    }

    /// Point in the least recently visited region.
    pub fn recommended_destination(&mut self) -> Result<Vec3> {
        self.beliefs.map.recommended_destination(&mut self.rng)
    }
}
