//! Per-tick inputs and the belief state goals score against.

use arena_core::{
    AgentConfig, CombatantStatus, EntityId, GoalConfig, PathOracle, PickupOracle, Region,
    SightOracle, TargetStatus,
};
use rand::rngs::StdRng;

use crate::events::EventBus;
use crate::knowledge::{MapKnowledge, PickupKnowledge, TargetKnowledge};
use crate::nodes::{Command, Percepts};
use crate::planner::PickupPlanner;
use crate::sensors::{DamageSensor, RespawnSensor, SoundSensor};

/// World queries the host answers during a tick.
#[derive(Clone, Copy)]
pub struct WorldView<'a> {
    pub sight: &'a dyn SightOracle,
    pub paths: &'a dyn PathOracle,
    pub pickups: &'a dyn PickupOracle,
}

/// Everything the host hands over for one decision tick.
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    pub now: f32,
    pub dt: f32,
    pub status: &'a CombatantStatus,
    pub target: &'a TargetStatus,
    pub world: WorldView<'a>,
}

/// Sensors, knowledge bases and planners owned by one combatant.
pub struct Beliefs {
    pub damage: DamageSensor,
    pub sound: SoundSensor,
    pub respawn: RespawnSensor,
    pub target: TargetKnowledge,
    pub pickups: PickupKnowledge,
    pub map: MapKnowledge,
    pub planner: PickupPlanner,
}

impl Beliefs {
    pub fn new(
        owner: EntityId,
        config: &AgentConfig,
        bus: &EventBus,
        regions: Vec<Region>,
        pickups: &dyn PickupOracle,
        now: f32,
    ) -> Self {
        Self {
            damage: DamageSensor::new(owner, &config.sensors, bus),
            sound: SoundSensor::new(owner, &config.sensors, bus),
            respawn: RespawnSensor::new(owner, &config.sensors, bus),
            target: TargetKnowledge::new(config.target.clone()),
            pickups: PickupKnowledge::new(config.pickups.clone(), pickups, now),
            map: MapKnowledge::new(&config.map, regions),
            planner: PickupPlanner::new(config.planner.clone()),
        }
    }

    /// Drains event channels into the sensors.
    pub fn poll_sensors(&mut self, frame: &Frame<'_>, rng: &mut StdRng) {
        self.damage.poll(frame.now);
        self.sound.poll(frame.now, frame.status.position());
        self.respawn.poll(frame.now, rng);
    }

    /// Sensors, then knowledge, then planner.
    pub fn update(&mut self, frame: &Frame<'_>, rng: &mut StdRng) {
        self.poll_sensors(frame, rng);

        let eye = &frame.status.transform;
        self.target
            .update(frame.now, frame.dt, eye, frame.target, frame.world.sight);
        self.pickups
            .update(frame.now, eye, frame.world.sight, frame.world.pickups);
        self.map.update(frame.now, frame.status.position());

        self.planner
            .update(frame.now, frame.status, &self.pickups, frame.world.paths);
    }

    /// Forgets hits and target sightings, e.g. after the owner respawns.
    pub fn reset(&mut self) {
        self.damage.reset();
        self.target.reset();
    }
}

/// Blackboard handed to goals during arbitration.
pub struct GoalContext<'a> {
    pub owner: EntityId,
    pub now: f32,
    pub dt: f32,
    pub status: &'a CombatantStatus,
    pub config: &'a GoalConfig,
    pub beliefs: &'a Beliefs,
    pub rng: &'a mut StdRng,
    pub commands: &'a mut Vec<Command>,
}

impl GoalContext<'_> {
    /// Snapshot for behavior graph leaves.
    pub fn percepts(&self) -> Percepts {
        let beliefs = self.beliefs;
        Percepts {
            now: self.now,
            position: self.status.position(),
            forward: self.status.transform.forward,
            health_ratio: self.status.health.ratio(),
            has_ammo: self.status.has_ammo(),
            target_detected: beliefs.target.has_seen_target(),
            target_lost: beliefs.target.has_lost_target(),
            target_position: beliefs.target.last_known_position(),
            damaged_recently: beliefs.damage.was_damaged_recently(self.now),
            heard_shot_recently: beliefs.sound.heard_shot_recently(self.now),
            respawn_recently: beliefs.respawn.detected_respawn_recently(self.now),
            chosen_pickup: beliefs.planner.chosen_pickup(),
            arrival_radius: self.config.arrival_radius,
        }
    }
}
