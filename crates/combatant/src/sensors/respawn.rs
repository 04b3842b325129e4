use arena_core::{EntityId, SensorConfig, Vec3, probability};
use rand::Rng;

use super::RecentEventTracker;
use crate::events::{Event, EventBus, Subscription, Topic};

/// Occasionally notices other entities (re)spawning.
pub struct RespawnSensor {
    owner: EntityId,
    detection_probability: f64,
    reaction_delay: f32,
    recent_timeout: f32,
    spawns: RecentEventTracker,
    last_position: Option<Vec3>,
    events: Subscription,
}

impl RespawnSensor {
    pub fn new(owner: EntityId, config: &SensorConfig, bus: &EventBus) -> Self {
        Self {
            owner,
            detection_probability: probability(f64::from(config.respawn_detection_probability)),
            reaction_delay: config.respawn_reaction_delay,
            recent_timeout: config.respawn_recent_timeout,
            spawns: RecentEventTracker::new(),
            last_position: None,
            events: bus.subscribe(Topic::Spawn),
        }
    }

    pub fn poll<R: Rng + ?Sized>(&mut self, now: f32, rng: &mut R) {
        for event in self.events.drain() {
            if let Event::EntitySpawned { entity, position } = event {
                self.on_spawn(now, entity, position, rng);
            }
        }
    }

    /// Rolls independently for each spawn; returns whether it was noticed.
    pub fn on_spawn<R: Rng + ?Sized>(
        &mut self,
        now: f32,
        entity: EntityId,
        position: Vec3,
        rng: &mut R,
    ) -> bool {
        if entity == self.owner || !rng.gen_bool(self.detection_probability) {
            return false;
        }
        tracing::debug!(owner = %self.owner, %entity, "Noticed respawn");
        self.spawns.push(now);
        self.last_position = Some(position);
        true
    }

    pub fn detected_respawn_recently(&self, now: f32) -> bool {
        self.spawns
            .any_within(now, self.reaction_delay, self.recent_timeout)
    }

    pub fn last_noticed(&self, now: f32) -> f32 {
        self.spawns.latest_noticed(now, self.reaction_delay)
    }

    pub fn last_position(&self) -> Option<Vec3> {
        self.last_position
    }
}
