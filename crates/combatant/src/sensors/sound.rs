use arena_core::{EntityId, SensorConfig, Vec3};

use crate::events::{Event, EventBus, Subscription, Topic};

/// Hears gunshots of other entities that are loud enough at the listener.
pub struct SoundSensor {
    owner: EntityId,
    threshold: f32,
    timeout: f32,
    last_heard: f32,
    last_position: Option<Vec3>,
    events: Subscription,
}

impl SoundSensor {
    pub fn new(owner: EntityId, config: &SensorConfig, bus: &EventBus) -> Self {
        Self {
            owner,
            threshold: config.sound_threshold,
            timeout: config.sound_timeout,
            last_heard: f32::NEG_INFINITY,
            last_position: None,
            events: bus.subscribe(Topic::Gunfire),
        }
    }

    /// Processes gunfire published since the last tick, heard from `listener`.
    pub fn poll(&mut self, now: f32, listener: Vec3) {
        for event in self.events.drain() {
            if let Event::GunFired {
                shooter,
                position,
                loudness,
            } = event
            {
                self.hear(now, listener, shooter, position, loudness);
            }
        }
    }

    /// Returns whether the shot was loud enough to register.
    pub fn hear(
        &mut self,
        now: f32,
        listener: Vec3,
        shooter: EntityId,
        position: Vec3,
        loudness: f32,
    ) -> bool {
        if shooter == self.owner {
            return false;
        }
        let intensity = loudness / listener.distance_squared(position).max(f32::EPSILON);
        if intensity <= self.threshold {
            return false;
        }
        tracing::debug!(owner = %self.owner, %shooter, intensity, "Heard shot");
        self.last_heard = now;
        self.last_position = Some(position);
        true
    }

    pub fn heard_shot_recently(&self, now: f32) -> bool {
        now <= self.last_heard + self.timeout
    }

    /// Time of the last audible shot, `-inf` if none.
    pub fn last_heard(&self) -> f32 {
        self.last_heard
    }

    pub fn last_position(&self) -> Option<Vec3> {
        self.last_position
    }
}
