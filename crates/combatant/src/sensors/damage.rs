use arena_core::{EntityId, SensorConfig, Vec3};

use super::RecentEventTracker;
use crate::events::{Event, EventBus, Subscription, Topic};

/// Remembers recent hits on its owner.
pub struct DamageSensor {
    owner: EntityId,
    reaction_delay: f32,
    recent_timeout: f32,
    hits: RecentEventTracker,
    last_source: Option<Vec3>,
    events: Subscription,
}

impl DamageSensor {
    pub fn new(owner: EntityId, config: &SensorConfig, bus: &EventBus) -> Self {
        Self {
            owner,
            reaction_delay: config.damage_reaction_delay,
            recent_timeout: config.damage_recent_timeout,
            hits: RecentEventTracker::new(),
            last_source: None,
            events: bus.subscribe(Topic::Damage),
        }
    }

    /// Consumes `DamageTaken` events addressed to the owner.
    pub fn poll(&mut self, now: f32) {
        for event in self.events.drain() {
            if let Event::DamageTaken { victim, source, .. } = event
                && victim == self.owner
            {
                self.got_damaged(now, source);
            }
        }
    }

    pub fn got_damaged(&mut self, now: f32, source: Option<Vec3>) {
        tracing::debug!(owner = %self.owner, now, "Damage registered");
        self.hits.push(now);
        if source.is_some() {
            self.last_source = source;
        }
    }

    pub fn was_damaged_recently(&self, now: f32) -> bool {
        self.hits
            .any_within(now, self.reaction_delay, self.recent_timeout)
    }

    /// When the latest hit was noticed, `-inf` if never.
    pub fn last_noticed(&self, now: f32) -> f32 {
        self.hits.latest_noticed(now, self.reaction_delay)
    }

    /// Direction the latest attributed hit came from.
    pub fn last_source(&self) -> Option<Vec3> {
        self.last_source
    }

    pub fn reset(&mut self) {
        self.hits.reset();
        self.last_source = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(delay: f32) -> SensorConfig {
        SensorConfig {
            damage_reaction_delay: delay,
            damage_recent_timeout: 2.0,
            ..SensorConfig::default()
        }
    }

    #[test]
    fn only_own_damage_counts() {
        let bus = EventBus::new();
        let mut sensor = DamageSensor::new(EntityId(1), &config(0.0), &bus);
        bus.publish(Event::DamageTaken {
            victim: EntityId(2),
            attacker: None,
            source: None,
            amount: 10.0,
        });
        sensor.poll(1.0);
        assert!(!sensor.was_damaged_recently(1.0));

        bus.publish(Event::DamageTaken {
            victim: EntityId(1),
            attacker: Some(EntityId(2)),
            source: Some(Vec3::ground(4.0, 4.0)),
            amount: 10.0,
        });
        sensor.poll(2.0);
        assert!(sensor.was_damaged_recently(2.0));
        assert_eq!(sensor.last_source(), Some(Vec3::ground(4.0, 4.0)));
        assert_eq!(sensor.last_noticed(2.5), 2.0);
    }

    #[test]
    fn recent_window_honors_delay() {
        let bus = EventBus::new();
        let mut sensor = DamageSensor::new(EntityId(1), &config(0.5), &bus);
        sensor.got_damaged(10.0, None);
        assert!(!sensor.was_damaged_recently(10.2));
        assert_eq!(sensor.last_noticed(10.2), f32::NEG_INFINITY);
        assert!(sensor.was_damaged_recently(10.5));
        assert!(!sensor.was_damaged_recently(12.5));
    }

    #[test]
    fn reset_clears_hits() {
        let bus = EventBus::new();
        let mut sensor = DamageSensor::new(EntityId(1), &config(0.0), &bus);
        sensor.got_damaged(3.0, Some(Vec3::ZERO));
        sensor.reset();
        assert!(!sensor.was_damaged_recently(3.0));
        assert_eq!(sensor.last_source(), None);
    }
}
