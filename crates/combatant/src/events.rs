//! Topic-based event bus connecting the host world to sensors.
//!
//! Every topic is a `tokio::sync::broadcast` channel, so each subscriber sees
//! every event independently. Sensors own a [`Subscription`] and drain it
//! without blocking at the start of their owner's tick.

use std::sync::Arc;

use arena_core::{EntityId, Vec3};
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::goals::GoalKind;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Topic {
    /// Hits landed on entities
    Damage,
    /// Shots fired anywhere in the arena
    Gunfire,
    /// Entities (re)entering the arena
    Spawn,
    /// Goal switches of decision cores
    Decision,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    DamageTaken {
        victim: EntityId,
        attacker: Option<EntityId>,
        /// Where the hit came from, when the host knows it.
        source: Option<Vec3>,
        amount: f32,
    },
    GunFired {
        shooter: EntityId,
        position: Vec3,
        loudness: f32,
    },
    EntitySpawned {
        entity: EntityId,
        position: Vec3,
    },
    /// "entity X now focused on Y"
    GoalChanged {
        entity: EntityId,
        from: GoalKind,
        to: GoalKind,
        time: f32,
    },
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::DamageTaken { .. } => Topic::Damage,
            Event::GunFired { .. } => Topic::Gunfire,
            Event::EntitySpawned { .. } => Topic::Spawn,
            Event::GoalChanged { .. } => Topic::Decision,
        }
    }
}

struct Channels {
    damage: broadcast::Sender<Event>,
    gunfire: broadcast::Sender<Event>,
    spawn: broadcast::Sender<Event>,
    decision: broadcast::Sender<Event>,
}

impl Channels {
    fn get(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Damage => &self.damage,
            Topic::Gunfire => &self.gunfire,
            Topic::Spawn => &self.spawn,
            Topic::Decision => &self.decision,
        }
    }
}

/// Topic-based event bus
///
/// Cloned handles share the same channels.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(Channels {
                damage: broadcast::channel(capacity).0,
                gunfire: broadcast::channel(capacity).0,
                spawn: broadcast::channel(capacity).0,
                decision: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.get(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> Subscription {
        Subscription {
            topic,
            rx: self.channels.get(topic).subscribe(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving end of one topic.
pub struct Subscription {
    topic: Topic,
    rx: broadcast::Receiver<Event>,
}

impl Subscription {
    pub fn topic(&self) -> Topic {
        self.topic
    }

    /// Takes every event published since the last drain.
    ///
    /// Events dropped because the subscriber fell behind are logged and
    /// skipped.
    pub fn drain(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(topic = ?self.topic, skipped, "Subscriber lagged, events dropped");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        events
    }
}
