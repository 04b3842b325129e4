//! Perception sensors.
//!
//! Sensors turn event-channel traffic into time-stamped signals. They hold
//! no opinions about what the signals mean; knowledge bases and goals do.
//! Sight is not a sensor type here: it is the host's [`arena_core::SightOracle`].

mod damage;
mod recent;
mod respawn;
mod sound;

pub use damage::DamageSensor;
pub use recent::{RecentEventTracker, TRACKER_CAPACITY};
pub use respawn::RespawnSensor;
pub use sound::SoundSensor;
