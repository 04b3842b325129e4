//! Persistent beliefs built from perception.

mod map;
mod pickups;
mod target;

pub use map::MapKnowledge;
pub use pickups::{PickupBelief, PickupKnowledge};
pub use target::{TargetKnowledge, VisibilityInterval, visibility_score};
