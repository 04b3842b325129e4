//! Decision core of a non-player arena combatant.
//!
//! Data flows upward once per tick:
//!
//! 1. **Sensors** ([`sensors`]) drain event channels into time-stamped signals
//! 2. **Knowledge** ([`knowledge`]) turns signals and sight queries into beliefs
//! 3. **Planner** ([`planner`]) scores pickups against current needs
//! 4. **Arbitration** ([`GoalArbiter`]) keeps the best-scoring [`Goal`] active
//!
//! The active goal's behavior graph emits [`Command`]s that the host hands to
//! its movement and gun layers. [`Combatant`] wires all of it together.

pub mod agent;
pub mod arbiter;
pub mod context;
pub mod error;
pub mod events;
pub mod goals;
pub mod knowledge;
pub mod nodes;
pub mod planner;
pub mod sensors;

#[cfg(test)]
mod testing;

pub use agent::{Combatant, CombatantBuilder};
pub use arbiter::{ArbitrationReport, GoalArbiter};
pub use context::{Beliefs, Frame, GoalContext, WorldView};
pub use error::{AiError, Result};
pub use events::{Event, EventBus, Subscription, Topic};
pub use goals::{Goal, GoalKind};
pub use nodes::{Command, ExecutionContext, NodeRegistry, Percepts};
