//! Shared arena types and collaborator contracts.
//!
//! `arena-core` defines what the decision core reads from the world each
//! tick ([`CombatantStatus`], [`TargetStatus`]), the oracles it queries
//! ([`SightOracle`], [`PathOracle`], [`PickupOracle`]), the static
//! [`ArenaLayout`] it is spawned into, and the [`AgentConfig`] tunables.
//! Nothing here makes decisions; the `combatant` crate builds on these types.
pub mod config;
pub mod env;
pub mod layout;
pub mod math;
pub mod pickup;
pub mod state;

pub use config::{
    AgentConfig, ConfigError, GoalConfig, MapKnowledgeConfig, PickupKnowledgeConfig, PlannerConfig,
    SensorConfig, TargetKnowledgeConfig, probability,
};
pub use env::{LayerMask, Path, PathOracle, PickupOracle, SightOracle};
pub use layout::{ArenaLayout, LayoutError, Region, Wall};
pub use math::Vec3;
pub use pickup::{PickupCategory, PickupDescriptor, PickupId, PickupKind};
pub use state::{CombatantStatus, EntityId, GunState, Meter, TargetStatus, Transform};
