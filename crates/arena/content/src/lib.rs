//! Data-driven arena content.
//!
//! Loaders read agent tuning from TOML and arena layouts (regions, walls,
//! pickups, spawn points) from RON, producing `arena-core` types directly.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ArenaLoader, ConfigLoader, ContentBundle};
