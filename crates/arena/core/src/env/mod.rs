//! Traits describing the world queries the decision core relies on.
//!
//! Oracles are implemented by the host engine (physics raycasts, navmesh,
//! pickup spawners). The core only consumes their answers, so it can be
//! driven by a real engine or by the flat test arena alike.
mod path;
mod pickups;
mod sight;

pub use path::{Path, PathOracle};
pub use pickups::PickupOracle;
pub use sight::{LayerMask, SightOracle};
