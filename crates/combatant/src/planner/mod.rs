//! Pickup selection.

mod curves;
mod pickup;
mod value;

pub use curves::response_curve;
pub use pickup::{PickupChoice, PickupPlanner, PickupScore};
pub use value::pickup_value;
