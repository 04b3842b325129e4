use crate::pickup::{PickupDescriptor, PickupId};

/// Access to the arena's pickup spawners.
///
/// `is_active` is ground truth; callers must only consult it for pickups
/// the agent is currently able to observe.
pub trait PickupOracle {
    /// Every pickup in the level. The set is fixed for the level's lifetime.
    fn pickups(&self) -> Vec<PickupDescriptor>;

    /// Whether the pickup can be collected right now.
    fn is_active(&self, id: PickupId) -> bool;
}
