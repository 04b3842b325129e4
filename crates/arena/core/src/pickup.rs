//! Static description of collectible pickups.

use std::fmt;

use crate::math::Vec3;

/// Identifier of a pickup placed in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupId(pub u32);

impl fmt::Display for PickupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pickup#{}", self.0)
    }
}

/// What a pickup restores when collected.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickupKind {
    /// Restores up to `amount` health.
    Health { amount: f32 },
    /// Restores up to `refill[i]` rounds to weapon slot `i`.
    Ammo { refill: Vec<f32> },
}

impl PickupKind {
    pub fn category(&self) -> PickupCategory {
        match self {
            PickupKind::Health { .. } => PickupCategory::Health,
            PickupKind::Ammo { .. } => PickupCategory::Ammo,
        }
    }
}

/// Coarse pickup type used for filtering beliefs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PickupCategory {
    Health,
    Ammo,
}

/// Immutable placement and behavior of one pickup.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupDescriptor {
    pub id: PickupId,
    pub kind: PickupKind,
    pub position: Vec3,
    /// Seconds between being collected and becoming active again.
    pub cooldown: f32,
}
