//! Per-tick snapshots of combatant state supplied by the host.
//!
//! The decision core never owns health, ammo or movement; the gun and
//! movement layers do. Each tick the host hands over a [`CombatantStatus`]
//! for the deciding agent and a [`TargetStatus`] for its hostile target.

use std::fmt;

use crate::math::Vec3;

/// Unique identifier for any entity in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// World-space position and facing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub position: Vec3,
    /// Unit facing direction.
    pub forward: Vec3,
}

impl Transform {
    pub const fn new(position: Vec3, forward: Vec3) -> Self {
        Self { position, forward }
    }

    pub const fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::FORWARD)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

/// A bounded quantity such as health or a gun's ammo reserve.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meter {
    pub current: f32,
    pub max: f32,
}

impl Meter {
    pub const fn new(current: f32, max: f32) -> Self {
        Self { current, max }
    }

    pub const fn full(max: f32) -> Self {
        Self::new(max, max)
    }

    /// Current value as a fraction of max, in `[0, 1]`. Zero when max is zero.
    pub fn ratio(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            (self.current / self.max).clamp(0.0, 1.0)
        }
    }

    /// Room left before the meter is full.
    pub fn missing(&self) -> f32 {
        (self.max - self.current).max(0.0)
    }
}

/// Ammunition state of one weapon slot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GunState {
    pub ammo: Meter,
    /// Whether the agent currently owns and can use this weapon.
    pub active: bool,
}

impl GunState {
    pub const fn new(ammo: Meter, active: bool) -> Self {
        Self { ammo, active }
    }

    pub fn has_ammo(&self) -> bool {
        self.active && self.ammo.current > 0.0
    }
}

/// Everything the decision core reads about the deciding agent.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatantStatus {
    pub id: EntityId,
    pub transform: Transform,
    pub health: Meter,
    /// Weapon slots, indexed consistently with ammo pickups' refill tables.
    pub guns: Vec<GunState>,
    /// Movement speed in units per second.
    pub speed: f32,
    pub alive: bool,
}

impl CombatantStatus {
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    pub fn has_ammo(&self) -> bool {
        self.guns.iter().any(GunState::has_ammo)
    }

    pub fn active_guns(&self) -> impl Iterator<Item = (usize, &GunState)> {
        self.guns.iter().enumerate().filter(|(_, gun)| gun.active)
    }
}

/// Ground truth about the hostile target, filtered through sight before use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetStatus {
    pub id: EntityId,
    pub transform: Transform,
    pub alive: bool,
}

impl TargetStatus {
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }
}
