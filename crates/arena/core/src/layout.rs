//! Static arena layout: exploration regions, occluding walls, pickups and spawns.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use crate::math::Vec3;
use crate::pickup::{PickupDescriptor, PickupId};

/// Axis-aligned rectangle on the ground plane used to partition the level
/// for exploration bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub min: Vec3,
    pub max: Vec3,
}

impl Region {
    /// Builds a region from two opposite corners in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: Vec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Vec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// True if `position` lies inside the rectangle (height is ignored).
    pub fn contains(&self, position: Vec3) -> bool {
        position.x >= self.min.x
            && position.x <= self.max.x
            && position.z >= self.min.z
            && position.z <= self.max.z
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Uniformly sampled point inside the rectangle, at floor height.
    pub fn sample_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        Vec3::new(
            rng.gen_range(self.min.x..=self.max.x),
            self.min.y,
            rng.gen_range(self.min.z..=self.max.z),
        )
    }

    fn is_degenerate(&self) -> bool {
        !(self.min.x < self.max.x && self.min.z < self.max.z)
    }
}

/// Axis-aligned box that blocks line of sight.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub min: Vec3,
    pub max: Vec3,
}

impl Wall {
    pub fn new(a: Vec3, b: Vec3) -> Self {
        let region = Region::new(a, b);
        Self {
            min: region.min,
            max: region.max,
        }
    }

    /// Slab test: does the segment `from → to` pass through the box?
    pub fn intersects_segment(&self, from: Vec3, to: Vec3) -> bool {
        let dir = to - from;
        let mut t_min = 0.0_f32;
        let mut t_max = 1.0_f32;

        for (origin, delta, lo, hi) in [
            (from.x, dir.x, self.min.x, self.max.x),
            (from.y, dir.y, self.min.y, self.max.y),
            (from.z, dir.z, self.min.z, self.max.z),
        ] {
            if delta.abs() <= f32::EPSILON {
                if origin < lo || origin > hi {
                    return false;
                }
                continue;
            }
            let inv = 1.0 / delta;
            let (t0, t1) = {
                let a = (lo - origin) * inv;
                let b = (hi - origin) * inv;
                if a <= b { (a, b) } else { (b, a) }
            };
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return false;
            }
        }
        true
    }
}

/// Everything placed in the level before the match starts.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaLayout {
    #[cfg_attr(feature = "serde", serde(default))]
    pub regions: Vec<Region>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub walls: Vec<Wall>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pickups: Vec<PickupDescriptor>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spawn_points: Vec<Vec3>,
}

/// Problems found while validating an [`ArenaLayout`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("region {index} has zero area")]
    DegenerateRegion { index: usize },

    #[error("{id} is declared more than once")]
    DuplicatePickup { id: PickupId },

    #[error("{id} has a negative cooldown ({cooldown})")]
    NegativeCooldown { id: PickupId, cooldown: f32 },

    #[error("layout defines no spawn points")]
    NoSpawnPoints,
}

impl ArenaLayout {
    /// Checks structural invariants the decision core relies on.
    ///
    /// An empty region list is allowed: exploration then degrades gracefully.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if let Some(index) = self.regions.iter().position(Region::is_degenerate) {
            return Err(LayoutError::DegenerateRegion { index });
        }

        let mut seen = HashSet::new();
        for pickup in &self.pickups {
            if !seen.insert(pickup.id) {
                return Err(LayoutError::DuplicatePickup { id: pickup.id });
            }
            if pickup.cooldown < 0.0 {
                return Err(LayoutError::NegativeCooldown {
                    id: pickup.id,
                    cooldown: pickup.cooldown,
                });
            }
        }

        if self.spawn_points.is_empty() {
            return Err(LayoutError::NoSpawnPoints);
        }
        Ok(())
    }

    /// Index of the region containing `position`, if any.
    pub fn region_at(&self, position: Vec3) -> Option<usize> {
        self.regions.iter().position(|r| r.contains(position))
    }
}
