//! Flat arena used by the headless simulation.
//!
//! Sight is a view cone plus range test occluded by the layout's walls, paths
//! are straight lines, and pickups go dormant for their cooldown after being
//! collected.

use arena_core::{
    ArenaLayout, LayerMask, Path, PathOracle, PickupDescriptor, PickupId, PickupOracle,
    SightOracle, Transform, Vec3, Wall,
};

/// Pickups within this distance of a combatant are collected.
pub const COLLECT_RADIUS: f32 = 1.0;

#[derive(Clone, Debug)]
struct Slot {
    descriptor: PickupDescriptor,
    respawn_at: f32,
}

pub struct FlatWorld {
    walls: Vec<Wall>,
    slots: Vec<Slot>,
    now: f32,
    /// Full view cone angle in degrees.
    pub fov: f32,
    pub view_range: f32,
}

impl FlatWorld {
    pub const DEFAULT_FOV: f32 = 120.0;
    pub const DEFAULT_VIEW_RANGE: f32 = 60.0;

    pub fn new(layout: &ArenaLayout) -> Self {
        Self {
            walls: layout.walls.clone(),
            slots: layout
                .pickups
                .iter()
                .cloned()
                .map(|descriptor| Slot {
                    descriptor,
                    respawn_at: 0.0,
                })
                .collect(),
            now: 0.0,
            fov: Self::DEFAULT_FOV,
            view_range: Self::DEFAULT_VIEW_RANGE,
        }
    }

    /// Advances the clock pickup respawns are measured against.
    pub fn advance(&mut self, now: f32) {
        self.now = now;
    }

    /// True if no wall on `mask` crosses the segment between the two points.
    pub fn line_clear(&self, from: Vec3, to: Vec3, mask: LayerMask) -> bool {
        !mask.intersects(LayerMask::WALLS)
            || !self.walls.iter().any(|w| w.intersects_segment(from, to))
    }

    /// Collects the first active pickup within reach of `position`.
    pub fn try_collect(&mut self, position: Vec3) -> Option<PickupDescriptor> {
        let now = self.now;
        let slot = self.slots.iter_mut().find(|slot| {
            slot.respawn_at <= now && slot.descriptor.position.distance(position) <= COLLECT_RADIUS
        })?;
        slot.respawn_at = now + slot.descriptor.cooldown;
        tracing::debug!(pickup = %slot.descriptor.id, respawn_at = slot.respawn_at, "Pickup collected");
        Some(slot.descriptor.clone())
    }

    fn in_view(&self, eye: &Transform, position: Vec3) -> bool {
        let offset = position - eye.position;
        if offset.length() > self.view_range {
            return false;
        }
        offset.length_squared() <= f32::EPSILON || self.angle_to(eye, position) <= self.fov * 0.5
    }
}

impl SightOracle for FlatWorld {
    fn can_see_object(&self, eye: &Transform, target: &Transform, mask: LayerMask) -> bool {
        self.can_see_position(eye, target.position, mask)
    }

    fn can_see_position(&self, eye: &Transform, position: Vec3, mask: LayerMask) -> bool {
        self.in_view(eye, position) && self.line_clear(eye.position, position, mask)
    }
}

impl PathOracle for FlatWorld {
    fn calculate_path(&self, from: Vec3, to: Vec3) -> Option<Path> {
        Some(Path::straight(from, to))
    }
}

impl PickupOracle for FlatWorld {
    fn pickups(&self) -> Vec<PickupDescriptor> {
        self.slots.iter().map(|s| s.descriptor.clone()).collect()
    }

    fn is_active(&self, id: PickupId) -> bool {
        self.slots
            .iter()
            .any(|s| s.descriptor.id == id && s.respawn_at <= self.now)
    }
}

#[cfg(test)]
mod tests {
    use arena_core::PickupKind;

    use super::*;

    fn layout() -> ArenaLayout {
        ArenaLayout {
            walls: vec![Wall::new(Vec3::new(4.0, 0.0, -1.0), Vec3::new(5.0, 3.0, 1.0))],
            pickups: vec![PickupDescriptor {
                id: PickupId(1),
                kind: PickupKind::Health { amount: 25.0 },
                position: Vec3::ground(0.0, 10.0),
                cooldown: 15.0,
            }],
            spawn_points: vec![Vec3::ground(0.0, 0.0)],
            ..ArenaLayout::default()
        }
    }

    fn eye() -> Transform {
        Transform::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0))
    }

    #[test]
    fn walls_block_sight() {
        let world = FlatWorld::new(&layout());
        let behind = Vec3::new(8.0, 1.0, 0.0);
        assert!(!world.can_see_position(&eye(), behind, LayerMask::OBSTACLES));
        assert!(world.can_see_position(&eye(), behind, LayerMask::ENTITIES));
        assert!(world.can_see_position(&eye(), Vec3::new(3.0, 1.0, 2.0), LayerMask::OBSTACLES));
    }

    #[test]
    fn sight_is_limited_to_the_view_cone() {
        let world = FlatWorld::new(&layout());
        assert!(!world.can_see_position(&eye(), Vec3::new(-5.0, 1.0, 0.0), LayerMask::OBSTACLES));
        assert!(!world.can_see_position(&eye(), Vec3::new(0.0, 1.0, 5.0), LayerMask::OBSTACLES));
        assert!(world.can_see_position(&eye(), Vec3::new(5.0, 1.0, 4.0), LayerMask::empty()));
    }

    #[test]
    fn sight_is_limited_by_range() {
        let world = FlatWorld::new(&layout());
        let far = Vec3::new(0.0, 1.0, -0.5) + Vec3::new(FlatWorld::DEFAULT_VIEW_RANGE + 1.0, 0.0, 0.0);
        assert!(!world.can_see_position(&eye(), far, LayerMask::empty()));
    }

    #[test]
    fn collected_pickup_respawns_after_cooldown() {
        let mut world = FlatWorld::new(&layout());
        let id = PickupId(1);
        assert!(world.is_active(id));
        assert!(world.try_collect(Vec3::ground(5.0, 10.0)).is_none());

        world.advance(2.0);
        let collected = world.try_collect(Vec3::ground(0.5, 10.0)).unwrap();
        assert_eq!(collected.id, id);
        assert!(!world.is_active(id));
        assert!(world.try_collect(Vec3::ground(0.0, 10.0)).is_none());

        world.advance(16.9);
        assert!(!world.is_active(id));
        world.advance(17.0);
        assert!(world.is_active(id));
    }
}
