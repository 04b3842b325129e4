#![allow(dead_code)]

use std::cell::Cell;

use arena_core::{
    CombatantStatus, EntityId, GunState, LayerMask, Meter, Path, PathOracle, PickupDescriptor,
    PickupId, PickupKind, PickupOracle, Region, SightOracle, TargetStatus, Transform, Vec3,
};
use combatant::{Frame, WorldView};

pub const AGENT: EntityId = EntityId(1);
pub const ENEMY: EntityId = EntityId(2);
pub const DT: f32 = 0.1;

/// Sight that can be switched on and off between ticks.
#[derive(Default)]
pub struct Eyes {
    pub open: Cell<bool>,
}

impl SightOracle for Eyes {
    fn can_see_object(&self, _: &Transform, _: &Transform, _: LayerMask) -> bool {
        self.open.get()
    }
    fn can_see_position(&self, _: &Transform, _: Vec3, _: LayerMask) -> bool {
        self.open.get()
    }
}

pub struct Straight;

impl PathOracle for Straight {
    fn calculate_path(&self, from: Vec3, to: Vec3) -> Option<Path> {
        Some(Path::straight(from, to))
    }
}

/// Fixed pickups, all active unless switched off.
pub struct Spawners {
    pub pickups: Vec<PickupDescriptor>,
    pub active: Cell<bool>,
}

impl Spawners {
    pub fn none() -> Self {
        Self::with(Vec::new())
    }

    pub fn with(pickups: Vec<PickupDescriptor>) -> Self {
        Self {
            pickups,
            active: Cell::new(true),
        }
    }
}

impl PickupOracle for Spawners {
    fn pickups(&self) -> Vec<PickupDescriptor> {
        self.pickups.clone()
    }
    fn is_active(&self, _: PickupId) -> bool {
        self.active.get()
    }
}

pub fn health_pickup(id: u32, position: Vec3, cooldown: f32) -> PickupDescriptor {
    PickupDescriptor {
        id: PickupId(id),
        kind: PickupKind::Health { amount: 50.0 },
        position,
        cooldown,
    }
}

/// Two regions away from the origin.
pub fn regions() -> Vec<Region> {
    vec![
        Region::new(Vec3::ground(20.0, 20.0), Vec3::ground(30.0, 30.0)),
        Region::new(Vec3::ground(-30.0, 20.0), Vec3::ground(-20.0, 30.0)),
    ]
}

pub fn agent_status() -> CombatantStatus {
    CombatantStatus {
        id: AGENT,
        transform: Transform::default(),
        health: Meter::full(100.0),
        guns: vec![GunState::new(Meter::full(30.0), true)],
        speed: 5.0,
        alive: true,
    }
}

pub fn enemy_at(position: Vec3) -> TargetStatus {
    TargetStatus {
        id: ENEMY,
        transform: Transform::at(position),
        alive: true,
    }
}

/// Exact tick time, avoiding accumulated float error.
pub fn time(tick: u32) -> f32 {
    tick as f32 / 10.0
}

pub struct World {
    pub eyes: Eyes,
    pub paths: Straight,
    pub spawners: Spawners,
}

impl World {
    pub fn new(spawners: Spawners) -> Self {
        Self {
            eyes: Eyes::default(),
            paths: Straight,
            spawners,
        }
    }

    pub fn view(&self) -> WorldView<'_> {
        WorldView {
            sight: &self.eyes,
            paths: &self.paths,
            pickups: &self.spawners,
        }
    }

    pub fn frame<'a>(
        &'a self,
        tick: u32,
        status: &'a CombatantStatus,
        target: &'a TargetStatus,
    ) -> Frame<'a> {
        Frame {
            now: time(tick),
            dt: DT,
            status,
            target,
            world: self.view(),
        }
    }
}
