//! Shared fakes for unit tests.

use arena_core::{
    AgentConfig, CombatantStatus, EntityId, GunState, LayerMask, Meter, Path, PathOracle,
    PickupDescriptor, PickupId, PickupOracle, Region, SightOracle, TargetStatus, Transform, Vec3,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::context::{Beliefs, GoalContext};
use crate::events::EventBus;
use crate::nodes::Command;

pub struct Blind;

impl SightOracle for Blind {
    fn can_see_object(&self, _: &Transform, _: &Transform, _: LayerMask) -> bool {
        false
    }
    fn can_see_position(&self, _: &Transform, _: Vec3, _: LayerMask) -> bool {
        false
    }
}

pub struct Clear;

impl SightOracle for Clear {
    fn can_see_object(&self, _: &Transform, _: &Transform, _: LayerMask) -> bool {
        true
    }
    fn can_see_position(&self, _: &Transform, _: Vec3, _: LayerMask) -> bool {
        true
    }
}

pub struct Straight;

impl PathOracle for Straight {
    fn calculate_path(&self, from: Vec3, to: Vec3) -> Option<Path> {
        Some(Path::straight(from, to))
    }
}

pub struct NoPickups;

impl PickupOracle for NoPickups {
    fn pickups(&self) -> Vec<PickupDescriptor> {
        Vec::new()
    }
    fn is_active(&self, _: PickupId) -> bool {
        false
    }
}

pub fn healthy(owner: EntityId) -> CombatantStatus {
    CombatantStatus {
        id: owner,
        transform: Transform::default(),
        health: Meter::full(100.0),
        guns: vec![GunState::new(Meter::full(30.0), true)],
        speed: 5.0,
        alive: true,
    }
}

/// Owns everything a [`GoalContext`] borrows.
pub struct Fixture {
    pub owner: EntityId,
    pub bus: EventBus,
    pub config: AgentConfig,
    pub status: CombatantStatus,
    pub beliefs: Beliefs,
    pub rng: StdRng,
    pub commands: Vec<Command>,
}

impl Fixture {
    /// Agent at the origin, one region well away from it, no pickups.
    pub fn new() -> Self {
        let owner = EntityId(1);
        let bus = EventBus::new();
        let config = AgentConfig::default();
        let regions = vec![Region::new(Vec3::ground(10.0, 10.0), Vec3::ground(20.0, 20.0))];
        let beliefs = Beliefs::new(owner, &config, &bus, regions, &NoPickups, 0.0);
        Self {
            owner,
            bus,
            config,
            status: healthy(owner),
            beliefs,
            rng: StdRng::seed_from_u64(7),
            commands: Vec::new(),
        }
    }

    /// Watches a live target standing at `position` for one second.
    pub fn spot_target(&mut self, position: Vec3) {
        let target = TargetStatus {
            id: EntityId(2),
            transform: Transform::at(position),
            alive: true,
        };
        for i in 1..=20 {
            self.beliefs
                .target
                .update(i as f32 * 0.05, 0.05, &self.status.transform, &target, &Clear);
        }
    }

    pub fn ctx(&mut self, now: f32) -> GoalContext<'_> {
        GoalContext {
            owner: self.owner,
            now,
            dt: 0.1,
            status: &self.status,
            config: &self.config.goals,
            beliefs: &self.beliefs,
            rng: &mut self.rng,
            commands: &mut self.commands,
        }
    }
}
