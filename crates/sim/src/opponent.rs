//! Scripted enemy the simulated combatant fights against.

use arena_core::{EntityId, LayerMask, Meter, SightOracle, TargetStatus, Transform, Vec3};
use rand::Rng;

use crate::world::FlatWorld;

/// A shot taken by the opponent this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shot {
    pub from: Vec3,
    pub hit: bool,
}

/// Patrols a fixed loop of waypoints and shoots the agent on sight.
pub struct Opponent {
    pub id: EntityId,
    pub transform: Transform,
    pub health: Meter,
    pub alive: bool,
    waypoints: Vec<Vec3>,
    next_waypoint: usize,
    next_shot: f32,
    respawn_at: f32,
}

impl Opponent {
    pub const SPEED: f32 = 4.0;
    pub const MAX_HEALTH: f32 = 100.0;
    pub const FIRE_INTERVAL: f32 = 0.6;
    pub const DAMAGE: f32 = 8.0;
    pub const RESPAWN_DELAY: f32 = 3.0;

    pub fn new(id: EntityId, spawn: Vec3, waypoints: Vec<Vec3>) -> Self {
        Self {
            id,
            transform: Transform::at(spawn),
            health: Meter::full(Self::MAX_HEALTH),
            alive: true,
            waypoints,
            next_waypoint: 0,
            next_shot: 0.0,
            respawn_at: 0.0,
        }
    }

    pub fn status(&self) -> TargetStatus {
        TargetStatus {
            id: self.id,
            transform: self.transform,
            alive: self.alive,
        }
    }

    /// Shoots at `agent` when it is in view, otherwise keeps patrolling.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        now: f32,
        dt: f32,
        agent: Option<&Transform>,
        world: &FlatWorld,
        rng: &mut R,
    ) -> Option<Shot> {
        if !self.alive {
            return None;
        }

        let visible =
            agent.filter(|a| world.can_see_object(&self.transform, a, LayerMask::OBSTACLES));
        if let Some(agent) = visible {
            self.face(agent.position);
            if now < self.next_shot {
                return None;
            }
            self.next_shot = now + Self::FIRE_INTERVAL;
            let distance = self.transform.position.distance(agent.position);
            return Some(Shot {
                from: self.transform.position,
                hit: rng.gen_bool(hit_chance(distance)),
            });
        }

        if let Some(&waypoint) = self.waypoints.get(self.next_waypoint) {
            self.face(waypoint);
            self.transform.position = self.transform.position.move_towards(waypoint, Self::SPEED * dt);
            if self.transform.position.distance(waypoint) <= 0.1 {
                self.next_waypoint = (self.next_waypoint + 1) % self.waypoints.len();
            }
        }
        None
    }

    /// Applies a hit; returns true if it was fatal.
    pub fn take_damage(&mut self, amount: f32, now: f32) -> bool {
        if !self.alive {
            return false;
        }
        self.health.current = (self.health.current - amount).max(0.0);
        if self.health.current > 0.0 {
            return false;
        }
        self.alive = false;
        self.respawn_at = now + Self::RESPAWN_DELAY;
        tracing::info!(entity = %self.id, "Opponent down");
        true
    }

    /// Brings a dead opponent back at `spawn` once its delay has passed.
    pub fn try_respawn(&mut self, now: f32, spawn: Vec3) -> bool {
        if self.alive || now < self.respawn_at {
            return false;
        }
        self.alive = true;
        self.health = Meter::full(Self::MAX_HEALTH);
        self.transform = Transform::at(spawn);
        self.next_shot = now + Self::FIRE_INTERVAL;
        true
    }

    fn face(&mut self, position: Vec3) {
        let direction = (position - self.transform.position).normalize_or_zero();
        if direction != Vec3::ZERO {
            self.transform.forward = direction;
        }
    }
}

/// Chance that a shot from `distance` lands.
pub fn hit_chance(distance: f32) -> f64 {
    f64::from(0.8 - distance / 60.0).clamp(0.1, 0.8)
}
