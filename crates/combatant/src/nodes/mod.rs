//! Leaf nodes of goal behavior graphs and the name → node registry.
//!
//! Goals never talk to the movement or gun layers directly. Their graphs
//! run against an [`ExecutionContext`]: a snapshot of what the agent knows
//! this tick, the goal's blackboard, and a buffer of [`Command`]s that the
//! host drains after the tick.

pub mod actions;
pub mod conditions;
mod registry;

pub use registry::{ActionFn, ConditionFn, NodeRegistry};

use arena_core::{PickupId, Vec3};
use behavior_tree::Blackboard;

/// High-level intent for the host's movement and gun layers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    MoveTo { destination: Vec3 },
    LookAt { position: Vec3 },
    Fire { at: Vec3 },
    CeaseFire,
    /// Circle around `around`; `direction` is +1 (clockwise) or -1.
    Strafe { around: Vec3, direction: f32 },
    Stop,
}

/// Blackboard value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Var {
    Position(Vec3),
    Pickup(PickupId),
    Number(f32),
    Flag(bool),
}

/// Blackboard keys shared by goals and nodes.
pub mod keys {
    pub const DESTINATION: &str = "destination";
    pub const PICKUP: &str = "pickup";
    pub const STRAFE_DIRECTION: &str = "strafe_direction";
    pub const CHASE: &str = "chase";
}

/// What a goal's graph can observe this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percepts {
    pub now: f32,
    pub position: Vec3,
    pub forward: Vec3,
    pub health_ratio: f32,
    pub has_ammo: bool,
    pub target_detected: bool,
    pub target_lost: bool,
    pub target_position: Option<Vec3>,
    pub damaged_recently: bool,
    pub heard_shot_recently: bool,
    pub respawn_recently: bool,
    pub chosen_pickup: Option<PickupId>,
    pub arrival_radius: f32,
}

impl Default for Percepts {
    fn default() -> Self {
        Self {
            now: 0.0,
            position: Vec3::ZERO,
            forward: Vec3::FORWARD,
            health_ratio: 1.0,
            has_ammo: false,
            target_detected: false,
            target_lost: false,
            target_position: None,
            damaged_recently: false,
            heard_shot_recently: false,
            respawn_recently: false,
            chosen_pickup: None,
            arrival_radius: 1.0,
        }
    }
}

/// Context a goal's behavior graph ticks against.
#[derive(Debug, Default)]
pub struct ExecutionContext {
    pub percepts: Percepts,
    pub vars: Blackboard<Var>,
    commands: Vec<Command>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn position_var(&self, key: &str) -> Option<Vec3> {
        match self.vars.get(key) {
            Some(Var::Position(p)) => Some(*p),
            _ => None,
        }
    }

    pub fn number_var(&self, key: &str) -> Option<f32> {
        match self.vars.get(key) {
            Some(Var::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn flag_var(&self, key: &str) -> bool {
        matches!(self.vars.get(key), Some(Var::Flag(true)))
    }

    pub fn destination(&self) -> Option<Vec3> {
        self.position_var(keys::DESTINATION)
    }

    pub fn reached(&self, point: Vec3) -> bool {
        self.percepts.position.distance(point) <= self.percepts.arrival_radius
    }
}
