//! Action nodes: issue commands and report progress.
//!
//! Movement toward the destination reports `Running` until arrival so that
//! sequences resume at it. Combat actions are one-shot per tick.

use arena_core::Vec3;
use behavior_tree::Status;

use super::{Command, ExecutionContext, keys};

pub fn move_to_destination(ctx: &mut ExecutionContext) -> Status {
    let Some(destination) = ctx.destination() else {
        return Status::Failure;
    };
    if ctx.reached(destination) {
        return Status::Success;
    }
    ctx.issue(Command::MoveTo { destination });
    Status::Running
}

pub fn aim_at_target(ctx: &mut ExecutionContext) -> Status {
    match ctx.percepts.target_position {
        Some(position) => {
            ctx.issue(Command::LookAt { position });
            Status::Success
        }
        None => Status::Failure,
    }
}

pub fn fire_at_target(ctx: &mut ExecutionContext) -> Status {
    match ctx.percepts.target_position {
        Some(at) if ctx.percepts.target_detected && ctx.percepts.has_ammo => {
            ctx.issue(Command::Fire { at });
            Status::Success
        }
        _ => Status::Failure,
    }
}

pub fn chase_target(ctx: &mut ExecutionContext) -> Status {
    match ctx.percepts.target_position {
        Some(destination) => {
            ctx.issue(Command::MoveTo { destination });
            Status::Success
        }
        None => Status::Failure,
    }
}

pub fn strafe(ctx: &mut ExecutionContext) -> Status {
    let Some(around) = ctx.percepts.target_position else {
        return Status::Failure;
    };
    let direction = ctx
        .number_var(keys::STRAFE_DIRECTION)
        .map_or(1.0, f32::signum);
    ctx.issue(Command::Strafe { around, direction });
    Status::Success
}

/// Turns a quarter to the right of the current facing.
pub fn look_around(ctx: &mut ExecutionContext) -> Status {
    let side = ctx.percepts.forward.cross(Vec3::UP).normalize_or_zero();
    let direction = if side == Vec3::ZERO { Vec3::FORWARD } else { -side };
    let position = ctx.percepts.position + direction * 5.0;
    ctx.issue(Command::LookAt { position });
    Status::Success
}

pub fn stop(ctx: &mut ExecutionContext) -> Status {
    ctx.issue(Command::Stop);
    Status::Success
}

pub fn cease_fire(ctx: &mut ExecutionContext) -> Status {
    ctx.issue(Command::CeaseFire);
    Status::Success
}
