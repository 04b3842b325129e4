//! Condition nodes: read-only checks over the execution context.

use super::{ExecutionContext, keys};

pub fn has_seen_target(ctx: &ExecutionContext) -> bool {
    ctx.percepts.target_detected
}

pub fn has_lost_target(ctx: &ExecutionContext) -> bool {
    ctx.percepts.target_lost
}

pub fn was_damaged_recently(ctx: &ExecutionContext) -> bool {
    ctx.percepts.damaged_recently
}

pub fn heard_shot_recently(ctx: &ExecutionContext) -> bool {
    ctx.percepts.heard_shot_recently
}

pub fn detected_respawn_recently(ctx: &ExecutionContext) -> bool {
    ctx.percepts.respawn_recently
}

pub fn has_chosen_pickup(ctx: &ExecutionContext) -> bool {
    ctx.percepts.chosen_pickup.is_some()
}

pub fn has_destination(ctx: &ExecutionContext) -> bool {
    ctx.destination().is_some()
}

pub fn reached_destination(ctx: &ExecutionContext) -> bool {
    ctx.destination().is_some_and(|d| ctx.reached(d))
}

pub fn has_ammo(ctx: &ExecutionContext) -> bool {
    ctx.percepts.has_ammo
}

/// Fight posture rolled by the goal: chase instead of strafing.
pub fn is_chasing(ctx: &ExecutionContext) -> bool {
    ctx.flag_var(keys::CHASE)
}

#[cfg(test)]
mod tests {
    use arena_core::Vec3;

    use super::*;
    use crate::nodes::Var;

    #[test]
    fn destination_conditions() {
        let mut ctx = ExecutionContext::new();
        assert!(!has_destination(&ctx));
        assert!(!reached_destination(&ctx));

        ctx.vars
            .set(keys::DESTINATION, Var::Position(Vec3::ground(0.5, 0.0)));
        assert!(has_destination(&ctx));
        assert!(reached_destination(&ctx));

        ctx.vars
            .set(keys::DESTINATION, Var::Position(Vec3::ground(5.0, 0.0)));
        assert!(!reached_destination(&ctx));
    }

    #[test]
    fn chase_flag_must_be_true() {
        let mut ctx = ExecutionContext::new();
        ctx.vars.set(keys::CHASE, Var::Flag(false));
        assert!(!is_chasing(&ctx));
        ctx.vars.set(keys::CHASE, Var::Flag(true));
        assert!(is_chasing(&ctx));
    }
}
