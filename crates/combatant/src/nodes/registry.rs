//! Name → node registry used to assemble goal graphs.

use std::collections::HashMap;

use behavior_tree::{Action, Behavior, Condition, Status};

use super::{ExecutionContext, actions, conditions};
use crate::error::{AiError, Result};

pub type ConditionFn = fn(&ExecutionContext) -> bool;
pub type ActionFn = fn(&mut ExecutionContext) -> Status;

/// Explicit table of the conditions and actions goals may reference.
#[derive(Clone, Default)]
pub struct NodeRegistry {
    conditions: HashMap<&'static str, ConditionFn>,
    actions: HashMap<&'static str, ActionFn>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in condition and action.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .register_condition("HasSeenTarget", conditions::has_seen_target)
            .register_condition("HasLostTarget", conditions::has_lost_target)
            .register_condition("WasDamagedRecently", conditions::was_damaged_recently)
            .register_condition("HeardShotRecently", conditions::heard_shot_recently)
            .register_condition(
                "DetectedRespawnRecently",
                conditions::detected_respawn_recently,
            )
            .register_condition("HasChosenPickup", conditions::has_chosen_pickup)
            .register_condition("HasDestination", conditions::has_destination)
            .register_condition("ReachedDestination", conditions::reached_destination)
            .register_condition("HasAmmo", conditions::has_ammo)
            .register_condition("IsChasing", conditions::is_chasing)
            .register_action("MoveToDestination", actions::move_to_destination)
            .register_action("AimAtTarget", actions::aim_at_target)
            .register_action("FireAtTarget", actions::fire_at_target)
            .register_action("ChaseTarget", actions::chase_target)
            .register_action("Strafe", actions::strafe)
            .register_action("LookAround", actions::look_around)
            .register_action("Stop", actions::stop)
            .register_action("CeaseFire", actions::cease_fire);
        registry
    }

    pub fn register_condition(&mut self, name: &'static str, condition: ConditionFn) -> &mut Self {
        self.conditions.insert(name, condition);
        self
    }

    pub fn register_action(&mut self, name: &'static str, action: ActionFn) -> &mut Self {
        self.actions.insert(name, action);
        self
    }

    pub fn condition(&self, name: &str) -> Result<Box<dyn Behavior<ExecutionContext>>> {
        let check = *self
            .conditions
            .get(name)
            .ok_or_else(|| AiError::UnknownNode(name.to_owned()))?;
        Ok(Box::new(Condition::new(check)))
    }

    pub fn action(&self, name: &str) -> Result<Box<dyn Behavior<ExecutionContext>>> {
        let run = *self
            .actions
            .get(name)
            .ok_or_else(|| AiError::UnknownNode(name.to_owned()))?;
        Ok(Box::new(Action::new(run)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.conditions.contains_key(name) || self.actions.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_resolves_nodes() {
        let registry = NodeRegistry::standard();
        let mut ctx = ExecutionContext::new();
        ctx.percepts.has_ammo = true;

        let mut check = registry.condition("HasAmmo").unwrap();
        assert_eq!(check.tick(&mut ctx), Status::Success);

        let mut stop = registry.action("Stop").unwrap();
        assert_eq!(stop.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.take_commands().len(), 1);
    }

    #[test]
    fn unknown_names_are_errors() {
        let registry = NodeRegistry::standard();
        assert!(matches!(
            registry.condition("Teleport"),
            Err(AiError::UnknownNode(name)) if name == "Teleport"
        ));
        // Actions and conditions live in separate namespaces.
        assert!(registry.action("HasAmmo").is_err());
    }

    #[test]
    fn custom_nodes_can_be_registered() {
        fn always(_: &ExecutionContext) -> bool {
            true
        }
        let mut registry = NodeRegistry::new();
        registry.register_condition("Always", always);
        assert!(registry.contains("Always"));
        assert!(!registry.contains("Stop"));
    }
}
