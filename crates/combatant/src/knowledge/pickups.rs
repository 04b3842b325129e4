//! Beliefs about when each pickup will next be collectable.
//!
//! The agent does not get to query pickup spawners for free: a pickup's
//! state is only refreshed while the agent can actually observe it. In
//! between, the belief is an estimate.

use std::collections::BTreeMap;

use arena_core::{
    LayerMask, PickupCategory, PickupDescriptor, PickupId, PickupKnowledgeConfig, PickupOracle,
    SightOracle, Transform,
};

use crate::error::{AiError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct PickupBelief {
    pub descriptor: PickupDescriptor,
    /// Estimated time at which the pickup is (or was) available.
    pub available_at: f32,
    /// Whether the agent observed the pickup on the last update.
    pub visible: bool,
    pub last_observed: f32,
}

impl PickupBelief {
    pub fn id(&self) -> PickupId {
        self.descriptor.id
    }

    pub fn is_probably_active(&self, now: f32) -> bool {
        self.available_at <= now
    }

    /// Seconds since the pickup was last observed, capped by its cooldown.
    /// Zero while it is in view.
    pub fn staleness(&self, now: f32) -> f32 {
        if self.visible {
            0.0
        } else {
            (now - self.last_observed).clamp(0.0, self.descriptor.cooldown.max(0.0))
        }
    }
}

pub struct PickupKnowledge {
    config: PickupKnowledgeConfig,
    beliefs: BTreeMap<PickupId, PickupBelief>,
}

impl PickupKnowledge {
    /// Discovers every pickup once; all are assumed available at `now`.
    pub fn new(config: PickupKnowledgeConfig, oracle: &dyn PickupOracle, now: f32) -> Self {
        let beliefs = oracle
            .pickups()
            .into_iter()
            .map(|descriptor| {
                let belief = PickupBelief {
                    descriptor,
                    available_at: now,
                    visible: false,
                    last_observed: now,
                };
                (belief.id(), belief)
            })
            .collect::<BTreeMap<_, _>>();
        tracing::debug!(count = beliefs.len(), "Discovered pickups");
        Self { config, beliefs }
    }

    /// Refreshes beliefs for every pickup the agent can observe from `eye`.
    pub fn update(
        &mut self,
        now: f32,
        eye: &Transform,
        sight: &dyn SightOracle,
        oracle: &dyn PickupOracle,
    ) {
        for belief in self.beliefs.values_mut() {
            let position = belief.descriptor.position;
            belief.visible = eye.position.distance(position) <= self.config.awareness_radius
                || sight.can_see_position(eye, position, LayerMask::OBSTACLES);
            if !belief.visible {
                continue;
            }

            belief.last_observed = now;
            if oracle.is_active(belief.id()) {
                belief.available_at = now;
            } else if belief.available_at <= now {
                // Taken by someone else at an unknown time: assume halfway through.
                belief.available_at = now + belief.descriptor.cooldown / 2.0;
            }
        }
    }

    /// The agent collected the pickup itself, so its respawn time is exact.
    pub fn mark_consumed(&mut self, id: PickupId, now: f32) -> Result<()> {
        let belief = self.beliefs.get_mut(&id).ok_or(AiError::UnknownPickup(id))?;
        belief.available_at = now + belief.descriptor.cooldown;
        belief.last_observed = now;
        Ok(())
    }

    pub fn belief(&self, id: PickupId) -> Option<&PickupBelief> {
        self.beliefs.get(&id)
    }

    pub fn beliefs(&self) -> impl Iterator<Item = &PickupBelief> {
        self.beliefs.values()
    }

    pub fn of_category(&self, category: PickupCategory) -> impl Iterator<Item = &PickupBelief> {
        self.beliefs
            .values()
            .filter(move |b| b.descriptor.kind.category() == category)
    }

    pub fn probably_active(&self, now: f32) -> impl Iterator<Item = &PickupBelief> {
        self.beliefs
            .values()
            .filter(move |b| b.is_probably_active(now))
    }

    pub fn len(&self) -> usize {
        self.beliefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beliefs.is_empty()
    }
}
