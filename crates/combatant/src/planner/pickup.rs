//! Pickup planner: scores every believed pickup against current needs.
//!
//! ```text
//! score = value × neighborhood × curve(path + wait) × curve(uncertainty)
//! ```
//!
//! clamped to `[0, 1]`. Value says how much the pickup would help; the two
//! curves discount pickups that are far away, not yet respawned, or that the
//! agent has not laid eyes on for a while; clusters of pickups get a small
//! bonus since missing one leaves the others close by.

use arena_core::{CombatantStatus, PathOracle, PickupId, PlannerConfig, Vec3};

use super::{pickup_value, response_curve};
use crate::knowledge::{PickupBelief, PickupKnowledge};

/// Full scoring breakdown of one candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickupScore {
    pub pickup: PickupId,
    pub position: Vec3,
    pub value: f32,
    pub path_time: f32,
    pub wait_time: f32,
    pub uncertainty: f32,
    pub neighborhood: f32,
    pub score: f32,
}

impl PickupScore {
    /// Travel plus waiting for the respawn.
    pub fn total_time(&self) -> f32 {
        self.path_time + self.wait_time
    }
}

/// The planner's current recommendation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickupChoice {
    pub pickup: PickupId,
    pub position: Vec3,
    pub score: f32,
    /// When the agent expects to be able to collect it.
    pub activation_time: f32,
}

pub struct PickupPlanner {
    config: PlannerConfig,
    choice: Option<PickupChoice>,
    last_update: f32,
    forced: bool,
}

impl PickupPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            choice: None,
            last_update: f32::NEG_INFINITY,
            forced: false,
        }
    }

    /// Re-evaluates at most every `recompute_interval` seconds, unless forced.
    pub fn update(
        &mut self,
        now: f32,
        status: &CombatantStatus,
        knowledge: &PickupKnowledge,
        paths: &dyn PathOracle,
    ) {
        if !self.forced && now - self.last_update < self.config.recompute_interval {
            return;
        }
        self.forced = false;
        self.last_update = now;

        let scores = self.evaluate(now, status, knowledge, paths);
        let previous = self.choice.map(|c| c.pickup);
        self.choice = self.select(&scores).map(|best| PickupChoice {
            pickup: best.pickup,
            position: best.position,
            score: best.score,
            activation_time: now + best.total_time(),
        });

        if self.choice.map(|c| c.pickup) != previous {
            tracing::debug!(
                from = ?previous,
                to = ?self.choice.map(|c| c.pickup),
                score = self.score(),
                "Pickup choice changed"
            );
        }
    }

    /// Makes the next [`update`](Self::update) recompute regardless of the interval.
    pub fn force_update(&mut self) {
        self.forced = true;
    }

    /// Scores every reachable believed pickup. Pickups worth nothing are skipped.
    pub fn evaluate(
        &self,
        now: f32,
        status: &CombatantStatus,
        knowledge: &PickupKnowledge,
        paths: &dyn PathOracle,
    ) -> Vec<PickupScore> {
        let origin = status.position();
        knowledge
            .beliefs()
            .filter_map(|belief| {
                let value = pickup_value(&belief.descriptor.kind, status, self.config.need_weight);
                if value <= 0.0 {
                    return None;
                }

                let Some(path) = paths.calculate_path(origin, belief.descriptor.position) else {
                    tracing::trace!(pickup = %belief.id(), "Pickup unreachable");
                    return None;
                };
                let path_time = paths.estimate_duration(&path, status.speed);
                if !path_time.is_finite() {
                    return None;
                }

                let wait_time = (belief.available_at - (now + path_time)).max(0.0);
                let uncertainty = belief.staleness(now);
                let neighborhood = self.neighborhood_bonus(belief, knowledge);
                let scale = self.config.time_curve_scale;
                let score = (value
                    * neighborhood
                    * response_curve(path_time + wait_time, scale)
                    * response_curve(uncertainty, scale))
                .clamp(0.0, 1.0);

                tracing::trace!(
                    pickup = %belief.id(),
                    value,
                    path_time,
                    wait_time,
                    uncertainty,
                    neighborhood,
                    score,
                    "Scored pickup"
                );

                Some(PickupScore {
                    pickup: belief.id(),
                    position: belief.descriptor.position,
                    value,
                    path_time,
                    wait_time,
                    uncertainty,
                    neighborhood,
                    score,
                })
            })
            .collect()
    }

    /// `1 + max_bonus × min(neighbors, saturation) / saturation`
    fn neighborhood_bonus(&self, belief: &PickupBelief, knowledge: &PickupKnowledge) -> f32 {
        let saturation = self.config.neighborhood_saturation;
        if saturation == 0 {
            return 1.0;
        }
        let position = belief.descriptor.position;
        let neighbors = knowledge
            .beliefs()
            .filter(|other| other.id() != belief.id())
            .filter(|other| {
                other.descriptor.position.distance(position) <= self.config.neighborhood_radius
            })
            .count() as u32;
        1.0 + self.config.neighborhood_max_bonus * neighbors.min(saturation) as f32
            / saturation as f32
    }

    /// Best candidate with hysteresis toward the previous choice.
    fn select<'a>(&self, scores: &'a [PickupScore]) -> Option<&'a PickupScore> {
        let best = scores.iter().reduce(|best, candidate| {
            if candidate.score > best.score
                || (candidate.score == best.score && candidate.total_time() < best.total_time())
            {
                candidate
            } else {
                best
            }
        })?;

        let previous = self
            .choice
            .and_then(|choice| scores.iter().find(|s| s.pickup == choice.pickup));
        match previous {
            Some(previous) if best.score - previous.score <= self.config.stability_tolerance => {
                Some(previous)
            }
            _ => Some(best),
        }
    }

    pub fn chosen_pickup(&self) -> Option<PickupId> {
        self.choice.map(|c| c.pickup)
    }

    pub fn choice(&self) -> Option<&PickupChoice> {
        self.choice.as_ref()
    }

    /// Normalized score of the current choice, zero when there is none.
    pub fn score(&self) -> f32 {
        self.choice.map_or(0.0, |c| c.score)
    }

    pub fn estimated_activation_time(&self) -> Option<f32> {
        self.choice.map(|c| c.activation_time)
    }
}
