//! Tunable parameters of the decision core.
//!
//! Every section carries its defaults as associated constants so the values
//! are documented in one place and usable from `const` contexts. With the
//! `serde` feature, every field is optional in config files; missing fields
//! fall back to the defaults below.

use thiserror::Error;

/// Root configuration for one combatant.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    pub sensors: SensorConfig,
    pub target: TargetKnowledgeConfig,
    pub pickups: PickupKnowledgeConfig,
    pub map: MapKnowledgeConfig,
    pub planner: PlannerConfig,
    pub goals: GoalConfig,
}

/// Damage, sound and respawn sensor parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensorConfig {
    /// Seconds before a hit is noticed.
    pub damage_reaction_delay: f32,
    /// Seconds a noticed hit keeps counting as "recent".
    pub damage_recent_timeout: f32,
    /// Minimum `loudness / distance²` for a shot to be heard.
    pub sound_threshold: f32,
    /// Seconds a heard shot keeps counting as "recent".
    pub sound_timeout: f32,
    /// Chance that a single respawn event is noticed at all.
    pub respawn_detection_probability: f32,
    pub respawn_reaction_delay: f32,
    pub respawn_recent_timeout: f32,
}

impl SensorConfig {
    pub const DEFAULT_DAMAGE_REACTION_DELAY: f32 = 0.0;
    pub const DEFAULT_DAMAGE_RECENT_TIMEOUT: f32 = 3.0;
    pub const DEFAULT_SOUND_THRESHOLD: f32 = 1.0;
    pub const DEFAULT_SOUND_TIMEOUT: f32 = 5.0;
    pub const DEFAULT_RESPAWN_DETECTION_PROBABILITY: f32 = 0.5;
    pub const DEFAULT_RESPAWN_REACTION_DELAY: f32 = 0.0;
    pub const DEFAULT_RESPAWN_RECENT_TIMEOUT: f32 = 5.0;
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            damage_reaction_delay: Self::DEFAULT_DAMAGE_REACTION_DELAY,
            damage_recent_timeout: Self::DEFAULT_DAMAGE_RECENT_TIMEOUT,
            sound_threshold: Self::DEFAULT_SOUND_THRESHOLD,
            sound_timeout: Self::DEFAULT_SOUND_TIMEOUT,
            respawn_detection_probability: Self::DEFAULT_RESPAWN_DETECTION_PROBABILITY,
            respawn_reaction_delay: Self::DEFAULT_RESPAWN_REACTION_DELAY,
            respawn_recent_timeout: Self::DEFAULT_RESPAWN_RECENT_TIMEOUT,
        }
    }
}

/// Sliding-window parameters for target detection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TargetKnowledgeConfig {
    /// Total visibility history retained, in seconds.
    pub memory_window: f32,
    /// Recent part of the history that decides current detection.
    pub detection_window: f32,
    /// Weighted visible seconds a window must exceed to count as detected.
    pub reaction_threshold: f32,
    /// Targets closer than this are noticed without a line of sight.
    pub obvious_detection_distance: f32,
}

impl TargetKnowledgeConfig {
    pub const DEFAULT_MEMORY_WINDOW: f32 = 3.0;
    pub const DEFAULT_DETECTION_WINDOW: f32 = 0.5;
    pub const DEFAULT_REACTION_THRESHOLD: f32 = 0.2;
    pub const DEFAULT_OBVIOUS_DETECTION_DISTANCE: f32 = 2.0;
}

impl Default for TargetKnowledgeConfig {
    fn default() -> Self {
        Self {
            memory_window: Self::DEFAULT_MEMORY_WINDOW,
            detection_window: Self::DEFAULT_DETECTION_WINDOW,
            reaction_threshold: Self::DEFAULT_REACTION_THRESHOLD,
            obvious_detection_distance: Self::DEFAULT_OBVIOUS_DETECTION_DISTANCE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickupKnowledgeConfig {
    /// Pickups this close are observed even without line of sight.
    pub awareness_radius: f32,
}

impl PickupKnowledgeConfig {
    pub const DEFAULT_AWARENESS_RADIUS: f32 = 3.0;
}

impl Default for PickupKnowledgeConfig {
    fn default() -> Self {
        Self {
            awareness_radius: Self::DEFAULT_AWARENESS_RADIUS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapKnowledgeConfig {
    /// Chance that an equally stale region replaces the current pick.
    pub tie_break_chance: f64,
}

impl MapKnowledgeConfig {
    pub const DEFAULT_TIE_BREAK_CHANCE: f64 = 0.1;
}

impl Default for MapKnowledgeConfig {
    fn default() -> Self {
        Self {
            tie_break_chance: Self::DEFAULT_TIE_BREAK_CHANCE,
        }
    }
}

/// Pickup scoring parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Seconds between regular re-evaluations.
    pub recompute_interval: f32,
    /// Weight of "how much I need it" against "how much it restores".
    pub need_weight: f32,
    /// Other pickups within this radius count toward the cluster bonus.
    pub neighborhood_radius: f32,
    /// Largest cluster bonus, as a fraction (0.2 = +20 %).
    pub neighborhood_max_bonus: f32,
    /// Neighbor count at which the cluster bonus saturates.
    pub neighborhood_saturation: u32,
    /// Response curve scale: the multiplier halves at this many seconds.
    pub time_curve_scale: f32,
    /// A new pick must beat the previous one by more than this.
    pub stability_tolerance: f32,
}

impl PlannerConfig {
    pub const DEFAULT_RECOMPUTE_INTERVAL: f32 = 0.5;
    pub const DEFAULT_NEED_WEIGHT: f32 = 0.8;
    pub const DEFAULT_NEIGHBORHOOD_RADIUS: f32 = 8.0;
    pub const DEFAULT_NEIGHBORHOOD_MAX_BONUS: f32 = 0.2;
    pub const DEFAULT_NEIGHBORHOOD_SATURATION: u32 = 3;
    pub const DEFAULT_TIME_CURVE_SCALE: f32 = 20.0;
    pub const DEFAULT_STABILITY_TOLERANCE: f32 = 0.05;
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            recompute_interval: Self::DEFAULT_RECOMPUTE_INTERVAL,
            need_weight: Self::DEFAULT_NEED_WEIGHT,
            neighborhood_radius: Self::DEFAULT_NEIGHBORHOOD_RADIUS,
            neighborhood_max_bonus: Self::DEFAULT_NEIGHBORHOOD_MAX_BONUS,
            neighborhood_saturation: Self::DEFAULT_NEIGHBORHOOD_SATURATION,
            time_curve_scale: Self::DEFAULT_TIME_CURVE_SCALE,
            stability_tolerance: Self::DEFAULT_STABILITY_TOLERANCE,
        }
    }
}

/// Goal scoring and hysteresis parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GoalConfig {
    /// Constant score of exploring with map knowledge.
    pub wander_score: f32,
    /// Score of exploring when no regions are known.
    pub degraded_wander_score: f32,
    /// Radius of random wander points when no regions are known.
    pub wander_radius: f32,
    /// Distance at which a destination counts as reached.
    pub arrival_radius: f32,
    /// Fight score at full health with a detected target.
    pub fight_score: f32,
    /// 0 = health fully scales fight desire, 1 = ignores health.
    pub recklessness: f32,
    /// Seconds a probabilistic sub-decision is held before re-rolling.
    pub decision_freeze: f32,
    /// Search score right after a trigger event.
    pub search_peak_score: f32,
    /// Seconds for the search score to decay to zero.
    pub search_horizon: f32,
    /// Multiplier applied to the pickup planner's best score.
    pub pickup_weight: f32,
}

impl GoalConfig {
    pub const DEFAULT_WANDER_SCORE: f32 = 0.1;
    pub const DEFAULT_DEGRADED_WANDER_SCORE: f32 = 0.05;
    pub const DEFAULT_WANDER_RADIUS: f32 = 15.0;
    pub const DEFAULT_ARRIVAL_RADIUS: f32 = 1.0;
    pub const DEFAULT_FIGHT_SCORE: f32 = 0.9;
    pub const DEFAULT_RECKLESSNESS: f32 = 0.3;
    pub const DEFAULT_DECISION_FREEZE: f32 = 1.5;
    pub const DEFAULT_SEARCH_PEAK_SCORE: f32 = 0.7;
    pub const DEFAULT_SEARCH_HORIZON: f32 = 5.0;
    pub const DEFAULT_PICKUP_WEIGHT: f32 = 1.0;
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            wander_score: Self::DEFAULT_WANDER_SCORE,
            degraded_wander_score: Self::DEFAULT_DEGRADED_WANDER_SCORE,
            wander_radius: Self::DEFAULT_WANDER_RADIUS,
            arrival_radius: Self::DEFAULT_ARRIVAL_RADIUS,
            fight_score: Self::DEFAULT_FIGHT_SCORE,
            recklessness: Self::DEFAULT_RECKLESSNESS,
            decision_freeze: Self::DEFAULT_DECISION_FREEZE,
            search_peak_score: Self::DEFAULT_SEARCH_PEAK_SCORE,
            search_horizon: Self::DEFAULT_SEARCH_HORIZON,
            pickup_weight: Self::DEFAULT_PICKUP_WEIGHT,
        }
    }
}

/// Problems found while validating an [`AgentConfig`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a probability in [0, 1], got {value}")]
    InvalidProbability { field: &'static str, value: f64 },
}

impl AgentConfig {
    /// Rejects probabilities that are not finite values in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let probabilities = [
            (
                "sensors.respawn_detection_probability",
                f64::from(self.sensors.respawn_detection_probability),
            ),
            ("map.tie_break_chance", self.map.tie_break_chance),
            ("goals.recklessness", f64::from(self.goals.recklessness)),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { field, value });
            }
        }
        Ok(())
    }
}

/// Clamps `value` into `[0, 1]`, mapping NaN to 0.
pub fn probability(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(AgentConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_nan_and_out_of_range_probabilities() {
        let mut config = AgentConfig::default();
        config.goals.recklessness = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProbability { field: "goals.recklessness", .. })
        ));

        let mut config = AgentConfig::default();
        config.map.tie_break_chance = 1.5;
        assert!(config.validate().is_err());

        let mut config = AgentConfig::default();
        config.sensors.respawn_detection_probability = f32::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn probability_maps_nan_to_zero() {
        assert_eq!(probability(f64::NAN), 0.0);
        assert_eq!(probability(-0.5), 0.0);
        assert_eq!(probability(2.0), 1.0);
        assert_eq!(probability(0.25), 0.25);
    }
}
