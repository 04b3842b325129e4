//! Sliding-window target detection.
//!
//! Every perception tick appends to a time-ordered history of visibility
//! intervals. Visible intervals carry a score that is higher the closer the
//! target was, so a brief close-up glimpse weighs more than the same glimpse
//! across the arena. Detection compares the weighted visible time inside a
//! recent window against a reaction threshold; sporadic single-frame
//! glimpses do not trigger it, sustained or repeated sightings do.

use std::collections::VecDeque;

use arena_core::{LayerMask, SightOracle, TargetKnowledgeConfig, TargetStatus, Transform, Vec3};

const NEAR_SCORE: f32 = 5.0;
const FAR_SCORE: f32 = 1.0;
const FAR_DISTANCE: f32 = 50.0;

/// Weight of one visible second at `distance`: 5 up close, 1 at 50 units or more.
pub fn visibility_score(distance: f32) -> f32 {
    let t = distance.clamp(0.0, FAR_DISTANCE) / FAR_DISTANCE;
    NEAR_SCORE + (FAR_SCORE - NEAR_SCORE) * t
}

/// Contiguous period during which the target was (score > 0) or was not
/// (score = 0) observed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityInterval {
    pub start: f32,
    pub end: f32,
    pub score: f32,
}

impl VisibilityInterval {
    /// `score × |[start, end] ∩ [from, to]|`
    fn weight_within(&self, from: f32, to: f32) -> f32 {
        let overlap = self.end.min(to) - self.start.max(from);
        if overlap > 0.0 { overlap * self.score } else { 0.0 }
    }
}

/// What the agent believes about its hostile target.
pub struct TargetKnowledge {
    config: TargetKnowledgeConfig,
    history: VecDeque<VisibilityInterval>,
    now: f32,
    alive: bool,
    last_time_detected: f32,
    last_known_position: Option<Vec3>,
}

impl TargetKnowledge {
    pub fn new(config: TargetKnowledgeConfig) -> Self {
        Self {
            config,
            history: VecDeque::new(),
            now: 0.0,
            alive: true,
            last_time_detected: f32::NEG_INFINITY,
            last_known_position: None,
        }
    }

    /// Runs one perception tick against the host's sight oracle.
    pub fn update(
        &mut self,
        now: f32,
        dt: f32,
        eye: &Transform,
        target: &TargetStatus,
        sight: &dyn SightOracle,
    ) {
        self.alive = target.alive;
        let distance = eye.position.distance(target.position());
        let visible = target.alive
            && (distance <= self.config.obvious_detection_distance
                || sight.can_see_object(eye, &target.transform, LayerMask::OBSTACLES));

        if visible {
            self.last_known_position = Some(target.position());
        }
        self.observe(now, dt, visible, distance);
    }

    /// Appends one tick's observation and refreshes detection state.
    pub fn observe(&mut self, now: f32, dt: f32, visible: bool, distance: f32) {
        let previous_end = self.history.back().map_or(f32::NEG_INFINITY, |i| i.end);
        let start = (now - dt).max(previous_end);

        if visible {
            self.history.push_back(VisibilityInterval {
                start,
                end: now,
                score: visibility_score(distance),
            });
        } else {
            match self.history.back_mut() {
                Some(last) if last.score == 0.0 => last.end = now,
                _ => self.history.push_back(VisibilityInterval {
                    start,
                    end: now,
                    score: 0.0,
                }),
            }
        }

        self.advance(now);
        if self.has_seen_target() {
            self.last_time_detected = now;
        }
    }

    /// Moves the clock forward, forgetting intervals older than the memory window.
    pub fn advance(&mut self, now: f32) {
        self.now = now;
        let horizon = now - self.config.memory_window;
        while self.history.front().is_some_and(|i| i.end < horizon) {
            self.history.pop_front();
        }
        if let Some(first) = self.history.front_mut()
            && first.start < horizon
        {
            first.start = horizon;
        }
    }

    /// Weighted visible time overlapping `[from, to]`.
    pub fn weighted_visibility(&self, from: f32, to: f32) -> f32 {
        self.history.iter().map(|i| i.weight_within(from, to)).sum()
    }

    pub fn has_seen_target(&self) -> bool {
        self.alive
            && self.weighted_visibility(self.now - self.config.detection_window, self.now)
                > self.config.reaction_threshold
    }

    /// Whether the target was alive at the last update.
    pub fn is_target_alive(&self) -> bool {
        self.alive
    }

    /// Seen earlier in the memory window but not any more.
    pub fn has_lost_target(&self) -> bool {
        self.alive
            && !self.has_seen_target()
            && self.weighted_visibility(
                self.now - self.config.memory_window,
                self.now - self.config.detection_window,
            ) > self.config.reaction_threshold
    }

    /// Latest tick at which the target counted as detected, `-inf` if never.
    pub fn last_time_detected(&self) -> f32 {
        self.last_time_detected
    }

    pub fn last_known_position(&self) -> Option<Vec3> {
        self.last_known_position
    }

    pub fn history(&self) -> impl Iterator<Item = &VisibilityInterval> {
        self.history.iter()
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.last_time_detected = f32::NEG_INFINITY;
        self.last_known_position = None;
    }
}
