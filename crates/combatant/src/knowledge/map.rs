//! Exploration bookkeeping over a static region partition.

use arena_core::{MapKnowledgeConfig, Region, Vec3, probability};
use rand::Rng;

use crate::error::{AiError, Result};

pub struct MapKnowledge {
    regions: Vec<Region>,
    last_visit: Vec<f32>,
    tie_break_chance: f64,
}

impl MapKnowledge {
    pub fn new(config: &MapKnowledgeConfig, regions: Vec<Region>) -> Self {
        let last_visit = vec![f32::NEG_INFINITY; regions.len()];
        Self {
            regions,
            last_visit,
            tie_break_chance: probability(config.tie_break_chance),
        }
    }

    /// Whether destinations can be recommended at all.
    pub fn can_be_used(&self) -> bool {
        !self.regions.is_empty()
    }

    /// Stamps every region the agent currently stands in.
    pub fn update(&mut self, now: f32, position: Vec3) {
        for (region, visit) in self.regions.iter().zip(self.last_visit.iter_mut()) {
            if region.contains(position) {
                *visit = now;
            }
        }
    }

    /// Uniform point inside the least recently visited region.
    pub fn recommended_destination<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec3> {
        let mut best: Option<usize> = None;
        for (index, &visit) in self.last_visit.iter().enumerate() {
            best = match best {
                None => Some(index),
                Some(current) if visit < self.last_visit[current] => Some(index),
                Some(current)
                    if visit == self.last_visit[current]
                        && rng.gen_bool(self.tie_break_chance) =>
                {
                    Some(index)
                }
                keep => keep,
            };
        }
        let index = best.ok_or(AiError::NoRegions)?;
        Ok(self.regions[index].sample_point(rng))
    }

    pub fn last_visit(&self, region: usize) -> Option<f32> {
        self.last_visit.get(region).copied()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}
