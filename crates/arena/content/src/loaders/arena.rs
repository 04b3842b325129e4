//! Arena layout loader.
//!
//! Layouts are authored in RON and validated before they are handed to the
//! decision core.

use std::path::Path;

use arena_core::ArenaLayout;

use crate::loaders::{LoadResult, read_file};

/// Loader for arena layouts from RON files.
pub struct ArenaLoader;

impl ArenaLoader {
    /// Load and validate an [`ArenaLayout`] from a RON file.
    pub fn load(path: &Path) -> LoadResult<ArenaLayout> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid arena {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<ArenaLayout> {
        let layout: ArenaLayout = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse arena RON: {}", e))?;
        layout.validate()?;

        tracing::debug!(
            regions = layout.regions.len(),
            walls = layout.walls.len(),
            pickups = layout.pickups.len(),
            spawns = layout.spawn_points.len(),
            "Loaded arena layout"
        );
        Ok(layout)
    }
}
