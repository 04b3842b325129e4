//! Loads everything one match needs from a content directory.

use std::path::{Path, PathBuf};

use arena_core::{AgentConfig, ArenaLayout};

use crate::loaders::{ArenaLoader, ConfigLoader, LoadResult};

/// Agent tuning plus arena layout for one match.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub config: AgentConfig,
    pub layout: ArenaLayout,
}

impl ContentBundle {
    /// Default config file relative to the content root.
    pub const CONFIG_FILE: &'static str = "config/agent.toml";

    /// Load the config file (falling back to defaults when it does not exist)
    /// and the given arena layout.
    pub fn load(config_path: Option<&Path>, arena_path: &Path) -> LoadResult<Self> {
        let config = match config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => {
                tracing::info!("No agent config given, using defaults");
                AgentConfig::default()
            }
        };
        let layout = ArenaLoader::load(arena_path)?;
        Ok(Self { config, layout })
    }

    /// Resolve `config/agent.toml` under `root` if it exists.
    pub fn default_config_path(root: &Path) -> Option<PathBuf> {
        let path = root.join(Self::CONFIG_FILE);
        path.exists().then_some(path)
    }
}
