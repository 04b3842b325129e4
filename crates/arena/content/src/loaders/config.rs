//! Agent configuration loader.

use std::path::Path;

use arena_core::AgentConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for agent tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load an [`AgentConfig`] from a TOML file.
    ///
    /// Sections and fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<AgentConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<AgentConfig> {
        let config: AgentConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}
