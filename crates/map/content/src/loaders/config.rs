//! Map configuration loader.

use std::path::Path;

use map_core::MapConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for map configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys fall back to the
    /// compiled-in defaults.
    pub fn load(path: &Path) -> LoadResult<MapConfig> {
        let content = read_file(path)?;
        let config: MapConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
