//! Generation catalog loader.
//!
//! Loads the map-template catalog from a RON file. An unknown generator kind
//! or malformed template is a load-time error; the catalog either loads whole
//! or not at all, so a bad entry cannot corrupt maps built from good ones.

use std::path::Path;

use crate::catalog::GenerationCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for the generation catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<GenerationCatalog> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog {}: {}", path.display(), e))
    }

    /// Parse a catalog from RON text.
    pub fn from_str(content: &str) -> LoadResult<GenerationCatalog> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))
    }
}
