//! Builds game maps from catalog data.
//!
//! The builder is the only place where templates meet generators: it rolls
//! concrete dimensions from a template's ranges, derives coverage from the
//! tier curve, and dispatches the generator enum. One bad template aborts
//! that map alone; maps already built are unaffected.

use std::path::{Path, PathBuf};

use map_core::{
    EntityId, GenError, GridMap, MapConfig, MapError, MapStore, Pcg32, Point, PositionStore,
    StoreError, generate,
};
use tracing::{debug, info};

use crate::catalog::GenerationCatalog;
use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult};

/// Content factory that loads map data from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── mapdata.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load map configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<MapConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the generation catalog from `mapdata.ron`.
    pub fn load_catalog(&self) -> LoadResult<GenerationCatalog> {
        let path = self.data_dir.join("mapdata.ron");
        CatalogLoader::load(&path)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Errors raised while building maps from catalog data.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("map id '{0}' is not in the generation catalog")]
    UnknownMap(String),

    #[error(transparent)]
    Gen(#[from] GenError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Turns catalog templates into ready [`GridMap`]s.
#[derive(Clone, Copy, Debug)]
pub struct MapBuilder<'a> {
    catalog: &'a GenerationCatalog,
    config: &'a MapConfig,
}

impl<'a> MapBuilder<'a> {
    pub fn new(catalog: &'a GenerationCatalog, config: &'a MapConfig) -> Self {
        Self { catalog, config }
    }

    /// Builds one catalogued map.
    pub fn build(&self, id: &str, rng: &mut Pcg32) -> Result<GridMap, BuildError> {
        let template = self
            .catalog
            .get(id)
            .ok_or_else(|| BuildError::UnknownMap(id.to_owned()))?;

        let width = rng.range(template.width.0, template.width.1);
        let height = rng.range(template.height.0, template.height.1);
        let coverage = template.coverage(self.config);
        debug!(id, width, height, coverage, "building map");

        let map = generate(
            template.generator,
            id,
            &template.name,
            width,
            height,
            coverage,
            template.dark,
            rng,
        )?;
        Ok(map)
    }

    /// Builds every catalogued map in id order.
    pub fn build_all(&self, rng: &mut Pcg32) -> Result<Vec<GridMap>, BuildError> {
        let maps = self
            .catalog
            .ids()
            .map(|id| self.build(id, rng))
            .collect::<Result<Vec<_>, _>>()?;
        info!(count = maps.len(), "world maps built");
        Ok(maps)
    }
}

/// Places an entity on a map, at `spot` or on a uniformly chosen floor cell.
/// An explicit spot must at least lie on the map.
pub fn place_entity<S>(
    store: &mut S,
    entity: EntityId,
    map_id: &str,
    spot: Option<Point>,
    rng: &mut Pcg32,
) -> Result<Point, BuildError>
where
    S: MapStore + PositionStore,
{
    let map = store.map(map_id)?;
    let position = match spot {
        Some(pt) => {
            map.try_tile(pt.x, pt.y)?;
            pt
        }
        None => map.random_floor(rng)?,
    };
    store.set_position(entity, map_id, position)?;
    debug!(%entity, map_id, %position, "placed entity");
    Ok(position)
}
