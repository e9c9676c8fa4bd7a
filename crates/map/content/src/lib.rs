//! Data-driven map generation content and loaders.
//!
//! This crate houses the generation catalog and provides loaders for its
//! RON/TOML data files:
//! - Map templates (generator kind, size ranges, tier, darkness)
//! - Map configuration (FOV radius, coverage curve)
//!
//! Content is consumed by the world build at startup and never appears in
//! runtime map state. All loaders use map-core types directly with serde.

pub mod catalog;
pub mod factory;
pub mod loaders;

pub use catalog::{GenerationCatalog, MapTemplate};
pub use factory::{BuildError, ContentFactory, MapBuilder, place_entity};
pub use loaders::{CatalogLoader, ConfigLoader};
