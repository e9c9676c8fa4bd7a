//! Deterministic dungeon-map logic shared across clients.
//!
//! `map-core` owns the grid-map data model and every algorithm that touches
//! it: tile attributes, carving, the traversal-cost layer, the multi-source
//! distance field, field-of-view, and the map generators. Everything is
//! synchronous and single-threaded; randomness enters only through an
//! explicit [`rng::Pcg32`], so a seed reproduces a map exactly.
//!
//! The surrounding game talks to this crate through narrow seams: the store
//! traits in [`store`] for map and position lookup, and
//! [`map::GridMap::appearance`] for per-cell rendering.
pub mod config;
pub mod error;
pub mod geom;
pub mod input;
pub mod map;
pub mod mapgen;
pub mod rng;
pub mod store;
pub mod tiles;

pub use config::MapConfig;
pub use error::{CoreError, ErrorSeverity};
pub use geom::{CardinalDirection, Point, Rect};
pub use input::Signal;
pub use map::{CellFlags, GridMap, MapError};
pub use mapgen::{GenError, GeneratorKind, arena, drunk_walk, generate};
pub use rng::{Pcg32, stream_seed};
pub use store::{EntityId, MapStore, MemoryStore, PositionStore, StepError, StoreError, step};
pub use tiles::{Glyph, Rgb, SHROUD, Tile, TileKind};
