//! Traits describing the surrounding entity/component store.
//!
//! The core never owns a map beyond the reference passed into an operation;
//! the store holds one [`GridMap`] per map id and the positions of entities.
//! These traits are the whole contract: lookup a map, read a position, write
//! a position. Reads and writes are immediately consistent.

mod memory;

pub use memory::MemoryStore;

use std::fmt;

use crate::error::{CoreError, ErrorSeverity};
use crate::geom::{CardinalDirection, Point};
use crate::map::GridMap;

/// Unique identifier for any entity tracked by the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the controllable player character.
    pub const PLAYER: Self = Self(0);
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors raised by store lookups. Propagated unchanged by the core.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("map '{0}' not found")]
    MapNotFound(String),

    #[error("entity {0} not found")]
    EntityNotFound(EntityId),
}

impl CoreError for StoreError {
    fn severity(&self) -> ErrorSeverity {
        // A dangling id means the world build is inconsistent.
        ErrorSeverity::Fatal
    }

    fn code(&self) -> &'static str {
        match self {
            StoreError::MapNotFound(_) => "STORE_MAP_NOT_FOUND",
            StoreError::EntityNotFound(_) => "STORE_ENTITY_NOT_FOUND",
        }
    }
}

/// Map lookup by id.
pub trait MapStore {
    fn map(&self, id: &str) -> Result<&GridMap, StoreError>;
    fn map_mut(&mut self, id: &str) -> Result<&mut GridMap, StoreError>;
}

/// Entity placement: which map an entity stands on, and where.
pub trait PositionStore {
    fn map_id(&self, entity: EntityId) -> Result<&str, StoreError>;
    fn position(&self, entity: EntityId) -> Result<Point, StoreError>;
    fn set_position(
        &mut self,
        entity: EntityId,
        map_id: &str,
        position: Point,
    ) -> Result<(), StoreError>;
}

/// Errors raised by [`step`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("destination {0} is out of map bounds")]
    OutOfBounds(Point),

    #[error("destination {0} is blocked")]
    Blocked(Point),
}

impl CoreError for StepError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StepError::Store(e) => e.severity(),
            // A refused step is ordinary play, not a fault.
            StepError::OutOfBounds(_) | StepError::Blocked(_) => ErrorSeverity::Validation,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            StepError::Store(e) => e.code(),
            StepError::OutOfBounds(_) => "STEP_OUT_OF_BOUNDS",
            StepError::Blocked(_) => "STEP_BLOCKED",
        }
    }
}

/// Moves an entity one cell in `direction` on its current map.
///
/// Validates bounds and walkability before writing; on failure the stored
/// position is untouched. Returns the new position so the caller can refresh
/// visibility around it.
pub fn step<S>(
    store: &mut S,
    entity: EntityId,
    direction: CardinalDirection,
) -> Result<Point, StepError>
where
    S: MapStore + PositionStore,
{
    let origin = store.position(entity)?;
    let destination = origin + direction.delta();
    let map_id = store.map_id(entity)?.to_owned();

    let map = store.map(&map_id)?;
    if !map.in_bounds(destination.x, destination.y) {
        return Err(StepError::OutOfBounds(destination));
    }
    if !map.walkable(destination.x, destination.y) {
        return Err(StepError::Blocked(destination));
    }

    store.set_position(entity, &map_id, destination)?;
    Ok(destination)
}
