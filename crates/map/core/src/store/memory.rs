//! In-memory store backing tests and small tools.
//!
//! Production games hang these traits off their own ECS; this implementation
//! exists so the subsystem is usable and testable on its own.

use std::collections::BTreeMap;

use crate::geom::Point;
use crate::map::GridMap;

use super::{EntityId, MapStore, PositionStore, StoreError};

/// Owns maps by id and entity placements by entity id.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    maps: BTreeMap<String, GridMap>,
    placements: BTreeMap<EntityId, (String, Point)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a map under its own id, replacing any previous holder.
    pub fn insert_map(&mut self, map: GridMap) {
        self.maps.insert(map.id().to_owned(), map);
    }

    pub fn map_ids(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

impl MapStore for MemoryStore {
    fn map(&self, id: &str) -> Result<&GridMap, StoreError> {
        self.maps
            .get(id)
            .ok_or_else(|| StoreError::MapNotFound(id.to_owned()))
    }

    fn map_mut(&mut self, id: &str) -> Result<&mut GridMap, StoreError> {
        self.maps
            .get_mut(id)
            .ok_or_else(|| StoreError::MapNotFound(id.to_owned()))
    }
}

impl PositionStore for MemoryStore {
    fn map_id(&self, entity: EntityId) -> Result<&str, StoreError> {
        self.placements
            .get(&entity)
            .map(|(map_id, _)| map_id.as_str())
            .ok_or(StoreError::EntityNotFound(entity))
    }

    fn position(&self, entity: EntityId) -> Result<Point, StoreError> {
        self.placements
            .get(&entity)
            .map(|&(_, position)| position)
            .ok_or(StoreError::EntityNotFound(entity))
    }

    fn set_position(
        &mut self,
        entity: EntityId,
        map_id: &str,
        position: Point,
    ) -> Result<(), StoreError> {
        self.placements
            .insert(entity, (map_id.to_owned(), position));
        Ok(())
    }
}
