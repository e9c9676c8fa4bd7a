//! Generation catalog: the data-driven vocabulary of buildable maps.
//!
//! Loaded once at startup from a RON file and passed by reference into the
//! builder; nothing in the subsystem holds catalog state globally.

use std::collections::BTreeMap;

use map_core::{GeneratorKind, MapConfig};
use serde::{Deserialize, Serialize};

/// One buildable map: which generator, how large, how deep.
///
/// Width and height are inclusive `(low, high)` ranges rolled at build time
/// so repeated playthroughs see differently sized levels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapTemplate {
    pub name: String,
    pub generator: GeneratorKind,
    pub width: (i32, i32),
    pub height: (i32, i32),
    /// Depth tier; feeds the coverage curve for carving generators.
    pub tier: u32,
    /// Dark maps render unlit outside current visibility.
    #[serde(default)]
    pub dark: bool,
}

impl MapTemplate {
    /// Coverage this template asks of a carving generator.
    pub fn coverage(&self, config: &MapConfig) -> f64 {
        config.coverage_for_tier(self.tier)
    }
}

/// Every map template known to the game, keyed by map id.
///
/// Iteration order is the id order, which keeps a seeded world build
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationCatalog {
    pub maps: BTreeMap<String, MapTemplate>,
}

impl GenerationCatalog {
    pub fn get(&self, id: &str) -> Option<&MapTemplate> {
        self.maps.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MapTemplate)> {
        self.maps.iter().map(|(id, template)| (id.as_str(), template))
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}
