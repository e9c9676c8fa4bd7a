//! Map generators.
//!
//! Each generator is a pure function from parameters (plus an explicit RNG)
//! to a fully carved [`GridMap`] with its cost layer built. The set of
//! generators is a closed enumeration; dispatch is an exhaustive match, so a
//! new kind cannot be added without the compiler pointing at this module.

mod arena;
mod drunk;

pub use arena::arena;
pub use drunk::drunk_walk;

use crate::error::{CoreError, ErrorSeverity};
use crate::map::{GridMap, MapError};
use crate::rng::Pcg32;

/// Errors raised while generating a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenError {
    #[error(transparent)]
    Map(#[from] MapError),

    /// The requested floor count cannot fit in the carvable interior (the
    /// grid minus its guaranteed one-cell wall border).
    #[error("coverage wants {desired} floor cells but the interior holds {capacity}")]
    CoverageExceedsInterior { desired: usize, capacity: usize },
}

impl CoreError for GenError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            GenError::Map(e) => e.severity(),
            GenError::CoverageExceedsInterior { .. } => ErrorSeverity::Domain,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            GenError::Map(e) => e.code(),
            GenError::CoverageExceedsInterior { .. } => "GEN_COVERAGE_EXCEEDS_INTERIOR",
        }
    }
}

/// Closed vocabulary of generator kinds.
///
/// String forms (`arena`, `drunk_walk`) are what content data files use.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum GeneratorKind {
    Arena,
    DrunkWalk,
}

/// Builds a map with the given generator.
///
/// `coverage` is only consulted by kinds that carve incrementally; the arena
/// ignores it.
#[allow(clippy::too_many_arguments)]
pub fn generate(
    kind: GeneratorKind,
    id: &str,
    name: &str,
    width: i32,
    height: i32,
    coverage: f64,
    dark: bool,
    rng: &mut Pcg32,
) -> Result<GridMap, GenError> {
    match kind {
        GeneratorKind::Arena => arena(id, name, width, height, dark),
        GeneratorKind::DrunkWalk => drunk_walk(id, name, width, height, coverage, dark, rng),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn kind_parses_from_data_strings() {
        assert_eq!(
            GeneratorKind::from_str("arena").unwrap(),
            GeneratorKind::Arena
        );
        assert_eq!(
            GeneratorKind::from_str("drunk_walk").unwrap(),
            GeneratorKind::DrunkWalk
        );
        assert!(GeneratorKind::from_str("catacombs").is_err());
    }

    #[test]
    fn errors_classify_for_recovery() {
        let err = GenError::CoverageExceedsInterior {
            desired: 9,
            capacity: 0,
        };
        assert_eq!(err.severity(), ErrorSeverity::Domain);
        assert_eq!(err.code(), "GEN_COVERAGE_EXCEEDS_INTERIOR");

        let err = GenError::from(MapError::NoFloor);
        assert_eq!(err.severity(), ErrorSeverity::Domain);
        assert_eq!(err.code(), "MAP_NO_FLOOR");
    }

    #[test]
    fn generate_dispatches_by_kind() {
        let mut rng = Pcg32::new(3);
        let a = generate(GeneratorKind::Arena, "a", "A", 10, 8, 0.5, false, &mut rng).unwrap();
        assert!(a.walkable(5, 5));

        let d = generate(
            GeneratorKind::DrunkWalk,
            "d",
            "D",
            10,
            8,
            0.2,
            false,
            &mut rng,
        )
        .unwrap();
        assert!(d.walkable(5, 4));
    }
}
