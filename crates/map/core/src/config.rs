/// Map subsystem constants and tunable parameters.
///
/// Compiled-in defaults apply when no config file overrides them; the content
/// crate's loader deserializes this struct directly from TOML.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MapConfig {
    /// Field-of-view radius used when refreshing visibility after a move.
    pub fov_radius: i32,

    /// Drunkard's-walk coverage for a tier-0 map.
    pub base_coverage: f64,

    /// Extra coverage per map tier; deeper maps carve more open space.
    pub coverage_per_tier: f64,
}

impl MapConfig {
    /// Coverage requests below this fraction are clamped up; a walk that
    /// carves less than a tenth of the map is not a playable level.
    pub const MIN_COVERAGE: f64 = 0.1;
    /// Coverage requests above the full map area are clamped down.
    pub const MAX_COVERAGE: f64 = 1.0;

    pub const DEFAULT_FOV_RADIUS: i32 = 8;
    pub const DEFAULT_BASE_COVERAGE: f64 = 0.3;
    pub const DEFAULT_COVERAGE_PER_TIER: f64 = 0.1;

    pub fn new() -> Self {
        Self {
            fov_radius: Self::DEFAULT_FOV_RADIUS,
            base_coverage: Self::DEFAULT_BASE_COVERAGE,
            coverage_per_tier: Self::DEFAULT_COVERAGE_PER_TIER,
        }
    }

    /// Coverage for a map of the given tier, already clamped to the range
    /// the walk generator accepts.
    pub fn coverage_for_tier(&self, tier: u32) -> f64 {
        (self.base_coverage + self.coverage_per_tier * f64::from(tier))
            .clamp(Self::MIN_COVERAGE, Self::MAX_COVERAGE)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new()
    }
}
