//! Grid map: one level's tiles plus the derived per-cell layers.
//!
//! A [`GridMap`] owns the tile array and four parallel layers (explored,
//! visible, cost, distance). Tiles are mutated only during generation; the
//! layers are refreshed through [`GridMap::update_cost`],
//! [`GridMap::update_dmap`] and [`GridMap::update_fov`], never written
//! directly by callers.

mod dmap;
mod fov;
mod render;

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::error::{CoreError, ErrorSeverity};
use crate::geom::{Point, Rect};
use crate::rng::Pcg32;
use crate::tiles::TileKind;

/// Errors raised by map construction and spatial queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapError {
    #[error("map dimensions {width}x{height} must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("coordinate ({x}, {y}) is out of map bounds")]
    OutOfBounds { x: i32, y: i32 },

    #[error("map has no walkable cell")]
    NoFloor,
}

impl CoreError for MapError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MapError::InvalidDimensions { .. } | MapError::OutOfBounds { .. } => {
                ErrorSeverity::Validation
            }
            MapError::NoFloor => ErrorSeverity::Domain,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            MapError::InvalidDimensions { .. } => "MAP_INVALID_DIMENSIONS",
            MapError::OutOfBounds { .. } => "MAP_OUT_OF_BOUNDS",
            MapError::NoFloor => "MAP_NO_FLOOR",
        }
    }
}

bitflags! {
    /// Packed per-cell visibility state.
    ///
    /// EXPLORED is monotone: once set it is never cleared for the lifetime of
    /// the map. VISIBLE is recomputed wholesale by every FOV update.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CellFlags: u8 {
        const EXPLORED = 1 << 0;
        const VISIBLE  = 1 << 1;
    }
}

/// One game level: identity, tile grid, and derived layers.
///
/// Layout is row-major; all coordinate queries are in tile space with the
/// origin at the top-left corner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    id: String,
    name: String,
    width: i32,
    height: i32,
    /// When set, the rendering boundary never shows remembered-but-unseen
    /// tiles lit history; everything outside current view renders dark.
    dark: bool,
    tiles: Vec<TileKind>,
    flags: Vec<CellFlags>,
    cost: Vec<u32>,
    dist: Vec<u32>,
}

impl GridMap {
    /// Distance-field sentinel for cells no goal can reach.
    pub const UNREACHABLE: u32 = u32::MAX;

    /// Allocates an all-wall map with every derived layer reset: nothing
    /// explored or visible, zero cost, all distances unreachable.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        width: i32,
        height: i32,
        dark: bool,
    ) -> Result<Self, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::InvalidDimensions { width, height });
        }
        let cells = (width as usize) * (height as usize);
        Ok(Self {
            id: id.into(),
            name: name.into(),
            width,
            height,
            dark,
            tiles: vec![TileKind::Wall; cells],
            flags: vec![CellFlags::empty(); cells],
            cost: vec![0; cells],
            dist: vec![Self::UNREACHABLE; cells],
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn dark(&self) -> bool {
        self.dark
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.in_bounds(x, y), "index out of bounds: ({x}, {y})");
        (y * self.width + x) as usize
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Checked tile accessor for callers that cannot guarantee bounds.
    pub fn tile(&self, x: i32, y: i32) -> Option<TileKind> {
        if self.in_bounds(x, y) {
            Some(self.tiles[self.index(x, y)])
        } else {
            None
        }
    }

    /// Tile at `(x, y)`, failing for out-of-range coordinates. There is no
    /// wraparound.
    pub fn try_tile(&self, x: i32, y: i32) -> Result<TileKind, MapError> {
        self.tile(x, y).ok_or(MapError::OutOfBounds { x, y })
    }

    /// True when the tile at `(x, y)` can be walked on. Out-of-bounds
    /// coordinates are never walkable; there is no wraparound.
    pub fn walkable(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_some_and(TileKind::walkable)
    }

    /// True when the tile at `(x, y)` does not block sight.
    pub fn transparent(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_some_and(TileKind::transparent)
    }

    pub fn explored(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.flags[self.index(x, y)].contains(CellFlags::EXPLORED)
    }

    pub fn visible(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.flags[self.index(x, y)].contains(CellFlags::VISIBLE)
    }

    /// Traversal weight at `(x, y)`; zero means impassable. Valid only after
    /// [`GridMap::update_cost`] has run for the current tiles.
    pub fn cost(&self, x: i32, y: i32) -> u32 {
        if self.in_bounds(x, y) {
            self.cost[self.index(x, y)]
        } else {
            0
        }
    }

    /// Distance to the nearest goal of the most recent
    /// [`GridMap::update_dmap`] call, or [`GridMap::UNREACHABLE`].
    pub fn dist(&self, x: i32, y: i32) -> u32 {
        if self.in_bounds(x, y) {
            self.dist[self.index(x, y)]
        } else {
            Self::UNREACHABLE
        }
    }

    /// Sets the tile at `(x, y)` to floor. Out-of-bounds calls are ignored;
    /// generators carve only inside the grid.
    pub fn carve(&mut self, x: i32, y: i32) {
        if self.in_bounds(x, y) {
            let index = self.index(x, y);
            self.tiles[index] = TileKind::Floor;
        }
    }

    /// Stamps a room: every cell of `r` becomes wall, then the interior of
    /// `r` (shrunk by one on each side) becomes floor, leaving a one-cell
    /// wall border.
    pub fn carve_rect(&mut self, r: Rect) {
        self.fill_rect(r);
        self.set_rect(
            Rect::new(r.x1 + 1, r.y1 + 1, r.x2 - 1, r.y2 - 1),
            TileKind::Floor,
        );
    }

    /// Sets every cell of `r` (inclusive) to wall.
    pub fn fill_rect(&mut self, r: Rect) {
        self.set_rect(r, TileKind::Wall);
    }

    fn set_rect(&mut self, r: Rect, kind: TileKind) {
        let x1 = r.x1.max(0);
        let y1 = r.y1.max(0);
        let x2 = r.x2.min(self.width - 1);
        let y2 = r.y2.min(self.height - 1);
        for y in y1..=y2 {
            for x in x1..=x2 {
                let index = self.index(x, y);
                self.tiles[index] = kind;
            }
        }
    }

    /// In-bounds 4-connected neighbors in east, west, south, north order.
    /// The fixed order keeps generation reproducible under a fixed seed.
    pub fn neighbors(&self, x: i32, y: i32) -> ArrayVec<Point, 4> {
        let mut out = ArrayVec::new();
        for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            if self.in_bounds(nx, ny) {
                out.push(Point::new(nx, ny));
            }
        }
        out
    }

    /// True when the cell touches the outer border of the map.
    pub fn on_edge(&self, x: i32, y: i32) -> bool {
        x == 0 || x == self.width - 1 || y == 0 || y == self.height - 1
    }

    /// Uniformly selects a walkable cell. O(width * height); called for
    /// entity placement, not per frame.
    pub fn random_floor(&self, rng: &mut Pcg32) -> Result<Point, MapError> {
        let floors: Vec<Point> = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Point::new(x, y)))
            .filter(|pt| self.walkable(pt.x, pt.y))
            .collect();

        rng.choose(&floors).copied().ok_or(MapError::NoFloor)
    }

    /// Rebuilds the cost layer from the tiles in one pass: 1 where walkable,
    /// 0 otherwise. Must run after any batch of carves and before the
    /// distance field is trusted.
    pub fn update_cost(&mut self) {
        for (cost, tile) in self.cost.iter_mut().zip(&self.tiles) {
            *cost = tile.walkable() as u32;
        }
    }

    fn flags_mut(&mut self, x: i32, y: i32) -> &mut CellFlags {
        let index = self.index(x, y);
        &mut self.flags[index]
    }
}
