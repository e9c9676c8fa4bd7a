//! Static tile vocabulary and render glyphs.
//!
//! Every cell of a map references one [`TileKind`]; the kind's attributes
//! (walkability, transparency, lit/dark glyphs) live in a fixed const table so
//! per-cell lookup is a branch-free index with no allocation.

/// 24-bit color used by the rendering boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// Stone swatch shared by the built-in tiles.
pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const STONE: Rgb = Rgb::new(160, 160, 150);
pub const STONE_LIGHT: Rgb = Rgb::new(200, 200, 190);
pub const STONE_DARK: Rgb = Rgb::new(110, 110, 100);
pub const STONE_DARKER: Rgb = Rgb::new(70, 70, 65);

/// One renderable cell: a codepoint plus foreground/background colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Glyph {
    pub const fn new(ch: char, fg: Rgb, bg: Rgb) -> Self {
        Self { ch, fg, bg }
    }
}

/// Glyph drawn for cells the observer has never seen. Lives outside the tile
/// vocabulary: it is what the rendering boundary returns for unexplored cells,
/// never the appearance of any tile kind.
pub const SHROUD: Glyph = Glyph::new(' ', WHITE, BLACK);

/// Static attributes shared by all cells of one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub walkable: bool,
    pub transparent: bool,
    /// Appearance while currently in view.
    pub lit: Glyph,
    /// Appearance when remembered but out of view.
    pub dark: Glyph,
}

const WALL: Tile = Tile {
    walkable: false,
    transparent: false,
    lit: Glyph::new('#', STONE, BLACK),
    dark: Glyph::new('#', STONE_DARKER, BLACK),
};

const FLOOR: Tile = Tile {
    walkable: true,
    transparent: true,
    lit: Glyph::new('.', STONE_LIGHT, BLACK),
    dark: Glyph::new('.', STONE_DARK, BLACK),
};

/// Closed vocabulary of tile kinds. One byte per cell in map storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    #[default]
    Wall,
    Floor,
}

impl TileKind {
    /// Static attribute lookup. Pure and total over the closed enumeration.
    pub const fn tile(self) -> &'static Tile {
        match self {
            TileKind::Wall => &WALL,
            TileKind::Floor => &FLOOR,
        }
    }

    pub const fn walkable(self) -> bool {
        self.tile().walkable
    }

    pub const fn transparent(self) -> bool {
        self.tile().transparent
    }
}
