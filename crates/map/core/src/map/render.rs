//! Rendering boundary: per-cell glyph selection.
//!
//! The drawing toolkit asks one question per in-camera cell and gets a
//! [`Glyph`] back; all shroud/lit/dark policy lives here, none of it in the
//! toolkit adapter.

use crate::tiles::{Glyph, SHROUD};

use super::GridMap;

impl GridMap {
    /// Glyph for the cell at `(x, y)`.
    ///
    /// Never-seen cells render covered. Cells in view render lit. Cells
    /// remembered from earlier render lit on a naturally lit map, but on a
    /// dark map everything outside current view renders unlit; memory does
    /// not carry light there.
    ///
    /// Out-of-bounds coordinates render as shroud so a camera overhanging
    /// the map edge draws cleanly.
    pub fn appearance(&self, x: i32, y: i32) -> Glyph {
        let Some(kind) = self.tile(x, y) else {
            return SHROUD;
        };
        if !self.explored(x, y) {
            return SHROUD;
        }
        let tile = kind.tile();
        if self.visible(x, y) {
            tile.lit
        } else if self.dark() {
            tile.dark
        } else {
            tile.lit
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::geom::{Point, Rect};
    use crate::tiles::{SHROUD, TileKind};

    use super::super::GridMap;

    fn explored_map(dark: bool) -> GridMap {
        let mut m = GridMap::new("test", "Test", 21, 9, dark).unwrap();
        m.carve_rect(Rect::from_xywh(0, 0, 21, 9));
        m.update_cost();
        m
    }

    #[test]
    fn unexplored_cells_render_shroud() {
        let m = explored_map(false);
        assert_eq!(m.appearance(5, 5), SHROUD);
    }

    #[test]
    fn out_of_bounds_renders_shroud() {
        let m = explored_map(false);
        assert_eq!(m.appearance(-1, 4), SHROUD);
        assert_eq!(m.appearance(40, 4), SHROUD);
    }

    #[test]
    fn visible_cells_render_lit() {
        let mut m = explored_map(true);
        m.update_fov(Point::new(4, 4), 3);
        assert_eq!(m.appearance(4, 4), TileKind::Floor.tile().lit);
        assert_eq!(m.appearance(5, 4), TileKind::Floor.tile().lit);
    }

    #[test]
    fn remembered_cells_dim_on_dark_maps() {
        let mut m = explored_map(true);
        m.update_fov(Point::new(4, 4), 3);
        m.update_fov(Point::new(16, 4), 3);
        // (4, 4) is explored but no longer in view.
        assert_eq!(m.appearance(4, 4), TileKind::Floor.tile().dark);
    }

    #[test]
    fn remembered_cells_stay_lit_on_lit_maps() {
        let mut m = explored_map(false);
        m.update_fov(Point::new(4, 4), 3);
        m.update_fov(Point::new(16, 4), 3);
        assert_eq!(m.appearance(4, 4), TileKind::Floor.tile().lit);
    }

    #[test]
    fn wall_surfaces_render_with_wall_glyphs() {
        let mut m = explored_map(true);
        m.update_fov(Point::new(1, 1), 4);
        // The border wall next to the observer is lit wall.
        assert_eq!(m.appearance(0, 1), TileKind::Wall.tile().lit);
    }
}
