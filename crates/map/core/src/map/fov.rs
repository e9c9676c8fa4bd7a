//! Field of view.
//!
//! Symmetric shadow casting over the transparency attribute, limited to a
//! diamond (taxicab) radius. Opaque cells on the rim of a lit area are
//! themselves visible; cells behind them are not. Visibility is symmetric for
//! floor cells: if a stands in b's view, b stands in a's.
//!
//! Every update recomputes `visible` wholesale and then unions it into the
//! monotone `explored` mask.

use crate::geom::Point;

use super::{CellFlags, GridMap};

/// Slope through tile corners, kept exact as a rational. Denominator is
/// always positive so comparisons can cross-multiply.
#[derive(Clone, Copy, Debug)]
struct Slope {
    num: i32,
    den: i32,
}

impl Slope {
    const fn new(num: i32, den: i32) -> Self {
        debug_assert!(den > 0);
        Self { num, den }
    }

    /// Slope through the near corner of `col` at `depth`.
    const fn through(depth: i32, col: i32) -> Self {
        Self::new(2 * col - 1, 2 * depth)
    }
}

/// One swept row of a quadrant scan.
#[derive(Clone, Copy, Debug)]
struct Row {
    depth: i32,
    start: Slope,
    end: Slope,
}

impl Row {
    /// First column whose center lies on or after the start slope
    /// (ties round toward the wider view).
    fn min_col(&self) -> i32 {
        let Slope { num, den } = self.start;
        floor_div(2 * self.depth * num + den, 2 * den)
    }

    /// Last column whose center lies on or before the end slope.
    fn max_col(&self) -> i32 {
        let Slope { num, den } = self.end;
        ceil_div(2 * self.depth * num - den, 2 * den)
    }

    /// A floor cell is revealed only when its center is strictly inside the
    /// sector; this is what makes the algorithm symmetric.
    fn is_symmetric(&self, col: i32) -> bool {
        col * self.start.den >= self.depth * self.start.num
            && col * self.end.den <= self.depth * self.end.num
    }
}

fn floor_div(a: i32, b: i32) -> i32 {
    a.div_euclid(b)
}

fn ceil_div(a: i32, b: i32) -> i32 {
    -(-a).div_euclid(b)
}

/// Maps quadrant-local (depth, col) to absolute map coordinates.
fn transform(quadrant: usize, origin: Point, depth: i32, col: i32) -> (i32, i32) {
    match quadrant {
        0 => (origin.x + col, origin.y - depth), // north
        1 => (origin.x + col, origin.y + depth), // south
        2 => (origin.x + depth, origin.y + col), // east
        _ => (origin.x - depth, origin.y + col), // west
    }
}

impl GridMap {
    /// Recomputes the visible set from `observer` out to `radius`, then
    /// unions it into the explored mask. Previously explored cells are never
    /// forgotten; previously visible cells are, unless still in view.
    pub fn update_fov(&mut self, observer: Point, radius: i32) {
        for flags in &mut self.flags {
            flags.remove(CellFlags::VISIBLE);
        }

        if self.in_bounds(observer.x, observer.y) && radius >= 0 {
            self.flags_mut(observer.x, observer.y)
                .insert(CellFlags::VISIBLE);
            for quadrant in 0..4 {
                self.scan_quadrant(quadrant, observer, radius);
            }
        }

        for flags in &mut self.flags {
            if flags.contains(CellFlags::VISIBLE) {
                flags.insert(CellFlags::EXPLORED);
            }
        }
    }

    fn scan_quadrant(&mut self, quadrant: usize, origin: Point, radius: i32) {
        let mut rows = vec![Row {
            depth: 1,
            start: Slope::new(-1, 1),
            end: Slope::new(1, 1),
        }];

        while let Some(mut row) = rows.pop() {
            if row.depth > radius {
                continue;
            }
            // None until the first cell of the row has been examined.
            let mut prev_transparent: Option<bool> = None;
            for col in row.min_col()..=row.max_col() {
                let (x, y) = transform(quadrant, origin, row.depth, col);
                // Out-of-bounds space blocks sight like a wall.
                let transparent = self.transparent(x, y);

                if !transparent || row.is_symmetric(col) {
                    self.reveal(origin, x, y, radius);
                }
                if prev_transparent == Some(false) && transparent {
                    row.start = Slope::through(row.depth, col);
                }
                if prev_transparent == Some(true) && !transparent {
                    rows.push(Row {
                        depth: row.depth + 1,
                        start: row.start,
                        end: Slope::through(row.depth, col),
                    });
                }
                prev_transparent = Some(transparent);
            }
            if prev_transparent == Some(true) {
                rows.push(Row {
                    depth: row.depth + 1,
                    start: row.start,
                    end: row.end,
                });
            }
        }
    }

    fn reveal(&mut self, origin: Point, x: i32, y: i32, radius: i32) {
        if self.in_bounds(x, y) && Point::new(x, y).taxicab_distance(origin) <= radius {
            self.flags_mut(x, y).insert(CellFlags::VISIBLE);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::geom::{Point, Rect};

    use super::super::GridMap;

    fn open_map(width: i32, height: i32) -> GridMap {
        let mut m = GridMap::new("test", "Test", width, height, false).unwrap();
        m.carve_rect(Rect::from_xywh(0, 0, width, height));
        m.update_cost();
        m
    }

    #[test]
    fn observer_cell_is_visible() {
        let mut m = open_map(9, 9);
        m.update_fov(Point::new(4, 4), 8);
        assert!(m.visible(4, 4));
        assert!(m.explored(4, 4));
    }

    #[test]
    fn visible_implies_explored() {
        let mut m = open_map(15, 15);
        m.update_fov(Point::new(7, 7), 6);
        for y in 0..15 {
            for x in 0..15 {
                if m.visible(x, y) {
                    assert!(m.explored(x, y), "visible but unexplored at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn radius_bounds_visibility_as_diamond() {
        let mut m = open_map(21, 21);
        let center = Point::new(10, 10);
        m.update_fov(center, 4);
        assert!(m.visible(14, 10));
        assert!(m.visible(10, 6));
        assert!(m.visible(12, 12));
        // Just outside the diamond.
        assert!(!m.visible(15, 10));
        assert!(!m.visible(13, 12));
    }

    #[test]
    fn walls_block_sight_but_are_themselves_seen() {
        let mut m = open_map(13, 7);
        // Solid pillar wall between observer and the far side.
        m.fill_rect(Rect::new(6, 1, 6, 5));
        m.update_cost();
        m.update_fov(Point::new(3, 3), 8);

        assert!(m.visible(6, 3), "wall surface should be lit");
        assert!(!m.visible(7, 3), "cell behind wall should be shadowed");
        assert!(!m.visible(9, 3));
    }

    #[test]
    fn fov_is_symmetric_between_floor_cells() {
        let mut m = open_map(13, 13);
        m.fill_rect(Rect::new(6, 3, 6, 7));
        m.fill_rect(Rect::new(3, 6, 7, 6));
        m.update_cost();

        let cells: Vec<Point> = (1..12)
            .flat_map(|y| (1..12).map(move |x| Point::new(x, y)))
            .filter(|p| m.walkable(p.x, p.y))
            .collect();

        for &a in &cells {
            m.update_fov(a, 24);
            let seen: Vec<Point> = cells
                .iter()
                .copied()
                .filter(|b| m.visible(b.x, b.y))
                .collect();
            for b in seen {
                m.update_fov(b, 24);
                assert!(m.visible(a.x, a.y), "asymmetry: {b} sees {a} only one way");
            }
        }
    }

    #[test]
    fn explored_accumulates_across_updates() {
        let mut m = open_map(25, 7);
        m.update_fov(Point::new(3, 3), 4);
        assert!(m.visible(5, 3));
        assert!(!m.explored(20, 3));

        m.update_fov(Point::new(20, 3), 4);
        // Old cells drop out of view but stay explored.
        assert!(!m.visible(5, 3));
        assert!(m.explored(5, 3));
        assert!(m.visible(20, 3));
        assert!(m.explored(20, 3));
    }

    #[test]
    fn visible_set_is_replaced_not_merged() {
        let mut m = open_map(25, 7);
        m.update_fov(Point::new(3, 3), 3);
        m.update_fov(Point::new(21, 3), 3);
        for y in 0..7 {
            for x in 0..25 {
                if m.visible(x, y) {
                    assert!(
                        Point::new(x, y).taxicab_distance(Point::new(21, 3)) <= 3,
                        "stale visibility at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn sealed_room_stays_dark() {
        let mut m = open_map(15, 9);
        // Box off a room on the right; observer outside cannot see in.
        m.fill_rect(Rect::new(9, 2, 13, 2));
        m.fill_rect(Rect::new(9, 6, 13, 6));
        m.fill_rect(Rect::new(9, 2, 9, 6));
        m.update_cost();
        m.update_fov(Point::new(3, 4), 20);
        assert!(!m.visible(11, 4));
        assert!(!m.explored(11, 4));
    }

    #[test]
    fn out_of_bounds_observer_lights_nothing() {
        let mut m = open_map(9, 9);
        m.update_fov(Point::new(-4, 2), 8);
        for y in 0..9 {
            for x in 0..9 {
                assert!(!m.visible(x, y));
            }
        }
    }

    #[test]
    fn zero_radius_sees_only_observer() {
        let mut m = open_map(9, 9);
        m.update_fov(Point::new(4, 4), 0);
        assert!(m.visible(4, 4));
        assert!(!m.visible(5, 4));
        assert!(!m.visible(4, 3));
    }
}
