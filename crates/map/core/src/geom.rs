use std::fmt;
use std::ops::{Add, AddAssign};

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another point.
    pub fn taxicab_distance(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle with inclusive corner coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Builds a rect from an origin corner plus extent. The far corner is
    /// inclusive, so a 10-wide rect at x=0 ends at x2=9.
    pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width - 1,
            y2: y + height - 1,
        }
    }

    pub const fn width(&self) -> i32 {
        self.x2 - self.x1 + 1
    }

    pub const fn height(&self) -> i32 {
        self.y2 - self.y1 + 1
    }

    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x1 && pt.x <= self.x2 && pt.y >= self.y1 && pt.y <= self.y2
    }
}

/// Cardinal grid direction. North points toward decreasing y (screen rows).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub const fn delta(self) -> Point {
        match self {
            CardinalDirection::North => Point::new(0, -1),
            CardinalDirection::South => Point::new(0, 1),
            CardinalDirection::East => Point::new(1, 0),
            CardinalDirection::West => Point::new(-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_xywh_has_inclusive_far_corner() {
        let r = Rect::from_xywh(0, 0, 10, 8);
        assert_eq!(r.x2, 9);
        assert_eq!(r.y2, 7);
        assert_eq!(r.width(), 10);
        assert_eq!(r.height(), 8);
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let r = Rect::new(2, 2, 5, 5);
        assert!(r.contains(Point::new(2, 2)));
        assert!(r.contains(Point::new(5, 5)));
        assert!(!r.contains(Point::new(6, 5)));
    }

    #[test]
    fn direction_deltas_are_unit_steps() {
        let mut pt = Point::new(3, 3);
        pt += CardinalDirection::North.delta();
        assert_eq!(pt, Point::new(3, 2));
        pt += CardinalDirection::East.delta();
        pt += CardinalDirection::South.delta();
        pt += CardinalDirection::West.delta();
        assert_eq!(pt, Point::new(3, 3));
    }

    #[test]
    fn direction_parses_from_snake_case() {
        use std::str::FromStr;
        assert_eq!(
            CardinalDirection::from_str("north").unwrap(),
            CardinalDirection::North
        );
        assert!(CardinalDirection::from_str("upwards").is_err());
    }
}
