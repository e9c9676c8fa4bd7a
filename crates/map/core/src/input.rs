//! Abstract input signals delivered by the windowing collaborator.
//!
//! The toolkit owns key decoding; the core only sees one of these per user
//! action and never inspects raw events.

use crate::geom::CardinalDirection;

/// One decoded user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    Wait,
}

impl Signal {
    /// Grid direction for the four movement signals, `None` otherwise.
    /// Screen convention: up means decreasing y.
    pub const fn direction(self) -> Option<CardinalDirection> {
        match self {
            Signal::Up => Some(CardinalDirection::North),
            Signal::Down => Some(CardinalDirection::South),
            Signal::Left => Some(CardinalDirection::West),
            Signal::Right => Some(CardinalDirection::East),
            Signal::Confirm | Signal::Cancel | Signal::Wait => None,
        }
    }
}
