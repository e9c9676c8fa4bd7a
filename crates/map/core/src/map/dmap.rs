//! Multi-source distance field over the cost layer.
//!
//! The classic roguelike "Dijkstra map": every cell holds the cost-weighted
//! distance to the nearest goal, over the 8-connected grid. The field is
//! recomputed from scratch on demand and is meaningful only relative to the
//! goal set of the most recent call.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::geom::Point;

use super::GridMap;

/// Cardinal and diagonal step offsets.
const NEIGHBORS_8: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl GridMap {
    /// Recomputes the distance field toward `goals`.
    ///
    /// Resets every cell to [`GridMap::UNREACHABLE`], seeds each in-bounds
    /// goal at zero, then relaxes outward using the cost layer as the step
    /// weight into each cell. Zero-cost cells are impassable and are never
    /// relaxed across; cells no goal can reach keep the sentinel.
    ///
    /// Requires an up-to-date cost layer ([`GridMap::update_cost`]).
    pub fn update_dmap(&mut self, goals: &[Point]) {
        self.dist.fill(Self::UNREACHABLE);

        let mut frontier = BinaryHeap::new();
        for goal in goals {
            if !self.in_bounds(goal.x, goal.y) {
                continue;
            }
            let index = self.index(goal.x, goal.y);
            if self.dist[index] != 0 {
                self.dist[index] = 0;
                frontier.push(Reverse((0u32, goal.x, goal.y)));
            }
        }

        while let Some(Reverse((reached, x, y))) = frontier.pop() {
            if reached > self.dist[self.index(x, y)] {
                // Stale queue entry; a shorter path got there first.
                continue;
            }
            for (dx, dy) in NEIGHBORS_8 {
                let (nx, ny) = (x + dx, y + dy);
                if !self.in_bounds(nx, ny) {
                    continue;
                }
                let index = self.index(nx, ny);
                let step = self.cost[index];
                if step == 0 {
                    continue;
                }
                let candidate = reached.saturating_add(step);
                if candidate < self.dist[index] {
                    self.dist[index] = candidate;
                    frontier.push(Reverse((candidate, nx, ny)));
                }
            }
        }
    }
}
