use arrayvec::ArrayVec;

use crate::config::MapConfig;
use crate::geom::Point;
use crate::map::GridMap;
use crate::rng::Pcg32;

use super::GenError;

/// Random-walk cave carver.
///
/// Starts at the map center and wanders, carving floor until `coverage` of
/// the map area is open. Edge cells are never carved, which guarantees the
/// outer wall ring; when the walker boxes itself in it backtracks along its
/// own path. Coverage is clamped to [0.1, 1.0] and the carve target is
/// capped at the interior capacity, so the walk always terminates.
pub fn drunk_walk(
    id: &str,
    name: &str,
    width: i32,
    height: i32,
    coverage: f64,
    dark: bool,
    rng: &mut Pcg32,
) -> Result<GridMap, GenError> {
    let mut map = GridMap::new(id, name, width, height, dark)?;

    let coverage = coverage.clamp(MapConfig::MIN_COVERAGE, MapConfig::MAX_COVERAGE);
    let desired = ((width as f64) * (height as f64) * coverage).round() as usize;
    let capacity = (width - 2).max(0) as usize * (height - 2).max(0) as usize;
    if capacity == 0 {
        return Err(GenError::CoverageExceedsInterior { desired, capacity });
    }
    let desired = desired.min(capacity).max(1);

    let mut pt = Point::new(width / 2, height / 2);
    let mut stack = vec![pt];
    map.carve(pt.x, pt.y);
    let mut floors = 1;

    while floors < desired {
        let candidates: ArrayVec<Point, 4> = map
            .neighbors(pt.x, pt.y)
            .into_iter()
            .filter(|n| !map.walkable(n.x, n.y) && !map.on_edge(n.x, n.y))
            .collect();

        if let Some(&next) = rng.choose(&candidates) {
            map.carve(next.x, next.y);
            stack.push(next);
            pt = next;
            floors += 1;
        } else {
            match stack.pop() {
                Some(prev) => pt = prev,
                None => break, // frontier exhausted
            }
        }
    }

    map.update_cost();
    Ok(map)
}
