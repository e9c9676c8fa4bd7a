use crate::geom::Rect;
use crate::map::GridMap;

use super::GenError;

/// Single open rectangle: the whole interior is floor behind a one-cell wall
/// border. Deterministic for a given width and height.
pub fn arena(
    id: &str,
    name: &str,
    width: i32,
    height: i32,
    dark: bool,
) -> Result<GridMap, GenError> {
    let mut map = GridMap::new(id, name, width, height, dark)?;
    map.carve_rect(Rect::from_xywh(0, 0, width, height));
    map.update_cost();
    Ok(map)
}
