use glam::Vec2;

use super::PlacementError;
use crate::constants::core::BLOCK_SIZE_F32;
use crate::inventory::Hotbar;
use crate::physics::Rect;
use crate::world::{BlockId, GridPos, World};

/// Place the selected hotbar item into the grid cell under `cursor`.
///
/// A cell needs an occupied orthogonal neighbour unless it sits at or below
/// `ground_y`. On success one unit is taken from the selected slot.
pub fn try_place(
    cursor: Vec2,
    player_rect: &Rect,
    world: &mut World,
    hotbar: &mut Hotbar,
    ground_y: i32,
) -> Result<BlockId, PlacementError> {
    let item = hotbar.selected_stack().ok_or(PlacementError::EmptySlot)?.item;
    let cell = GridPos::from_world(cursor);

    if world.is_occupied(cell) {
        return Err(PlacementError::Occupied);
    }

    let cell_rect = Rect::new(cell.x as f32, cell.y as f32, BLOCK_SIZE_F32, BLOCK_SIZE_F32);
    if cell_rect.intersects(player_rect) {
        return Err(PlacementError::OverlapsPlayer);
    }

    let supported = cell.y >= ground_y || cell.neighbors().iter().any(|n| world.is_occupied(*n));
    if !supported {
        return Err(PlacementError::Unsupported);
    }

    let id = world
        .add_block(item.block_kind(), cell)
        .ok_or(PlacementError::Occupied)?;
    hotbar.take_selected();

    log::debug!("Placed {} at {:?}", item.name(), cell);
    Ok(id)
}
