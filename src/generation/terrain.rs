use rand::Rng;

use super::GeneratorConfig;
use crate::constants::core::{BLOCK_SIZE, SCREEN_HEIGHT};
use crate::constants::terrain::*;
use crate::world::{BlockKind, GridPos, World};

/// Place one full column at `x`: bedrock floor, grass, two dirt rows, strata
pub fn generate_column<R: Rng + ?Sized>(world: &mut World, x: i32, config: &GeneratorConfig, rng: &mut R) {
    world.add_block(BlockKind::Bedrock, GridPos::new(x, config.bedrock_y));
    world.add_block(BlockKind::Grass, GridPos::new(x, config.surface_y));

    for row in 1..=DIRT_ROWS {
        world.add_block(BlockKind::Dirt, GridPos::new(x, config.surface_y + row * BLOCK_SIZE));
    }

    let strata_start = config.surface_y + (DIRT_ROWS + 1) * BLOCK_SIZE;
    for y in (strata_start..config.bedrock_y).step_by(BLOCK_SIZE as usize) {
        let kind = pick_strata_block(y, config.ore_chance, rng);
        world.add_block(kind, GridPos::new(x, y));
    }
}

/// Stone, or an ore with probability `ore_chance`.
///
/// Depth is measured from the bottom of the screen. The diamond roll only
/// happens below `DIAMOND_MIN_DEPTH` and the iron roll only below
/// `IRON_MIN_DEPTH`; anything that fails both gates is coal.
pub fn pick_strata_block<R: Rng + ?Sized>(y: i32, ore_chance: f64, rng: &mut R) -> BlockKind {
    if !rng.gen_bool(ore_chance) {
        return BlockKind::Stone;
    }

    let depth = y - SCREEN_HEIGHT;
    if depth > DIAMOND_MIN_DEPTH && rng.gen_bool(DIAMOND_CHANCE) {
        BlockKind::Diamond
    } else if depth > IRON_MIN_DEPTH && rng.gen_bool(IRON_CHANCE) {
        BlockKind::IronOre
    } else {
        BlockKind::Coal
    }
}
