use rand::Rng;

use crate::constants::core::BLOCK_SIZE;
use crate::constants::terrain::*;
use crate::world::{BlockKind, GridPos, World};

/// Plants trees on the surface
#[derive(Debug, Clone, Copy)]
pub struct TreeGenerator {
    chance: f64,
}

impl TreeGenerator {
    pub fn new(chance: f64) -> Self {
        Self { chance }
    }

    /// Roll for a tree on column `x`.
    ///
    /// Only every `TREE_SPACING` column is eligible, and only if its surface
    /// cell holds grass. Returns whether a tree was planted.
    pub fn try_plant<R: Rng + ?Sized>(&self, world: &mut World, x: i32, surface_y: i32, rng: &mut R) -> bool {
        if x.rem_euclid(TREE_SPACING) != 0 || !rng.gen_bool(self.chance) {
            return false;
        }

        let has_grass = world
            .block_at(GridPos::new(x, surface_y))
            .is_some_and(|b| b.kind == BlockKind::Grass);
        if !has_grass {
            return false;
        }

        self.plant(world, GridPos::new(x, surface_y - BLOCK_SIZE), rng);
        true
    }

    /// Grow a tree whose trunk base sits at `base`.
    ///
    /// Leaves that land on a trunk cell are rejected by the store, so the
    /// canopy only fills the cells beside the trunk.
    pub fn plant<R: Rng + ?Sized>(&self, world: &mut World, base: GridPos, rng: &mut R) -> u32 {
        let mut height = rng.gen_range(TRUNK_MIN_HEIGHT..=TRUNK_MAX_HEIGHT);
        if rng.gen_bool(TALL_TREE_CHANCE) {
            height += rng.gen_range(1..=2);
        }
        let height = height as i32;

        for i in 0..height {
            world.add_block(BlockKind::Wood, base.offset(0, -i));
        }

        for layer in 1..height - 1 {
            for dx in -1..=1 {
                if rng.gen_bool(LEAF_CHANCE) {
                    world.add_block(BlockKind::Leaves, base.offset(dx, -layer));
                }
            }
        }

        let top = base.offset(0, -(height - 1));
        for dx in -1..=1 {
            world.add_block(BlockKind::Leaves, top.offset(dx, 0));
        }
        if rng.gen_bool(CROWN_LEAF_CHANCE) {
            world.add_block(BlockKind::Leaves, top.offset(0, -1));
        }

        log::debug!("Planted tree of height {} at {:?}", height, base);
        height as u32
    }
}

impl Default for TreeGenerator {
    fn default() -> Self {
        Self::new(TREE_CHANCE)
    }
}
