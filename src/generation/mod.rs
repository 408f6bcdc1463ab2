//! Procedural terrain and tree generation
//!
//! A single pass over a bounded horizontal strip. Column shape is fixed
//! (grass, two dirt rows, strata, bedrock floor); ore placement and trees are
//! randomized.

pub mod terrain;
pub mod trees;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::constants::terrain::*;
use crate::world::World;

pub use terrain::{generate_column, pick_strata_block};
pub use trees::TreeGenerator;

/// Generation parameters; defaults reproduce the standard strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible worlds; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// First generated column (inclusive)
    pub min_x: i32,
    /// Last generated column (exclusive)
    pub max_x: i32,
    /// Grass row
    pub surface_y: i32,
    /// Floor row
    pub bedrock_y: i32,
    pub ore_chance: f64,
    pub tree_chance: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_x: WORLD_MIN_X,
            max_x: WORLD_MAX_X,
            surface_y: SURFACE_Y,
            bedrock_y: BEDROCK_Y,
            ore_chance: ORE_CHANCE,
            tree_chance: TREE_CHANCE,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

/// Whole-world generator
#[derive(Debug, Clone)]
pub struct WorldGenerator {
    config: GeneratorConfig,
    trees: TreeGenerator,
}

impl WorldGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let trees = TreeGenerator::new(config.tree_chance);
        Self { config, trees }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn create_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Fill `world` with terrain and trees.
    ///
    /// Cells that are already occupied are left alone, so running this over an
    /// existing world never double-places a row. Returns the number of blocks
    /// added.
    pub fn generate(&self, world: &mut World) -> usize {
        let mut rng = self.create_rng();
        let before = world.len();

        let step = crate::constants::core::BLOCK_SIZE as usize;
        for x in (self.config.min_x..self.config.max_x).step_by(step) {
            generate_column(world, x, &self.config, &mut rng);
            self.trees.try_plant(world, x, self.config.surface_y, &mut rng);
        }

        let added = world.len() - before;
        log::info!(
            "Generated world strip [{}, {}): {} blocks in {} chunks",
            self.config.min_x,
            self.config.max_x,
            added,
            world.chunk_count()
        );
        added
    }
}

impl Default for WorldGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{BlockKind, GridPos};

    fn small_config(seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            seed: Some(seed),
            min_x: -200,
            max_x: 1000,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_column_shape_invariant() {
        let config = small_config(42);
        let mut world = World::new();
        WorldGenerator::new(config.clone()).generate(&mut world);

        for x in (config.min_x..config.max_x).step_by(50) {
            let kind = |y| world.block_at(GridPos::new(x, y)).map(|b| b.kind);
            assert_eq!(kind(SURFACE_Y), Some(BlockKind::Grass), "column {x}");
            assert_eq!(kind(SURFACE_Y + 50), Some(BlockKind::Dirt));
            assert_eq!(kind(SURFACE_Y + 100), Some(BlockKind::Dirt));
            assert_eq!(kind(BEDROCK_Y), Some(BlockKind::Bedrock));

            for y in (STRATA_START_Y..BEDROCK_Y).step_by(50) {
                let strata = kind(y).expect("strata cell filled");
                assert!(matches!(
                    strata,
                    BlockKind::Stone | BlockKind::Coal | BlockKind::IronOre | BlockKind::Diamond
                ));
            }
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let mut a = World::new();
        let mut b = World::new();
        WorldGenerator::new(small_config(7)).generate(&mut a);
        WorldGenerator::new(small_config(7)).generate(&mut b);

        let cells = |w: &World| -> Vec<(GridPos, BlockKind)> {
            w.blocks().iter().map(|b| (b.position, b.kind)).collect()
        };
        assert_eq!(cells(&a), cells(&b));
    }

    #[test]
    fn test_regeneration_is_idempotent() {
        let generator = WorldGenerator::new(small_config(3));
        let mut world = World::new();
        generator.generate(&mut world);
        let count = world.len();

        assert_eq!(generator.generate(&mut world), 0);
        assert_eq!(world.len(), count);
    }

    #[test]
    fn test_trees_grow_above_surface() {
        let config = small_config(11);
        let mut world = World::new();
        WorldGenerator::new(config).generate(&mut world);

        for block in world.blocks() {
            if matches!(block.kind, BlockKind::Wood | BlockKind::Leaves) {
                assert!(block.position.y < SURFACE_Y);
            }
        }
    }
}
