// FatalCraft Constants - SINGLE SOURCE OF TRUTH
//
// Every tuning value used by the simulation lives here.
// World units follow screen conventions: x grows right, y grows DOWN.
//
// Do NOT define gameplay constants anywhere else in the codebase!

/// Core grid and world-strip dimensions
pub mod core {
    /// Side length of one block cell in world units
    pub const BLOCK_SIZE: i32 = 50;
    pub const BLOCK_SIZE_F32: f32 = 50.0;

    /// Blocks per chunk side
    pub const CHUNK_BLOCKS: i32 = 16;
    /// Chunk side in world units (16 × 50)
    pub const CHUNK_SIZE: i32 = CHUNK_BLOCKS * BLOCK_SIZE;

    /// Nominal visible area
    pub const SCREEN_WIDTH: i32 = 1000;
    pub const SCREEN_HEIGHT: i32 = 800;

    /// Simulation rate
    pub const TICK_RATE: u32 = 60;
    /// Length of a headless run of the binary (10 s)
    pub const HEADLESS_RUN_TICKS: u64 = 600;
}

/// Terrain generation constants - all in world units
pub mod terrain {
    use super::core::{BLOCK_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

    /// Generated strip spans [-W, 20W) horizontally (≈ 21 screens)
    pub const WORLD_MIN_X: i32 = -SCREEN_WIDTH;
    pub const WORLD_MAX_X: i32 = SCREEN_WIDTH * 20;

    /// Row holding the Grass surface; also the nominal ground row for placement
    pub const SURFACE_Y: i32 = SCREEN_HEIGHT - BLOCK_SIZE;
    /// Number of Dirt rows beneath the surface
    pub const DIRT_ROWS: i32 = 2;
    /// First stone/ore row
    pub const STRATA_START_Y: i32 = SCREEN_HEIGHT + 2 * BLOCK_SIZE;
    /// Floor of the world (one Bedrock per column)
    pub const BEDROCK_Y: i32 = SCREEN_HEIGHT + 50 * BLOCK_SIZE;

    /// Chance a strata cell becomes an ore
    pub const ORE_CHANCE: f64 = 0.05;
    /// Diamonds only below this depth (measured from SCREEN_HEIGHT)
    pub const DIAMOND_MIN_DEPTH: i32 = 800;
    pub const DIAMOND_CHANCE: f64 = 0.3;
    /// Iron only below this depth
    pub const IRON_MIN_DEPTH: i32 = 500;
    pub const IRON_CHANCE: f64 = 0.5;

    /// Trees are attempted on every 4th column
    pub const TREE_SPACING: i32 = 4 * BLOCK_SIZE;
    pub const TREE_CHANCE: f64 = 0.35;
    pub const TRUNK_MIN_HEIGHT: u32 = 4;
    pub const TRUNK_MAX_HEIGHT: u32 = 7;
    pub const TALL_TREE_CHANCE: f64 = 0.2;
    pub const LEAF_CHANCE: f64 = 0.8;
    pub const CROWN_LEAF_CHANCE: f64 = 0.3;
}

/// Physics constants - per-tick units
pub mod physics_constants {
    /// Vertical acceleration added every tick (positive = down)
    pub const GRAVITY: f32 = 0.8;
    /// Fall speed cap for non-player bodies
    pub const MOB_TERMINAL_VELOCITY: f32 = 20.0;
    /// Damage per unit of landing speed above the safe-fall threshold
    pub const FALL_DAMAGE_FACTOR: f32 = 0.2;
    /// Default safe-fall threshold
    pub const DEFAULT_SAFE_FALL: f32 = 25.0;
}

/// Combat and hit-response constants
pub mod combat {
    pub const KNOCKBACK_STRENGTH: f32 = 15.0;
    pub const KNOCKBACK_RESISTANCE: f32 = 0.8;
    /// Knockback below this snaps to zero
    pub const KNOCKBACK_CUTOFF: f32 = 0.5;
    pub const HIT_COOLDOWN: u32 = 10;
    /// Mobs only chase within this distance of the player
    pub const AGGRO_RADIUS: f32 = 250.0;
    /// Damage the player deals with a melee click
    pub const PLAYER_MELEE_DAMAGE: f32 = 1.0;

    pub const CREEPER_FUSE_TICKS: u32 = 60;
    pub const EXPLOSION_RADIUS: f32 = 200.0;
    pub const EXPLOSION_POWER: f32 = 0.5;
}

/// Mob AI timers - in ticks
pub mod mobs {
    /// Passive wander leg duration range
    pub const WANDER_MIN_TICKS: u32 = 120;
    pub const WANDER_MAX_TICKS: u32 = 240;
    /// Passive idle pause duration range
    pub const IDLE_MIN_TICKS: u32 = 60;
    pub const IDLE_MAX_TICKS: u32 = 120;
    /// On wander expiry: below this roll go idle
    pub const IDLE_CHANCE: f64 = 0.3;
    /// On wander expiry: below this (cumulative) roll reverse direction
    pub const REVERSE_CHANCE: f64 = 0.6;

    /// Creeper flashes during the final third of its fuse
    pub const CREEPER_FLASH_TICKS: u32 = super::combat::CREEPER_FUSE_TICKS * 2 / 3;
}

/// Player and interaction constants
pub mod gameplay {
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 150.0;
    pub const PLAYER_SPAWN_X: f32 = 500.0;
    pub const PLAYER_SPAWN_Y: f32 = 600.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_JUMP_POWER: f32 = -20.0;
    pub const PLAYER_MAX_HEALTH: f32 = 10.0;
    pub const PLAYER_SAFE_FALL: f32 = 25.0;

    pub const MINING_SPEED: f32 = 1.0;
    pub const MAX_MINE_DISTANCE: f32 = 250.0;
    /// Radius used for the per-frame proximity query around the player
    pub const NEARBY_RADIUS: i32 = 1000;

    pub const HOTBAR_SLOTS: usize = 9;

    /// Void damage kicks in once the player's top edge passes 4 × screen height
    pub const VOID_DEPTH: f32 = 4.0 * super::core::SCREEN_HEIGHT as f32;
    pub const VOID_DAMAGE_DELAY: u32 = 30;
    pub const VOID_DAMAGE: f32 = 0.5;
}

/// Day/night and spawning constants - in ticks
pub mod spawning {
    /// Full day+night cycle (40 s at 60 Hz)
    pub const DAY_LENGTH_TICKS: u64 = 2400;
    pub const SPAWN_INTERVAL_TICKS: u64 = 300;
    pub const MIN_SPECIES_CAP: u32 = 1;
    pub const MAX_SPECIES_CAP: u32 = 4;
    /// Horizontal distance band from the player where mobs appear
    pub const SPAWN_MIN_OFFSET: f32 = 300.0;
    pub const SPAWN_MAX_OFFSET: f32 = 600.0;
}

/// Decorative particle constants
pub mod particles {
    pub const MINE_BURST: usize = 15;
    pub const EXPLOSION_BURST: usize = 40;
    pub const BURST_SPREAD: i32 = 20;
    pub const PARTICLE_DRIFT: f32 = 0.1;
    pub const EXPLOSION_COLOR: [u8; 3] = [255, 140, 0];
}

/// Persistence defaults
pub mod persistence_constants {
    pub const DEFAULT_SAVE_PATH: &str = "world.dat";
    pub const DEFAULT_CONFIG_PATH: &str = "fatalcraft.toml";
    pub const TEMP_SUFFIX: &str = "tmp";
}
