//! fatalcraft: simulation core of a 2D tile sandbox game
//!
//! The crate owns the world (chunked block store, terrain generation),
//! the entities (player and mobs sharing one gravity/collision resolver),
//! the mining/placing protocol, the day/night spawn scheduler and save/load.
//! Rendering, input polling and audio are left to the caller, who drives a
//! [`Session`] one tick at a time and reads plain data back out of it.

pub mod camera;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod generation;
pub mod interaction;
pub mod inventory;
pub mod particles;
pub mod persistence;
pub mod physics;
pub mod session;
pub mod spawning;
pub mod time;
pub mod world;

pub use camera::Camera;
pub use config::{ConfigError, GameConfig};
pub use entity::{EntityId, EntityKind, EntityRegistry, Mob, MobAction, Player};
pub use error::{EngineError, EngineResult};
pub use generation::{GeneratorConfig, WorldGenerator};
pub use interaction::{MiningOutcome, MiningState, PlacementError};
pub use inventory::{Hotbar, ItemKind, ItemStack};
pub use persistence::{load_world, save_world, BlockRecord, PersistenceError, PersistenceResult};
pub use physics::{Body, Rect};
pub use session::{AudioCue, FrameInput, FrameReport, Session, SessionStatus};
pub use time::{DayNightCycle, DayPhase};
pub use world::{Block, BlockId, BlockKind, ChunkKey, GridPos, World};
