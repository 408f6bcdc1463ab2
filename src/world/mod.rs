//! Spatial block store
//!
//! Blocks are grid-aligned 50×50 cells. The store indexes them into
//! 16×16-block chunks so per-frame proximity queries touch a handful of
//! buckets instead of the whole generated strip.

pub mod block;
pub mod position;
#[allow(clippy::module_inception)]
pub mod world;

pub use block::{Block, BlockId, BlockKind, BlockProperties};
pub use position::{ChunkKey, GridPos};
pub use world::World;
