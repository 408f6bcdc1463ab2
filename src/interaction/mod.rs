//! Mining and placing
//!
//! Mining is a small state machine that accumulates progress on the block
//! under the cursor. Placing is a single validated insert.

pub mod mining;
pub mod placing;

pub use mining::{mine_tick, MiningOutcome, MiningState};
pub use placing::try_place;

use thiserror::Error;

/// Why a placement was refused; the world and hotbar are left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("selected hotbar slot is empty")]
    EmptySlot,
    #[error("target cell already holds a block")]
    Occupied,
    #[error("target cell overlaps the player")]
    OverlapsPlayer,
    #[error("target cell has no neighbouring block and is above ground level")]
    Unsupported,
}
