//! Day/night-gated mob spawning

pub mod scheduler;

pub use scheduler::{SpawnReport, SpawnScheduler};
