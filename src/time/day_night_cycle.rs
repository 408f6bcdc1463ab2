use serde::{Deserialize, Serialize};

use super::DayPhase;
use crate::constants::spawning::DAY_LENGTH_TICKS;

/// Repeating day/night cycle.
///
/// The first half of every period is day, the second half night. All queries
/// are pure functions of the tick count, so there is no state to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayNightCycle {
    /// Ticks in one full day + night
    pub day_length_ticks: u64,
}

impl DayNightCycle {
    /// Create a cycle; a zero period is bumped to 2 ticks
    pub fn new(day_length_ticks: u64) -> Self {
        Self {
            day_length_ticks: day_length_ticks.max(2),
        }
    }

    /// Phase at the given tick
    pub fn phase_at(&self, tick: u64) -> DayPhase {
        if tick % self.day_length_ticks < self.day_length_ticks / 2 {
            DayPhase::Day
        } else {
            DayPhase::Night
        }
    }

    pub fn is_day(&self, tick: u64) -> bool {
        self.phase_at(tick).is_day()
    }

    /// Position within the current period in [0, 1)
    pub fn progress(&self, tick: u64) -> f32 {
        (tick % self.day_length_ticks) as f32 / self.day_length_ticks as f32
    }

    /// Completed periods
    pub fn day_count(&self, tick: u64) -> u64 {
        tick / self.day_length_ticks
    }
}

impl Default for DayNightCycle {
    fn default() -> Self {
        Self::new(DAY_LENGTH_TICKS)
    }
}
