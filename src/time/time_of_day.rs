use serde::{Deserialize, Serialize};

/// Halves of the day/night cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPhase {
    Day,
    Night,
}

impl DayPhase {
    pub fn is_day(self) -> bool {
        self == DayPhase::Day
    }

    /// Background fill for the presentation layer (RGB)
    pub fn sky_color(self) -> [u8; 3] {
        match self {
            DayPhase::Day => [135, 206, 235],
            DayPhase::Night => [20, 20, 50],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DayPhase::Day => "day",
            DayPhase::Night => "night",
        }
    }
}

impl std::fmt::Display for DayPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
