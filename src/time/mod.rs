//! Day/night cycle driven purely by elapsed ticks

pub mod day_night_cycle;
pub mod time_of_day;

pub use day_night_cycle::DayNightCycle;
pub use time_of_day::DayPhase;
