//! Headless fatalcraft driver
//!
//! Loads the config and world, runs the simulation at the fixed tick rate
//! with idle input, then saves. A presentation layer would replace the idle
//! input with real key and pointer state.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use env_logger::Env;

use fatalcraft::constants::core::{HEADLESS_RUN_TICKS, TICK_RATE};
use fatalcraft::constants::persistence_constants::DEFAULT_CONFIG_PATH;
use fatalcraft::{FrameInput, Session, SessionStatus};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut session = Session::open(DEFAULT_CONFIG_PATH).context("failed to start session")?;
    let save_path = session.config().world.save_path.clone();

    let frame = Duration::from_secs_f64(1.0 / f64::from(TICK_RATE));
    let input = FrameInput::default();

    for _ in 0..HEADLESS_RUN_TICKS {
        let started = Instant::now();
        let report = session.step(&input);
        if report.status != SessionStatus::Running {
            break;
        }
        thread::sleep(frame.saturating_sub(started.elapsed()));
    }

    log::info!(
        "Stopped at tick {} ({} phase, {} mobs, health {:.1})",
        session.tick(),
        session.phase(),
        session.mobs().len(),
        session.player().health
    );

    session
        .end(&save_path)
        .with_context(|| format!("failed to save world to {}", save_path.display()))?;
    Ok(())
}
