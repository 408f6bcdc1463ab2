use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::SpawnSettings;
use crate::constants::core::BLOCK_SIZE_F32;
use crate::constants::spawning::{SPAWN_MAX_OFFSET, SPAWN_MIN_OFFSET};
use crate::constants::terrain::{SURFACE_Y, WORLD_MAX_X, WORLD_MIN_X};
use crate::entity::{EntityId, EntityKind, EntityRegistry};
use crate::time::DayPhase;

/// What one scheduler pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub spawned: Option<(EntityId, EntityKind)>,
    /// Mobs removed because their phase ended
    pub cleared: usize,
}

/// Spawns hostile mobs at night and passive mobs by day.
///
/// Each species gets a population cap rolled once when the scheduler is
/// created. A single shared interval limits how often anything spawns.
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    caps: Vec<(EntityKind, u32)>,
    hostile_roster: Vec<EntityKind>,
    passive_roster: Vec<EntityKind>,
    interval_ticks: u64,
    last_spawn_tick: u64,
    last_phase: Option<DayPhase>,
}

impl SpawnScheduler {
    pub fn new<R: Rng + ?Sized>(settings: &SpawnSettings, rng: &mut R) -> Self {
        let caps = settings
            .hostile_roster
            .iter()
            .chain(settings.passive_roster.iter())
            .map(|&kind| (kind, rng.gen_range(settings.min_cap..=settings.max_cap)))
            .collect::<Vec<_>>();

        for (kind, cap) in &caps {
            log::debug!("Spawn cap for {}: {}", kind, cap);
        }

        Self {
            caps,
            hostile_roster: settings.hostile_roster.clone(),
            passive_roster: settings.passive_roster.clone(),
            interval_ticks: settings.interval_ticks,
            last_spawn_tick: 0,
            last_phase: None,
        }
    }

    /// Population cap for `kind`; zero for species not on either roster
    pub fn cap(&self, kind: EntityKind) -> u32 {
        self.caps
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, cap)| *cap)
    }

    fn roster(&self, phase: DayPhase) -> &[EntityKind] {
        match phase {
            DayPhase::Day => &self.passive_roster,
            DayPhase::Night => &self.hostile_roster,
        }
    }

    /// Run one tick of scheduling.
    ///
    /// On a phase change the species that are now out of season are removed
    /// outright. Then, if the interval has elapsed, one in-season species that
    /// is below its cap spawns a mob beside the player.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        tick: u64,
        phase: DayPhase,
        registry: &mut EntityRegistry,
        player_position: Vec2,
        rng: &mut R,
    ) -> SpawnReport {
        let mut report = SpawnReport::default();

        if self.last_phase != Some(phase) {
            let night = phase == DayPhase::Night;
            report.cleared = registry.clear_kinds(|kind| kind.is_hostile() != night);
            if self.last_phase.is_some() {
                log::info!("Phase changed to {}; cleared {} mobs", phase, report.cleared);
            }
            self.last_phase = Some(phase);
        }

        if tick.saturating_sub(self.last_spawn_tick) < self.interval_ticks {
            return report;
        }

        let eligible: Vec<EntityKind> = self
            .roster(phase)
            .iter()
            .copied()
            .filter(|&kind| (registry.count(kind) as u32) < self.cap(kind))
            .collect();

        let Some(&kind) = eligible.choose(rng) else {
            return report;
        };

        let position = spawn_position(kind, player_position, rng);
        let id = registry.spawn(kind, position);
        self.last_spawn_tick = tick;
        report.spawned = Some((id, kind));
        report
    }
}

/// Random point 300-600 units to either side of the player, one block above
/// the ground row, kept over the generated strip
fn spawn_position<R: Rng + ?Sized>(kind: EntityKind, player_position: Vec2, rng: &mut R) -> Vec2 {
    let offset = rng.gen_range(SPAWN_MIN_OFFSET..=SPAWN_MAX_OFFSET);
    let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let profile = kind.profile();

    let x = (player_position.x + side * offset).clamp(
        WORLD_MIN_X as f32,
        WORLD_MAX_X as f32 - profile.width,
    );
    Vec2::new(x, SURFACE_Y as f32 - BLOCK_SIZE_F32 - profile.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scheduler(rng: &mut StdRng) -> SpawnScheduler {
        let settings = SpawnSettings {
            interval_ticks: 10,
            ..SpawnSettings::default()
        };
        SpawnScheduler::new(&settings, rng)
    }

    #[test]
    fn test_caps_rolled_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let scheduler = scheduler(&mut rng);
        for kind in EntityKind::ALL {
            assert!((1..=4).contains(&scheduler.cap(kind)));
        }
    }

    #[test]
    fn test_night_spawns_only_hostiles_under_cap() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut scheduler = scheduler(&mut rng);
        let mut registry = EntityRegistry::new();

        for tick in 0..10_000 {
            scheduler.update(tick, DayPhase::Night, &mut registry, Vec2::new(500.0, 600.0), &mut rng);
        }

        for kind in EntityKind::ALL {
            let count = registry.count(kind) as u32;
            if kind.is_hostile() {
                assert_eq!(count, scheduler.cap(kind));
            } else {
                assert_eq!(count, 0);
            }
        }
    }

    #[test]
    fn test_interval_gates_spawns() {
        let mut rng = StdRng::seed_from_u64(3);
        let settings = SpawnSettings {
            interval_ticks: 10,
            min_cap: 4,
            max_cap: 4,
            ..SpawnSettings::default()
        };
        let mut scheduler = SpawnScheduler::new(&settings, &mut rng);
        let mut registry = EntityRegistry::new();
        let player = Vec2::new(0.0, 600.0);

        let spawned: Vec<u64> = (0..35)
            .filter(|&tick| {
                scheduler
                    .update(tick, DayPhase::Day, &mut registry, player, &mut rng)
                    .spawned
                    .is_some()
            })
            .collect();
        assert_eq!(spawned, vec![10, 20, 30]);
    }

    #[test]
    fn test_phase_change_clears_out_of_season() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut scheduler = scheduler(&mut rng);
        let mut registry = EntityRegistry::new();
        registry.spawn(EntityKind::Pig, Vec2::ZERO);
        registry.spawn(EntityKind::Zombie, Vec2::ZERO);

        let report = scheduler.update(1, DayPhase::Day, &mut registry, Vec2::ZERO, &mut rng);
        assert_eq!(report.cleared, 1);
        assert_eq!(registry.count(EntityKind::Zombie), 0);

        let report = scheduler.update(2, DayPhase::Night, &mut registry, Vec2::ZERO, &mut rng);
        assert_eq!(report.cleared, 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_spawn_position_stays_over_terrain() {
        let mut rng = StdRng::seed_from_u64(6);
        for player_x in [WORLD_MIN_X as f32 + 50.0, WORLD_MAX_X as f32 - 100.0] {
            for kind in EntityKind::ALL {
                for _ in 0..50 {
                    let pos = spawn_position(kind, Vec2::new(player_x, 600.0), &mut rng);
                    assert!(pos.x >= WORLD_MIN_X as f32);
                    assert!(pos.x + kind.profile().width <= WORLD_MAX_X as f32);
                }
            }
        }
    }

    #[test]
    fn test_spawn_position_band() {
        let mut rng = StdRng::seed_from_u64(5);
        let player = Vec2::new(1000.0, 600.0);
        for _ in 0..100 {
            let pos = spawn_position(EntityKind::Zombie, player, &mut rng);
            let dx = (pos.x - player.x).abs();
            assert!((300.0..=600.0).contains(&dx));
            assert_eq!(pos.y + 150.0, 700.0);
        }
    }
}
