//! Frame-stepped game session
//!
//! Owns the world, the player and the mobs, and advances all of them one
//! fixed tick per [`Session::step`]. Presentation reads state back through
//! the accessors; nothing here renders, polls input or plays sound.

pub mod explosion;
pub mod input;

pub use explosion::{detonate, explosion_damage};
pub use input::{AudioCue, FrameInput};

use std::path::Path;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::Camera;
use crate::config::{ConfigError, GameConfig};
use crate::error::EngineResult;
use crate::generation::WorldGenerator;
use crate::constants::combat::PLAYER_MELEE_DAMAGE;
use crate::constants::gameplay::NEARBY_RADIUS;
use crate::constants::terrain::SURFACE_Y;
use crate::entity::{EntityId, EntityRegistry, MobAction, Player, Target};
use crate::interaction::{mine_tick, try_place, MiningOutcome};
use crate::persistence::{load_or_generate, save_world, PersistenceResult};
use crate::spawning::SpawnScheduler;
use crate::time::{DayNightCycle, DayPhase};
use crate::world::{Block, BlockId, World};

/// Whether the session keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    PlayerDied,
    Quit,
}

/// Everything a frame produced for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub cues: Vec<AudioCue>,
    pub status: SessionStatus,
}

/// One play session
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    world: World,
    player: Player,
    mobs: EntityRegistry,
    camera: Camera,
    cycle: DayNightCycle,
    spawner: SpawnScheduler,
    rng: StdRng,
    tick: u64,
    status: SessionStatus,
}

impl Session {
    /// Start a session on `world` with the player at the default spawn point.
    ///
    /// The config is validated first; an invalid one is rejected before any
    /// spawn caps are rolled.
    pub fn new(config: GameConfig, world: World) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.world.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let spawner = SpawnScheduler::new(&config.spawning, &mut rng);
        let cycle = DayNightCycle::new(config.time.day_length_ticks);
        let player = Player::default();
        let mut camera = Camera::default();
        camera.follow(&player.rect());

        log::info!("Session started with {} blocks", world.len());

        Ok(Self {
            config,
            world,
            player,
            mobs: EntityRegistry::new(),
            camera,
            cycle,
            spawner,
            rng,
            tick: 0,
            status: SessionStatus::Running,
        })
    }

    /// Load the config at `config_path` (or defaults), then the saved world
    /// it names, generating a fresh one when there is no save
    pub fn open(config_path: impl AsRef<Path>) -> EngineResult<Self> {
        let config = GameConfig::load_or_default(config_path)?;
        let generator = WorldGenerator::new(config.generator_config());
        let world = load_or_generate(&config.world.save_path, &generator)?;
        Ok(Self::new(config, world)?)
    }

    /// Advance one tick
    pub fn step(&mut self, input: &FrameInput) -> FrameReport {
        let mut cues = Vec::new();
        if self.status != SessionStatus::Running {
            return FrameReport {
                cues,
                status: self.status,
            };
        }

        if input.quit {
            log::info!("Quit requested at tick {}", self.tick);
            self.status = SessionStatus::Quit;
            return FrameReport {
                cues,
                status: self.status,
            };
        }

        self.handle_events(input, &mut cues);
        self.player.walk(input.walk_direction());

        if self.player.apply_void_damage() {
            cues.push(AudioCue::Hurt);
        }

        let phase = self.cycle.phase_at(self.tick);
        self.spawner.update(
            self.tick,
            phase,
            &mut self.mobs,
            self.player.body.position,
            &mut self.rng,
        );

        self.interact(input, &mut cues);

        let nearby = self.world.query(self.player.center(), NEARBY_RADIUS as f32);
        let outcome = self.player.update_physics(&nearby);
        if outcome.fall_damage > 0.0 {
            cues.push(AudioCue::Hurt);
        }

        self.world.update_particles();

        let actions = self.update_mobs();
        self.apply_mob_actions(actions, &mut cues);
        self.mobs.retain_alive();

        self.camera.follow(&self.player.rect());
        self.tick += 1;

        if self.player.is_dead() {
            log::info!("Player died at tick {}", self.tick);
            self.status = SessionStatus::PlayerDied;
        }

        FrameReport {
            cues,
            status: self.status,
        }
    }

    /// Discrete key and click events
    fn handle_events(&mut self, input: &FrameInput, cues: &mut Vec<AudioCue>) {
        if input.jump && self.player.jump() {
            cues.push(AudioCue::Jump);
        }

        if let Some(slot) = input.select_slot {
            self.player.hotbar.select(slot);
        }
        match input.cycle_slot {
            n if n < 0 => self.player.hotbar.select_previous(),
            n if n > 0 => self.player.hotbar.select_next(),
            _ => {}
        }

        if input.primary_pressed {
            if let Some(id) = self.mobs.mob_at(input.cursor_world) {
                let source_x = self.player.center().x;
                let killed = self
                    .mobs
                    .get_mut(id)
                    .is_some_and(|mob| mob.take_damage(PLAYER_MELEE_DAMAGE, source_x));
                if killed {
                    if let Some(mob) = self.mobs.remove(id) {
                        log::debug!("Player killed {} {:?}", mob.kind, id);
                    }
                }
            }
        }
    }

    /// Mining with the primary button, placing with the secondary
    fn interact(&mut self, input: &FrameInput, cues: &mut Vec<AudioCue>) {
        let settings = &self.config.player;
        let outcome = mine_tick(
            &mut self.player,
            input.primary_held,
            input.cursor_world,
            &mut self.world,
            settings.mining_speed,
            settings.max_mine_distance,
            &mut self.rng,
        );
        if let MiningOutcome::Completed { .. } = outcome {
            cues.push(AudioCue::MineComplete);
        }

        if input.secondary_held {
            let player_rect = self.player.rect();
            match try_place(
                input.cursor_world,
                &player_rect,
                &mut self.world,
                &mut self.player.hotbar,
                SURFACE_Y,
            ) {
                Ok(_) => cues.push(AudioCue::PlaceComplete),
                Err(reason) => log::debug!("Placement rejected: {}", reason),
            }
        }
    }

    /// AI and physics for every living mob; actions are collected, not
    /// applied. A mob that dies during its own update (fall damage) acts no
    /// more.
    fn update_mobs(&mut self) -> Vec<(EntityId, MobAction)> {
        let target = Target::new(self.player.rect());
        let mut actions = Vec::new();

        for mob in self.mobs.iter_mut().filter(|mob| !mob.is_dead()) {
            let nearby = self.world.query(mob.center(), 0.0);
            let action = mob.update(&target, &nearby, &mut self.rng);
            if let Some(action) = action.filter(|_| !mob.is_dead()) {
                actions.push((mob.id, action));
            }
        }
        actions
    }

    fn apply_mob_actions(&mut self, actions: Vec<(EntityId, MobAction)>, cues: &mut Vec<AudioCue>) {
        for (id, action) in actions {
            match action {
                MobAction::Attack { damage } => {
                    let source_x = self
                        .mobs
                        .get(id)
                        .map_or(self.player.center().x, |mob| mob.center().x);
                    self.player.take_damage(damage, source_x);
                    cues.push(AudioCue::Hurt);
                }
                MobAction::Detonate { center } => {
                    self.mobs.remove(id);
                    let (damage, _) = detonate(&mut self.world, &mut self.player, center, &mut self.rng);
                    if damage > 0.0 {
                        cues.push(AudioCue::Hurt);
                    }
                }
            }
        }
    }

    /// Save the world; called once when the session terminates
    pub fn end(&self, path: impl AsRef<Path>) -> PersistenceResult<()> {
        log::info!("Session ended after {} ticks ({:?})", self.tick, self.status);
        save_world(&self.world, path)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn mobs(&self) -> &EntityRegistry {
        &self.mobs
    }

    pub fn mobs_mut(&mut self) -> &mut EntityRegistry {
        &mut self.mobs
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn phase(&self) -> DayPhase {
        self.cycle.phase_at(self.tick)
    }

    /// Block being mined and how far along it is
    pub fn mining_overlay(&self) -> Option<(BlockId, f32)> {
        self.player.mining.fraction(&self.world)
    }

    /// Blocks inside the camera view
    pub fn visible_blocks(&self) -> Vec<Block> {
        self.world.blocks_in_rect(&self.camera.rect)
    }

    /// Cursor helper for presentation layers working in screen space
    pub fn screen_to_world(&self, point: Vec2) -> Vec2 {
        self.camera.screen_to_world(point)
    }
}
