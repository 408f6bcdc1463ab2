//! Mob state machines
//!
//! Every mob shares the same body, health and hit-response; behaviour is
//! selected by a [`MobBrain`]. The player is passed in as a [`Target`]
//! snapshot so mobs never reach into session state.

use glam::Vec2;
use rand::Rng;

use super::{EntityId, EntityKind, Knockback, MobProfile};
use crate::constants::combat::{AGGRO_RADIUS, CREEPER_FUSE_TICKS, HIT_COOLDOWN};
use crate::constants::mobs::*;
use crate::constants::physics_constants::MOB_TERMINAL_VELOCITY;
use crate::physics::{step_vertical, Body, Rect};
use crate::world::Block;

/// What a mob sees of the player this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub rect: Rect,
}

impl Target {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }
}

/// Side effect a mob asks the session to carry out
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MobAction {
    /// Contact hit on the player
    Attack { damage: f32 },
    /// Creeper fuse ran out; the mob is gone after this
    Detonate { center: Vec2 },
}

/// Passive movement modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WanderMode {
    Wandering,
    Idle,
}

/// Timer-driven wander/idle state for pigs and sheep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassiveState {
    pub mode: WanderMode,
    /// Frames until the next reroll
    pub timer: u32,
    /// +1 right, -1 left
    pub move_direction: f32,
}

impl PassiveState {
    pub fn new() -> Self {
        Self {
            mode: WanderMode::Wandering,
            timer: WANDER_MIN_TICKS,
            move_direction: 1.0,
        }
    }

    /// Advance one frame; returns the horizontal step direction (0 when idle)
    fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f32 {
        self.timer = self.timer.saturating_sub(1);

        match self.mode {
            WanderMode::Wandering => {
                if self.timer == 0 {
                    let roll: f64 = rng.gen();
                    if roll < IDLE_CHANCE {
                        self.mode = WanderMode::Idle;
                        self.timer = rng.gen_range(IDLE_MIN_TICKS..=IDLE_MAX_TICKS);
                        return 0.0;
                    }
                    if roll < REVERSE_CHANCE {
                        self.move_direction = -self.move_direction;
                    }
                    self.timer = rng.gen_range(WANDER_MIN_TICKS..=WANDER_MAX_TICKS);
                }
                self.move_direction
            }
            WanderMode::Idle => {
                if self.timer == 0 {
                    self.mode = WanderMode::Wandering;
                    if rng.gen_bool(0.5) {
                        self.move_direction = -self.move_direction;
                    }
                    self.timer = rng.gen_range(WANDER_MIN_TICKS..=WANDER_MAX_TICKS);
                }
                0.0
            }
        }
    }
}

impl Default for PassiveState {
    fn default() -> Self {
        Self::new()
    }
}

/// Creeper lifecycle before detonation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreeperState {
    Approaching,
    /// Fuse counts up to `CREEPER_FUSE_TICKS`
    Exploding { fuse: u32 },
}

/// Behaviour selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MobBrain {
    /// Chase and hit on contact (zombie, spider)
    Hostile,
    Passive(PassiveState),
    Creeper(CreeperState),
}

impl MobBrain {
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Zombie | EntityKind::Spider => MobBrain::Hostile,
            EntityKind::Creeper => MobBrain::Creeper(CreeperState::Approaching),
            EntityKind::Pig | EntityKind::Sheep => MobBrain::Passive(PassiveState::new()),
        }
    }
}

/// A live mob
#[derive(Debug, Clone, PartialEq)]
pub struct Mob {
    pub id: EntityId,
    pub kind: EntityKind,
    pub body: Body,
    pub health: f32,
    pub facing_right: bool,
    pub knockback: Knockback,
    /// Frames left on the hurt flash
    pub hit_cooldown: u32,
    /// Frames until the next contact hit is allowed
    pub attack_cooldown: u32,
    pub brain: MobBrain,
}

impl Mob {
    /// Create a mob with its top-left corner at `position`
    pub fn new(id: EntityId, kind: EntityKind, position: Vec2) -> Self {
        let profile = kind.profile();
        let size = Vec2::new(profile.width, profile.height);

        Self {
            id,
            kind,
            body: Body::new(position, size, profile.safe_fall, Some(MOB_TERMINAL_VELOCITY)),
            health: profile.max_health,
            facing_right: true,
            knockback: Knockback::new(),
            hit_cooldown: 0,
            attack_cooldown: 0,
            brain: MobBrain::for_kind(kind),
        }
    }

    pub fn profile(&self) -> &'static MobProfile {
        self.kind.profile()
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Still showing the hurt flash
    pub fn recently_hit(&self) -> bool {
        self.hit_cooldown > 0
    }

    /// Creeper in the flashing part of its fuse
    pub fn is_flashing(&self) -> bool {
        matches!(self.brain, MobBrain::Creeper(CreeperState::Exploding { fuse }) if fuse >= CREEPER_FLASH_TICKS)
    }

    /// Apply damage from an attacker at horizontal position `source_x`.
    ///
    /// Knocks the mob away from the source and returns whether it died.
    pub fn take_damage(&mut self, amount: f32, source_x: f32) -> bool {
        self.health -= amount;
        self.knockback.apply_from(source_x, self.center().x);
        self.hit_cooldown = HIT_COOLDOWN;

        self.is_dead()
    }

    /// One frame of AI, movement and physics
    pub fn update<R: Rng + ?Sized>(&mut self, target: &Target, blocks: &[Block], rng: &mut R) -> Option<MobAction> {
        self.hit_cooldown = self.hit_cooldown.saturating_sub(1);
        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);

        // Knockback overrides normal movement until it decays
        let knocked_back = self.knockback.is_active();
        if knocked_back {
            let dx = self.knockback.tick();
            self.body.move_horizontal(dx);
        }

        let speed = self.profile().speed;
        let chase_dir = self.chase_direction(target);

        if !knocked_back {
            let step = match &mut self.brain {
                MobBrain::Hostile | MobBrain::Creeper(CreeperState::Approaching) => chase_dir,
                MobBrain::Creeper(CreeperState::Exploding { .. }) => 0.0,
                MobBrain::Passive(state) => state.tick(rng),
            };
            if step != 0.0 {
                self.facing_right = step > 0.0;
                self.body.move_horizontal(step * speed);
            }
        }

        let outcome = step_vertical(&mut self.body, blocks);
        if outcome.fall_damage > 0.0 {
            self.health -= outcome.fall_damage;
        }

        let touching = self.rect().intersects(&target.rect);
        match &mut self.brain {
            MobBrain::Hostile => {
                if touching && !knocked_back && self.attack_cooldown == 0 {
                    self.attack_cooldown = self.profile().attack_delay;
                    // Step back out of the player
                    let away = if self.center().x < target.center().x { -1.0 } else { 1.0 };
                    self.body.move_horizontal(away * speed);
                    return Some(MobAction::Attack {
                        damage: self.profile().contact_damage,
                    });
                }
                None
            }
            MobBrain::Creeper(state) => match *state {
                CreeperState::Approaching => {
                    if touching {
                        *state = CreeperState::Exploding { fuse: 0 };
                        log::debug!("Creeper {:?} fuse lit", self.id);
                    }
                    None
                }
                CreeperState::Exploding { fuse } => {
                    let fuse = fuse + 1;
                    *state = CreeperState::Exploding { fuse };
                    if fuse >= CREEPER_FUSE_TICKS {
                        Some(MobAction::Detonate { center: self.center() })
                    } else {
                        None
                    }
                }
            },
            MobBrain::Passive(_) => None,
        }
    }

    /// Direction toward the player inside the aggro radius, else 0
    fn chase_direction(&self, target: &Target) -> f32 {
        let center = self.center();
        let goal = target.center();
        if center.distance(goal) > AGGRO_RADIUS {
            return 0.0;
        }

        if goal.x > center.x {
            1.0
        } else if goal.x < center.x {
            -1.0
        } else {
            0.0
        }
    }
}
