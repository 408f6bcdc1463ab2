use glam::Vec2;

use super::Knockback;
use crate::constants::combat::HIT_COOLDOWN;
use crate::constants::gameplay::*;
use crate::interaction::MiningState;
use crate::inventory::Hotbar;
use crate::physics::{step_vertical, Body, CollisionOutcome, Rect};
use crate::world::Block;

/// The single player character
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub health: f32,
    pub max_health: f32,
    pub speed: f32,
    /// Upward (negative) velocity set by a jump
    pub jump_power: f32,
    pub facing_right: bool,
    pub hotbar: Hotbar,
    pub mining: MiningState,
    pub knockback: Knockback,
    /// Frames left on the hurt flash
    pub hit_cooldown: u32,
    /// Consecutive frames spent below the void threshold
    void_frames: u32,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            body: Body::new(
                position,
                Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
                PLAYER_SAFE_FALL,
                None,
            ),
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            speed: PLAYER_SPEED,
            jump_power: PLAYER_JUMP_POWER,
            facing_right: true,
            hotbar: Hotbar::new(),
            mining: MiningState::new(),
            knockback: Knockback::new(),
            hit_cooldown: 0,
            void_frames: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    /// This frame's horizontal step; `direction` is -1, 0 or +1.
    ///
    /// An active knockback replaces the walk until it decays.
    pub fn walk(&mut self, direction: f32) {
        self.hit_cooldown = self.hit_cooldown.saturating_sub(1);

        if self.knockback.is_active() {
            let dx = self.knockback.tick();
            self.body.move_horizontal(dx);
            return;
        }
        if direction == 0.0 {
            return;
        }
        self.facing_right = direction > 0.0;
        self.body.move_horizontal(direction.signum() * self.speed);
    }

    /// Jump if standing on something; returns whether the jump happened
    pub fn jump(&mut self) -> bool {
        if !self.body.grounded {
            return false;
        }
        self.body.velocity_y = self.jump_power;
        self.body.grounded = false;
        true
    }

    /// Gravity and vertical collision; fall damage is applied here
    pub fn update_physics(&mut self, blocks: &[Block]) -> CollisionOutcome {
        let outcome = step_vertical(&mut self.body, blocks);
        if outcome.fall_damage > 0.0 {
            self.hurt(outcome.fall_damage);
        }
        outcome
    }

    /// Accrue void damage while far below the terrain.
    ///
    /// Damage lands once every `VOID_DAMAGE_DELAY` consecutive frames; leaving
    /// the void resets the counter. Returns whether damage was dealt.
    pub fn apply_void_damage(&mut self) -> bool {
        if self.body.position.y <= VOID_DEPTH {
            self.void_frames = 0;
            return false;
        }

        self.void_frames += 1;
        if self.void_frames < VOID_DAMAGE_DELAY {
            return false;
        }

        self.void_frames = 0;
        self.hurt(VOID_DAMAGE);
        true
    }

    /// Hit from an attacker at horizontal position `source_x`; same response
    /// as a mob hit. Returns whether the player died.
    pub fn take_damage(&mut self, amount: f32, source_x: f32) -> bool {
        self.health -= amount;
        self.knockback.apply_from(source_x, self.center().x);
        self.hit_cooldown = HIT_COOLDOWN;
        self.is_dead()
    }

    /// Environmental damage (falls, the void): health only
    fn hurt(&mut self, amount: f32) {
        self.health -= amount;
    }

    pub fn recently_hit(&self) -> bool {
        self.hit_cooldown > 0
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{BlockId, BlockKind, GridPos};

    fn ground() -> Vec<Block> {
        (0..20)
            .map(|i| Block::new(BlockId(i), BlockKind::Grass, GridPos::new(i as i32 * 50, 750)))
            .collect()
    }

    #[test]
    fn test_walk_sets_facing() {
        let mut player = Player::default();
        player.walk(-1.0);
        assert_eq!(player.body.position.x, 495.0);
        assert!(!player.facing_right);
        player.walk(0.0);
        assert!(!player.facing_right);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut player = Player::default();
        assert!(!player.jump());

        player.update_physics(&ground());
        assert!(player.body.grounded);
        assert!(player.jump());
        assert_eq!(player.body.velocity_y, PLAYER_JUMP_POWER);
        assert!(!player.jump());
    }

    #[test]
    fn test_spawn_rests_on_surface() {
        let mut player = Player::default();
        for _ in 0..10 {
            player.update_physics(&ground());
        }
        assert_eq!(player.rect().bottom(), 750.0);
        assert_eq!(player.health, PLAYER_MAX_HEALTH);
    }

    #[test]
    fn test_void_damage_after_delay() {
        let mut player = Player::new(Vec2::new(0.0, VOID_DEPTH + 100.0));

        for _ in 0..VOID_DAMAGE_DELAY - 1 {
            assert!(!player.apply_void_damage());
        }
        assert!(player.apply_void_damage());
        assert_eq!(player.health, PLAYER_MAX_HEALTH - VOID_DAMAGE);

        // Counter restarts after each hit
        assert!(!player.apply_void_damage());
    }

    #[test]
    fn test_leaving_void_resets_counter() {
        let mut player = Player::new(Vec2::new(0.0, VOID_DEPTH + 100.0));
        for _ in 0..VOID_DAMAGE_DELAY - 1 {
            player.apply_void_damage();
        }
        player.body.position.y = 0.0;
        assert!(!player.apply_void_damage());
        player.body.position.y = VOID_DEPTH + 100.0;
        assert!(!player.apply_void_damage());
        assert_eq!(player.health, PLAYER_MAX_HEALTH);
    }

    #[test]
    fn test_hit_knocks_player_away_from_attacker() {
        let mut player = Player::default();

        assert!(!player.take_damage(1.0, 600.0));
        assert_eq!(player.health, PLAYER_MAX_HEALTH - 1.0);
        assert!(player.recently_hit());
        assert_eq!(player.knockback.direction, -1.0);

        // Knockback wins over the walk input
        player.walk(1.0);
        assert_eq!(player.body.position.x, 485.0);

        while player.knockback.is_active() {
            player.walk(1.0);
        }
        let x = player.body.position.x;
        player.walk(1.0);
        assert_eq!(player.body.position.x, x + PLAYER_SPEED);
        assert!(!player.recently_hit());
    }

    #[test]
    fn test_lethal_hit_reports_death() {
        let mut player = Player::default();
        player.health = 0.5;
        assert!(player.take_damage(1.0, 0.0));
        assert!(player.is_dead());
    }

    #[test]
    fn test_fall_damage_has_no_knockback() {
        let mut player = Player::new(Vec2::new(500.0, 0.0));
        player.body.velocity_y = 40.0;
        while !player.body.grounded {
            player.update_physics(&ground());
        }
        assert!(player.health < PLAYER_MAX_HEALTH);
        assert!(!player.knockback.is_active());
    }
}
