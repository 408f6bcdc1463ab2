// End-to-end frames through the session loop

use fatalcraft::entity::{CreeperState, MobBrain};
use fatalcraft::{
    BlockKind, EntityKind, FrameInput, GameConfig, GridPos, ItemKind, ItemStack, Session, World,
};
use glam::Vec2;

fn seeded_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.world.seed = Some(99);
    config
}

/// Grass row under the spawn point, with one special block
fn ground_with(x: i32, kind: BlockKind) -> World {
    let mut world = World::new();
    world.add_block(kind, GridPos::new(x, 750));
    for column in (-500..1500).step_by(50) {
        world.add_block(BlockKind::Grass, GridPos::new(column, 750));
    }
    world
}

#[test]
fn test_dirt_takes_fifty_ticks_to_mine() {
    let mut session =
        Session::new(seeded_config(), ground_with(600, BlockKind::Dirt)).expect("valid config");
    let input = FrameInput {
        primary_held: true,
        cursor_world: Vec2::new(610.0, 760.0),
        ..FrameInput::default()
    };

    for tick in 1..50 {
        session.step(&input);
        assert!(session.world().is_occupied(GridPos::new(600, 750)), "gone after {tick} ticks");
        let (_, fraction) = session.mining_overlay().expect("mining in progress");
        assert!((fraction - tick as f32 / 50.0).abs() < 1e-5);
    }

    session.step(&input);
    assert!(!session.world().is_occupied(GridPos::new(600, 750)));
    assert_eq!(
        session.player().hotbar.slot(0),
        Some(&ItemStack::new(ItemKind::Dirt, 1))
    );
    assert!(session.mining_overlay().is_none());
}

#[test]
fn test_releasing_button_resets_progress() {
    let mut session =
        Session::new(seeded_config(), ground_with(600, BlockKind::Stone)).expect("valid config");
    let held = FrameInput {
        primary_held: true,
        cursor_world: Vec2::new(610.0, 760.0),
        ..FrameInput::default()
    };

    for _ in 0..30 {
        session.step(&held);
    }
    session.step(&FrameInput::default());
    assert!(session.mining_overlay().is_none());

    // Starting over needs the full health again
    for _ in 0..124 {
        session.step(&held);
    }
    assert!(session.world().is_occupied(GridPos::new(600, 750)));
    session.step(&held);
    assert!(!session.world().is_occupied(GridPos::new(600, 750)));
}

#[test]
fn test_creeper_detonation_damage_and_crater() {
    let mut config = seeded_config();
    config.time.day_length_ticks = 2;

    let mut world = ground_with(600, BlockKind::Grass);
    for column in (-500..1500).step_by(50) {
        world.add_block(BlockKind::Dirt, GridPos::new(column, 800));
    }
    world.remove_at(GridPos::new(650, 800));
    world.add_block(BlockKind::Bedrock, GridPos::new(650, 800));

    let mut session = Session::new(config, world).expect("valid config");
    // Tick 0 is day; step into the night so the creeper is not cleared
    session.step(&FrameInput::default());

    // Creeper standing on the ground with its centre 100 units from the player's
    let player_center = session.player().center();
    let creeper_center = Vec2::new(player_center.x + (100.0f32 * 100.0 - 25.0 * 25.0).sqrt(), 700.0);
    assert!((creeper_center.distance(player_center) - 100.0).abs() < 1e-3);

    let id = session
        .mobs_mut()
        .spawn(EntityKind::Creeper, creeper_center - Vec2::new(25.0, 50.0));
    if let Some(creeper) = session.mobs_mut().get_mut(id) {
        creeper.body.grounded = true;
        creeper.brain = MobBrain::Creeper(CreeperState::Exploding { fuse: 59 });
    }

    let health = session.player().health;
    session.step(&FrameInput::default());

    assert!(session.mobs().get(id).is_none(), "creeper removed by detonation");
    assert!((health - session.player().health - 0.25).abs() < 1e-4);

    assert!(session.world().is_occupied(GridPos::new(650, 800)), "bedrock survives");
    assert!(!session.world().is_occupied(GridPos::new(600, 750)));
    for block in session.world().blocks() {
        let inside = block.rect().center().distance(creeper_center) < 200.0;
        assert!(!inside || block.kind == BlockKind::Bedrock, "{:?} survived", block.position);
    }
}

#[test]
fn test_placement_rejections_through_session() {
    let mut session =
        Session::new(seeded_config(), ground_with(0, BlockKind::Grass)).expect("valid config");
    session.player_mut().hotbar.add_item(ItemKind::Wood);

    // Floating cell with no neighbours
    session.step(&FrameInput {
        secondary_held: true,
        cursor_world: Vec2::new(810.0, 300.0),
        ..FrameInput::default()
    });
    // Inside the player
    session.step(&FrameInput {
        secondary_held: true,
        cursor_world: Vec2::new(510.0, 650.0),
        ..FrameInput::default()
    });
    // Occupied ground cell
    session.step(&FrameInput {
        secondary_held: true,
        cursor_world: Vec2::new(810.0, 760.0),
        ..FrameInput::default()
    });

    assert_eq!(session.player().hotbar.count_of(ItemKind::Wood), 1);
    assert!(!session.world().is_occupied(GridPos::new(800, 300)));
}

#[test]
fn test_night_spawns_and_day_clears_hostiles() {
    let mut config = seeded_config();
    config.time.day_length_ticks = 1200;
    config.spawning.interval_ticks = 20;

    let mut session =
        Session::new(config, ground_with(0, BlockKind::Grass)).expect("valid config");
    let idle = FrameInput::default();

    let mut saw_hostile = false;
    for _ in 0..1199 {
        session.step(&idle);
        if session.phase().is_day() {
            assert!(session.mobs().iter().all(|m| !m.kind.is_hostile()));
        } else {
            saw_hostile |= session.mobs().iter().any(|m| m.kind.is_hostile());
        }
        if session.player().is_dead() {
            break;
        }
    }
    assert!(saw_hostile);
}
