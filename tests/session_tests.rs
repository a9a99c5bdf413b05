//! End-to-end sessions driven from level files on disk.

use std::fs;
use std::path::Path;

use coin_runner::core::{GameConfig, GameOverReason, GameState, WorldEvent};
use coin_runner::player::FrameInput;
use coin_runner::world::{GameWorld, LevelDirectory};
use tempfile::TempDir;

const IDLE: FrameInput = FrameInput {
    left: false,
    right: false,
    jump: false,
    undo: false,
};

const WALK_RIGHT: FrameInput = FrameInput {
    left: false,
    right: true,
    jump: false,
    undo: false,
};

fn write_level(dir: &Path, level: u32, contents: &str) {
    fs::write(dir.join(LevelDirectory::file_name(level)), contents).unwrap();
}

fn session(levels: &[&str]) -> (TempDir, GameWorld) {
    let dir = tempfile::tempdir().unwrap();
    for (i, contents) in levels.iter().enumerate() {
        write_level(dir.path(), i as u32 + 1, contents);
    }
    let world = GameWorld::new(GameConfig::default(), LevelDirectory::new(dir.path()));
    (dir, world)
}

/// Step until `done` holds, failing after `limit` frames.
fn run_until(
    world: &mut GameWorld,
    input: FrameInput,
    limit: usize,
    mut done: impl FnMut(&GameWorld) -> bool,
) -> Vec<WorldEvent> {
    let mut events = Vec::new();
    for _ in 0..limit {
        events.extend(world.update(&input));
        if done(world) {
            return events;
        }
    }
    panic!("condition not reached within {} frames", limit);
}

#[test]
fn test_walking_right_picks_up_first_coin() {
    let (_dir, mut world) = session(&["coin 150 480\n"]);
    assert_eq!(world.player.body.x, 100.0);
    assert_eq!(world.player.body.y, 460.0);

    let events = run_until(&mut world, WALK_RIGHT, 20, |w| w.score() > 0);
    assert_eq!(events, vec![WorldEvent::CoinCollected { index: 0 }]);
    assert_eq!(world.score(), 10);
    assert!(world.coins.get(0).unwrap().collected);
    assert_eq!(world.history.peek(), Some(0));
    assert_eq!(world.render().score.content, "Score: 10");
}

#[test]
fn test_undo_restores_coin_from_disk_level() {
    let (_dir, mut world) = session(&["coin 150 480\ncoin 400 480\n"]);
    run_until(&mut world, WALK_RIGHT, 20, |w| w.score() > 0);
    // Step clear of the coin so undo does not immediately re-collect it.
    run_until(&mut world, WALK_RIGHT, 20, |w| w.player.body.x >= 175.0);
    assert_eq!(world.score(), 10);

    let events = world.update(&FrameInput { undo: true, ..IDLE });
    assert_eq!(events, vec![WorldEvent::CoinRestored { index: 0 }]);
    assert_eq!(world.score(), 0);
    assert!(world.history.is_empty());
    assert!(!world.coins.get(0).unwrap().collected);

    // Walking back picks it up again.
    let walk_left = FrameInput { left: true, ..IDLE };
    let events = run_until(&mut world, walk_left, 20, |w| w.score() > 0);
    assert_eq!(events, vec![WorldEvent::CoinCollected { index: 0 }]);
    assert_eq!(world.history.peek(), Some(0));
}

#[test]
fn test_crossing_both_levels_ends_the_game() {
    let (_dir, mut world) = session(&["coin 150 480\n", "coin 300 480\ncoin 500 480\n"]);

    let events = run_until(&mut world, WALK_RIGHT, 200, |w| w.level() == 2);
    assert!(events.contains(&WorldEvent::LevelEntered { level: 2 }));
    assert_eq!(world.player.body.x, 100.0);
    assert_eq!(world.coins.len(), 2);
    assert!(world.history.is_empty());
    assert_eq!(world.score(), 10);

    let events = run_until(&mut world, WALK_RIGHT, 200, GameWorld::is_game_over);
    assert_eq!(
        events.last(),
        Some(&WorldEvent::GameOver {
            reason: GameOverReason::ClearedFinalLevel
        })
    );
    assert_eq!(world.score(), 30);
    assert_eq!(world.state(), GameState::GameOver);
    assert!(world.render().banner.is_some());
}

#[test]
fn test_flag_ends_game_and_freezes_world() {
    let (_dir, mut world) = session(&["flag 300 460\nenemy 400 460\n"]);
    let events = run_until(&mut world, WALK_RIGHT, 100, GameWorld::is_game_over);
    assert_eq!(
        events.last(),
        Some(&WorldEvent::GameOver {
            reason: GameOverReason::ReachedFlag
        })
    );

    let player_x = world.player.body.x;
    let enemy_x = world.enemies.get(0).unwrap().body.x;
    for _ in 0..30 {
        assert!(world.update(&WALK_RIGHT).is_empty());
    }
    assert_eq!(world.player.body.x, player_x);
    assert_eq!(world.enemies.get(0).unwrap().body.x, enemy_x);
}

#[test]
fn test_capacity_limits_apply_to_files() {
    let mut text = String::new();
    for i in 0..12 {
        text.push_str(&format!("coin {} 300\n", 200 + i * 40));
    }
    text.push_str("spike 300 460\nspike 400 460\nspike 500 460\n");
    text.push_str("enemy 250 460\nenemy 350 460\nenemy 450 460\n");
    text.push_str("flag 100 100\nflag 700 460\n");

    let (_dir, world) = session(&[&text]);
    assert_eq!(world.coins.len(), 10);
    assert_eq!(world.spikes.len(), 2);
    assert_eq!(world.enemies.len(), 2);
    assert_eq!(world.flag.x, 700.0);
}

#[test]
fn test_missing_level_file_gives_empty_world() {
    let dir = tempfile::tempdir().unwrap();
    let mut world = GameWorld::new(GameConfig::default(), LevelDirectory::new(dir.path()));
    assert!(world.coins.is_empty());
    assert!(world.spikes.is_empty());
    assert!(world.enemies.is_empty());
    assert!(world.flag.is_empty());
    assert_eq!(world.state(), GameState::Playing);
    assert!(world.update(&WALK_RIGHT).is_empty());
}

#[test]
fn test_bundled_levels_load() {
    let config = GameConfig::default();
    let levels = LevelDirectory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/levels"));
    let world = GameWorld::new(config, levels);
    assert!(!world.coins.is_empty());
    assert_eq!(world.coins.get(0).unwrap().x, 150.0);
    assert_eq!(world.coins.get(0).unwrap().y, 480.0);
}
