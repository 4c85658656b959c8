//! # Engine Loop Tests
//!
//! Drives the full engine headlessly with scripted input and checks that
//! logic, camera and presentation stay in lockstep.

use isoworld::{
    scatter_static_objects, Engine, EngineConfig, GameLogic, HeadlessDisplay, InputState,
    ScriptedInput,
};
use isoworld_procedural::WorldSeed;
use isoworld_rendering::GameObject;
use isoworld_shared::{Sprite, Vec2};

const PLAYER_COLOR: u32 = 0xFFEE_1122;

struct Walker {
    objects: Vec<GameObject>,
    steps: u32,
    speed: f32,
}

impl GameLogic for Walker {
    fn update(&mut self, input: &InputState, _dt: f32) {
        self.steps += 1;
        let dir = input.direction();
        self.objects[0].position += dir * self.speed;
    }

    fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    fn camera_focus(&self) -> Option<Vec2> {
        Some(self.objects[0].position)
    }
}

fn config() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.display.width = 160;
    config.display.height = 120;
    config.map.cols = 8;
    config.map.rows = 8;
    config.shadow.enabled = false;
    config
}

fn right(frames: usize) -> ScriptedInput {
    ScriptedInput::hold(
        InputState {
            right: true,
            ..InputState::default()
        },
        frames,
    )
}

/// Test: logic steps follow the simulated clock.
#[test]
fn test_fixed_steps_match_elapsed_time() {
    // 20ms frames, 10ms logic steps: two steps per frame after the first.
    let mut config = config();
    config.timing.logic_step = 0.01;
    let mut engine = Engine::new(config, HeadlessDisplay::simulated(20), right(10)).unwrap();
    engine.load_map().unwrap();

    let handle = engine.sprites_mut().insert(Sprite::solid(8, 8, PLAYER_COLOR));
    let mut walker = Walker {
        objects: vec![GameObject::new(Vec2::new(100.0, 100.0), handle)],
        steps: 0,
        speed: 1.0,
    };

    assert_eq!(engine.run(&mut walker, None), 10);
    // First frame sees no elapsed time; the other nine see 20ms each.
    assert!((17..=18).contains(&walker.steps), "steps = {}", walker.steps);
    assert!((walker.objects[0].position.x - (100.0 + walker.steps as f32)).abs() < 1e-3);
    assert_eq!(engine.stats().frames_recorded, 10);
    assert!((engine.fps() - 50.0).abs() < 1e-3);
}

/// Test: the camera converges on the player and the player ends up
/// drawn at the screen center.
#[test]
fn test_camera_follows_player() {
    let mut engine = Engine::new(config(), HeadlessDisplay::simulated(16), right(120)).unwrap();
    let map_size = engine.load_map().unwrap().size();
    let start = Vec2::new(map_size.x as f32 / 2.0 - 40.0, map_size.y as f32 / 2.0);

    let handle = engine.sprites_mut().insert(Sprite::solid(8, 8, PLAYER_COLOR));
    let mut walker = Walker {
        objects: vec![GameObject::new(start, handle)],
        steps: 0,
        speed: 0.5,
    };

    // Walk for 100 frames, then stand still so the camera can catch up.
    engine.run(&mut walker, Some(100));
    walker.speed = 0.0;
    engine.run(&mut walker, Some(20));

    let player = walker.objects[0].position;
    let camera = engine.camera().position();
    assert!(player.x > start.x + 20.0, "player did not move");
    assert!(camera.distance(player) < 1.0, "camera {camera:?} vs player {player:?}");

    // The look-at point is the screen center, where the sprite's top-left sits.
    let frame = engine.display().last_frame();
    let center = 60 * 160 + 80;
    assert_eq!(frame[center + 2 * 160 + 2], PLAYER_COLOR);
}

/// Test: disabling follow keeps the camera where the map put it.
#[test]
fn test_camera_stays_when_not_following() {
    let mut config = config();
    config.camera.following = false;
    let mut engine = Engine::new(config, HeadlessDisplay::simulated(16), right(30)).unwrap();
    engine.load_map().unwrap();
    let before = engine.camera().position();

    let handle = engine.sprites_mut().insert(Sprite::solid(8, 8, PLAYER_COLOR));
    let mut walker = Walker {
        objects: vec![GameObject::new(Vec2::ZERO, handle)],
        steps: 0,
        speed: 3.0,
    };
    engine.run(&mut walker, None);
    assert_eq!(engine.camera().position(), before);
}

/// Test: scattered scenery renders alongside the player without panics,
/// including objects far off screen.
#[test]
fn test_scene_with_scenery() {
    let mut config = config();
    config.map.cols = 20;
    config.map.rows = 20;
    config.shadow.enabled = true;
    let mut engine = Engine::new(config, HeadlessDisplay::simulated(16), right(5)).unwrap();
    engine.load_map().unwrap();

    let tree = engine.sprites_mut().insert(Sprite::solid(16, 32, 0xFF20_7030));
    let player = engine.sprites_mut().insert(Sprite::solid(8, 8, PLAYER_COLOR));

    let mut objects = {
        let map = engine.map().unwrap();
        let mut rng = WorldSeed::new(11).rng();
        scatter_static_objects(map, engine.sprites(), &[tree], 40, 40.0, &mut rng)
    };
    assert_eq!(objects.len(), 40);
    let focus = engine.camera().position();
    objects.insert(0, GameObject::new(focus, player));

    let mut walker = Walker {
        objects,
        steps: 0,
        speed: 1.0,
    };
    assert_eq!(engine.run(&mut walker, None), 5);
    assert_eq!(engine.display().frames_presented(), 5);
    assert_eq!(engine.display().last_frame().len(), 160 * 120);
}
