//! # ISOWORLD Demo
//!
//! Headless run of the sample world: a grass map, scattered scenery, a
//! player walking a scripted loop and two NPCs reacting to it. Frames are
//! rendered in memory and frame statistics are logged at the end.
//!
//! Usage: `isoworld_demo [config.toml] [frames]`

use std::path::Path;

use isoworld::{
    scatter_static_objects, Engine, EngineConfig, GameLogic, HeadlessDisplay, InputState,
    ScriptedInput,
};
use isoworld_procedural::WorldSeed;
use isoworld_rendering::{load_sprite, GameObject, MemoryImageSource, RawImage, SpriteHandle};
use isoworld_shared::Vec2;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Pixels per logic step.
const PLAYER_SPEED: f32 = 5.0;
/// NPCs react inside this distance.
const NPC_REACH: f32 = 100.0;
const DEFAULT_FRAMES: usize = 600;

struct PlayerSprites {
    side: SpriteHandle,
    back: SpriteHandle,
    front: SpriteHandle,
}

struct DemoGame {
    /// Scenery first, then the player, then the NPCs.
    objects: Vec<GameObject>,
    player: usize,
    sprites: PlayerSprites,
}

impl DemoGame {
    fn update_player(&mut self, input: &InputState) {
        let dir = input.direction();
        let player = &mut self.objects[self.player];
        player.velocity = dir * PLAYER_SPEED;
        player.position += player.velocity;

        // Vertical movement picks the sprite, horizontal movement the facing
        if player.velocity.y < -0.1 {
            player.sprite = self.sprites.back;
        } else if player.velocity.y > 0.1 {
            player.sprite = self.sprites.front;
        } else if player.velocity.x.abs() > 0.1 {
            player.sprite = self.sprites.side;
        }
        if player.velocity.x < -0.1 {
            player.flip_horizontal = true;
        } else if player.velocity.x > 0.1 {
            player.flip_horizontal = false;
        }
        player.velocity = Vec2::ZERO;
    }

    /// The first NPC shoves the player away, the second one flees.
    fn update_npcs(&mut self) {
        let p = self.player;
        for (npc, pushes) in [(p + 1, true), (p + 2, false)] {
            let offset = self.objects[p].position - self.objects[npc].position;
            let dist = offset.length();
            if dist >= NPC_REACH {
                continue;
            }
            let away = offset * (1.0 / dist.max(1.0));
            if pushes {
                self.objects[p].position += away * 2.0;
            } else {
                self.objects[npc].position += away * -3.0;
            }
        }
    }
}

impl GameLogic for DemoGame {
    fn update(&mut self, input: &InputState, _dt: f32) {
        self.update_player(input);
        self.update_npcs();
    }

    fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    fn camera_focus(&self) -> Option<Vec2> {
        Some(self.objects[self.player].position)
    }
}

/// Stand-in art, since the demo ships without image files.
fn placeholder_images() -> MemoryImageSource {
    let mut images = MemoryImageSource::new();
    images.insert("tree.png", blob(16, 24, [40, 120, 50], [90, 60, 30]));
    images.insert("bush.png", blob(16, 10, [60, 150, 60], [60, 150, 60]));
    images.insert("rock.png", blob(12, 8, [130, 130, 140], [130, 130, 140]));
    images.insert("player_side.png", blob(8, 16, [200, 40, 40], [40, 40, 160]));
    images.insert("player_back.png", blob(8, 16, [150, 30, 30], [40, 40, 160]));
    images.insert("player_front.png", blob(8, 16, [230, 80, 80], [40, 40, 160]));
    images
}

/// An ellipse of `top` color over a narrower `bottom` stem.
fn blob(width: u32, height: u32, top: [u8; 3], bottom: [u8; 3]) -> RawImage {
    let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
    let (cx, cy) = (width as f32 / 2.0, height as f32 * 0.4);
    let (rx, ry) = (width as f32 / 2.0, height as f32 * 0.4);
    for y in 0..height {
        for x in 0..width {
            let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
            let d = ((fx - cx) / rx).powi(2) + ((fy - cy) / ry).powi(2);
            let stem = fy > cy && (fx - cx).abs() < width as f32 * 0.15;
            let px = if d <= 1.0 {
                [top[0], top[1], top[2], 255]
            } else if stem {
                [bottom[0], bottom[1], bottom[2], 255]
            } else {
                [0, 0, 0, 0]
            };
            rgba.extend_from_slice(&px);
        }
    }
    RawImage::new(width, height, rgba)
}

/// Walk a square, then a diagonal, then stop.
fn walk_script(frames: usize) -> ScriptedInput {
    let leg = (frames / 5).max(1);
    let held = |up, left, down, right| InputState {
        up,
        left,
        down,
        right,
        quit: false,
    };
    let legs = [
        held(false, false, false, true),
        held(false, false, true, false),
        held(false, true, false, false),
        held(true, false, false, false),
        held(true, false, false, true),
    ];
    ScriptedInput::new(
        legs.into_iter()
            .flat_map(|state| std::iter::repeat(state).take(leg))
            .take(frames),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => EngineConfig::load(Path::new(&path))?,
        None => EngineConfig::default(),
    };
    let frames = match args.next() {
        Some(n) => n.parse()?,
        None => DEFAULT_FRAMES,
    };

    let level = config.logging.level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let step_ms = 1000 / u64::from(config.display.target_fps.max(1));
    let mut engine = Engine::new(
        config.clone(),
        HeadlessDisplay::simulated(step_ms),
        walk_script(frames),
    )?;
    engine.load_map()?;

    let images = placeholder_images();
    let store = engine.sprites_mut();
    let kinds = [
        store.insert(load_sprite(&images, "tree.png", 2.0)),
        store.insert(load_sprite(&images, "bush.png", 1.5)),
        store.insert(load_sprite(&images, "rock.png", 1.5)),
        // Never shipped; loads as an absent sprite and is skipped.
        store.insert(load_sprite(&images, "cactus.png", 1.0)),
    ];
    let sprites = PlayerSprites {
        side: store.insert(load_sprite(&images, "player_side.png", 2.0)),
        back: store.insert(load_sprite(&images, "player_back.png", 2.0)),
        front: store.insert(load_sprite(&images, "player_front.png", 2.0)),
    };

    let mut objects = match engine.map() {
        Some(map) => {
            let mut rng = WorldSeed::new(config.map.seed).derive(1).rng();
            scatter_static_objects(
                map,
                engine.sprites(),
                &kinds,
                config.map.static_objects,
                config.map.margin,
                &mut rng,
            )
        }
        None => Vec::new(),
    };

    let grid = *engine.map().map(|m| m.grid()).ok_or("map not loaded")?;
    let (cx, cy) = ((grid.cols / 2) as f32, (grid.rows / 2) as f32);
    let player = objects.len();
    objects.push(GameObject::new(grid.tile_to_world(cx, cy), sprites.side));
    objects.push(GameObject::new(grid.tile_to_world(cx - 3.0, cy - 3.0), sprites.back));
    objects.push(GameObject::new(grid.tile_to_world(cx + 3.0, cy + 3.0), sprites.front));

    let mut game = DemoGame {
        objects,
        player,
        sprites,
    };

    let ran = engine.run(&mut game, None);
    tracing::info!(
        frames = ran,
        fps = engine.fps(),
        player_x = game.objects[player].position.x,
        player_y = game.objects[player].position.y,
        "demo finished"
    );
    engine.stats().log_summary();
    Ok(())
}
