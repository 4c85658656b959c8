//! # Frame Scenario Tests
//!
//! Renders full frames over a real map and compares them pixel by pixel
//! against a map-only frame.

use isoworld_procedural::TilePalette;
use isoworld_rendering::{
    Camera, FrameRenderer, GameObject, Map, PixelRect, ShadowConfig, SpriteStore,
};
use isoworld_shared::{Sprite, Vec2};

const SCREEN_W: u32 = 800;
const SCREEN_H: u32 = 600;
// Not black, so black shadows over the empty area still show up.
const BACKGROUND: u32 = 0xFF40_6080;

fn camera() -> Camera {
    // Top-left of the screen is the world origin.
    let mut camera = Camera::new(SCREEN_W, SCREEN_H);
    camera.set_position(Vec2::new(SCREEN_W as f32 / 2.0, SCREEN_H as f32 / 2.0));
    camera
}

fn grass_map() -> Map {
    Map::new(10, 10, &TilePalette::generate()).expect("map allocation")
}

fn map_only_frame(map: &Map) -> Vec<u32> {
    let mut renderer = FrameRenderer::new(SCREEN_W, SCREEN_H)
        .expect("frame allocation")
        .with_background(BACKGROUND);
    renderer
        .render_frame(Some(map), &[], &SpriteStore::new(), &camera())
        .pixels()
        .to_vec()
}

/// Test: one opaque object only changes its sprite and shadow footprint.
#[test]
fn test_single_object_changes_only_its_footprint() {
    let map = grass_map();
    let baseline = map_only_frame(&map);

    // 16x16 with a distinct color per pixel
    let pixels: Vec<u32> = (0..256u32).map(|i| 0xFF00_0000 | (i * 0x0101)).collect();
    let sprite = Sprite::from_pixels(16, 16, pixels.clone());
    let mut store = SpriteStore::new();
    let handle = store.insert(sprite);
    let objects = [GameObject::new(Vec2::ZERO, handle)];

    let mut renderer = FrameRenderer::new(SCREEN_W, SCREEN_H)
        .expect("frame allocation")
        .with_background(BACKGROUND);
    let shadow_area = renderer.shadow().shadow_bounds(0, 0, 16, 16);
    let sprite_area = PixelRect::from_origin_size(0, 0, 16, 16);
    let frame = renderer.render_frame(Some(&map), &objects, &store, &camera());

    let mut changed = 0;
    for y in 0..SCREEN_H as i32 {
        for x in 0..SCREEN_W as i32 {
            let i = y as usize * SCREEN_W as usize + x as usize;
            let now = frame.pixels()[i];
            if sprite_area.contains(x, y) {
                assert_eq!(now, pixels[y as usize * 16 + x as usize], "sprite pixel ({x},{y})");
            } else if now != baseline[i] {
                assert!(shadow_area.contains(x, y), "unexpected change at ({x},{y})");
                changed += 1;
            }
        }
    }
    assert!(changed > 0, "shadow should extend past the sprite");
    assert_eq!(renderer.stats().objects_drawn, 1);
}

/// Test: the map is drawn where the camera says it is.
#[test]
fn test_map_window_follows_camera() {
    let map = grass_map();
    let mut renderer = FrameRenderer::new(SCREEN_W, SCREEN_H)
        .expect("frame allocation")
        .with_background(BACKGROUND);

    let mut cam = camera();
    let frame = renderer.render_frame(Some(&map), &[], &SpriteStore::new(), &cam);
    let center = map.size();
    let (cx, cy) = (center.x / 2, center.y / 2);
    let expected = map.pixel(cx, cy).expect("map center");
    assert_eq!(frame.pixel(cx as i32, cy as i32), Some(expected));

    // Look straight at the map center
    cam.set_position(Vec2::new(cx as f32, cy as f32));
    let frame = renderer.render_frame(Some(&map), &[], &SpriteStore::new(), &cam);
    assert_eq!(
        frame.pixel(SCREEN_W as i32 / 2, SCREEN_H as i32 / 2),
        Some(expected)
    );
}

/// Test: with shadows off, only the sprite rectangle changes.
#[test]
fn test_no_shadow_changes_only_sprite() {
    let map = grass_map();
    let baseline = map_only_frame(&map);

    let mut store = SpriteStore::new();
    let handle = store.insert(Sprite::solid(16, 16, 0xFFAA_5500));
    let mut object = GameObject::new(Vec2::new(300.0, 150.0), handle);
    object.flip_horizontal = true;

    let mut renderer = FrameRenderer::new(SCREEN_W, SCREEN_H)
        .expect("frame allocation")
        .with_background(BACKGROUND)
        .with_shadow(ShadowConfig {
            enabled: false,
            ..ShadowConfig::default()
        });
    let frame = renderer.render_frame(Some(&map), &[object], &store, &camera());
    let area = PixelRect::from_origin_size(300, 150, 16, 16);

    for (i, (&now, &before)) in frame.pixels().iter().zip(&baseline).enumerate() {
        let (x, y) = ((i % SCREEN_W as usize) as i32, (i / SCREEN_W as usize) as i32);
        if area.contains(x, y) {
            assert_eq!(now, 0xFFAA_5500);
        } else {
            assert_eq!(now, before, "unexpected change at ({x},{y})");
        }
    }
}
