//! Camera draw pipeline integration tests.
//!
//! The layer order of a frame is part of the camera's contract, so most of
//! these tests composite onto a canvas that records every call and compare
//! the call sequence. The rest composite onto a real `PixelBuffer` and
//! check the resulting pixels.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test camera_pipeline_integration
//! ```

use std::sync::Arc;

use image::{Rgba, RgbaImage};

use scrollcam::components::enemy::Enemy;
use scrollcam::components::player::Player;
use scrollcam::components::rect::{Rect, ScreenRect};
use scrollcam::components::sprite::Sprite;
use scrollcam::components::target::Target;
use scrollcam::resources::animation::Animation;
use scrollcam::resources::camera::{
    CLEAR_COLOR, Camera, DEBUG_TEXT_COLOR, DebugStats, ENEMY_COLOR, GameFrame, PLATFORM_COLOR,
    TERRAIN_COLOR, WEAPON_COLOR,
};
use scrollcam::resources::canvas::Canvas;
use scrollcam::resources::color::Color;

// =============================================================================
// Recording canvas
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Clear(Color),
    Fill(ScreenRect, Color),
    /// Blit identified by the color of the source image's first pixel.
    Blit(ScreenRect, Color),
    Text(String, i32, i32, Color),
}

#[derive(Debug, Default)]
struct RecordingCanvas {
    size: (u32, u32),
    calls: Vec<Call>,
}

impl Canvas for RecordingCanvas {
    fn with_size(width: u32, height: u32) -> Self {
        RecordingCanvas {
            size: (width, height),
            calls: Vec::new(),
        }
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(Call::Clear(color));
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Color) {
        self.calls.push(Call::Fill(rect, color));
    }

    fn blit(&mut self, image: &RgbaImage, dest: ScreenRect) {
        let id = Color::from(*image.get_pixel(0, 0));
        self.calls.push(Call::Blit(dest, id));
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        self.calls.push(Call::Text(text.to_string(), x, y, color));
    }
}

// =============================================================================
// Helpers
// =============================================================================

const BG_ID: Color = Color(0x010203FF);
const TARGET_ID: Color = Color(0x00FF00FF);
const ENEMY_SPRITE_ID: Color = Color(0xFF00FFFF);
const PLAYER_ID: Color = Color(0x0000FFFF);

fn solid_anim(color: Color) -> Arc<Animation> {
    let frame = RgbaImage::from_pixel(2, 2, Rgba::from(color));
    Arc::new(Animation::new(vec![frame], 1, true).unwrap())
}

fn sprite(color: Color, x: f32, y: f32, w: f32, h: f32) -> Sprite {
    Sprite::new(Rect::new(x, y, w, h), solid_anim(color))
}

fn recording_camera(w: u32, h: u32) -> Camera<RecordingCanvas> {
    let mut camera = Camera::create().with_bounds(Rect::new(0.0, 0.0, 10_000.0, 10_000.0));
    camera.init(w, h).unwrap();
    camera
}

fn calls(camera: &Camera<RecordingCanvas>) -> &[Call] {
    &camera.buffer().unwrap().calls
}

fn player_at(x: f32, y: f32) -> Player {
    Player::new(
        Rect::new(x, y, 8.0, 8.0),
        Rect::new(x + 8.0, y + 2.0, 5.0, 2.0),
        sprite(PLAYER_ID, x, y, 8.0, 8.0),
    )
}

fn stats() -> DebugStats {
    DebugStats {
        window_w: 1280,
        window_h: 720,
        scale: 2.0,
        step: 90,
    }
}

// =============================================================================
// Draw order
// =============================================================================

#[test]
fn full_frame_draws_layers_back_to_front() {
    let mut camera = recording_camera(320, 240);

    let terrain = [Rect::new(0.0, 200.0, 320.0, 40.0), Rect::new(50.0, 150.0, 10.0, 50.0)];
    let platforms = [Rect::new(100.0, 120.0, 40.0, 4.0)];
    let background = RgbaImage::from_pixel(640, 480, Rgba::from(BG_ID));

    let target_with = Target {
        sprite: Some(sprite(TARGET_ID, 30.0, 30.0, 6.0, 6.0)),
    };
    let target_without = Target { sprite: None };

    let plain = Enemy::new(Rect::new(60.0, 60.0, 10.0, 10.0));
    let mut blinking = Enemy::new(Rect::new(70.0, 60.0, 10.0, 10.0));
    blinking.flashing = 3;
    let mut dead = Enemy::new(Rect::new(80.0, 60.0, 10.0, 10.0));
    dead.alive = false;
    let sprited = Enemy::new(Rect::new(90.0, 60.0, 10.0, 10.0))
        .with_sprite(sprite(ENEMY_SPRITE_ID, 90.0, 60.0, 10.0, 10.0));

    let player = player_at(15.0, 15.0);

    let targets = [&target_with, &target_without];
    let enemies = [&plain, &blinking, &dead, &sprited];
    let frame = GameFrame {
        terrain: &terrain,
        platforms: &platforms,
        background: Some(&background),
        targets: &targets,
        enemies: &enemies,
        player: Some(&player),
        debug: Some(stats()),
    };

    camera.draw_frame(&frame).unwrap();

    let expected = vec![
        Call::Clear(CLEAR_COLOR),
        Call::Fill(ScreenRect::new(0, 200, 320, 40), TERRAIN_COLOR),
        Call::Fill(ScreenRect::new(50, 150, 10, 50), TERRAIN_COLOR),
        Call::Fill(ScreenRect::new(100, 120, 40, 4), PLATFORM_COLOR),
        Call::Blit(ScreenRect::new(0, 0, 640, 480), BG_ID),
        Call::Blit(ScreenRect::new(30, 30, 6, 6), TARGET_ID),
        Call::Fill(ScreenRect::new(60, 60, 10, 10), ENEMY_COLOR),
        Call::Blit(ScreenRect::new(90, 60, 10, 10), ENEMY_SPRITE_ID),
        Call::Blit(ScreenRect::new(15, 15, 8, 8), PLAYER_ID),
        Call::Fill(ScreenRect::new(23, 17, 5, 2), WEAPON_COLOR),
        Call::Text("Win Size: 1280x720".into(), 4, 2, DEBUG_TEXT_COLOR),
        Call::Text("Scale: 2.00".into(), 4, 16, DEBUG_TEXT_COLOR),
        Call::Text("Time: 001.50s".into(), 4, 30, DEBUG_TEXT_COLOR),
        Call::Text("Player Pos:   15,  15".into(), 4, 44, DEBUG_TEXT_COLOR),
    ];
    assert_eq!(calls(&camera), expected.as_slice());
}

#[test]
fn overlays_off_skips_collision_rects_and_text() {
    let mut camera = recording_camera(100, 100);
    let terrain = [Rect::new(0.0, 0.0, 10.0, 10.0)];
    let platforms = [Rect::new(0.0, 20.0, 10.0, 2.0)];
    let player = player_at(40.0, 40.0);
    let frame = GameFrame {
        terrain: &terrain,
        platforms: &platforms,
        player: Some(&player),
        ..GameFrame::default()
    };

    camera.draw_frame(&frame).unwrap();

    assert_eq!(
        calls(&camera),
        [
            Call::Clear(CLEAR_COLOR),
            Call::Blit(ScreenRect::new(40, 40, 8, 8), PLAYER_ID),
            Call::Fill(ScreenRect::new(48, 42, 5, 2), WEAPON_COLOR),
        ]
        .as_slice()
    );
}

#[test]
fn overlays_toggle_between_frames_with_same_camera() {
    let mut camera = recording_camera(100, 100);
    let terrain = [Rect::new(0.0, 0.0, 10.0, 10.0)];
    let mut frame = GameFrame {
        terrain: &terrain,
        debug: Some(stats()),
        ..GameFrame::default()
    };
    camera.draw_frame(&frame).unwrap();
    let with_debug = calls(&camera).len();

    frame.debug = None;
    camera.buffer_mut().unwrap().calls.clear();
    camera.draw_frame(&frame).unwrap();
    assert_eq!(calls(&camera), [Call::Clear(CLEAR_COLOR)].as_slice());
    assert!(with_debug > 1);
}

// =============================================================================
// Flash parity
// =============================================================================

#[test]
fn enemy_flash_parity() {
    for flashing in 0..6u32 {
        let mut camera = recording_camera(100, 100);
        let mut enemy = Enemy::new(Rect::new(5.0, 5.0, 10.0, 10.0));
        enemy.flashing = flashing;
        let enemies = [&enemy];
        let frame = GameFrame {
            enemies: &enemies,
            ..GameFrame::default()
        };
        camera.draw_frame(&frame).unwrap();

        let drawn = calls(&camera)
            .iter()
            .any(|c| matches!(c, Call::Fill(_, color) if *color == ENEMY_COLOR));
        assert_eq!(drawn, flashing % 2 == 0, "flashing={}", flashing);
    }
}

#[test]
fn player_weapon_never_blinks() {
    for flashing in [0u32, 1, 2, 3] {
        let mut camera = recording_camera(100, 100);
        let mut player = player_at(10.0, 10.0);
        player.flashing = flashing;
        let frame = GameFrame {
            player: Some(&player),
            ..GameFrame::default()
        };
        camera.draw_frame(&frame).unwrap();

        let calls = calls(&camera);
        let sprite_drawn = calls
            .iter()
            .any(|c| matches!(c, Call::Blit(_, id) if *id == PLAYER_ID));
        assert_eq!(sprite_drawn, flashing % 2 == 0, "flashing={}", flashing);
        assert_eq!(
            calls.last(),
            Some(&Call::Fill(ScreenRect::new(18, 12, 5, 2), WEAPON_COLOR))
        );
    }
}

// =============================================================================
// Transform
// =============================================================================

#[test]
fn fractional_view_is_floored_before_drawing() {
    let mut camera = recording_camera(100, 100);
    camera.view.x = 10.7;
    camera.view.y = 5.3;
    let enemy = Enemy::new(Rect::new(20.0, 20.0, 4.0, 4.0));
    let enemies = [&enemy];
    let frame = GameFrame {
        enemies: &enemies,
        ..GameFrame::default()
    };

    camera.draw_frame(&frame).unwrap();

    assert_eq!((camera.view.x, camera.view.y), (10.0, 5.0));
    assert_eq!(
        calls(&camera)[1],
        Call::Fill(ScreenRect::new(10, 15, 4, 4), ENEMY_COLOR)
    );
}

#[test]
fn sub_pixel_motion_is_pixel_stable() {
    let enemy = Enemy::new(Rect::new(50.0, 50.0, 4.0, 4.0));
    let enemies = [&enemy];
    let frame = GameFrame {
        enemies: &enemies,
        ..GameFrame::default()
    };
    let mut seen = Vec::new();
    for x in [10.0f32, 10.25, 10.5, 10.99] {
        let mut camera = recording_camera(100, 100);
        camera.view.x = x;
        camera.draw_frame(&frame).unwrap();
        seen.push(calls(&camera)[1].clone());
    }
    assert!(seen.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn background_scrolls_opposite_to_camera() {
    let mut camera = recording_camera(320, 240);
    camera.view.x = 100.0;
    camera.view.y = 40.0;
    let background = RgbaImage::from_pixel(640, 480, Rgba::from(BG_ID));
    let frame = GameFrame {
        background: Some(&background),
        ..GameFrame::default()
    };

    camera.draw_frame(&frame).unwrap();

    assert_eq!(
        calls(&camera)[1],
        Call::Blit(ScreenRect::new(-100, -40, 640, 480), BG_ID)
    );
}

#[test]
fn view_is_clamped_into_bounds_every_frame() {
    let bounds = Rect::new(0.0, 0.0, 1000.0, 600.0);
    for (x, y) in [(-50.0, -50.0), (900.0, 500.0), (400.0, 200.0), (2000.0, -1.0)] {
        let mut camera: Camera<RecordingCanvas> = Camera::create().with_bounds(bounds);
        camera.init(320, 240).unwrap();
        camera.view.x = x;
        camera.view.y = y;
        camera.draw_frame(&GameFrame::default()).unwrap();
        assert!(bounds.contains(&camera.view), "{:?}", camera.view);
    }
}

#[test]
fn view_wider_than_bounds_is_pinned_to_origin() {
    let mut camera: Camera<RecordingCanvas> =
        Camera::create().with_bounds(Rect::new(25.0, 0.0, 100.0, 1000.0));
    camera.init(320, 240).unwrap();
    camera.view.x = 300.0;
    camera.draw_frame(&GameFrame::default()).unwrap();
    assert_eq!(camera.view.x, 25.0);
}

// =============================================================================
// Pixels
// =============================================================================

#[test]
fn init_and_identity_fill_on_pixel_buffer() {
    let mut camera: Camera = Camera::create();
    camera.init(320, 240).unwrap();
    assert_eq!(camera.buffer().unwrap().size(), (320, 240));

    camera
        .fill_rect(&Rect::new(0.0, 0.0, 10.0, 10.0), ENEMY_COLOR)
        .unwrap();
    let buffer = camera.buffer().unwrap();
    for (x, y) in [(0, 0), (9, 0), (0, 9), (9, 9)] {
        assert_eq!(buffer.pixel(x, y), Some(ENEMY_COLOR));
    }
    assert_eq!(buffer.pixel(10, 10), Some(Color::TRANSPARENT));
}

#[test]
fn player_is_composited_over_platform_overlay() {
    let mut camera: Camera = Camera::create().with_bounds(Rect::new(0.0, 0.0, 200.0, 200.0));
    camera.init(100, 100).unwrap();

    // below the debug text rows
    let platforms = [Rect::new(10.0, 60.0, 20.0, 20.0)];
    let player = Player::new(
        Rect::new(15.0, 65.0, 8.0, 8.0),
        Rect::new(80.0, 80.0, 4.0, 2.0),
        sprite(PLAYER_ID, 15.0, 65.0, 8.0, 8.0),
    );
    let frame = GameFrame {
        platforms: &platforms,
        player: Some(&player),
        debug: Some(stats()),
        ..GameFrame::default()
    };

    camera.draw_frame(&frame).unwrap();

    let buffer = camera.buffer().unwrap();
    assert_eq!(buffer.pixel(16, 66), Some(PLAYER_ID));
    assert_eq!(buffer.pixel(22, 72), Some(PLAYER_ID));
    assert_eq!(buffer.pixel(28, 78), Some(PLATFORM_COLOR));
    assert_eq!(buffer.pixel(81, 81), Some(WEAPON_COLOR));
    assert_eq!(buffer.pixel(99, 99), Some(CLEAR_COLOR));
}

#[test]
fn transparent_map_shows_overlay_underneath() {
    let mut camera: Camera = Camera::create().with_bounds(Rect::new(0.0, 0.0, 64.0, 64.0));
    camera.init(64, 64).unwrap();

    let terrain = [Rect::new(0.0, 32.0, 64.0, 32.0)];
    let mut map = RgbaImage::new(64, 64);
    for x in 0..32 {
        map.put_pixel(x, 60, Rgba([0, 0, 0, 255]));
    }
    let frame = GameFrame {
        terrain: &terrain,
        background: Some(&map),
        debug: Some(stats()),
        ..GameFrame::default()
    };

    camera.draw_frame(&frame).unwrap();

    let buffer = camera.buffer().unwrap();
    assert_eq!(buffer.pixel(10, 60), Some(Color::BLACK));
    assert_eq!(buffer.pixel(40, 60), Some(TERRAIN_COLOR));
}
