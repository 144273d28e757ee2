//! Scene setup and the demo gameplay loop.
//!
//! A scene is a JSON document describing the world bounds, the static
//! level geometry, the animations to register and the entities to spawn.
//! [`setup`] turns it into ECS state: the [`AnimationDictionary`], an
//! initialized [`Camera`], the generated [`MapImage`] and one entity per
//! target, enemy and the player, each tagged with its [`SpawnOrder`].
//!
//! [`update`] is a tiny stand-in for real gameplay so the headless driver
//! has something moving on screen.

use std::path::Path;

use bevy_ecs::prelude::*;
use image::{Rgba, RgbaImage};
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::collisionrect::CollisionRect;
use crate::components::enemy::Enemy;
use crate::components::player::Player;
use crate::components::rect::Rect;
use crate::components::spawnorder::SpawnOrder;
use crate::components::sprite::Sprite;
use crate::components::target::Target;
use crate::resources::animation::Animation;
use crate::resources::animationdict::{AnimationDictionary, AnimationError};
use crate::resources::camera::{Camera, CameraError};
use crate::resources::color::Color;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::mapimage::MapImage;
use crate::resources::screensize::ScreenSize;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;

/// Horizontal player speed of the demo loop, in world units per second.
const DEMO_PLAYER_SPEED: f32 = 180.0;
/// Frames between two enemies getting hit in the demo loop.
const DEMO_HIT_INTERVAL: u64 = 90;
/// Flash duration after a hit, in frames.
const DEMO_FLASH_FRAMES: u32 = 30;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scene file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Animation(#[from] AnimationError),
    #[error(transparent)]
    Camera(#[from] CameraError),
    #[error("world bounds {0}x{1} are too large for a map image")]
    WorldTooLarge(u32, u32),
}

/// One procedurally generated animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDef {
    pub name: String,
    pub color: Color,
    pub width: u32,
    pub height: u32,
    pub frames: u32,
    #[serde(default = "default_ticks_per_frame")]
    pub ticks_per_frame: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetDef {
    pub rect: Rect,
    #[serde(default)]
    pub animation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyDef {
    pub rect: Rect,
    #[serde(default)]
    pub animation: Option<String>,
    #[serde(default = "default_alive")]
    pub alive: bool,
    #[serde(default)]
    pub flashing: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDef {
    pub body: Rect,
    pub weapon: Rect,
    pub animation: String,
    #[serde(default)]
    pub flashing: u32,
}

/// Complete scene description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneData {
    /// World bounds; also the size of the generated map image.
    pub world: Rect,
    #[serde(default = "default_ground_color")]
    pub ground_color: Color,
    #[serde(default)]
    pub animations: Vec<AnimationDef>,
    #[serde(default)]
    pub terrain: Vec<Rect>,
    #[serde(default)]
    pub platforms: Vec<Rect>,
    #[serde(default)]
    pub targets: Vec<TargetDef>,
    #[serde(default)]
    pub enemies: Vec<EnemyDef>,
    pub player: PlayerDef,
}

fn default_ticks_per_frame() -> u32 {
    8
}

fn default_alive() -> bool {
    true
}

fn default_ground_color() -> Color {
    Color(0x556B2FFF)
}

impl SceneData {
    /// Loads a scene from a JSON file at the specified path.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let file_content = std::fs::read_to_string(path)?;
        let scene: SceneData = serde_json::from_str(&file_content)?;
        Ok(scene)
    }

    /// Built-in scene: a long strip of ground with a few platforms, targets
    /// and enemies.
    pub fn demo() -> Self {
        let anim = |name: &str, color: u32, w: u32, h: u32, frames: u32| AnimationDef {
            name: name.to_string(),
            color: Color(color),
            width: w,
            height: h,
            frames,
            ticks_per_frame: default_ticks_per_frame(),
        };
        SceneData {
            world: Rect::new(0.0, 0.0, 2000.0, 480.0),
            ground_color: default_ground_color(),
            animations: vec![
                anim("idle", 0x2222DDFF, 16, 24, 2),
                anim("run", 0x3344FFFF, 16, 24, 4),
                anim("target", 0xEEDD22FF, 12, 12, 3),
                anim("crawler", 0xAA2222FF, 20, 12, 2),
            ],
            terrain: vec![
                Rect::new(0.0, 420.0, 2000.0, 60.0),
                Rect::new(700.0, 360.0, 120.0, 60.0),
            ],
            platforms: vec![
                Rect::new(250.0, 330.0, 140.0, 8.0),
                Rect::new(1100.0, 300.0, 180.0, 8.0),
                Rect::new(1500.0, 340.0, 100.0, 8.0),
            ],
            targets: vec![
                TargetDef {
                    rect: Rect::new(300.0, 300.0, 12.0, 12.0),
                    animation: Some("target".into()),
                },
                TargetDef {
                    rect: Rect::new(1180.0, 270.0, 12.0, 12.0),
                    animation: Some("target".into()),
                },
                TargetDef {
                    rect: Rect::new(1700.0, 380.0, 12.0, 12.0),
                    animation: None,
                },
            ],
            enemies: vec![
                EnemyDef {
                    rect: Rect::new(520.0, 408.0, 20.0, 12.0),
                    animation: Some("crawler".into()),
                    alive: true,
                    flashing: 0,
                },
                EnemyDef {
                    rect: Rect::new(960.0, 404.0, 16.0, 16.0),
                    animation: None,
                    alive: true,
                    flashing: 0,
                },
                EnemyDef {
                    rect: Rect::new(1320.0, 404.0, 16.0, 16.0),
                    animation: None,
                    alive: false,
                    flashing: 0,
                },
            ],
            player: PlayerDef {
                body: Rect::new(40.0, 396.0, 16.0, 24.0),
                weapon: Rect::new(56.0, 404.0, 10.0, 3.0),
                animation: "run".into(),
                flashing: 0,
            },
        }
    }
}

/// Paint the map image: terrain opaque in `ground_color`, platforms at half
/// opacity, everything else transparent.
pub fn render_map_image(scene: &SceneData) -> Result<RgbaImage, SceneError> {
    let w = scene.world.right().max(0.0).ceil() as u32;
    let h = scene.world.bottom().max(0.0).ceil() as u32;
    (w as usize)
        .checked_mul(h as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(SceneError::WorldTooLarge(w, h))?;

    let mut image = RgbaImage::new(w, h);
    let ground: Rgba<u8> = scene.ground_color.into();
    let mut ledge = ground;
    ledge[3] /= 2;
    for (rects, px) in [(&scene.terrain, ground), (&scene.platforms, ledge)] {
        for rect in rects {
            if let Some((x0, y0, x1, y1)) = rect.to_screen(0, 0).clip(w, h) {
                for y in y0..y1 {
                    for x in x0..x1 {
                        image.put_pixel(x, y, px);
                    }
                }
            }
        }
    }
    Ok(image)
}

/// Build all ECS state for `scene`.
///
/// Registers every animation, initializes the camera at the configured
/// render size, inserts the display and timing resources, and spawns the
/// level geometry and entities in scene order.
pub fn setup(world: &mut World, scene: &SceneData, config: &GameConfig) -> Result<(), SceneError> {
    let mut dict = AnimationDictionary::new();
    for def in &scene.animations {
        let anim = Animation::pulse(
            def.color,
            def.width,
            def.height,
            def.frames,
            def.ticks_per_frame,
        )?;
        dict.insert(&def.name, anim)?;
    }

    let (render_w, render_h) = config.render_size();
    let mut camera: Camera = Camera::create().with_bounds(scene.world);
    camera.init(render_w, render_h)?;
    world.insert_resource(camera);

    world.insert_resource(MapImage(render_map_image(scene)?));
    world.insert_resource(ScreenSize {
        w: render_w as i32,
        h: render_h as i32,
    });
    world.insert_resource(WindowSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(WorldTime::default());
    world.insert_resource(config.filter);
    if config.debug_overlays {
        world.insert_resource(DebugMode {});
    }

    let mut order = 0u64;
    let mut next_order = || {
        order += 1;
        SpawnOrder(order)
    };

    for rect in &scene.terrain {
        world.spawn((CollisionRect::terrain(*rect), next_order()));
    }
    for rect in &scene.platforms {
        world.spawn((CollisionRect::platform(*rect), next_order()));
    }
    for def in &scene.targets {
        let sprite = match &def.animation {
            Some(name) => Some(Sprite::from_dictionary(&dict, name, def.rect)?),
            None => None,
        };
        world.spawn((Target { sprite }, next_order()));
    }
    for def in &scene.enemies {
        let mut enemy = Enemy::new(def.rect);
        if let Some(name) = &def.animation {
            enemy = enemy.with_sprite(Sprite::from_dictionary(&dict, name, def.rect)?);
        }
        enemy.alive = def.alive;
        enemy.flashing = def.flashing;
        world.spawn((enemy, next_order()));
    }

    let p = &scene.player;
    let mut player = Player::new(
        p.body,
        p.weapon,
        Sprite::from_dictionary(&dict, &p.animation, p.body)?,
    );
    player.flashing = p.flashing;
    world.spawn((player, next_order()));

    info!(
        "Scene ready: {} animations, {} terrain, {} platforms, {} targets, {} enemies",
        dict.len(),
        scene.terrain.len(),
        scene.platforms.len(),
        scene.targets.len(),
        scene.enemies.len()
    );
    world.insert_resource(dict);
    Ok(())
}

/// Demo gameplay: walk the player to the right, wrapping at the world
/// edge, count flash timers down and periodically hit an enemy.
pub fn update(
    time: Res<WorldTime>,
    camera: Res<Camera>,
    mut players: Query<&mut Player>,
    mut enemies: Query<(&mut Enemy, &SpawnOrder)>,
) {
    let bounds = camera.bounds;
    for mut player in players.iter_mut() {
        let weapon_dx = player.weapon.x - player.body.x;
        let weapon_dy = player.weapon.y - player.body.y;
        let mut x = player.body.x + DEMO_PLAYER_SPEED * time.delta;
        if x + player.body.w > bounds.right() {
            x = bounds.x;
        }
        player.body.x = x;
        let (bx, by) = (player.body.x, player.body.y);
        player.sprite.set_position(bx, by);
        player.weapon.x = bx + weapon_dx;
        player.weapon.y = by + weapon_dy;
        player.flashing = player.flashing.saturating_sub(1);
    }

    for (mut enemy, _) in enemies.iter_mut() {
        enemy.flashing = enemy.flashing.saturating_sub(1);
    }

    if time.frame_count > 0 && time.frame_count % DEMO_HIT_INTERVAL == 0 {
        let mut alive: Vec<_> = enemies
            .iter_mut()
            .filter(|(e, _)| e.alive)
            .collect();
        alive.sort_by_key(|(_, order)| **order);
        if !alive.is_empty() {
            let i = (time.frame_count / DEMO_HIT_INTERVAL) as usize % alive.len();
            alive[i].0.flashing = DEMO_FLASH_FRAMES;
        }
    }
}
