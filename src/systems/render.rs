//! Per-frame render system.
//!
//! Extracts a [`GameFrame`] from the ECS world and hands it to the
//! [`Camera`] resource, then runs the configured [`VideoFilter`] over the
//! finished buffer. Collections are sorted by [`SpawnOrder`] so they are
//! drawn in the order they were spawned; entities without one go last.

use bevy_ecs::prelude::*;
use log::{debug, error, warn};

use crate::components::collisionrect::{CollisionKind, CollisionRect};
use crate::components::enemy::Enemy;
use crate::components::player::Player;
use crate::components::rect::Rect;
use crate::components::spawnorder::SpawnOrder;
use crate::components::target::Target;
use crate::resources::camera::{Camera, DebugStats, GameFrame};
use crate::resources::debugmode::DebugMode;
use crate::resources::mapimage::MapImage;
use crate::resources::screensize::ScreenSize;
use crate::resources::videofilter::VideoFilter;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;

/// Exclusive system compositing the current world state into the camera
/// buffer.
///
/// A draw failure (camera not initialized) is logged and the frame is
/// skipped; nothing is half drawn.
pub fn render_system(world: &mut World) {
    if !world.contains_resource::<Camera>() {
        warn!("render_system: no Camera resource, skipping frame");
        return;
    }

    world.resource_scope(|world: &mut World, mut camera: Mut<Camera>| {
        let stats = debug_stats(world);

        let mut geometry_q = world.query::<(&CollisionRect, Option<&SpawnOrder>)>();
        let mut targets_q = world.query::<(&Target, Option<&SpawnOrder>)>();
        let mut enemies_q = world.query::<(&Enemy, Option<&SpawnOrder>)>();
        let mut players_q = world.query::<&Player>();
        let world: &World = world;

        let geometry = in_spawn_order(geometry_q.iter(world));
        let terrain = rects_of_kind(&geometry, CollisionKind::Terrain);
        let platforms = rects_of_kind(&geometry, CollisionKind::Platform);
        let targets = in_spawn_order(targets_q.iter(world));
        let enemies = in_spawn_order(enemies_q.iter(world));

        let mut players = players_q.iter(world);
        let player = players.next();
        if player.is_none() {
            debug!("render_system: no Player entity this frame");
        } else if players.next().is_some() {
            warn!("render_system: more than one Player entity, drawing the first");
        }

        let frame = GameFrame {
            terrain: &terrain,
            platforms: &platforms,
            background: world.get_resource::<MapImage>().map(|m| &m.0),
            targets: &targets,
            enemies: &enemies,
            player,
            debug: stats,
        };

        if let Err(e) = camera.draw_frame(&frame) {
            error!("render_system: frame skipped: {}", e);
            return;
        }

        if let Some(filter) = world.get_resource::<VideoFilter>().copied() {
            if let Some(buffer) = camera.buffer_mut() {
                buffer.apply_filter(filter);
            }
        }
    });
}

/// Overlay values, or `None` when debug mode is off.
fn debug_stats(world: &World) -> Option<DebugStats> {
    if !world.contains_resource::<DebugMode>() {
        return None;
    }
    let screen = world
        .get_resource::<ScreenSize>()
        .copied()
        .unwrap_or(ScreenSize { w: 0, h: 0 });
    let window = world
        .get_resource::<WindowSize>()
        .copied()
        .unwrap_or(WindowSize {
            w: screen.w,
            h: screen.h,
        });
    let step = world
        .get_resource::<WorldTime>()
        .map(|t| t.frame_count)
        .unwrap_or(0);
    Some(DebugStats {
        window_w: window.w,
        window_h: window.h,
        scale: window.scale_for(screen),
        step,
    })
}

fn in_spawn_order<'w, T>(
    items: impl Iterator<Item = (&'w T, Option<&'w SpawnOrder>)>,
) -> Vec<&'w T> {
    let mut items: Vec<_> = items.collect();
    items.sort_by_key(|(_, order)| order.copied().unwrap_or(SpawnOrder(u64::MAX)));
    items.into_iter().map(|(item, _)| item).collect()
}

fn rects_of_kind(geometry: &[&CollisionRect], kind: CollisionKind) -> Vec<Rect> {
    geometry
        .iter()
        .filter(|c| c.kind == kind)
        .map(|c| c.rect)
        .collect()
}
