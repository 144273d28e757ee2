//! Scrolling camera and frame compositor.
//!
//! The [`Camera`] owns a world-space viewport, the world bounds the viewport
//! is kept inside, and the pixel surface a frame is composited onto. All
//! drawing goes through the camera so that every layer shares one
//! world-to-buffer transform: subtract the floored viewport position.
//!
//! [`Camera::draw_frame`] is the per-frame entry point. It composites the
//! layers of a [`GameFrame`] back to front in a fixed order:
//!
//! 1. debug collision overlays (terrain, then platforms)
//! 2. the map image
//! 3. targets
//! 4. enemies
//! 5. the player, then the player's weapon
//! 6. debug text rows
//!
//! Later layers overwrite earlier ones where they overlap.

use bevy_ecs::prelude::Resource;
use image::RgbaImage;
use log::{debug, info};
use smallvec::SmallVec;
use thiserror::Error;

use crate::components::enemy::Enemy;
use crate::components::player::Player;
use crate::components::rect::{Rect, ScreenRect};
use crate::components::sprite::Sprite;
use crate::components::target::Target;
use crate::resources::canvas::Canvas;
use crate::resources::color::Color;
use crate::resources::pixelbuffer::PixelBuffer;

pub const CLEAR_COLOR: Color = Color(0xDDDDDDFF);
pub const TERRAIN_COLOR: Color = Color(0x333366FF);
pub const PLATFORM_COLOR: Color = Color(0x7777AAFF);
pub const ENEMY_COLOR: Color = Color(0xFF0000FF);
pub const WEAPON_COLOR: Color = Color(0xDD9900FF);
pub const DEBUG_TEXT_COLOR: Color = Color::BLACK;

/// Left margin of the debug text rows, in pixels.
pub const DEBUG_TEXT_X: i32 = 4;
/// Top of the first debug text row, in pixels.
pub const DEBUG_TEXT_Y: i32 = 2;
/// Distance between debug text rows, in pixels.
pub const DEBUG_LINE_HEIGHT: i32 = 14;

/// Simulation steps per second used to turn the frame counter into seconds.
pub const STEPS_PER_SECOND: f64 = 60.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    #[error("camera used before init() allocated its buffer")]
    Uninitialized,
    #[error("invalid camera buffer size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Values shown by the debug text overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DebugStats {
    pub window_w: i32,
    pub window_h: i32,
    /// Window-to-render scale factor.
    pub scale: f32,
    /// Simulation frame counter.
    pub step: u64,
}

/// Read-only view of everything drawn in one frame.
///
/// Collections are drawn in slice order. `debug` doubles as the overlay
/// switch: when it is `None` no collision rectangles or text are drawn.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameFrame<'a> {
    pub terrain: &'a [Rect],
    pub platforms: &'a [Rect],
    pub background: Option<&'a RgbaImage>,
    pub targets: &'a [&'a Target],
    pub enemies: &'a [&'a Enemy],
    pub player: Option<&'a Player>,
    pub debug: Option<DebugStats>,
}

/// Scrolling viewport over the game world with its own frame buffer.
#[derive(Resource, Debug)]
pub struct Camera<C: Canvas = PixelBuffer> {
    /// Visible world rectangle. Size is fixed by [`Camera::init`].
    pub view: Rect,
    /// Region the view is kept inside by [`Camera::draw_frame`].
    pub bounds: Rect,
    buffer: Option<C>,
}

impl<C: Canvas> Default for Camera<C> {
    fn default() -> Self {
        Self::create()
    }
}

impl<C: Canvas> Camera<C> {
    /// A camera with zeroed view and bounds and no buffer yet.
    pub fn create() -> Self {
        Camera {
            view: Rect::default(),
            bounds: Rect::default(),
            buffer: None,
        }
    }

    /// Set the viewport size and allocate a buffer of exactly
    /// `width × height` pixels. Calling it again resizes.
    pub fn init(&mut self, width: u32, height: u32) -> Result<(), CameraError> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(CameraError::InvalidSize { width, height })?;

        self.view.w = width as f32;
        self.view.h = height as f32;
        self.buffer = Some(C::with_size(width, height));
        info!("Camera initialized with a {}x{} buffer", width, height);
        Ok(())
    }

    /// Release the buffer and everything else the camera owns.
    pub fn destroy(self) {
        if let Some(buffer) = &self.buffer {
            let (w, h) = buffer.size();
            debug!("Camera destroyed, releasing {}x{} buffer", w, h);
        }
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn buffer(&self) -> Option<&C> {
        self.buffer.as_ref()
    }

    pub fn buffer_mut(&mut self) -> Option<&mut C> {
        self.buffer.as_mut()
    }

    /// Integer world-to-buffer offset: the floored view position.
    pub fn offset(&self) -> (i32, i32) {
        (self.view.x.floor() as i32, self.view.y.floor() as i32)
    }

    /// Translate a world rectangle into buffer space.
    pub fn to_screen(&self, rect: &Rect) -> ScreenRect {
        let (ox, oy) = self.offset();
        rect.to_screen(ox, oy)
    }

    /// Center the view on a world point. Clamping happens at draw time.
    pub fn center_on(&mut self, x: f32, y: f32) {
        self.view.x = x - self.view.w / 2.0;
        self.view.y = y - self.view.h / 2.0;
    }

    fn canvas(&mut self) -> Result<&mut C, CameraError> {
        self.buffer.as_mut().ok_or(CameraError::Uninitialized)
    }

    /// Fill a world-space rectangle with a flat color.
    pub fn fill_rect(&mut self, rect: &Rect, color: Color) -> Result<(), CameraError> {
        let dest = self.to_screen(rect);
        self.canvas()?.fill_rect(dest, color);
        Ok(())
    }

    /// Draw the sprite's current animation frame into its rectangle.
    pub fn draw_sprite(&mut self, sprite: &Sprite) -> Result<(), CameraError> {
        let dest = self.to_screen(&sprite.rect);
        self.canvas()?.blit(sprite.anim.frame(sprite.step), dest);
        Ok(())
    }

    /// Draw a world-sized image whose origin is the world origin.
    pub fn draw_surface(&mut self, image: &RgbaImage) -> Result<(), CameraError> {
        let (ox, oy) = self.offset();
        let (w, h) = image.dimensions();
        let dest = ScreenRect::new(ox.saturating_neg(), oy.saturating_neg(), w, h);
        self.canvas()?.blit(image, dest);
        Ok(())
    }

    /// Composite one whole frame.
    ///
    /// Fails without touching the buffer when the camera has not been
    /// initialized.
    pub fn draw_frame(&mut self, frame: &GameFrame<'_>) -> Result<(), CameraError> {
        self.canvas()?;

        self.view.floor_position();
        self.canvas()?.clear(CLEAR_COLOR);
        self.view.limit_to(&self.bounds);

        if frame.debug.is_some() {
            self.draw_collision_rects(frame.terrain, TERRAIN_COLOR)?;
            self.draw_collision_rects(frame.platforms, PLATFORM_COLOR)?;
        }

        if let Some(background) = frame.background {
            self.draw_surface(background)?;
        }
        self.draw_targets(frame.targets)?;
        self.draw_enemies(frame.enemies)?;
        if let Some(player) = frame.player {
            self.draw_player(player)?;
        }

        if let Some(stats) = frame.debug {
            self.draw_debug_info(&stats, frame.player)?;
        }
        Ok(())
    }

    fn draw_collision_rects(&mut self, rects: &[Rect], color: Color) -> Result<(), CameraError> {
        for rect in rects {
            self.fill_rect(rect, color)?;
        }
        Ok(())
    }

    fn draw_targets(&mut self, targets: &[&Target]) -> Result<(), CameraError> {
        for sprite in targets.iter().filter_map(|t| t.sprite.as_ref()) {
            self.draw_sprite(sprite)?;
        }
        Ok(())
    }

    fn draw_enemies(&mut self, enemies: &[&Enemy]) -> Result<(), CameraError> {
        for enemy in enemies.iter().filter(|e| e.visible()) {
            match &enemy.sprite {
                Some(sprite) => self.draw_sprite(sprite)?,
                None => self.fill_rect(&enemy.rect, ENEMY_COLOR)?,
            }
        }
        Ok(())
    }

    fn draw_player(&mut self, player: &Player) -> Result<(), CameraError> {
        if player.visible() {
            self.draw_sprite(&player.sprite)?;
        }
        self.fill_rect(&player.weapon, WEAPON_COLOR)
    }

    fn draw_debug_info(
        &mut self,
        stats: &DebugStats,
        player: Option<&Player>,
    ) -> Result<(), CameraError> {
        let canvas = self.canvas()?;
        for (i, line) in debug_lines(stats, player).iter().enumerate() {
            let y = DEBUG_TEXT_Y + i as i32 * DEBUG_LINE_HEIGHT;
            canvas.draw_text(line, DEBUG_TEXT_X, y, DEBUG_TEXT_COLOR);
        }
        Ok(())
    }
}

/// The debug overlay rows, top to bottom.
pub fn debug_lines(stats: &DebugStats, player: Option<&Player>) -> SmallVec<[String; 4]> {
    let mut lines = SmallVec::new();
    lines.push(format!("Win Size: {}x{}", stats.window_w, stats.window_h));
    lines.push(format!("Scale: {:04.2}", stats.scale));
    lines.push(format!(
        "Time: {:06.2}s",
        stats.step as f64 / STEPS_PER_SECOND
    ));
    match player {
        Some(p) => lines.push(format!("Player Pos: {:4.0},{:4.0}", p.body.x, p.body.y)),
        None => lines.push("Player Pos: -".to_string()),
    }
    lines
}
