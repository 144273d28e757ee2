use bevy_ecs::prelude::Component;

use crate::components::rect::Rect;
use crate::components::sprite::Sprite;

/// An enemy entity.
///
/// Dead enemies are not drawn. While `flashing` is odd the enemy is skipped
/// for that frame, which makes it blink after taking damage. Enemies without
/// a sprite are drawn as a flat rectangle.
#[derive(Component, Clone, Debug)]
pub struct Enemy {
    pub rect: Rect,
    pub sprite: Option<Sprite>,
    pub alive: bool,
    pub flashing: u32,
}

impl Enemy {
    pub fn new(rect: Rect) -> Self {
        Enemy {
            rect,
            sprite: None,
            alive: true,
            flashing: 0,
        }
    }

    pub fn with_sprite(mut self, sprite: Sprite) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn visible(&self) -> bool {
        self.alive && self.flashing % 2 == 0
    }
}
