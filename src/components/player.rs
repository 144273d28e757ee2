use bevy_ecs::prelude::Component;

use crate::components::rect::Rect;
use crate::components::sprite::Sprite;

/// The player character as the renderer sees it.
///
/// `flashing` counts down while the player is invulnerable after a hit; odd
/// values hide the sprite for that frame. The weapon is never hidden.
#[derive(Component, Clone, Debug)]
pub struct Player {
    pub body: Rect,
    pub weapon: Rect,
    pub sprite: Sprite,
    pub flashing: u32,
}

impl Player {
    pub fn new(body: Rect, weapon: Rect, sprite: Sprite) -> Self {
        Player {
            body,
            weapon,
            sprite,
            flashing: 0,
        }
    }

    /// Whether the sprite is shown this frame.
    pub fn visible(&self) -> bool {
        self.flashing % 2 == 0
    }
}
