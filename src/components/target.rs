use bevy_ecs::prelude::Component;

use crate::components::sprite::Sprite;

/// A shootable target. Targets without a sprite are not drawn.
#[derive(Component, Clone, Debug, Default)]
pub struct Target {
    pub sprite: Option<Sprite>,
}
