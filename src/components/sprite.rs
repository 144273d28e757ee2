//! Sprite: a rectangle showing one animation at a given step.

use std::sync::Arc;

use crate::components::rect::Rect;
use crate::resources::animation::Animation;
use crate::resources::animationdict::{AnimationDictionary, AnimationError};

/// World-space rectangle plus the animation drawn into it.
///
/// `step` is the sprite's own playback counter; the animation turns it into
/// a frame index. Cloning a sprite shares the animation handle.
#[derive(Clone, Debug)]
pub struct Sprite {
    pub rect: Rect,
    pub anim: Arc<Animation>,
    pub step: u32,
}

impl Sprite {
    pub fn new(rect: Rect, anim: Arc<Animation>) -> Self {
        Sprite { rect, anim, step: 0 }
    }

    /// Resolve `name` in `dict` and build a sprite showing it.
    ///
    /// A name that is not registered is reported as
    /// [`AnimationError::NotFound`]; no placeholder animation is substituted.
    pub fn from_dictionary(
        dict: &AnimationDictionary,
        name: &str,
        rect: Rect,
    ) -> Result<Self, AnimationError> {
        Ok(Sprite::new(rect, dict.require(name)?))
    }

    /// Move the sprite so its top-left corner sits at `(x, y)`.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    /// Advance playback by one step.
    pub fn tick(&mut self) {
        self.step = self.step.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::color::Color;

    #[test]
    fn test_from_dictionary_hit_and_miss() {
        let mut dict = AnimationDictionary::new();
        dict.insert("idle", Animation::pulse(Color::WHITE, 4, 4, 2, 1).unwrap())
            .unwrap();

        let sprite = Sprite::from_dictionary(&dict, "idle", Rect::new(1.0, 2.0, 4.0, 4.0)).unwrap();
        assert_eq!(sprite.step, 0);
        assert!(Arc::ptr_eq(&sprite.anim, dict.lookup("idle").unwrap()));

        let err = Sprite::from_dictionary(&dict, "walk", Rect::default()).unwrap_err();
        assert_eq!(err, AnimationError::NotFound("walk".into()));
    }

    #[test]
    fn test_tick_wraps() {
        let anim = Arc::new(Animation::pulse(Color::WHITE, 1, 1, 1, 1).unwrap());
        let mut sprite = Sprite::new(Rect::default(), anim);
        sprite.step = u32::MAX;
        sprite.tick();
        assert_eq!(sprite.step, 0);
    }
}
