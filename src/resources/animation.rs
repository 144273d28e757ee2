//! Animation resource handle.
//!
//! An [`Animation`] is immutable frame imagery plus timing. Sprites hold it
//! behind an `Arc` and pick the frame to show from their own step counter,
//! so one animation can be shared by any number of entities.

use image::{Rgba, RgbaImage};

use crate::resources::animationdict::AnimationError;
use crate::resources::color::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frames: Vec<RgbaImage>,
    /// Steps each frame stays on screen. Always at least 1.
    ticks_per_frame: u32,
    /// Whether playback wraps after the last frame.
    looped: bool,
}

impl Animation {
    /// Build an animation from its frames.
    pub fn new(
        frames: Vec<RgbaImage>,
        ticks_per_frame: u32,
        looped: bool,
    ) -> Result<Self, AnimationError> {
        if frames.is_empty() {
            return Err(AnimationError::NoFrames);
        }
        Ok(Animation {
            frames,
            ticks_per_frame: ticks_per_frame.max(1),
            looped,
        })
    }

    /// Procedural animation: `frame_count` frames of `color`, each frame
    /// carrying a darker marker column that walks left to right.
    pub fn pulse(
        color: Color,
        width: u32,
        height: u32,
        frame_count: u32,
        ticks_per_frame: u32,
    ) -> Result<Self, AnimationError> {
        let base: Rgba<u8> = color.into();
        let [r, g, b, a] = base.0;
        let marker = Rgba([r / 2, g / 2, b / 2, a]);
        let frames = (0..frame_count)
            .map(|i| {
                let mut img = RgbaImage::from_pixel(width, height, base);
                if width > 0 {
                    let col = i * width / frame_count.max(1);
                    for y in 0..height {
                        img.put_pixel(col.min(width - 1), y, marker);
                    }
                }
                img
            })
            .collect();
        Self::new(frames, ticks_per_frame, true)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn ticks_per_frame(&self) -> u32 {
        self.ticks_per_frame
    }

    /// Index of the frame shown at `step`.
    ///
    /// Looped animations wrap; the rest hold their last frame.
    pub fn frame_index(&self, step: u32) -> usize {
        let i = (step / self.ticks_per_frame) as usize;
        if self.looped {
            i % self.frames.len()
        } else {
            i.min(self.frames.len() - 1)
        }
    }

    /// Frame imagery shown at `step`.
    pub fn frame(&self, step: u32) -> &RgbaImage {
        &self.frames[self.frame_index(step)]
    }
}
