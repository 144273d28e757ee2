//! World-space and buffer-space rectangles.
//!
//! [`Rect`] is the floating point rectangle used by every game-state entity.
//! [`ScreenRect`] is its integer counterpart after the camera has translated
//! it into buffer-local pixels.

use serde::{Deserialize, Serialize};

/// Axis-aligned world-space rectangle. `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Create a rectangle. Negative extents are clamped to zero.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Returns `true` when `other` lies completely inside `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Round the position down to whole world units. Size is untouched.
    pub fn floor_position(&mut self) {
        self.x = self.x.floor();
        self.y = self.y.floor();
    }

    /// Shift `self` so it lies inside `bounds`.
    ///
    /// Each axis is handled on its own. When `bounds` is at least as large
    /// as `self` on an axis the position is clamped between the two edges;
    /// when it is smaller the position is pinned to the bounds origin.
    pub fn limit_to(&mut self, bounds: &Rect) {
        self.x = limit_axis(self.x, self.w, bounds.x, bounds.w);
        self.y = limit_axis(self.y, self.h, bounds.y, bounds.h);
    }

    /// Translate into buffer space given an integer camera offset.
    ///
    /// Positions saturate at the `i32` range, which keeps far-away
    /// rectangles far away so canvases clip them.
    pub fn to_screen(&self, offset_x: i32, offset_y: i32) -> ScreenRect {
        ScreenRect {
            x: (self.x.floor() as i32).saturating_sub(offset_x),
            y: (self.y.floor() as i32).saturating_sub(offset_y),
            w: self.w as u32,
            h: self.h as u32,
        }
    }
}

fn limit_axis(pos: f32, len: f32, min: f32, extent: f32) -> f32 {
    if extent < len {
        return min;
    }
    pos.clamp(min, min + extent - len)
}

/// Integer rectangle in buffer-local pixel coordinates.
///
/// May lie partly or completely outside the buffer; canvases clip on write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl ScreenRect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        ScreenRect { x, y, w, h }
    }

    /// Intersect with a `width × height` surface anchored at the origin.
    ///
    /// Returns the clipped pixel span as `(x0, y0, x1, y1)` with exclusive
    /// upper bounds, or `None` if nothing remains.
    pub fn clip(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = i64::from(self.x).max(0);
        let y0 = i64::from(self.y).max(0);
        let x1 = (i64::from(self.x) + i64::from(self.w)).min(i64::from(width));
        let y1 = (i64::from(self.y) + i64::from(self.h)).min(i64::from(height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}
