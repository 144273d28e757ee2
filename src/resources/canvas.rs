//! Drawing target abstraction.
//!
//! The camera never touches pixels directly: every layer it composites goes
//! through a [`Canvas`]. [`PixelBuffer`](crate::resources::pixelbuffer::PixelBuffer)
//! is the real software surface; tests plug in canvases that record calls.

use image::RgbaImage;

use crate::components::rect::ScreenRect;
use crate::resources::color::Color;

/// A 2D surface the camera composites a frame onto.
///
/// All rectangles are buffer-local and may be partly or completely outside
/// the surface. Implementations must clip silently.
pub trait Canvas: Send + Sync + 'static {
    /// Allocate a surface of exactly `width × height` pixels.
    fn with_size(width: u32, height: u32) -> Self
    where
        Self: Sized;

    /// Surface size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Fill `rect` with `color`, replacing what was there.
    fn fill_rect(&mut self, rect: ScreenRect, color: Color);

    /// Draw `image` stretched into `dest`, blending by source alpha.
    fn blit(&mut self, image: &RgbaImage, dest: ScreenRect);

    /// Draw a line of text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color);
}
