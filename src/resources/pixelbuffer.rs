//! Software pixel surface.
//!
//! [`PixelBuffer`] owns an [`RgbaImage`] and implements [`Canvas`] on top of
//! it: clipped rectangle fills, alpha-blended nearest-neighbour blits and
//! bitmap-font text. It is the surface the camera composites each frame
//! onto and the artifact handed to whatever presents the frame.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::components::rect::ScreenRect;
use crate::resources::canvas::Canvas;
use crate::resources::color::Color;
use crate::resources::font::BitmapFont;
use crate::resources::videofilter::VideoFilter;

#[derive(Debug, Clone)]
pub struct PixelBuffer {
    image: RgbaImage,
    font: BitmapFont,
}

impl PixelBuffer {
    /// Read access to the composited pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Pixel at buffer-local `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 {
            return None;
        }
        self.image
            .get_pixel_checked(x as u32, y as u32)
            .map(|p| Color::from(*p))
    }

    /// Run a per-pixel filter over the whole surface.
    pub fn apply_filter(&mut self, filter: VideoFilter) {
        if filter == VideoFilter::None {
            return;
        }
        for px in self.image.pixels_mut() {
            *px = filter.apply(*px);
        }
    }

    /// Encode the surface as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        self.image.save_with_format(path, image::ImageFormat::Png)
    }
}

impl Canvas for PixelBuffer {
    fn with_size(width: u32, height: u32) -> Self {
        PixelBuffer {
            image: RgbaImage::new(width, height),
            font: BitmapFont::default(),
        }
    }

    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn clear(&mut self, color: Color) {
        let px: Rgba<u8> = color.into();
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Color) {
        let (w, h) = self.image.dimensions();
        let Some((x0, y0, x1, y1)) = rect.clip(w, h) else {
            return;
        };
        let px: Rgba<u8> = color.into();
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, px);
            }
        }
    }

    fn blit(&mut self, src: &RgbaImage, dest: ScreenRect) {
        let (sw, sh) = src.dimensions();
        if sw == 0 || sh == 0 {
            return;
        }
        let (w, h) = self.image.dimensions();
        let Some((x0, y0, x1, y1)) = dest.clip(w, h) else {
            return;
        };
        for y in y0..y1 {
            let sy = ((i64::from(y) - i64::from(dest.y)) * i64::from(sh) / i64::from(dest.h)) as u32;
            for x in x0..x1 {
                let sx =
                    ((i64::from(x) - i64::from(dest.x)) * i64::from(sw) / i64::from(dest.w)) as u32;
                let s = *src.get_pixel(sx, sy);
                let d = self.image.get_pixel_mut(x, y);
                *d = blend(s, *d);
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        let font = self.font;
        let s = font.scale;
        font.rasterize(text, |px, py| {
            self.fill_rect(ScreenRect::new(x + px, y + py, s, s), color);
        });
    }
}

/// Source-over blend of `src` onto `dst`.
fn blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = u32::from(src[3]);
    match sa {
        0 => dst,
        255 => src,
        _ => {
            let inv = 255 - sa;
            let da = u32::from(dst[3]);
            let out_a = sa + da * inv / 255;
            let mut out = [0u8; 4];
            for i in 0..3 {
                let c = (u32::from(src[i]) * sa + u32::from(dst[i]) * inv) / 255;
                out[i] = c as u8;
            }
            out[3] = out_a as u8;
            Rgba(out)
        }
    }
}
