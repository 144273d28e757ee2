//! Post-composite video filter selection.
//!
//! A [`VideoFilter`] is a per-pixel color transform run over the finished
//! frame. Insert it as a resource to have the render system apply it after
//! every frame; the alpha channel is always preserved.

use std::str::FromStr;

use bevy_ecs::prelude::Resource;
use image::Rgba;

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VideoFilter {
    #[default]
    None,
    /// Invert every color channel.
    Negative,
    /// Rec. 601 luma.
    Grayscale,
    /// HSL lightness, `(max + min) / 2`.
    HslGrayscale,
}

impl VideoFilter {
    pub fn apply(&self, px: Rgba<u8>) -> Rgba<u8> {
        let [r, g, b, a] = px.0;
        match self {
            VideoFilter::None => px,
            VideoFilter::Negative => Rgba([255 - r, 255 - g, 255 - b, a]),
            VideoFilter::Grayscale => {
                let l = (299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000;
                let l = l as u8;
                Rgba([l, l, l, a])
            }
            VideoFilter::HslGrayscale => {
                let max = r.max(g).max(b);
                let min = r.min(g).min(b);
                let l = ((u16::from(max) + u16::from(min)) / 2) as u8;
                Rgba([l, l, l, a])
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VideoFilter::None => "none",
            VideoFilter::Negative => "negative",
            VideoFilter::Grayscale => "grayscale",
            VideoFilter::HslGrayscale => "hsl_grayscale",
        }
    }
}

impl FromStr for VideoFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(VideoFilter::None),
            "negative" => Ok(VideoFilter::Negative),
            "grayscale" => Ok(VideoFilter::Grayscale),
            "hsl_grayscale" | "hsl-grayscale" => Ok(VideoFilter::HslGrayscale),
            other => Err(format!("Unknown video filter '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_keeps_alpha() {
        let out = VideoFilter::Negative.apply(Rgba([0, 100, 255, 77]));
        assert_eq!(out.0, [255, 155, 0, 77]);
    }

    #[test]
    fn test_grayscale_white_and_black() {
        assert_eq!(VideoFilter::Grayscale.apply(Rgba([255, 255, 255, 255])).0, [255; 4]);
        assert_eq!(
            VideoFilter::Grayscale.apply(Rgba([0, 0, 0, 10])).0,
            [0, 0, 0, 10]
        );
    }

    #[test]
    fn test_grayscale_weights_green_most() {
        let g = VideoFilter::Grayscale.apply(Rgba([0, 255, 0, 255]))[0];
        let b = VideoFilter::Grayscale.apply(Rgba([0, 0, 255, 255]))[0];
        assert!(g > b);
    }

    #[test]
    fn test_hsl_grayscale_is_midpoint() {
        let out = VideoFilter::HslGrayscale.apply(Rgba([200, 100, 0, 255]));
        assert_eq!(out.0, [100, 100, 100, 255]);
    }

    #[test]
    fn test_parse_round_trip_names() {
        for f in [
            VideoFilter::None,
            VideoFilter::Negative,
            VideoFilter::Grayscale,
            VideoFilter::HslGrayscale,
        ] {
            assert_eq!(f.name().parse::<VideoFilter>(), Ok(f));
        }
        assert!("sepia".parse::<VideoFilter>().is_err());
    }
}
