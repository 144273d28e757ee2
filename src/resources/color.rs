//! Packed RGBA color.
//!
//! Colors are stored as `0xRRGGBBAA`, the same layout used by the palette
//! constants and by scene files (as hex strings).

use image::Rgba;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000FF);
    pub const WHITE: Color = Color(0xFFFFFFFF);
    pub const TRANSPARENT: Color = Color(0x00000000);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(u32::from_be_bytes([r, g, b, a]))
    }

    /// Parse `RRGGBBAA` or `RRGGBB` (opaque), with an optional leading `#`.
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let digits = s.trim().trim_start_matches('#');
        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| format!("Invalid color '{}': {}", s, e))?;
        match digits.len() {
            8 => Ok(Color(value)),
            6 => Ok(Color((value << 8) | 0xFF)),
            _ => Err(format!("Invalid color '{}': expected RRGGBB or RRGGBBAA", s)),
        }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba(c.0.to_be_bytes())
    }
}

impl From<Rgba<u8>> for Color {
    fn from(p: Rgba<u8>) -> Self {
        Color(u32::from_be_bytes(p.0))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        format!("{:08X}", c.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rgba() {
        assert_eq!(Color::from_hex("DDDDDDFF"), Ok(Color(0xDDDDDDFF)));
        assert_eq!(Color::from_hex("#ff000080"), Ok(Color(0xFF000080)));
    }

    #[test]
    fn test_from_hex_rgb_is_opaque() {
        assert_eq!(Color::from_hex("336699"), Ok(Color(0x336699FF)));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("nope").is_err());
        assert!(Color::from_hex("12345").is_err());
    }

    #[test]
    fn test_rgba_conversion() {
        let px: Rgba<u8> = Color(0x11223344).into();
        assert_eq!(px.0, [0x11, 0x22, 0x33, 0x44]);
        assert_eq!(Color::from(px), Color::rgba(0x11, 0x22, 0x33, 0x44));
    }

    #[test]
    fn test_serde_hex_string() {
        let c: Color = serde_json::from_str("\"7777AAFF\"").unwrap();
        assert_eq!(c, Color(0x7777AAFF));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"7777AAFF\"");
    }
}
