//! 8-bit sRGB color
//!
//! The engine's working representation. Hex strings are the exchange
//! format: parsing accepts `#rrggbb`, `rrggbb`, and the 3-digit shorthand
//! (each nibble duplicated); formatting always emits lowercase `#rrggbb`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ColorError, Hsv};

/// sRGB color with 8-bit channels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string.
    ///
    /// Normalizes before parsing: surrounding whitespace is dropped, a
    /// leading `#` is optional, and `abc` expands to `aabbcc`. Anything
    /// that does not end up as exactly six hex digits is rejected.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = normalize_hex(hex).ok_or_else(|| ColorError::InvalidColor(hex.to_string()))?;
        let n = u32::from_str_radix(&digits, 16)
            .map_err(|_| ColorError::InvalidColor(hex.to_string()))?;
        Ok(Self::new(
            ((n >> 16) & 0xFF) as u8,
            ((n >> 8) & 0xFF) as u8,
            (n & 0xFF) as u8,
        ))
    }

    /// Format as lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel linear interpolation in RGB space.
    ///
    /// Matches canvas/CSS gradient rendering semantics; for perceptual
    /// blending convert to [`Lab`](crate::Lab) instead.
    pub fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |x: u8, y: u8| -> u8 {
            let v = x as f32 + (y as f32 - x as f32) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            channel(a.r, b.r),
            channel(a.g, b.g),
            channel(a.b, b.b),
        )
    }

    /// Convert to HSV
    pub fn to_hsv(self) -> Hsv {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { delta / max };

        Hsv { h, s, v: max }
    }

    /// Rotate hue by `degrees`, preserving saturation and value.
    ///
    /// Degrees may be any finite value; the hue wraps into `[0, 360)`.
    pub fn rotate_hue(self, degrees: f32) -> Rgb {
        let hsv = self.to_hsv();
        Hsv {
            h: hsv.h + degrees,
            ..hsv
        }
        .to_rgb()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Hue-rotate a hex string, round-tripping through [`Rgb`]
pub fn rotate_hue_hex(hex: &str, degrees: f32) -> Result<String, ColorError> {
    Ok(Rgb::from_hex(hex)?.rotate_hue(degrees).to_hex())
}

fn normalize_hex(hex: &str) -> Option<String> {
    let trimmed = hex.trim();
    let stripped = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let expanded: String = match stripped.len() {
        3 => stripped.chars().flat_map(|c| [c, c]).collect(),
        6 => stripped.to_string(),
        _ => return None,
    };
    expanded
        .chars()
        .all(|c| c.is_ascii_hexdigit())
        .then_some(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Rgb::from_hex("#63B4E7").unwrap(), Rgb::new(0x63, 0xB4, 0xE7));
        assert_eq!(Rgb::from_hex("000518").unwrap(), Rgb::new(0, 5, 0x18));
    }

    #[test]
    fn expands_three_digit_hex() {
        assert_eq!(Rgb::from_hex("#f0a").unwrap(), Rgb::new(0xFF, 0x00, 0xAA));
        assert_eq!(Rgb::from_hex("abc").unwrap(), Rgb::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#", "#12345", "#1234567", "##aabbcc", "not a color", "#ggggaa"] {
            assert!(matches!(
                Rgb::from_hex(bad),
                Err(ColorError::InvalidColor(_))
            ));
        }
    }

    #[test]
    fn hex_round_trip_normalizes() {
        // Same 6-digit value regardless of case or '#' prefix
        for input in ["#63b4e7", "#63B4E7", "63B4E7", "63b4e7"] {
            assert_eq!(Rgb::from_hex(input).unwrap().to_hex(), "#63b4e7");
        }
    }

    #[test]
    fn lerp_midpoint_is_mid_gray() {
        assert_eq!(Rgb::lerp(Rgb::BLACK, Rgb::WHITE, 0.5), Rgb::GRAY);
    }

    #[test]
    fn lerp_clamps_t() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 50);
        assert_eq!(Rgb::lerp(a, b, -1.0), a);
        assert_eq!(Rgb::lerp(a, b, 2.0), b);
    }

    #[test]
    fn hsv_round_trip_within_tolerance() {
        let colors = [
            Rgb::new(0, 5, 24),
            Rgb::new(99, 180, 231),
            Rgb::new(255, 107, 53),
            Rgb::new(26, 77, 46),
            Rgb::GRAY,
            Rgb::BLACK,
            Rgb::WHITE,
        ];
        for c in colors {
            let back = c.to_hsv().to_rgb();
            assert!((back.r as i16 - c.r as i16).abs() <= 1, "{c} -> {back}");
            assert!((back.g as i16 - c.g as i16).abs() <= 1, "{c} -> {back}");
            assert!((back.b as i16 - c.b as i16).abs() <= 1, "{c} -> {back}");
        }
    }

    #[test]
    fn full_hue_rotation_is_identity() {
        for hex in ["#ff0000", "#00ff00", "#0000ff", "#ff00ff", "#808080", "#ffffff"] {
            assert_eq!(rotate_hue_hex(hex, 360.0).unwrap(), hex);
        }
    }

    #[test]
    fn hue_rotation_preserves_saturation_and_value() {
        let c = Rgb::new(200, 60, 30);
        let before = c.to_hsv();
        let after = c.rotate_hue(90.0).to_hsv();
        assert!((before.s - after.s).abs() < 0.02);
        assert!((before.v - after.v).abs() < 0.02);
    }

    #[test]
    fn serde_round_trips_as_hex_string() {
        let c = Rgb::new(0x63, 0xB4, 0xE7);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#63b4e7\"");
        assert_eq!(serde_json::from_str::<Rgb>(&json).unwrap(), c);
        assert!(serde_json::from_str::<Rgb>("\"#123\"").is_ok());
        assert!(serde_json::from_str::<Rgb>("\"#12345g\"").is_err());
    }
}
