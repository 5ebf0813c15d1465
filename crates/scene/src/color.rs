//! Opaque sRGB color value with hex and HSL views
//!
//! Voxels carry a [`Color`]; equality and store invariants never look at the
//! representation. The hex view exists for persistence and the generation
//! wire format, the HSL view only for the preview recolor kernel.

use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An sRGB color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color decomposed into hue/saturation/lightness
///
/// `h` is in degrees (0..360), `s` and `l` are normalized (0..1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// Create a color from raw channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string
    ///
    /// Accepts `#rrggbb`, `rrggbb` and the short `#rgb` form,
    /// case-insensitive.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let hex = s.trim().trim_start_matches('#');
        // Length is in bytes; non-ASCII input must fail as invalid, not
        // panic on a char boundary below.
        if !hex.is_ascii() {
            return Err(Error::InvalidColor(s.to_string()));
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16);
                let g = u8::from_str_radix(&hex[2..4], 16);
                let b = u8::from_str_radix(&hex[4..6], 16);
                match (r, g, b) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
                    _ => Err(Error::InvalidColor(s.to_string())),
                }
            }
            3 => {
                let mut channels = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let nibble = c
                        .to_digit(16)
                        .ok_or_else(|| Error::InvalidColor(s.to_string()))?
                        as u8;
                    channels[i] = nibble << 4 | nibble;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }

    /// Format as a lowercase `#rrggbb` string
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Decompose into hue/saturation/lightness
    pub fn to_hsl(&self) -> Hsl {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl { h: h * 60.0, s, l }
    }

    /// Compose a color from hue/saturation/lightness
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = hsl.h.rem_euclid(360.0) / 360.0;
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Self::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let to_channel = |t: f32| -> u8 {
            let t = t.rem_euclid(1.0);
            let v = if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            };
            (v * 255.0).round() as u8
        };

        Self::new(
            to_channel(h + 1.0 / 3.0),
            to_channel(h),
            to_channel(h - 1.0 / 3.0),
        )
    }

    /// Shift this color toward a target palette color
    ///
    /// Takes the target's hue, keeps this color's lightness, and uses
    /// `min(target saturation, own saturation * 1.2)` so shading detail
    /// survives the palette change without exceeding the target's intensity.
    /// Pure: the same inputs always produce the same output.
    pub fn recolored_toward(&self, target: Color) -> Color {
        let own = self.to_hsl();
        let want = target.to_hsl();
        Color::from_hsl(Hsl {
            h: want.h,
            s: want.s.min(own.s * 1.2),
            l: own.l,
        })
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Persisted and wire formats carry colors as hex strings.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        for hex in ["#ff0000", "#00ff00", "#0000ff", "#123456", "#ffffff", "#000000"] {
            let color = Color::from_hex(hex).unwrap();
            assert_eq!(color.to_hex(), hex);
        }
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(Color::from_hex("FF8800").unwrap(), Color::new(255, 136, 0));
        assert_eq!(Color::from_hex("#f80").unwrap(), Color::new(255, 136, 0));
        assert_eq!(Color::from_hex(" #ff8800 ").unwrap(), Color::new(255, 136, 0));
    }

    #[test]
    fn test_invalid_hex() {
        for bad in ["", "#ff", "#ggggg0", "#12345", "not a color"] {
            assert!(Color::from_hex(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_non_ascii_input_is_invalid() {
        // "€abc" is six bytes; byte-slicing it would split the euro sign.
        for bad in ["€abc", "#€abc", "€€", "ffff€"] {
            assert_eq!(
                Color::from_hex(bad),
                Err(Error::InvalidColor(bad.to_string())),
                "{bad:?} must be rejected, not panic"
            );
        }
    }

    #[test]
    fn test_hsl_primaries() {
        let red = Color::new(255, 0, 0).to_hsl();
        assert!((red.h - 0.0).abs() < 0.01);
        assert!((red.s - 1.0).abs() < 0.01);
        assert!((red.l - 0.5).abs() < 0.01);

        let green = Color::new(0, 255, 0).to_hsl();
        assert!((green.h - 120.0).abs() < 0.01);

        let blue = Color::new(0, 0, 255).to_hsl();
        assert!((blue.h - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_hsl_grayscale() {
        let gray = Color::new(128, 128, 128).to_hsl();
        assert_eq!(gray.s, 0.0);
        let back = Color::from_hsl(gray);
        assert_eq!(back, Color::new(128, 128, 128));
    }

    #[test]
    fn test_hsl_roundtrip_close() {
        // 8-bit quantization allows off-by-one per channel
        for color in [
            Color::new(255, 0, 0),
            Color::new(12, 200, 99),
            Color::new(240, 240, 17),
            Color::new(1, 2, 3),
        ] {
            let back = Color::from_hsl(color.to_hsl());
            assert!((back.r as i32 - color.r as i32).abs() <= 1);
            assert!((back.g as i32 - color.g as i32).abs() <= 1);
            assert!((back.b as i32 - color.b as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_recolor_takes_target_hue() {
        let voxel = Color::from_hex("#804040").unwrap(); // desaturated red
        let target = Color::from_hex("#0000ff").unwrap(); // pure blue
        let out = voxel.recolored_toward(target).to_hsl();
        assert!((out.h - 240.0).abs() < 2.0);
    }

    #[test]
    fn test_recolor_keeps_lightness() {
        let voxel = Color::from_hex("#202020").unwrap();
        let target = Color::from_hex("#ff0000").unwrap();
        let own_l = voxel.to_hsl().l;
        let out_l = voxel.recolored_toward(target).to_hsl().l;
        assert!((out_l - own_l).abs() < 0.02);
    }

    #[test]
    fn test_recolor_saturation_capped_by_target() {
        let voxel = Color::from_hex("#ff0000").unwrap(); // s = 1.0
        let target = Color::from_hsl(Hsl { h: 120.0, s: 0.4, l: 0.5 });
        let out = voxel.recolored_toward(target).to_hsl();
        assert!(out.s <= 0.41, "saturation {} exceeds target cap", out.s);
    }

    #[test]
    fn test_recolor_is_pure() {
        let voxel = Color::from_hex("#37b24d").unwrap();
        let target = Color::from_hex("#b23780").unwrap();
        assert_eq!(
            voxel.recolored_toward(target),
            voxel.recolored_toward(target)
        );
    }

    #[test]
    fn test_serde_as_hex_string() {
        let color = Color::from_hex("#12ab34").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#12ab34\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }
}
