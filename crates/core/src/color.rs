//! sRGB color with hex parsing, used by the biome table.
//!
//! Biome colors are authored as hex strings and multiplied by a per-pixel
//! shade factor before being quantized to texture bytes.

use crate::error::NoiseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`. The hex round-trip has 8-bit
/// quantization, which is fine since biome colors are authored in hex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    /// Parses a hex color string like "#385339" or "385339" (case insensitive).
    ///
    /// Returns `NoiseError::InvalidColor` if the input is not a 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, NoiseError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(NoiseError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let component = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| NoiseError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Srgb {
            r: component(0..2, "red")? as f64 / 255.0,
            g: component(2..4, "green")? as f64 / 255.0,
            b: component(4..6, "blue")? as f64 / 255.0,
        })
    }

    /// Formats the color as `"#rrggbb"`, quantizing to 8 bits with rounding.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Quantizes to 8-bit channels, clamping each component to [0, 1] first.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Scales all components by `factor`, clamping the result to [0, 1].
    ///
    /// This is the biome shade modulation step (the original clamps to the
    /// byte range after multiplying).
    pub fn shaded(self, factor: f64) -> Srgb {
        Srgb {
            r: (self.r * factor).clamp(0.0, 1.0),
            g: (self.g * factor).clamp(0.0, 1.0),
            b: (self.b * factor).clamp(0.0, 1.0),
        }
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
