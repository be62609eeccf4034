//! Biome classification table.
//!
//! Each biome selects pixels by optional open altitude and temperature
//! bounds (strict comparisons; `None` means unbounded). Biomes are applied
//! in table order and later matches overwrite earlier ones, so broad biomes
//! (ocean, forest) come first and specific overlays (ice caps, snow peaks)
//! last.

use planetgen_core::color::Srgb;
use planetgen_core::error::NoiseError;
use serde::Serialize;

/// One biome: a color, its altitude/temperature selection bounds, and the
/// strength of the per-pixel shade modulation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Biome {
    pub name: &'static str,
    /// Base color as a hex string (parsed on demand via [`Biome::color`]).
    pub color_hex: &'static str,
    /// Match only above this altitude (meters), exclusive.
    pub min_alti: Option<f64>,
    /// Match only below this altitude (meters), exclusive.
    pub max_alti: Option<f64>,
    /// Match only above this temperature (°C), exclusive.
    pub min_temp: Option<f64>,
    /// Match only below this temperature (°C), exclusive.
    pub max_temp: Option<f64>,
    /// Shade modulation strength in [0, 1]; 0 is flat color.
    pub shade: f64,
}

impl Biome {
    /// Parses this biome's base color.
    pub fn color(&self) -> Result<Srgb, NoiseError> {
        Srgb::from_hex(self.color_hex)
    }

    /// Whether a pixel with the given altitude and temperature belongs to
    /// this biome. All bounds are strict and optional.
    pub fn matches(&self, altitude: f64, temperature: f64) -> bool {
        self.min_alti.is_none_or(|b| altitude > b)
            && self.max_alti.is_none_or(|b| altitude < b)
            && self.min_temp.is_none_or(|b| temperature > b)
            && self.max_temp.is_none_or(|b| temperature < b)
    }
}

/// Altitude and temperature extremes of an earth-like planet.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlanetExtremes {
    pub min_alti: f64,
    pub max_alti: f64,
    pub min_temp: f64,
    pub max_temp: f64,
}

/// Earth-like extremes: -10 km trenches, 8 km peaks, -40 to 35 °C.
pub const EARTH: PlanetExtremes = PlanetExtremes {
    min_alti: -10_000.0,
    max_alti: 8_000.0,
    min_temp: -40.0,
    max_temp: 35.0,
};

/// The earth-like biome table, in application order.
pub const BIOMES: &[Biome] = &[
    Biome {
        name: "ocean",
        color_hex: "#22344B",
        min_alti: None,
        max_alti: Some(0.0),
        min_temp: None,
        max_temp: None,
        shade: 0.9,
    },
    Biome {
        name: "deep_ocean",
        color_hex: "#182636",
        min_alti: None,
        max_alti: Some(-2000.0),
        min_temp: None,
        max_temp: None,
        shade: 0.9,
    },
    Biome {
        name: "ice_ocean",
        color_hex: "#b4b4ff",
        min_alti: Some(-1000.0),
        max_alti: Some(0.0),
        min_temp: None,
        max_temp: Some(0.0),
        shade: 0.6,
    },
    Biome {
        name: "forest",
        color_hex: "#385339",
        min_alti: Some(0.0),
        max_alti: None,
        min_temp: None,
        max_temp: None,
        shade: 0.7,
    },
    Biome {
        name: "mountain",
        color_hex: "#726147",
        min_alti: Some(3000.0),
        max_alti: None,
        min_temp: None,
        max_temp: None,
        shade: 0.6,
    },
    Biome {
        name: "mountain_ice",
        color_hex: "#ffffff",
        min_alti: Some(5000.0),
        max_alti: None,
        min_temp: None,
        max_temp: None,
        shade: 0.3,
    },
    Biome {
        name: "ice",
        color_hex: "#ffffff",
        min_alti: Some(0.0),
        max_alti: None,
        min_temp: None,
        max_temp: Some(-10.0),
        shade: 0.3,
    },
];
