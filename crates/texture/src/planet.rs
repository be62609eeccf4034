//! Planet texture composition.
//!
//! Derives altitude, temperature, and shade maps from three seeded noise
//! invocations, classifies every pixel against the biome table, and writes
//! the last matching biome's shaded color into an RGB8 buffer. The buffer is
//! the external interface: a renderer wraps it onto a sphere, this crate
//! never touches a GPU.

use crate::biome::{BIOMES, EARTH};
use crate::maps;
use planetgen_core::color::Srgb;
use planetgen_core::error::NoiseError;
use planetgen_perlin::OctaveParams;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};

/// Default texture edge length in pixels.
const DEFAULT_SIZE: usize = 1024;
/// Default base lattice resolution (cells per axis).
const DEFAULT_RES: usize = 8;
/// Default octave count for altitude/temperature noise.
const DEFAULT_OCTAVES: u32 = 6;
/// Default persistence for altitude/temperature noise.
const DEFAULT_PERSISTENCE: f64 = 0.55;
/// Persistence used for the color shade map (softer detail falloff).
const SHADE_PERSISTENCE: f64 = 0.7;

/// Parameters for a planet texture.
///
/// `seed: None` draws a process-entropy seed, with no reproducibility
/// guarantee; set it explicitly for deterministic output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetParams {
    /// Square texture edge length; must be a multiple of every octave's
    /// scaled resolution.
    pub size: usize,
    /// Base lattice resolution per axis.
    pub res: usize,
    /// Octaves summed per noise map.
    pub octaves: u32,
    /// Amplitude falloff per octave.
    pub persistence: f64,
    /// Frequency growth per octave.
    pub lacunarity: f64,
    /// Noise seed; `None` for process entropy.
    pub seed: Option<u64>,
}

impl Default for PlanetParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            res: DEFAULT_RES,
            octaves: DEFAULT_OCTAVES,
            persistence: DEFAULT_PERSISTENCE,
            lacunarity: 2.0,
            seed: None,
        }
    }
}

/// A square RGB8 texture buffer, row-major, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    size: usize,
    data: Vec<u8>,
}

impl Texture {
    /// Edge length in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw RGB8 bytes, `size * size * 3` of them.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The RGB triple at `(x, y)`. Panics if out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        assert!(x < self.size && y < self.size, "({x}, {y}) out of bounds");
        let i = (y * self.size + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Generates a full planet texture.
///
/// Three tileable noise maps drive the composition: altitude at `seed`,
/// temperature jitter at `seed + 1`, and a color shade map (persistence
/// 0.7) at `seed + 2`. All three tile along both axes so the texture wraps
/// cleanly around a sphere's longitude seam.
pub fn generate(params: &PlanetParams) -> Result<Texture, NoiseError> {
    let seed = params.seed.unwrap_or_else(entropy_seed);
    let octaves = OctaveParams {
        octaves: params.octaves,
        persistence: params.persistence,
        lacunarity: params.lacunarity,
    };
    let size = params.size;
    let tileable = (true, true);

    let alti_noise = maps::noise_map(params.res, params.res, size, size, &octaves, tileable, seed)?;
    let altitude = maps::altitude_map(&alti_noise, EARTH.min_alti, EARTH.max_alti);

    let temp_noise = maps::noise_map(
        params.res,
        params.res,
        size,
        size,
        &octaves,
        tileable,
        seed.wrapping_add(1),
    )?;
    let temperature = maps::temperature_map(&altitude, &temp_noise, EARTH.min_temp, EARTH.max_temp)?;

    let shade = maps::noise_map(
        params.res,
        params.res,
        size,
        size,
        &OctaveParams {
            persistence: SHADE_PERSISTENCE,
            ..octaves
        },
        tileable,
        seed.wrapping_add(2),
    )?;

    let palette: Vec<(Srgb, f64)> = BIOMES
        .iter()
        .map(|b| b.color().map(|c| (c, b.shade)))
        .collect::<Result<_, _>>()?;

    let mut data = vec![0u8; size * size * 3];
    for (i, chunk) in data.chunks_exact_mut(3).enumerate() {
        let alt = altitude.data()[i];
        let temp = temperature.data()[i];
        let last_match = BIOMES
            .iter()
            .zip(palette.iter())
            .filter(|(b, _)| b.matches(alt, temp))
            .next_back();
        if let Some((_, &(color, strength))) = last_match {
            let factor = 1.0 + (shade.data()[i] - 0.5) * 2.0 * strength;
            chunk.copy_from_slice(&color.shaded(factor).to_rgb8());
        }
        // Unmatched pixels stay black, as in the zero-initialized original.
    }

    Ok(Texture { size, data })
}

/// A seed from process entropy (hasher randomness), used when the caller
/// does not supply one.
fn entropy_seed() -> u64 {
    RandomState::new().build_hasher().finish()
}
