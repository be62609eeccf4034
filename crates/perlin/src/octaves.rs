//! Octave layering: weighted summation of independent noise fields.
//!
//! Each octave is a full single-octave invocation at a scaled resolution,
//! generated from a fresh PRNG seeded with the same seed (so octave i's
//! gradients are a deterministic function of the seed alone, not of the
//! octaves before it). Amplitudes follow a geometric `persistence` series,
//! frequencies a geometric `lacunarity` series.

use crate::grid::GradientGrid;
use crate::sampler;
use planetgen_core::error::NoiseError;
use planetgen_core::field::NoiseField;
use planetgen_core::prng::Xorshift64;
use serde::{Deserialize, Serialize};

/// Default octave count (single octave).
const DEFAULT_OCTAVES: u32 = 1;
/// Default amplitude multiplier per octave.
const DEFAULT_PERSISTENCE: f64 = 0.5;
/// Default frequency multiplier per octave.
const DEFAULT_LACUNARITY: f64 = 2.0;

/// Parameters for octave layering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OctaveParams {
    /// Number of noise fields to sum.
    pub octaves: u32,
    /// Amplitude multiplier applied for each successive octave.
    pub persistence: f64,
    /// Frequency (resolution) multiplier applied for each successive octave.
    pub lacunarity: f64,
}

impl Default for OctaveParams {
    fn default() -> Self {
        Self {
            octaves: DEFAULT_OCTAVES,
            persistence: DEFAULT_PERSISTENCE,
            lacunarity: DEFAULT_LACUNARITY,
        }
    }
}

/// Sums `params.octaves` independent noise fields over one output grid.
///
/// Octave i samples resolution `(lacunarity^i * res) as usize` with
/// amplitude `persistence^i`. Every octave's resolution must still divide
/// the output dimensions; a violation surfaces as
/// `NoiseError::InvalidOctaves` naming the offending octave, as does an
/// octave count of zero. Single-octave errors other than misalignment
/// (`InvalidResolution` for a lacunarity < 1 collapsing a resolution to
/// zero) pass through unchanged.
///
/// Note the sum of octaves is not confined to [-1, 1]; callers that need a
/// display range normalize afterwards.
pub fn sample_octaves(
    res_x: usize,
    res_y: usize,
    width: usize,
    height: usize,
    params: &OctaveParams,
    tileable: (bool, bool),
    seed: u64,
) -> Result<NoiseField, NoiseError> {
    if params.octaves == 0 {
        return Err(NoiseError::InvalidOctaves(
            "octave count must be at least 1".into(),
        ));
    }
    let mut out = NoiseField::new(width, height)?;
    let mut frequency = 1.0_f64;
    let mut amplitude = 1.0_f64;
    for octave in 0..params.octaves {
        let rx = (frequency * res_x as f64) as usize;
        let ry = (frequency * res_y as f64) as usize;
        let mut rng = Xorshift64::new(seed);
        let grid = GradientGrid::generate(rx, ry, tileable, &mut rng)?;
        let layer = sampler::sample(&grid, width, height).map_err(|e| match e {
            NoiseError::MisalignedGrid { .. } => NoiseError::InvalidOctaves(format!(
                "octave {octave} resolution {rx}x{ry} does not divide output {width}x{height}"
            )),
            other => other,
        })?;
        out.add_scaled(&layer, amplitude)?;
        frequency *= params.lacunarity;
        amplitude *= params.persistence;
    }
    Ok(out)
}
