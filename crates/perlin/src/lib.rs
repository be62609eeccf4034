#![deny(unsafe_code)]
//! Seeded 2D gradient (Perlin) noise.
//!
//! The pipeline has two stages: [`GradientGrid`] assigns a random unit
//! gradient to every integer lattice point, and [`sampler::sample`] blends
//! per-cell gradient dot products into a dense [`NoiseField`]. Octave
//! layering ([`sample_octaves`]) composes several such fields by weighted
//! summation. Everything is a pure function of `(resolution, seed, output
//! size)`.

pub mod grid;
pub mod octaves;
pub mod sampler;

pub use grid::GradientGrid;
pub use octaves::{sample_octaves, OctaveParams};
pub use sampler::{fade, lerp, sample};

use planetgen_core::error::NoiseError;
use planetgen_core::field::NoiseField;
use planetgen_core::prng::Xorshift64;

/// Generates a single-octave noise field in one call.
///
/// Builds a [`GradientGrid`] from a fresh `Xorshift64::new(seed)` and
/// samples a `width * height` field from it.
pub fn noise(
    res_x: usize,
    res_y: usize,
    width: usize,
    height: usize,
    tileable: (bool, bool),
    seed: u64,
) -> Result<NoiseField, NoiseError> {
    let mut rng = Xorshift64::new(seed);
    let grid = GradientGrid::generate(res_x, res_y, tileable, &mut rng)?;
    sampler::sample(&grid, width, height)
}
