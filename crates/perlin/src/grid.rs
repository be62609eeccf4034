//! Random gradient lattice for 2D gradient noise.
//!
//! A [`GradientGrid`] holds one unit-length gradient vector per integer
//! lattice point, `(res_x + 1) * (res_y + 1)` of them for a grid of
//! `res_x * res_y` cells. All randomness in the noise lives here: the
//! sampler downstream is a pure function of this grid.

use glam::DVec2;
use planetgen_core::error::NoiseError;
use planetgen_core::prng::Xorshift64;
use std::f64::consts::TAU;

/// Immutable grid of unit gradient vectors at integer lattice points.
///
/// Gradients are stored row-major (y-major, x within a row). Tileable axes
/// alias the last lattice column/row onto the first, so noise sampled from
/// the grid repeats seamlessly along that axis.
#[derive(Debug, Clone)]
pub struct GradientGrid {
    res_x: usize,
    res_y: usize,
    tileable: (bool, bool),
    gradients: Vec<DVec2>,
}

impl GradientGrid {
    /// Generates a gradient grid for `res_x * res_y` cells.
    ///
    /// Draws exactly one angle per lattice point, uniformly in [0, 2π),
    /// iterating lattice points row-major (y outer, x inner). The draw order
    /// and count are fixed regardless of `tileable`, so the same RNG state
    /// yields the same interior gradients whether or not an axis tiles;
    /// aliasing is applied afterwards.
    ///
    /// Returns `NoiseError::InvalidResolution` if either resolution is zero.
    pub fn generate(
        res_x: usize,
        res_y: usize,
        tileable: (bool, bool),
        rng: &mut Xorshift64,
    ) -> Result<Self, NoiseError> {
        if res_x == 0 || res_y == 0 {
            return Err(NoiseError::InvalidResolution { res_x, res_y });
        }
        let cols = res_x + 1;
        let rows = res_y + 1;
        let mut gradients = Vec::with_capacity(cols * rows);
        for _ in 0..rows {
            for _ in 0..cols {
                let theta = rng.next_f64() * TAU;
                gradients.push(DVec2::new(theta.cos(), theta.sin()));
            }
        }
        if tileable.0 {
            for y in 0..rows {
                gradients[y * cols + res_x] = gradients[y * cols];
            }
        }
        if tileable.1 {
            for x in 0..cols {
                gradients[res_y * cols + x] = gradients[x];
            }
        }
        Ok(Self {
            res_x,
            res_y,
            tileable,
            gradients,
        })
    }

    /// Cells along the x axis.
    pub fn res_x(&self) -> usize {
        self.res_x
    }

    /// Cells along the y axis.
    pub fn res_y(&self) -> usize {
        self.res_y
    }

    /// Per-axis tileability flags.
    pub fn tileable(&self) -> (bool, bool) {
        self.tileable
    }

    /// Gradient at lattice point `(ix, iy)`.
    ///
    /// Valid indices are `0..=res_x` and `0..=res_y`; anything else is a
    /// programming error and panics.
    pub fn gradient(&self, ix: usize, iy: usize) -> DVec2 {
        assert!(
            ix <= self.res_x && iy <= self.res_y,
            "lattice point ({ix}, {iy}) out of bounds"
        );
        self.gradients[iy * (self.res_x + 1) + ix]
    }
}
