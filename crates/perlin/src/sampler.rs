//! Single-octave gradient noise sampling.
//!
//! For every output pixel, finds the enclosing lattice cell, dots the four
//! corner gradients with the offset vectors from those corners, and blends
//! the four results with fade-weighted bilinear interpolation. The blended
//! value is rescaled by √2 so a single octave is nominally in [-1, 1]
//! (raw fade-interpolated 2D gradient noise lies in ≈[-0.707, 0.707]).
//!
//! Cell lookup uses integer division of pixel coordinates, so a pixel that
//! sits exactly on a lattice line has a local offset of exactly 0.0 and its
//! sampled value is exactly 0.0 (dot of any gradient with the zero vector).
//!
//! The pixel grid covers [0, res) in lattice space: the last pixel row and
//! column lie strictly inside the last cell, so corner indices never exceed
//! the stored `res + 1` lattice lines. Seamless tiling is the grid's
//! concern (see [`GradientGrid`] aliasing), not a sampler branch.

use crate::grid::GradientGrid;
use glam::DVec2;
use planetgen_core::error::NoiseError;
use planetgen_core::field::NoiseField;
use std::f64::consts::SQRT_2;

/// Quintic smoothstep `6t⁵ - 15t⁴ + 10t³`.
///
/// Zero first and second derivative at t=0 and t=1, which makes adjacent
/// cells meet with C¹ continuity (no visible seam).
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation `a + t * (b - a)`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Samples a full `width * height` noise field from a gradient grid.
///
/// Returns `NoiseError::MisalignedGrid` unless both output dimensions are
/// non-zero integer multiples of the grid resolution (no partial cells).
///
/// The computation is a pure function of the grid and the dimensions: no
/// pixel depends on another pixel's result, only on the shared read-only
/// gradients.
pub fn sample(grid: &GradientGrid, width: usize, height: usize) -> Result<NoiseField, NoiseError> {
    let res_x = grid.res_x();
    let res_y = grid.res_y();
    if width == 0 || height == 0 || width % res_x != 0 || height % res_y != 0 {
        return Err(NoiseError::MisalignedGrid {
            width,
            height,
            res_x,
            res_y,
        });
    }
    let cell_w = width / res_x;
    let cell_h = height / res_y;

    let mut field = NoiseField::new(width, height)?;
    let data = field.data_mut();
    for py in 0..height {
        let y0 = py / cell_h;
        let ty = (py % cell_h) as f64 / cell_h as f64;
        let row = &mut data[py * width..(py + 1) * width];
        for (px, out) in row.iter_mut().enumerate() {
            let x0 = px / cell_w;
            let tx = (px % cell_w) as f64 / cell_w as f64;
            *out = eval_cell(grid, x0, y0, tx, ty);
        }
    }
    Ok(field)
}

/// Evaluates the noise at local offset `(tx, ty)` inside cell `(x0, y0)`.
///
/// `tx`/`ty` are fractional offsets from the cell's low corner; 1.0 is the
/// far edge (used by tests to check cross-cell agreement on shared edges).
pub(crate) fn eval_cell(grid: &GradientGrid, x0: usize, y0: usize, tx: f64, ty: f64) -> f64 {
    let point = DVec2::new(tx, ty);
    let d00 = grid.gradient(x0, y0).dot(point);
    let d10 = grid.gradient(x0 + 1, y0).dot(point - DVec2::X);
    let d01 = grid.gradient(x0, y0 + 1).dot(point - DVec2::Y);
    let d11 = grid.gradient(x0 + 1, y0 + 1).dot(point - DVec2::ONE);

    let fx = fade(tx);
    let fy = fade(ty);
    let ix0 = lerp(d00, d10, fx);
    let ix1 = lerp(d01, d11, fx);
    SQRT_2 * lerp(ix0, ix1, fy)
}
