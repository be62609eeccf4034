//! Error types for the planetgen core.

use thiserror::Error;

/// Errors produced by noise generation and texture composition.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// Lattice resolution was zero along at least one axis.
    #[error("invalid resolution: {res_x}x{res_y} (both axes must be at least 1 cell)")]
    InvalidResolution { res_x: usize, res_y: usize },

    /// Output dimensions were not integer multiples of the lattice resolution.
    ///
    /// The pixel-to-cell mapping is only defined for whole cells; nothing is
    /// rounded or cropped implicitly.
    #[error("misaligned grid: output {width}x{height} is not a multiple of resolution {res_x}x{res_y}")]
    MisalignedGrid {
        width: usize,
        height: usize,
        res_x: usize,
        res_y: usize,
    },

    /// Width or height was zero (or their product overflowed) when creating a field.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// Two fields had incompatible dimensions for an element-wise operation.
    #[error("dimension mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    DimensionMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// An octave-layering request could not be satisfied.
    #[error("invalid octaves: {0}")]
    InvalidOctaves(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An I/O failure while writing a snapshot.
    #[error("i/o error: {0}")]
    Io(String),
}
