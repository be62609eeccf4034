//! Two-dimensional scalar field of raw noise values.
//!
//! A `NoiseField` stores `width * height` f64 values in row-major layout.
//! Values are deliberately unclamped: single-octave gradient noise is
//! nominally in [-1, 1], and octave sums can exceed that until normalized.
//! Indexing is plain bounds-checked access; an out-of-range coordinate is a
//! programming error and panics, it is not a recoverable condition.

use crate::error::NoiseError;

/// A dense 2D scalar field with unclamped f64 values in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl NoiseField {
    /// Creates a zero-filled field of the given dimensions.
    ///
    /// Returns `NoiseError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, NoiseError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    /// Creates a field from a pre-built data vector, validating that
    /// `data.len() == width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> Result<Self, NoiseError> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(NoiseError::DimensionMismatch {
                lhs_w: width,
                lhs_h: height,
                rhs_w: data.len(),
                rhs_h: 1,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Field width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access to the underlying row-major data.
    ///
    /// Generation hot paths write rows directly through this instead of
    /// per-pixel `set` calls.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Value at `(x, y)`. Panics if the coordinate is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.data[y * self.width + x]
    }

    /// Sets the value at `(x, y)`. Panics if the coordinate is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.data[y * self.width + x] = value;
    }

    /// Smallest value in the field.
    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest value in the field.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Min-max rescale of all values into [0, 1].
    ///
    /// A constant field (max == min, up to f64 epsilon) maps to all zeros
    /// rather than dividing by zero.
    pub fn normalized(&self) -> NoiseField {
        let min = self.min();
        let span = self.max() - min;
        let data = if span <= f64::EPSILON {
            vec![0.0; self.data.len()]
        } else {
            self.data.iter().map(|v| (v - min) / span).collect()
        };
        NoiseField {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// In-place element-wise `self += amplitude * other`.
    ///
    /// This is the octave-summation primitive; values are not clamped.
    /// Returns `NoiseError::DimensionMismatch` if the fields differ in size.
    pub fn add_scaled(&mut self, other: &NoiseField, amplitude: f64) -> Result<(), NoiseError> {
        if self.width != other.width || self.height != other.height {
            return Err(NoiseError::DimensionMismatch {
                lhs_w: self.width,
                lhs_h: self.height,
                rhs_w: other.width,
                rhs_h: other.height,
            });
        }
        self.data
            .iter_mut()
            .zip(other.data.iter())
            .for_each(|(a, b)| *a += amplitude * b);
        Ok(())
    }

    /// Iterates over all pixels yielding `(x, y, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.data.iter().enumerate().map(|(i, &v)| {
            let x = i % self.width;
            let y = i / self.width;
            (x, y, v)
        })
    }
}

/// Validates dimensions and returns `width * height`.
fn checked_len(width: usize, height: usize) -> Result<usize, NoiseError> {
    if width == 0 || height == 0 {
        return Err(NoiseError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .ok_or(NoiseError::InvalidDimensions)
}
