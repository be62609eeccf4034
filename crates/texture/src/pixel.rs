//! Pure pixel buffer conversion from a [`NoiseField`].
//!
//! Always available (no feature gate) so callers without the `png` feature
//! can still turn a field into displayable bytes.

use planetgen_core::field::NoiseField;

/// Converts a field to 8-bit grayscale, min-max normalized first.
///
/// The buffer is row-major, one byte per pixel.
pub fn field_to_luma8(field: &NoiseField) -> Vec<u8> {
    field
        .normalized()
        .data()
        .iter()
        .map(|&v| (v * 255.0).round() as u8)
        .collect()
}
