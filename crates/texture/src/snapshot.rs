//! PNG output for textures and noise fields.
//!
//! Feature-gated behind `png` (default on) so consumers that only need the
//! in-memory buffers can depend on this crate without the `image` stack.

use crate::pixel::field_to_luma8;
use crate::planet::Texture;
use planetgen_core::error::NoiseError;
use planetgen_core::field::NoiseField;
use std::path::Path;

/// Writes a planet texture as an RGB PNG.
///
/// Returns `NoiseError::InvalidDimensions` if the edge length overflows
/// `u32`, or `NoiseError::Io` on write failure.
pub fn write_png(texture: &Texture, path: &Path) -> Result<(), NoiseError> {
    let n = u32::try_from(texture.size()).map_err(|_| NoiseError::InvalidDimensions)?;
    let img = image::RgbImage::from_raw(n, n, texture.data().to_vec())
        .ok_or_else(|| NoiseError::Io("RGB buffer size mismatch".into()))?;
    img.save(path).map_err(|e| NoiseError::Io(e.to_string()))
}

/// Writes a noise field as a grayscale PNG, min-max normalized.
pub fn write_field_png(field: &NoiseField, path: &Path) -> Result<(), NoiseError> {
    let w = u32::try_from(field.width()).map_err(|_| NoiseError::InvalidDimensions)?;
    let h = u32::try_from(field.height()).map_err(|_| NoiseError::InvalidDimensions)?;
    let img = image::GrayImage::from_raw(w, h, field_to_luma8(field))
        .ok_or_else(|| NoiseError::Io("luma buffer size mismatch".into()))?;
    img.save(path).map_err(|e| NoiseError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::{generate, PlanetParams};

    #[test]
    fn write_png_round_trip() {
        let params = PlanetParams {
            size: 32,
            res: 2,
            octaves: 2,
            seed: Some(42),
            ..PlanetParams::default()
        };
        let tex = generate(&params).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planet.png");

        write_png(&tex, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.width(), 32);
        assert_eq!(img.height(), 32);
        assert_eq!(img.as_raw().as_slice(), tex.data());
    }

    #[test]
    fn write_field_png_round_trip() {
        let field = planetgen_perlin::noise(4, 4, 64, 64, (false, false), 42).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.png");

        write_field_png(&field, &path).unwrap();

        let img = image::open(&path).unwrap().to_luma8();
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 64);
        assert_eq!(img.as_raw().as_slice(), field_to_luma8(&field).as_slice());
    }

    #[test]
    fn write_png_surfaces_io_errors() {
        let params = PlanetParams {
            size: 16,
            res: 2,
            octaves: 1,
            seed: Some(1),
            ..PlanetParams::default()
        };
        let tex = generate(&params).unwrap();
        let result = write_png(&tex, Path::new("/nonexistent-dir/planet.png"));
        assert!(matches!(result, Err(NoiseError::Io(_))));
    }
}
