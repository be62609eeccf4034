//! Intermediate maps for planet texture synthesis.
//!
//! Builds on the raw octave noise: a normalized [0, 1] noise map, an
//! altitude map with sea level at 0.5, a latitude profile, and a
//! temperature map combining latitude, noise jitter, and altitude lapse.

use planetgen_core::error::NoiseError;
use planetgen_core::field::NoiseField;
use planetgen_perlin::{sample_octaves, OctaveParams};

/// Noise jitter applied to the temperature map, in degrees Celsius
/// (±10 around the latitude profile).
const TEMPERATURE_JITTER: f64 = 20.0;
/// Temperature lapse per meter of positive altitude (6.5 °C per km).
const LAPSE_PER_METER: f64 = 6.5 / 1000.0;

/// Octave noise min-max normalized to [0, 1].
pub fn noise_map(
    res_x: usize,
    res_y: usize,
    width: usize,
    height: usize,
    params: &OctaveParams,
    tileable: (bool, bool),
    seed: u64,
) -> Result<NoiseField, NoiseError> {
    let raw = sample_octaves(res_x, res_y, width, height, params, tileable, seed)?;
    Ok(raw.normalized())
}

/// Maps a normalized [0, 1] noise field to altitudes in meters.
///
/// Sea level sits at noise value 0.5: values above scale linearly into
/// (0, max_alt], values at or below scale into [-|min_alt|, 0].
pub fn altitude_map(noise: &NoiseField, min_alt: f64, max_alt: f64) -> NoiseField {
    let data = noise
        .data()
        .iter()
        .map(|&v| {
            let t = (v - 0.5) / 0.5;
            if v > 0.5 {
                t * max_alt
            } else {
                t * min_alt.abs()
            }
        })
        .collect();
    // Same shape as the input, so this cannot fail.
    NoiseField::from_data(noise.width(), noise.height(), data)
        .unwrap_or_else(|_| unreachable!("altitude map shape mirrors its input"))
}

/// Latitude in degrees for each pixel row: 90 at the top, -90 at the bottom.
///
/// A single-row map is the equator.
pub fn latitude_rows(height: usize) -> Vec<f64> {
    if height <= 1 {
        return vec![0.0; height];
    }
    (0..height)
        .map(|i| 90.0 - (i as f64 / (height - 1) as f64) * 180.0)
        .collect()
}

/// Temperature in °C from latitude, noise jitter, and altitude lapse.
///
/// Per pixel: `min_temp + cos(latitude) * (max_temp - min_temp)` shifted by
/// `(noise - 0.5) * 20`, then reduced by 6.5 °C per km of positive altitude.
/// Returns `NoiseError::DimensionMismatch` if the two fields differ in size.
pub fn temperature_map(
    altitude: &NoiseField,
    noise: &NoiseField,
    min_temp: f64,
    max_temp: f64,
) -> Result<NoiseField, NoiseError> {
    if altitude.width() != noise.width() || altitude.height() != noise.height() {
        return Err(NoiseError::DimensionMismatch {
            lhs_w: altitude.width(),
            lhs_h: altitude.height(),
            rhs_w: noise.width(),
            rhs_h: noise.height(),
        });
    }
    let width = altitude.width();
    let latitudes = latitude_rows(altitude.height());
    let mut out = NoiseField::new(width, altitude.height())?;
    let data = out.data_mut();
    for (i, (alt, jitter)) in altitude.data().iter().zip(noise.data()).enumerate() {
        let lat_factor = latitudes[i / width].to_radians().cos();
        let base = min_temp + lat_factor * (max_temp - min_temp);
        let lapse = alt.max(0.0) * LAPSE_PER_METER;
        data[i] = base + (jitter - 0.5) * TEMPERATURE_JITTER - lapse;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_noise(width: usize, height: usize, value: f64) -> NoiseField {
        NoiseField::from_data(width, height, vec![value; width * height]).unwrap()
    }

    // -- noise_map --

    #[test]
    fn noise_map_lands_in_unit_interval() {
        let params = OctaveParams {
            octaves: 3,
            persistence: 0.55,
            lacunarity: 2.0,
        };
        let map = noise_map(4, 4, 128, 128, &params, (true, true), 42).unwrap();
        assert!((map.min() - 0.0).abs() < f64::EPSILON);
        assert!((map.max() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn noise_map_is_deterministic() {
        let params = OctaveParams::default();
        let a = noise_map(4, 4, 64, 64, &params, (false, false), 9).unwrap();
        let b = noise_map(4, 4, 64, 64, &params, (false, false), 9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn noise_map_propagates_errors() {
        let params = OctaveParams::default();
        assert!(noise_map(0, 4, 64, 64, &params, (false, false), 1).is_err());
        assert!(noise_map(4, 4, 60, 64, &params, (false, false), 1).is_err());
    }

    // -- altitude_map --

    #[test]
    fn altitude_sea_level_is_zero() {
        let alt = altitude_map(&flat_noise(4, 4, 0.5), -10_000.0, 8000.0);
        assert!(alt.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn altitude_extremes_hit_bounds() {
        let peak = altitude_map(&flat_noise(1, 1, 1.0), -10_000.0, 8000.0);
        assert!((peak.get(0, 0) - 8000.0).abs() < 1e-9);
        let trench = altitude_map(&flat_noise(1, 1, 0.0), -10_000.0, 8000.0);
        assert!((trench.get(0, 0) - -10_000.0).abs() < 1e-9);
    }

    #[test]
    fn altitude_scales_land_and_water_independently() {
        let field = NoiseField::from_data(2, 1, vec![0.75, 0.25]).unwrap();
        let alt = altitude_map(&field, -10_000.0, 8000.0);
        assert!((alt.get(0, 0) - 4000.0).abs() < 1e-9);
        assert!((alt.get(1, 0) - -5000.0).abs() < 1e-9);
    }

    #[test]
    fn altitude_handles_negative_min_alt_given_as_magnitude() {
        // min_alt is conventionally negative; its absolute value sets the depth.
        let a = altitude_map(&flat_noise(1, 1, 0.0), -2000.0, 8000.0);
        let b = altitude_map(&flat_noise(1, 1, 0.0), 2000.0, 8000.0);
        assert!((a.get(0, 0) - b.get(0, 0)).abs() < 1e-12);
    }

    // -- latitude_rows --

    #[test]
    fn latitude_spans_poles_to_poles() {
        let lat = latitude_rows(181);
        assert!((lat[0] - 90.0).abs() < 1e-9);
        assert!((lat[90] - 0.0).abs() < 1e-9);
        assert!((lat[180] - -90.0).abs() < 1e-9);
    }

    #[test]
    fn latitude_single_row_is_equator() {
        assert_eq!(latitude_rows(1), vec![0.0]);
    }

    #[test]
    fn latitude_is_strictly_decreasing() {
        let lat = latitude_rows(64);
        assert!(lat.windows(2).all(|w| w[1] < w[0]));
    }

    // -- temperature_map --

    #[test]
    fn temperature_is_warmest_at_equator() {
        let height = 65;
        let altitude = flat_noise(4, height, 0.0);
        let noise = flat_noise(4, height, 0.5);
        let temp = temperature_map(&altitude, &noise, -40.0, 35.0).unwrap();
        let equator = temp.get(0, height / 2);
        let pole = temp.get(0, 0);
        assert!(equator > pole, "equator {equator} not above pole {pole}");
        // cos(90°) = 0 at the poles, so the pole row sits at min_temp.
        assert!((pole - -40.0).abs() < 1e-9);
        assert!((equator - 35.0).abs() < 1e-9);
    }

    #[test]
    fn temperature_noise_jitter_shifts_up_to_ten_degrees() {
        let altitude = flat_noise(2, 1, 0.0);
        let warm = temperature_map(&altitude, &flat_noise(2, 1, 1.0), -40.0, 35.0).unwrap();
        let cold = temperature_map(&altitude, &flat_noise(2, 1, 0.0), -40.0, 35.0).unwrap();
        assert!((warm.get(0, 0) - cold.get(0, 0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn temperature_drops_with_positive_altitude() {
        let noise = flat_noise(1, 1, 0.5);
        let sea = temperature_map(&flat_noise(1, 1, 0.0), &noise, -40.0, 35.0).unwrap();
        let high = {
            let alt = NoiseField::from_data(1, 1, vec![2000.0]).unwrap();
            temperature_map(&alt, &noise, -40.0, 35.0).unwrap()
        };
        assert!((sea.get(0, 0) - high.get(0, 0) - 13.0).abs() < 1e-9);
    }

    #[test]
    fn temperature_ignores_negative_altitude_for_lapse() {
        let noise = flat_noise(1, 1, 0.5);
        let sea = temperature_map(&flat_noise(1, 1, 0.0), &noise, -40.0, 35.0).unwrap();
        let deep = {
            let alt = NoiseField::from_data(1, 1, vec![-5000.0]).unwrap();
            temperature_map(&alt, &noise, -40.0, 35.0).unwrap()
        };
        assert!((sea.get(0, 0) - deep.get(0, 0)).abs() < 1e-12);
    }

    #[test]
    fn temperature_rejects_mismatched_fields() {
        let altitude = flat_noise(4, 4, 0.0);
        let noise = flat_noise(8, 4, 0.5);
        assert!(matches!(
            temperature_map(&altitude, &noise, -40.0, 35.0),
            Err(NoiseError::DimensionMismatch { .. })
        ));
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn altitude_stays_within_planet_extremes(
                values in prop::collection::vec(0.0_f64..=1.0, 1..=256),
            ) {
                let w = values.len();
                let field = NoiseField::from_data(w, 1, values).unwrap();
                let alt = altitude_map(&field, -10_000.0, 8000.0);
                for &v in alt.data() {
                    prop_assert!((-10_000.0..=8000.0).contains(&v), "altitude {v} out of range");
                }
            }

            #[test]
            fn altitude_sign_follows_sea_level_split(
                values in prop::collection::vec(0.0_f64..=1.0, 1..=256),
            ) {
                let w = values.len();
                let field = NoiseField::from_data(w, 1, values.clone()).unwrap();
                let alt = altitude_map(&field, -10_000.0, 8000.0);
                for (v, a) in values.iter().zip(alt.data()) {
                    if *v > 0.5 {
                        prop_assert!(*a > 0.0);
                    } else {
                        prop_assert!(*a <= 0.0);
                    }
                }
            }
        }
    }
}
