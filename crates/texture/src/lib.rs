#![deny(unsafe_code)]
//! Planet texture synthesis on top of the noise pipeline.
//!
//! Turns seeded octave noise into altitude and temperature maps, classifies
//! each pixel against an earth-like biome table, and composes an RGB8
//! texture suitable for wrapping around a sphere. With the default `png`
//! feature, textures and raw noise fields can be written as PNG files.

pub mod biome;
pub mod maps;
pub mod pixel;
pub mod planet;

#[cfg(feature = "png")]
pub mod snapshot;

pub use biome::{Biome, PlanetExtremes, BIOMES, EARTH};
pub use planet::{generate, PlanetParams, Texture};
