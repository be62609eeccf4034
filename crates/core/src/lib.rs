#![deny(unsafe_code)]
//! Core types for the planetgen noise and texture pipeline.
//!
//! Provides the `NoiseField` scalar field, the `Xorshift64` PRNG that all
//! gradient randomness flows through, the `Srgb` color type used by biome
//! definitions, and the `NoiseError` error enum.

pub mod color;
pub mod error;
pub mod field;
pub mod prng;

pub use color::Srgb;
pub use error::NoiseError;
pub use field::NoiseField;
pub use prng::Xorshift64;
