//! Color conversion and matching module
//!
//! This module normalizes hex input, derives the RGB and scaled HSL values
//! the distance metric compares, and selects the closest palette record.

pub mod conversion;
pub mod matcher;

pub use conversion::{ColorConverter, Rgb, ScaledHsl, ShorthandMode};
pub use matcher::{distance, ColorMatcher, ColorPoint, MatchResult};
