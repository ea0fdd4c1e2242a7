//! Hex format and metric constants
//!
//! Compile-time values shared by normalization, conversion and matching.

/// Hex code format
pub mod hex {
    /// Prefix carried by normalized colors and match results
    pub const PREFIX: char = '#';

    /// Hex digits in a full color code (two per channel)
    pub const DIGITS: usize = 6;

    /// Hex digits in a shorthand color code
    pub const SHORTHAND_DIGITS: usize = 3;

    /// Length of a normalized color including the prefix
    pub const NORMALIZED_LEN: usize = DIGITS + 1;
}

/// Distance metric parameters
pub mod metric {
    /// Largest 8-bit channel value, used to normalize RGB to [0, 1]
    pub const CHANNEL_MAX: f64 = 255.0;

    /// Factor applied to each HSL component before truncation
    ///
    /// Puts hue, saturation and lightness on the same scale as RGB channels.
    pub const HSL_SCALE: f64 = 255.0;

    /// Number of hue sextants the accumulated hue is divided by
    pub const HUE_SEXTANTS: f64 = 6.0;
}
