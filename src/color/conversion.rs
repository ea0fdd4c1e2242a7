//! Hex normalization and color model conversion
//!
//! Provides the conversions the matching metric is built on:
//! - Hex input normalization (prefix, shorthand, case)
//! - Hex to 8-bit RGB
//! - RGB to HSL scaled to the 0-255 channel range
//!
//! The HSL derived here is a metric representation, not a color-space
//! contract. Each component is multiplied by 255 and truncated toward zero,
//! so hue may come out negative for reds leaning towards blue.

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{hex, metric},
    MatchError, Result,
};

/// 8-bit sRGB triple
pub type Rgb = Srgb<u8>;

/// Hue, saturation and lightness scaled by 255 and truncated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaledHsl {
    pub h: i32,
    pub s: i32,
    pub l: i32,
}

/// How a 3-digit hex code is widened to 6 digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShorthandMode {
    /// Repeat the whole code: `ABC` becomes `ABCABC`
    #[default]
    Concatenate,
    /// Double each digit, CSS style: `ABC` becomes `AABBCC`
    Expand,
}

/// Hex color parser and RGB/HSL converter
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter {
    shorthand: ShorthandMode,
}

impl ColorConverter {
    /// Create a converter using the concatenating shorthand rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with an explicit shorthand rule
    pub fn with_shorthand(shorthand: ShorthandMode) -> Self {
        Self { shorthand }
    }

    pub fn shorthand(&self) -> ShorthandMode {
        self.shorthand
    }

    /// Normalize user input to `#RRGGBB` in uppercase
    ///
    /// A single leading `#` is optional. Three-digit input is widened
    /// according to the converter's [`ShorthandMode`].
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidColor` carrying the original input if the
    /// widened code is not exactly six hexadecimal digits.
    pub fn normalize(&self, input: &str) -> Result<String> {
        let digits = input.strip_prefix(hex::PREFIX).unwrap_or(input);

        let digits = if digits.len() == hex::SHORTHAND_DIGITS {
            match self.shorthand {
                ShorthandMode::Concatenate => digits.repeat(2),
                ShorthandMode::Expand => digits.chars().flat_map(|c| [c, c]).collect(),
            }
        } else {
            digits.to_string()
        };

        let normalized = format!("{}{}", hex::PREFIX, digits.to_ascii_uppercase());
        let all_hex = digits.bytes().all(|b| b.is_ascii_hexdigit());
        if !all_hex || normalized.len() != hex::NORMALIZED_LEN {
            return Err(MatchError::invalid_color(input));
        }

        Ok(normalized)
    }

    /// Parse a 6-digit hex code, with or without `#`, to RGB
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidColor` if the code is not six hex digits.
    pub fn hex_to_rgb(&self, code: &str) -> Result<Rgb> {
        let digits = code.strip_prefix(hex::PREFIX).unwrap_or(code);
        if digits.len() != hex::DIGITS || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MatchError::invalid_color(code));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| MatchError::invalid_color(code))
        };

        Ok(Srgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Convert RGB to the scaled HSL used by the distance metric
    ///
    /// Hue contributions are accumulated per dominant channel and divided
    /// into sextants; ties between the maximum channels skip the branch of
    /// the channel that is tied.
    #[allow(clippy::float_cmp)]
    pub fn rgb_to_hsl(&self, rgb: Rgb) -> ScaledHsl {
        let r = f64::from(rgb.red) / metric::CHANNEL_MAX;
        let g = f64::from(rgb.green) / metric::CHANNEL_MAX;
        let b = f64::from(rgb.blue) / metric::CHANNEL_MAX;

        let min = r.min(g.min(b));
        let max = r.max(g.max(b));
        let delta = max - min;
        let l = (min + max) / 2.0;

        let s = if l > 0.0 && l < 1.0 {
            delta / if l < 0.5 { 2.0 * l } else { 2.0 - 2.0 * l }
        } else {
            0.0
        };

        let mut h = 0.0;
        if delta > 0.0 {
            if max == r && max != g {
                h += (g - b) / delta;
            }
            if max == g && max != b {
                h += 2.0 + (b - r) / delta;
            }
            if max == b && max != r {
                h += 4.0 + (r - g) / delta;
            }
            h /= metric::HUE_SEXTANTS;
        }

        // `as` truncates toward zero, which the scores depend on
        ScaledHsl {
            h: (h * metric::HSL_SCALE) as i32,
            s: (s * metric::HSL_SCALE) as i32,
            l: (l * metric::HSL_SCALE) as i32,
        }
    }

    /// Parse a hex code and convert it straight to scaled HSL
    pub fn hex_to_hsl(&self, code: &str) -> Result<ScaledHsl> {
        Ok(self.rgb_to_hsl(self.hex_to_rgb(code)?))
    }

    /// Format RGB as `#RRGGBB`
    pub fn rgb_to_hex(&self, rgb: Rgb) -> String {
        format!(
            "{}{:02X}{:02X}{:02X}",
            hex::PREFIX,
            rgb.red,
            rgb.green,
            rgb.blue
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_full_codes() {
        let converter = ColorConverter::new();
        assert_eq!(converter.normalize("#fee7f1").unwrap(), "#FEE7F1");
        assert_eq!(converter.normalize("FEE7F1").unwrap(), "#FEE7F1");
        assert_eq!(converter.normalize("#000000").unwrap(), "#000000");
    }

    #[test]
    fn test_normalize_shorthand_concatenates() {
        let converter = ColorConverter::new();
        assert_eq!(converter.normalize("#ABC").unwrap(), "#ABCABC");
        assert_eq!(converter.normalize("abc").unwrap(), "#ABCABC");
        assert_eq!(converter.normalize("#f0a").unwrap(), "#F0AF0A");
    }

    #[test]
    fn test_normalize_shorthand_expands() {
        let converter = ColorConverter::with_shorthand(ShorthandMode::Expand);
        assert_eq!(converter.normalize("#ABC").unwrap(), "#AABBCC");
        assert_eq!(converter.normalize("f0a").unwrap(), "#FF00AA");
        assert_eq!(converter.shorthand(), ShorthandMode::Expand);
    }

    #[test]
    fn test_normalize_invalid() {
        let converter = ColorConverter::new();
        for input in ["", "#", "#12", "#GGGGGG", "notacolor", "##ABCDEF", "#ABCDEF0", "#ABCD", "#ÀBC"] {
            let err = converter.normalize(input).unwrap_err();
            match err {
                MatchError::InvalidColor { input: reported } => assert_eq!(reported, input),
                other => panic!("Expected InvalidColor for {:?}, got: {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_hex_to_rgb() {
        let converter = ColorConverter::new();
        assert_eq!(converter.hex_to_rgb("#FF0000").unwrap(), Srgb::new(255, 0, 0));
        assert_eq!(converter.hex_to_rgb("00ff7f").unwrap(), Srgb::new(0, 255, 127));
    }

    #[test]
    fn test_hex_to_rgb_invalid() {
        let converter = ColorConverter::new();
        assert!(converter.hex_to_rgb("#FF").is_err());
        assert!(converter.hex_to_rgb("#GGGGGG").is_err());
        assert!(converter.hex_to_rgb("#+1+1+1").is_err());
    }

    #[test]
    fn test_rgb_to_hex() {
        let converter = ColorConverter::new();
        assert_eq!(converter.rgb_to_hex(Srgb::new(254, 231, 241)), "#FEE7F1");
        assert_eq!(converter.rgb_to_hex(Srgb::new(0, 10, 255)), "#000AFF");
    }

    #[test]
    fn test_hsl_greys_have_no_hue_or_saturation() {
        let converter = ColorConverter::new();
        assert_eq!(converter.hex_to_hsl("#000000").unwrap(), ScaledHsl { h: 0, s: 0, l: 0 });
        assert_eq!(converter.hex_to_hsl("#FFFFFF").unwrap(), ScaledHsl { h: 0, s: 0, l: 255 });
        assert_eq!(converter.hex_to_hsl("#808080").unwrap(), ScaledHsl { h: 0, s: 0, l: 128 });
        assert_eq!(converter.hex_to_hsl("#7F7F7F").unwrap(), ScaledHsl { h: 0, s: 0, l: 127 });
    }

    #[test]
    fn test_hsl_primaries() {
        let converter = ColorConverter::new();
        assert_eq!(converter.hex_to_hsl("#FF0000").unwrap(), ScaledHsl { h: 0, s: 255, l: 127 });
        assert_eq!(converter.hex_to_hsl("#00FF00").unwrap(), ScaledHsl { h: 85, s: 255, l: 127 });
        assert_eq!(converter.hex_to_hsl("#0000FE").unwrap(), ScaledHsl { h: 170, s: 255, l: 127 });
    }

    #[test]
    fn test_hsl_hue_truncates_toward_zero() {
        let converter = ColorConverter::new();
        // red is dominant and blue exceeds green, so hue is negative
        assert_eq!(converter.hex_to_hsl("#FEE7F1").unwrap(), ScaledHsl { h: -18, s: 234, l: 242 });
        assert_eq!(converter.hex_to_hsl("#FEE7F0").unwrap(), ScaledHsl { h: -16, s: 234, l: 242 });
        assert_eq!(converter.hex_to_hsl("#FF00FF").unwrap(), ScaledHsl { h: -42, s: 255, l: 127 });
    }

    #[test]
    fn test_hsl_mixed() {
        let converter = ColorConverter::new();
        assert_eq!(converter.hex_to_hsl("#ABCABC").unwrap(), ScaledHsl { h: 108, s: 57, l: 186 });
        assert_eq!(converter.hex_to_hsl("#123456").unwrap(), ScaledHsl { h: 148, s: 166, l: 52 });
    }
}
