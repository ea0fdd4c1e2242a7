//! Palette color records
//!
//! A record pairs a 6-digit hex code with a category (the broad color
//! family, e.g. "Rose") and a display name. Records serialize as the
//! interchange tuple `[hex, category, name]`.

use std::borrow::Cow;
use std::fmt;

use palette::Srgb;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{color::Rgb, constants::hex, MatchError, Result};

/// Immutable named color entry
///
/// The RGB channels are decoded once when the record is built, so a record
/// can always be measured against without re-parsing its hex code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorRecord {
    hex: Cow<'static, str>,
    category: Cow<'static, str>,
    name: Cow<'static, str>,
    rgb: [u8; 3],
}

impl ColorRecord {
    /// Create a record from owned or borrowed strings
    ///
    /// The hex code may use either case and must not carry a `#`; it is
    /// stored uppercased.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidRecordHex` if `hex` is not exactly six
    /// hexadecimal digits.
    pub fn new(
        hex: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self> {
        let hex = hex.into();
        if !is_hex_code(&hex) {
            return Err(MatchError::InvalidRecordHex { hex });
        }

        let rgb = decode_rgb(hex.as_bytes());
        Ok(Self {
            hex: Cow::Owned(hex.to_ascii_uppercase()),
            category: Cow::Owned(category.into()),
            name: Cow::Owned(name.into()),
            rgb,
        })
    }

    /// Create a record from trusted static data without validation
    pub(crate) const fn from_static(
        hex: &'static str,
        category: &'static str,
        name: &'static str,
    ) -> Self {
        Self {
            hex: Cow::Borrowed(hex),
            category: Cow::Borrowed(category),
            name: Cow::Borrowed(name),
            rgb: decode_rgb(hex.as_bytes()),
        }
    }

    /// Hex code, six uppercase digits without `#`
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Color family, e.g. "Blanc"
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Display name, e.g. "Cuisse de nymphe"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decoded RGB channels
    pub fn rgb(&self) -> Rgb {
        let [red, green, blue] = self.rgb;
        Srgb::new(red, green, blue)
    }

    /// Hex code with the leading `#`
    pub fn prefixed_hex(&self) -> String {
        format!("{}{}", hex::PREFIX, self.hex)
    }
}

impl fmt::Display for ColorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}\t{}\t{}", hex::PREFIX, self.hex, self.category, self.name)
    }
}

impl Serialize for ColorRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (self.hex(), self.category(), self.name()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ColorRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let (hex, category, name) = <(String, String, String)>::deserialize(deserializer)?;
        ColorRecord::new(hex, category, name).map_err(serde::de::Error::custom)
    }
}

/// Decode `RRGGBB` into channel bytes
///
/// Callers guarantee six hex digits; this runs in const context for the
/// built-in table.
const fn decode_rgb(digits: &[u8]) -> [u8; 3] {
    [
        (nibble(digits[0]) << 4) | nibble(digits[1]),
        (nibble(digits[2]) << 4) | nibble(digits[3]),
        (nibble(digits[4]) << 4) | nibble(digits[5]),
    ]
}

const fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// Check for exactly six ASCII hex digits
pub(crate) fn is_hex_code(code: &str) -> bool {
    code.len() == hex::DIGITS && code.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hex_code() {
        assert!(is_hex_code("00ffAA"));
        assert!(!is_hex_code("00ffA"));
        assert!(!is_hex_code("+1+1+1"));
    }

    #[test]
    fn test_new_uppercases_hex() {
        let record = ColorRecord::new("fee7f0", "Rose", "Cuisse de nymphe").unwrap();
        assert_eq!(record.hex(), "FEE7F0");
        assert_eq!(record.prefixed_hex(), "#FEE7F0");
        assert_eq!(record.category(), "Rose");
        assert_eq!(record.name(), "Cuisse de nymphe");
    }

    #[test]
    fn test_rgb_is_decoded_once() {
        let record = ColorRecord::new("fe0a7f", "Rose", "x").unwrap();
        assert_eq!(record.rgb(), Srgb::new(0xFE, 0x0A, 0x7F));

        let record = ColorRecord::from_static("370028", "Violet", "Aubergine");
        assert_eq!(record.rgb(), Srgb::new(0x37, 0x00, 0x28));
    }

    #[test]
    fn test_new_rejects_malformed_hex() {
        match ColorRecord::new("#FFFFFF", "Blanc", "Blanc") {
            Err(MatchError::InvalidRecordHex { hex }) => assert_eq!(hex, "#FFFFFF"),
            other => panic!("Expected InvalidRecordHex, got: {:?}", other),
        }
        assert!(ColorRecord::new("FFF", "Blanc", "Blanc").is_err());
        assert!(ColorRecord::new("GGGGGG", "Blanc", "Blanc").is_err());
        assert!(ColorRecord::new("", "Blanc", "Blanc").is_err());
    }

    #[test]
    fn test_static_and_owned_records_compare_equal() {
        let owned = ColorRecord::new("FFFFFF", "Blanc", "Blanc").unwrap();
        let borrowed = ColorRecord::from_static("FFFFFF", "Blanc", "Blanc");
        assert_eq!(owned, borrowed);
    }

    #[test]
    fn test_serializes_as_tuple() {
        let record = ColorRecord::from_static("000000", "Noir", "Noir foncé");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"["000000","Noir","Noir foncé"]"#);

        let back: ColorRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserialize_rejects_bad_hex() {
        let result: std::result::Result<ColorRecord, _> =
            serde_json::from_str(r#"["12345Z","Noir","Noir"]"#);
        assert!(result.is_err());
    }
}
