//! # Color Name
//!
//! A Rust crate for naming RGB hex colors after the closest entry of a
//! reference palette.
//!
//! This library provides color naming by:
//! - Normalizing hex input (`#RRGGBB`, `RRGGBB`, 3-digit shorthand)
//! - Returning the first palette record with the same hex code, if any
//! - Otherwise ranking records by combined squared RGB and HSL distance
//! - Shipping a built-in table of French color names
//!
//! ## Example
//!
//! ```rust
//! use color_name::{name_color, MatchResult};
//!
//! let result: MatchResult = name_color("#FEE7F1")?;
//! println!("{} is {} ({})", result.hex, result.color_name, result.color);
//! assert!(!result.exact);
//! # Ok::<(), color_name::MatchError>(())
//! ```
//!
//! A custom palette replaces the built-in table:
//!
//! ```rust
//! use color_name::{ColorMatcher, ColorRecord, PaletteStore};
//!
//! let palette = PaletteStore::new(vec![
//!     ColorRecord::new("FFFFFF", "Blanc", "Blanc clair")?,
//!     ColorRecord::new("000000", "Noir", "Noir foncé")?,
//! ]);
//! let matcher = ColorMatcher::new(palette)?;
//! assert_eq!(matcher.match_color("#FEE7F1")?.color_name, "Blanc clair");
//! # Ok::<(), color_name::MatchError>(())
//! ```

use std::sync::OnceLock;

pub mod error;
pub mod constants;
pub mod config;
pub mod color;
pub mod names;

pub use color::{ColorConverter, ColorMatcher, MatchResult, ShorthandMode};
pub use config::MatcherConfig;
pub use error::{MatchError, Result};
pub use names::{ColorRecord, PaletteStore, DEFAULT_COLORS};

/// Matcher over the built-in palette, built on first use
pub fn default_matcher() -> &'static ColorMatcher {
    static MATCHER: OnceLock<ColorMatcher> = OnceLock::new();
    MATCHER.get_or_init(ColorMatcher::default)
}

/// Name a hex color using the built-in palette
///
/// This is the main entry point for one-off lookups. See
/// [`ColorMatcher::match_color`] for the accepted input forms and the
/// selection rules.
///
/// # Errors
///
/// Returns `MatchError::InvalidColor` if `hex` is not a hex color.
pub fn name_color(hex: &str) -> Result<MatchResult> {
    default_matcher().match_color(hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_color_uses_default_palette() {
        let result = name_color("#FEE7F1").unwrap();
        assert_eq!(result.hex, "#FEE7F0");
        assert_eq!(result.color, "Rose");
        assert_eq!(result.color_name, "Cuisse de nymphe");
        assert!(!result.exact);
    }

    #[test]
    fn test_default_matcher_is_shared() {
        assert!(std::ptr::eq(default_matcher(), default_matcher()));
        assert_eq!(default_matcher().palette().len(), DEFAULT_COLORS.len());
    }

    #[test]
    fn test_match_result_serialization() {
        let result = name_color("#00FF00").unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: MatchResult = serde_json::from_str(&json).unwrap();

        assert_eq!(result, deserialized);
        assert!(json.contains("\"colorName\""));
    }
}
