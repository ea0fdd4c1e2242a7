//! Nearest named color matching
//!
//! Ranks every palette record against the input with a combined squared
//! distance over RGB and scaled HSL, after checking for a record with the
//! identical hex code.

use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::conversion::{ColorConverter, Rgb, ScaledHsl, ShorthandMode};
use crate::{
    config::MatcherConfig,
    constants::hex,
    names::{ColorRecord, PaletteStore},
    MatchError, Result,
};

/// A color described in both models the metric compares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPoint {
    pub rgb: Rgb,
    pub hsl: ScaledHsl,
}

impl ColorPoint {
    pub fn new(converter: &ColorConverter, rgb: Rgb) -> Self {
        Self {
            rgb,
            hsl: converter.rgb_to_hsl(rgb),
        }
    }
}

/// Combined squared RGB and HSL distance between two colors
pub fn distance(a: &ColorPoint, b: &ColorPoint) -> u32 {
    let sq = |x: i32, y: i32| (x - y).unsigned_abs().pow(2);

    let rgb = sq(a.rgb.red.into(), b.rgb.red.into())
        + sq(a.rgb.green.into(), b.rgb.green.into())
        + sq(a.rgb.blue.into(), b.rgb.blue.into());
    let hsl = sq(a.hsl.h, b.hsl.h) + sq(a.hsl.s, b.hsl.s) + sq(a.hsl.l, b.hsl.l);

    rgb + hsl
}

/// Named color selected for an input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Hex code of the palette record, with `#`
    pub hex: String,
    /// Color family of the record
    pub color: String,
    /// Display name of the record
    pub color_name: String,
    /// Whether the record has exactly the input's hex code
    pub exact: bool,
}

impl MatchResult {
    fn from_record(record: &ColorRecord, exact: bool) -> Self {
        Self {
            hex: record.prefixed_hex(),
            color: record.category().to_string(),
            color_name: record.name().to_string(),
            exact,
        }
    }

    /// RGB of the matched palette color
    pub fn rgb(&self) -> Result<Rgb> {
        ColorConverter::new().hex_to_rgb(&self.hex)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.color_name, self.color, self.hex)
    }
}

/// Matches hex colors against an immutable palette
///
/// Record RGB/HSL values are computed once at construction; `match_color`
/// only reads shared state and may be called from many threads at once.
#[derive(Debug, Clone)]
pub struct ColorMatcher {
    store: PaletteStore,
    points: Vec<ColorPoint>,
    converter: ColorConverter,
}

impl Default for ColorMatcher {
    /// Matcher over the built-in palette
    fn default() -> Self {
        Self::build(PaletteStore::default(), ColorConverter::new())
    }
}

impl ColorMatcher {
    /// Create a matcher over a palette
    ///
    /// # Errors
    ///
    /// Returns `MatchError::EmptyPalette` if the store has no records. An
    /// empty palette is rejected rather than replaced by the built-in one.
    pub fn new(store: PaletteStore) -> Result<Self> {
        Self::with_converter(store, ColorConverter::new())
    }

    /// Create a matcher with a specific shorthand rule
    pub fn with_shorthand(store: PaletteStore, shorthand: ShorthandMode) -> Result<Self> {
        Self::with_converter(store, ColorConverter::with_shorthand(shorthand))
    }

    /// Create a matcher from configuration
    ///
    /// Uses the configured palette file when set, the built-in table otherwise.
    pub fn from_config(config: &MatcherConfig) -> Result<Self> {
        config.validate()?;
        Self::with_shorthand(config.load_palette()?, config.shorthand)
    }

    fn with_converter(store: PaletteStore, converter: ColorConverter) -> Result<Self> {
        if store.is_empty() {
            return Err(MatchError::EmptyPalette);
        }

        let matcher = Self::build(store, converter);
        let aliases = matcher.alias_count();
        if aliases > 0 {
            debug!(
                "palette has {} records sharing a hex code with an earlier one",
                aliases
            );
        }
        Ok(matcher)
    }

    fn build(store: PaletteStore, converter: ColorConverter) -> Self {
        let points = store
            .records()
            .iter()
            .map(|record| ColorPoint::new(&converter, record.rgb()))
            .collect();

        Self {
            store,
            points,
            converter,
        }
    }

    /// Records whose hex already appeared earlier in the palette
    fn alias_count(&self) -> usize {
        let records = self.store.records();
        records
            .iter()
            .enumerate()
            .filter(|(i, record)| records[..*i].iter().any(|r| r.hex() == record.hex()))
            .count()
    }

    /// The palette this matcher was built with
    pub fn palette(&self) -> &PaletteStore {
        &self.store
    }

    pub fn converter(&self) -> &ColorConverter {
        &self.converter
    }

    /// Name a hex color
    ///
    /// Accepts `#RRGGBB`, `RRGGBB` or a 3-digit shorthand, in any case. The
    /// first record with the same hex code is returned as an exact match;
    /// otherwise the record with the lowest [`distance`] wins, ties going to
    /// the earliest record.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidColor` if the input is not a hex color.
    pub fn match_color(&self, input: &str) -> Result<MatchResult> {
        let normalized = self.converter.normalize(input)?;
        let digits = normalized.strip_prefix(hex::PREFIX).unwrap_or(normalized.as_str());
        let target = ColorPoint::new(&self.converter, self.converter.hex_to_rgb(digits)?);

        let records = self.store.records();
        if let Some(record) = records.iter().find(|record| record.hex() == digits) {
            debug!("{} exact match: {}", normalized, record.name());
            return Ok(MatchResult::from_record(record, true));
        }

        let best = records.iter().zip(&self.points).fold(
            None::<(u32, &ColorRecord)>,
            |best, (record, point)| {
                let score = distance(&target, point);
                match best {
                    Some((best_score, _)) if best_score <= score => best,
                    _ => {
                        trace!("{} closer candidate {} (score {})", normalized, record.hex(), score);
                        Some((score, record))
                    }
                }
            },
        );

        let (score, record) = best.ok_or_else(|| MatchError::invalid_color(input))?;
        debug!(
            "{} nearest match: {} #{} (score {})",
            normalized,
            record.name(),
            record.hex(),
            score
        );
        Ok(MatchResult::from_record(record, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hex: &str, category: &str, name: &str) -> ColorRecord {
        ColorRecord::new(hex, category, name).unwrap()
    }

    fn black_and_white() -> ColorMatcher {
        ColorMatcher::new(PaletteStore::new(vec![
            record("FFFFFF", "Blanc", "Blanc clair"),
            record("000000", "Noir", "Noir foncé"),
        ]))
        .unwrap()
    }

    fn point(hex: &str) -> ColorPoint {
        let converter = ColorConverter::new();
        ColorPoint::new(&converter, converter.hex_to_rgb(hex).unwrap())
    }

    #[test]
    fn test_distance_identical_is_zero() {
        assert_eq!(distance(&point("FEE7F1"), &point("FEE7F1")), 0);
    }

    #[test]
    fn test_distance_sums_rgb_and_hsl() {
        // rgb: blue differs by 1; hsl: hue -18 vs -16
        assert_eq!(distance(&point("FEE7F1"), &point("FEE7F0")), 1 + 4);
        assert_eq!(distance(&point("FEE7F1"), &point("FFFFFF")), 56022);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = point("123456");
        let b = point("C7D0CC");
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn test_empty_palette_rejected() {
        let err = ColorMatcher::new(PaletteStore::new(Vec::new())).unwrap_err();
        assert!(matches!(err, MatchError::EmptyPalette));
    }

    #[test]
    fn test_exact_match_any_case_and_prefix() {
        let matcher = black_and_white();
        for input in ["#FFFFFF", "ffffff", "#fff", "FFF"] {
            let result = matcher.match_color(input).unwrap();
            assert!(result.exact, "{} should match exactly", input);
            assert_eq!(result.color_name, "Blanc clair");
        }
    }

    #[test]
    fn test_nearest_match_two_color_palette() {
        let result = black_and_white().match_color("#FEE7F1").unwrap();
        assert_eq!(
            result,
            MatchResult {
                hex: "#FFFFFF".to_string(),
                color: "Blanc".to_string(),
                color_name: "Blanc clair".to_string(),
                exact: false,
            }
        );
    }

    #[test]
    fn test_exact_match_prefers_first_alias() {
        let matcher = ColorMatcher::new(PaletteStore::new(vec![
            record("000000", "Noir", "Noir"),
            record("123456", "Bleu", "Premier"),
            record("123456", "Bleu", "Second"),
        ]))
        .unwrap();
        assert_eq!(matcher.alias_count(), 1);

        let result = matcher.match_color("#123456").unwrap();
        assert!(result.exact);
        assert_eq!(result.color_name, "Premier");
    }

    #[test]
    fn test_exact_match_wins_over_earlier_near_record() {
        let matcher = ColorMatcher::new(PaletteStore::new(vec![
            record("FF0001", "Rouge", "Presque"),
            record("FF0000", "Rouge", "Rouge"),
        ]))
        .unwrap();
        let result = matcher.match_color("#FF0000").unwrap();
        assert!(result.exact);
        assert_eq!(result.color_name, "Rouge");
    }

    #[test]
    fn test_tie_keeps_earliest_record() {
        // equidistant from the input, listed in both orders
        let a = record("FEE7F0", "Rose", "Cuisse de nymphe");
        let b = record("FEE7F0", "Blanc", "Cuisse de nymphe");

        let matcher = ColorMatcher::new(PaletteStore::new(vec![a.clone(), b.clone()])).unwrap();
        assert_eq!(matcher.match_color("#FEE7F1").unwrap().color, "Rose");

        let matcher = ColorMatcher::new(PaletteStore::new(vec![b, a])).unwrap();
        assert_eq!(matcher.match_color("#FEE7F1").unwrap().color, "Blanc");
    }

    #[test]
    fn test_invalid_input_never_matches() {
        let matcher = black_and_white();
        for input in ["#12", "#GGGGGG", "notacolor", ""] {
            assert!(matches!(
                matcher.match_color(input),
                Err(MatchError::InvalidColor { .. })
            ));
        }
    }

    #[test]
    fn test_shorthand_mode_changes_target() {
        let store = PaletteStore::new(vec![
            record("AABBCC", "Gris", "Doublé"),
            record("ABCABC", "Gris", "Répété"),
        ]);

        let concatenate = ColorMatcher::new(store.clone()).unwrap();
        assert_eq!(concatenate.match_color("#ABC").unwrap().color_name, "Répété");

        let expand = ColorMatcher::with_shorthand(store, ShorthandMode::Expand).unwrap();
        assert_eq!(expand.match_color("#ABC").unwrap().color_name, "Doublé");
        assert_eq!(expand.converter().shorthand(), ShorthandMode::Expand);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = black_and_white().match_color("#000").unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["hex"], "#000000");
        assert_eq!(json["color"], "Noir");
        assert_eq!(json["colorName"], "Noir foncé");
        assert_eq!(json["exact"], true);
    }

    #[test]
    fn test_result_display_and_rgb() {
        let result = black_and_white().match_color("#FEE7F1").unwrap();
        assert_eq!(result.to_string(), "Blanc clair (Blanc, #FFFFFF)");
        assert_eq!(result.rgb().unwrap(), Rgb::new(255, 255, 255));
    }
}
