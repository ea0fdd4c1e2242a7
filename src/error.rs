//! Error types for the color_name library

use thiserror::Error;

/// Result type alias for color_name operations
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors raised while building a matcher or naming a color
#[derive(Error, Debug)]
pub enum MatchError {
    /// Input is not a well-formed hex color once normalized
    #[error("Invalid Color: {input}")]
    InvalidColor { input: String },

    /// Matcher constructed with zero palette records
    #[error("Palette is empty: at least one color record is required")]
    EmptyPalette,

    /// Color record built with a hex that is not six hexadecimal digits
    #[error("Invalid record hex: {hex:?} is not a 6-digit hex color")]
    InvalidRecordHex { hex: String },

    /// Palette list entry whose hex is not six hexadecimal digits
    #[error("Invalid palette entry #{index}: {hex:?} is not a 6-digit hex color")]
    InvalidPaletteEntry { index: usize, hex: String },

    /// Configuration or palette file could not be read, written or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MatchError {
    /// Create an invalid color error for the offending input
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Attach the position of the palette entry a record error came from
    pub fn at_entry(self, index: usize) -> Self {
        match self {
            Self::InvalidRecordHex { hex } => Self::InvalidPaletteEntry { index, hex },
            other => other,
        }
    }

    /// Check if this error was caused by the color passed to a match call
    ///
    /// Every other variant is raised while setting a matcher up.
    pub fn is_input_error(&self) -> bool {
        matches!(self, MatchError::InvalidColor { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            MatchError::InvalidColor { input } => format!(
                "'{}' is not a color. Use a hex code such as #FEE7F1 or #ABC.",
                input
            ),
            MatchError::EmptyPalette => {
                "The palette has no colors. Provide at least one entry.".to_string()
            }
            MatchError::InvalidRecordHex { hex } => format!(
                "'{}' is not a valid palette hex code. Use six hex digits without '#'.",
                hex
            ),
            MatchError::InvalidPaletteEntry { index, hex } => format!(
                "Palette entry {} has an invalid hex code '{}'. Use six hex digits without '#'.",
                index, hex
            ),
            MatchError::ConfigError { message, .. } => {
                format!("Could not load settings: {}", message)
            }
        }
    }
}
