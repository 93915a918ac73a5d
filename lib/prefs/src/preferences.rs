//! Preference value types and their textual encodings.
//!
//! The durable encodings are the exact strings the browser client stores,
//! so `Display`/`FromStr` round-trip through the storage schema. Parsing
//! rejects out-of-set values; callers hydrating from storage map those
//! errors to defaults, while API boundaries surface them as usage errors.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing a theme from its stored encoding fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError {
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme {:?} (expected \"dark\" or \"light\")", self.value)
    }
}

impl std::error::Error for ParseThemeError {}

/// Color theme.
///
/// The durable encoding goes exclusively through [`Theme::as_str`] and
/// [`FromStr`]; there is no second serialized form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Dark theme (the default).
    #[default]
    Dark,
    /// Light theme.
    Light,
}

impl Theme {
    /// Returns the other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Returns the stored encoding.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseThemeError {
                value: other.to_string(),
            }),
        }
    }
}

/// Error returned when parsing a font size from its stored encoding fails.
///
/// Out-of-set values are a caller usage error at the API boundary; they
/// are never silently coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFontSizeError {
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for ParseFontSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown font size {:?} (expected \"normal\", \"large\", or \"extra-large\")",
            self.value
        )
    }
}

impl std::error::Error for ParseFontSizeError {}

/// Text scale.
///
/// Encodes through [`FontSize::as_str`] and [`FromStr`] like [`Theme`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontSize {
    /// Standard text size (the default).
    #[default]
    Normal,
    /// Enlarged text.
    Large,
    /// Maximum text size.
    ExtraLarge,
}

impl FontSize {
    /// Returns the stored encoding.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Large => "large",
            Self::ExtraLarge => "extra-large",
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontSize {
    type Err = ParseFontSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "large" => Ok(Self::Large),
            "extra-large" => Ok(Self::ExtraLarge),
            other => Err(ParseFontSizeError {
                value: other.to_string(),
            }),
        }
    }
}

/// The full preference snapshot. Every field always has a defined value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    /// Color theme; defaults to dark.
    pub theme: Theme,
    /// Accessibility mode (captions, sign-language aids).
    pub accessibility_mode: bool,
    /// Text scale.
    pub font_size: FontSize,
    /// High-contrast rendering.
    pub high_contrast: bool,
}

impl Preferences {
    /// Attribute values a rendering layer applies to the document root so
    /// theme, contrast, and font scale stay in sync with the store.
    #[must_use]
    pub fn document_attributes(&self) -> [(&'static str, String); 4] {
        [
            ("data-theme", self.theme.to_string()),
            ("data-font-size", self.font_size.to_string()),
            ("data-high-contrast", self.high_contrast.to_string()),
            ("data-accessibility", self.accessibility_mode.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_storage_schema() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, Theme::Dark);
        assert!(!prefs.accessibility_mode);
        assert_eq!(prefs.font_size, FontSize::Normal);
        assert!(!prefs.high_contrast);
    }

    #[test]
    fn theme_toggled_flips_both_ways() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn theme_encoding_round_trips() {
        for theme in [Theme::Dark, Theme::Light] {
            let parsed: Theme = theme.as_str().parse().expect("parse");
            assert_eq!(parsed, theme);
        }
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let err = "solarized".parse::<Theme>().expect_err("should reject");
        assert_eq!(err.value, "solarized");
    }

    #[test]
    fn font_size_encoding_round_trips() {
        for size in [FontSize::Normal, FontSize::Large, FontSize::ExtraLarge] {
            let parsed: FontSize = size.as_str().parse().expect("parse");
            assert_eq!(parsed, size);
        }
    }

    #[test]
    fn out_of_set_font_size_is_rejected_not_coerced() {
        let err = "huge".parse::<FontSize>().expect_err("should reject");
        assert_eq!(err.value, "huge");
        assert!(err.to_string().contains("extra-large"));
    }

    #[test]
    fn document_attributes_reflect_values() {
        let prefs = Preferences {
            theme: Theme::Light,
            accessibility_mode: true,
            font_size: FontSize::ExtraLarge,
            high_contrast: false,
        };
        let attrs = prefs.document_attributes();
        assert!(attrs.contains(&("data-theme", "light".to_string())));
        assert!(attrs.contains(&("data-font-size", "extra-large".to_string())));
        assert!(attrs.contains(&("data-accessibility", "true".to_string())));
    }
}
