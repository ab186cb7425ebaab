//! Numeral fonts and clock styles.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Font family used for the hour numerals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum NumberFont {
    #[default]
    SansSerif,
    Serif,
    Monospace,
    Rounded,
    Elegant,
}

impl NumberFont {
    pub const ALL: [NumberFont; 5] = [
        NumberFont::SansSerif,
        NumberFont::Serif,
        NumberFont::Monospace,
        NumberFont::Rounded,
        NumberFont::Elegant,
    ];

    /// Resolve a font key. Unknown keys fall back to sans-serif.
    pub fn resolve(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|font| font.key().eq_ignore_ascii_case(key.trim()))
            .unwrap_or_default()
    }

    /// Settings key of this font.
    pub fn key(self) -> &'static str {
        match self {
            NumberFont::SansSerif => "sans-serif",
            NumberFont::Serif => "serif",
            NumberFont::Monospace => "monospace",
            NumberFont::Rounded => "rounded",
            NumberFont::Elegant => "elegant",
        }
    }

    /// CSS font stack drawn for this font.
    pub fn font_stack(self) -> &'static str {
        match self {
            NumberFont::SansSerif => "'Inter', sans-serif",
            NumberFont::Serif => "'Georgia', serif",
            NumberFont::Monospace => "'Courier New', monospace",
            NumberFont::Rounded => "'Quicksand', sans-serif",
            NumberFont::Elegant => "'Playfair Display', serif",
        }
    }

    /// Cycle to the next font.
    pub fn next(self) -> Self {
        match self {
            NumberFont::SansSerif => NumberFont::Serif,
            NumberFont::Serif => NumberFont::Monospace,
            NumberFont::Monospace => NumberFont::Rounded,
            NumberFont::Rounded => NumberFont::Elegant,
            NumberFont::Elegant => NumberFont::SansSerif,
        }
    }

    /// Cycle to the previous font.
    pub fn prev(self) -> Self {
        match self {
            NumberFont::SansSerif => NumberFont::Elegant,
            NumberFont::Serif => NumberFont::SansSerif,
            NumberFont::Monospace => NumberFont::Serif,
            NumberFont::Rounded => NumberFont::Monospace,
            NumberFont::Elegant => NumberFont::Rounded,
        }
    }
}

/// Look up the font stack for a raw font key, falling back to sans-serif.
pub fn font_stack_for(key: &str) -> &'static str {
    NumberFont::resolve(key).font_stack()
}

impl From<String> for NumberFont {
    fn from(key: String) -> Self {
        Self::resolve(&key)
    }
}

impl From<&str> for NumberFont {
    fn from(key: &str) -> Self {
        Self::resolve(key)
    }
}

impl fmt::Display for NumberFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Overall look of the clock. Only affects the drop shadow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockStyle {
    #[default]
    Modern,
    Classic,
    Minimal,
}

impl ClockStyle {
    pub const ALL: [ClockStyle; 3] = [ClockStyle::Modern, ClockStyle::Classic, ClockStyle::Minimal];

    pub fn key(self) -> &'static str {
        match self {
            ClockStyle::Modern => "modern",
            ClockStyle::Classic => "classic",
            ClockStyle::Minimal => "minimal",
        }
    }

    /// Drop shadow cast by the whole clock, if any.
    pub fn shadow(self) -> Option<Shadow> {
        match self {
            ClockStyle::Modern => Some(Shadow {
                offset_y: 20.0,
                blur: 40.0,
                opacity: 0.3,
            }),
            ClockStyle::Classic => Some(Shadow {
                offset_y: 10.0,
                blur: 20.0,
                opacity: 0.2,
            }),
            ClockStyle::Minimal => None,
        }
    }

    /// Cycle to the next style.
    pub fn next(self) -> Self {
        match self {
            ClockStyle::Modern => ClockStyle::Classic,
            ClockStyle::Classic => ClockStyle::Minimal,
            ClockStyle::Minimal => ClockStyle::Modern,
        }
    }

    /// Cycle to the previous style.
    pub fn prev(self) -> Self {
        match self {
            ClockStyle::Modern => ClockStyle::Minimal,
            ClockStyle::Classic => ClockStyle::Modern,
            ClockStyle::Minimal => ClockStyle::Classic,
        }
    }
}

impl FromStr for ClockStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownStyle(s.to_string()))
    }
}

impl fmt::Display for ClockStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A black drop shadow cast straight down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// Vertical offset in pixels.
    pub offset_y: f64,
    /// Blur radius in pixels.
    pub blur: f64,
    /// Opacity of the shadow color (0.0 - 1.0).
    pub opacity: f64,
}

impl Shadow {
    /// CSS `filter` value for this shadow.
    pub fn css_filter(&self) -> String {
        format!(
            "drop-shadow(0 {}px {}px rgba(0,0,0,{}))",
            self.offset_y, self.blur, self.opacity
        )
    }
}
