//! The catalogue of user-adjustable settings.

use std::{fmt, str::FromStr};

use crate::{ClockStyle, ConfigError, NumberFont};

/// One adjustable field of [`crate::ClockConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    Size,
    ClockStyle,
    NumberFont,
    BackgroundColor,
    FaceColor,
    HourHandColor,
    MinuteHandColor,
    SecondHandColor,
    NumbersColor,
    MarksColor,
    ShowNumbers,
    ShowMarks,
    ShowBorder,
    ShowSecondHand,
    HourHandWidth,
    MinuteHandWidth,
    SecondHandWidth,
}

/// What kind of control edits a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// A slider over an inclusive range.
    Range { min: f64, max: f64, step: f64 },
    Color,
    Toggle,
    /// A fixed list of options.
    Choice,
}

impl FieldKind {
    fn describe(self) -> &'static str {
        match self {
            FieldKind::Range { .. } => "a number",
            FieldKind::Color => "a color",
            FieldKind::Toggle => "a boolean",
            FieldKind::Choice => "one of its options",
        }
    }
}

impl ConfigField {
    /// All fields, in settings panel order.
    pub const ALL: [ConfigField; 17] = [
        ConfigField::Size,
        ConfigField::ClockStyle,
        ConfigField::NumberFont,
        ConfigField::BackgroundColor,
        ConfigField::FaceColor,
        ConfigField::HourHandColor,
        ConfigField::MinuteHandColor,
        ConfigField::SecondHandColor,
        ConfigField::NumbersColor,
        ConfigField::MarksColor,
        ConfigField::ShowNumbers,
        ConfigField::ShowMarks,
        ConfigField::ShowBorder,
        ConfigField::ShowSecondHand,
        ConfigField::HourHandWidth,
        ConfigField::MinuteHandWidth,
        ConfigField::SecondHandWidth,
    ];

    /// Settings key, as used on the command line and in exported JSON.
    pub fn key(self) -> &'static str {
        match self {
            ConfigField::Size => "size",
            ConfigField::ClockStyle => "clockStyle",
            ConfigField::NumberFont => "numberFont",
            ConfigField::BackgroundColor => "backgroundColor",
            ConfigField::FaceColor => "faceColor",
            ConfigField::HourHandColor => "hourHandColor",
            ConfigField::MinuteHandColor => "minuteHandColor",
            ConfigField::SecondHandColor => "secondHandColor",
            ConfigField::NumbersColor => "numbersColor",
            ConfigField::MarksColor => "marksColor",
            ConfigField::ShowNumbers => "showNumbers",
            ConfigField::ShowMarks => "showMarks",
            ConfigField::ShowBorder => "showBorder",
            ConfigField::ShowSecondHand => "showSecondHand",
            ConfigField::HourHandWidth => "hourHandWidth",
            ConfigField::MinuteHandWidth => "minuteHandWidth",
            ConfigField::SecondHandWidth => "secondHandWidth",
        }
    }

    /// Human readable label for the settings panel.
    pub fn label(self) -> &'static str {
        match self {
            ConfigField::Size => "Size",
            ConfigField::ClockStyle => "Style",
            ConfigField::NumberFont => "Number font",
            ConfigField::BackgroundColor => "Background",
            ConfigField::FaceColor => "Face",
            ConfigField::HourHandColor => "Hour hand",
            ConfigField::MinuteHandColor => "Minute hand",
            ConfigField::SecondHandColor => "Second hand",
            ConfigField::NumbersColor => "Numbers",
            ConfigField::MarksColor => "Marks",
            ConfigField::ShowNumbers => "Show numbers",
            ConfigField::ShowMarks => "Show marks",
            ConfigField::ShowBorder => "Show border",
            ConfigField::ShowSecondHand => "Show second hand",
            ConfigField::HourHandWidth => "Hour hand width",
            ConfigField::MinuteHandWidth => "Minute hand width",
            ConfigField::SecondHandWidth => "Second hand width",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            ConfigField::Size => FieldKind::Range {
                min: 200.0,
                max: 500.0,
                step: 10.0,
            },
            ConfigField::HourHandWidth => FieldKind::Range {
                min: 4.0,
                max: 16.0,
                step: 1.0,
            },
            ConfigField::MinuteHandWidth => FieldKind::Range {
                min: 3.0,
                max: 12.0,
                step: 1.0,
            },
            ConfigField::SecondHandWidth => FieldKind::Range {
                min: 1.0,
                max: 6.0,
                step: 1.0,
            },
            ConfigField::BackgroundColor
            | ConfigField::FaceColor
            | ConfigField::HourHandColor
            | ConfigField::MinuteHandColor
            | ConfigField::SecondHandColor
            | ConfigField::NumbersColor
            | ConfigField::MarksColor => FieldKind::Color,
            ConfigField::ShowNumbers
            | ConfigField::ShowMarks
            | ConfigField::ShowBorder
            | ConfigField::ShowSecondHand => FieldKind::Toggle,
            ConfigField::ClockStyle | ConfigField::NumberFont => FieldKind::Choice,
        }
    }

    /// Parse a textual value for this field.
    ///
    /// Numbers are not range checked. Fonts never fail to parse.
    pub fn parse_value(self, raw: &str) -> Result<ConfigValue, ConfigError> {
        let raw = raw.trim();
        let invalid = || ConfigError::InvalidValue {
            field: self.key(),
            value: raw.to_string(),
        };

        match self.kind() {
            FieldKind::Range { .. } => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(ConfigValue::Number)
                .ok_or_else(invalid),
            FieldKind::Color if raw.is_empty() => Err(invalid()),
            FieldKind::Color => Ok(ConfigValue::Color(raw.to_string())),
            FieldKind::Toggle => match raw.to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => Ok(ConfigValue::Flag(true)),
                "false" | "off" | "no" | "0" => Ok(ConfigValue::Flag(false)),
                _ => Err(invalid()),
            },
            FieldKind::Choice => match self {
                ConfigField::NumberFont => Ok(ConfigValue::Font(NumberFont::resolve(raw))),
                _ => raw.parse::<ClockStyle>().map(ConfigValue::Style),
            },
        }
    }

    pub(crate) fn mismatch(self, found: &ConfigValue) -> ConfigError {
        ConfigError::TypeMismatch {
            field: self.key(),
            expected: self.kind().describe(),
            found: found.kind_name(),
        }
    }
}

impl FromStr for ConfigField {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| ConfigError::UnknownField(key.to_string()))
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The value held by a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Number(f64),
    Color(String),
    Flag(bool),
    Font(NumberFont),
    Style(ClockStyle),
}

impl ConfigValue {
    fn kind_name(&self) -> &'static str {
        match self {
            ConfigValue::Number(_) => "a number",
            ConfigValue::Color(_) => "a color",
            ConfigValue::Flag(_) => "a boolean",
            ConfigValue::Font(_) => "a font",
            ConfigValue::Style(_) => "a style",
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Number(v) => write!(f, "{v}"),
            ConfigValue::Color(c) => f.write_str(c),
            ConfigValue::Flag(true) => f.write_str("on"),
            ConfigValue::Flag(false) => f.write_str("off"),
            ConfigValue::Font(font) => write!(f, "{font}"),
            ConfigValue::Style(style) => write!(f, "{style}"),
        }
    }
}
