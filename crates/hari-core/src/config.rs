//! The clock configuration record.

use serde::{Deserialize, Serialize};

use crate::{ClockStyle, ConfigError, ConfigField, ConfigValue, NumberFont};

/// Everything that controls how the clock looks.
///
/// Colors are kept as the strings the user entered and handed to the
/// render target untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClockConfig {
    /// Edge length of the square drawing area in pixels.
    pub size: f64,
    pub background_color: String,
    pub face_color: String,
    pub hour_hand_color: String,
    pub minute_hand_color: String,
    pub second_hand_color: String,
    pub numbers_color: String,
    pub marks_color: String,
    pub show_numbers: bool,
    pub show_second_hand: bool,
    pub show_marks: bool,
    pub show_border: bool,
    pub hour_hand_width: f64,
    pub minute_hand_width: f64,
    pub second_hand_width: f64,
    pub number_font: NumberFont,
    pub clock_style: ClockStyle,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            size: 300.0,
            background_color: "#ffffff".to_string(),
            face_color: "#ffffff".to_string(),
            hour_hand_color: "#333333".to_string(),
            minute_hand_color: "#333333".to_string(),
            second_hand_color: "#ff6b6b".to_string(),
            numbers_color: "#333333".to_string(),
            marks_color: "#cccccc".to_string(),
            show_numbers: true,
            show_second_hand: true,
            show_marks: true,
            show_border: false,
            hour_hand_width: 8.0,
            minute_hand_width: 6.0,
            second_hand_width: 2.0,
            number_font: NumberFont::SansSerif,
            clock_style: ClockStyle::Modern,
        }
    }
}

impl ClockConfig {
    /// Read a single field.
    pub fn get(&self, field: ConfigField) -> ConfigValue {
        match field {
            ConfigField::Size => ConfigValue::Number(self.size),
            ConfigField::HourHandWidth => ConfigValue::Number(self.hour_hand_width),
            ConfigField::MinuteHandWidth => ConfigValue::Number(self.minute_hand_width),
            ConfigField::SecondHandWidth => ConfigValue::Number(self.second_hand_width),
            ConfigField::ShowNumbers => ConfigValue::Flag(self.show_numbers),
            ConfigField::ShowMarks => ConfigValue::Flag(self.show_marks),
            ConfigField::ShowBorder => ConfigValue::Flag(self.show_border),
            ConfigField::ShowSecondHand => ConfigValue::Flag(self.show_second_hand),
            ConfigField::NumberFont => ConfigValue::Font(self.number_font),
            ConfigField::ClockStyle => ConfigValue::Style(self.clock_style),
            ConfigField::BackgroundColor => ConfigValue::Color(self.background_color.clone()),
            ConfigField::FaceColor => ConfigValue::Color(self.face_color.clone()),
            ConfigField::HourHandColor => ConfigValue::Color(self.hour_hand_color.clone()),
            ConfigField::MinuteHandColor => ConfigValue::Color(self.minute_hand_color.clone()),
            ConfigField::SecondHandColor => ConfigValue::Color(self.second_hand_color.clone()),
            ConfigField::NumbersColor => ConfigValue::Color(self.numbers_color.clone()),
            ConfigField::MarksColor => ConfigValue::Color(self.marks_color.clone()),
        }
    }

    /// Return a copy of this record with one field replaced.
    ///
    /// The value must have the field's type. Numbers are taken as given.
    pub fn with(&self, field: ConfigField, value: ConfigValue) -> Result<Self, ConfigError> {
        let mut next = self.clone();
        match (field, value) {
            (ConfigField::Size, ConfigValue::Number(v)) => next.size = v,
            (ConfigField::HourHandWidth, ConfigValue::Number(v)) => next.hour_hand_width = v,
            (ConfigField::MinuteHandWidth, ConfigValue::Number(v)) => next.minute_hand_width = v,
            (ConfigField::SecondHandWidth, ConfigValue::Number(v)) => next.second_hand_width = v,
            (ConfigField::ShowNumbers, ConfigValue::Flag(b)) => next.show_numbers = b,
            (ConfigField::ShowMarks, ConfigValue::Flag(b)) => next.show_marks = b,
            (ConfigField::ShowBorder, ConfigValue::Flag(b)) => next.show_border = b,
            (ConfigField::ShowSecondHand, ConfigValue::Flag(b)) => next.show_second_hand = b,
            (ConfigField::NumberFont, ConfigValue::Font(f)) => next.number_font = f,
            (ConfigField::ClockStyle, ConfigValue::Style(s)) => next.clock_style = s,
            (field, ConfigValue::Color(c)) => match next.color_mut(field) {
                Some(slot) => *slot = c,
                None => return Err(field.mismatch(&ConfigValue::Color(c))),
            },
            (field, other) => return Err(field.mismatch(&other)),
        }
        Ok(next)
    }

    fn color_mut(&mut self, field: ConfigField) -> Option<&mut String> {
        let color = match field {
            ConfigField::BackgroundColor => &mut self.background_color,
            ConfigField::FaceColor => &mut self.face_color,
            ConfigField::HourHandColor => &mut self.hour_hand_color,
            ConfigField::MinuteHandColor => &mut self.minute_hand_color,
            ConfigField::SecondHandColor => &mut self.second_hand_color,
            ConfigField::NumbersColor => &mut self.numbers_color,
            ConfigField::MarksColor => &mut self.marks_color,
            _ => return None,
        };
        Some(color)
    }
}
