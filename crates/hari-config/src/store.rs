//! The single mutable clock configuration.

use hari_core::{ClockConfig, ConfigError, ConfigField, ConfigValue, FieldKind};
use tracing::debug;

/// Owns the live [`ClockConfig`] and applies single-field updates.
///
/// Every update builds a complete new record and swaps it in, so a
/// reader never sees a half-applied change.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    current: ClockConfig,
    revision: u64,
}

impl ConfigStore {
    /// A store holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &ClockConfig {
        &self.current
    }

    /// An owned copy of the current record.
    pub fn snapshot(&self) -> ClockConfig {
        self.current.clone()
    }

    /// Incremented on every change that altered the record.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace one field. Returns whether the record changed.
    ///
    /// On error the record is left as it was.
    pub fn update(&mut self, field: ConfigField, value: ConfigValue) -> Result<bool, ConfigError> {
        let next = self.current.with(field, value)?;
        if next == self.current {
            return Ok(false);
        }

        debug!(field = field.key(), value = %next.get(field), "setting updated");
        self.current = next;
        self.revision += 1;
        Ok(true)
    }

    /// Replace one field from its textual key and value.
    pub fn update_str(&mut self, key: &str, raw: &str) -> Result<bool, ConfigError> {
        let field: ConfigField = key.parse()?;
        let value = field.parse_value(raw)?;
        self.update(field, value)
    }

    /// Apply a `key=value` assignment.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<bool, ConfigError> {
        let (key, raw) = assignment
            .split_once('=')
            .ok_or_else(|| ConfigError::MalformedAssignment(assignment.to_string()))?;
        self.update_str(key, raw)
    }

    /// Move a range field by `steps` of its step size, clamped to its range.
    pub fn nudge(&mut self, field: ConfigField, steps: i32) -> Result<bool, ConfigError> {
        let FieldKind::Range { min, max, step } = field.kind() else {
            return Err(unsupported(field, "nudge"));
        };
        let ConfigValue::Number(current) = self.current.get(field) else {
            return Err(unsupported(field, "nudge"));
        };

        let next = (current + f64::from(steps) * step).clamp(min, max);
        self.update(field, ConfigValue::Number(next))
    }

    /// Flip a boolean field.
    pub fn toggle(&mut self, field: ConfigField) -> Result<bool, ConfigError> {
        match self.current.get(field) {
            ConfigValue::Flag(on) => self.update(field, ConfigValue::Flag(!on)),
            _ => Err(unsupported(field, "toggle")),
        }
    }

    /// Step a choice field to its next (or previous) option.
    pub fn cycle(&mut self, field: ConfigField, forward: bool) -> Result<bool, ConfigError> {
        let value = match self.current.get(field) {
            ConfigValue::Font(font) if forward => ConfigValue::Font(font.next()),
            ConfigValue::Font(font) => ConfigValue::Font(font.prev()),
            ConfigValue::Style(style) if forward => ConfigValue::Style(style.next()),
            ConfigValue::Style(style) => ConfigValue::Style(style.prev()),
            _ => return Err(unsupported(field, "cycle")),
        };
        self.update(field, value)
    }

    /// Go back to the default configuration.
    pub fn reset(&mut self) {
        if self.current != ClockConfig::default() {
            debug!("settings reset to defaults");
            self.current = ClockConfig::default();
            self.revision += 1;
        }
    }
}

fn unsupported(field: ConfigField, operation: &'static str) -> ConfigError {
    ConfigError::Unsupported {
        field: field.key(),
        operation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hari_core::{ClockStyle, NumberFont};

    #[test]
    fn test_starts_at_defaults() {
        let store = ConfigStore::new();
        assert_eq!(store.get(), &ClockConfig::default());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_update_replaces_one_field() {
        let mut store = ConfigStore::new();
        let before = store.snapshot();

        let changed = store
            .update(
                ConfigField::HourHandColor,
                ConfigValue::Color("#ff0000".to_string()),
            )
            .unwrap();
        assert!(changed);
        assert_eq!(store.revision(), 1);
        assert_eq!(store.get().hour_hand_color, "#ff0000");
        for field in ConfigField::ALL {
            if field != ConfigField::HourHandColor {
                assert_eq!(store.get().get(field), before.get(field));
            }
        }
    }

    #[test]
    fn test_same_value_is_not_a_change() {
        let mut store = ConfigStore::new();
        assert_eq!(store.update(ConfigField::Size, ConfigValue::Number(300.0)), Ok(false));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_failed_update_leaves_record() {
        let mut store = ConfigStore::new();
        let before = store.snapshot();
        assert!(store.update(ConfigField::Size, ConfigValue::Flag(true)).is_err());
        assert!(store.update_str("size", "huge").is_err());
        assert!(store.update_str("tickColor", "#000").is_err());
        assert_eq!(store.get(), &before);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_apply_assignment() {
        let mut store = ConfigStore::new();
        store.apply_assignment("numberFont=elegant").unwrap();
        store.apply_assignment("showBorder=true").unwrap();
        store.apply_assignment("secondHandColor=#00ff00").unwrap();
        assert_eq!(store.get().number_font, NumberFont::Elegant);
        assert!(store.get().show_border);
        assert_eq!(store.get().second_hand_color, "#00ff00");

        assert_eq!(
            store.apply_assignment("size"),
            Err(ConfigError::MalformedAssignment("size".to_string()))
        );
    }

    #[test]
    fn test_unknown_font_assignment_falls_back() {
        let mut store = ConfigStore::new();
        store.apply_assignment("numberFont=serif").unwrap();
        store.apply_assignment("numberFont=comic-sans").unwrap();
        assert_eq!(store.get().number_font, NumberFont::SansSerif);
    }

    #[test]
    fn test_nudge_clamps_to_range() {
        let mut store = ConfigStore::new();
        store.nudge(ConfigField::Size, 100).unwrap();
        assert_eq!(store.get().size, 500.0);
        store.nudge(ConfigField::Size, -3).unwrap();
        assert_eq!(store.get().size, 470.0);

        store.nudge(ConfigField::SecondHandWidth, -10).unwrap();
        assert_eq!(store.get().second_hand_width, 1.0);
        assert_eq!(store.nudge(ConfigField::SecondHandWidth, -1), Ok(false));

        assert!(matches!(
            store.nudge(ConfigField::FaceColor, 1),
            Err(ConfigError::Unsupported { operation: "nudge", .. })
        ));
    }

    #[test]
    fn test_toggle_and_cycle() {
        let mut store = ConfigStore::new();
        store.toggle(ConfigField::ShowSecondHand).unwrap();
        assert!(!store.get().show_second_hand);
        store.toggle(ConfigField::ShowSecondHand).unwrap();
        assert!(store.get().show_second_hand);

        store.cycle(ConfigField::ClockStyle, true).unwrap();
        assert_eq!(store.get().clock_style, ClockStyle::Classic);
        store.cycle(ConfigField::ClockStyle, false).unwrap();
        store.cycle(ConfigField::ClockStyle, false).unwrap();
        assert_eq!(store.get().clock_style, ClockStyle::Minimal);

        store.cycle(ConfigField::NumberFont, false).unwrap();
        assert_eq!(store.get().number_font, NumberFont::Elegant);

        assert!(store.toggle(ConfigField::Size).is_err());
        assert!(store.cycle(ConfigField::ShowMarks, true).is_err());
    }

    #[test]
    fn test_reset() {
        let mut store = ConfigStore::new();
        store.apply_assignment("size=250").unwrap();
        store.reset();
        assert_eq!(store.get(), &ClockConfig::default());
        assert_eq!(store.revision(), 2);
        store.reset();
        assert_eq!(store.revision(), 2);
    }
}
