//! The settings list shown next to the clock.

use hari_core::{ClockConfig, ConfigField, ConfigValue, FieldKind};
use ratatui::{
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
};

use crate::preview::parse_color;

/// Colors offered when cycling a color setting.
pub const SWATCHES: [&str; 12] = [
    "#ffffff", "#f5f0e6", "#cccccc", "#888888", "#333333", "#000000", "#ff6b6b", "#ffa94d",
    "#ffd43b", "#51cf66", "#339af0", "#845ef7",
];

/// The swatch after (or before) `current`, starting over at the ends.
pub fn next_swatch(current: &str, forward: bool) -> &'static str {
    let len = SWATCHES.len();
    match SWATCHES
        .iter()
        .position(|swatch| swatch.eq_ignore_ascii_case(current))
    {
        Some(i) if forward => SWATCHES[(i + 1) % len],
        Some(i) => SWATCHES[(i + len - 1) % len],
        None => SWATCHES[0],
    }
}

/// Build one line per setting, highlighting the selected one.
pub fn lines(config: &ClockConfig, selected: usize, accent: Color) -> Vec<Line<'static>> {
    ConfigField::ALL
        .iter()
        .enumerate()
        .map(|(i, &field)| {
            let value = config.get(field);
            let marker = if i == selected { "> " } else { "  " };
            let label = format!("{marker}{:<18}", field.label());
            let label = if i == selected {
                Span::styled(label, Style::new().fg(accent).add_modifier(Modifier::BOLD))
            } else {
                Span::raw(label)
            };

            let mut spans = vec![label, value_span(field, &value)];
            if let ConfigValue::Color(color) = &value {
                spans.push(" ".into());
                spans.push(Span::styled("  ", Style::new().bg(parse_color(color))));
            }
            Line::from(spans)
        })
        .collect()
}

fn value_span(field: ConfigField, value: &ConfigValue) -> Span<'static> {
    let text = match (field.kind(), value) {
        (FieldKind::Range { min, max, .. }, ConfigValue::Number(v)) => {
            format!("{v} ({min}-{max})")
        }
        _ => value.to_string(),
    };
    match value {
        ConfigValue::Flag(true) => text.green(),
        ConfigValue::Flag(false) => text.dark_gray(),
        _ => Span::raw(text),
    }
}
