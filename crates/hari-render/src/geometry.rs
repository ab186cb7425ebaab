//! Placement of tick marks and numerals around the dial.

use hari_core::ClockConfig;
use serde::Serialize;

/// Number of tick marks around the dial.
pub const TICK_COUNT: u8 = 60;

/// Ring the tick marks hang inward from, as a fraction of size.
const MARK_RING: f64 = 0.42;
/// Length of an hour mark, as a fraction of size.
const HOUR_MARK_LENGTH: f64 = 0.06;
/// Length of a minute mark, as a fraction of size.
const MINUTE_MARK_LENGTH: f64 = 0.03;
const HOUR_MARK_WIDTH: f64 = 2.0;
const MINUTE_MARK_WIDTH: f64 = 1.0;

/// Ring the numerals sit on, as a fraction of size.
const NUMERAL_RING: f64 = 0.35;
/// Numeral font size, as a fraction of size.
const NUMERAL_FONT_SCALE: f64 = 0.08;

/// A point in drawing coordinates (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Center of a square drawing area of the given size.
pub fn center(size: f64) -> Point {
    Point::new(size / 2.0, size / 2.0)
}

/// Project from `origin` by `radius` along `degrees`.
///
/// Uses the math convention: 0 degrees points at three o'clock and
/// angles grow clockwise on screen because y grows downward.
pub fn polar(origin: Point, radius: f64, degrees: f64) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        origin.x + radius * radians.cos(),
        origin.y + radius * radians.sin(),
    )
}

/// One radial tick mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickMark {
    /// Minute position, 0 at the top.
    pub index: u8,
    /// Whether this mark sits on an hour.
    pub is_hour: bool,
    /// Screen angle in degrees (math convention).
    pub angle_deg: f64,
    /// Outer end, on the mark ring.
    pub start: Point,
    /// Inner end, `length` closer to the center.
    pub end: Point,
    pub length: f64,
    pub width: f64,
}

/// One hour numeral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Numeral {
    /// Label, 1 to 12.
    pub value: u8,
    /// Screen angle in degrees (math convention).
    pub angle_deg: f64,
    /// Center of the glyph.
    pub position: Point,
    pub font_size: f64,
    pub font_family: &'static str,
}

/// Build the 60 tick marks, or nothing when marks are hidden.
pub fn tick_marks(config: &ClockConfig) -> Vec<TickMark> {
    if !config.show_marks {
        return Vec::new();
    }

    let size = config.size;
    let origin = center(size);
    let ring = size * MARK_RING;

    (0..TICK_COUNT)
        .map(|index| {
            let angle_deg = f64::from(index) * 6.0 - 90.0;
            let is_hour = index % 5 == 0;
            let (length, width) = if is_hour {
                (size * HOUR_MARK_LENGTH, HOUR_MARK_WIDTH)
            } else {
                (size * MINUTE_MARK_LENGTH, MINUTE_MARK_WIDTH)
            };

            TickMark {
                index,
                is_hour,
                angle_deg,
                start: polar(origin, ring, angle_deg),
                end: polar(origin, ring - length, angle_deg),
                length,
                width,
            }
        })
        .collect()
}

/// Build the 12 hour numerals, or nothing when numbers are hidden.
pub fn numerals(config: &ClockConfig) -> Vec<Numeral> {
    if !config.show_numbers {
        return Vec::new();
    }

    let size = config.size;
    let origin = center(size);
    let ring = size * NUMERAL_RING;
    let font_family = config.number_font.font_stack();

    (1..=12u8)
        .map(|value| {
            let angle_deg = f64::from(value) * 30.0 - 90.0;
            Numeral {
                value,
                angle_deg,
                position: polar(origin, ring, angle_deg),
                font_size: size * NUMERAL_FONT_SCALE,
                font_family,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hari_core::NumberFont;

    const EPSILON: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn test_sixty_marks_twelve_of_them_hours() {
        let marks = tick_marks(&ClockConfig::default());
        assert_eq!(marks.len(), 60);
        assert_eq!(marks.iter().filter(|m| m.is_hour).count(), 12);
        assert!(marks.iter().all(|m| m.is_hour == (m.index % 5 == 0)));
    }

    #[test]
    fn test_hidden_marks_are_empty() {
        let config = ClockConfig {
            show_marks: false,
            ..Default::default()
        };
        assert!(tick_marks(&config).is_empty());
    }

    #[test]
    fn test_mark_dimensions() {
        let marks = tick_marks(&ClockConfig::default());
        let hour = &marks[0];
        let minute = &marks[1];
        assert!((hour.length - 18.0).abs() < EPSILON);
        assert!((minute.length - 9.0).abs() < EPSILON);
        assert_eq!((hour.width, minute.width), (2.0, 1.0));
    }

    #[test]
    fn test_first_mark_points_straight_up() {
        let marks = tick_marks(&ClockConfig::default());
        // size 300: center 150, ring 126, hour mark 18 long
        assert!(close(marks[0].start, Point::new(150.0, 24.0)));
        assert!(close(marks[0].end, Point::new(150.0, 42.0)));
        // quarter past sits at three o'clock
        assert!(close(marks[15].start, Point::new(276.0, 150.0)));
    }

    #[test]
    fn test_twelve_numerals_in_order() {
        let numerals = numerals(&ClockConfig::default());
        assert_eq!(numerals.len(), 12);
        let labels: Vec<u8> = numerals.iter().map(|n| n.value).collect();
        assert_eq!(labels, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_twelve_on_top_three_on_right() {
        let numerals = numerals(&ClockConfig::default());
        // ring radius 105 around (150, 150)
        assert!(close(numerals[11].position, Point::new(150.0, 45.0)));
        assert!(close(numerals[2].position, Point::new(255.0, 150.0)));
        assert_eq!(numerals[2].angle_deg, 0.0);
    }

    #[test]
    fn test_hidden_numerals_are_empty() {
        let config = ClockConfig {
            show_numbers: false,
            ..Default::default()
        };
        assert!(numerals(&config).is_empty());
    }

    #[test]
    fn test_numeral_font() {
        let config = ClockConfig {
            size: 400.0,
            number_font: NumberFont::Serif,
            ..Default::default()
        };
        let numerals = numerals(&config);
        assert!(numerals.iter().all(|n| (n.font_size - 32.0).abs() < EPSILON));
        assert!(numerals.iter().all(|n| n.font_family == "'Georgia', serif"));
    }

    #[test]
    fn test_zero_size_collapses_to_origin() {
        let config = ClockConfig {
            size: 0.0,
            ..Default::default()
        };
        assert!(tick_marks(&config)
            .iter()
            .all(|m| close(m.start, Point::default()) && close(m.end, Point::default())));
    }

    #[test]
    fn test_regenerated_fresh_each_call() {
        let config = ClockConfig::default();
        assert_eq!(tick_marks(&config), tick_marks(&config));
        assert_eq!(numerals(&config), numerals(&config));
    }
}
