//! Composition of a complete drawable scene for one tick.

use hari_core::{ClockConfig, HandAngles, Shadow, TimeSample};
use serde::Serialize;

use crate::geometry::{self, Numeral, Point, TickMark};

/// Face radius, as a fraction of size.
const FACE_RADIUS: f64 = 0.45;
/// Border width when the border is shown.
const BORDER_WIDTH: f64 = 2.0;
/// Font weight of the numerals.
const NUMERAL_WEIGHT: u16 = 300;

/// How the end of a stroke is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Round,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

/// The dial disc.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Face {
    pub center: Point,
    pub radius: f64,
    pub fill: String,
    /// Present only when the border is shown.
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkPrimitive {
    #[serde(flatten)]
    pub mark: TickMark,
    pub color: String,
    pub cap: LineCap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumeralPrimitive {
    #[serde(flatten)]
    pub numeral: Numeral,
    pub color: String,
    pub font_weight: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    /// Hand length, as a fraction of size.
    pub fn length_ratio(self) -> f64 {
        match self {
            HandKind::Hour => 0.2,
            HandKind::Minute => 0.3,
            HandKind::Second => 0.35,
        }
    }
}

/// A clock hand: a segment from the center pointing at twelve o'clock,
/// rotated clockwise by `angle_deg` around the center.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandPrimitive {
    pub kind: HandKind,
    pub angle_deg: f64,
    pub length: f64,
    pub color: String,
    pub width: f64,
    pub cap: LineCap,
    pub pivot: Point,
    /// End point with the rotation already applied.
    pub tip: Point,
}

impl HandPrimitive {
    fn new(kind: HandKind, angle_deg: f64, size: f64, color: &str, width: f64) -> Self {
        let pivot = geometry::center(size);
        let length = size * kind.length_ratio();
        Self {
            kind,
            angle_deg,
            length,
            color: color.to_string(),
            width,
            cap: LineCap::Round,
            pivot,
            // twelve o'clock is -90 degrees in screen math
            tip: geometry::polar(pivot, length, angle_deg - 90.0),
        }
    }
}

/// Everything a render target needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub size: f64,
    /// Color of the surface behind the clock.
    pub background_color: String,
    pub face: Face,
    pub marks: Vec<MarkPrimitive>,
    pub numerals: Vec<NumeralPrimitive>,
    /// Hour, minute and (optionally) second hand, in that order.
    pub hands: Vec<HandPrimitive>,
    pub shadow: Option<Shadow>,
}

/// A reference to one primitive of a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layer<'a> {
    Face(&'a Face),
    Mark(&'a MarkPrimitive),
    Numeral(&'a NumeralPrimitive),
    Hand(&'a HandPrimitive),
}

impl Scene {
    /// Primitives from back to front.
    pub fn layers(&self) -> impl Iterator<Item = Layer<'_>> {
        std::iter::once(Layer::Face(&self.face))
            .chain(self.marks.iter().map(Layer::Mark))
            .chain(self.numerals.iter().map(Layer::Numeral))
            .chain(self.hands.iter().map(Layer::Hand))
    }

    pub fn hand(&self, kind: HandKind) -> Option<&HandPrimitive> {
        self.hands.iter().find(|hand| hand.kind == kind)
    }
}

/// Compose the scene for a configuration at a point in time.
pub fn compose(config: &ClockConfig, sample: &TimeSample) -> Scene {
    compose_with_geometry(
        config,
        sample,
        &geometry::tick_marks(config),
        &geometry::numerals(config),
    )
}

/// Compose a scene from geometry that was generated earlier for `config`.
pub fn compose_with_geometry(
    config: &ClockConfig,
    sample: &TimeSample,
    marks: &[TickMark],
    numerals: &[Numeral],
) -> Scene {
    let size = config.size;
    let angles = HandAngles::from_sample(sample);

    let face = Face {
        center: geometry::center(size),
        radius: size * FACE_RADIUS,
        fill: config.face_color.clone(),
        stroke: config.show_border.then(|| Stroke {
            color: config.marks_color.clone(),
            width: BORDER_WIDTH,
        }),
    };

    let marks = marks
        .iter()
        .map(|&mark| MarkPrimitive {
            mark,
            color: config.marks_color.clone(),
            cap: LineCap::Round,
        })
        .collect();

    let numerals = numerals
        .iter()
        .map(|&numeral| NumeralPrimitive {
            numeral,
            color: config.numbers_color.clone(),
            font_weight: NUMERAL_WEIGHT,
        })
        .collect();

    let mut hands = vec![
        HandPrimitive::new(
            HandKind::Hour,
            angles.hour,
            size,
            &config.hour_hand_color,
            config.hour_hand_width,
        ),
        HandPrimitive::new(
            HandKind::Minute,
            angles.minute,
            size,
            &config.minute_hand_color,
            config.minute_hand_width,
        ),
    ];
    if config.show_second_hand {
        hands.push(HandPrimitive::new(
            HandKind::Second,
            angles.second,
            size,
            &config.second_hand_color,
            config.second_hand_width,
        ));
    }

    Scene {
        size,
        background_color: config.background_color.clone(),
        face,
        marks,
        numerals,
        hands,
        shadow: config.clock_style.shadow(),
    }
}
