//! Reuse of face geometry across ticks.
//!
//! Tick marks and numerals depend only on the configuration, so they are
//! rebuilt when a geometry-relevant field changes rather than every tick.

use hari_core::{ClockConfig, NumberFont, TimeSample};

use crate::geometry::{self, Numeral, TickMark};
use crate::scene::{self, Scene};

/// The configuration fields the face geometry depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FaceKey {
    size_bits: u64,
    show_marks: bool,
    show_numbers: bool,
    number_font: NumberFont,
}

impl FaceKey {
    fn of(config: &ClockConfig) -> Self {
        Self {
            size_bits: config.size.to_bits(),
            show_marks: config.show_marks,
            show_numbers: config.show_numbers,
            number_font: config.number_font,
        }
    }
}

/// Cached tick marks and numerals for the last configuration seen.
#[derive(Debug, Default)]
pub struct FaceCache {
    key: Option<FaceKey>,
    marks: Vec<TickMark>,
    numerals: Vec<Numeral>,
    rebuilds: u64,
}

impl FaceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose a scene, rebuilding the face geometry only if needed.
    ///
    /// The result is identical to [`scene::compose`].
    pub fn compose(&mut self, config: &ClockConfig, sample: &TimeSample) -> Scene {
        let key = FaceKey::of(config);
        if self.key != Some(key) {
            self.marks = geometry::tick_marks(config);
            self.numerals = geometry::numerals(config);
            self.key = Some(key);
            self.rebuilds += 1;
        }
        scene::compose_with_geometry(config, sample, &self.marks, &self.numerals)
    }

    /// How many times the geometry has been rebuilt.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}
