//! Core types for the hari analog clock.
//!
//! Holds the time samples and hand angle math, the clock configuration
//! record and the catalogue of fields a settings surface can edit.

mod config;
mod error;
mod field;
mod style;
mod time;

pub use config::ClockConfig;
pub use error::ConfigError;
pub use field::{ConfigField, ConfigValue, FieldKind};
pub use style::{ClockStyle, NumberFont, Shadow, font_stack_for};
pub use time::{FixedClock, HandAngles, LocalClock, TimeSample, TimeSource};
