//! Configuration handling for the hari analog clock.
//!
//! [`ConfigStore`] owns the in-memory clock appearance that the settings
//! panel edits. [`AppSettings`] covers how the binary itself runs.

mod settings;
mod store;

pub use settings::{AppSettings, SettingsError};
pub use store::ConfigStore;
