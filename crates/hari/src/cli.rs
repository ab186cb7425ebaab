use std::path::PathBuf;

use chrono::NaiveTime;
use clap::{Parser, ValueEnum};
use hari_config::AppSettings;
use hari_core::TimeSample;

/// A live analog clock rendered as SVG, with a terminal settings panel.
#[derive(Debug, Parser)]
#[command(name = "hari", version, about)]
pub struct Cli {
    /// Print a single frame to stdout and exit.
    #[arg(long)]
    pub once: bool,

    /// Output format used with --once.
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Freeze the clock at HH:MM[:SS] instead of following the wall clock.
    #[arg(long, value_name = "TIME", value_parser = parse_time)]
    pub at: Option<TimeSample>,

    /// Change a setting before starting, e.g. --set clockStyle=classic.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub assignments: Vec<String>,

    /// Write the current frame as an SVG document to this file on every tick.
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,

    /// Milliseconds between ticks.
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Read runtime settings from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The bare <svg> element.
    #[default]
    Svg,
    /// A standalone SVG document including the background.
    Document,
    /// The scene as JSON drawing instructions.
    Json,
}

impl Cli {
    /// Let command line flags override values from the settings file.
    pub fn apply(&self, mut settings: AppSettings) -> AppSettings {
        if let Some(path) = &self.svg {
            settings.svg_output = Some(path.clone());
        }
        if let Some(tick_ms) = self.tick_ms {
            settings.tick_ms = tick_ms;
        }
        settings
    }
}

fn parse_time(raw: &str) -> Result<TimeSample, String> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map(|time| TimeSample::from_time(&time))
        .map_err(|_| format!("expected HH:MM or HH:MM:SS, got {raw:?}"))
}
