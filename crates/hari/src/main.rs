mod app;
mod cli;
mod logging;
mod panel;
mod preview;
mod ticker;

use std::{io::Write, time::Duration};

use clap::Parser;
use hari_config::{AppSettings, ConfigStore};
use hari_core::{FixedClock, LocalClock, TimeSample, TimeSource};
use hari_render::{compose, to_json, to_svg, to_svg_document};
use tracing::info;

use crate::app::App;
use crate::cli::{Cli, OutputFormat};
use crate::ticker::Ticker;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => AppSettings::load_from(path)?,
        None => AppSettings::load()?,
    };
    let settings = cli.apply(settings);

    let source: Box<dyn TimeSource + Send> = match cli.at {
        Some(sample) => Box::new(FixedClock(sample)),
        None => Box::new(LocalClock),
    };

    if cli.once {
        logging::init_stderr(&settings.log_filter)?;
        let store = configured_store(&cli)?;
        let frame = render_frame(&store, source.sample(), cli.format)?;
        std::io::stdout().lock().write_all(frame.as_bytes())?;
        return Ok(());
    }

    let _guard = logging::init_file(&AppSettings::log_dir()?, &settings.log_filter)?;
    let store = configured_store(&cli)?;
    info!(tick_ms = settings.tick_ms, svg = ?settings.svg_output, "starting clock");

    let sample = source.sample();
    let mut ticker = Ticker::start(Duration::from_millis(settings.tick_ms.max(1)), source);
    let terminal = ratatui::init();
    let result = App::new(store, sample, settings.svg_output).run(terminal, &ticker);
    ratatui::restore();
    ticker.stop();
    info!("clock stopped");
    result
}

/// A store with the `--set` assignments applied on top of the defaults.
fn configured_store(cli: &Cli) -> color_eyre::Result<ConfigStore> {
    let mut store = ConfigStore::new();
    for assignment in &cli.assignments {
        store.apply_assignment(assignment)?;
    }
    Ok(store)
}

/// One frame in the requested output format.
fn render_frame(
    store: &ConfigStore,
    sample: TimeSample,
    format: OutputFormat,
) -> color_eyre::Result<String> {
    let scene = compose(store.get(), &sample);
    Ok(match format {
        OutputFormat::Svg => to_svg(&scene),
        OutputFormat::Document => to_svg_document(&scene),
        OutputFormat::Json => to_json(&scene)? + "\n",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("hari").chain(args.iter().copied()))
    }

    #[test]
    fn test_set_applies_assignments() {
        let store = configured_store(&cli(&["--set", "size=400", "--set", "clockStyle=minimal"]))
            .unwrap();
        assert_eq!(store.get().size, 400.0);
        assert_eq!(store.get().clock_style, hari_core::ClockStyle::Minimal);
    }

    #[test]
    fn test_bad_assignment_fails() {
        assert!(configured_store(&cli(&["--set", "size"])).is_err());
        assert!(configured_store(&cli(&["--set", "tickColor=#000000"])).is_err());
        assert!(configured_store(&cli(&["--set", "showMarks=maybe"])).is_err());
    }

    #[test]
    fn test_json_frame_parses() {
        let store = configured_store(&cli(&["--set", "showSecondHand=false"])).unwrap();
        let frame = render_frame(&store, TimeSample::new(3, 0, 0), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(value["hands"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["hands"][0]["angleDeg"], 90.0);
    }

    #[test]
    fn test_document_frame_has_background() {
        let store = configured_store(&cli(&["--set", "backgroundColor=#0a0a0a"])).unwrap();
        let frame = render_frame(&store, TimeSample::default(), OutputFormat::Document).unwrap();
        assert!(frame.starts_with("<?xml"));
        assert!(frame.contains(r##"fill="#0a0a0a""##));

        let bare = render_frame(&store, TimeSample::default(), OutputFormat::Svg).unwrap();
        assert!(bare.starts_with("<svg") && !bare.contains("<rect"));
    }
}
