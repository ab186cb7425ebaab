use std::{fs, path::PathBuf, sync::mpsc::TryRecvError, time::Duration};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hari_config::ConfigStore;
use hari_core::{ConfigError, ConfigField, ConfigValue, FieldKind, TimeSample};
use color_eyre::eyre::eyre;
use hari_render::{FaceCache, Scene, to_svg_document};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    text::Line,
    widgets::{Block, Paragraph},
};
use tracing::{info, warn};

use crate::panel;
use crate::preview::ClockPreview;
use crate::ticker::Ticker;

const ACCENT: Color = Color::Cyan;

/// The clock view: owns the configuration and redraws on every tick.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    store: ConfigStore,
    cache: FaceCache,
    /// Most recent time sample from the ticker.
    sample: TimeSample,
    scene: Scene,
    /// Index into [`ConfigField::ALL`] of the highlighted setting.
    selected: usize,
    svg_output: Option<PathBuf>,
    /// Last status message shown under the settings.
    status: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(store: ConfigStore, sample: TimeSample, svg_output: Option<PathBuf>) -> Self {
        let mut cache = FaceCache::new();
        let scene = cache.compose(store.get(), &sample);
        Self {
            running: false,
            store,
            cache,
            sample,
            scene,
            selected: 0,
            svg_output,
            status: None,
        }
    }

    /// Run the application's main loop until the user quits.
    pub fn run(mut self, mut terminal: DefaultTerminal, ticker: &Ticker) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            self.drain_ticks(ticker)?;
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Apply every sample the ticker has sent since the last frame.
    fn drain_ticks(&mut self, ticker: &Ticker) -> color_eyre::Result<()> {
        loop {
            match ticker.try_recv() {
                Ok(sample) => self.on_tick(sample),
                Err(TryRecvError::Empty) => return Ok(()),
                Err(TryRecvError::Disconnected) => {
                    warn!("ticker thread exited");
                    return Err(eyre!("clock ticker stopped unexpectedly"));
                }
            }
        }
    }

    /// Recompose for a new time and write the SVG if requested.
    pub fn on_tick(&mut self, sample: TimeSample) {
        self.sample = sample;
        self.recompose();
        self.write_svg(false);
    }

    fn recompose(&mut self) {
        self.scene = self.cache.compose(self.store.get(), &self.sample);
    }

    /// Write the current frame to the `--svg` path. Only a `manual` save
    /// reports success in the status line.
    fn write_svg(&mut self, manual: bool) {
        let Some(path) = &self.svg_output else {
            if manual {
                self.status = Some("No --svg output path configured".to_string());
            }
            return;
        };
        match fs::write(path, to_svg_document(&self.scene)) {
            Ok(()) if manual => self.status = Some(format!("Wrote {}", path.display())),
            Ok(()) => {}
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to write svg");
                self.status = Some(format!("Failed to write {}: {e}", path.display()));
            }
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let [body, status, help_area] = Layout::vertical([
            Constraint::Fill(1),   // Clock and settings
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Help text
        ])
        .areas(area);

        let [clock, settings] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(44)]).areas(body);

        frame.render_widget(ClockPreview::new(&self.scene), clock);

        let settings_widget = Paragraph::new(panel::lines(self.store.get(), self.selected, ACCENT))
            .block(Block::bordered().title(" Settings "));
        frame.render_widget(settings_widget, settings);

        let status_line = Line::from(format!(
            "{}  {}",
            self.sample,
            self.status.as_deref().unwrap_or_default()
        ))
        .dark_gray();
        frame.render_widget(status_line, status);

        let help = Line::from(vec![
            "q".bold().fg(ACCENT),
            " quit  ".dark_gray(),
            "↑↓".bold().fg(ACCENT),
            " select  ".dark_gray(),
            "←→".bold().fg(ACCENT),
            " adjust  ".dark_gray(),
            "space".bold().fg(ACCENT),
            " toggle  ".dark_gray(),
            "r".bold().fg(ACCENT),
            " reset  ".dark_gray(),
            "s".bold().fg(ACCENT),
            " save svg".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, help_area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so ticks are picked up promptly.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.select(-1),
            (_, KeyCode::Down | KeyCode::Char('j')) => self.select(1),
            (_, KeyCode::Left | KeyCode::Char('h')) => self.adjust(false),
            (_, KeyCode::Right | KeyCode::Char('l')) => self.adjust(true),
            (_, KeyCode::Char(' ') | KeyCode::Enter) => self.toggle(),
            (_, KeyCode::Char('r')) => self.reset(),
            (_, KeyCode::Char('s')) => self.write_svg(true),
            _ => {}
        }
    }

    fn selected_field(&self) -> ConfigField {
        ConfigField::ALL[self.selected]
    }

    /// Move the highlight, wrapping around the list.
    fn select(&mut self, delta: isize) {
        let len = ConfigField::ALL.len();
        self.selected = (self.selected as isize + delta).rem_euclid(len as isize) as usize;
    }

    /// Step the highlighted setting up or down.
    fn adjust(&mut self, forward: bool) {
        let field = self.selected_field();
        let result = match field.kind() {
            FieldKind::Range { .. } => self.store.nudge(field, if forward { 1 } else { -1 }),
            FieldKind::Choice => self.store.cycle(field, forward),
            FieldKind::Toggle => self.store.toggle(field),
            FieldKind::Color => {
                let next = match self.store.get().get(field) {
                    ConfigValue::Color(current) => panel::next_swatch(&current, forward),
                    _ => panel::SWATCHES[0],
                };
                self.store.update(field, ConfigValue::Color(next.to_string()))
            }
        };
        self.after_update(field, result);
    }

    fn toggle(&mut self) {
        let field = self.selected_field();
        if field.kind() == FieldKind::Toggle {
            let result = self.store.toggle(field);
            self.after_update(field, result);
        }
    }

    fn reset(&mut self) {
        self.store.reset();
        info!("settings reset");
        self.status = Some("Settings reset".to_string());
        self.recompose();
    }

    fn after_update(&mut self, field: ConfigField, result: Result<bool, ConfigError>) {
        match result {
            Ok(true) => {
                self.status = Some(format!("{} = {}", field.key(), self.store.get().get(field)));
                self.recompose();
            }
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, "setting rejected");
                self.status = Some(e.to_string());
            }
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hari_core::FixedClock;
    use hari_render::HandKind;

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> App {
        App::new(ConfigStore::new(), TimeSample::new(10, 10, 30), None)
    }

    fn select(app: &mut App, field: ConfigField) {
        while app.selected_field() != field {
            press(app, KeyCode::Down);
        }
    }

    #[test]
    fn test_toggle_second_hand_updates_next_scene() {
        let mut app = app();
        select(&mut app, ConfigField::ShowSecondHand);

        press(&mut app, KeyCode::Char(' '));
        assert!(app.scene.hand(HandKind::Second).is_none());

        app.on_tick(TimeSample::new(10, 10, 31));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(
            app.scene.hand(HandKind::Second).map(|h| h.angle_deg),
            Some(186.0)
        );
    }

    #[test]
    fn test_right_nudges_size() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.store.get().size, 310.0);
        assert_eq!(app.scene.size, 310.0);
    }

    #[test]
    fn test_color_cycles_through_swatches() {
        let mut app = app();
        select(&mut app, ConfigField::HourHandColor);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.store.get().hour_hand_color, "#000000");
        assert_eq!(app.scene.hand(HandKind::Hour).map(|h| h.color.as_str()), Some("#000000"));
        assert_eq!(app.scene.hand(HandKind::Minute).map(|h| h.color.as_str()), Some("#333333"));
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_field(), ConfigField::SecondHandWidth);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_field(), ConfigField::Size);
    }

    #[test]
    fn test_reset_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.store.get().size, 300.0);

        app.running = true;
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_save_without_path_reports() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.status.as_deref(), Some("No --svg output path configured"));
    }

    #[test]
    fn test_written_svg_paints_background() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clock.svg");
        let mut app = App::new(ConfigStore::new(), TimeSample::new(8, 0, 0), Some(path.clone()));
        app.store
            .apply_assignment("backgroundColor=#123456")
            .unwrap();

        app.on_tick(TimeSample::new(8, 0, 1));
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#123456"/>"##));

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.status, Some(format!("Wrote {}", path.display())));
    }

    #[test]
    fn test_tick_keeps_setting_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(
            ConfigStore::new(),
            TimeSample::default(),
            Some(dir.path().join("clock.svg")),
        );
        app.after_update(
            ConfigField::Size,
            Err(ConfigError::InvalidValue {
                field: "size",
                value: "huge".to_string(),
            }),
        );
        let rejected = app.status.clone();
        assert!(rejected.is_some());

        app.on_tick(TimeSample::new(0, 0, 1));
        assert_eq!(app.status, rejected);
    }

    #[test]
    fn test_failed_tick_write_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be written as a file
        let mut app = App::new(ConfigStore::new(), TimeSample::default(), Some(dir.path().into()));
        app.on_tick(TimeSample::new(0, 0, 1));
        assert!(app.status.is_some_and(|s| s.starts_with("Failed to write")));
    }

    #[test]
    fn test_stopped_ticker_is_an_error() {
        let sample = TimeSample::new(6, 30, 0);
        let mut ticker = Ticker::start(Duration::from_secs(60), FixedClock(sample));
        ticker.stop();

        let mut app = app();
        assert!(app.drain_ticks(&ticker).is_err());
        // anything sent before the thread exited was still applied
        assert_eq!(app.sample, sample);
    }
}
