use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize tracing with output to a daily log file in `log_dir`.
///
/// The terminal belongs to the UI, so nothing is written to stdout or stderr.
/// Keep the returned guard alive until exit to flush buffered lines.
pub fn init_file(log_dir: &Path, default_filter: &str) -> color_eyre::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "hari.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(
            fmt::layer()
                .compact()
                .with_target(true)
                .with_level(true)
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(guard)
}

/// Initialize tracing with output to stderr, for one-shot runs.
pub fn init_stderr(default_filter: &str) -> color_eyre::Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(())
}
