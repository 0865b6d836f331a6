//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber to write structured diagnostics to a
//! file in the data directory. Stdout belongs to the renderer, so traces
//! never go there.

use tracing_subscriber::{fmt, EnvFilter};

use crate::infrastructure::paths;
use crate::Config;

/// Default directive applied when neither `RUST_LOG` nor the config set one.
const DEFAULT_TRACE_LEVEL: &str = "info";

/// Initializes the tracing subscriber with file output.
///
/// The filter is resolved in order: `RUST_LOG` environment variable, then
/// `config.trace_level`, then `"info"`. Log lines are written through a
/// non-blocking appender to `spamlens.log` in the data directory.
///
/// Returns the appender's worker guard; the caller must hold it for the
/// process lifetime or buffered lines are lost on exit. Returns `None` when
/// the data directory cannot be created or a subscriber is already
/// installed. Tracing is best-effort: the client runs fine without it.
#[must_use]
pub fn init_tracing(config: &Config) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_file = paths::trace_log_file();
    let directory = log_file.parent()?;
    if std::fs::create_dir_all(directory).is_err() {
        return None;
    }
    let file_name = log_file.file_name()?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let fallback = config
        .trace_level
        .as_deref()
        .unwrap_or(DEFAULT_TRACE_LEVEL);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let installed = fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    installed.then_some(guard)
}
