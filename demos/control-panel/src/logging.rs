use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file when `--log-file` is not given
pub const LOG_ENV: &str = "CONTROL_PANEL_LOG";

/// Initialize tracing with optional file output.
///
/// Nothing is logged unless a path is given on the command line or through
/// [`LOG_ENV`]; writing to the terminal would corrupt the TUI. The filter
/// comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing(log_file: Option<PathBuf>) {
    let Some(path) = log_file.or_else(|| std::env::var_os(LOG_ENV).map(PathBuf::from)) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: failed to create log file {}: {}", path.display(), e);
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(path = %path.display(), "Tracing initialized");
}
