//! Tracing setup. The terminal is owned by the reader, so log lines go to a
//! file in the temp directory instead of stdout.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_FILE_NAME: &str = "spotreader.log";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Installs the global subscriber. Level comes from `RUST_LOG`, default
/// `info`. Returns the log file path, or `None` if the file could not be
/// created (logging is then disabled).
pub fn init_tracing() -> Option<PathBuf> {
    let path = log_path();
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("spotreader: logging disabled ({}: {})", path.display(), err);
            return None;
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(env_filter),
        )
        .try_init();

    if installed.is_err() {
        warn!("A global tracing subscriber was already installed");
    }
    Some(path)
}
