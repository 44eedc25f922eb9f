//! Logging setup
//!
//! Level comes from REGISTRO_LOG (default `warn`), so persistence failures
//! reported by the core reach the user without extra flags. Output goes to
//! `config.log_file` when set, otherwise to stderr.

use std::fs::OpenOptions;

use registro_core::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log level or filter directives
const LOG_ENV: &str = "REGISTRO_LOG";

/// Build the filter for both crates from a level string
///
/// A value containing `=` is taken as full filter directives.
fn env_filter(level: &str) -> EnvFilter {
    if level.contains('=') {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(format!("registro_core={},registro_cli={}", level, level))
    }
}

/// Initialize tracing for a CLI run
pub fn init(config: &Config) {
    let level = std::env::var(LOG_ENV).unwrap_or_else(|_| "warn".to_string());

    if let Some(ref log_path) = config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(log_path);
        match file {
            Ok(file) => {
                // Ignore error if already initialized
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(env_filter(&level))
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(file)
                    .try_init();
                debug!("logging to {:?}", log_path);
                return;
            }
            Err(e) => {
                eprintln!("Warning: Could not open log file {:?}: {}", log_path, e);
            }
        }
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
