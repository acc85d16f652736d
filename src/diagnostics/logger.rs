// SPDX-License-Identifier: MPL-2.0
//! Minimal `log` backend writing timestamped lines to stderr.
//!
//! Level selection: `--log-level` on the command line, else the
//! `APOD_GALLERY_LOG` environment variable, else `warn`.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

use crate::app::config::DEFAULT_LOG_LEVEL;

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "APOD_GALLERY_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            record,
        );
        // Nothing sensible to do if stderr is closed.
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn format_line(timestamp: &str, record: &Record) -> String {
    format!(
        "{} [{:>5}] {}: {}",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}

/// Parses a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
#[must_use]
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse().ok()
}

/// Picks the level from the CLI value, then the environment, then the default.
#[must_use]
pub fn resolve_level(cli: Option<&str>) -> LevelFilter {
    cli.and_then(parse_level)
        .or_else(|| {
            std::env::var(ENV_LOG_LEVEL)
                .ok()
                .as_deref()
                .and_then(parse_level)
        })
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Installs the stderr logger.
///
/// # Errors
///
/// Returns an error if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
