use std::io::Write;
use std::sync::OnceLock;

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::PROGRAM_LOG_LEVEL;

/// Progress lines are interleaved with a data stream on stdout, so the
/// logger only ever writes to stderr.
pub struct StderrLogger {
    level: Level,
}

impl StderrLogger {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

/// `2021-01-01 00:00:00 +0000	INFO	[target] message`
fn format_line(now: DateTime<Local>, record: &Record<'_>) -> String {
    format!(
        "{}\t{}\t[{}] {}",
        now.format("%Y-%m-%d %H:%M:%S %z"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(Local::now(), record);
        // A closed stderr must not take the filter down with it.
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// `off` keeps errors: a failed run must still say why.
fn get_level_from_env() -> Level {
    std::env::var(PROGRAM_LOG_LEVEL)
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .map(|filter| filter.to_level().unwrap_or(Level::Error))
        .unwrap_or(Level::Info)
}

pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(get_level_from_env())
}

pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

    // Only the first caller installs the logger; later levels are ignored
    // so `max_level` never disagrees with the installed threshold.
    let first_call = LOGGER.get().is_none();
    let logger = LOGGER.get_or_init(|| StderrLogger::new(level));

    if first_call {
        log::set_logger(logger)?;
        log::set_max_level(logger.level.to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
