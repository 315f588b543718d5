//! Minimal stderr logger behind the `log` facade

use crate::error::CliError;
use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the logger, showing records up to `level`
pub fn init(level: LevelFilter) -> Result<(), CliError> {
    log::set_logger(&LOGGER).map_err(|e| CliError::Config(format!("Logger setup failed: {}", e)))?;
    log::set_max_level(level);
    Ok(())
}
