use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

/// Threshold selected at build time through the `verbose` feature.
pub const MAX_LEVEL: LevelFilter = if cfg!(feature = "verbose") {
    LevelFilter::Trace
} else {
    LevelFilter::Warn
};

static LOGGER: StderrLogger = StderrLogger::new(MAX_LEVEL);

/// Writes `[LEVEL] target: message` lines to standard error.
///
/// Standard output is reserved for the result line.
pub struct StderrLogger {
    max_level: LevelFilter,
}

impl StderrLogger {
    #[must_use]
    pub const fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }

    /// Installs the process-wide logger. Call this once during startup.
    pub fn init() -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(LOGGER.max_level);
        Ok(())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let _ = writeln!(
            std::io::stderr().lock(),
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
