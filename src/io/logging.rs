//! Stderr logger that cooperates with the progress spinner
//!
//! Log lines are written while the spinner is suspended, so they never
//! interleave with a half-drawn spinner frame.

use std::io::Write;

use indicatif::ProgressBar;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// `log` backend writing to stderr around a progress bar
#[derive(Debug)]
pub struct ProgressLogger {
    level: LevelFilter,
    bar: ProgressBar,
}

impl ProgressLogger {
    /// Create a logger passing records up to `level`
    pub const fn new(level: LevelFilter, bar: ProgressBar) -> Self {
        Self { level, bar }
    }

    /// Install this logger as the global `log` backend
    ///
    /// Installing a second logger in the same process is ignored.
    pub fn install(self) {
        let level = self.level;
        if log::set_boxed_logger(Box::new(self)).is_ok() {
            log::set_max_level(level);
        }
    }
}

impl Log for ProgressLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), &record.args().to_string());
        self.bar.suspend(|| {
            let _ = writeln!(std::io::stderr().lock(), "{line}");
        });
    }

    fn flush(&self) {
        let _ = std::io::stderr().lock().flush();
    }
}

/// Map the number of `-v` flags to a level filter
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Render one log line, tagged with the emitting thread when it has a name
pub fn format_record(level: Level, message: &str) -> String {
    match std::thread::current().name() {
        Some(name) => format!("{level}: [{name}] {message}"),
        None => format!("{level}: {message}"),
    }
}
