// `log` backend writing to the browser console
use gloo::console;
use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => console::error!(msg),
            Level::Warn => console::warn!(msg),
            Level::Info => console::info!(msg),
            Level::Debug | Level::Trace => console::debug!(msg),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger; later calls keep the first logger.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
