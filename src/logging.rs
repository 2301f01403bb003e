//! Logging utilities.
//!
//! Everything logs through the `log` facade. On wasm32 records go to the
//! browser console at the matching severity; native builds (tests) write
//! to stderr.

use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Logger configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
        }
    }
}

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;
static INIT: Once = Once::new();

/// Installs the console logger once.
///
/// Subsequent calls are ignored; use `log::set_max_level` to change the
/// level afterwards.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(config.level);
        }
        log::debug!("logging initialized");
    });
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_line(record);
            #[cfg(test)]
            capture::push(record.level(), &line);
            write_line(record.level(), &line);
        }
    }

    fn flush(&self) {}
}

fn format_line(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let line = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&line),
        Level::Warn => console::warn_1(&line),
        Level::Info => console::info_1(&line),
        Level::Debug | Level::Trace => console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{line}");
}
