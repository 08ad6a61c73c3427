#![cfg(feature = "std")]

use std::env;
use std::fmt;
use log::{self, Level, LevelFilter, Metadata, Record};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "FLEETSIM_LOG";

/// Writes every enabled record to stderr; stdout carries reports and records.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", render(record.level(), record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// One log line: level, the module that emitted it, then the message.
/// The crate prefix is dropped from targets inside this crate.
fn render(level: Level, target: &str, args: &fmt::Arguments<'_>) -> String {
    let target = target.strip_prefix("fleetsim::").unwrap_or(target);
    format!("{:<5} [{}] {}", level, target, args)
}

/// Parse a level name, falling back to `info` for anything unrecognised.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level named by `FLEETSIM_LOG`.
/// Calling it again keeps the first logger.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
