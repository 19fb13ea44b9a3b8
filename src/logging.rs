use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "SHIPSINKERS_LOG";

const CRATE_TARGET: &str = "shipsinkers";

/// Writes crate records to stderr; records from dependencies are dropped.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with(CRATE_TARGET)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let target = record.target().strip_prefix("shipsinkers::").unwrap_or(record.target());
            eprintln!("{:<5} {}: {}", record.level(), target, record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a filter such as `debug` or `shipsinkers=debug`.
fn parse_filter(spec: &str) -> Option<LevelFilter> {
    let spec = spec.trim();
    let level = match spec.split_once('=') {
        Some((target, level)) if target.trim() == CRATE_TARGET => level,
        Some(_) => return None,
        None => spec,
    };
    level.trim().parse().ok()
}

/// Initialize logging with a level taken from `SHIPSINKERS_LOG`.
/// Defaults to `info` if the variable is unset or invalid. Output goes to
/// stderr so it never mixes with game output.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|spec| parse_filter(&spec))
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
