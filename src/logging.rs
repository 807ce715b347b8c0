#![cfg(feature = "std")]

//! Stderr logger for the binaries.
//!
//! Lines look like `12:04:31.087 INFO  session: X played (1, 1)`. The level
//! comes from `TICTACTOE_LOG`; stdout stays free for the board and for the
//! JSON printed by `sim`.

use std::env;

use chrono::Local;
use log::{LevelFilter, Metadata, Record};

use crate::config::LOG_ENV_VAR;

const CRATE_PREFIX: &str = "tictactoe::";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target();
        eprintln!(
            "{} {:<5} {}: {}",
            Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            target.strip_prefix(CRATE_PREFIX).unwrap_or(target),
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value` (`off`, `error` .. `trace`, any case), or `info`
/// when it is missing or not a level.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level given by `TICTACTOE_LOG`.
///
/// Calling it again keeps the logger installed first.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV_VAR).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
