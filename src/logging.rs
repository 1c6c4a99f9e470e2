#![cfg(feature = "std")]

//! Minimal stderr logger for the binaries.

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level (`error` .. `trace`, or `off`).
pub const LOG_ENV: &str = "SOLO_BATTLESHIP_LOG";

const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

struct GameLogger;

impl Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{:<5} {}] {}",
                record.level(),
                short_target(record.target()),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: GameLogger = GameLogger;

/// `solo_battleship::grid` becomes `grid`; foreign targets are kept whole.
fn short_target(target: &str) -> &str {
    target
        .strip_prefix(CRATE_TARGET)
        .map(|rest| rest.trim_start_matches("::"))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(target)
}

/// Level named by `value`, falling back to `info` when unset or unparsable.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger with the level from [`LOG_ENV`]. Stdout is left
/// to the game output. Calling it twice keeps the first logger.
pub fn init_logging() {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
