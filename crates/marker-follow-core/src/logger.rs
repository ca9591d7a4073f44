//! Demo logger.
//!
//! The two demo activities run concurrently (frame acquisition on the
//! managed task, the control bridge on the caller's thread), so their log
//! lines interleave. Every record carries an activity tag — its `log`
//! target — and the logger prints `[elapsed LEVEL activity] message` to
//! stderr so interleaved lines stay attributable. The overlay and control
//! crates log under the `acquisition` and `control` targets respectively;
//! everything else shows up under its module path.
//!
//! Install once at startup with `init_with_level`. The `tracing` feature
//! adds an env-filter subscriber for the instrumented spans instead.

use std::fmt::Arguments;
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

struct ActivityLogger {
    level: LevelFilter,
    started: Instant,
}

fn format_line(elapsed_secs: f64, level: Level, activity: &str, args: &Arguments<'_>) -> String {
    format!("[{elapsed_secs:7.3}s {level:>5} {activity}] {args}")
}

impl Log for ActivityLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let elapsed = self.started.elapsed().as_secs_f64();
        let line = format_line(elapsed, record.level(), record.target(), record.args());
        let mut stderr = std::io::stderr();
        let _ = writeln!(stderr, "{line}");
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<ActivityLogger> = OnceLock::new();

/// Install the activity-tagged stderr logger with the provided level
/// filter.
///
/// Calling this more than once is a no-op after the first successful
/// initialization.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| ActivityLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

#[cfg(feature = "tracing")]
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_timer(fmt::time::Uptime::default())
        .finish()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carries_the_activity_tag() {
        let line = format_line(
            1.5,
            Level::Warn,
            "acquisition",
            &format_args!("skipping frame"),
        );
        assert_eq!(line, "[  1.500s  WARN acquisition] skipping frame");
    }

    #[test]
    fn activities_stay_distinguishable() {
        let acquire = format_line(0.02, Level::Info, "acquisition", &format_args!("tick"));
        let control = format_line(0.02, Level::Info, "control", &format_args!("tick"));
        assert_ne!(acquire, control);
        assert!(control.contains(" control] "));
    }

    #[test]
    fn level_is_right_aligned() {
        let line = format_line(12.0, Level::Error, "control", &format_args!("land failed"));
        assert_eq!(line, "[ 12.000s ERROR control] land failed");
    }
}
