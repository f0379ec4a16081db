//! Timing helpers.

use std::time::{Duration, Instant};

/// Scope guard that logs how long a stage took when dropped.
///
/// ```ignore
/// let _t = Timed::info("Section scan");
/// // ... work ...
/// // logs "Section scan: 1.234ms"
/// ```
pub struct Timed {
    stage: &'static str,
    start: Instant,
    level: log::Level,
}

impl Timed {
    /// Log at INFO when done.
    pub fn info(stage: &'static str) -> Self {
        Self::at(stage, log::Level::Info)
    }

    /// Log at DEBUG when done.
    pub fn debug(stage: &'static str) -> Self {
        Self::at(stage, log::Level::Debug)
    }

    fn at(stage: &'static str, level: log::Level) -> Self {
        log::trace!("{} started", stage);
        Self {
            stage,
            start: Instant::now(),
            level,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timed {
    fn drop(&mut self) {
        log::log!(self.level, "{}: {:.3?}", self.stage, self.start.elapsed());
    }
}

/// Milliseconds in `d`, for human-readable reports.
pub fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
