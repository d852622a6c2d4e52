//! Step logging for the elimination-based solvers.
//!
//! The solvers in [`crate::solver`] narrate what they do (row swaps,
//! elimination factors, refinement residuals) to a [`StepLogger`] passed in
//! by the caller. Logging is purely observational: results never depend on
//! the logger, and the plain entry points (`solve`, `inverse`, ...) pass a
//! [`NoopLogger`].
//!
//! ```
//! use densela::{Matrix, Vector};
//! use densela::log::{LogEntry, RecordingLogger};
//! use densela::solver::solve_logged;
//!
//! let a = Matrix::from_row_slice(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
//! let b = Vector::from_slice(&[5.0, 6.0]);
//! let mut log = RecordingLogger::new();
//! let x = solve_logged(&a, &b, &mut log).unwrap();
//! assert!((x[0] + 4.0).abs() < 1e-12);
//! assert!(log.entries().contains(&LogEntry::Line("Swapping row 0 with row 1".into())));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

/// Sink for human-readable trace lines.
///
/// Implementations must not fail; there is no way to signal back-pressure to
/// the algorithm emitting the lines.
pub trait StepLogger {
    /// Record a free-text line.
    fn log(&mut self, line: &str);

    /// Record a labeled step marker.
    fn log_step(&mut self, label: &str);

    /// Whether lines are consumed at all. Callers skip formatting when this
    /// returns `false`.
    fn enabled(&self) -> bool {
        true
    }
}

impl<L: StepLogger + ?Sized> StepLogger for &mut L {
    fn log(&mut self, line: &str) {
        (**self).log(line)
    }

    fn log_step(&mut self, label: &str) {
        (**self).log_step(label)
    }

    fn enabled(&self) -> bool {
        (**self).enabled()
    }
}

/// Logger that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl StepLogger for NoopLogger {
    #[inline]
    fn log(&mut self, _line: &str) {}

    #[inline]
    fn log_step(&mut self, _label: &str) {}

    #[inline]
    fn enabled(&self) -> bool {
        false
    }
}

/// One recorded trace entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// A line passed to [`StepLogger::log`].
    Line(String),
    /// A label passed to [`StepLogger::log_step`].
    Step(String),
}

/// Logger that keeps every entry in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    entries: Vec<LogEntry>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries recorded so far.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Only the free-text lines, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            LogEntry::Line(s) => Some(s.as_str()),
            LogEntry::Step(_) => None,
        })
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl StepLogger for RecordingLogger {
    fn log(&mut self, line: &str) {
        self.entries.push(LogEntry::Line(line.into()));
    }

    fn log_step(&mut self, label: &str) {
        self.entries.push(LogEntry::Step(label.into()));
    }
}

/// Logger that forwards to the `tracing` ecosystem.
///
/// Lines become `DEBUG` events and step markers `INFO` events, both under
/// the `densela::solver` target.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

#[cfg(feature = "tracing")]
impl StepLogger for TracingLogger {
    fn log(&mut self, line: &str) {
        tracing::debug!(target: "densela::solver", "{line}");
    }

    fn log_step(&mut self, label: &str) {
        tracing::info!(target: "densela::solver", step = label);
    }
}

/// Format and emit a line only when the logger is listening.
macro_rules! trace_line {
    ($log:expr, $($arg:tt)*) => {{
        let sink = &mut *$log;
        if $crate::log::StepLogger::enabled(&*sink) {
            $crate::log::StepLogger::log(sink, &alloc::format!($($arg)*));
        }
    }};
}

pub(crate) use trace_line;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_is_disabled() {
        let mut l = NoopLogger;
        assert!(!l.enabled());
        l.log("ignored");
        l.log_step("ignored");
    }

    #[test]
    fn recording_keeps_order() {
        let mut l = RecordingLogger::new();
        l.log_step("start");
        l.log("a");
        l.log("b");
        assert_eq!(
            l.entries(),
            &[
                LogEntry::Step("start".into()),
                LogEntry::Line("a".into()),
                LogEntry::Line("b".into()),
            ]
        );
        assert_eq!(l.lines().collect::<Vec<_>>(), ["a", "b"]);
        l.clear();
        assert!(l.entries().is_empty());
    }

    #[test]
    fn trace_line_skips_disabled_logger() {
        let mut noop = NoopLogger;
        trace_line!(&mut noop, "value {}", 1);

        let mut rec = RecordingLogger::new();
        trace_line!(&mut rec, "value {}", 2);
        assert_eq!(rec.lines().collect::<Vec<_>>(), ["value 2"]);
    }

    #[test]
    fn forwards_through_mut_ref() {
        let mut rec = RecordingLogger::new();
        {
            let mut r = &mut rec;
            StepLogger::log(&mut r, "via ref");
            assert!(StepLogger::enabled(&r));
        }
        assert_eq!(rec.entries().len(), 1);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn tracing_logger_accepts_lines() {
        let mut l = TracingLogger;
        assert!(l.enabled());
        l.log_step("step");
        l.log("line");
    }
}
