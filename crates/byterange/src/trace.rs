//! Diagnostic records emitted by every read.
//!
//! Records are observational: a [`Trace`] sink cannot fail the read that
//! produced it and nothing reads them back.

use bstr::BStr;

use crate::range::Range;

/// One completed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// An integer was decoded.
    Int {
        /// Operation tag, e.g. `read_i32`.
        op: &'static str,
        /// The decoded value, widened.
        value: i128,
        /// The range after the read.
        rest: Range,
    },
    /// A line was extracted.
    Line {
        /// The line, terminator excluded.
        line: &'a BStr,
        /// The range after the read.
        rest: Range,
    },
    /// A substring search succeeded.
    Found {
        /// The pattern that matched.
        pattern: &'a BStr,
        /// The byte just past the match, `None` when the match ends on the
        /// window's last byte.
        next: Option<u8>,
        /// The range after the match.
        rest: Range,
    },
    /// A substring search failed; the range is unchanged.
    NotFound {
        /// The pattern that was searched for.
        pattern: &'a BStr,
        /// The searched range.
        range: Range,
    },
}

/// A sink for [`Event`]s.
pub trait Trace {
    /// Observes one event.
    fn record(&self, event: &Event<'_>);
}

impl<T: Trace + ?Sized> Trace for &T {
    fn record(&self, event: &Event<'_>) {
        (**self).record(event);
    }
}

/// Forwards events to the [`log`] facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

/// Target used for every record written by [`LogTrace`].
pub const LOG_TARGET: &str = "byterange";

impl Trace for LogTrace {
    fn record(&self, event: &Event<'_>) {
        if !log::log_enabled!(target: LOG_TARGET, log::Level::Debug) {
            return;
        }
        match *event {
            Event::Int { op, value, rest } => {
                log::debug!(target: LOG_TARGET, "{op} = {value}, rest {rest}");
            }
            Event::Line { line, rest } => {
                log::debug!(target: LOG_TARGET, "read_line = {line}, rest {rest}");
            }
            Event::Found {
                pattern,
                next: Some(next),
                rest,
            } => {
                log::debug!(
                    target: LOG_TARGET,
                    "find_str found {pattern}, next = {:?}, rest {rest}",
                    char::from(next)
                );
            }
            Event::Found {
                pattern,
                next: None,
                rest,
            } => {
                log::debug!(target: LOG_TARGET, "find_str found {pattern} at end, rest {rest}");
            }
            Event::NotFound { pattern, range } => {
                log::debug!(target: LOG_TARGET, "find_str not found {pattern} in {range}");
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn record(&self, _event: &Event<'_>) {}
}
