use std::cell::RefCell;

use serde::Serialize;

use crate::{
    Range,
    trace::{Event, Trace},
};

/// Number of quickcheck cases for the property tests in this crate.
pub(crate) fn quickcheck_tests() -> u64 {
    if cfg!(miri) {
        10
    } else if cfg!(feature = "test-fast") {
        100
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}

/// An owned copy of an [`Event`], for assertions and snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub(crate) enum Record {
    Int {
        op: &'static str,
        value: i128,
        rest: String,
    },
    Line {
        line: String,
        rest: String,
    },
    Found {
        pattern: String,
        next: Option<char>,
        rest: String,
    },
    NotFound {
        pattern: String,
        range: String,
    },
}

fn show(range: Range) -> String {
    range.to_string()
}

/// Trace sink that keeps every event.
#[derive(Debug, Default)]
pub(crate) struct Recorder(RefCell<Vec<Record>>);

impl Recorder {
    pub(crate) fn take(&self) -> Vec<Record> {
        self.0.take()
    }
}

impl Trace for Recorder {
    fn record(&self, event: &Event<'_>) {
        let record = match *event {
            Event::Int { op, value, rest } => Record::Int {
                op,
                value,
                rest: show(rest),
            },
            Event::Line { line, rest } => Record::Line {
                line: line.to_string(),
                rest: show(rest),
            },
            Event::Found {
                pattern,
                next,
                rest,
            } => Record::Found {
                pattern: pattern.to_string(),
                next: next.map(char::from),
                rest: show(rest),
            },
            Event::NotFound { pattern, range } => Record::NotFound {
                pattern: pattern.to_string(),
                range: show(range),
            },
        };
        self.0.borrow_mut().push(record);
    }
}
