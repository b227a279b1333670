use thiserror::Error;

/// A precondition violated by the caller of a read operation.
///
/// Every variant carries the tag of the operation that detected it. The
/// `checked_*` operations hand these back to the caller; the plain
/// operations treat them as fatal (see [`fatal`]).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    /// `start` lies past the empty sentinel `end + 1`.
    #[error("{op} range error start[{start}] > end[{end}]")]
    Inverted {
        /// Operation tag.
        op: &'static str,
        /// Offending start offset.
        start: usize,
        /// Offending (inclusive) end offset.
        end: usize,
    },
    /// The range addresses bytes the buffer does not have.
    #[error("{op} range error end[{end}] outside buffer of {len} bytes")]
    OutOfBounds {
        /// Operation tag.
        op: &'static str,
        /// Offending (inclusive) end offset.
        end: usize,
        /// Length of the buffer.
        len: usize,
    },
    /// Fewer bytes remain in the window than the read consumes.
    #[error("{op} needs {needed} bytes but only {remaining} remain")]
    Truncated {
        /// Operation tag.
        op: &'static str,
        /// Width of the read.
        needed: usize,
        /// Bytes left in the window.
        remaining: usize,
    },
    /// Substring search was asked to find nothing.
    #[error("{op} pattern must not be empty")]
    EmptyPattern {
        /// Operation tag.
        op: &'static str,
    },
}

impl ReadError {
    /// The tag of the operation that detected the violation.
    #[must_use]
    pub fn op(&self) -> &'static str {
        match self {
            ReadError::Inverted { op, .. }
            | ReadError::OutOfBounds { op, .. }
            | ReadError::Truncated { op, .. }
            | ReadError::EmptyPattern { op } => op,
        }
    }
}

/// Escalates a precondition violation into a panic.
///
/// A violated range means the caller is about to read memory outside the
/// window it declared, so the plain read operations never return in that
/// case.
#[cold]
#[track_caller]
pub(crate) fn fatal(err: ReadError) -> ! {
    panic!("byterange: {err}")
}

/// Unwraps a checked result or escalates it through [`fatal`].
#[track_caller]
pub(crate) fn or_fatal<T>(result: Result<T, ReadError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => fatal(err),
    }
}
