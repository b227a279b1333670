use core::fmt;

use crate::error::ReadError;

/// An inclusive window `[start, end]` of unread bytes in a buffer.
///
/// Reads only ever move `start` forward. `start == end + 1` is the empty
/// window left behind once every byte has been consumed; it is valid, and
/// only a `start` beyond it is an inverted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// First unread byte.
    pub start: usize,
    /// Last addressable byte (inclusive).
    pub end: usize,
}

impl Range {
    /// Creates the inclusive range `[start, end]`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The range covering all of `buf`, or `None` for an empty buffer, which
    /// an inclusive range cannot address.
    #[must_use]
    pub const fn of(buf: &[u8]) -> Option<Self> {
        match buf.len() {
            0 => None,
            len => Some(Self::new(0, len - 1)),
        }
    }

    /// Number of unread bytes in the window.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Whether the window has been consumed entirely.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Whether `start` is at most one past `end`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.start <= self.end.saturating_add(1)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Checks that `range` is well formed and lies inside a buffer of `len`
/// bytes.
///
/// # Errors
///
/// [`ReadError::Inverted`] when `start > end + 1`, and
/// [`ReadError::OutOfBounds`] when `end` is not an index of the buffer.
pub fn validate(op: &'static str, range: Range, len: usize) -> Result<(), ReadError> {
    if !range.is_valid() {
        return Err(ReadError::Inverted {
            op,
            start: range.start,
            end: range.end,
        });
    }
    if range.end >= len {
        return Err(ReadError::OutOfBounds {
            op,
            end: range.end,
            len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Range::new(0, 3), 4, false)]
    #[case(Range::new(3, 3), 1, false)]
    #[case(Range::new(4, 3), 0, true)]
    fn remaining_counts_inclusive_bytes(
        #[case] range: Range,
        #[case] remaining: usize,
        #[case] empty: bool,
    ) {
        assert_eq!(range.remaining(), remaining);
        assert_eq!(range.is_empty(), empty);
        assert!(range.is_valid());
    }

    #[test]
    fn of_covers_whole_buffer() {
        assert_eq!(Range::of(b"abc"), Some(Range::new(0, 2)));
        assert_eq!(Range::of(b""), None);
    }

    #[test]
    fn validate_accepts_consumed_sentinel() {
        assert_eq!(validate("op", Range::new(4, 3), 4), Ok(()));
    }

    #[test]
    fn validate_rejects_inverted() {
        assert_eq!(
            validate("op", Range::new(5, 3), 4),
            Err(ReadError::Inverted {
                op: "op",
                start: 5,
                end: 3
            })
        );
    }

    #[test]
    fn validate_rejects_end_past_buffer() {
        assert_eq!(
            validate("op", Range::new(0, 4), 4),
            Err(ReadError::OutOfBounds {
                op: "op",
                end: 4,
                len: 4
            })
        );
    }

    #[test]
    fn display_is_bracketed() {
        assert_eq!(Range::new(2, 7).to_string(), "[2, 7]");
    }
}
