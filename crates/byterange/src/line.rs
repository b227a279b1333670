use bstr::BStr;

use crate::range::Range;

/// One line borrowed from the buffer, terminator excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'buf> {
    offset: usize,
    bytes: &'buf [u8],
}

impl<'buf> Line<'buf> {
    pub(crate) fn new(buf: &'buf [u8], offset: usize, stop: usize) -> Self {
        Self {
            offset,
            bytes: &buf[offset..stop],
        }
    }

    /// Offset of the first byte of the line in the buffer.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The line's bytes.
    #[must_use]
    pub fn bytes(&self) -> &'buf [u8] {
        self.bytes
    }

    /// The line's bytes as a byte string, for display.
    #[must_use]
    pub fn as_bstr(&self) -> &'buf BStr {
        BStr::new(self.bytes)
    }

    /// Length of the line in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the line has no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Inclusive bounds of the line, `None` for a zero-length line.
    #[must_use]
    pub fn range(&self) -> Option<Range> {
        if self.bytes.is_empty() {
            None
        } else {
            Some(Range::new(self.offset, self.offset + self.bytes.len() - 1))
        }
    }
}

/// Scans one line out of a valid `range` of `buf`.
///
/// Returns the line, the range left after it, and whether the scan used up
/// the window. `\n`, `\r\n` and a bare `\r` all end a line. A terminator
/// sitting on `end` clamps `start` to `end`. A window without terminator is
/// returned whole and leaves the empty range `[end + 1, end]`. Both count as
/// used up.
pub(crate) fn scan(buf: &[u8], range: Range) -> (Line<'_>, Range, bool) {
    let Range { start, end } = range;
    if range.is_empty() {
        return (Line::new(buf, start, start), range, true);
    }

    let past = |pos: usize| {
        if pos == end {
            (Range::new(end, end), true)
        } else {
            (Range::new(pos + 1, end), false)
        }
    };

    let mut pos = start;
    while pos <= end {
        let (rest, spent) = match buf[pos] {
            b'\n' => past(pos),
            b'\r' if pos == end => past(pos),
            b'\r' if buf[pos + 1] == b'\n' => past(pos + 1),
            b'\r' => (Range::new(pos + 1, end), false),
            _ => {
                pos += 1;
                continue;
            }
        };
        return (Line::new(buf, start, pos), rest, spent);
    }

    (Line::new(buf, start, end + 1), Range::new(end + 1, end), true)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn lines_of(buf: &[u8], calls: usize) -> Vec<(&[u8], Range)> {
        let mut range = Range::of(buf).unwrap();
        (0..calls)
            .map(|_| {
                let (line, rest, _) = scan(buf, range);
                range = rest;
                (line.bytes(), rest)
            })
            .collect()
    }

    #[test]
    fn mixed_terminators() {
        let got = lines_of(b"AB\r\nCD\rEF\nGH", 5);
        assert_eq!(
            got,
            vec![
                (&b"AB"[..], Range::new(4, 11)),
                (&b"CD"[..], Range::new(7, 11)),
                (&b"EF"[..], Range::new(10, 11)),
                (&b"GH"[..], Range::new(12, 11)),
                (&b""[..], Range::new(12, 11)),
            ]
        );
    }

    #[rstest]
    #[case::lf(b"ab\n")]
    #[case::cr(b"ab\r")]
    #[case::crlf(b"ab\r\n")]
    fn terminator_on_last_byte_clamps_to_end(#[case] buf: &[u8]) {
        let end = buf.len() - 1;
        let (_, _, spent) = scan(buf, Range::of(buf).unwrap());
        assert!(spent);
        let got = lines_of(buf, 3);
        assert_eq!(got[0], (&b"ab"[..], Range::new(end, end)));
        assert_eq!(got[1], (&b""[..], Range::new(end, end)));
        assert_eq!(got[2], (&b""[..], Range::new(end, end)));
    }

    #[test]
    fn single_terminator_window_yields_empty_line() {
        let (line, rest, spent) = scan(b"x\n", Range::new(1, 1));
        assert!(line.is_empty());
        assert!(spent);
        assert_eq!(line.offset(), 1);
        assert_eq!(rest, Range::new(1, 1));
    }

    #[test]
    fn empty_lines_between_terminators() {
        let got = lines_of(b"\n\r\r\nz", 4);
        let lines: Vec<&[u8]> = got.iter().map(|(l, _)| *l).collect();
        assert_eq!(lines, vec![&b""[..], &b""[..], &b""[..], &b"z"[..]]);
    }

    #[test]
    fn window_bounds_the_scan() {
        // The terminator at index 3 lies outside the window.
        let (line, rest, spent) = scan(b"abc\n", Range::new(0, 2));
        assert_eq!(line.bytes(), b"abc");
        assert!(spent);
        assert_eq!(rest, Range::new(3, 2));
    }

    #[test]
    fn cr_at_window_end_does_not_look_past_it() {
        let (line, rest, spent) = scan(b"ab\r\n", Range::new(0, 2));
        assert!(spent);
        assert_eq!(line.bytes(), b"ab");
        assert_eq!(rest, Range::new(2, 2));
    }

    #[test]
    fn bare_cr_before_last_byte_leaves_it_unread() {
        let (line, rest, spent) = scan(b"a\rb", Range::new(0, 2));
        assert_eq!(line.bytes(), b"a");
        assert_eq!(rest, Range::new(2, 2));
        assert!(!spent);
    }

    #[test]
    fn line_range_is_inclusive() {
        let line = Line::new(b"hello", 1, 4);
        assert_eq!(line.range(), Some(Range::new(1, 3)));
        assert_eq!(line.as_bstr(), "ell");
        assert_eq!(Line::new(b"hello", 2, 2).range(), None);
    }
}
