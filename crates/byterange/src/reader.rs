use bstr::BStr;

use crate::{
    cursor::Cursor,
    error::{ReadError, or_fatal},
    int::BigEndian,
    line::{self, Line},
    options::ReaderOptions,
    range::{Range, validate},
    search::{BlockSearch, SearchStrategy},
    trace::{Event, LogTrace, Trace},
};

const READ_LINE: &str = "read_line";
const FIND_STR: &str = "find_str";

/// The outcome of one operation: its value and the range left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<T> {
    /// What the operation produced.
    pub value: T,
    /// The range to continue from.
    pub rest: Range,
    /// Whether the operation used up the window.
    ///
    /// Set when `rest` is the empty range, and also when a line terminator
    /// or a match ended on the window's last byte: `rest.start` is clamped
    /// onto `end` then, but that byte has already been consumed.
    pub exhausted: bool,
}

/// Reads from a borrowed buffer through caller-supplied ranges.
///
/// The reader holds no cursor of its own: every operation takes the current
/// [`Range`] and returns the next one in a [`Step`]. Use [`Reader::cursor`]
/// to thread a range through a sequence of reads.
///
/// `T` receives a trace record for every completed operation; `S` is the
/// substring search strategy.
#[derive(Debug, Clone)]
pub struct Reader<'buf, T = LogTrace, S = BlockSearch> {
    buf: &'buf [u8],
    trace: T,
    search: S,
    options: ReaderOptions,
}

impl<'buf> Reader<'buf> {
    /// A reader logging through [`LogTrace`] and searching with
    /// [`BlockSearch`].
    #[must_use]
    pub fn new(buf: &'buf [u8]) -> Self {
        Self::with_parts(buf, LogTrace, BlockSearch, ReaderOptions::default())
    }
}

impl<'buf, T: Trace, S: SearchStrategy> Reader<'buf, T, S> {
    /// A reader assembled from explicit collaborators.
    pub fn with_parts(buf: &'buf [u8], trace: T, search: S, options: ReaderOptions) -> Self {
        Self {
            buf,
            trace,
            search,
            options,
        }
    }

    /// Replaces the trace sink.
    pub fn with_trace<U: Trace>(self, trace: U) -> Reader<'buf, U, S> {
        Reader::with_parts(self.buf, trace, self.search, self.options)
    }

    /// Replaces the search strategy.
    pub fn with_search<U: SearchStrategy>(self, search: U) -> Reader<'buf, T, U> {
        Reader::with_parts(self.buf, self.trace, search, self.options)
    }

    /// Replaces the options.
    #[must_use]
    pub fn with_options(self, options: ReaderOptions) -> Self {
        Self { options, ..self }
    }

    /// The underlying buffer.
    pub fn buffer(&self) -> &'buf [u8] {
        self.buf
    }

    /// The range covering the whole buffer, `None` if it is empty.
    pub fn whole(&self) -> Option<Range> {
        Range::of(self.buf)
    }

    /// A cursor starting at `range`.
    pub fn cursor(&self, range: Range) -> Cursor<'_, 'buf, T, S> {
        Cursor::new(self, range)
    }

    fn emit(&self, event: &Event<'_>) {
        if !self.options.quiet {
            self.trace.record(event);
        }
    }

    fn clip(&self, bytes: &'buf [u8]) -> &'buf BStr {
        BStr::new(self.options.clip(bytes))
    }

    /// Decodes the big-endian integer at `range.start`.
    ///
    /// # Errors
    ///
    /// Fails if the range is malformed or holds fewer than `N::WIDTH` bytes.
    pub fn checked_read_be<N: BigEndian>(&self, range: Range) -> Result<Step<N>, ReadError> {
        validate(N::OP, range, self.buf.len())?;
        let remaining = range.remaining();
        if remaining < N::WIDTH {
            return Err(ReadError::Truncated {
                op: N::OP,
                needed: N::WIDTH,
                remaining,
            });
        }

        let value = N::from_be_slice(&self.buf[range.start..]);
        let rest = Range::new(range.start + N::WIDTH, range.end);
        debug_assert!(rest.is_valid(), "after {} {rest}", N::OP);

        self.emit(&Event::Int {
            op: N::OP,
            value: value.widen(),
            rest,
        });
        Ok(Step {
            value,
            rest,
            exhausted: rest.is_empty(),
        })
    }

    /// Decodes the big-endian integer at `range.start`.
    ///
    /// # Panics
    ///
    /// Panics if the range is malformed or holds fewer than `N::WIDTH` bytes.
    #[track_caller]
    pub fn read_be<N: BigEndian>(&self, range: Range) -> Step<N> {
        or_fatal(self.checked_read_be(range))
    }

    /// Reads an 8-byte big-endian signed integer.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 8 bytes remain; see [`Reader::read_be`].
    #[track_caller]
    pub fn read_i64(&self, range: Range) -> Step<i64> {
        self.read_be(range)
    }

    /// Reads a 4-byte big-endian signed integer.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 4 bytes remain; see [`Reader::read_be`].
    #[track_caller]
    pub fn read_i32(&self, range: Range) -> Step<i32> {
        self.read_be(range)
    }

    /// Reads a 2-byte big-endian signed integer.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 2 bytes remain; see [`Reader::read_be`].
    #[track_caller]
    pub fn read_i16(&self, range: Range) -> Step<i16> {
        self.read_be(range)
    }

    /// Reads one byte as a signed integer.
    ///
    /// # Panics
    ///
    /// Panics if the window is empty; see [`Reader::read_be`].
    #[track_caller]
    pub fn read_i8(&self, range: Range) -> Step<i8> {
        self.read_be(range)
    }

    /// Extracts one line from `range`.
    ///
    /// Lines end at `\n`, `\r\n` or a bare `\r`; the terminator is not part
    /// of the line. A window without terminator is returned whole and left
    /// empty, so reading again yields a zero-length line. A terminator on
    /// the window's last byte clamps `rest.start` onto it; either way the
    /// step is [`exhausted`](Step::exhausted).
    ///
    /// # Errors
    ///
    /// Fails if the range is malformed.
    pub fn checked_read_line(&self, range: Range) -> Result<Step<Line<'buf>>, ReadError> {
        validate(READ_LINE, range, self.buf.len())?;
        let (line, rest, exhausted) = line::scan(self.buf, range);
        debug_assert!(rest.is_valid(), "after {READ_LINE} {rest}");

        self.emit(&Event::Line {
            line: self.clip(line.bytes()),
            rest,
        });
        Ok(Step {
            value: line,
            rest,
            exhausted,
        })
    }

    /// Extracts one line from `range`; see [`Reader::checked_read_line`].
    ///
    /// # Panics
    ///
    /// Panics if the range is malformed.
    #[track_caller]
    pub fn read_line(&self, range: Range) -> Step<Line<'buf>> {
        or_fatal(self.checked_read_line(range))
    }

    /// Looks for the first occurrence of `pattern` in `range`.
    ///
    /// On a match, `rest.start` moves just past it, or onto `end` when the
    /// match ends there, in which case the step is
    /// [`exhausted`](Step::exhausted). Otherwise `rest` is `range` unchanged.
    ///
    /// # Errors
    ///
    /// Fails if the range is malformed or `pattern` is empty.
    pub fn checked_find_str(
        &self,
        range: Range,
        pattern: &[u8],
    ) -> Result<Step<bool>, ReadError> {
        validate(FIND_STR, range, self.buf.len())?;
        if pattern.is_empty() {
            return Err(ReadError::EmptyPattern { op: FIND_STR });
        }

        let window = &self.buf[range.start..range.start + range.remaining()];
        let Some(at) = self.search.find(window, pattern) else {
            self.emit(&Event::NotFound {
                pattern: BStr::new(self.options.clip(pattern)),
                range,
            });
            return Ok(Step {
                value: false,
                rest: range,
                exhausted: range.is_empty(),
            });
        };

        let last = range.start + at + pattern.len() - 1;
        let exhausted = last == range.end;
        let start = if exhausted { range.end } else { last + 1 };
        let rest = Range::new(start, range.end);
        debug_assert!(rest.is_valid(), "after {FIND_STR} {rest}");

        self.emit(&Event::Found {
            pattern: BStr::new(self.options.clip(pattern)),
            next: if exhausted { None } else { Some(self.buf[start]) },
            rest,
        });
        Ok(Step {
            value: true,
            rest,
            exhausted,
        })
    }

    /// Looks for `pattern` in `range`; see [`Reader::checked_find_str`].
    ///
    /// # Panics
    ///
    /// Panics if the range is malformed or `pattern` is empty.
    #[track_caller]
    pub fn find_str(&self, range: Range, pattern: impl AsRef<[u8]>) -> Step<bool> {
        or_fatal(self.checked_find_str(range, pattern.as_ref()))
    }
}
