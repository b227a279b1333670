use crate::{
    error::ReadError,
    int::BigEndian,
    line::Line,
    range::Range,
    reader::{Reader, Step},
    search::SearchStrategy,
    trace::Trace,
};

/// A [`Range`] threaded through successive reads of one [`Reader`].
///
/// Each cursor owns its range, so several cursors may walk the same buffer
/// independently.
///
/// ```rust
/// use byterange::{Reader, trace::NoTrace};
///
/// let buf = b"\x00\x00\x00\x02v1\nrest";
/// let reader = Reader::new(buf).with_trace(NoTrace);
/// let mut cursor = reader.cursor(reader.whole().unwrap());
///
/// assert_eq!(cursor.read_i32(), 2);
/// assert_eq!(cursor.read_line().bytes(), b"v1");
/// assert!(cursor.find_str("es"));
/// assert_eq!(cursor.range().start, 10);
/// ```
#[derive(Debug)]
pub struct Cursor<'r, 'buf, T, S> {
    reader: &'r Reader<'buf, T, S>,
    range: Range,
}

impl<'r, 'buf, T: Trace, S: SearchStrategy> Cursor<'r, 'buf, T, S> {
    /// A cursor over `range` of `reader`'s buffer.
    pub fn new(reader: &'r Reader<'buf, T, S>, range: Range) -> Self {
        Self { reader, range }
    }

    /// The unread window.
    pub fn range(&self) -> Range {
        self.range
    }

    /// Bytes left in the window.
    pub fn remaining(&self) -> usize {
        self.range.remaining()
    }

    /// Whether every byte of the window has been consumed, including by a
    /// line or match that ended on the window's last byte.
    pub fn is_exhausted(&self) -> bool {
        self.range.is_empty()
    }

    /// Once a step has used up the window the cursor moves to the empty
    /// range `[end + 1, end]`, even where the reader clamped `start` onto
    /// `end`, so the clamped byte is never read twice.
    fn advance<V>(&mut self, step: Step<V>) -> V {
        self.range = if step.exhausted {
            Range::new(step.rest.end + 1, step.rest.end)
        } else {
            step.rest
        };
        step.value
    }

    /// Decodes a big-endian integer, leaving the cursor untouched on error.
    ///
    /// # Errors
    ///
    /// See [`Reader::checked_read_be`].
    pub fn checked_read_be<N: BigEndian>(&mut self) -> Result<N, ReadError> {
        let step = self.reader.checked_read_be(self.range)?;
        Ok(self.advance(step))
    }

    /// Decodes a big-endian integer.
    ///
    /// # Panics
    ///
    /// See [`Reader::read_be`].
    #[track_caller]
    pub fn read_be<N: BigEndian>(&mut self) -> N {
        let step = self.reader.read_be(self.range);
        self.advance(step)
    }

    /// Reads an 8-byte big-endian signed integer.
    ///
    /// # Panics
    ///
    /// See [`Reader::read_i64`].
    #[track_caller]
    pub fn read_i64(&mut self) -> i64 {
        self.read_be()
    }

    /// Reads a 4-byte big-endian signed integer.
    ///
    /// # Panics
    ///
    /// See [`Reader::read_i32`].
    #[track_caller]
    pub fn read_i32(&mut self) -> i32 {
        self.read_be()
    }

    /// Reads a 2-byte big-endian signed integer.
    ///
    /// # Panics
    ///
    /// See [`Reader::read_i16`].
    #[track_caller]
    pub fn read_i16(&mut self) -> i16 {
        self.read_be()
    }

    /// Reads one byte as a signed integer.
    ///
    /// # Panics
    ///
    /// See [`Reader::read_i8`].
    #[track_caller]
    pub fn read_i8(&mut self) -> i8 {
        self.read_be()
    }

    /// Extracts the next line.
    ///
    /// # Errors
    ///
    /// See [`Reader::checked_read_line`].
    pub fn checked_read_line(&mut self) -> Result<Line<'buf>, ReadError> {
        let step = self.reader.checked_read_line(self.range)?;
        Ok(self.advance(step))
    }

    /// Extracts the next line.
    ///
    /// # Panics
    ///
    /// See [`Reader::read_line`].
    #[track_caller]
    pub fn read_line(&mut self) -> Line<'buf> {
        let step = self.reader.read_line(self.range);
        self.advance(step)
    }

    /// Moves past the next occurrence of `pattern`, if any.
    ///
    /// # Errors
    ///
    /// See [`Reader::checked_find_str`].
    pub fn checked_find_str(&mut self, pattern: &[u8]) -> Result<bool, ReadError> {
        let step = self.reader.checked_find_str(self.range, pattern)?;
        Ok(self.advance(step))
    }

    /// Moves past the next occurrence of `pattern`, if any.
    ///
    /// # Panics
    ///
    /// See [`Reader::find_str`].
    #[track_caller]
    pub fn find_str(&mut self, pattern: impl AsRef<[u8]>) -> bool {
        let step = self.reader.find_str(self.range, pattern);
        self.advance(step)
    }
}
