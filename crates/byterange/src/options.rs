/// Configuration for a [`Reader`](crate::Reader).
///
/// Only affects diagnostics; read results are identical under every
/// configuration.
///
/// # Examples
///
/// ```rust
/// use byterange::{Reader, ReaderOptions};
///
/// let reader = Reader::new(b"payload").with_options(ReaderOptions {
///     max_trace_bytes: Some(16),
///     ..Default::default()
/// });
/// ```
///
/// # Default
///
/// Tracing on, payloads untruncated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Whether to skip emitting trace records entirely.
    ///
    /// # Default
    ///
    /// `false`
    pub quiet: bool,

    /// Upper bound on the number of line or pattern bytes carried by a trace
    /// record. Longer payloads are cut to their first `max_trace_bytes`.
    ///
    /// # Default
    ///
    /// `None` (unlimited)
    pub max_trace_bytes: Option<usize>,
}

impl ReaderOptions {
    pub(crate) fn clip<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        match self.max_trace_bytes {
            Some(max) if bytes.len() > max => &bytes[..max],
            _ => bytes,
        }
    }
}
