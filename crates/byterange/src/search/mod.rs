//! Substring search over a window of bytes.
//!
//! Two strategies are kept side by side. [`BlockSearch`] is the default;
//! [`LoopSearch`] exists so the two can be benchmarked and checked against
//! each other. Both report the offset of the first match inside the window,
//! and the reader turns that offset into the new range in one place, so the
//! range outcome only depends on which occurrence is found first.

mod block;
mod naive;

pub use block::BlockSearch;
pub use naive::LoopSearch;

/// Finds the first occurrence of a pattern in a window.
pub trait SearchStrategy {
    /// Offset within `window` of the first occurrence of `pattern`.
    ///
    /// An empty `pattern` never matches.
    fn find(&self, window: &[u8], pattern: &[u8]) -> Option<usize>;
}

impl<S: SearchStrategy + ?Sized> SearchStrategy for &S {
    fn find(&self, window: &[u8], pattern: &[u8]) -> Option<usize> {
        (**self).find(window, pattern)
    }
}
