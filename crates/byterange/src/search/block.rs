use super::SearchStrategy;

/// Slides a pattern-sized window one byte at a time and compares whole
/// blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockSearch;

impl SearchStrategy for BlockSearch {
    fn find(&self, window: &[u8], pattern: &[u8]) -> Option<usize> {
        if pattern.is_empty() || pattern.len() > window.len() {
            return None;
        }
        window.windows(pattern.len()).position(|block| block == pattern)
    }
}
