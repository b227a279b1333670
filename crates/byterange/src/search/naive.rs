use super::SearchStrategy;

/// Compares byte by byte from every position that matches the pattern's
/// first byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSearch;

impl SearchStrategy for LoopSearch {
    fn find(&self, window: &[u8], pattern: &[u8]) -> Option<usize> {
        let (&first, tail) = pattern.split_first()?;

        'candidates: for (at, &byte) in window.iter().enumerate() {
            if byte != first {
                continue;
            }
            let mut cmp = at;
            for &want in tail {
                cmp += 1;
                match window.get(cmp) {
                    // Ran off the window: no later candidate fits either.
                    None => return None,
                    Some(&got) if got != want => continue 'candidates,
                    Some(_) => {}
                }
            }
            return Some(at);
        }

        None
    }
}
