//! Brute-force search strategy.

use crate::pattern::Pattern;
use crate::{MatchError, MatchResult, Searcher};

/// Compares the pattern against every alignment of the text.
///
/// O(n·m) worst case; kept as the baseline strategy behind the common
/// [`Searcher`] interface. Like the automaton strategies it reports
/// overlapping occurrences.
#[derive(Clone, Debug)]
pub struct NaiveSearcher {
    pattern: Pattern,
}

impl NaiveSearcher {
    /// Compile a searcher from raw pattern bytes.
    pub fn compile(pattern: impl Into<Vec<u8>>) -> Result<Self, MatchError> {
        Ok(Self {
            pattern: Pattern::new(pattern)?,
        })
    }
}

impl Searcher for NaiveSearcher {
    fn find(&self, text: &[u8]) -> Result<MatchResult, MatchError> {
        let p = self.pattern.as_bytes();
        let m = p.len();
        let mut matches = Vec::new();
        if m > text.len() {
            return Ok(matches);
        }
        for s in 0..=text.len() - m {
            if &text[s..s + m] == p {
                matches.push(s);
            }
        }
        Ok(matches)
    }
}
