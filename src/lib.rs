//! patscan: exact string matching over byte sequences.
//!
//! The core is the automaton machinery shared by two strategies:
//!
//! - [`KmpSearcher`] builds the failure function (LPS table) in O(m) and
//!   drives a linear scan that resynchronizes through it on mismatches.
//! - [`DfaSearcher`] builds a full `(m+1) × Σ` transition table in O(m·Σ)
//!   so the scan is a pure table walk with no backtracking logic.
//!
//! Two further strategies, [`NaiveSearcher`] and [`RabinKarpSearcher`],
//! live behind the same [`Searcher`] interface so callers can swap them in
//! without code changes. All four report every occurrence of the pattern,
//! overlapping ones included, as ascending zero-based start offsets.
//!
//! ```
//! use patscan::{DfaSearcher, KmpSearcher, Searcher};
//!
//! let kmp = KmpSearcher::compile("aba").unwrap();
//! let dfa = DfaSearcher::compile("aba").unwrap();
//!
//! let text = b"ababa";
//! assert_eq!(kmp.find(text).unwrap(), vec![0, 2]);
//! assert_eq!(dfa.find(text).unwrap(), vec![0, 2]);
//! ```
//!
//! Searchers are immutable after compilation, so one searcher may be
//! shared across threads and run any number of concurrent scans.

mod automaton;
mod case_folding;
mod naive;
mod pattern;
mod rabin_karp;
mod trace;

use std::fmt;

pub use automaton::{
    scan_dfa, scan_dfa_with_observer, scan_kmp, scan_kmp_with_observer, DfaSearcher, FailureTable,
    KmpSearcher, TransitionAutomaton, FULL_ALPHABET,
};
pub use naive::NaiveSearcher;
pub use pattern::Pattern;
pub use rabin_karp::RabinKarpSearcher;
pub use trace::{NoopObserver, Recorder, ScanObserver, TraceEvent};

/// Ordered, duplicate-free match-start offsets into the scanned text.
pub type MatchResult = Vec<usize>;

/// Errors that can occur while compiling or running a searcher
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// The pattern (or a declared alphabet) is structurally invalid, e.g.
    /// an empty pattern.
    InvalidPattern(String),
    /// A symbol fell outside a declared restricted alphabet. Only possible
    /// for DFA searchers compiled with an explicit alphabet size.
    AlphabetViolation { symbol: u8, alphabet_size: usize },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::InvalidPattern(msg) => write!(f, "invalid pattern: {}", msg),
            MatchError::AlphabetViolation {
                symbol,
                alphabet_size,
            } => write!(
                f,
                "symbol {:#04x} outside declared alphabet of size {}",
                symbol, alphabet_size
            ),
        }
    }
}

impl std::error::Error for MatchError {}

/// One search strategy compiled for a single pattern.
///
/// Implementations hold no scan state between calls; each scan is an
/// independent, deterministic function of the text.
pub trait Searcher {
    /// Find every occurrence of the compiled pattern in `text`.
    ///
    /// A pattern longer than the text and an empty text are both valid and
    /// yield an empty result.
    fn find(&self, text: &[u8]) -> Result<MatchResult, MatchError>;

    /// Number of occurrences of the pattern in `text`.
    fn count(&self, text: &[u8]) -> Result<usize, MatchError> {
        Ok(self.find(text)?.len())
    }
}
