//! Linear scan drivers consuming either automaton structure, and the
//! searcher types built on top of them.

use crate::case_folding::fold_byte;
use crate::pattern::Pattern;
use crate::trace::{NoopObserver, ScanObserver};
use crate::{MatchError, MatchResult, Searcher};

use super::failure_table::FailureTable;
use super::transition_table::TransitionAutomaton;

/// KMP-driven scan: one linear pass resynchronized through the failure
/// table. O(n) regardless of pattern structure.
pub fn scan_kmp(pattern: &Pattern, table: &FailureTable, text: &[u8]) -> MatchResult {
    scan_kmp_with_observer(pattern, table, text, &mut NoopObserver)
}

/// KMP-driven scan reporting each step to `observer`.
pub fn scan_kmp_with_observer(
    pattern: &Pattern,
    table: &FailureTable,
    text: &[u8],
    observer: &mut dyn ScanObserver,
) -> MatchResult {
    let p = pattern.as_bytes();
    let lps = table.as_slice();
    let m = p.len();
    let n = text.len();
    let mut matches = Vec::new();

    let mut i = 0; // text cursor
    let mut j = 0; // pattern cursor
    while i < n {
        if text[i] == p[j] {
            i += 1;
            j += 1;
            observer.scan_step(i, j);
            if j == m {
                let offset = i - j;
                matches.push(offset);
                observer.matched(offset);
                // Resume as if the longest prefix-suffix were already
                // matched, so overlapping occurrences are found too.
                j = lps[m - 1];
            }
        } else if j != 0 {
            j = lps[j - 1];
            observer.scan_step(i, j);
        } else {
            i += 1;
            observer.scan_step(i, 0);
        }
    }
    matches
}

/// DFA-driven scan: a single state variable, O(1) per symbol, no
/// backtracking ever.
pub fn scan_dfa(
    automaton: &TransitionAutomaton,
    text: &[u8],
) -> Result<MatchResult, MatchError> {
    scan_dfa_with_observer(automaton, text, &mut NoopObserver)
}

/// DFA-driven scan reporting each step to `observer`.
pub fn scan_dfa_with_observer(
    automaton: &TransitionAutomaton,
    text: &[u8],
    observer: &mut dyn ScanObserver,
) -> Result<MatchResult, MatchError> {
    scan_dfa_inner(automaton, text, observer, false)
}

fn scan_dfa_inner(
    automaton: &TransitionAutomaton,
    text: &[u8],
    observer: &mut dyn ScanObserver,
    fold: bool,
) -> Result<MatchResult, MatchError> {
    let m = automaton.accepting_state();
    let mut matches = Vec::new();

    let mut state = 0;
    for (i, &raw) in text.iter().enumerate() {
        let byte = if fold { fold_byte(raw) } else { raw };
        state = automaton.step(state, byte)?;
        observer.scan_step(i + 1, state);
        if state == m {
            let offset = i + 1 - m;
            matches.push(offset);
            observer.matched(offset);
            // No reset after a match: the accepting row already encodes the
            // fallback, so overlapping occurrences fall out of the normal
            // transitions.
        }
    }
    Ok(matches)
}

/// Failure-table driven searcher (KMP).
///
/// Smaller footprint than [`DfaSearcher`]: O(m) table instead of O(m·Σ),
/// at the price of occasional pattern-cursor fallbacks during the scan.
#[derive(Clone, Debug)]
pub struct KmpSearcher {
    pattern: Pattern,
    table: FailureTable,
}

impl KmpSearcher {
    /// Compile a searcher from raw pattern bytes.
    pub fn compile(pattern: impl Into<Vec<u8>>) -> Result<Self, MatchError> {
        let pattern = Pattern::new(pattern)?;
        let table = FailureTable::build(&pattern);
        Ok(Self { pattern, table })
    }

    /// Compile while reporting failure-table construction to `observer`.
    pub fn compile_with_observer(
        pattern: impl Into<Vec<u8>>,
        observer: &mut dyn ScanObserver,
    ) -> Result<Self, MatchError> {
        let pattern = Pattern::new(pattern)?;
        let table = FailureTable::build_with_observer(&pattern, observer);
        Ok(Self { pattern, table })
    }

    /// The failure table backing this searcher.
    pub fn failure_table(&self) -> &FailureTable {
        &self.table
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Scan `text`, reporting each step and match to `observer`.
    pub fn find_with_observer(
        &self,
        text: &[u8],
        observer: &mut dyn ScanObserver,
    ) -> MatchResult {
        scan_kmp_with_observer(&self.pattern, &self.table, text, observer)
    }
}

impl Searcher for KmpSearcher {
    fn find(&self, text: &[u8]) -> Result<MatchResult, MatchError> {
        Ok(scan_kmp(&self.pattern, &self.table, text))
    }
}

/// Transition-table driven searcher (DFA).
///
/// Spends O(m·Σ) up front so the scan is a pure table walk with no
/// per-mismatch logic.
#[derive(Clone, Debug)]
pub struct DfaSearcher {
    automaton: TransitionAutomaton,
    fold_case: bool,
}

impl DfaSearcher {
    /// Compile over the full byte alphabet. Scans cannot fail.
    pub fn compile(pattern: impl Into<Vec<u8>>) -> Result<Self, MatchError> {
        let pattern = Pattern::new(pattern)?;
        Ok(Self {
            automaton: TransitionAutomaton::build(&pattern),
            fold_case: false,
        })
    }

    /// Compile over a restricted alphabet of `alphabet_size` symbols.
    ///
    /// A text byte outside the alphabet surfaces as
    /// [`MatchError::AlphabetViolation`] during the scan.
    pub fn compile_with_alphabet(
        pattern: impl Into<Vec<u8>>,
        alphabet_size: usize,
    ) -> Result<Self, MatchError> {
        let pattern = Pattern::new(pattern)?;
        Ok(Self {
            automaton: TransitionAutomaton::with_alphabet(&pattern, alphabet_size)?,
            fold_case: false,
        })
    }

    /// Case-insensitive variant: the pattern is ASCII-folded once at
    /// compile time and each text byte is folded as it is consumed, so no
    /// folded copy of the text is ever allocated.
    pub fn compile_ignore_case(pattern: impl Into<Vec<u8>>) -> Result<Self, MatchError> {
        let pattern = Pattern::new(pattern)?.fold_case();
        Ok(Self {
            automaton: TransitionAutomaton::build(&pattern),
            fold_case: true,
        })
    }

    /// The transition table backing this searcher.
    pub fn automaton(&self) -> &TransitionAutomaton {
        &self.automaton
    }

    /// Scan `text`, reporting each step and match to `observer`.
    pub fn find_with_observer(
        &self,
        text: &[u8],
        observer: &mut dyn ScanObserver,
    ) -> Result<MatchResult, MatchError> {
        scan_dfa_inner(&self.automaton, text, observer, self.fold_case)
    }
}

impl Searcher for DfaSearcher {
    fn find(&self, text: &[u8]) -> Result<MatchResult, MatchError> {
        scan_dfa_inner(&self.automaton, text, &mut NoopObserver, self.fold_case)
    }
}
