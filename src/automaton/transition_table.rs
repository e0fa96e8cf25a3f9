//! Full DFA transition-table construction.

use crate::pattern::Pattern;
use crate::MatchError;

/// Number of distinct byte values; the default alphabet covers all of them.
pub const FULL_ALPHABET: usize = 256;

/// A `(m + 1) × Σ` deterministic transition table compiled from a pattern.
///
/// A state counts how many pattern symbols are currently matched; state `m`
/// is the unique accepting state. All rows live in one flat owned buffer
/// indexed `state * alphabet_size + symbol`.
///
/// Building costs O(m·Σ) time and space, the dominant cost of the library;
/// in exchange the scan needs no backtracking logic at all.
#[derive(Clone, Debug)]
pub struct TransitionAutomaton {
    transitions: Vec<usize>,
    alphabet_size: usize,
    pattern_len: usize,
}

impl TransitionAutomaton {
    /// Build the automaton over the full byte alphabet.
    ///
    /// Every possible text byte has a defined transition, so scans driven
    /// by this automaton can never raise [`MatchError::AlphabetViolation`].
    pub fn build(pattern: &Pattern) -> Self {
        Self::build_unchecked(pattern, FULL_ALPHABET)
    }

    /// Build the automaton over a restricted alphabet of `alphabet_size`
    /// symbols, `0..alphabet_size`.
    ///
    /// Fails with [`MatchError::AlphabetViolation`] if the pattern itself
    /// contains a symbol outside the alphabet, and with
    /// [`MatchError::InvalidPattern`] for a zero-sized alphabet.
    pub fn with_alphabet(pattern: &Pattern, alphabet_size: usize) -> Result<Self, MatchError> {
        if alphabet_size == 0 || alphabet_size > FULL_ALPHABET {
            return Err(MatchError::InvalidPattern(format!(
                "alphabet size must be in 1..={}, got {}",
                FULL_ALPHABET, alphabet_size
            )));
        }
        if let Some(&symbol) = pattern
            .as_bytes()
            .iter()
            .find(|&&b| (b as usize) >= alphabet_size)
        {
            return Err(MatchError::AlphabetViolation {
                symbol,
                alphabet_size,
            });
        }
        Ok(Self::build_unchecked(pattern, alphabet_size))
    }

    /// Core construction. Every pattern byte must be within the alphabet.
    fn build_unchecked(pattern: &Pattern, alphabet_size: usize) -> Self {
        let p = pattern.as_bytes();
        let m = p.len();
        let mut transitions = vec![0usize; (m + 1) * alphabet_size];

        // Row 0: only the first pattern symbol makes progress.
        transitions[p[0] as usize] = 1;

        // The fallback is the state the automaton would be in had the
        // current partial match failed; each new row inherits its
        // transitions from the fallback row. States must be processed in
        // increasing order because the fallback is re-derived through rows
        // already built.
        let mut fallback = 0;
        for state in 1..=m {
            transitions.copy_within(
                fallback * alphabet_size..(fallback + 1) * alphabet_size,
                state * alphabet_size,
            );
            if state < m {
                let symbol = p[state] as usize;
                // Read through the old fallback row before advancing it.
                let next_fallback = transitions[fallback * alphabet_size + symbol];
                transitions[state * alphabet_size + symbol] = state + 1;
                fallback = next_fallback;
            }
        }

        Self {
            transitions,
            alphabet_size,
            pattern_len: m,
        }
    }

    /// Alphabet size Σ this automaton was built over.
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Length of the source pattern, which is also the accepting state.
    pub fn accepting_state(&self) -> usize {
        self.pattern_len
    }

    /// Transition out of `state` on `symbol`.
    ///
    /// Fails with [`MatchError::AlphabetViolation`] when `symbol` falls
    /// outside a restricted alphabet; for automata built over the full
    /// byte alphabet this cannot happen.
    #[inline]
    pub fn step(&self, state: usize, symbol: u8) -> Result<usize, MatchError> {
        if (symbol as usize) >= self.alphabet_size {
            return Err(MatchError::AlphabetViolation {
                symbol,
                alphabet_size: self.alphabet_size,
            });
        }
        Ok(self.transitions[state * self.alphabet_size + symbol as usize])
    }
}
