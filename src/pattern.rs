//! Validated pattern type shared by every search strategy.

use crate::case_folding::fold_bytes;
use crate::MatchError;

/// An immutable, non-empty byte sequence to search for.
///
/// A `Pattern` is the source of truth for both automaton types; it is never
/// mutated after construction. Emptiness is rejected up front so the table
/// builders are total over any `Pattern` they receive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    bytes: Vec<u8>,
}

impl Pattern {
    /// Create a pattern from raw bytes. The empty sequence is rejected.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, MatchError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(MatchError::InvalidPattern(
                "pattern must be non-empty".to_string(),
            ));
        }
        Ok(Self { bytes })
    }

    /// The pattern as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Pattern length in bytes. Always at least 1.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; emptiness is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// An ASCII-lowercased copy, used by the case-insensitive search mode.
    pub fn fold_case(&self) -> Self {
        Self {
            bytes: fold_bytes(&self.bytes),
        }
    }
}
