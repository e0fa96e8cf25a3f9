//! KMP failure-function (LPS) table construction.

use smallvec::SmallVec;

use crate::pattern::Pattern;
use crate::trace::{NoopObserver, ScanObserver};

/// For each pattern position `i`, the length of the longest proper prefix
/// of `pattern[0..=i]` that is also a suffix of it.
///
/// The table drives backtracking-free resynchronization: on a mismatch
/// after `j` matched symbols, scanning resumes at `lps[j - 1]` without
/// moving the text cursor.
///
/// Storage is an inline small-vector, so typical short patterns need no
/// heap allocation.
#[derive(Clone, Debug)]
pub struct FailureTable {
    lps: SmallVec<[usize; 16]>,
}

impl FailureTable {
    /// Build the table for `pattern` in O(m).
    pub fn build(pattern: &Pattern) -> Self {
        Self::build_with_observer(pattern, &mut NoopObserver)
    }

    /// Build the table, reporting each settled entry to `observer`.
    ///
    /// The running match length only ever falls back through previously
    /// recorded entries, and every decrease is paid for by an earlier
    /// increase, so total work stays linear in the pattern length.
    pub fn build_with_observer(pattern: &Pattern, observer: &mut dyn ScanObserver) -> Self {
        let p = pattern.as_bytes();
        let m = p.len();
        let mut lps: SmallVec<[usize; 16]> = SmallVec::with_capacity(m);
        lps.push(0);

        let mut len = 0; // current prefix-suffix match length
        let mut i = 1;
        while i < m {
            if p[i] == p[len] {
                len += 1;
                lps.push(len);
                observer.table_entry(i, len, lps.as_slice());
                i += 1;
            } else if len != 0 {
                // Fall back to the next-shorter prefix-suffix; `i` is
                // re-tested against it.
                len = lps[len - 1];
            } else {
                lps.push(0);
                observer.table_entry(i, 0, lps.as_slice());
                i += 1;
            }
        }

        Self { lps }
    }

    /// The table as a slice, one entry per pattern position.
    pub fn as_slice(&self) -> &[usize] {
        &self.lps
    }

    /// Number of entries, equal to the pattern length.
    pub fn len(&self) -> usize {
        self.lps.len()
    }

    /// Always false; the table has one entry per pattern byte and patterns
    /// are non-empty.
    pub fn is_empty(&self) -> bool {
        self.lps.is_empty()
    }
}
