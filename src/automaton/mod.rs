//! Automaton construction and matching machinery shared by the KMP and DFA
//! strategies.
//!
//! # Module Organization
//!
//! - `failure_table`: the KMP failure function (LPS table), O(m) to build
//! - `transition_table`: the full `(m+1) × Σ` DFA table, O(m·Σ) to build
//! - `scanner`: linear scan drivers consuming either structure, plus the
//!   `KmpSearcher`/`DfaSearcher` types built on them
//!
//! Both structures are immutable once built; any number of scans may share
//! one concurrently.

mod failure_table;
mod scanner;
mod transition_table;

pub use failure_table::FailureTable;
pub use scanner::{
    scan_dfa, scan_dfa_with_observer, scan_kmp, scan_kmp_with_observer, DfaSearcher, KmpSearcher,
};
pub use transition_table::{TransitionAutomaton, FULL_ALPHABET};
