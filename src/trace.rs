//! Scan observation hooks.
//!
//! Table construction and scanning can report intermediate state to a
//! [`ScanObserver`]: settled failure-table entries, the cursor/state after
//! each consumed symbol, and each recorded match. The core calls the
//! observer but never depends on what it does with the snapshots; every
//! method defaults to a no-op, so observers implement only what they need.

/// Receives structural snapshots during table construction and scanning.
pub trait ScanObserver {
    /// A failure-table entry has been settled: `lps[position] == len`.
    /// `lps` holds the entries settled so far, `position` inclusive.
    fn table_entry(&mut self, position: usize, len: usize, lps: &[usize]) {
        let _ = (position, len, lps);
    }

    /// One scan step has been taken. For the KMP scan `state` is the
    /// pattern cursor; for the DFA scan it is the automaton state. In both
    /// cases `text_pos - state` is the current shift of the pattern against
    /// the text.
    fn scan_step(&mut self, text_pos: usize, state: usize) {
        let _ = (text_pos, state);
    }

    /// A full match was recorded at `offset`.
    fn matched(&mut self, offset: usize) {
        let _ = offset;
    }
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// One recorded observation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    TableEntry {
        position: usize,
        len: usize,
        lps: Vec<usize>,
    },
    ScanStep {
        text_pos: usize,
        state: usize,
    },
    Matched {
        offset: usize,
    },
}

/// Observer that records every event in order. Useful for tests and for
/// rendering step-by-step traces outside the core.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub events: Vec<TraceEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The offsets of all `Matched` events seen so far.
    pub fn match_offsets(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Matched { offset } => Some(*offset),
                _ => None,
            })
            .collect()
    }
}

impl ScanObserver for Recorder {
    fn table_entry(&mut self, position: usize, len: usize, lps: &[usize]) {
        self.events.push(TraceEvent::TableEntry {
            position,
            len,
            lps: lps.to_vec(),
        });
    }

    fn scan_step(&mut self, text_pos: usize, state: usize) {
        self.events.push(TraceEvent::ScanStep { text_pos, state });
    }

    fn matched(&mut self, offset: usize) {
        self.events.push(TraceEvent::Matched { offset });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_collects_in_order() {
        let mut rec = Recorder::new();
        rec.table_entry(1, 0, &[0, 0]);
        rec.scan_step(1, 1);
        rec.matched(0);

        assert_eq!(rec.events.len(), 3);
        assert_eq!(rec.match_offsets(), vec![0]);
        assert_eq!(
            rec.events[0],
            TraceEvent::TableEntry {
                position: 1,
                len: 0,
                lps: vec![0, 0],
            }
        );
    }

    #[test]
    fn test_noop_observer_is_callable() {
        let mut obs = NoopObserver;
        obs.table_entry(0, 0, &[0]);
        obs.scan_step(0, 0);
        obs.matched(0);
    }
}
