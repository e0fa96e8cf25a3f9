//! Smoke test exercising every search strategy and the trace observer.

use patscan::{
    DfaSearcher, KmpSearcher, NaiveSearcher, RabinKarpSearcher, Recorder, Searcher, TraceEvent,
};

fn main() {
    test_strategies_agree();
    test_overlapping();
    test_ignore_case();
    test_trace_observer();

    println!("\nAll smoke tests passed");
}

fn test_strategies_agree() {
    let pattern = b"ababbabca";
    let text = b"bacbabbaababababbabcax";

    let kmp = KmpSearcher::compile(&pattern[..]).unwrap();
    let dfa = DfaSearcher::compile(&pattern[..]).unwrap();
    let naive = NaiveSearcher::compile(&pattern[..]).unwrap();
    let rk = RabinKarpSearcher::compile(&pattern[..]).unwrap();

    let expected = naive.find(text).unwrap();
    assert_eq!(kmp.find(text).unwrap(), expected);
    assert_eq!(dfa.find(text).unwrap(), expected);
    assert_eq!(rk.find(text).unwrap(), expected);
    println!("strategies agree: {:?}", expected);
}

fn test_overlapping() {
    let dfa = DfaSearcher::compile("aaa").unwrap();
    assert_eq!(dfa.find(b"aaaa").unwrap(), vec![0, 1]);
    println!("overlapping matches reported");
}

fn test_ignore_case() {
    let dfa = DfaSearcher::compile_ignore_case("Needle").unwrap();
    assert_eq!(dfa.count(b"needle NEEDLE nEeDlE").unwrap(), 3);
    println!("case-insensitive mode");
}

fn test_trace_observer() {
    let mut rec = Recorder::new();
    let kmp = KmpSearcher::compile_with_observer("ababbabca", &mut rec).unwrap();
    assert_eq!(kmp.failure_table().as_slice(), &[0, 0, 1, 2, 0, 1, 2, 0, 1]);

    let matches = kmp.find_with_observer(b"xxababbabcaxx", &mut rec);
    assert_eq!(matches, vec![2]);

    let steps = rec
        .events
        .iter()
        .filter(|e| matches!(e, TraceEvent::ScanStep { .. }))
        .count();
    println!("trace observer: {} scan steps, matches {:?}", steps, matches);
}
