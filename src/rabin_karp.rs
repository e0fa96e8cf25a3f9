//! Rabin–Karp rolling-hash search strategy.

use crate::pattern::Pattern;
use crate::{MatchError, MatchResult, Searcher};

/// Radix of the rolling hash; one digit per possible byte value.
const RADIX: u64 = 256;

/// Small prime modulus, as in the classic formulation. Collisions are
/// expected and every hash hit is verified by direct comparison.
const MODULUS: u64 = 101;

/// Rolling-hash searcher.
///
/// Hashes the pattern once, then slides an m-byte window over the text,
/// updating the window hash in O(1) per shift. Expected O(n + m) with the
/// same overlap-inclusive results as the automaton strategies.
#[derive(Clone, Debug)]
pub struct RabinKarpSearcher {
    pattern: Pattern,
    pattern_hash: u64,
    /// `RADIX^(m-1) mod MODULUS`, the weight of the outgoing byte.
    lead: u64,
}

impl RabinKarpSearcher {
    /// Compile a searcher from raw pattern bytes.
    pub fn compile(pattern: impl Into<Vec<u8>>) -> Result<Self, MatchError> {
        let pattern = Pattern::new(pattern)?;
        let mut lead = 1;
        for _ in 1..pattern.len() {
            lead = (lead * RADIX) % MODULUS;
        }
        let pattern_hash = hash(pattern.as_bytes());
        Ok(Self {
            pattern,
            pattern_hash,
            lead,
        })
    }
}

/// Horner-evaluate a window as a base-RADIX number mod MODULUS.
fn hash(window: &[u8]) -> u64 {
    window
        .iter()
        .fold(0, |h, &b| (h * RADIX + u64::from(b)) % MODULUS)
}

impl Searcher for RabinKarpSearcher {
    fn find(&self, text: &[u8]) -> Result<MatchResult, MatchError> {
        let p = self.pattern.as_bytes();
        let m = p.len();
        let n = text.len();
        let mut matches = Vec::new();
        if m > n {
            return Ok(matches);
        }

        let mut window_hash = hash(&text[..m]);
        for s in 0..=n - m {
            if window_hash == self.pattern_hash && &text[s..s + m] == p {
                matches.push(s);
            }
            if s + m < n {
                // Roll: drop text[s], take in text[s + m].
                let outgoing = u64::from(text[s]) * self.lead % MODULUS;
                window_hash = (window_hash + MODULUS - outgoing) % MODULUS;
                window_hash = (window_hash * RADIX + u64::from(text[s + m])) % MODULUS;
            }
        }
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_hash_matches_direct_hash() {
        let text = b"the quick brown fox jumps over the lazy dog";
        let m = 5;
        let mut window_hash = hash(&text[..m]);
        let mut lead = 1;
        for _ in 1..m {
            lead = (lead * RADIX) % MODULUS;
        }
        for s in 0..text.len() - m {
            let outgoing = u64::from(text[s]) * lead % MODULUS;
            window_hash = (window_hash + MODULUS - outgoing) % MODULUS;
            window_hash = (window_hash * RADIX + u64::from(text[s + m])) % MODULUS;
            assert_eq!(window_hash, hash(&text[s + 1..s + 1 + m]));
        }
    }

    #[test]
    fn test_rabin_karp_basic() {
        let s = RabinKarpSearcher::compile("the").unwrap();
        assert_eq!(
            s.find(b"the quick brown fox jumps over the lazy dog").unwrap(),
            vec![0, 31]
        );
    }

    #[test]
    fn test_rabin_karp_overlapping() {
        let s = RabinKarpSearcher::compile("aaa").unwrap();
        assert_eq!(s.find(b"aaaa").unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_rabin_karp_collision_verified() {
        // With modulus 101 many windows collide; none may be reported
        // without a direct comparison succeeding.
        let s = RabinKarpSearcher::compile("ab").unwrap();
        let matches = s.find(b"axbxabxaxb").unwrap();
        assert_eq!(matches, vec![4]);
    }

    #[test]
    fn test_rabin_karp_single_byte_pattern() {
        let s = RabinKarpSearcher::compile("a").unwrap();
        assert_eq!(s.find(b"banana").unwrap(), vec![1, 3, 5]);
    }
}
