//! ASCII case folding for the case-insensitive search mode.
//!
//! Folding is byte-wise, so folding a whole text up front and folding each
//! byte as it is consumed are equivalent; the scanners do the latter.

/// Fold a single byte: 'A'..='Z' map to 'a'..='z', everything else is
/// unchanged.
#[inline]
pub(crate) fn fold_byte(b: u8) -> u8 {
    b.to_ascii_lowercase()
}

/// Fold a byte sequence into a new buffer.
pub(crate) fn fold_bytes(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|&b| fold_byte(b)).collect()
}
