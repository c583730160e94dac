//! Random slices of sample text.

use super::pick;
use rand::Rng;

/// Concatenate random slices of `text` until `len` chars are collected.
///
/// Each slice has a random offset and a random length of at least one char;
/// the last slice is clipped so the output never exceeds `len`. Empty
/// `text` yields an empty string.
pub fn build_plain<R: Rng + ?Sized>(rng: &mut R, text: &[char], len: usize) -> Vec<char> {
    let mut out = Vec::with_capacity(len);
    if text.is_empty() {
        return out;
    }

    while out.len() < len {
        let remaining = len - out.len();
        let start = pick(rng, 0, text.len());
        let slice_len = pick(rng, 1, text.len() + 1)
            .min(remaining)
            .min(text.len() - start);
        out.extend_from_slice(&text[start..start + slice_len]);
    }
    out
}
