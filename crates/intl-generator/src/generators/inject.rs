//! Splicing bundle entries into generated text.

use super::{insert_chars, pick};
use rand::Rng;

/// Overwrite a random slice of `base` with one random entry of `entries`.
///
/// A slice as long as the entry is removed at a random offset, then the entry
/// is inserted at a random offset, so the length is preserved. `base` is left
/// alone when it is not longer than the chosen entry or `entries` is empty.
pub fn inject_entry<R: Rng + ?Sized>(rng: &mut R, base: &mut Vec<char>, entries: &[&str]) {
    if entries.is_empty() {
        return;
    }
    let entry = entries[pick(rng, 0, entries.len())];
    let entry_len = entry.chars().count();
    if base.len() <= entry_len {
        return;
    }

    let remove_at = pick(rng, 0, base.len() - entry_len);
    base.drain(remove_at..remove_at + entry_len);
    let insert_at = pick(rng, 0, base.len());
    insert_chars(base, insert_at, entry);
}
