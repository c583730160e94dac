//! Strings dense in interesting or problematic characters.

use super::text::compose;
use super::{insert_chars, pick};
use crate::GeneratorError;
use intl_core::{LocaleContext, Section};
use rand::Rng;

/// One splice position per entry.
///
/// `len` is split into `entries.len()` equal-width buckets and entry `i`
/// draws its position from bucket `i`. Each position is then shifted by the
/// total length of the entries inserted before it.
pub fn random_positions<R: Rng + ?Sized>(rng: &mut R, len: usize, entries: &[&str]) -> Vec<usize> {
    let n = entries.len();
    let mut shift = 0;
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let position = pick(rng, len * i / n, len * (i + 1) / n) + shift;
            shift += entry.chars().count();
            position
        })
        .collect()
}

/// A `len`-char string built around the entries of `section`.
///
/// When `len` exceeds the combined length of the entries, a general string
/// fills the gap and every entry is spliced into it. Otherwise a `len`-char
/// window of the entries, concatenated twice, is returned.
pub fn interleave<R: Rng + ?Sized>(
    context: &LocaleContext,
    rng: &mut R,
    section: Section,
    len: usize,
    validate: bool,
) -> Result<String, GeneratorError> {
    if len == 0 {
        return Ok(String::new());
    }

    let entries = context.lines(section)?;
    let joined: Vec<char> = entries.iter().flat_map(|entry| entry.chars()).collect();

    if len > joined.len() {
        let mut out = compose(context, rng, len - joined.len(), validate)?;
        let positions = random_positions(rng, out.len(), &entries);
        for (entry, position) in entries.iter().zip(positions) {
            insert_chars(&mut out, position, entry);
        }
        return Ok(out.into_iter().collect());
    }

    let start = pick(rng, 0, joined.len());
    Ok(joined
        .iter()
        .chain(joined.iter())
        .skip(start)
        .take(len)
        .collect())
}

/// One `len`-char general string per PROBLEMATIC_CHARS entry, each with its
/// entry spliced in at a random offset.
pub fn problematic_strings<R: Rng + ?Sized>(
    context: &LocaleContext,
    rng: &mut R,
    len: usize,
) -> Result<Vec<String>, GeneratorError> {
    let entries = context.lines(Section::ProblematicChars)?;
    let mut strings = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut out = compose(context, rng, len, true)?;
        let at = pick(rng, 0, out.len() + 1);
        insert_chars(&mut out, at, entry);
        strings.push(out.into_iter().collect());
    }
    Ok(strings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use intl_core::{ByteRangeTable, EmbeddedBundles, LocaleId};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn context(locale: LocaleId) -> LocaleContext {
        LocaleContext::load(&EmbeddedBundles, locale, &ByteRangeTable::default()).unwrap()
    }

    #[test]
    fn test_positions_fall_in_buckets() {
        let mut rng = StdRng::seed_from_u64(42);
        let entries = ["ab", "c", "def"];
        for _ in 0..50 {
            let positions = random_positions(&mut rng, 30, &entries);
            assert!(positions[0] < 10);
            assert!((10 + 2..20 + 2).contains(&positions[1]));
            assert!((20 + 3..30 + 3).contains(&positions[2]));
        }
    }

    #[test]
    fn test_long_request_contains_every_entry() {
        let context = context(LocaleId::English);
        let mut rng = StdRng::seed_from_u64(42);
        let s = interleave(&context, &mut rng, Section::InterestingChars, 80, true).unwrap();
        assert_eq!(s.chars().count(), 80);
        for entry in context.lines(Section::InterestingChars).unwrap() {
            assert!(s.contains(entry), "missing {entry} in {s}");
        }
    }

    #[test]
    fn test_short_request_is_a_window() {
        let context = context(LocaleId::German);
        let mut rng = StdRng::seed_from_u64(42);
        let joined: String = context.lines(Section::InterestingChars).unwrap().concat();
        let doubled = format!("{joined}{joined}");
        for len in 1..=joined.chars().count() {
            let s = interleave(&context, &mut rng, Section::InterestingChars, len, false).unwrap();
            assert_eq!(s.chars().count(), len);
            assert!(doubled.contains(&s));
        }
    }

    #[test]
    fn test_problematic_section() {
        let context = context(LocaleId::Japanese);
        let mut rng = StdRng::seed_from_u64(9);
        let s = interleave(&context, &mut rng, Section::ProblematicChars, 40, true).unwrap();
        assert_eq!(s.chars().count(), 40);
        assert!(s.contains('∥'));
    }

    #[test]
    fn test_problematic_strings_one_per_entry() {
        let context = context(LocaleId::Japanese);
        let mut rng = StdRng::seed_from_u64(42);
        let entries = context.lines(Section::ProblematicChars).unwrap();
        let strings = problematic_strings(&context, &mut rng, 30).unwrap();
        assert_eq!(strings.len(), entries.len());
        for (s, entry) in strings.iter().zip(&entries) {
            assert!(s.contains(entry), "{entry} missing from {s}");
            assert_eq!(s.chars().count(), 30 + entry.chars().count());
        }
    }
}
