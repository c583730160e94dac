//! Strings carrying characters that do not survive a trip through the
//! legacy codepage.

use super::text::compose;
use super::{insert_chars, pick};
use crate::GeneratorError;
use intl_core::{LocaleContext, Section};
use rand::Rng;

/// A `len`-char string built from NOT_ROUNDTRIPPABLE.
///
/// If the section is shorter than `len` it is spliced whole into a general
/// string that makes up the difference; otherwise its first `len` chars are
/// returned.
pub fn not_round_trippable<R: Rng + ?Sized>(
    context: &LocaleContext,
    rng: &mut R,
    len: usize,
    validate: bool,
) -> Result<String, GeneratorError> {
    if len == 0 {
        return Ok(String::new());
    }

    let unsafe_chars = context.section_stripped(Section::NotRoundTrippable)?;
    let unsafe_len = unsafe_chars.chars().count();
    if unsafe_len >= len {
        return Ok(unsafe_chars.chars().take(len).collect());
    }

    let mut out = compose(context, rng, len - unsafe_len, validate)?;
    let at = pick(rng, 0, out.len() + 1);
    insert_chars(&mut out, at, &unsafe_chars);
    Ok(out.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use intl_core::{ByteRangeTable, EmbeddedBundles, LocaleId};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_prefix_when_section_is_long_enough() {
        let context =
            LocaleContext::load(&EmbeddedBundles, LocaleId::English, &ByteRangeTable::default())
                .unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(not_round_trippable(&context, &mut rng, 4, true).unwrap(), "ĀāĂă");
    }

    #[test]
    fn test_section_embedded_whole() {
        let context =
            LocaleContext::load(&EmbeddedBundles, LocaleId::Japanese, &ByteRangeTable::default())
                .unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let s = not_round_trippable(&context, &mut rng, 50, false).unwrap();
        assert_eq!(s.chars().count(), 50);
        assert!(s.contains("∑∟∠⊥⌒≒≡∫∮√①②③④⑤⑥⑦⑧⑨⑩"));
    }
}
