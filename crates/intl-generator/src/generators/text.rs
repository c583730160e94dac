//! General locale strings: plain text with an injected entry.

use super::inject::inject_entry;
use super::plain::build_plain;
use super::{rotate_to_non_numeric, target_length};
use crate::GeneratorError;
use intl_core::{LocaleContext, Section};
use rand::Rng;

/// Options shared by the general string generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringOptions {
    /// Produce exactly the requested length
    pub exact: bool,
    /// Drop control characters from the source text
    pub validate: bool,
    /// Never start with a numeric character
    pub no_leading_digit: bool,
}

impl StringOptions {
    pub fn new(exact: bool, validate: bool) -> Self {
        Self {
            exact,
            validate,
            no_leading_digit: false,
        }
    }

    pub fn no_leading_digit(mut self, value: bool) -> Self {
        self.no_leading_digit = value;
        self
    }
}

/// TEXT section of `context` as chars, line breaks removed.
pub(crate) fn text_chars(context: &LocaleContext, validate: bool) -> Result<Vec<char>, GeneratorError> {
    let text = context.section_stripped(Section::Text)?;
    Ok(if validate {
        text.chars().filter(|c| !c.is_control()).collect()
    } else {
        text.chars().collect()
    })
}

/// Build a string of exactly `len` chars (when TEXT allows) from random TEXT
/// slices, then splice in one CHARS_TO_INCLUDE_IN_STRING entry.
pub(crate) fn compose<R: Rng + ?Sized>(
    context: &LocaleContext,
    rng: &mut R,
    len: usize,
    validate: bool,
) -> Result<Vec<char>, GeneratorError> {
    if len == 0 {
        return Ok(Vec::new());
    }
    let text = text_chars(context, validate)?;
    let mut out = build_plain(rng, &text, len);
    let entries = context.lines(Section::CharsToIncludeInString)?;
    inject_entry(rng, &mut out, &entries);
    Ok(out)
}

/// General locale string of up to `max_len` chars.
pub fn generate_string<R: Rng + ?Sized>(
    context: &LocaleContext,
    rng: &mut R,
    max_len: usize,
    options: StringOptions,
) -> Result<String, GeneratorError> {
    let len = target_length(rng, max_len, options.exact);
    let mut chars = compose(context, rng, len, options.validate)?;
    if options.no_leading_digit {
        rotate_to_non_numeric(&mut chars);
    }
    Ok(chars.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use intl_core::{ByteRangeTable, EmbeddedBundles, LocaleId};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn english() -> LocaleContext {
        LocaleContext::load(&EmbeddedBundles, LocaleId::English, &ByteRangeTable::default()).unwrap()
    }

    #[test]
    fn test_exact_length() {
        let context = english();
        let mut rng = StdRng::seed_from_u64(42);
        for len in [1, 2, 10, 64, 500] {
            let s = generate_string(&context, &mut rng, len, StringOptions::new(true, true)).unwrap();
            assert_eq!(s.chars().count(), len);
        }
    }

    #[test]
    fn test_random_length_in_range() {
        let context = english();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let s = generate_string(&context, &mut rng, 8, StringOptions::new(false, false)).unwrap();
            let len = s.chars().count();
            assert!((1..=8).contains(&len), "length {len}");
        }
    }

    #[test]
    fn test_zero_length() {
        let context = english();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            generate_string(&context, &mut rng, 0, StringOptions::new(true, true)).unwrap(),
            ""
        );
    }

    #[test]
    fn test_no_leading_digit() {
        let bundle = "TEXT\n0123456789x\nVALIDDATESTRINGS\nCHARS_TO_INCLUDE_IN_STRING\n";
        let context = LocaleContext::from_text(LocaleId::English, bundle, &ByteRangeTable::default())
            .with_policy(intl_core::ExtractionPolicy::Lenient);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let s = generate_string(
                &context,
                &mut rng,
                20,
                StringOptions::new(true, true).no_leading_digit(true),
            )
            .unwrap();
            if s.contains('x') {
                assert!(s.starts_with('x'), "{s}");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let context = english();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let options = StringOptions::new(true, true);
        assert_eq!(
            generate_string(&context, &mut a, 10, options).unwrap(),
            generate_string(&context, &mut b, 10, options).unwrap()
        );
    }
}
