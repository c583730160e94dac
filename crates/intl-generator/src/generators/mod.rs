//! String composers.
//!
//! Each composer reads sections from a [`LocaleContext`](intl_core::LocaleContext)
//! and draws from the caller's RNG. Lengths are counted in `char`s.
//!
//! Shared conventions:
//! - a requested length of zero yields empty output
//! - `exact` asks for exactly the requested length, otherwise a length is
//!   drawn from `[1, max_len]`

pub mod codepage;
pub mod datetime;
pub mod encoding;
pub mod filename;
pub mod identifier;
pub mod inject;
pub mod interleave;
pub mod invalid_ansi;
pub mod plain;
pub mod round_trip;
pub mod text;

use rand::Rng;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Uniform integer in `[lo, hi)`; `lo` when the range is empty.
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, lo: usize, hi: usize) -> usize {
    if hi <= lo {
        lo
    } else {
        rng.random_range(lo..hi)
    }
}

/// Length to generate for a request of `max_len`.
pub fn target_length<R: Rng + ?Sized>(rng: &mut R, max_len: usize, exact: bool) -> usize {
    if max_len == 0 || exact {
        max_len
    } else {
        rng.random_range(1..=max_len)
    }
}

/// Insert `entry` at char position `at`, clamped to the end.
pub(crate) fn insert_chars(target: &mut Vec<char>, at: usize, entry: &str) {
    let at = at.min(target.len());
    target.splice(at..at, entry.chars());
}

pub(crate) fn is_letter(c: char) -> bool {
    matches!(
        c.general_category(),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::OtherLetter
    )
}

/// Letter of any kind, or a decimal digit.
pub(crate) fn is_letter_or_digit(c: char) -> bool {
    matches!(
        c.general_category(),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// Rotate `chars` left so the first element is not numeric.
///
/// Left untouched when every element is numeric.
pub(crate) fn rotate_to_non_numeric(chars: &mut [char]) {
    if let Some(first) = chars.iter().position(|c| !c.is_numeric()) {
        chars.rotate_left(first);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_empty_range() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(pick(&mut rng, 5, 5), 5);
        assert_eq!(pick(&mut rng, 5, 1), 5);
        for _ in 0..100 {
            let value = pick(&mut rng, 2, 6);
            assert!((2..6).contains(&value));
        }
    }

    #[test]
    fn test_target_length() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(target_length(&mut rng, 0, false), 0);
        assert_eq!(target_length(&mut rng, 12, true), 12);
        for _ in 0..100 {
            let len = target_length(&mut rng, 3, false);
            assert!((1..=3).contains(&len));
        }
    }

    #[test]
    fn test_categories() {
        assert!(is_letter('a'));
        assert!(is_letter('Ä'));
        assert!(is_letter('表'));
        assert!(!is_letter('7'));
        assert!(is_letter_or_digit('7'));
        assert!(is_letter_or_digit('٣'));
        assert!(!is_letter_or_digit('Ⅻ'));
        assert!(!is_letter_or_digit('_'));
    }

    #[test]
    fn test_rotate_to_non_numeric() {
        let mut chars: Vec<char> = "12ab".chars().collect();
        rotate_to_non_numeric(&mut chars);
        assert_eq!(chars.iter().collect::<String>(), "ab12");

        let mut digits: Vec<char> = "123".chars().collect();
        rotate_to_non_numeric(&mut digits);
        assert_eq!(digits.iter().collect::<String>(), "123");
    }

    #[test]
    fn test_insert_chars_clamps() {
        let mut chars: Vec<char> = "abc".chars().collect();
        insert_chars(&mut chars, 10, "XY");
        assert_eq!(chars.iter().collect::<String>(), "abcXY");
        insert_chars(&mut chars, 0, "é");
        assert_eq!(chars.iter().collect::<String>(), "éabcXY");
    }
}
