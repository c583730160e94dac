//! Characters drawn from a locale's legacy ANSI codepage.
//!
//! Double-byte locales (those with a [`ByteRangeEntry`]) synthesize a lead
//! byte from the entry's ranges and a trail byte from `0x30..0xFE`, then
//! decode the pair with the locale's codepage. Single bytes map straight to
//! the code point of the same value.
//!
//! Two samplers exist:
//!
//! - [`RandomCodepageSampler`] draws every byte independently.
//! - [`SequentialCodepageSampler`] sweeps lead bytes (and single bytes) with
//!   cursors it owns, so repeated calls walk the codepage.
//!
//! Every call yields exactly one `char`.

use super::encoding::legacy_encoding;
use super::filename::is_valid_file_name_char;
use super::{is_letter_or_digit, pick, rotate_to_non_numeric};
use encoding_rs::Encoding;
use intl_core::{ByteRangeEntry, LocaleContext};
use rand::Rng;

/// Attempts at synthesizing a double-byte character before falling back to
/// a single byte.
const MAX_DOUBLE_ATTEMPTS: usize = 256;

/// Redraws allowed for a numeric leading character.
const MAX_LEAD_REDRAWS: usize = 256;

const TRAIL_START: u8 = 0x30;
const TRAIL_END: u8 = 0xFE;

/// First byte of the sequential single-byte sweep.
const SWEEP_START: u32 = 0x30;
/// Number of bytes in the sequential single-byte sweep (`0x30..=0xFF`).
const SWEEP_LEN: u32 = 0x100 - SWEEP_START;

/// Decode a lead/trail pair; `Some` only for exactly one clean character.
fn decode_pair(encoding: &'static Encoding, lead: u8, trail: u8) -> Option<char> {
    let bytes = [lead, trail];
    let (decoded, had_errors) = encoding.decode_without_bom_handling(&bytes);
    if had_errors {
        return None;
    }
    let mut chars = decoded.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn random_trail<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(TRAIL_START..TRAIL_END)
}

/// Independent draws from a codepage.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodepageSampler;

impl RandomCodepageSampler {
    /// One character from `1..=255`, retried until letter-or-digit when
    /// `validate` is set.
    pub fn single<R: Rng + ?Sized>(&self, rng: &mut R, validate: bool) -> char {
        loop {
            let c = char::from(rng.random_range(1..=255u8));
            if !validate || is_letter_or_digit(c) {
                return c;
            }
        }
    }

    /// One double-byte character of `context`'s codepage.
    ///
    /// Single-byte locales, and double-byte draws that keep failing to
    /// decode, yield [`single`](Self::single) instead.
    pub fn double<R: Rng + ?Sized>(&self, context: &LocaleContext, rng: &mut R, validate: bool) -> char {
        let (Some(entry), Some(encoding)) = (context.byte_range(), legacy_encoding(context.locale()))
        else {
            return self.single(rng, validate);
        };

        for _ in 0..MAX_DOUBLE_ATTEMPTS {
            let lead = Self::random_lead(rng, entry);
            let trail = random_trail(rng);
            if let Some(c) = decode_pair(encoding, lead, trail) {
                if !validate || is_letter_or_digit(c) {
                    return c;
                }
            }
        }
        tracing::debug!(
            "No double-byte character after {MAX_DOUBLE_ATTEMPTS} attempts for {}",
            context.locale()
        );
        self.single(rng, validate)
    }

    fn random_lead<R: Rng + ?Sized>(rng: &mut R, entry: &ByteRangeEntry) -> u8 {
        let (start, end) = match entry.second_range() {
            Some(second) if rng.random_bool(0.5) => second,
            _ => (entry.lead_start, entry.lead_end),
        };
        pick(rng, start as usize, end as usize) as u8
    }

    /// A string mixing single and double-byte characters 50/50.
    pub fn string<R: Rng + ?Sized>(
        &self,
        context: &LocaleContext,
        rng: &mut R,
        len: usize,
        validate: bool,
        no_leading_digit: bool,
    ) -> String {
        collect_chars(len, no_leading_digit, || {
            if rng.random_bool(0.5) {
                self.single(rng, validate)
            } else {
                self.double(context, rng, validate)
            }
        })
    }
}

/// Cursor-driven sweep through a codepage.
///
/// Double-byte locales alternate between ascending through the second lead
/// range and descending through the first; trail bytes stay random. Single
/// byte locales sweep `0x30..=0xFF`, restarting one step further on each
/// [`begin_string`](Self::begin_string).
#[derive(Debug, Clone, Default)]
pub struct SequentialCodepageSampler {
    ascending: u32,
    descending: u32,
    use_second_range: bool,
    single_point: u32,
    single_offset: u32,
}

impl SequentialCodepageSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new string: the single-byte sweep moves one step forward.
    pub fn begin_string(&mut self) {
        self.single_point = (self.single_point + 1) % SWEEP_LEN;
        self.single_offset = 0;
    }

    fn next_lead(&mut self, entry: &ByteRangeEntry) -> u8 {
        self.use_second_range = !self.use_second_range;
        match entry.second_range() {
            Some((start, end)) if self.use_second_range && end > start => {
                let span = u32::from(end - start);
                let lead = u32::from(start) + self.ascending % span;
                self.ascending = (self.ascending + 1) % span;
                lead as u8
            }
            _ => {
                let span = u32::from(entry.lead_end.saturating_sub(entry.lead_start)).max(1);
                self.descending = (self.descending + 1) % (span + 1);
                if self.descending == 0 {
                    self.descending = 1;
                }
                u32::from(entry.lead_end).saturating_sub(self.descending) as u8
            }
        }
    }

    /// One double-byte character, or a sequential single byte for locales
    /// without lead ranges.
    pub fn double<R: Rng + ?Sized>(&mut self, context: &LocaleContext, rng: &mut R, validate: bool) -> char {
        let (Some(entry), Some(encoding)) = (context.byte_range(), legacy_encoding(context.locale()))
        else {
            return self.single(validate);
        };

        for _ in 0..MAX_DOUBLE_ATTEMPTS {
            let lead = self.next_lead(entry);
            let trail = random_trail(rng);
            if let Some(c) = decode_pair(encoding, lead, trail) {
                if !validate || is_letter_or_digit(c) {
                    return c;
                }
            }
        }
        tracing::debug!(
            "Sequential sweep found no double-byte character for {}",
            context.locale()
        );
        self.single(validate)
    }

    /// Next character of the single-byte sweep.
    ///
    /// With `validate`, the sweep skips ahead until it reaches a letter or
    /// digit that is also allowed in file names.
    pub fn single(&mut self, validate: bool) -> char {
        for _ in 0..SWEEP_LEN {
            let byte = SWEEP_START + (self.single_point + self.single_offset) % SWEEP_LEN;
            let c = char::from(byte as u8);
            if !validate || (is_letter_or_digit(c) && is_valid_file_name_char(c)) {
                self.single_offset = (self.single_offset + 1) % SWEEP_LEN;
                return c;
            }
            self.single_point = (self.single_point + 1) % SWEEP_LEN;
        }
        // every sweep passes the ASCII digits
        '0'
    }

    /// A string walking the codepage.
    ///
    /// Double-byte locales mix random single bytes and sequential double
    /// bytes 50/50; other locales use the single-byte sweep only.
    pub fn string<R: Rng + ?Sized>(
        &mut self,
        context: &LocaleContext,
        rng: &mut R,
        len: usize,
        validate: bool,
        no_leading_digit: bool,
    ) -> String {
        self.begin_string();
        let double_byte = context.byte_range().is_some();
        collect_chars(len, no_leading_digit, || {
            if double_byte {
                if rng.random_bool(0.5) {
                    RandomCodepageSampler.single(rng, validate)
                } else {
                    self.double(context, rng, validate)
                }
            } else {
                self.single(validate)
            }
        })
    }
}

/// Draw `len` chars, redrawing a numeric first char when asked to.
///
/// A first char still numeric after [`MAX_LEAD_REDRAWS`] redraws is fixed by
/// rotating the string to its first non-numeric char.
fn collect_chars(len: usize, no_leading_digit: bool, mut draw: impl FnMut() -> char) -> String {
    if len == 0 {
        return String::new();
    }

    let mut first = draw();
    if no_leading_digit {
        for _ in 0..MAX_LEAD_REDRAWS {
            if !first.is_numeric() {
                break;
            }
            first = draw();
        }
    }
    let mut chars = Vec::with_capacity(len);
    chars.push(first);
    chars.extend((1..len).map(|_| draw()));

    if no_leading_digit && first.is_numeric() {
        rotate_to_non_numeric(&mut chars);
        if chars[0].is_numeric() {
            tracing::debug!("Codepage string of {len} chars is all numeric");
        }
    }
    chars.into_iter().collect()
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
    fn test_random_single_validated() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let c = RandomCodepageSampler.single(&mut rng, true);
            assert!(is_letter_or_digit(c));
            assert!((1..=255).contains(&(c as u32)));
        }
    }

    #[test]
    fn test_random_double_japanese() {
        let context = context(LocaleId::Japanese);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let c = RandomCodepageSampler.double(&context, &mut rng, true);
            assert!(is_letter_or_digit(c));
            let s = c.to_string();
            let (bytes, _, unmappable) = encoding_rs::SHIFT_JIS.encode(&s);
            assert!(!unmappable);
            assert!(!bytes.is_empty());
        }
    }

    #[test]
    fn test_random_double_falls_back_for_single_byte_locale() {
        let context = context(LocaleId::German);
        let mut rng = StdRng::seed_from_u64(42);
        let c = RandomCodepageSampler.double(&context, &mut rng, true);
        assert!((c as u32) <= 255);
    }

    #[test]
    fn test_random_string_length() {
        let context = context(LocaleId::Korean);
        let mut rng = StdRng::seed_from_u64(5);
        let s = RandomCodepageSampler.string(&context, &mut rng, 25, true, true);
        assert_eq!(s.chars().count(), 25);
        assert!(s.chars().all(is_letter_or_digit));
        assert!(!s.chars().next().unwrap().is_numeric());
    }

    #[test]
    fn test_leading_digit_rotated_after_redraws() {
        let mut draws = 0;
        let s = collect_chars(4, true, || {
            draws += 1;
            if draws == MAX_LEAD_REDRAWS + 3 {
                'x'
            } else {
                '7'
            }
        });
        assert_eq!(s, "x777");

        assert_eq!(collect_chars(3, true, || '5'), "555");
        assert_eq!(collect_chars(3, false, || '5'), "555");
    }

    #[test]
    fn test_sequential_single_sweeps() {
        let mut sampler = SequentialCodepageSampler::new();
        sampler.begin_string();
        let first: Vec<char> = (0..3).map(|_| sampler.single(false)).collect();
        assert_eq!(first, vec!['1', '2', '3']);

        sampler.begin_string();
        assert_eq!(sampler.single(false), '2');
    }

    #[test]
    fn test_sequential_single_validated_skips_symbols() {
        let mut sampler = SequentialCodepageSampler::new();
        for _ in 0..500 {
            let c = sampler.single(true);
            assert!(is_letter_or_digit(c), "{c:?}");
            assert!(is_valid_file_name_char(c));
        }
    }

    #[test]
    fn test_sequential_leads_alternate_ranges() {
        let table = ByteRangeTable::default();
        let entry = table.entry_for(LocaleId::Japanese).unwrap();
        let mut sampler = SequentialCodepageSampler::new();
        let leads: Vec<u8> = (0..4).map(|_| sampler.next_lead(entry)).collect();
        assert_eq!(leads, vec![0xE0, 0x9E, 0xE1, 0x9D]);
    }

    #[test]
    fn test_sequential_leads_stay_in_range() {
        let table = ByteRangeTable::default();
        let entry = table.entry_for(LocaleId::Korean).unwrap();
        let mut sampler = SequentialCodepageSampler::new();
        for _ in 0..1000 {
            let lead = sampler.next_lead(entry);
            assert!((entry.lead_start..entry.lead_end).contains(&lead));
        }
    }

    #[test]
    fn test_sequential_string_no_leading_digit() {
        let context = context(LocaleId::English);
        let mut rng = StdRng::seed_from_u64(42);
        let mut sampler = SequentialCodepageSampler::new();
        let s = sampler.string(&context, &mut rng, 12, false, true);
        assert_eq!(s.chars().count(), 12);
        assert!(!s.chars().next().unwrap().is_numeric());
    }

    #[test]
    fn test_sequential_string_double_byte() {
        let context = context(LocaleId::ChineseSimplified);
        let mut rng = StdRng::seed_from_u64(42);
        let mut sampler = SequentialCodepageSampler::new();
        let s = sampler.string(&context, &mut rng, 30, true, false);
        assert_eq!(s.chars().count(), 30);
        assert!(s.chars().all(is_letter_or_digit));
    }
}
