//! Locale-aware string generator.

use crate::config::GeneratorConfig;
use crate::generators::codepage::{RandomCodepageSampler, SequentialCodepageSampler};
use crate::generators::datetime::{date_time_format, formatted_date_time_string, interesting_date_time};
use crate::generators::encoding::{encode, CodeType};
use crate::generators::filename::{invalid_file_name, random_directory_name, valid_file_name};
use crate::generators::identifier::random_identifier;
use crate::generators::interleave::{interleave, problematic_strings};
use crate::generators::invalid_ansi::invalid_ansi_string;
use crate::generators::round_trip::not_round_trippable;
use crate::generators::target_length;
use crate::generators::text::{generate_string, StringOptions};
use crate::GeneratorError;
use chrono::NaiveDateTime;
use intl_core::{
    BundleSource, ByteRangeTable, ExtractionPolicy, LocaleContext, LocaleId, NumberFormat, Section,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed derived from the wall clock, used when none is configured.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// Generator of pseudo-random, locale-specific test strings.
///
/// One locale is active at a time; its bundle is loaded from the
/// [`BundleSource`] on construction and replaced by
/// [`verify_and_load`](Self::verify_and_load). The `*_for_locale` and
/// codepage methods work on a temporary context for the requested locale and
/// never change the active one.
///
/// Every draw comes from a single [`StdRng`], so two generators built with the
/// same seed, source and locale produce the same sequence of outputs.
pub struct IntlStrings {
    /// Where bundles are loaded from
    source: Arc<dyn BundleSource>,
    /// Double-byte lead ranges
    ranges: ByteRangeTable,
    policy: ExtractionPolicy,
    /// Length of each string from `get_problematic_strings`
    default_string_length: usize,
    /// Active locale
    context: LocaleContext,
    seed: u64,
    rng: StdRng,
    sequential: SequentialCodepageSampler,
}

impl IntlStrings {
    /// Create a generator for `locale` (the system locale when `None`) seeded
    /// with `seed` (time based when `None`).
    pub fn new(
        source: Arc<dyn BundleSource>,
        locale: Option<LocaleId>,
        seed: Option<u64>,
    ) -> Result<Self, GeneratorError> {
        let config = GeneratorConfig {
            seed,
            locale,
            ..GeneratorConfig::default()
        };
        Self::with_config(source, &config)
    }

    /// Create a generator from a loaded [`GeneratorConfig`].
    pub fn with_config(
        source: Arc<dyn BundleSource>,
        config: &GeneratorConfig,
    ) -> Result<Self, GeneratorError> {
        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed = time_seed();
                tracing::info!("No seed configured; using seed {seed}");
                seed
            }
        };
        let locale = config.locale.unwrap_or_else(LocaleId::system_default);
        let ranges = ByteRangeTable::default();
        let context = LocaleContext::load(source.as_ref(), locale, &ranges)?
            .with_policy(config.extraction_policy);
        tracing::debug!("Generator ready for {locale} with seed {seed}");

        Ok(Self {
            source,
            ranges,
            policy: config.extraction_policy,
            default_string_length: config.default_string_length,
            context,
            seed,
            rng: StdRng::seed_from_u64(seed),
            sequential: SequentialCodepageSampler::new(),
        })
    }

    /// Replace the byte-range table used for double-byte synthesis.
    pub fn with_byte_ranges(mut self, ranges: ByteRangeTable) -> Self {
        self.context = self.context.with_byte_ranges(&ranges);
        self.ranges = ranges;
        self
    }

    /// Make `locale` the active locale.
    ///
    /// Does nothing when it already is. On failure the previous locale stays
    /// active.
    pub fn verify_and_load(&mut self, locale: LocaleId) -> Result<(), GeneratorError> {
        if locale == self.context.locale() {
            return Ok(());
        }
        let context = self.load_context(locale)?;
        tracing::debug!("Switching active locale {} -> {locale}", self.context.locale());
        self.context = context;
        Ok(())
    }

    /// [`verify_and_load`](Self::verify_and_load) for a raw LCID.
    pub fn verify_and_load_lcid(&mut self, lcid: u32) -> Result<(), GeneratorError> {
        let locale = LocaleId::from_lcid(lcid)?;
        self.verify_and_load(locale)
    }

    fn load_context(&self, locale: LocaleId) -> Result<LocaleContext, GeneratorError> {
        Ok(LocaleContext::load(self.source.as_ref(), locale, &self.ranges)?.with_policy(self.policy))
    }

    /// Context for a locale-scoped call.
    fn scoped(&self, locale: LocaleId) -> Result<LocaleContext, GeneratorError> {
        if locale == self.context.locale() {
            Ok(self.context.clone())
        } else {
            self.load_context(locale)
        }
    }

    /// Context for a codepage call. These read no bundle section, so a
    /// locale without a bundle still gets its number format and byte-range
    /// row.
    fn codepage_context(&self, locale: LocaleId) -> LocaleContext {
        self.scoped(locale).unwrap_or_else(|e| {
            tracing::debug!("No bundle for {locale} ({e}), sampling its codepage without one");
            LocaleContext::from_text(locale, "", &self.ranges).with_policy(self.policy)
        })
    }

    pub fn active_locale(&self) -> LocaleId {
        self.context.locale()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn context(&self) -> &LocaleContext {
        &self.context
    }

    pub fn default_string_length(&self) -> usize {
        self.default_string_length
    }

    /// Number formatting of the active locale.
    pub fn number_format(&self) -> &NumberFormat {
        self.context.number_format()
    }

    pub fn currency_decimal_digits(&self) -> u32 {
        self.number_format().currency_decimal_digits
    }

    pub fn currency_decimal_separator(&self) -> &str {
        &self.number_format().currency_decimal_separator
    }

    pub fn currency_group_separator(&self) -> &str {
        &self.number_format().currency_group_separator
    }

    pub fn currency_group_sizes(&self) -> &[u32] {
        &self.number_format().currency_group_sizes
    }

    pub fn currency_symbol(&self) -> &str {
        &self.number_format().currency_symbol
    }

    pub fn number_decimal_digits(&self) -> u32 {
        self.number_format().number_decimal_digits
    }

    pub fn number_decimal_separator(&self) -> &str {
        &self.number_format().number_decimal_separator
    }

    pub fn number_group_separator(&self) -> &str {
        &self.number_format().number_group_separator
    }

    pub fn number_group_sizes(&self) -> &[u32] {
        &self.number_format().number_group_sizes
    }

    // General strings

    /// Text from the active bundle with one CHARS_TO_INCLUDE_IN_STRING entry
    /// spliced in.
    pub fn get_string(
        &mut self,
        max_len: usize,
        exact: bool,
        validate: bool,
    ) -> Result<String, GeneratorError> {
        generate_string(&self.context, &mut self.rng, max_len, StringOptions::new(exact, validate))
    }

    /// Like [`get_string`](Self::get_string), never starting with a digit.
    pub fn get_string_no_lead_num(
        &mut self,
        max_len: usize,
        exact: bool,
        validate: bool,
    ) -> Result<String, GeneratorError> {
        let options = StringOptions::new(exact, validate).no_leading_digit(true);
        generate_string(&self.context, &mut self.rng, max_len, options)
    }

    pub fn get_string_for_locale(
        &mut self,
        max_len: usize,
        exact: bool,
        validate: bool,
        locale: LocaleId,
    ) -> Result<String, GeneratorError> {
        let context = self.scoped(locale)?;
        generate_string(&context, &mut self.rng, max_len, StringOptions::new(exact, validate))
    }

    /// A string containing every INTERESTING_CHARS entry, or a window of
    /// them when `max_len` is too short to hold them all.
    pub fn get_top20_string(
        &mut self,
        max_len: usize,
        exact: bool,
        validate: bool,
    ) -> Result<String, GeneratorError> {
        let len = target_length(&mut self.rng, max_len, exact);
        interleave(&self.context, &mut self.rng, Section::InterestingChars, len, validate)
    }

    pub fn get_top20_string_for_locale(
        &mut self,
        max_len: usize,
        exact: bool,
        validate: bool,
        locale: LocaleId,
    ) -> Result<String, GeneratorError> {
        let context = self.scoped(locale)?;
        let len = target_length(&mut self.rng, max_len, exact);
        interleave(&context, &mut self.rng, Section::InterestingChars, len, validate)
    }

    /// One string per PROBLEMATIC_CHARS entry of the active bundle.
    pub fn get_problematic_strings(&mut self) -> Result<Vec<String>, GeneratorError> {
        problematic_strings(&self.context, &mut self.rng, self.default_string_length)
    }

    /// Like [`get_top20_string`](Self::get_top20_string) with PROBLEMATIC_CHARS.
    pub fn get_prob_char_string(
        &mut self,
        max_len: usize,
        exact: bool,
        validate: bool,
    ) -> Result<String, GeneratorError> {
        let len = target_length(&mut self.rng, max_len, exact);
        interleave(&self.context, &mut self.rng, Section::ProblematicChars, len, validate)
    }

    /// Characters that do not survive a round trip through the active
    /// locale's ANSI codepage.
    pub fn get_prob_urtc_string(
        &mut self,
        max_len: usize,
        exact: bool,
        validate: bool,
    ) -> Result<String, GeneratorError> {
        let len = target_length(&mut self.rng, max_len, exact);
        not_round_trippable(&self.context, &mut self.rng, len, validate)
    }

    // Codepage strings

    /// Random characters of `locale`'s ANSI codepage.
    pub fn get_rand_str_lcid(
        &mut self,
        max_len: usize,
        exact: bool,
        validate: bool,
        locale: LocaleId,
        no_leading_digit: bool,
    ) -> Result<String, GeneratorError> {
        let context = self.codepage_context(locale);
        let len = target_length(&mut self.rng, max_len, exact);
        Ok(RandomCodepageSampler.string(&context, &mut self.rng, len, validate, no_leading_digit))
    }

    /// Characters walking `locale`'s ANSI codepage; the sweep continues
    /// across calls.
    pub fn get_str_lcid(
        &mut self,
        max_len: usize,
        exact: bool,
        validate: bool,
        locale: LocaleId,
        no_leading_digit: bool,
    ) -> Result<String, GeneratorError> {
        let context = self.codepage_context(locale);
        let len = target_length(&mut self.rng, max_len, exact);
        Ok(self
            .sequential
            .string(&context, &mut self.rng, len, validate, no_leading_digit))
    }

    pub fn get_prob_char_str_lcid(
        &mut self,
        max_len: usize,
        exact: bool,
        validate: bool,
        locale: LocaleId,
    ) -> Result<String, GeneratorError> {
        let context = self.scoped(locale)?;
        let len = target_length(&mut self.rng, max_len, exact);
        interleave(&context, &mut self.rng, Section::ProblematicChars, len, validate)
    }

    pub fn get_prob_urtc_str_lcid(
        &mut self,
        max_len: usize,
        exact: bool,
        validate: bool,
        locale: LocaleId,
    ) -> Result<String, GeneratorError> {
        let context = self.scoped(locale)?;
        let len = target_length(&mut self.rng, max_len, exact);
        not_round_trippable(&context, &mut self.rng, len, validate)
    }

    // Encoded output

    /// A general string for `locale`, encoded as `code_type`.
    ///
    /// `max_len == 0` yields no bytes. [`CodeType::Utf7`] is rejected.
    pub fn get_uni_str_rand_ansi_bytes(
        &mut self,
        max_len: usize,
        exact: bool,
        validate: bool,
        code_type: CodeType,
        locale: LocaleId,
    ) -> Result<Vec<u8>, GeneratorError> {
        if max_len == 0 {
            return Ok(Vec::new());
        }
        let context = self.scoped(locale)?;
        let text =
            generate_string(&context, &mut self.rng, max_len, StringOptions::new(exact, validate))?;
        encode(&text, code_type, locale)
    }

    /// Unicode characters with no mapping in `locale`'s ANSI codepage.
    pub fn get_uni_str_invalid_ansi(
        &mut self,
        max_len: usize,
        exact: bool,
        locale: LocaleId,
    ) -> Result<String, GeneratorError> {
        let context = self.scoped(locale)?;
        let len = target_length(&mut self.rng, max_len, exact);
        invalid_ansi_string(&context, &mut self.rng, len)
    }

    /// Unicode characters that all map into `locale`'s ANSI codepage.
    ///
    /// Like [`get_rand_str_lcid`](Self::get_rand_str_lcid), this works for
    /// locales without a bundle.
    pub fn get_uni_str_mapped_ansi(
        &mut self,
        max_len: usize,
        exact: bool,
        locale: LocaleId,
        no_leading_digit: bool,
    ) -> Result<String, GeneratorError> {
        self.get_rand_str_lcid(max_len, exact, false, locale, no_leading_digit)
    }

    // Names

    pub fn get_valid_file_name(&mut self, max_len: usize, exact: bool) -> Result<String, GeneratorError> {
        valid_file_name(&self.context, &mut self.rng, max_len, exact)
    }

    pub fn get_valid_file_name_for_locale(
        &mut self,
        max_len: usize,
        exact: bool,
        locale: LocaleId,
    ) -> Result<String, GeneratorError> {
        let context = self.scoped(locale)?;
        valid_file_name(&context, &mut self.rng, max_len, exact)
    }

    /// A file name containing every reserved character.
    pub fn get_invalid_file_name(&mut self, max_len: usize, exact: bool) -> Result<String, GeneratorError> {
        invalid_file_name(&self.context, &mut self.rng, max_len, exact)
    }

    pub fn get_invalid_file_name_for_locale(
        &mut self,
        max_len: usize,
        exact: bool,
        locale: LocaleId,
    ) -> Result<String, GeneratorError> {
        let context = self.scoped(locale)?;
        invalid_file_name(&context, &mut self.rng, max_len, exact)
    }

    pub fn get_random_valid_identifier(
        &mut self,
        max_len: usize,
        exact: bool,
    ) -> Result<String, GeneratorError> {
        random_identifier(&self.context, &mut self.rng, max_len, exact)
    }

    pub fn get_random_valid_identifier_for_locale(
        &mut self,
        max_len: usize,
        exact: bool,
        locale: LocaleId,
    ) -> Result<String, GeneratorError> {
        let context = self.scoped(locale)?;
        random_identifier(&context, &mut self.rng, max_len, exact)
    }

    /// `base` extended by `depth` random directory names. Nothing is created
    /// on disk.
    pub fn get_random_directory_name(
        &mut self,
        base: &Path,
        depth: usize,
    ) -> Result<PathBuf, GeneratorError> {
        random_directory_name(&self.context, &mut self.rng, base, depth)
    }

    // Dates

    /// A parsed VALIDDATETIMES entry of the active locale.
    ///
    /// An empty section is an [`GeneratorError::EmptySection`] error rather
    /// than a fallback to the current time.
    pub fn get_interesting_date_time(&mut self) -> Result<NaiveDateTime, GeneratorError> {
        interesting_date_time(&self.context, &mut self.rng)
    }

    pub fn get_formatted_date_time_strings(&mut self) -> Result<String, GeneratorError> {
        formatted_date_time_string(&self.context, &mut self.rng)
    }

    pub fn get_interesting_date_time_format(&mut self) -> Result<String, GeneratorError> {
        date_time_format(&self.context, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::filename::{is_valid_file_name_char, RESERVED_FILE_NAME_CHARS};
    use intl_core::{DataError, EmbeddedBundles, InMemoryBundles};

    fn generator(locale: LocaleId, seed: u64) -> IntlStrings {
        IntlStrings::new(Arc::new(EmbeddedBundles), Some(locale), Some(seed)).unwrap()
    }

    #[test]
    fn test_same_seed_same_strings() {
        let mut a = generator(LocaleId::English, 42);
        let mut b = generator(LocaleId::English, 42);
        let first = a.get_string(10, true, true).unwrap();
        assert_eq!(first.chars().count(), 10);
        assert_eq!(first, b.get_string(10, true, true).unwrap());
        assert_eq!(
            a.get_top20_string(40, false, true).unwrap(),
            b.get_top20_string(40, false, true).unwrap()
        );
    }

    #[test]
    fn test_valid_file_names() {
        let mut generator = generator(LocaleId::English, 42);
        for _ in 0..50 {
            let name = generator.get_valid_file_name(5, false).unwrap();
            assert!(name.chars().count() <= 5);
            assert!(name.chars().all(is_valid_file_name_char), "{name}");
        }
    }

    #[test]
    fn test_invalid_file_names() {
        let mut generator = generator(LocaleId::English, 42);
        let name = generator.get_invalid_file_name(20, true).unwrap();
        assert_eq!(name.chars().count(), 20);
        for reserved in RESERVED_FILE_NAME_CHARS {
            assert!(name.contains(reserved));
        }
    }

    #[test]
    fn test_locale_scoped_calls_keep_active_locale() {
        let mut generator = generator(LocaleId::English, 42);
        let english_text = generator.context().bundle().to_string();

        generator
            .get_string_for_locale(10, true, true, LocaleId::Japanese)
            .unwrap();
        generator
            .get_rand_str_lcid(10, true, true, LocaleId::Korean, false)
            .unwrap();
        generator
            .get_random_valid_identifier_for_locale(8, true, LocaleId::German)
            .unwrap();

        assert_eq!(generator.active_locale(), LocaleId::English);
        assert_eq!(generator.context().bundle(), english_text);
        assert_eq!(generator.currency_symbol(), "$");
    }

    #[test]
    fn test_unsupported_lcid_keeps_context() {
        let mut generator = generator(LocaleId::English, 42);
        let err = generator.verify_and_load_lcid(0x9999).unwrap_err();
        assert_eq!(err.unsupported_lcid(), Some(0x9999));
        assert_eq!(generator.active_locale(), LocaleId::English);
        assert!(generator.get_string(5, true, true).is_ok());
    }

    #[test]
    fn test_failed_load_keeps_context() {
        let source = InMemoryBundles::new().with_bundle(
            LocaleId::English,
            EmbeddedBundles.load_bundle(LocaleId::English).unwrap(),
        );
        let mut generator = IntlStrings::new(Arc::new(source), Some(LocaleId::English), Some(1)).unwrap();
        let err = generator.verify_and_load(LocaleId::Czech).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::Data(DataError::ResourceLoad { locale: LocaleId::Czech, .. })
        ));
        assert_eq!(generator.active_locale(), LocaleId::English);
    }

    #[test]
    fn test_verify_and_load_switches_number_format() {
        let mut generator = generator(LocaleId::English, 42);
        generator.verify_and_load_lcid(0x407).unwrap();
        assert_eq!(generator.active_locale(), LocaleId::German);
        assert_eq!(generator.number_decimal_separator(), ",");
        assert_eq!(generator.currency_group_sizes(), &[3]);
        generator.verify_and_load(LocaleId::German).unwrap();
        assert_eq!(generator.active_locale(), LocaleId::German);
    }

    #[test]
    fn test_malformed_date_time() {
        let bundle = "VALIDFORMATS\nVALIDDATETIMES\nnot-a-date\nNOT_ROUNDTRIPPABLE\n";
        let source = InMemoryBundles::new().with_bundle(LocaleId::English, bundle);
        let mut generator = IntlStrings::new(Arc::new(source), Some(LocaleId::English), Some(1)).unwrap();
        match generator.get_interesting_date_time() {
            Err(GeneratorError::Format { line }) => assert_eq!(line, "not-a-date"),
            other => panic!("expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_length_is_empty() {
        let mut generator = generator(LocaleId::Japanese, 42);
        assert_eq!(generator.get_string(0, false, true).unwrap(), "");
        assert_eq!(generator.get_top20_string(0, true, true).unwrap(), "");
        assert_eq!(generator.get_prob_urtc_string(0, true, true).unwrap(), "");
        assert_eq!(
            generator
                .get_rand_str_lcid(0, true, true, LocaleId::Japanese, false)
                .unwrap(),
            ""
        );
        assert!(generator
            .get_uni_str_rand_ansi_bytes(0, true, true, CodeType::Utf8, LocaleId::Japanese)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_rand_ansi_bytes() {
        let mut generator = generator(LocaleId::English, 42);
        let bytes = generator
            .get_uni_str_rand_ansi_bytes(12, true, true, CodeType::Unicode, LocaleId::German)
            .unwrap();
        assert_eq!(bytes.len() % 2, 0);
        assert!(matches!(
            generator.get_uni_str_rand_ansi_bytes(12, true, true, CodeType::Utf7, LocaleId::German),
            Err(GeneratorError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn test_problematic_strings_use_default_length() {
        let config = GeneratorConfig {
            seed: Some(3),
            locale: Some(LocaleId::German),
            default_string_length: 12,
            ..GeneratorConfig::default()
        };
        let mut generator = IntlStrings::with_config(Arc::new(EmbeddedBundles), &config).unwrap();
        let entries = generator.context().lines(Section::ProblematicChars).unwrap().len();
        let strings = generator.get_problematic_strings().unwrap();
        assert_eq!(strings.len(), entries);
        assert!(strings.iter().all(|s| s.chars().count() >= 12));
    }

    #[test]
    fn test_mapped_and_invalid_ansi() {
        let mut generator = generator(LocaleId::English, 42);
        let invalid = generator
            .get_uni_str_invalid_ansi(6, true, LocaleId::Japanese)
            .unwrap();
        assert_eq!(invalid.chars().count(), 6);
        assert!(invalid.chars().all(|c| ['侔', '纊', '褜', 'ⅰ'].contains(&c)));

        let mapped = generator
            .get_uni_str_mapped_ansi(8, true, LocaleId::Japanese, true)
            .unwrap();
        assert_eq!(mapped.chars().count(), 8);
    }

    #[test]
    fn test_codepage_strings_without_bundle() {
        let mut generator = generator(LocaleId::English, 42);
        assert!(!EmbeddedBundles.available_locales().contains(&LocaleId::ChineseTraditional));

        let s = generator
            .get_rand_str_lcid(40, true, true, LocaleId::ChineseTraditional, false)
            .unwrap();
        assert_eq!(s.chars().count(), 40);
        let doubles: String = s.chars().filter(|&c| (c as u32) > 0xFF).collect();
        assert!(!doubles.is_empty(), "{s}");
        let (bytes, _, unmappable) = encoding_rs::BIG5.encode(&doubles);
        assert!(!unmappable, "{doubles}");
        assert_eq!(bytes.len(), doubles.chars().count() * 2);
        let (decoded, had_errors) = encoding_rs::BIG5.decode_without_bom_handling(&bytes);
        assert!(!had_errors);
        assert_eq!(decoded, doubles);

        let thai = generator
            .get_str_lcid(12, true, false, LocaleId::Thai, true)
            .unwrap();
        assert_eq!(thai.chars().count(), 12);
        let mapped = generator
            .get_uni_str_mapped_ansi(6, true, LocaleId::Greek, false)
            .unwrap();
        assert_eq!(mapped.chars().count(), 6);
        assert_eq!(generator.active_locale(), LocaleId::English);
    }

    #[test]
    fn test_empty_byte_ranges_fall_back_to_single_bytes() {
        let mut generator = generator(LocaleId::Japanese, 42).with_byte_ranges(ByteRangeTable::empty());
        assert!(generator.context().byte_range().is_none());
        let s = generator
            .get_rand_str_lcid(20, true, false, LocaleId::Japanese, false)
            .unwrap();
        assert!(s.chars().all(|c| (c as u32) < 0x100));
    }
}
