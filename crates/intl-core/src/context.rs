//! Per-locale generation context.

use crate::byte_range::{ByteRangeEntry, ByteRangeTable};
use crate::error::{DataError, ExtractionError};
use crate::locale::LocaleId;
use crate::number_format::NumberFormat;
use crate::section::{extract_section, section_lines, strip_line_breaks, Section};
use crate::source::BundleSource;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What to do when a section cannot be sliced out of a bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionPolicy {
    /// Return the [`ExtractionError`]
    #[default]
    Strict,
    /// Log a warning and treat the section as empty
    Lenient,
}

/// Everything a generator call needs to know about one locale.
///
/// Contexts are immutable and cheap to clone; the bundle text is shared.
#[derive(Debug, Clone)]
pub struct LocaleContext {
    locale: LocaleId,
    bundle: Arc<str>,
    number_format: NumberFormat,
    byte_range: Option<ByteRangeEntry>,
    policy: ExtractionPolicy,
}

impl LocaleContext {
    /// Load the bundle for `locale` from `source` and derive its formats and
    /// byte ranges.
    pub fn load(
        source: &dyn BundleSource,
        locale: LocaleId,
        ranges: &ByteRangeTable,
    ) -> Result<Self, DataError> {
        let bundle = source.load_bundle(locale)?;
        tracing::debug!(
            "Loaded bundle {} ({} bytes)",
            locale.resource_key(),
            bundle.len()
        );
        Ok(Self::from_text(locale, bundle, ranges))
    }

    /// Build a context around bundle text that is already in memory.
    pub fn from_text(locale: LocaleId, bundle: impl Into<Arc<str>>, ranges: &ByteRangeTable) -> Self {
        Self {
            locale,
            bundle: bundle.into(),
            number_format: NumberFormat::for_locale(locale),
            byte_range: ranges.entry_for(locale).copied(),
            policy: ExtractionPolicy::default(),
        }
    }

    /// Re-derive the double-byte row from another table.
    pub fn with_byte_ranges(mut self, ranges: &ByteRangeTable) -> Self {
        self.byte_range = ranges.entry_for(self.locale).copied();
        self
    }

    pub fn with_policy(mut self, policy: ExtractionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn locale(&self) -> LocaleId {
        self.locale
    }

    pub fn bundle(&self) -> &str {
        &self.bundle
    }

    pub fn number_format(&self) -> &NumberFormat {
        &self.number_format
    }

    /// Double-byte lead ranges, `None` for single-byte locales.
    pub fn byte_range(&self) -> Option<&ByteRangeEntry> {
        self.byte_range.as_ref()
    }

    pub fn policy(&self) -> ExtractionPolicy {
        self.policy
    }

    /// Raw body of `section`, subject to the extraction policy.
    pub fn section(&self, section: Section) -> Result<&str, ExtractionError> {
        match extract_section(&self.bundle, section) {
            Ok(body) => Ok(body),
            Err(e) if self.policy == ExtractionPolicy::Lenient => {
                tracing::warn!("{e} in {}; using empty text", self.locale.resource_key());
                Ok("")
            }
            Err(e) => Err(e),
        }
    }

    /// Body of `section` with every line break removed.
    pub fn section_stripped(&self, section: Section) -> Result<String, ExtractionError> {
        self.section(section).map(strip_line_breaks)
    }

    /// Non-blank entries of `section`.
    pub fn lines(&self, section: Section) -> Result<Vec<&str>, ExtractionError> {
        self.section(section).map(section_lines)
    }
}
