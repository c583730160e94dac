//! Lead-byte ranges of legacy double-byte codepages.

use crate::locale::LocaleId;

/// Character width of a locale's legacy codepage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharWidth {
    /// One byte per character
    Single,
    /// Lead byte + trail byte
    Double,
}

/// Valid lead-byte ranges for one locale.
///
/// Ranges are half-open on the upper end. `lead_start2`/`lead_end2` describe an
/// optional second range; both are zero when it is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRangeEntry {
    pub locale: LocaleId,
    pub lead_start: u8,
    pub lead_end: u8,
    pub lead_start2: u8,
    pub lead_end2: u8,
    pub width: CharWidth,
}

impl ByteRangeEntry {
    /// Second lead-byte range, if the codepage has one.
    pub fn second_range(&self) -> Option<(u8, u8)> {
        (self.lead_start2 != 0 && self.lead_end2 != 0).then_some((self.lead_start2, self.lead_end2))
    }
}

/// Read-only lookup table of [`ByteRangeEntry`] rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteRangeTable {
    entries: Vec<ByteRangeEntry>,
}

impl Default for ByteRangeTable {
    /// Japanese, Traditional Chinese, Simplified Chinese and Korean.
    fn default() -> Self {
        Self::new(vec![
            ByteRangeEntry {
                locale: LocaleId::Japanese,
                lead_start: 0x81,
                lead_end: 0x9F,
                lead_start2: 0xE0,
                lead_end2: 0xFC,
                width: CharWidth::Double,
            },
            ByteRangeEntry {
                locale: LocaleId::ChineseTraditional,
                lead_start: 0xA1,
                lead_end: 0xF9,
                lead_start2: 0,
                lead_end2: 0,
                width: CharWidth::Double,
            },
            ByteRangeEntry {
                locale: LocaleId::ChineseSimplified,
                lead_start: 0xA1,
                lead_end: 0xF7,
                lead_start2: 0,
                lead_end2: 0,
                width: CharWidth::Double,
            },
            ByteRangeEntry {
                locale: LocaleId::Korean,
                lead_start: 0x81,
                lead_end: 0xFD,
                lead_start2: 0,
                lead_end2: 0,
                width: CharWidth::Double,
            },
        ])
    }
}

impl ByteRangeTable {
    /// Build a table from explicit rows.
    pub fn new(entries: Vec<ByteRangeEntry>) -> Self {
        Self { entries }
    }

    /// A table without double-byte rows; every locale synthesizes single bytes.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Row index for `locale`.
    pub fn index_for(&self, locale: LocaleId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.locale == locale)
    }

    /// Row for `locale`.
    pub fn entry_for(&self, locale: LocaleId) -> Option<&ByteRangeEntry> {
        self.index_for(locale).map(|index| &self.entries[index])
    }

    /// All rows.
    pub fn entries(&self) -> &[ByteRangeEntry] {
        &self.entries
    }
}
