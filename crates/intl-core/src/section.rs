//! Tag-delimited sections of a sample bundle.
//!
//! A bundle is plain text in which each of the 11 [`Section`] tags occupies a
//! line of its own, always in the same order:
//!
//! ```text
//! INTERESTING_CHARS
//! <entries>
//! PROBLEMATIC_CHARS
//! <entries>
//! ...
//! CHARS_TO_INCLUDE_IN_STRING
//! <entries until end of text>
//! ```
//!
//! A section's body runs from the line after its tag to the line break that
//! precedes the tag of the next section in this order. The last section runs
//! to the end of the text. Both LF and CRLF line endings are accepted.

use crate::error::ExtractionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the tagged regions of a bundle, in bundle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    /// Characters that commonly exercise text handling (top-N list)
    InterestingChars,
    /// Characters known to break naive implementations
    ProblematicChars,
    /// Characters invalid in this locale
    InvalidChars,
    /// General sample text
    Text,
    /// Valid date strings in locale format
    ValidDateStrings,
    /// Valid date/time format patterns
    ValidFormats,
    /// Date/time values that parse in this locale
    ValidDateTimes,
    /// Characters that do not survive Unicode -> ANSI -> Unicode
    NotRoundTrippable,
    /// Characters grouped by Unicode category
    UnicodeCategory,
    /// Unicode characters with no mapping in the legacy codepage
    RandomInvalidAnsiChar,
    /// Entries spliced into every general string
    CharsToIncludeInString,
}

impl Section {
    /// All sections in bundle order.
    pub const ALL: [Section; 11] = [
        Section::InterestingChars,
        Section::ProblematicChars,
        Section::InvalidChars,
        Section::Text,
        Section::ValidDateStrings,
        Section::ValidFormats,
        Section::ValidDateTimes,
        Section::NotRoundTrippable,
        Section::UnicodeCategory,
        Section::RandomInvalidAnsiChar,
        Section::CharsToIncludeInString,
    ];

    /// Tag line that opens this section.
    pub const fn tag(self) -> &'static str {
        match self {
            Section::InterestingChars => "INTERESTING_CHARS",
            Section::ProblematicChars => "PROBLEMATIC_CHARS",
            Section::InvalidChars => "INVALID_CHARS",
            Section::Text => "TEXT",
            Section::ValidDateStrings => "VALIDDATESTRINGS",
            Section::ValidFormats => "VALIDFORMATS",
            Section::ValidDateTimes => "VALIDDATETIMES",
            Section::NotRoundTrippable => "NOT_ROUNDTRIPPABLE",
            Section::UnicodeCategory => "UNICODE_CATEGORY",
            Section::RandomInvalidAnsiChar => "RANDOM_INVALID_ANSI_CHAR",
            Section::CharsToIncludeInString => "CHARS_TO_INCLUDE_IN_STRING",
        }
    }

    /// The section whose tag closes this one, `None` for the last section.
    pub const fn next(self) -> Option<Section> {
        match self {
            Section::InterestingChars => Some(Section::ProblematicChars),
            Section::ProblematicChars => Some(Section::InvalidChars),
            Section::InvalidChars => Some(Section::Text),
            Section::Text => Some(Section::ValidDateStrings),
            Section::ValidDateStrings => Some(Section::ValidFormats),
            Section::ValidFormats => Some(Section::ValidDateTimes),
            Section::ValidDateTimes => Some(Section::NotRoundTrippable),
            Section::NotRoundTrippable => Some(Section::UnicodeCategory),
            Section::UnicodeCategory => Some(Section::RandomInvalidAnsiChar),
            Section::RandomInvalidAnsiChar => Some(Section::CharsToIncludeInString),
            Section::CharsToIncludeInString => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Byte span of a tag line, including its line break.
struct TagLine {
    start: usize,
    end: usize,
}

fn find_tag_line(text: &str, tag: &str, from: usize) -> Option<TagLine> {
    let mut offset = from;
    for line in text[from..].split_inclusive('\n') {
        if line.trim() == tag {
            return Some(TagLine {
                start: offset,
                end: offset + line.len(),
            });
        }
        offset += line.len();
    }
    None
}

fn strip_trailing_line_break(body: &str) -> &str {
    body.strip_suffix("\r\n")
        .or_else(|| body.strip_suffix('\n'))
        .unwrap_or(body)
}

/// Slice the body of `section` out of `text`.
pub fn extract_section(text: &str, section: Section) -> Result<&str, ExtractionError> {
    let tag = find_tag_line(text, section.tag(), 0).ok_or(ExtractionError::TagNotFound(section))?;

    let Some(next) = section.next() else {
        return Ok(&text[tag.end..]);
    };

    let closing = find_tag_line(text, next.tag(), tag.end)
        .ok_or(ExtractionError::SuccessorNotFound { section, next })?;

    Ok(strip_trailing_line_break(&text[tag.end..closing.start]))
}

/// Remove every carriage return and line feed.
pub fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

/// Entries of a section: its non-blank lines, without line terminators.
pub fn section_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}
