//! Core types for the genstrings localized string generator.
//!
//! This crate provides the data side of string generation:
//!
//! - [`LocaleId`] - The closed set of supported locales
//! - [`Section`] - The 11 tagged sections of a sample bundle
//! - [`BundleSource`] - Where bundle text comes from (embedded, directory, in-memory)
//! - [`ByteRangeTable`] - Lead-byte ranges of legacy double-byte codepages
//! - [`NumberFormat`] - Locale-specific numeric formatting descriptors
//! - [`LocaleContext`] - Everything a generator call needs to know about one locale
//!
//! # Architecture
//!
//! ```text
//! intl-core (this crate)
//!    │
//!    ├─── locale        (LocaleId, codepages, date order)
//!    ├─── section       (tag-delimited section extraction)
//!    ├─── source        (BundleSource: embedded / directory / in-memory)
//!    ├─── byte_range    (double-byte lead ranges)
//!    ├─── number_format (per-locale number formatting)
//!    └─── context       (LocaleContext = bundle + formats + ranges)
//!            │
//!            ▼
//!    intl-generator (IntlStrings, composers)
//! ```
//!
//! # Example
//!
//! ```rust
//! use intl_core::{ByteRangeTable, EmbeddedBundles, LocaleContext, LocaleId, Section};
//!
//! let context = LocaleContext::load(
//!     &EmbeddedBundles,
//!     LocaleId::English,
//!     &ByteRangeTable::default(),
//! ).unwrap();
//!
//! let text = context.section(Section::Text).unwrap();
//! assert!(!text.is_empty());
//! ```

pub mod byte_range;
pub mod context;
pub mod error;
pub mod locale;
pub mod number_format;
pub mod section;
pub mod source;

// Re-exports for convenience
pub use byte_range::{ByteRangeEntry, ByteRangeTable, CharWidth};
pub use context::{ExtractionPolicy, LocaleContext};
pub use error::{DataError, ExtractionError};
pub use locale::{DateOrder, LocaleId};
pub use number_format::NumberFormat;
pub use section::{extract_section, section_lines, strip_line_breaks, Section};
pub use source::{BundleSource, DirectoryBundles, EmbeddedBundles, InMemoryBundles};
