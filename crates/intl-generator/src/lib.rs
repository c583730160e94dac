//! Localized random string generator for internationalization testing.
//!
//! This crate provides [`IntlStrings`], which produces pseudo-random,
//! locale-specific strings from per-locale bundles. Every draw comes from a
//! seeded RNG so runs are reproducible with the same seed, source and locale.
//!
//! # Architecture
//!
//! ```text
//! BundleSource (embedded / directory / manifest)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │     IntlStrings      │
//! │                      │
//! │  - active context    │
//! │  - rng (StdRng)      │
//! │  - codepage sweep    │
//! └──────────┬───────────┘
//!            │ &LocaleContext, &mut StdRng
//!            ▼
//!     generators::* (text, interleave, codepage, filename, ...)
//! ```
//!
//! # Example
//!
//! ```rust
//! use intl_core::{EmbeddedBundles, LocaleId};
//! use intl_generator::IntlStrings;
//! use std::sync::Arc;
//!
//! let mut strings =
//!     IntlStrings::new(Arc::new(EmbeddedBundles), Some(LocaleId::Japanese), Some(42)).unwrap();
//! let text = strings.get_string(16, true, true).unwrap();
//! assert_eq!(text.chars().count(), 16);
//!
//! let name = strings.get_valid_file_name_for_locale(8, false, LocaleId::German).unwrap();
//! assert!(name.chars().count() <= 8);
//! assert_eq!(strings.active_locale(), LocaleId::Japanese);
//! ```
//!
//! # Generators
//!
//! - `text` - Bundle text with one CHARS_TO_INCLUDE_IN_STRING entry spliced in
//! - `interleave` - Strings dense in interesting or problematic characters
//! - `round_trip` - Characters lost when converted to the ANSI codepage
//! - `invalid_ansi` - Characters with no ANSI codepage mapping
//! - `codepage` - Random and sequential characters of the ANSI codepage
//! - `filename` - Valid and invalid file names, directory paths
//! - `identifier` - Identifier-safe strings
//! - `datetime` - Date/time samples and format strings
//! - `encoding` - UTF-16LE, UTF-8 and legacy codepage bytes

pub mod config;
pub mod error;
pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use config::{ConfigError, GeneratorConfig, DEFAULT_STRING_LENGTH};
pub use error::GeneratorError;
pub use generator::IntlStrings;
pub use generators::codepage::{RandomCodepageSampler, SequentialCodepageSampler};
pub use generators::encoding::CodeType;
pub use generators::text::StringOptions;
