//! Error types for locale and bundle operations.

use crate::locale::LocaleId;
use crate::section::Section;

/// Error type for locale lookup and bundle loading.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Locale id is not one of the supported locales
    #[error("Requested LCID is not supported: 0x{0:04X}")]
    UnsupportedLocale(u32),

    /// Locale name could not be recognized
    #[error("Unknown locale name: {0}")]
    UnknownLocaleName(String),

    /// Bundle for a supported locale is missing or unreadable
    #[error("Failed to load resource bundle {} for {locale}: {reason}", locale.resource_key())]
    ResourceLoad {
        /// Locale whose bundle was requested
        locale: LocaleId,
        /// Underlying cause
        reason: String,
    },

    /// Error reading a manifest or bundle file
    #[error("Failed to read bundle manifest: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing a YAML manifest
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Error type for section extraction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    /// The section's tag line does not occur in the bundle
    #[error("Section tag {0} not found in bundle")]
    TagNotFound(Section),

    /// The section was found but the tag of the following section was not
    #[error("Section {section} is not followed by {next}")]
    SuccessorNotFound {
        /// Section being extracted
        section: Section,
        /// Tag expected to close it
        next: Section,
    },
}
