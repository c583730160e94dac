//! Error type for string generation.

use intl_core::{DataError, ExtractionError, Section};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Locale validation or bundle loading failed
    #[error(transparent)]
    Data(#[from] DataError),

    /// A section could not be sliced out of the active bundle
    #[error("Section extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    /// A VALIDDATETIMES entry is not a recognizable date/time
    #[error("Unable to parse date/time entry: {line:?}")]
    Format {
        /// The offending bundle line
        line: String,
    },

    /// The section has no entries to choose from
    #[error("Section {0} has no entries")]
    EmptySection(Section),

    /// The requested output encoding cannot be produced
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl GeneratorError {
    /// Raw LCID of an unsupported-locale failure.
    pub fn unsupported_lcid(&self) -> Option<u32> {
        match self {
            GeneratorError::Data(DataError::UnsupportedLocale(lcid)) => Some(*lcid),
            _ => None,
        }
    }
}
