//! Where bundle text comes from.
//!
//! A [`BundleSource`] turns a [`LocaleId`] into the raw text of that locale's
//! bundle. Three sources are provided:
//!
//! - [`EmbeddedBundles`] - bundles compiled into the binary
//! - [`DirectoryBundles`] - `<Name>_Text.txt` files read from a directory on every load
//! - [`InMemoryBundles`] - an explicit map, optionally described by a YAML manifest
//!
//! ## Manifest format
//!
//! ```yaml
//! bundles:
//!   English:
//!     file: bundles/English_Text.txt
//!   Japanese:
//!     text: |
//!       INTERESTING_CHARS
//!       ...
//! ```
//!
//! Relative `file` paths are resolved against the manifest's directory.

use crate::error::DataError;
use crate::locale::LocaleId;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Provider of raw bundle text, keyed by locale.
pub trait BundleSource: Send + Sync {
    /// Read the full bundle text for `locale`.
    fn load_bundle(&self, locale: LocaleId) -> Result<String, DataError>;

    /// Locales this source can currently serve.
    fn available_locales(&self) -> Vec<LocaleId> {
        LocaleId::ALL
            .into_iter()
            .filter(|locale| self.load_bundle(*locale).is_ok())
            .collect()
    }
}

/// Bundles compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedBundles;

impl EmbeddedBundles {
    fn text(locale: LocaleId) -> Option<&'static str> {
        match locale {
            LocaleId::English => Some(include_str!("../data/English_Text.txt")),
            LocaleId::German => Some(include_str!("../data/German_Text.txt")),
            LocaleId::Japanese => Some(include_str!("../data/Japanese_Text.txt")),
            LocaleId::Korean => Some(include_str!("../data/Korean_Text.txt")),
            LocaleId::ChineseSimplified => Some(include_str!("../data/ChineseSimplified_Text.txt")),
            LocaleId::Russian => Some(include_str!("../data/Russian_Text.txt")),
            _ => None,
        }
    }
}

impl BundleSource for EmbeddedBundles {
    fn load_bundle(&self, locale: LocaleId) -> Result<String, DataError> {
        Self::text(locale)
            .map(str::to_string)
            .ok_or_else(|| DataError::ResourceLoad {
                locale,
                reason: "no embedded bundle for this locale".to_string(),
            })
    }

    fn available_locales(&self) -> Vec<LocaleId> {
        LocaleId::ALL
            .into_iter()
            .filter(|locale| Self::text(*locale).is_some())
            .collect()
    }
}

/// Bundles stored as `<dir>/<Name>_Text.txt`.
///
/// Files are read on every load; nothing is cached.
#[derive(Debug, Clone)]
pub struct DirectoryBundles {
    root: PathBuf,
}

impl DirectoryBundles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the bundle file for `locale`.
    pub fn bundle_path(&self, locale: LocaleId) -> PathBuf {
        self.root.join(format!("{}.txt", locale.resource_key()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BundleSource for DirectoryBundles {
    fn load_bundle(&self, locale: LocaleId) -> Result<String, DataError> {
        let path = self.bundle_path(locale);
        fs::read_to_string(&path).map_err(|e| DataError::ResourceLoad {
            locale,
            reason: format!("{}: {e}", path.display()),
        })
    }

    fn available_locales(&self) -> Vec<LocaleId> {
        LocaleId::ALL
            .into_iter()
            .filter(|locale| self.bundle_path(*locale).is_file())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestEntry {
    Inline { text: String },
    File { file: PathBuf },
}

#[derive(Debug, Deserialize)]
struct Manifest {
    bundles: HashMap<LocaleId, ManifestEntry>,
}

/// Bundles held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBundles {
    bundles: HashMap<LocaleId, String>,
}

impl InMemoryBundles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the bundle for `locale`.
    pub fn with_bundle(mut self, locale: LocaleId, text: impl Into<String>) -> Self {
        self.insert(locale, text);
        self
    }

    pub fn insert(&mut self, locale: LocaleId, text: impl Into<String>) {
        self.bundles.insert(locale, text.into());
    }

    /// Load a manifest from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_manifest(&content, base)
    }

    /// Parse a manifest from a YAML string. Relative paths resolve against
    /// the current directory.
    pub fn from_yaml(yaml: &str) -> Result<Self, DataError> {
        Self::from_manifest(yaml, Path::new("."))
    }

    fn from_manifest(yaml: &str, base: &Path) -> Result<Self, DataError> {
        let manifest: Manifest = serde_yaml::from_str(yaml)?;
        let mut bundles = HashMap::with_capacity(manifest.bundles.len());
        for (locale, entry) in manifest.bundles {
            let text = match entry {
                ManifestEntry::Inline { text } => text,
                ManifestEntry::File { file } => {
                    let path = if file.is_absolute() {
                        file
                    } else {
                        base.join(file)
                    };
                    fs::read_to_string(&path).map_err(|e| DataError::ResourceLoad {
                        locale,
                        reason: format!("{}: {e}", path.display()),
                    })?
                }
            };
            bundles.insert(locale, text);
        }
        Ok(Self { bundles })
    }
}

impl BundleSource for InMemoryBundles {
    fn load_bundle(&self, locale: LocaleId) -> Result<String, DataError> {
        self.bundles
            .get(&locale)
            .cloned()
            .ok_or_else(|| DataError::ResourceLoad {
                locale,
                reason: "bundle not registered".to_string(),
            })
    }

    fn available_locales(&self) -> Vec<LocaleId> {
        let mut locales: Vec<LocaleId> = self.bundles.keys().copied().collect();
        locales.sort();
        locales
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{extract_section, Section};
    use tempfile::TempDir;

    #[test]
    fn test_embedded_bundles_have_every_section() {
        for locale in EmbeddedBundles.available_locales() {
            let text = EmbeddedBundles.load_bundle(locale).unwrap();
            for section in Section::ALL {
                assert!(
                    extract_section(&text, section).is_ok(),
                    "{locale} is missing {section}"
                );
            }
        }
    }

    #[test]
    fn test_embedded_locales() {
        assert_eq!(
            EmbeddedBundles.available_locales(),
            vec![
                LocaleId::English,
                LocaleId::Japanese,
                LocaleId::German,
                LocaleId::Russian,
                LocaleId::ChineseSimplified,
                LocaleId::Korean,
            ]
        );
    }

    #[test]
    fn test_embedded_missing_locale() {
        let err = EmbeddedBundles.load_bundle(LocaleId::Thai).unwrap_err();
        assert!(matches!(
            err,
            DataError::ResourceLoad {
                locale: LocaleId::Thai,
                ..
            }
        ));
    }

    #[test]
    fn test_directory_bundles_reread_files() {
        let dir = TempDir::new().unwrap();
        let source = DirectoryBundles::new(dir.path());
        assert!(source.load_bundle(LocaleId::Greek).is_err());

        let path = dir.path().join("Greek_Text.txt");
        fs::write(&path, "first").unwrap();
        assert_eq!(source.load_bundle(LocaleId::Greek).unwrap(), "first");

        fs::write(&path, "second").unwrap();
        assert_eq!(source.load_bundle(LocaleId::Greek).unwrap(), "second");
        assert_eq!(source.available_locales(), vec![LocaleId::Greek]);
    }

    #[test]
    fn test_manifest_inline_and_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("de.txt"), "german text").unwrap();
        let manifest_path = dir.path().join("bundles.yaml");
        fs::write(
            &manifest_path,
            "bundles:\n  German:\n    file: de.txt\n  '0x411':\n    text: japanese text\n",
        )
        .unwrap();

        let source = InMemoryBundles::from_file(&manifest_path).unwrap();
        assert_eq!(source.load_bundle(LocaleId::German).unwrap(), "german text");
        assert_eq!(source.load_bundle(LocaleId::Japanese).unwrap(), "japanese text");
        assert_eq!(
            source.available_locales(),
            vec![LocaleId::Japanese, LocaleId::German]
        );
    }

    #[test]
    fn test_manifest_missing_file() {
        let result = InMemoryBundles::from_yaml("bundles:\n  Polish:\n    file: /nonexistent/pl.txt\n");
        assert!(matches!(
            result,
            Err(DataError::ResourceLoad {
                locale: LocaleId::Polish,
                ..
            })
        ));
    }

    #[test]
    fn test_manifest_unknown_locale() {
        let result = InMemoryBundles::from_yaml("bundles:\n  Klingon:\n    text: x\n");
        assert!(matches!(result, Err(DataError::YamlError(_))));
    }
}
