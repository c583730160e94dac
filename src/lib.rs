//! genstrings library
//!
//! Shared command-line plumbing for the `genstrings` binary: generator
//! options, configuration merging, bundle source selection and output
//! rendering.
//!
//! # CLI Usage
//!
//! ```bash
//! # Ten Japanese strings of exactly 16 chars, reproducible with seed 42
//! genstrings --locale Japanese --seed 42 --count 10 string --max-len 16 --exact
//!
//! # Invalid file names from bundles on disk
//! genstrings --data-dir ./bundles --locale 0x407 invalid-file-name
//!
//! # Random Shift-JIS characters, as JSON
//! genstrings --json ansi --target Japanese --max-len 8
//! ```

use anyhow::Context;
use clap::Parser;
use intl_core::{BundleSource, DirectoryBundles, EmbeddedBundles, ExtractionPolicy, InMemoryBundles, LocaleId};
use intl_generator::{GeneratorConfig, IntlStrings};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;

/// Options that shape the generator itself.
///
/// Values given here override the ones read from `--config`.
#[derive(Parser, Clone, Debug, Default)]
pub struct GeneratorOpts {
    /// RNG seed; a time-based seed is used (and logged) when absent
    #[arg(long, env = "GENSTRINGS_SEED")]
    pub seed: Option<u64>,

    /// Active locale: name (`Japanese`), LCID (`0x411`) or POSIX tag (`ja_JP`)
    #[arg(long, env = "GENSTRINGS_LOCALE")]
    pub locale: Option<LocaleId>,

    /// Directory holding `<Name>_Text.txt` bundles
    #[arg(long, env = "GENSTRINGS_DATA_DIR", conflicts_with = "bundles")]
    pub data_dir: Option<PathBuf>,

    /// YAML manifest mapping locale names to inline text or bundle files
    #[arg(long, env = "GENSTRINGS_BUNDLES", value_name = "PATH")]
    pub bundles: Option<PathBuf>,

    /// Generator config file (YAML, or TOML with a `.toml` extension)
    #[arg(long, env = "GENSTRINGS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Treat missing bundle sections as empty instead of failing
    #[arg(long, env = "GENSTRINGS_LENIENT")]
    pub lenient: bool,

    /// Length of each problematic string
    #[arg(long, env = "GENSTRINGS_DEFAULT_LENGTH")]
    pub default_length: Option<usize>,
}

impl GeneratorOpts {
    /// Config file contents (or defaults) with command-line overrides applied.
    pub fn load_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)
                .with_context(|| format!("Failed to load generator config from {path:?}"))?,
            None => GeneratorConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(locale) = self.locale {
            config.locale = Some(locale);
        }
        if self.lenient {
            config.extraction_policy = ExtractionPolicy::Lenient;
        }
        if let Some(length) = self.default_length {
            config.default_string_length = length;
        }
        Ok(config)
    }

    /// Bundle source selected by `--data-dir` / `--bundles`; embedded
    /// bundles otherwise.
    pub fn bundle_source(&self) -> anyhow::Result<Arc<dyn BundleSource>> {
        if let Some(dir) = &self.data_dir {
            tracing::debug!("Reading bundles from {}", dir.display());
            return Ok(Arc::new(DirectoryBundles::new(dir)));
        }
        if let Some(manifest) = &self.bundles {
            let bundles = InMemoryBundles::from_file(manifest)
                .with_context(|| format!("Failed to load bundle manifest {manifest:?}"))?;
            return Ok(Arc::new(bundles));
        }
        Ok(Arc::new(EmbeddedBundles))
    }

    pub fn build(&self) -> anyhow::Result<IntlStrings> {
        let config = self.load_config()?;
        let source = self.bundle_source()?;
        let generator = IntlStrings::with_config(source, &config)
            .context("Failed to initialize the string generator")?;
        tracing::info!(
            "Generating for {} with seed {}",
            generator.active_locale(),
            generator.seed()
        );
        Ok(generator)
    }
}

/// Options shared by every output-producing command.
#[derive(Parser, Clone, Debug)]
pub struct OutputOpts {
    /// Number of values to generate
    #[arg(long, default_value = "1")]
    pub count: usize,

    /// Print each value as a JSON document
    #[arg(long)]
    pub json: bool,
}

/// Print one value per line, as JSON when `json` is set.
pub fn emit<T: Serialize + Display>(value: &T, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(value).context("Failed to serialize output")?);
    } else {
        println!("{value}");
    }
    Ok(())
}

/// One row of `genstrings locales`.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleInfo {
    pub name: &'static str,
    pub lcid: String,
    pub posix: &'static str,
    pub codepage: Option<u16>,
    /// Whether the selected bundle source has a bundle for it
    pub available: bool,
}

impl LocaleInfo {
    pub fn new(locale: LocaleId, available: &[LocaleId]) -> Self {
        Self {
            name: locale.name(),
            lcid: format!("0x{:04X}", locale.lcid()),
            posix: locale.posix_tag(),
            codepage: locale.ansi_codepage(),
            available: available.contains(&locale),
        }
    }
}

impl Display for LocaleInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let codepage = self
            .codepage
            .map_or_else(|| "-".to_string(), |codepage| codepage.to_string());
        let marker = if self.available { "*" } else { " " };
        write!(
            f,
            "{marker} {:<20} {} {:<8} {codepage}",
            self.name, self.lcid, self.posix
        )
    }
}
