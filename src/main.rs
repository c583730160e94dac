//! Command-line interface for genstrings
//!
//! # Usage Examples
//!
//! ## General strings
//! ```bash
//! # Reproducible English strings
//! genstrings --seed 42 --count 5 string --max-len 10 --exact
//!
//! # Strings dense in interesting characters, German bundle from disk
//! genstrings --data-dir ./bundles --locale German top20 --max-len 40
//! ```
//!
//! ## Codepage strings
//! ```bash
//! # Random Shift-JIS characters, never starting with a digit
//! genstrings ansi --target Japanese --max-len 12 --no-lead-num
//!
//! # UTF-16LE bytes of a Korean string, hex encoded
//! genstrings bytes --target Korean --encoding unicode --max-len 8
//! ```
//!
//! ## Names and dates
//! ```bash
//! genstrings invalid-file-name --max-len 20 --exact
//! genstrings directory --base /tmp/intl --depth 3
//! genstrings --locale Japanese --json date-time
//! ```
//!
//! Generator and output options go before the subcommand. Logging is
//! controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use genstrings::{emit, GeneratorOpts, LocaleInfo, OutputOpts};
use intl_core::{BundleSource, LocaleId};
use intl_generator::{CodeType, IntlStrings};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "genstrings")]
#[command(about = "Generate localized random strings for internationalization testing")]
#[command(long_about = None)]
struct Cli {
    /// Generator options
    #[command(flatten)]
    generator: GeneratorOpts,

    /// Output options
    #[command(flatten)]
    output: OutputOpts,

    #[command(subcommand)]
    command: Commands,
}

/// Length and validation options of string commands.
#[derive(Args, Clone, Debug)]
struct LengthArgs {
    /// Maximum number of characters
    #[arg(long, default_value = "30")]
    max_len: usize,

    /// Generate exactly `--max-len` characters
    #[arg(long)]
    exact: bool,

    /// Keep control characters from the bundle text
    #[arg(long)]
    no_validate: bool,
}

impl LengthArgs {
    fn validate(&self) -> bool {
        !self.no_validate
    }
}

/// Locale a scoped command generates for; the active locale when absent.
#[derive(Args, Clone, Debug)]
struct TargetArgs {
    /// Locale to generate for without changing the active one
    #[arg(long)]
    target: Option<LocaleId>,
}

impl TargetArgs {
    fn resolve(&self, generator: &IntlStrings) -> LocaleId {
        self.target.unwrap_or_else(|| generator.active_locale())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Bundle text with one special entry spliced in
    String {
        #[command(flatten)]
        length: LengthArgs,

        #[command(flatten)]
        target: TargetArgs,

        /// Never start with a numeric character
        #[arg(long)]
        no_lead_num: bool,
    },

    /// Strings containing the locale's interesting characters
    Top20 {
        #[command(flatten)]
        length: LengthArgs,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// One string per problematic character of the active locale
    Problematic,

    /// Strings containing the locale's problematic characters
    ProbChars {
        #[command(flatten)]
        length: LengthArgs,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Characters lost in a round trip through the ANSI codepage
    RoundTrip {
        #[command(flatten)]
        length: LengthArgs,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Random characters of the locale's ANSI codepage
    Ansi {
        #[command(flatten)]
        length: LengthArgs,

        #[command(flatten)]
        target: TargetArgs,

        /// Never start with a numeric character
        #[arg(long)]
        no_lead_num: bool,
    },

    /// Characters walking the locale's ANSI codepage
    AnsiSequential {
        #[command(flatten)]
        length: LengthArgs,

        #[command(flatten)]
        target: TargetArgs,

        /// Never start with a numeric character
        #[arg(long)]
        no_lead_num: bool,
    },

    /// Characters with no mapping in the locale's ANSI codepage
    InvalidAnsi {
        #[command(flatten)]
        length: LengthArgs,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Encoded bytes of a general string, hex encoded
    Bytes {
        #[command(flatten)]
        length: LengthArgs,

        #[command(flatten)]
        target: TargetArgs,

        /// Output encoding: unicode, utf8 or current
        #[arg(long, default_value = "current")]
        encoding: CodeType,
    },

    /// Valid file names
    FileName {
        #[command(flatten)]
        length: LengthArgs,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// File names containing every reserved character
    InvalidFileName {
        #[command(flatten)]
        length: LengthArgs,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Valid identifiers
    Identifier {
        #[command(flatten)]
        length: LengthArgs,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Random directory paths below a base directory (nothing is created)
    Directory {
        /// Base directory
        #[arg(long, default_value = ".")]
        base: PathBuf,

        /// Number of directory levels to append
        #[arg(long, default_value = "3")]
        depth: usize,
    },

    /// Parsed date/time samples
    DateTime,

    /// Date strings formatted for the locale
    DateString,

    /// Date/time format strings
    DateFormat,

    /// Number formatting of the active locale
    NumberFormat,

    /// Supported locales; `*` marks those with a bundle
    Locales,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.output.json;
    let count = cli.output.count;

    if let Commands::Locales = cli.command {
        let source = cli.generator.bundle_source()?;
        let available = source.available_locales();
        for locale in LocaleId::ALL {
            emit(&LocaleInfo::new(locale, &available), json)?;
        }
        return Ok(());
    }

    let mut generator = cli.generator.build()?;

    match cli.command {
        Commands::String {
            length,
            target,
            no_lead_num,
        } => {
            let locale = target.resolve(&generator);
            generator
                .verify_and_load(locale)
                .with_context(|| format!("Failed to load bundle for {locale}"))?;
            for _ in 0..count {
                let value = if no_lead_num {
                    generator.get_string_no_lead_num(length.max_len, length.exact, length.validate())?
                } else {
                    generator.get_string(length.max_len, length.exact, length.validate())?
                };
                emit(&value, json)?;
            }
        }
        Commands::Top20 { length, target } => {
            let locale = target.resolve(&generator);
            for _ in 0..count {
                let value = generator.get_top20_string_for_locale(
                    length.max_len,
                    length.exact,
                    length.validate(),
                    locale,
                )?;
                emit(&value, json)?;
            }
        }
        Commands::Problematic => {
            for _ in 0..count {
                for value in generator.get_problematic_strings()? {
                    emit(&value, json)?;
                }
            }
        }
        Commands::ProbChars { length, target } => {
            let locale = target.resolve(&generator);
            for _ in 0..count {
                let value = generator.get_prob_char_str_lcid(
                    length.max_len,
                    length.exact,
                    length.validate(),
                    locale,
                )?;
                emit(&value, json)?;
            }
        }
        Commands::RoundTrip { length, target } => {
            let locale = target.resolve(&generator);
            for _ in 0..count {
                let value = generator.get_prob_urtc_str_lcid(
                    length.max_len,
                    length.exact,
                    length.validate(),
                    locale,
                )?;
                emit(&value, json)?;
            }
        }
        Commands::Ansi {
            length,
            target,
            no_lead_num,
        } => {
            let locale = target.resolve(&generator);
            for _ in 0..count {
                let value = generator.get_rand_str_lcid(
                    length.max_len,
                    length.exact,
                    length.validate(),
                    locale,
                    no_lead_num,
                )?;
                emit(&value, json)?;
            }
        }
        Commands::AnsiSequential {
            length,
            target,
            no_lead_num,
        } => {
            let locale = target.resolve(&generator);
            for _ in 0..count {
                let value = generator.get_str_lcid(
                    length.max_len,
                    length.exact,
                    length.validate(),
                    locale,
                    no_lead_num,
                )?;
                emit(&value, json)?;
            }
        }
        Commands::InvalidAnsi { length, target } => {
            let locale = target.resolve(&generator);
            for _ in 0..count {
                let value = generator.get_uni_str_invalid_ansi(length.max_len, length.exact, locale)?;
                emit(&value, json)?;
            }
        }
        Commands::Bytes {
            length,
            target,
            encoding,
        } => {
            let locale = target.resolve(&generator);
            for _ in 0..count {
                let bytes = generator.get_uni_str_rand_ansi_bytes(
                    length.max_len,
                    length.exact,
                    length.validate(),
                    encoding,
                    locale,
                )?;
                emit(&hex::encode(&bytes), json)?;
            }
        }
        Commands::FileName { length, target } => {
            let locale = target.resolve(&generator);
            for _ in 0..count {
                let value =
                    generator.get_valid_file_name_for_locale(length.max_len, length.exact, locale)?;
                emit(&value, json)?;
            }
        }
        Commands::InvalidFileName { length, target } => {
            let locale = target.resolve(&generator);
            for _ in 0..count {
                let value =
                    generator.get_invalid_file_name_for_locale(length.max_len, length.exact, locale)?;
                emit(&value, json)?;
            }
        }
        Commands::Identifier { length, target } => {
            let locale = target.resolve(&generator);
            for _ in 0..count {
                let value = generator.get_random_valid_identifier_for_locale(
                    length.max_len,
                    length.exact,
                    locale,
                )?;
                emit(&value, json)?;
            }
        }
        Commands::Directory { base, depth } => {
            for _ in 0..count {
                let path = generator.get_random_directory_name(&base, depth)?;
                emit(&path.display().to_string(), json)?;
            }
        }
        Commands::DateTime => {
            for _ in 0..count {
                emit(&generator.get_interesting_date_time()?, json)?;
            }
        }
        Commands::DateString => {
            for _ in 0..count {
                emit(&generator.get_formatted_date_time_strings()?, json)?;
            }
        }
        Commands::DateFormat => {
            for _ in 0..count {
                emit(&generator.get_interesting_date_time_format()?, json)?;
            }
        }
        Commands::NumberFormat => {
            let format = generator.number_format();
            if json {
                println!(
                    "{}",
                    serde_json::to_string(format).context("Failed to serialize number format")?
                );
            } else {
                println!("currency_decimal_digits: {}", format.currency_decimal_digits);
                println!("currency_decimal_separator: {:?}", format.currency_decimal_separator);
                println!("currency_group_separator: {:?}", format.currency_group_separator);
                println!("currency_group_sizes: {:?}", format.currency_group_sizes);
                println!("currency_symbol: {:?}", format.currency_symbol);
                println!("number_decimal_digits: {}", format.number_decimal_digits);
                println!("number_decimal_separator: {:?}", format.number_decimal_separator);
                println!("number_group_separator: {:?}", format.number_group_separator);
                println!("number_group_sizes: {:?}", format.number_group_sizes);
            }
        }
        Commands::Locales => {}
    }

    Ok(())
}
