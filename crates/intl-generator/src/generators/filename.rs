//! Valid and invalid file names built from locale text.

use super::pick;
use super::target_length;
use super::text::compose;
use crate::GeneratorError;
use intl_core::LocaleContext;
use rand::Rng;
use std::path::{Path, PathBuf};
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Characters no file name may contain.
pub const RESERVED_FILE_NAME_CHARS: [char; 9] = ['|', '\\', '/', ':', '*', '?', '"', '<', '>'];

/// Longest path `random_directory_name` aims for.
pub const MAX_PATH_LENGTH: usize = 258;

/// Letters, letter numbers and decimal digits outside the reserved set.
pub fn is_valid_file_name_char(c: char) -> bool {
    !RESERVED_FILE_NAME_CHARS.contains(&c)
        && matches!(
            c.general_category(),
            GeneralCategory::LowercaseLetter
                | GeneralCategory::UppercaseLetter
                | GeneralCategory::OtherLetter
                | GeneralCategory::LetterNumber
                | GeneralCategory::DecimalNumber
        )
}

/// A name of at most `max_len` valid file-name characters.
///
/// A general string twice the target length is filtered down to valid
/// characters, so the result may be shorter than the target.
pub fn valid_file_name<R: Rng + ?Sized>(
    context: &LocaleContext,
    rng: &mut R,
    max_len: usize,
    exact: bool,
) -> Result<String, GeneratorError> {
    let len = target_length(rng, max_len, exact);
    if len == 0 {
        return Ok(String::new());
    }
    Ok(compose(context, rng, len * 2, true)?
        .into_iter()
        .filter(|c| is_valid_file_name_char(*c))
        .take(len)
        .collect())
}

/// A name guaranteed to contain every reserved character.
///
/// Targets no longer than the reserved set return a prefix of it.
pub fn invalid_file_name<R: Rng + ?Sized>(
    context: &LocaleContext,
    rng: &mut R,
    max_len: usize,
    exact: bool,
) -> Result<String, GeneratorError> {
    let len = target_length(rng, max_len, exact);
    if len <= RESERVED_FILE_NAME_CHARS.len() {
        return Ok(RESERVED_FILE_NAME_CHARS[..len].iter().collect());
    }

    let mut name = compose(context, rng, len - RESERVED_FILE_NAME_CHARS.len(), true)?;
    for reserved in RESERVED_FILE_NAME_CHARS {
        let at = pick(rng, 1, name.len()).min(name.len());
        name.insert(at, reserved);
    }
    Ok(name.into_iter().collect())
}

/// `base` extended by `depth` random directory names.
///
/// Each name holds up to `(258 - depth) / depth` characters; empty names are
/// skipped.
pub fn random_directory_name<R: Rng + ?Sized>(
    context: &LocaleContext,
    rng: &mut R,
    base: &Path,
    depth: usize,
) -> Result<PathBuf, GeneratorError> {
    let mut path = base.to_path_buf();
    if depth == 0 {
        return Ok(path);
    }

    let name_len = (MAX_PATH_LENGTH.saturating_sub(depth) / depth).max(1);
    for _ in 0..depth {
        let name = valid_file_name(context, rng, name_len, false)?;
        if !name.is_empty() {
            path.push(name);
        }
    }
    Ok(path)
}
