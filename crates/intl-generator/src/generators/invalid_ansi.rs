//! Unicode characters with no mapping in the locale's ANSI codepage.

use super::pick;
use crate::GeneratorError;
use intl_core::{LocaleContext, Section};
use rand::Rng;

/// Characters of one RANDOM_INVALID_ANSI_CHAR entry.
///
/// Entries look like `ED56 -> FA72: 侔`; the text after `": "` is kept.
fn entry_chars(line: &str) -> &str {
    line.split_once(": ").map_or(line.trim(), |(_, chars)| chars)
}

/// Pool of characters listed in RANDOM_INVALID_ANSI_CHAR.
pub fn invalid_ansi_pool(context: &LocaleContext) -> Result<Vec<char>, GeneratorError> {
    Ok(context
        .lines(Section::RandomInvalidAnsiChar)?
        .into_iter()
        .flat_map(|line| entry_chars(line).chars())
        .collect())
}

/// `len` chars taken from the pool, starting at a random offset and wrapping
/// around. Empty when the pool is empty.
pub fn invalid_ansi_string<R: Rng + ?Sized>(
    context: &LocaleContext,
    rng: &mut R,
    len: usize,
) -> Result<String, GeneratorError> {
    let pool = invalid_ansi_pool(context)?;
    if pool.is_empty() || len == 0 {
        return Ok(String::new());
    }
    let start = pick(rng, 0, pool.len());
    Ok(pool.iter().cycle().skip(start).take(len).collect())
}
