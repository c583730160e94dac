//! Identifier-safe strings.

use super::text::compose;
use super::{is_letter, target_length};
use crate::GeneratorError;
use intl_core::LocaleContext;
use rand::Rng;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Refills of the candidate pool before giving up on the target length.
const MAX_REFILLS: usize = 32;

fn is_identifier_continue(c: char) -> bool {
    is_letter(c) || c.general_category() == GeneralCategory::DecimalNumber
}

/// An identifier of up to `max_len` chars.
///
/// The first char is an upper, lower or other letter; the rest may also be
/// decimal digits. Candidates come from general strings twice the target
/// length, refilled as they run out. A bundle with too few letters yields a
/// shorter result.
pub fn random_identifier<R: Rng + ?Sized>(
    context: &LocaleContext,
    rng: &mut R,
    max_len: usize,
    exact: bool,
) -> Result<String, GeneratorError> {
    let len = target_length(rng, max_len, exact);
    let mut out = String::new();
    let mut count = 0;

    for _ in 0..MAX_REFILLS {
        if count == len {
            break;
        }
        let pool = compose(context, rng, len * 2, false)?;
        if pool.is_empty() {
            break;
        }
        for c in pool {
            let accepted = if count == 0 {
                is_letter(c)
            } else {
                is_identifier_continue(c)
            };
            if accepted {
                out.push(c);
                count += 1;
                if count == len {
                    break;
                }
            }
        }
    }
    Ok(out)
}
