//! Date/time samples.

use super::pick;
use crate::GeneratorError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use intl_core::{DateOrder, LocaleContext, Section};
use rand::Rng;

const ISO_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const MDY_DATE_TIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M %p",
];
const MDY_DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%m-%d-%Y"];

const DMY_DATE_TIME_FORMATS: &[&str] = &[
    "%d.%m.%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d/%m/%Y %H:%M",
];
const DMY_DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y"];

const YMD_DATE_TIME_FORMATS: &[&str] = &["%Y/%m/%d %H:%M:%S", "%Y.%m.%d %H:%M:%S", "%Y/%m/%d %H:%M"];
const YMD_DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%Y.%m.%d"];

/// Parse a bundle date/time entry.
///
/// RFC 3339 and ISO 8601 forms are tried first, then the formats matching the
/// locale's date order. Date-only entries resolve to midnight.
pub fn parse_date_time(line: &str, order: DateOrder) -> Option<NaiveDateTime> {
    let line = line.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(line) {
        return Some(dt.naive_local());
    }
    for format in ISO_DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(line, format) {
            return Some(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(line, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    let (date_time_formats, date_formats) = match order {
        DateOrder::MonthDayYear => (MDY_DATE_TIME_FORMATS, MDY_DATE_FORMATS),
        DateOrder::DayMonthYear => (DMY_DATE_TIME_FORMATS, DMY_DATE_FORMATS),
        DateOrder::YearMonthDay => (YMD_DATE_TIME_FORMATS, YMD_DATE_FORMATS),
    };
    for format in date_time_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(line, format) {
            return Some(dt);
        }
    }
    for format in date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(line, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

fn random_entry<'a, R: Rng + ?Sized>(rng: &mut R, entries: &[&'a str]) -> Option<&'a str> {
    if entries.is_empty() {
        None
    } else {
        Some(entries[pick(rng, 0, entries.len())])
    }
}

/// A random VALIDDATETIMES entry, parsed.
pub fn interesting_date_time<R: Rng + ?Sized>(
    context: &LocaleContext,
    rng: &mut R,
) -> Result<NaiveDateTime, GeneratorError> {
    let entries = context.lines(Section::ValidDateTimes)?;
    let line = random_entry(rng, &entries)
        .ok_or(GeneratorError::EmptySection(Section::ValidDateTimes))?;
    parse_date_time(line, context.locale().date_order()).ok_or_else(|| GeneratorError::Format {
        line: line.to_string(),
    })
}

/// A random raw VALIDDATESTRINGS entry; empty when there are none.
pub fn formatted_date_time_string<R: Rng + ?Sized>(
    context: &LocaleContext,
    rng: &mut R,
) -> Result<String, GeneratorError> {
    let entries = context.lines(Section::ValidDateStrings)?;
    Ok(random_entry(rng, &entries).unwrap_or_default().to_string())
}

/// A random raw VALIDFORMATS entry; empty when there are none.
pub fn date_time_format<R: Rng + ?Sized>(
    context: &LocaleContext,
    rng: &mut R,
) -> Result<String, GeneratorError> {
    let entries = context.lines(Section::ValidFormats)?;
    Ok(random_entry(rng, &entries).unwrap_or_default().to_string())
}
