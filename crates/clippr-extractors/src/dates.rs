//! Date normalisation to ISO `YYYY-MM-DD` form.

use std::sync::LazyLock;

use jiff::civil::Date;
use regex::Regex;

use clippr_plugins::{EntryError, PluginEntry};

use crate::compiled;

static NUMERIC_DATE: LazyLock<Regex> =
    LazyLock::new(|| compiled(r"\d{1,4}[/\-]\d{1,2}[/\-]\d{1,4}"));

/// Finds numeric dates in text and rewrites each to ISO form.
///
/// A four-digit leading group is read as year-first; otherwise the date is
/// read as US month/day/year. A match that does not name a real calendar
/// date fails the whole run, as third-party callers expect all-or-nothing
/// output.
pub struct DateNormalizer;

impl PluginEntry for DateNormalizer {
    fn run(&self, input: &str) -> Result<serde_json::Value, EntryError> {
        let normalized: Vec<String> = NUMERIC_DATE
            .find_iter(input)
            .map(|m| normalize(m.as_str()))
            .collect::<Result<_, _>>()?;
        Ok(serde_json::json!(normalized))
    }
}

fn normalize(raw: &str) -> Result<String, EntryError> {
    let parts: Vec<&str> = raw.split(['/', '-']).collect();
    let &[first, second, third] = parts.as_slice() else {
        return Err(format!("unrecognised date '{raw}'").into());
    };

    let date = if first.len() == 4 {
        build_date(raw, first, second, third)
    } else {
        build_date(raw, third, first, second)
    }?;
    Ok(date.to_string())
}

fn build_date(raw: &str, year: &str, month: &str, day: &str) -> Result<Date, EntryError> {
    let year: i16 = year
        .parse()
        .map_err(|_| format!("unrecognised date '{raw}'"))?;
    let month: i8 = month
        .parse()
        .map_err(|_| format!("unrecognised date '{raw}'"))?;
    let day: i8 = day
        .parse()
        .map_err(|_| format!("unrecognised date '{raw}'"))?;
    Date::new(year, month, day).map_err(|_| format!("invalid date '{raw}'").into())
}
