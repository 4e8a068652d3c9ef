//! Calendar-date construction from matched text components.
//!
//! Both pattern families funnel through here: numeric day/month tokens
//! with bounds checks, month-name lookup (Latin abbreviations
//! case-insensitive, Arabic names exact), 2-digit year normalization,
//! and final validation through chrono's calendar construction. A
//! component set that does not form a real date yields `None`; the
//! caller drops the candidate match silently.

use chrono::NaiveDate;

/// Latin output abbreviations, indexed by month - 1.
pub const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const ARABIC_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Look up a month name in either supported language.
pub fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    if let Some(pos) = MONTH_ABBREV
        .iter()
        .position(|abbrev| abbrev.to_lowercase() == lower)
    {
        return Some(pos as u32 + 1);
    }
    ARABIC_MONTHS
        .iter()
        .position(|arabic| *arabic == name)
        .map(|pos| pos as u32 + 1)
}

/// 2-digit years mean the 2000s; 4-digit years are taken as-is.
fn normalize_year(raw: &str) -> Option<i32> {
    let year: i32 = raw.parse().ok()?;
    Some(if raw.len() == 2 { 2000 + year } else { year })
}

/// Parse a numeric day/month pair with an optional year token.
///
/// Day must be 1-31 and month 1-12; beyond those bounds the calendar
/// construction itself rejects combinations like 31 February.
pub fn parse_numeric_date(
    day: &str,
    month: &str,
    year: Option<&str>,
    default_year: i32,
) -> Option<NaiveDate> {
    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return None;
    }
    let year = match year {
        Some(raw) => normalize_year(raw)?,
        None => default_year,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a day with a month name and an optional year token.
pub fn parse_month_name_date(
    day: &str,
    month_name: &str,
    year: Option<&str>,
    default_year: i32,
) -> Option<NaiveDate> {
    let day: u32 = day.parse().ok()?;
    let month = month_from_name(month_name)?;
    let year = match year {
        Some(raw) => normalize_year(raw)?,
        None => default_year,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}
