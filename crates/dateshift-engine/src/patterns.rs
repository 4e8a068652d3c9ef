//! Date-range pattern matching over flattened container text.
//!
//! Patterns are an ordered list of independent definitions, each a
//! compiled regex plus a parser for its captured groups. Two numeric
//! members (tight, then whitespace-tolerant) and one month-name member;
//! Latin and Arabic variants are folded into each alternation. Matching
//! is global and case-insensitive; overlapping hits across families are
//! left for the detector to deduplicate.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use shared_types::PatternKind;

use crate::dates;

/// Connector alternation between the two dates of a range: hyphen,
/// en/em dash, "to", or the Arabic equivalent.
pub const CONNECTOR: &str = r"(?:-|–|—|to|إلى)";

const MONTH_NAMES: &str = "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec\
|يناير|فبراير|مارس|أبريل|مايو|يونيو|يوليو|أغسطس|سبتمبر|أكتوبر|نوفمبر|ديسمبر";

lazy_static! {
    static ref NUMERIC_TIGHT: Regex = Regex::new(
        r"(?i)(\d{1,2})[/\-.](\d{1,2})(?:[/\-.](\d{2,4}))?\s*(?:-|–|—|to|إلى)\s*(\d{1,2})[/\-.](\d{1,2})(?:[/\-.](\d{2,4}))?"
    )
    .expect("numeric date-range pattern");
    static ref NUMERIC_SPACED: Regex = Regex::new(
        r"(?i)(\d{1,2})\s*[/\-.]\s*(\d{1,2})(?:\s*[/\-.]\s*(\d{2,4}))?\s*(?:-|–|—|to|إلى)\s*(\d{1,2})\s*[/\-.]\s*(\d{1,2})(?:\s*[/\-.]\s*(\d{2,4}))?"
    )
    .expect("spaced numeric date-range pattern");
    static ref MONTH_NAME: Regex = Regex::new(&format!(
        r"(?i)(\d{{1,2}})\s+({names})\s*(\d{{2,4}})?\s*{connector}\s*(\d{{1,2}})\s+({names})\s*(\d{{2,4}})?",
        names = MONTH_NAMES,
        connector = CONNECTOR,
    ))
    .expect("month-name date-range pattern");
}

/// One structural match produced by a pattern definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatch {
    pub original_text: String,
    /// Byte offsets into the scanned text.
    pub start: usize,
    pub end: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kind: PatternKind,
}

struct PatternDef {
    kind: PatternKind,
    regex: &'static Regex,
    parse: fn(&Captures, i32) -> Option<(NaiveDate, NaiveDate)>,
}

fn parse_numeric(caps: &Captures, default_year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let start = dates::parse_numeric_date(
        &caps[1],
        &caps[2],
        caps.get(3).map(|m| m.as_str()),
        default_year,
    )?;
    let end = dates::parse_numeric_date(
        &caps[4],
        &caps[5],
        caps.get(6).map(|m| m.as_str()),
        default_year,
    )?;
    Some((start, end))
}

fn parse_month_name(caps: &Captures, default_year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let start = dates::parse_month_name_date(
        &caps[1],
        &caps[2],
        caps.get(3).map(|m| m.as_str()),
        default_year,
    )?;
    let end = dates::parse_month_name_date(
        &caps[4],
        &caps[5],
        caps.get(6).map(|m| m.as_str()),
        default_year,
    )?;
    Some((start, end))
}

fn pattern_defs() -> [PatternDef; 3] {
    [
        PatternDef {
            kind: PatternKind::Numeric,
            regex: &NUMERIC_TIGHT,
            parse: parse_numeric,
        },
        PatternDef {
            kind: PatternKind::Numeric,
            regex: &NUMERIC_SPACED,
            parse: parse_numeric,
        },
        PatternDef {
            kind: PatternKind::MonthName,
            regex: &MONTH_NAME,
            parse: parse_month_name,
        },
    ]
}

/// Scan a block of text for all date-range expressions.
///
/// A candidate whose either half fails to parse as a calendar date is
/// dropped without error. Yearless dates fall back to `default_year`.
pub fn find_date_ranges(text: &str, default_year: i32) -> Vec<TextMatch> {
    let mut matches = Vec::new();
    for def in pattern_defs() {
        for caps in def.regex.captures_iter(text) {
            let whole = caps.get(0).expect("match group 0 always present");
            let Some((start_date, end_date)) = (def.parse)(&caps, default_year) else {
                continue;
            };
            matches.push(TextMatch {
                original_text: whole.as_str().to_string(),
                start: whole.start(),
                end: whole.end(),
                start_date,
                end_date,
                kind: def.kind,
            });
        }
    }
    matches
}
