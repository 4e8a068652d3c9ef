//! Replacement planning: one new date pair per unique expression,
//! formatted back into the expression's original visual style.
//!
//! Planning is a pure function of the originally detected ranges and
//! the active policy. It is recomputed wholesale on every policy or
//! parameter change, always from original dates, so shifts never
//! compound.

use std::collections::HashMap;

use chrono::{Datelike, Duration, Months, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

use shared_types::{DetectedRange, PatternKind, ReplacementPolicy};

use crate::dates::MONTH_ABBREV;

lazy_static! {
    /// First day-month component pair, for separator style detection.
    static ref COMPONENT_PAIR: Regex =
        Regex::new(r"\d{1,2}([/\-.])\d{1,2}").expect("component pair pattern");
    static ref FOUR_DIGITS: Regex = Regex::new(r"\d{4}").expect("year pattern");
    static ref LEADING_ZERO: Regex = Regex::new(r"\b0\d").expect("padding pattern");
}

/// Connector token to reuse in the output, detected from the original
/// expression; plain hyphen when nothing more specific appears.
fn detect_connector(original: &str) -> &'static str {
    if original.contains(" - ") {
        " - "
    } else if original.contains('–') {
        "–"
    } else if original.contains('—') {
        "—"
    } else if original.contains(" to ") {
        " to "
    } else if original.contains("إلى") {
        " إلى "
    } else {
        "-"
    }
}

struct NumericStyle {
    separator: char,
    has_year: bool,
    padded: bool,
}

impl NumericStyle {
    /// The component separator comes from the first `digit sep digit`
    /// pair, so a hyphen connector never masquerades as the separator.
    fn detect(original: &str) -> Self {
        let separator = COMPONENT_PAIR
            .captures(original)
            .and_then(|caps| caps[1].chars().next())
            .unwrap_or('/');
        NumericStyle {
            separator,
            has_year: FOUR_DIGITS.is_match(original),
            padded: LEADING_ZERO.is_match(original),
        }
    }

    fn format(&self, date: NaiveDate) -> String {
        let mut out = if self.padded {
            format!(
                "{:02}{}{:02}",
                date.day(),
                self.separator,
                date.month()
            )
        } else {
            format!("{}{}{}", date.day(), self.separator, date.month())
        };
        if self.has_year {
            out.push(self.separator);
            out.push_str(&date.year().to_string());
        }
        out
    }
}

fn format_month_name(date: NaiveDate, has_year: bool) -> String {
    let abbrev = MONTH_ABBREV[date.month0() as usize];
    if has_year {
        format!("{} {} {}", date.day(), abbrev, date.year())
    } else {
        format!("{} {}", date.day(), abbrev)
    }
}

/// Format a new date pair in the visual style of the original
/// expression: same connector, component separator, zero-padding, and
/// year presence. Month names always come out as Latin abbreviations.
pub fn format_range(
    start: NaiveDate,
    end: NaiveDate,
    kind: PatternKind,
    original: &str,
) -> String {
    let connector = detect_connector(original);
    match kind {
        PatternKind::Numeric => {
            let style = NumericStyle::detect(original);
            format!("{}{}{}", style.format(start), connector, style.format(end))
        }
        PatternKind::MonthName => {
            let has_year = FOUR_DIGITS.is_match(original);
            format!(
                "{}{}{}",
                format_month_name(start, has_year),
                connector,
                format_month_name(end, has_year)
            )
        }
    }
}

/// Calendar months first, then weeks and days.
fn shift_date(date: NaiveDate, months: i32, weeks: i64, days: i64) -> Option<NaiveDate> {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months as u32))?
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))?
    };
    shifted
        .checked_add_signed(Duration::weeks(weeks))?
        .checked_add_signed(Duration::days(days))
}

/// Compute the replacement map: one entry per unique expression text.
///
/// Buckets are ordered by representative start date (first-seen
/// occurrence), ties broken by the text itself; under `SetStart` the
/// i-th bucket begins `start + 7i` days with its original duration
/// preserved. A bucket whose arithmetic cannot be carried out keeps its
/// original text.
pub fn plan_replacements(
    ranges: &[DetectedRange],
    policy: &ReplacementPolicy,
) -> HashMap<String, String> {
    let mut buckets: Vec<&DetectedRange> = Vec::new();
    for range in ranges {
        if !buckets
            .iter()
            .any(|seen| seen.original_text == range.original_text)
        {
            buckets.push(range);
        }
    }
    buckets.sort_by(|a, b| {
        a.start_date
            .cmp(&b.start_date)
            .then_with(|| a.original_text.cmp(&b.original_text))
    });

    let mut plan = HashMap::new();
    for (week_index, representative) in buckets.iter().enumerate() {
        let original = &representative.original_text;
        let replacement = compute_replacement(representative, policy, week_index)
            .unwrap_or_else(|| original.clone());
        plan.insert(original.clone(), replacement);
    }
    plan
}

fn compute_replacement(
    range: &DetectedRange,
    policy: &ReplacementPolicy,
    week_index: usize,
) -> Option<String> {
    if policy.is_noop() {
        return Some(range.original_text.clone());
    }
    let (new_start, new_end) = match *policy {
        ReplacementPolicy::SetStart { start } => {
            let new_start =
                start.checked_add_signed(Duration::days(7 * week_index as i64))?;
            let duration = range.end_date.signed_duration_since(range.start_date);
            let new_end = new_start.checked_add_signed(duration)?;
            (new_start, new_end)
        }
        ReplacementPolicy::Shift {
            months,
            weeks,
            days,
        } => (
            shift_date(range.start_date, months, weeks, days)?,
            shift_date(range.end_date, months, weeks, days)?,
        ),
    };
    Some(format_range(
        new_start,
        new_end,
        range.pattern,
        &range.original_text,
    ))
}

/// Write each bucket's replacement onto every occurrence sharing that
/// text. Occurrences missing from the plan keep their original text.
pub fn apply_plan(ranges: &mut [DetectedRange], plan: &HashMap<String, String>) {
    for range in ranges.iter_mut() {
        range.replacement = Some(
            plan.get(&range.original_text)
                .cloned()
                .unwrap_or_else(|| range.original_text.clone()),
        );
    }
}
