//! Property-based tests for dateshift-engine
//!
//! Exercises the pattern matcher, the planner's format preservation,
//! and the substitution guards using proptest.

use chrono::{Datelike, Duration, NaiveDate};
use dateshift_engine::planner::format_range;
use dateshift_engine::substitute::{apply_replacements, MAX_LENGTH_DELTA};
use dateshift_engine::{find_date_ranges, plan_replacements};
use proptest::prelude::*;
use shared_types::{DetectedRange, PatternKind, ReplacementPolicy};

// ============================================================
// Strategies
// ============================================================

/// Days capped at 28 so every generated pair is on the calendar in
/// every month.
fn valid_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2099, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn connector() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("-"),
        Just(" - "),
        Just("–"),
        Just(" to "),
        Just(" إلى "),
    ]
}

fn separator() -> impl Strategy<Value = char> {
    prop_oneof![Just('/'), Just('.')]
}

fn detected(text: &str, start: NaiveDate, end: NaiveDate) -> DetectedRange {
    DetectedRange {
        original_text: text.to_string(),
        start_index: 0,
        end_index: text.len(),
        start_date: start,
        end_date: end,
        pattern: PatternKind::Numeric,
        container_index: 0,
        replacement: None,
    }
}

fn padded_expression(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{:02}/{:02}/{} - {:02}/{:02}/{}",
        start.day(),
        start.month(),
        start.year(),
        end.day(),
        end.month(),
        end.year()
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Pattern Matcher
    // ============================================================

    #[test]
    fn generated_numeric_ranges_are_detected(
        start in valid_date(),
        end in valid_date(),
        conn in connector(),
        sep in separator(),
    ) {
        let text = format!(
            "{:02}{sep}{:02}{sep}{}{conn}{:02}{sep}{:02}{sep}{}",
            start.day(), start.month(), start.year(),
            end.day(), end.month(), end.year(),
        );
        let matches = find_date_ranges(&text, 1999);
        prop_assert!(!matches.is_empty(), "no match for {text:?}");
        prop_assert_eq!(matches[0].start_date, start);
        prop_assert_eq!(matches[0].end_date, end);
    }

    #[test]
    fn yearless_ranges_inherit_the_default_year(
        start in valid_date(),
        end in valid_date(),
        default_year in 2000i32..2099,
    ) {
        let text = format!(
            "{}/{}-{}/{}",
            start.day(), start.month(), end.day(), end.month(),
        );
        let matches = find_date_ranges(&text, default_year);
        prop_assert!(!matches.is_empty());
        prop_assert_eq!(matches[0].start_date.year(), default_year);
        prop_assert_eq!(matches[0].end_date.year(), default_year);
    }

    // ============================================================
    // Planner Format Preservation
    // ============================================================

    #[test]
    fn formatted_output_is_detectable_again(
        original_start in valid_date(),
        original_end in valid_date(),
        new_start in valid_date(),
        new_end in valid_date(),
        conn in connector(),
        sep in separator(),
    ) {
        let original = format!(
            "{:02}{sep}{:02}{sep}{}{conn}{:02}{sep}{:02}{sep}{}",
            original_start.day(), original_start.month(), original_start.year(),
            original_end.day(), original_end.month(), original_end.year(),
        );
        let formatted = format_range(new_start, new_end, PatternKind::Numeric, &original);
        let matches = find_date_ranges(&formatted, 1999);
        prop_assert!(!matches.is_empty(), "unparseable output {formatted:?}");
        prop_assert_eq!(matches[0].start_date, new_start);
        prop_assert_eq!(matches[0].end_date, new_end);
    }

    #[test]
    fn planned_replacements_stay_within_the_length_guard(
        start in valid_date(),
        duration_days in 0i64..30,
        months in -24i32..24,
        weeks in -52i64..52,
        days in -31i64..31,
    ) {
        let end = start + Duration::days(duration_days);
        let original = padded_expression(start, end);
        let ranges = vec![detected(&original, start, end)];
        let policy = ReplacementPolicy::Shift { months, weeks, days };
        let plan = plan_replacements(&ranges, &policy);
        let replacement = &plan[&original];
        let delta = original.chars().count().abs_diff(replacement.chars().count());
        prop_assert!(delta <= MAX_LENGTH_DELTA, "{original:?} -> {replacement:?}");
    }

    #[test]
    fn plan_has_one_entry_per_unique_expression(
        dates in prop::collection::vec((valid_date(), 0i64..30), 1..8),
    ) {
        let mut ranges = Vec::new();
        for (start, duration) in &dates {
            let end = *start + Duration::days(*duration);
            let original = padded_expression(*start, end);
            // Two occurrences per expression.
            ranges.push(detected(&original, *start, end));
            ranges.push(detected(&original, *start, end));
        }
        let unique: std::collections::HashSet<_> =
            ranges.iter().map(|r| r.original_text.clone()).collect();
        let policy = ReplacementPolicy::Shift { months: 0, weeks: 1, days: 0 };
        let plan = plan_replacements(&ranges, &policy);
        prop_assert_eq!(plan.len(), unique.len());
        for text in &unique {
            prop_assert!(plan.contains_key(text));
        }
    }

    #[test]
    fn set_start_buckets_advance_by_whole_weeks(
        starts in prop::collection::hash_set(valid_date(), 2..6),
        target in valid_date(),
    ) {
        let mut starts: Vec<NaiveDate> = starts.into_iter().collect();
        starts.sort();
        let ranges: Vec<DetectedRange> = starts
            .iter()
            .map(|start| {
                let end = *start + Duration::days(6);
                detected(&padded_expression(*start, end), *start, end)
            })
            .collect();
        let plan = plan_replacements(&ranges, &ReplacementPolicy::SetStart { start: target });
        for (week, range) in ranges.iter().enumerate() {
            let replacement = &plan[&range.original_text];
            let reparsed = find_date_ranges(replacement, 1999);
            prop_assert!(!reparsed.is_empty());
            let expected = target + Duration::days(7 * week as i64);
            prop_assert_eq!(reparsed[0].start_date, expected);
            prop_assert_eq!(reparsed[0].end_date, expected + Duration::days(6));
        }
    }

    // ============================================================
    // Substitution Safety
    // ============================================================

    #[test]
    fn substitution_never_touches_surrounding_text(
        start in valid_date(),
        new_start in valid_date(),
        prefix in "[a-z ]{0,20}",
        suffix in "[a-z ]{0,20}",
    ) {
        let end = start + Duration::days(6);
        let original = padded_expression(start, end);
        let replacement = padded_expression(new_start, new_start + Duration::days(6));
        let xml = format!("<w:t>{prefix}{original}{suffix}</w:t>");
        let table = vec![(original.clone(), replacement.clone())];
        let (out, applied) = apply_replacements(&xml, &table);
        if original == replacement {
            prop_assert_eq!(out, xml);
        } else {
            prop_assert_eq!(applied.len(), 1);
            prop_assert_eq!(out, format!("<w:t>{prefix}{replacement}{suffix}</w:t>"));
        }
    }
}
