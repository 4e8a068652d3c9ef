//! Guarded text substitution on the raw document XML.
//!
//! Replacements are applied as exact whole-string swaps on the XML
//! text, each pass guarded so a bad replacement can never corrupt the
//! document: the original must still be present, the length delta must
//! be small, and the replacement itself must still look like a date
//! range. A skipped replacement leaves the document untouched at that
//! site.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::DetectedRange;

/// A replacement may grow or shrink the text by at most this many
/// characters before it is considered suspicious and skipped.
pub const MAX_LENGTH_DELTA: usize = 20;

lazy_static! {
    static ref DATE_RANGE_SHAPE: Regex = Regex::new(&format!(
        r"(?i)\d{{1,2}}[/\-.]\d{{1,2}}.*{connector}.*\d{{1,2}}[/\-.]\d{{1,2}}",
        connector = crate::patterns::CONNECTOR,
    ))
    .expect("date-range shape pattern");
    static ref MONTH_NAME_SHAPE: Regex = Regex::new(&format!(
        r"(?i)\d{{1,2}}\s+[A-Za-z\u{{0600}}-\u{{06FF}}]+.*{connector}.*\d{{1,2}}\s+[A-Za-z\u{{0600}}-\u{{06FF}}]+",
        connector = crate::patterns::CONNECTOR,
    ))
    .expect("month-name shape pattern");
}

/// Loose structural check that a string still reads as a date range.
pub fn looks_like_date_range(text: &str) -> bool {
    DATE_RANGE_SHAPE.is_match(text) || MONTH_NAME_SHAPE.is_match(text)
}

/// Collect the (original, replacement) pairs worth applying: drop
/// no-ops, drop entries without a planned replacement, drop originals
/// that do not read as date ranges, and dedupe repeated occurrences of
/// the same expression.
pub fn build_replacement_table(ranges: &[DetectedRange]) -> Vec<(String, String)> {
    let mut table: Vec<(String, String)> = Vec::new();
    for range in ranges {
        let Some(replacement) = &range.replacement else {
            continue;
        };
        if replacement == &range.original_text {
            continue;
        }
        if !looks_like_date_range(&range.original_text) {
            tracing::warn!(original = %range.original_text, "skipping non-date text");
            continue;
        }
        if table.iter().any(|(orig, _)| orig == &range.original_text) {
            continue;
        }
        table.push((range.original_text.clone(), replacement.clone()));
    }
    table
}

/// Apply a replacement table to the document XML, returning the
/// rewritten XML and the original texts that were actually substituted.
///
/// All entries are substituted in a single left-to-right pass, so text
/// inserted for one entry can never be re-matched by another. Applying
/// entries one after another would cascade when a replacement equals
/// some other entry's original, as adjacent weekly ranges do under a
/// one-week shift.
pub fn apply_replacements(xml: &str, table: &[(String, String)]) -> (String, Vec<String>) {
    let mut active: Vec<(&str, &str)> = Vec::new();
    for (original, replacement) in table {
        if !xml.contains(original.as_str()) {
            tracing::warn!(original = %original, "expression not found in document text, skipping");
            continue;
        }
        let delta = original
            .chars()
            .count()
            .abs_diff(replacement.chars().count());
        if delta > MAX_LENGTH_DELTA {
            tracing::warn!(
                original = %original,
                replacement = %replacement,
                delta,
                "replacement length delta too large, skipping"
            );
            continue;
        }
        if !looks_like_date_range(replacement) {
            tracing::warn!(
                original = %original,
                replacement = %replacement,
                "replacement does not look like a date range, skipping"
            );
            continue;
        }
        active.push((original.as_str(), replacement.as_str()));
    }
    if active.is_empty() {
        return (xml.to_string(), Vec::new());
    }

    let mut output = String::with_capacity(xml.len());
    let mut rest = xml;
    let mut hits = vec![0usize; active.len()];
    loop {
        // Earliest match wins; on a tie the longer original does.
        let mut best: Option<(usize, usize)> = None;
        for (idx, (original, _)) in active.iter().enumerate() {
            if let Some(pos) = rest.find(original) {
                let better = match best {
                    None => true,
                    Some((best_pos, best_idx)) => {
                        pos < best_pos
                            || (pos == best_pos && original.len() > active[best_idx].0.len())
                    }
                };
                if better {
                    best = Some((pos, idx));
                }
            }
        }
        let Some((pos, idx)) = best else {
            output.push_str(rest);
            break;
        };
        let (original, replacement) = active[idx];
        output.push_str(&rest[..pos]);
        output.push_str(replacement);
        hits[idx] += 1;
        rest = &rest[pos + original.len()..];
    }

    let mut applied = Vec::new();
    for (idx, (original, replacement)) in active.iter().enumerate() {
        if hits[idx] > 0 {
            applied.push(original.to_string());
        }
        tracing::debug!(
            original = %original,
            replacement = %replacement,
            occurrences = hits[idx],
            "applied replacement"
        );
    }
    (output, applied)
}
