//! Per-document range detection across structural containers.

use std::collections::HashSet;

use shared_types::{DetectedRange, TextContainer};

use crate::patterns;

/// Walk a document's containers in order, match date ranges in each
/// container's flattened text, and return the deduplicated occurrence
/// list in reading order (container index, then offset).
///
/// Two occurrences are distinct when they differ in text, container, or
/// offset; the same span reported by overlapping pattern families
/// collapses to one occurrence.
pub fn detect_ranges(containers: &[TextContainer], default_year: i32) -> Vec<DetectedRange> {
    let mut seen: HashSet<(String, usize, usize)> = HashSet::new();
    let mut ranges = Vec::new();

    for (container_index, container) in containers.iter().enumerate() {
        let text = container.flattened_text();
        if text.trim().is_empty() {
            continue;
        }
        for found in patterns::find_date_ranges(&text, default_year) {
            let key = (found.original_text.clone(), container_index, found.start);
            if !seen.insert(key) {
                continue;
            }
            ranges.push(DetectedRange {
                original_text: found.original_text,
                start_index: found.start,
                end_index: found.end,
                start_date: found.start_date,
                end_date: found.end_date,
                pattern: found.kind,
                container_index,
                replacement: None,
            });
        }
    }

    ranges.sort_by_key(|range| (range.container_index, range.start_index));
    ranges
}
