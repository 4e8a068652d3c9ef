use chrono::NaiveDate;

/// Which pattern family produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PatternKind {
    Numeric,
    MonthName,
}

/// One text-bearing structural unit of a document (paragraph or table
/// cell), exposing its text runs in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextContainer {
    pub runs: Vec<String>,
}

impl TextContainer {
    /// Concatenate all run text in order into one flattened string.
    pub fn flattened_text(&self) -> String {
        self.runs.concat()
    }
}

/// One recognized date-range occurrence inside a document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DetectedRange {
    /// The exact matched substring.
    pub original_text: String,
    /// Byte offset of the match in the container's flattened text.
    pub start_index: usize,
    pub end_index: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub pattern: PatternKind,
    /// Position of the owning container within the document.
    pub container_index: usize,
    /// Computed (or manually overridden) replacement text. Absent until
    /// the planner runs; equal to `original_text` when nothing changes.
    pub replacement: Option<String>,
}

impl DetectedRange {
    /// Distinguishes same-text occurrences in different locations.
    pub fn unique_key(&self) -> (String, usize, usize) {
        (
            self.original_text.clone(),
            self.container_index,
            self.start_index,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Success,
    Warning,
    Error,
}

/// Per-document detection record, for display and outcome reporting.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DocumentRecord {
    /// Archive-relative path of the `.docx` entry.
    pub path: String,
    pub status: DocumentStatus,
    pub message: String,
    pub ranges: Vec<DetectedRange>,
}

/// The user-selected date-shifting rule. Exactly one policy is active at
/// a time; switching recomputes every replacement from original dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ReplacementPolicy {
    /// Reassign the n-th chronologically-ordered unique expression to
    /// begin `start + 7n` days, preserving each expression's duration.
    SetStart { start: NaiveDate },
    /// Add calendar months, then weeks, then days to both ends of every
    /// unique expression.
    Shift { months: i32, weeks: i64, days: i64 },
}

impl ReplacementPolicy {
    /// A policy with no effective parameters leaves all text unchanged.
    pub fn is_noop(&self) -> bool {
        matches!(
            self,
            ReplacementPolicy::Shift {
                months: 0,
                weeks: 0,
                days: 0
            }
        )
    }
}

/// Outcome of rewriting one document into the output archive.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProcessOutcome {
    pub path: String,
    pub status: DocumentStatus,
    pub message: String,
}
