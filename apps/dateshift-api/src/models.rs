//! Request and response models for DateShift API

use serde::{Deserialize, Serialize};
use shared_types::{DocumentRecord, ProcessOutcome, ReplacementPolicy};

/// A manual replacement override for one expression, applied after the
/// policy computation to every occurrence of that text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacementOverride {
    pub original_text: String,
    pub replacement: String,
}

/// Scan an uploaded archive and report detected ranges. When a policy
/// is supplied the computed replacements are included in the records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectRequest {
    pub zip_base64: String,
    #[serde(default)]
    pub policy: Option<ReplacementPolicy>,
    /// Year assumed for yearless dates; defaults to the current year.
    #[serde(default)]
    pub default_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectResponse {
    pub documents: Vec<DocumentRecord>,
}

/// Rewrite an uploaded archive under a policy, with optional manual
/// overrides, and return the modified archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub zip_base64: String,
    pub policy: ReplacementPolicy,
    #[serde(default)]
    pub overrides: Vec<ReplacementOverride>,
    #[serde(default)]
    pub default_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub zip_base64: String,
    pub outcomes: Vec<ProcessOutcome>,
    /// Unique (original, replacement) pairs that were planned.
    pub changes: Vec<ChangeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub original_text: String,
    pub replacement: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleResponse {
    pub zip_base64: String,
    pub file_name: String,
}
