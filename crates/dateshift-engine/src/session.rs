//! Batch session over one uploaded archive.
//!
//! A session opens every document up front and holds the originally
//! detected ranges for its whole lifetime. Planning writes replacements
//! onto those ranges and is recomputed wholesale from the original
//! dates each time, so re-planning never compounds earlier shifts. One
//! unreadable document never fails the batch; it is carried through
//! with an error status and copied out unchanged.

use std::collections::HashSet;

use chrono::{Datelike, Utc};
use shared_docx::{archive, document};
use shared_types::{
    DetectedRange, DocumentRecord, DocumentStatus, ProcessOutcome, ReplacementPolicy,
};

use crate::detector;
use crate::error::ShiftError;
use crate::planner;
use crate::substitute;

/// One document in the batch with its original bytes and detections.
#[derive(Debug, Clone)]
pub struct SessionDocument {
    pub path: String,
    pub bytes: Vec<u8>,
    pub status: DocumentStatus,
    pub message: String,
    pub ranges: Vec<DetectedRange>,
}

/// Detection and rewrite state for one uploaded archive.
#[derive(Debug)]
pub struct ShiftSession {
    documents: Vec<SessionDocument>,
    default_year: i32,
}

/// Result of processing a session: the output archive plus one outcome
/// per input document.
#[derive(Debug)]
pub struct ProcessOutput {
    pub zip_bytes: Vec<u8>,
    pub outcomes: Vec<ProcessOutcome>,
}

impl ShiftSession {
    /// Open an archive and run detection on every document, defaulting
    /// yearless dates to the current year.
    pub fn open(zip_bytes: &[u8]) -> Result<Self, ShiftError> {
        Self::open_with_default_year(zip_bytes, Utc::now().year())
    }

    pub fn open_with_default_year(zip_bytes: &[u8], default_year: i32) -> Result<Self, ShiftError> {
        let entries = archive::list_documents(zip_bytes)?;
        let mut documents = Vec::with_capacity(entries.len());

        for entry in entries {
            let doc = match document::parse_containers(&entry.bytes) {
                Ok(containers) => {
                    let ranges = detector::detect_ranges(&containers, default_year);
                    let (status, message) = if ranges.is_empty() {
                        (
                            DocumentStatus::Warning,
                            "No date ranges detected".to_string(),
                        )
                    } else {
                        (
                            DocumentStatus::Success,
                            format!("{} date ranges found", ranges.len()),
                        )
                    };
                    tracing::info!(path = %entry.path, ranges = ranges.len(), "scanned document");
                    SessionDocument {
                        path: entry.path,
                        bytes: entry.bytes,
                        status,
                        message,
                        ranges,
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %entry.path, error = %e, "failed to read document");
                    SessionDocument {
                        path: entry.path,
                        bytes: entry.bytes,
                        status: DocumentStatus::Error,
                        message: format!("Error: {e}"),
                        ranges: Vec::new(),
                    }
                }
            };
            documents.push(doc);
        }

        Ok(ShiftSession {
            documents,
            default_year,
        })
    }

    pub fn documents(&self) -> &[SessionDocument] {
        &self.documents
    }

    pub fn default_year(&self) -> i32 {
        self.default_year
    }

    /// Per-document detection records for presentation.
    pub fn records(&self) -> Vec<DocumentRecord> {
        self.documents
            .iter()
            .map(|doc| DocumentRecord {
                path: doc.path.clone(),
                status: doc.status,
                message: doc.message.clone(),
                ranges: doc.ranges.clone(),
            })
            .collect()
    }

    /// Recompute every replacement from the original dates under the
    /// given policy. Each call starts from scratch.
    pub fn plan(&mut self, policy: &ReplacementPolicy) {
        for doc in &mut self.documents {
            let plan = planner::plan_replacements(&doc.ranges, policy);
            planner::apply_plan(&mut doc.ranges, &plan);
        }
    }

    /// Override the replacement for one expression across the whole
    /// batch. Later `plan` calls discard the override.
    pub fn set_replacement(&mut self, original_text: &str, replacement: &str) {
        for doc in &mut self.documents {
            for range in &mut doc.ranges {
                if range.original_text == original_text {
                    range.replacement = Some(replacement.to_string());
                }
            }
        }
    }

    /// Summary of planned edits: unique (original, replacement) pairs
    /// that actually change text, in first-seen order.
    pub fn changes(&self) -> Vec<(String, String)> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut changes = Vec::new();
        for doc in &self.documents {
            for range in &doc.ranges {
                let Some(replacement) = &range.replacement else {
                    continue;
                };
                if replacement == &range.original_text {
                    continue;
                }
                if seen.insert(&range.original_text) {
                    changes.push((range.original_text.clone(), replacement.clone()));
                }
            }
        }
        changes
    }

    /// Rewrite every document and pack the results into a new archive.
    /// Always emits one output entry and one outcome per input
    /// document; documents that cannot be rewritten are copied out
    /// unchanged.
    pub fn process(&self) -> Result<ProcessOutput, ShiftError> {
        let mut builder = archive::ArchiveBuilder::new();
        let mut outcomes = Vec::with_capacity(self.documents.len());

        for doc in &self.documents {
            let table = substitute::build_replacement_table(&doc.ranges);
            let outcome = if doc.ranges.is_empty() {
                builder
                    .add_entry(&doc.path, &doc.bytes)
                    .map_err(|e| ShiftError::OutputArchive(e.to_string()))?;
                ProcessOutcome {
                    path: doc.path.clone(),
                    status: DocumentStatus::Warning,
                    message: "No date ranges found, file unchanged".to_string(),
                }
            } else if table.is_empty() {
                // Ranges exist but nothing is planned to change.
                builder
                    .add_entry(&doc.path, &doc.bytes)
                    .map_err(|e| ShiftError::OutputArchive(e.to_string()))?;
                ProcessOutcome {
                    path: doc.path.clone(),
                    status: DocumentStatus::Success,
                    message: format!("Updated 0 of {} date range(s)", doc.ranges.len()),
                }
            } else {
                match rewrite_document(&doc.bytes, &table) {
                    Ok((rewritten, applied)) => {
                        builder
                            .add_entry(&doc.path, &rewritten)
                            .map_err(|e| ShiftError::OutputArchive(e.to_string()))?;
                        // Occurrence counts, not unique-expression counts.
                        let changed = doc
                            .ranges
                            .iter()
                            .filter(|r| applied.contains(&r.original_text))
                            .count();
                        tracing::info!(
                            path = %doc.path,
                            changed,
                            total = doc.ranges.len(),
                            "rewrote document"
                        );
                        ProcessOutcome {
                            path: doc.path.clone(),
                            status: DocumentStatus::Success,
                            message: format!(
                                "Updated {} of {} date range(s)",
                                changed,
                                doc.ranges.len()
                            ),
                        }
                    }
                    Err(e) => {
                        tracing::warn!(path = %doc.path, error = %e, "rewrite failed");
                        builder
                            .add_entry(&doc.path, &doc.bytes)
                            .map_err(|err| ShiftError::OutputArchive(err.to_string()))?;
                        ProcessOutcome {
                            path: doc.path.clone(),
                            status: DocumentStatus::Error,
                            message: format!("Error: {e}, file unchanged"),
                        }
                    }
                }
            };
            outcomes.push(outcome);
        }

        let zip_bytes = builder
            .finish()
            .map_err(|e| ShiftError::OutputArchive(e.to_string()))?;
        Ok(ProcessOutput { zip_bytes, outcomes })
    }
}

fn rewrite_document(
    bytes: &[u8],
    table: &[(String, String)],
) -> Result<(Vec<u8>, Vec<String>), shared_docx::DocxError> {
    let xml = document::read_document_xml(bytes)?;
    let (rewritten, applied) = substitute::apply_replacements(&xml, table);
    let out = document::replace_document_xml(bytes, &rewritten)?;
    Ok((out, applied))
}
