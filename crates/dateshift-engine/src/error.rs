use shared_docx::DocxError;
use thiserror::Error;

/// Batch-level failures. Anything that goes wrong inside one document is
/// recorded on that document and never surfaces here.
#[derive(Debug, Error)]
pub enum ShiftError {
    #[error("Not a readable ZIP archive: {0}")]
    InvalidArchive(String),

    #[error("No .docx documents found in the archive")]
    NoDocumentsFound,

    #[error("Failed to build output archive: {0}")]
    OutputArchive(String),
}

impl From<DocxError> for ShiftError {
    fn from(err: DocxError) -> Self {
        match err {
            DocxError::InvalidArchive(msg) => ShiftError::InvalidArchive(msg),
            DocxError::NoDocumentsFound => ShiftError::NoDocumentsFound,
            other => ShiftError::OutputArchive(other.to_string()),
        }
    }
}
