use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("Not a readable ZIP archive: {0}")]
    InvalidArchive(String),

    #[error("No .docx documents found in the archive")]
    NoDocumentsFound,

    #[error("Missing word/document.xml entry")]
    MissingDocumentXml,

    #[error("Failed to parse document XML: {0}")]
    MalformedDocument(String),

    #[error("Archive I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
