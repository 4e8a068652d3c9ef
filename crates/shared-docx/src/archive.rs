//! ZIP archive enumeration and building.
//!
//! Input archives are read fully into memory as ordered (path, bytes)
//! entries; output archives are appended one named entry at a time with
//! DEFLATE at a fixed level so re-encoding is reproducible.

use std::io::{Cursor, Read, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::DocxError;

/// Fixed DEFLATE level for all written entries.
const COMPRESSION_LEVEL: i64 = 6;

/// One named archive entry with its raw bytes.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub path: String,
    pub bytes: Vec<u8>,
}

/// Enumerate the `.docx` entries of an uploaded ZIP in archive order.
///
/// macOS resource-fork entries (`__MACOSX/`) are skipped. An archive
/// that cannot be opened is `InvalidArchive`; an archive with no
/// matching entries is `NoDocumentsFound` — both fatal to the batch.
pub fn list_documents(zip_bytes: &[u8]) -> Result<Vec<ArchiveEntry>, DocxError> {
    let mut archive = ZipArchive::new(Cursor::new(zip_bytes))
        .map_err(|e| DocxError::InvalidArchive(e.to_string()))?;

    let mut documents = Vec::new();
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| DocxError::InvalidArchive(e.to_string()))?;
        let path = entry.name().to_string();
        if entry.is_dir() {
            continue;
        }
        if !path.to_lowercase().ends_with(".docx") || path.starts_with("__MACOSX/") {
            continue;
        }
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes)?;
        documents.push(ArchiveEntry { path, bytes });
    }

    if documents.is_empty() {
        return Err(DocxError::NoDocumentsFound);
    }
    Ok(documents)
}

/// Append-only builder for the output archive: one named entry per
/// input document, written in processing order.
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    pub fn add_entry(&mut self, path: &str, bytes: &[u8]) -> Result<(), DocxError> {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(COMPRESSION_LEVEL));
        self.writer
            .start_file(path, options)
            .map_err(|e| DocxError::InvalidArchive(e.to_string()))?;
        self.writer.write_all(bytes)?;
        Ok(())
    }

    pub fn finish(self) -> Result<Vec<u8>, DocxError> {
        let cursor = self
            .writer
            .finish()
            .map_err(|e| DocxError::InvalidArchive(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}
