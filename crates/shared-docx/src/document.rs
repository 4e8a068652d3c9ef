//! DOCX entry access: `word/document.xml` extraction and
//! entry-preserving replacement.

use std::io::{Cursor, Read};

use zip::ZipArchive;

use shared_types::TextContainer;

use crate::archive::ArchiveBuilder;
use crate::containers::containers_from_xml;
use crate::error::DocxError;

const DOCUMENT_XML: &str = "word/document.xml";

/// Read the raw markup of a document's main part as text.
///
/// Decoding is lossy on purpose: a stray invalid byte should not fail
/// the document, and substitution only ever touches matched date text.
pub fn read_document_xml(docx_bytes: &[u8]) -> Result<String, DocxError> {
    let mut archive = ZipArchive::new(Cursor::new(docx_bytes))
        .map_err(|e| DocxError::InvalidArchive(e.to_string()))?;
    let mut entry = archive
        .by_name(DOCUMENT_XML)
        .map_err(|_| DocxError::MissingDocumentXml)?;
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse one document's markup into its ordered container list.
pub fn parse_containers(docx_bytes: &[u8]) -> Result<Vec<TextContainer>, DocxError> {
    let xml = read_document_xml(docx_bytes)?;
    containers_from_xml(&xml)
}

/// Re-encode a document with `word/document.xml` replaced and every
/// other entry carried over byte-identical, in the original entry order.
pub fn replace_document_xml(docx_bytes: &[u8], new_xml: &str) -> Result<Vec<u8>, DocxError> {
    let mut archive = ZipArchive::new(Cursor::new(docx_bytes))
        .map_err(|e| DocxError::InvalidArchive(e.to_string()))?;

    let mut builder = ArchiveBuilder::new();
    let mut found = false;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| DocxError::InvalidArchive(e.to_string()))?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();
        if name == DOCUMENT_XML {
            builder.add_entry(&name, new_xml.as_bytes())?;
            found = true;
        } else {
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes)?;
            builder.add_entry(&name, &bytes)?;
        }
    }

    if !found {
        return Err(DocxError::MissingDocumentXml);
    }
    builder.finish()
}
