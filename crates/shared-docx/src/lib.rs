//! Shared DOCX handling utilities
//!
//! This crate provides the archive and markup boundary for the date
//! shifter: ZIP enumeration and re-encoding, `word/document.xml`
//! extraction and entry-preserving replacement, and the parse of
//! document markup into ordered text containers.

pub mod archive;
pub mod containers;
pub mod document;
pub mod error;
pub mod sample;

pub use archive::{ArchiveBuilder, ArchiveEntry};
pub use document::{parse_containers, read_document_xml, replace_document_xml};
pub use error::DocxError;
