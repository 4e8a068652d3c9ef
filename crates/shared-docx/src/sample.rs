//! Minimal in-memory sample documents for testing and the sample
//! download endpoint. Mirrors the sample archive the original tool
//! offered: one Arabic weekly schedule table and one English week list.

use crate::archive::ArchiveBuilder;
use crate::error::DocxError;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
</Relationships>"#;

/// Wrap a `w:body` fragment into a complete single-part DOCX.
pub fn build_docx(body: &str) -> Result<Vec<u8>, DocxError> {
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:body>
{body}
    </w:body>
</w:document>"#
    );

    let mut builder = ArchiveBuilder::new();
    builder.add_entry("[Content_Types].xml", CONTENT_TYPES.as_bytes())?;
    builder.add_entry("_rels/.rels", ROOT_RELS.as_bytes())?;
    builder.add_entry("word/_rels/document.xml.rels", DOCUMENT_RELS.as_bytes())?;
    builder.add_entry("word/document.xml", document.as_bytes())?;
    builder.finish()
}

fn table_row(label: &str, dates: &str, note: &str) -> String {
    format!(
        "<w:tr>\
<w:tc><w:p><w:r><w:t>{label}</w:t></w:r></w:p></w:tc>\
<w:tc><w:p><w:r><w:t>{dates}</w:t></w:r></w:p></w:tc>\
<w:tc><w:p><w:r><w:t>{note}</w:t></w:r></w:p></w:tc>\
</w:tr>"
    )
}

/// The Arabic weekly schedule table (yearless `D/M-D/M` expressions).
pub fn sample_schedule_body() -> String {
    let rows = [
        table_row("الأسبوع الأول", "6/9-12/9", "سورة المرسلات"),
        table_row("الأسبوع الثاني", "13/9-19/9", "سورة المجادلة"),
        table_row("الأسبوع الثالث", "20/9-26/9", "سورة الحشر"),
        table_row("الأسبوع الرابع", "27/9-3/10", "سورة الممتحنة"),
    ]
    .join("\n");
    format!(
        "<w:p><w:r><w:t>جدول الأسابيع - Sample Weekly Schedule</w:t></w:r></w:p>\n\
<w:tbl>\n{rows}\n</w:tbl>\n\
<w:p><w:r><w:t>Additional test ranges: 15/9-21/9 and 22/9-28/9</w:t></w:r></w:p>"
    )
}

/// The English week list (yearful numeric and month-name expressions).
pub fn sample_weeks_body() -> String {
    [
        "Test Document 2 - Monthly Schedule",
        "Week 1: 15/09/2025 - 21/09/2025",
        "Week 2: 22/09/2025 - 28/09/2025",
        "Week 3: 29 Sep - 5 Oct",
        "Week 4: 6 Oct - 12 Oct",
    ]
    .iter()
    .map(|line| format!("<w:p><w:r><w:t>{line}</w:t></w:r></w:p>"))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Build the downloadable sample archive with both documents.
pub fn build_sample_archive() -> Result<Vec<u8>, DocxError> {
    let mut builder = ArchiveBuilder::new();
    builder.add_entry("sample-schedule.docx", &build_docx(&sample_schedule_body())?)?;
    builder.add_entry("test-document-2.docx", &build_docx(&sample_weeks_body())?)?;
    builder.finish()
}
