//! End-to-end pipeline tests over in-memory archives
//!
//! Runs the full open -> detect -> plan -> process flow against the
//! built-in sample documents and hand-built edge-case archives.

use chrono::NaiveDate;
use dateshift_engine::{ShiftError, ShiftSession};
use shared_docx::sample::{build_docx, build_sample_archive, sample_weeks_body};
use shared_docx::{archive::ArchiveBuilder, document};
use shared_types::{DocumentStatus, ReplacementPolicy};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn zip_of(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = ArchiveBuilder::new();
    for (path, bytes) in entries {
        builder.add_entry(path, bytes).unwrap();
    }
    builder.finish().unwrap()
}

#[test]
fn set_start_rewrites_the_week_list() {
    let zip = build_sample_archive().unwrap();
    let mut session = ShiftSession::open_with_default_year(&zip, 2025).unwrap();
    session.plan(&ReplacementPolicy::SetStart {
        start: ymd(2025, 10, 1),
    });
    let output = session.process().unwrap();
    assert_eq!(output.outcomes.len(), 2);
    for outcome in &output.outcomes {
        assert_eq!(outcome.status, DocumentStatus::Success, "{}", outcome.message);
    }

    let docs = shared_docx::archive::list_documents(&output.zip_bytes).unwrap();
    let weeks = docs
        .iter()
        .find(|d| d.path == "test-document-2.docx")
        .unwrap();
    let xml = document::read_document_xml(&weeks.bytes).unwrap();
    assert!(xml.contains("Week 1: 01/10/2025 - 07/10/2025"), "{xml}");
    assert!(xml.contains("Week 2: 08/10/2025 - 14/10/2025"), "{xml}");
    assert!(!xml.contains("15/09/2025"));
}

#[test]
fn weekly_shift_moves_adjacent_ranges_independently() {
    let zip = build_sample_archive().unwrap();
    let mut session = ShiftSession::open_with_default_year(&zip, 2025).unwrap();
    session.plan(&ReplacementPolicy::Shift {
        months: 0,
        weeks: 1,
        days: 0,
    });
    let output = session.process().unwrap();

    let docs = shared_docx::archive::list_documents(&output.zip_bytes).unwrap();
    let schedule = docs
        .iter()
        .find(|d| d.path == "sample-schedule.docx")
        .unwrap();
    let xml = document::read_document_xml(&schedule.bytes).unwrap();
    // Each week lands exactly one week later; the week that was
    // already "13/9-19/9" must not be shifted twice.
    assert!(xml.contains("13/9-19/9"));
    assert!(xml.contains("20/9-26/9"));
    assert!(xml.contains("27/9-3/10"));
    assert!(xml.contains("4/10-10/10"));
    assert!(!xml.contains("6/9-12/9"));
}

#[test]
fn month_shift_crosses_year_boundary() {
    let docx = build_docx(r#"<w:p><w:r><w:t>Final week: 29/12/2025 - 04/01/2026</w:t></w:r></w:p>"#)
        .unwrap();
    let zip = zip_of(&[("schedule.docx", &docx)]);
    let mut session = ShiftSession::open_with_default_year(&zip, 2025).unwrap();
    session.plan(&ReplacementPolicy::Shift {
        months: 2,
        weeks: 0,
        days: 0,
    });
    let output = session.process().unwrap();
    let docs = shared_docx::archive::list_documents(&output.zip_bytes).unwrap();
    let xml = document::read_document_xml(&docs[0].bytes).unwrap();
    assert!(xml.contains("28/02/2026 - 04/03/2026"), "{xml}");
}

#[test]
fn document_without_ranges_is_copied_unchanged() {
    let plain = build_docx(r#"<w:p><w:r><w:t>Meeting notes, no dates here</w:t></w:r></w:p>"#)
        .unwrap();
    let dated = build_docx(&sample_weeks_body()).unwrap();
    let zip = zip_of(&[("plain.docx", &plain), ("weeks.docx", &dated)]);

    let mut session = ShiftSession::open_with_default_year(&zip, 2025).unwrap();
    assert_eq!(session.documents()[0].status, DocumentStatus::Warning);
    assert_eq!(session.documents()[1].status, DocumentStatus::Success);

    session.plan(&ReplacementPolicy::Shift {
        months: 0,
        weeks: 1,
        days: 0,
    });
    let output = session.process().unwrap();
    assert_eq!(output.outcomes[0].status, DocumentStatus::Warning);
    assert_eq!(
        output.outcomes[0].message,
        "No date ranges found, file unchanged"
    );
    assert_eq!(output.outcomes[1].status, DocumentStatus::Success);

    let docs = shared_docx::archive::list_documents(&output.zip_bytes).unwrap();
    assert_eq!(docs[0].bytes, plain);
}

#[test]
fn unreadable_document_reports_error_and_batch_continues() {
    let dated = build_docx(&sample_weeks_body()).unwrap();
    let zip = zip_of(&[("broken.docx", b"not a docx"), ("weeks.docx", &dated)]);

    let mut session = ShiftSession::open_with_default_year(&zip, 2025).unwrap();
    assert_eq!(session.documents()[0].status, DocumentStatus::Error);
    assert!(session.documents()[0].message.starts_with("Error: "));
    assert!(session.documents()[0].ranges.is_empty());

    session.plan(&ReplacementPolicy::Shift {
        months: 0,
        weeks: 1,
        days: 0,
    });
    let output = session.process().unwrap();
    assert_eq!(output.outcomes.len(), 2);
    let docs = shared_docx::archive::list_documents(&output.zip_bytes).unwrap();
    assert_eq!(docs[0].bytes, b"not a docx");
}

#[test]
fn empty_archive_and_garbage_input_are_fatal() {
    assert!(matches!(
        ShiftSession::open_with_default_year(b"garbage", 2025),
        Err(ShiftError::InvalidArchive(_))
    ));

    let no_docs = zip_of(&[("readme.txt", b"hello")]);
    assert!(matches!(
        ShiftSession::open_with_default_year(&no_docs, 2025),
        Err(ShiftError::NoDocumentsFound)
    ));
}

#[test]
fn manual_override_is_applied_verbatim_when_it_still_looks_like_a_range() {
    let docx = build_docx(r#"<w:p><w:r><w:t>Week 1: 6/9-12/9</w:t></w:r></w:p>"#).unwrap();
    let zip = zip_of(&[("schedule.docx", &docx)]);
    let mut session = ShiftSession::open_with_default_year(&zip, 2025).unwrap();
    session.set_replacement("6/9-12/9", "1/11-7/11");
    let output = session.process().unwrap();
    let docs = shared_docx::archive::list_documents(&output.zip_bytes).unwrap();
    let xml = document::read_document_xml(&docs[0].bytes).unwrap();
    assert!(xml.contains("Week 1: 1/11-7/11"));
}

#[test]
fn malformed_manual_override_is_rejected_and_document_kept() {
    let docx = build_docx(r#"<w:p><w:r><w:t>Week 1: 6/9-12/9</w:t></w:r></w:p>"#).unwrap();
    let zip = zip_of(&[("schedule.docx", &docx)]);
    let mut session = ShiftSession::open_with_default_year(&zip, 2025).unwrap();
    session.set_replacement("6/9-12/9", "whenever works");
    let output = session.process().unwrap();
    let docs = shared_docx::archive::list_documents(&output.zip_bytes).unwrap();
    let xml = document::read_document_xml(&docs[0].bytes).unwrap();
    assert!(xml.contains("6/9-12/9"));
    assert!(!xml.contains("whenever works"));
}
