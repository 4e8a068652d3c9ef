//! Streaming parse of `word/document.xml` into text containers.
//!
//! Containers are the text-bearing structural units the range detector
//! walks: paragraphs (`w:p`) and table cells (`w:tc`), each exposing the
//! literal text of its `w:t` runs in order. Paragraphs nested inside a
//! cell contribute their runs to both the paragraph container and the
//! enclosing cell container, so the container list is all paragraphs in
//! document order followed by all cells in document order.

use quick_xml::events::Event;
use quick_xml::Reader;

use shared_types::TextContainer;

use crate::error::DocxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKind {
    Paragraph,
    Cell,
}

struct Frame {
    kind: FrameKind,
    /// Position of this element's start tag among its kind, so cells
    /// come out in document order even though nested cells close first.
    seq: usize,
    runs: Vec<String>,
}

/// Parse document markup into the ordered container list.
///
/// A structural parse failure (ill-formed XML) is reported as
/// `MalformedDocument`; the caller marks the whole document as an error
/// and moves on to the next one.
pub fn containers_from_xml(xml: &str) -> Result<Vec<TextContainer>, DocxError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<TextContainer> = Vec::new();
    let mut cells: Vec<(usize, TextContainer)> = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();
    let mut cell_seq = 0;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => frames.push(Frame {
                    kind: FrameKind::Paragraph,
                    seq: 0,
                    runs: Vec::new(),
                }),
                b"w:tc" => {
                    frames.push(Frame {
                        kind: FrameKind::Cell,
                        seq: cell_seq,
                        runs: Vec::new(),
                    });
                    cell_seq += 1;
                }
                b"w:t" => {
                    in_text = true;
                    for frame in frames.iter_mut() {
                        frame.runs.push(String::new());
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                // Self-closing <w:t/> still counts as an (empty) run.
                if e.name().as_ref() == b"w:t" {
                    for frame in frames.iter_mut() {
                        frame.runs.push(String::new());
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if in_text {
                    let text = e
                        .unescape()
                        .map_err(|e| DocxError::MalformedDocument(e.to_string()))?;
                    for frame in frames.iter_mut() {
                        if let Some(run) = frame.runs.last_mut() {
                            run.push_str(&text);
                        }
                    }
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" | b"w:tc" => {
                    if let Some(frame) = frames.pop() {
                        let container = TextContainer { runs: frame.runs };
                        match frame.kind {
                            FrameKind::Paragraph => paragraphs.push(container),
                            FrameKind::Cell => cells.push((frame.seq, container)),
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(DocxError::MalformedDocument(e.to_string())),
        }
    }

    cells.sort_by_key(|(seq, _)| *seq);
    paragraphs.extend(cells.into_iter().map(|(_, container)| container));
    Ok(paragraphs)
}
