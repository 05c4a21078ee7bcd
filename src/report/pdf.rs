//! PDF rendering of a check report.
//!
//! Builds the document from scratch: one shared resource dictionary
//! (Helvetica for the body, Courier for the transcript), one content
//! stream per page, automatic page breaks at a fixed bottom margin.

use chrono::NaiveDateTime;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};

use super::pretty::{pretty_print_xml, wrap_line};
use crate::core::{CheckError, SoapTranscript, VatCheckResult, VatQuery};

// A4 portrait in points, integer precision is plenty for a text report.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 50;

const TITLE_SIZE: i64 = 14;
const BODY_SIZE: i64 = 11;
const MONO_SIZE: i64 = 8;
const BODY_LEADING: i64 = 16;
const MONO_LEADING: i64 = 10;

/// Column width for the transcript section.
const LOG_COLUMNS: usize = 80;

const TITLE: &str = "VIES VAT Number Check Report";

#[derive(Clone, Copy)]
enum Font {
    Body,
    Bold,
    Mono,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Body => "F1",
            Font::Bold => "F2",
            Font::Mono => "F3",
        }
    }
}

struct Line {
    x: i64,
    y: i64,
    size: i64,
    font: Font,
    text: String,
}

/// Cursor-driven page layout. `push` places one baseline and breaks the
/// page when the cursor would pass the bottom margin.
struct Layout {
    pages: Vec<Vec<Line>>,
    current: Vec<Line>,
    y: i64,
}

impl Layout {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn push(&mut self, font: Font, size: i64, leading: i64, x: i64, text: String) {
        if self.y - leading < MARGIN {
            self.pages.push(std::mem::take(&mut self.current));
            self.y = PAGE_HEIGHT - MARGIN;
        }
        self.y -= leading;
        self.current.push(Line {
            x,
            y: self.y,
            size,
            font,
            text,
        });
    }

    /// Vertical whitespace; collapses silently at a page boundary.
    fn gap(&mut self, leading: i64) {
        self.y -= leading;
    }

    fn finish(mut self) -> Vec<Vec<Line>> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

/// Approximate centering for Helvetica; exact metrics are overkill for a
/// single static title line.
fn centered_x(text: &str, size: i64) -> i64 {
    let approx_width = text.chars().count() as i64 * size / 2;
    ((PAGE_WIDTH - approx_width) / 2).max(MARGIN)
}

/// Render the complete check report as PDF bytes.
///
/// Pure: the check timestamp is passed in by the caller, and no I/O
/// happens here.
pub fn render_report(
    query: &VatQuery,
    result: &VatCheckResult,
    transcript: &SoapTranscript,
    checked_at: NaiveDateTime,
) -> Result<Vec<u8>, CheckError> {
    let mut layout = Layout::new();

    layout.push(
        Font::Bold,
        TITLE_SIZE,
        BODY_LEADING + 4,
        centered_x(TITLE, TITLE_SIZE),
        TITLE.to_string(),
    );
    layout.gap(BODY_LEADING / 2);

    let status = if result.valid { "Active" } else { "Not active" };
    for line in [
        format!("Check date: {}", checked_at.format("%Y-%m-%d %H:%M:%S")),
        format!("Country code: {}", query.country_code),
        format!("VAT number: {}", query.vat_number),
        format!("Status: {status}"),
    ] {
        layout.push(Font::Body, BODY_SIZE, BODY_LEADING, MARGIN, line);
    }

    layout.gap(BODY_LEADING / 2);
    for line in result
        .status_message
        .lines()
        .filter(|l| !l.trim().is_empty())
    {
        layout.push(Font::Body, BODY_SIZE, BODY_LEADING, MARGIN, line.to_string());
    }

    layout.gap(BODY_LEADING);
    layout.push(
        Font::Bold,
        BODY_SIZE + 1,
        BODY_LEADING,
        MARGIN,
        "API Communication Log".to_string(),
    );

    let sections = [
        ("Request:", &transcript.request_xml),
        ("Response:", &transcript.response_xml),
    ];
    for (label, xml) in sections {
        layout.gap(MONO_LEADING / 2);
        layout.push(Font::Body, BODY_SIZE, BODY_LEADING, MARGIN, label.to_string());
        for pretty_line in pretty_print_xml(xml).lines() {
            for piece in wrap_line(pretty_line, LOG_COLUMNS) {
                layout.push(Font::Mono, MONO_SIZE, MONO_LEADING, MARGIN, piece);
            }
        }
    }

    build_document(layout.finish())
}

fn build_document(pages: Vec<Vec<Line>>) -> Result<Vec<u8>, CheckError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let helvetica = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let helvetica_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let courier = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => helvetica,
            "F2" => helvetica_bold,
            "F3" => courier,
        },
    });

    let page_count = pages.len() as i64;
    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for lines in &pages {
        let content = Content {
            operations: operations_for(lines),
        };
        let encoded = content
            .encode()
            .map_err(|e| CheckError::Render(format!("content stream: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| CheckError::Render(format!("failed to save PDF: {e}")))?;
    Ok(out)
}

fn operations_for(lines: &[Line]) -> Vec<Operation> {
    let mut ops = Vec::with_capacity(lines.len() * 5);
    for line in lines {
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![line.font.resource().into(), line.size.into()],
        ));
        ops.push(Operation::new("Td", vec![line.x.into(), line.y.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(latin1(&line.text), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
    }
    ops
}

/// WinAnsi is a Latin-1 superset; anything outside it renders as `?`.
fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let cp = c as u32;
            if cp < 256 { cp as u8 } else { b'?' }
        })
        .collect()
}
