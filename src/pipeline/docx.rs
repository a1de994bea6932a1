//! Word-processor decoding: raw text out of an OOXML package.
//!
//! Formatting is discarded. Each paragraph becomes one line, a run-level
//! break starts a new line, and table cells are emitted one paragraph per
//! line in row order. Heading styles are not looked at; section detection
//! works on the heading words alone.

use crate::error::ResumeParseError;
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use tracing::debug;

/// Decode a `.docx` (or OOXML `.doc`) package to flat text.
pub fn decode_docx(bytes: &[u8]) -> Result<String, ResumeParseError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ResumeParseError::CorruptDocument {
        detail: e.to_string(),
    })?;

    let mut lines: Vec<String> = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => lines.push(paragraph_text(p)),
            DocumentChild::Table(t) => table_lines(t, &mut lines),
            _ => {}
        }
    }

    debug!("DOCX decoded: {} lines", lines.len());
    Ok(lines.join("\n"))
}

fn paragraph_text(p: &Paragraph) -> String {
    let mut text = String::new();
    for child in &p.children {
        push_paragraph_child(child, &mut text);
    }
    text
}

fn push_paragraph_child(child: &ParagraphChild, text: &mut String) {
    match child {
        ParagraphChild::Run(r) => {
            for run_child in &r.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push(' '),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
        // Hyperlink runs carry the visible text, e.g. a LinkedIn URL or mailto.
        ParagraphChild::Hyperlink(h) => {
            for inner in &h.children {
                push_paragraph_child(inner, text);
            }
        }
        _ => {}
    }
}

fn table_lines(t: &Table, lines: &mut Vec<String>) {
    for row in &t.rows {
        let TableChild::TableRow(r) = row;
        for cell in &r.cells {
            let TableRowChild::TableCell(c) = cell;
            for content in &c.children {
                if let TableCellContent::Paragraph(p) = content {
                    let cell_text = paragraph_text(p);
                    if !cell_text.trim().is_empty() {
                        lines.push(cell_text);
                    }
                }
            }
        }
    }
}
