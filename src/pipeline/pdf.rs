//! PDF decoding: read the text layer of selected pages via pdfium.
//!
//! Pages are read strictly in ascending order and concatenated with `\n`,
//! because the heuristics downstream assume reading order ("the first line is
//! the name"). Within a page, pdfium reports the text layer line by line;
//! fragments on one line are joined with single spaces. Images, paths and
//! other non-text page objects never reach the output.
//!
//! pdfium calls are blocking and serialised by the engine; the async entry
//! points move the whole parse onto `spawn_blocking` instead of wrapping each
//! call here.

use crate::config::ParseConfig;
use crate::engine;
use crate::error::ResumeParseError;
use pdfium_render::prelude::*;
use tracing::{debug, info};

/// Decode a PDF to flat text.
pub fn decode_pdf(bytes: &[u8], config: &ParseConfig) -> Result<String, ResumeParseError> {
    let pdfium = engine::pdfium()?;
    let password = config.password.as_deref();

    let document = pdfium
        .load_pdf_from_byte_slice(bytes, password)
        .map_err(|e| {
            let err_str = format!("{:?}", e);
            if err_str.contains("Password") || err_str.contains("password") {
                if password.is_some() {
                    ResumeParseError::WrongPassword
                } else {
                    ResumeParseError::PasswordRequired
                }
            } else {
                ResumeParseError::CorruptPdf { detail: err_str }
            }
        })?;

    let pages = document.pages();
    let total_pages = pages.len() as usize;
    info!("PDF loaded: {} pages", total_pages);

    let page_indices = config.pages.to_indices(total_pages);
    if page_indices.is_empty() {
        return Err(ResumeParseError::PageOutOfRange {
            page: 0,
            total: total_pages,
        });
    }

    let mut page_texts = Vec::with_capacity(page_indices.len());
    for (n, &idx) in page_indices.iter().enumerate() {
        let page = pages
            .get(idx as u16)
            .map_err(|e| ResumeParseError::PageTextFailed {
                page: idx + 1,
                detail: format!("{:?}", e),
            })?;

        let text = page
            .text()
            .map_err(|e| ResumeParseError::PageTextFailed {
                page: idx + 1,
                detail: format!("{:?}", e),
            })?
            .all();

        let page_text = join_page_fragments(&text);
        debug!("Page {} → {} chars of text", idx + 1, page_text.len());

        if let Some(ref cb) = config.progress_callback {
            cb.on_page_decoded(n + 1, page_indices.len(), page_text.len());
        }
        page_texts.push(page_text);
    }

    Ok(join_pages(&page_texts))
}

/// Join the fragments of one page: every line's whitespace runs become a
/// single space, line breaks are kept.
pub fn join_page_fragments(raw: &str) -> String {
    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Concatenate pages in order, one newline between consecutive pages.
pub fn join_pages(pages: &[String]) -> String {
    pages.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_on_a_line_join_with_single_spaces() {
        let raw = "Jane   Doe\r\n  jane.doe@example.com \r\nSpringfield,\tIL";
        assert_eq!(
            join_page_fragments(raw),
            "Jane Doe\njane.doe@example.com\nSpringfield, IL"
        );
    }

    #[test]
    fn pages_join_in_order_with_newline() {
        let pages = vec!["Jane Doe".to_string(), "Education\n2019".to_string()];
        assert_eq!(join_pages(&pages), "Jane Doe\nEducation\n2019");
    }

    #[test]
    fn empty_page_still_contributes_a_break() {
        let pages = vec!["A".to_string(), String::new(), "B".to_string()];
        assert_eq!(join_pages(&pages), "A\n\nB");
    }
}
