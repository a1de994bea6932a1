//! Process-wide PDFium engine.
//!
//! Binding the PDFium shared library means a `dlopen` plus symbol resolution
//! for a few hundred functions, so it happens once per process. The bound
//! [`Pdfium`] handle is stateless with respect to the documents it opens and
//! is shared read-only by every parse. Calls into the library are serialised
//! by pdfium-render's `thread_safe` feature.
//!
//! Library resolution (first match wins):
//!
//! 1. `PDFIUM_LIB_PATH=/path/to/libpdfium.{so,dylib,dll}`
//! 2. the system library search path
//!
//! A failed bind is not cached: the next PDF parse tries again, so a library
//! installed while a long-running process is up is picked up without a
//! restart.

use crate::error::ResumeParseError;
use once_cell::sync::OnceCell;
use pdfium_render::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info};

static PDFIUM: OnceCell<Pdfium> = OnceCell::new();

/// Environment variable naming an explicit PDFium library file.
pub const PDFIUM_LIB_PATH_ENV: &str = "PDFIUM_LIB_PATH";

/// Returns the shared PDFium engine, binding it on first use.
pub fn pdfium() -> Result<&'static Pdfium, ResumeParseError> {
    PDFIUM.get_or_try_init(bind)
}

/// `true` if the engine is bound or can be bound right now.
pub fn is_available() -> bool {
    pdfium().is_ok()
}

fn bind() -> Result<Pdfium, ResumeParseError> {
    let bindings = match std::env::var(PDFIUM_LIB_PATH_ENV) {
        Ok(p) if !p.is_empty() => {
            let path = PathBuf::from(p);
            debug!("Binding PDFium from {}", path.display());
            Pdfium::bind_to_library(&path).map_err(|e| {
                ResumeParseError::PdfiumBindingFailed(format!("{}: {}", path.display(), e))
            })?
        }
        _ => {
            debug!("Binding PDFium from the system library path");
            Pdfium::bind_to_system_library()
                .map_err(|e| ResumeParseError::PdfiumBindingFailed(e.to_string()))?
        }
    };

    info!("PDFium engine bound");
    Ok(Pdfium::new(bindings))
}
