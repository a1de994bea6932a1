//! Pipeline stages for resume parsing.
//!
//! Each submodule implements one step. The decoders are the only stages
//! that can fail; everything after them maps text to fields and reports a
//! miss as an empty value.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ pdf / docx ──▶ postprocess ──▶ sections ──▶ contact / entries / skills ──▶ assemble
//! (format)  (flat text)    (cleanup)       (regions)    (fields, dates)               (record)
//! ```
//!
//! 1. [`input`]       — extension dispatch, size guard and magic-byte checks
//! 2. [`pdf`]         — page text layers via pdfium, in page order
//! 3. [`docx`]        — paragraph and table text via docx-rs
//! 4. [`postprocess`] — deterministic cleanup of the decoded text
//! 5. [`sections`]    — heading keywords to named regions
//! 6. [`contact`], [`entries`], [`dates`], [`skills`] — field rules
//! 7. [`assemble`]    — runs each rule in isolation and applies defaults

pub mod assemble;
pub mod contact;
pub mod dates;
pub mod docx;
pub mod entries;
pub mod input;
pub mod pdf;
pub mod postprocess;
pub mod sections;
pub mod skills;
