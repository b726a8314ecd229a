//! PDF Core - Minimal PDF writing
//!
//! This crate provides functionality for:
//! - Creating PDF documents with pages of standard or custom sizes
//! - Measuring and drawing text in the standard Helvetica fonts
//! - Drawing stroked lines
//! - Saving documents without leaving partial files behind
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{Align, BuiltinFont, Orientation, PageSize, PdfDocument};
//!
//! let mut doc = PdfDocument::new();
//! let page = doc.add_page(PageSize::A4, Orientation::Portrait)?;
//! doc.set_font(BuiltinFont::Helvetica, 12.0)?;
//! doc.insert_text("Hello, World!", page, 100.0, 700.0, Align::Left)?;
//! doc.save("output.pdf")?;
//! ```

mod document;
mod font;
mod text;

pub use document::{Color, DocumentInfo, Orientation, PageSize, PdfDocument};
pub use font::{BuiltinFont, FontWeight};
pub use text::{generate_line_operators, generate_text_operators, to_hex, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Invalid page size: {0} x {1}")]
    InvalidPageSize(f64, f64),

    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("No font selected")]
    FontNotSet,

    #[error("Invalid font size: {0}")]
    InvalidFontSize(f32),

    #[error("Character {character:?} cannot be encoded in {font}")]
    UnsupportedCharacter { character: char, font: &'static str },

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}
