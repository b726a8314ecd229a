//! Report - Expense report definitions and rendering
//!
//! This crate provides:
//! - Report definition types with JSON (de)serialization
//! - Report parsing from JSON strings and files
//! - Rendering a definition to a PDF document
//!
//! # Example
//!
//! ```ignore
//! use report::{load_report, ReportRenderer};
//!
//! let definition = load_report("expenses.json")?;
//! ReportRenderer::new(&definition).render_to_file("expenses.pdf")?;
//! ```

mod parser;
mod renderer;
mod schema;

pub use parser::{load_report, parse_report};
pub use renderer::ReportRenderer;
pub use schema::*;

use thiserror::Error;

/// Errors that can occur while loading or rendering a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to parse report: {0}")]
    ParseError(String),

    #[error("Failed to read {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Layout error: {0}")]
    LayoutError(#[from] report_layout::LayoutError),

    #[error("PDF error: {0}")]
    PdfError(#[from] pdf_core::PdfError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportDefinition {
    /// Serialize the definition as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
