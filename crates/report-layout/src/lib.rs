//! Report Layout - Text placement for tabular reports
//!
//! This crate computes where every string of an expense report goes:
//! - Title and subtitle centering
//! - Column header labels and the header underline
//! - Left-justified and right-justified data columns
//! - Splitting rows over several pages
//!
//! Nothing here touches a PDF. Text widths that depend on font metrics are
//! supplied by the caller, either directly or through [`TextMeasure`].
//!
//! # Example
//!
//! ```
//! use report_layout::{compute_column_positions, compute_right_justified_column_positions};
//!
//! let dates = compute_column_positions(&["2022-02-16", "2022-02-17"], 60.0, 600.0);
//! assert_eq!(dates[1].y, 590.0);
//!
//! let amounts =
//!     compute_right_justified_column_positions(&["32.33"], &[15.0], 500.0, 700.0).unwrap();
//! assert_eq!(amounts[0].x, 485.0);
//! ```

mod engine;
mod geometry;
mod model;
mod position;

pub use engine::{PageLayout, ReportLayoutEngine, StyledText, TextMeasure};
pub use geometry::{PageGeometry, Point, MAX_PAGE_SIDE};
pub use model::{
    ColumnSpec, DrawInstruction, HeaderRow, Justification, RowRecord, RuleInstruction, TextRole,
};
pub use position::{
    compute_column_positions, compute_header_row_positions,
    compute_right_justified_column_positions, compute_subtitle_position, compute_title_position,
};

use thiserror::Error;

/// Vertical distance between two consecutive rows of a column
pub const ROW_PITCH: f64 = 10.0;

/// Vertical distance between the title and subtitle baselines
pub const SUBTITLE_GAP: f64 = 10.0;

/// Distance of the header underline below the header baseline
pub const RULE_DROP: f64 = 4.0;

/// Errors raised when layout input breaks its contract
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid {name}: {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("Page too short: first row at y={first_row_y} is below the bottom margin {margin}")]
    PageTooShort { first_row_y: f64, margin: f64 },
}

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Reject negative, NaN and infinite measurements
pub(crate) fn ensure_dimension(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidDimension { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dimension() {
        assert_eq!(ensure_dimension("width", 0.0), Ok(0.0));
        assert_eq!(ensure_dimension("width", 12.5), Ok(12.5));
        assert!(ensure_dimension("width", -1.0).is_err());
        assert!(ensure_dimension("width", f64::NAN).is_err());
        assert!(ensure_dimension("width", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = LayoutError::LengthMismatch {
            what: "text widths",
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Length mismatch for text widths: expected 3, got 2"
        );
    }
}
