//! Placement arithmetic for titles, headers and columns
//!
//! All coordinates are PDF user space: y grows upwards, so each row of a
//! column sits [`ROW_PITCH`] below the previous one.

use crate::engine::TextMeasure;
use crate::geometry::{PageGeometry, Point};
use crate::model::{
    ColumnSpec, DrawInstruction, HeaderRow, Justification, RuleInstruction, TextRole,
};
use crate::{ensure_dimension, LayoutError, Result, ROW_PITCH, RULE_DROP, SUBTITLE_GAP};

/// Calculate the x coordinate that centers the title on the page
///
/// A title wider than the page yields a negative x; it is not clamped.
///
/// # Errors
/// Returns [`LayoutError::InvalidDimension`] if `page_width` or
/// `title_width` is negative or not finite.
pub fn compute_title_position(page_width: f64, title_width: f64) -> Result<f64> {
    let page_width = ensure_dimension("page width", page_width)?;
    let title_width = ensure_dimension("title width", title_width)?;
    Ok((page_width - title_width) / 2.0)
}

/// Calculate the subtitle position relative to the title
///
/// The subtitle baseline is [`SUBTITLE_GAP`] below the title. Horizontally it
/// is shifted from the title's x by half the width difference of the two
/// strings.
pub fn compute_subtitle_position(
    page_width: f64,
    title_width: f64,
    subtitle_width: f64,
    title_y: f64,
) -> Result<Point> {
    let title_x = compute_title_position(page_width, title_width)?;
    let subtitle_width = ensure_dimension("subtitle width", subtitle_width)?;
    let delta = subtitle_width - title_width;

    Ok(Point::new(title_x - delta / 2.0, title_y - SUBTITLE_GAP))
}

/// Calculate header label positions and the underline beneath them
///
/// Left-justified labels sit at their column offset. Right-justified labels
/// end at the right margin, which needs the label width from `measure`.
pub fn compute_header_row_positions<M: TextMeasure + ?Sized>(
    geometry: &PageGeometry,
    columns: &[ColumnSpec],
    header_y: f64,
    measure: &M,
) -> Result<HeaderRow> {
    let labels = columns
        .iter()
        .map(|column| -> Result<DrawInstruction> {
            let x = match column.justification {
                Justification::Left => column.x_offset,
                Justification::Right => {
                    let width = ensure_dimension(
                        "header width",
                        measure.text_width(TextRole::Body, &column.name),
                    )?;
                    column.anchor_x(geometry) - width
                }
            };
            Ok(DrawInstruction::new(column.name.as_str(), x, header_y))
        })
        .collect::<Result<Vec<_>>>()?;

    let rule_y = header_y - RULE_DROP;
    let rule = RuleInstruction {
        from: Point::new(geometry.margin(), rule_y),
        to: Point::new(geometry.right_edge(), rule_y),
    };

    Ok(HeaderRow { labels, rule })
}

/// Place a left-justified column, one row per value
pub fn compute_column_positions<S: AsRef<str>>(
    values: &[S],
    x_offset: f64,
    start_y: f64,
) -> Vec<DrawInstruction> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| DrawInstruction::new(value.as_ref(), x_offset, row_y(start_y, i)))
        .collect()
}

/// Place a right-justified column so every value ends at `target_x`
///
/// `text_widths[i]` is the measured width of `values[i]`.
///
/// # Errors
/// Returns [`LayoutError::LengthMismatch`] when the two slices differ in
/// length, and [`LayoutError::InvalidDimension`] for a negative width.
pub fn compute_right_justified_column_positions<S: AsRef<str>>(
    values: &[S],
    text_widths: &[f64],
    target_x: f64,
    start_y: f64,
) -> Result<Vec<DrawInstruction>> {
    if values.len() != text_widths.len() {
        return Err(LayoutError::LengthMismatch {
            what: "text widths",
            expected: values.len(),
            actual: text_widths.len(),
        });
    }

    values
        .iter()
        .zip(text_widths)
        .enumerate()
        .map(|(i, (value, &width))| -> Result<DrawInstruction> {
            let width = ensure_dimension("text width", width)?;
            Ok(DrawInstruction::new(
                value.as_ref(),
                target_x - width,
                row_y(start_y, i),
            ))
        })
        .collect()
}

fn row_y(start_y: f64, row: usize) -> f64 {
    start_y - ROW_PITCH * row as f64
}
