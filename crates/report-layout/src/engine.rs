//! Whole-report layout and pagination

use crate::geometry::PageGeometry;
use crate::model::{ColumnSpec, DrawInstruction, HeaderRow, Justification, RowRecord, TextRole};
use crate::position::{
    compute_column_positions, compute_header_row_positions,
    compute_right_justified_column_positions, compute_subtitle_position, compute_title_position,
};
use crate::{LayoutError, Result, ROW_PITCH};
use std::ops::Range;

/// Distance of the title baseline from the top of the page
pub const TITLE_DROP: f64 = 50.0;
/// Distance of the header baseline from the top of the page
pub const HEADER_DROP: f64 = 100.0;
/// Distance of the first row baseline from the top of the page
pub const BODY_DROP: f64 = 116.0;

/// Measures rendered text width in points
///
/// Implemented by the rendering side, which knows which font and size each
/// [`TextRole`] uses. Any `Fn(TextRole, &str) -> f64` works as well.
pub trait TextMeasure {
    fn text_width(&self, role: TextRole, text: &str) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(TextRole, &str) -> f64,
{
    fn text_width(&self, role: TextRole, text: &str) -> f64 {
        self(role, text)
    }
}

/// A draw instruction together with its typographic role
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyledText<'a> {
    pub role: TextRole,
    pub instruction: &'a DrawInstruction,
}

/// Everything drawn on one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// Page number (1-indexed)
    pub page: usize,
    /// Indices into the row slice placed on this page
    pub rows: Range<usize>,
    pub title: DrawInstruction,
    pub subtitle: DrawInstruction,
    pub header: HeaderRow,
    /// Table cells, column by column
    pub cells: Vec<DrawInstruction>,
}

impl PageLayout {
    /// All text on the page in drawing order
    pub fn texts(&self) -> Vec<StyledText<'_>> {
        let mut texts = Vec::with_capacity(2 + self.header.labels.len() + self.cells.len());
        texts.push(StyledText {
            role: TextRole::Title,
            instruction: &self.title,
        });
        texts.push(StyledText {
            role: TextRole::Subtitle,
            instruction: &self.subtitle,
        });
        texts.extend(
            self.header
                .labels
                .iter()
                .chain(&self.cells)
                .map(|instruction| StyledText {
                    role: TextRole::Body,
                    instruction,
                }),
        );
        texts
    }
}

/// Lays out expense reports on pages of a fixed geometry
#[derive(Debug, Clone)]
pub struct ReportLayoutEngine {
    geometry: PageGeometry,
    columns: Vec<ColumnSpec>,
}

impl ReportLayoutEngine {
    /// Create an engine using the standard expense columns
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            columns: ColumnSpec::expense_columns(),
        }
    }

    /// Create an engine with custom column placement
    ///
    /// Exactly one column per [`RowRecord`] cell is required.
    pub fn with_columns(geometry: PageGeometry, columns: Vec<ColumnSpec>) -> Result<Self> {
        let expected = ColumnSpec::expense_columns().len();
        if columns.len() != expected {
            return Err(LayoutError::LengthMismatch {
                what: "columns",
                expected,
                actual: columns.len(),
            });
        }

        Ok(Self { geometry, columns })
    }

    pub fn title_y(&self) -> f64 {
        self.geometry.height() - TITLE_DROP
    }

    pub fn header_y(&self) -> f64 {
        self.geometry.height() - HEADER_DROP
    }

    pub fn body_start_y(&self) -> f64 {
        self.geometry.height() - BODY_DROP
    }

    /// Number of rows that fit above the bottom margin
    pub fn rows_per_page(&self) -> Result<usize> {
        let first_row_y = self.body_start_y();
        let margin = self.geometry.margin();
        if first_row_y < margin {
            return Err(LayoutError::PageTooShort {
                first_row_y,
                margin,
            });
        }

        Ok((((first_row_y - margin) / ROW_PITCH).floor() as usize).saturating_add(1))
    }

    /// Split rows into per-page ranges
    ///
    /// An empty report still gets one (header-only) page.
    pub fn paginate(&self, row_count: usize) -> Result<Vec<Range<usize>>> {
        let per_page = self.rows_per_page()?;
        if row_count == 0 {
            return Ok(vec![0..0]);
        }

        Ok((0..row_count)
            .step_by(per_page)
            .map(|start| start..(start + per_page).min(row_count))
            .collect())
    }

    /// Lay out the full report
    ///
    /// Title, subtitle and header row repeat on every page.
    pub fn layout<M: TextMeasure + ?Sized>(
        &self,
        title: &str,
        subtitle: &str,
        rows: &[RowRecord],
        measure: &M,
    ) -> Result<Vec<PageLayout>> {
        self.paginate(rows.len())?
            .into_iter()
            .enumerate()
            .map(|(index, range)| {
                self.layout_page(index + 1, title, subtitle, rows, range, measure)
            })
            .collect()
    }

    fn layout_page<M: TextMeasure + ?Sized>(
        &self,
        page: usize,
        title: &str,
        subtitle: &str,
        rows: &[RowRecord],
        range: Range<usize>,
        measure: &M,
    ) -> Result<PageLayout> {
        let page_width = self.geometry.width();
        let title_width = measure.text_width(TextRole::Title, title);
        let subtitle_width = measure.text_width(TextRole::Subtitle, subtitle);

        let title_y = self.title_y();
        let title_x = compute_title_position(page_width, title_width)?;
        let subtitle_at =
            compute_subtitle_position(page_width, title_width, subtitle_width, title_y)?;

        let header =
            compute_header_row_positions(&self.geometry, &self.columns, self.header_y(), measure)?;

        let page_rows = &rows[range.clone()];
        let start_y = self.body_start_y();
        let mut cells = Vec::with_capacity(page_rows.len() * self.columns.len());

        for (index, column) in self.columns.iter().enumerate() {
            let values: Vec<&str> = page_rows.iter().map(|row| row.cells()[index]).collect();
            match column.justification {
                Justification::Left => {
                    cells.extend(compute_column_positions(&values, column.x_offset, start_y));
                }
                Justification::Right => {
                    let widths: Vec<f64> = values
                        .iter()
                        .map(|value| measure.text_width(TextRole::Body, value))
                        .collect();
                    cells.extend(compute_right_justified_column_positions(
                        &values,
                        &widths,
                        column.anchor_x(&self.geometry),
                        start_y,
                    )?);
                }
            }
        }

        Ok(PageLayout {
            page,
            rows: range,
            title: DrawInstruction::new(title, title_x, title_y),
            subtitle: DrawInstruction::new(subtitle, subtitle_at.x, subtitle_at.y),
            header,
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MAX_PAGE_SIDE;
    use pretty_assertions::assert_eq;

    fn engine(height: f64, margin: f64) -> ReportLayoutEngine {
        ReportLayoutEngine::new(PageGeometry::new(600.0, height, margin).unwrap())
    }

    #[test]
    fn test_vertical_anchors() {
        let engine = engine(800.0, 60.0);
        assert_eq!(engine.title_y(), 750.0);
        assert_eq!(engine.header_y(), 700.0);
        assert_eq!(engine.body_start_y(), 684.0);
    }

    #[test]
    fn test_rows_per_page_a4() {
        let engine = ReportLayoutEngine::new(PageGeometry::new(595.28, 841.89, 60.0).unwrap());
        assert_eq!(engine.rows_per_page().unwrap(), 67);
    }

    #[test]
    fn test_rows_per_page_exact_fit() {
        // first row at 84, last allowed baseline exactly on the margin
        let engine = engine(200.0, 24.0);
        assert_eq!(engine.rows_per_page().unwrap(), 7);
    }

    #[test]
    fn test_paginate() {
        let engine = engine(200.0, 20.0);
        assert_eq!(engine.paginate(15).unwrap(), vec![0..7, 7..14, 14..15]);
        assert_eq!(engine.paginate(7).unwrap(), vec![0..7]);
        assert_eq!(engine.paginate(0).unwrap(), vec![0..0]);
    }

    #[test]
    fn test_page_too_short() {
        let engine = ReportLayoutEngine::new(PageGeometry::new(300.0, 150.0, 50.0).unwrap());
        assert_eq!(
            engine.rows_per_page(),
            Err(LayoutError::PageTooShort {
                first_row_y: 34.0,
                margin: 50.0,
            })
        );
    }

    #[test]
    fn test_rows_per_page_tallest_page() {
        let geometry = PageGeometry::new(600.0, MAX_PAGE_SIDE, 60.0).unwrap();
        let engine = ReportLayoutEngine::new(geometry);
        // (14400 - 116 - 60) / 10 = 1422.4
        assert_eq!(engine.rows_per_page().unwrap(), 1423);
        assert_eq!(engine.paginate(1500).unwrap(), vec![0..1423, 1423..1500]);
    }

    #[test]
    fn test_with_columns_wrong_count() {
        let geometry = PageGeometry::new(600.0, 800.0, 60.0).unwrap();
        let err = ReportLayoutEngine::with_columns(geometry, vec![ColumnSpec::left("DATE", 60.0)])
            .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::LengthMismatch {
                what: "columns",
                expected: 5,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_texts_roles() {
        let engine = engine(800.0, 60.0);
        let rows = vec![RowRecord::new("2022-02-16", "a", "b", "USD", "1.00")];
        let measure = |_role: TextRole, text: &str| text.len() as f64;
        let pages = engine.layout("T", "S", &rows, &measure).unwrap();

        let texts = pages[0].texts();
        assert_eq!(texts.len(), 2 + 5 + 5);
        assert_eq!(texts[0].role, TextRole::Title);
        assert_eq!(texts[1].role, TextRole::Subtitle);
        assert!(texts[2..].iter().all(|t| t.role == TextRole::Body));
    }
}
