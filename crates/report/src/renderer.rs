//! Report rendering

use crate::schema::*;
use crate::Result;
use chrono::{DateTime, Utc};
use pdf_core::{
    Align, BuiltinFont, DocumentInfo, FontWeight, Orientation, PageSize, PdfDocument,
};
use report_layout::{PageGeometry, PageLayout, ReportLayoutEngine, TextMeasure, TextRole};
use std::path::Path;

/// Producer entry written to the document info dictionary
const PRODUCER: &str = concat!("expense-report ", env!("CARGO_PKG_VERSION"));

/// Stroke width of the line under the header row
const HEADER_RULE_WIDTH: f64 = 1.0;

/// Report renderer
pub struct ReportRenderer<'a> {
    /// The report to render
    definition: &'a ReportDefinition,
    /// CreationDate for the info dictionary
    creation_date: Option<DateTime<Utc>>,
}

impl<'a> ReportRenderer<'a> {
    /// Create a new renderer for a report definition
    pub fn new(definition: &'a ReportDefinition) -> Self {
        Self {
            definition,
            creation_date: None,
        }
    }

    /// Stamp the document with a creation date
    pub fn with_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = Some(date);
        self
    }

    /// Page width and height in points after orientation
    pub fn page_dimensions(&self) -> (f64, f64) {
        let (width, height) = convert_page_size(self.definition.page.size).dimensions();
        match self.definition.page.orientation {
            PageOrientation::Portrait => (width, height),
            PageOrientation::Landscape => (height, width),
        }
    }

    /// Compute the layout of every page
    pub fn layout(&self) -> Result<Vec<PageLayout>> {
        let (width, height) = self.page_dimensions();
        let geometry = PageGeometry::new(width, height, self.definition.page.margin)?;
        let engine = ReportLayoutEngine::new(geometry);

        let measure = FontMeasure {
            typography: &self.definition.typography,
        };
        let pages = engine.layout(
            &self.definition.title,
            &self.definition.subtitle,
            &self.definition.rows,
            &measure,
        )?;

        Ok(pages)
    }

    /// Render the report into a new PDF document
    pub fn render(&self) -> Result<PdfDocument> {
        let pages = self.layout()?;
        log::debug!(
            "Laid out {} rows on {} page(s)",
            self.definition.rows.len(),
            pages.len()
        );

        let mut doc = PdfDocument::new();
        for layout in &pages {
            self.render_page(&mut doc, layout)?;
        }

        doc.set_info(DocumentInfo {
            title: Some(self.definition.title.clone()),
            producer: Some(PRODUCER.to_string()),
            creation_date: self.creation_date,
        });

        Ok(doc)
    }

    /// Render the report and serialize it
    pub fn render_to_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = self.render()?;
        Ok(doc.to_bytes()?)
    }

    /// Render the report and save it to `path`
    ///
    /// Nothing is written unless rendering succeeds.
    pub fn render_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut doc = self.render()?;
        doc.save(path.as_ref())?;
        log::info!(
            "Saved {} page(s) to {}",
            doc.page_count(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Draw one page of the layout
    fn render_page(&self, doc: &mut PdfDocument, layout: &PageLayout) -> Result<()> {
        let page = doc.add_page(
            convert_page_size(self.definition.page.size),
            convert_orientation(self.definition.page.orientation),
        )?;
        log::debug!("Rendering page {} (rows {:?})", page, layout.rows);

        let mut current_role = None;
        for text in layout.texts() {
            if current_role != Some(text.role) {
                let font = self.font_for(text.role);
                doc.set_font(convert_font(font), font.size)?;
                current_role = Some(text.role);
            }

            let instruction = text.instruction;
            doc.insert_text(
                &instruction.text,
                page,
                instruction.x,
                instruction.y,
                Align::Left,
            )?;
        }

        let rule = &layout.header.rule;
        doc.set_line_width(HEADER_RULE_WIDTH);
        doc.draw_line(page, (rule.from.x, rule.from.y), (rule.to.x, rule.to.y))?;

        Ok(())
    }

    fn font_for(&self, role: TextRole) -> Font {
        font_for_role(&self.definition.typography, role)
    }
}

/// Measures text with the Helvetica metrics of each role's font
struct FontMeasure<'a> {
    typography: &'a Typography,
}

impl TextMeasure for FontMeasure<'_> {
    fn text_width(&self, role: TextRole, text: &str) -> f64 {
        let font = font_for_role(self.typography, role);
        convert_font(font).text_width(text, font.size)
    }
}

fn font_for_role(typography: &Typography, role: TextRole) -> Font {
    match role {
        TextRole::Title => typography.title,
        TextRole::Subtitle => typography.subtitle,
        TextRole::Body => typography.body,
    }
}

/// Convert schema FontStyle to pdf-core BuiltinFont
fn convert_font(font: Font) -> BuiltinFont {
    let weight = match font.style {
        FontStyle::Regular => FontWeight::Regular,
        FontStyle::Bold => FontWeight::Bold,
    };
    BuiltinFont::from_weight(weight)
}

/// Convert schema PaperSize to pdf-core PageSize
fn convert_page_size(size: PaperSize) -> PageSize {
    match size {
        PaperSize::A4 => PageSize::A4,
        PaperSize::Letter => PageSize::Letter,
        PaperSize::Legal => PageSize::Legal,
        PaperSize::Custom { width, height } => PageSize::Custom { width, height },
    }
}

/// Convert schema PageOrientation to pdf-core Orientation
fn convert_orientation(orientation: PageOrientation) -> Orientation {
    match orientation {
        PageOrientation::Portrait => Orientation::Portrait,
        PageOrientation::Landscape => Orientation::Landscape,
    }
}
