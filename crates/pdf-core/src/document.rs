//! PDF Document wrapper

use crate::font::BuiltinFont;
use crate::text::{generate_line_operators, generate_text_operators, to_hex, TextRenderContext};
use crate::{Align, PdfError, Result};
use chrono::{DateTime, Utc};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

/// Paper size in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    /// 210 x 297 mm
    #[default]
    A4,
    /// 8.5 x 11 in
    Letter,
    /// 8.5 x 14 in
    Legal,
    Custom { width: f64, height: f64 },
}

impl PageSize {
    /// Portrait (width, height) in points
    pub fn dimensions(&self) -> (f64, f64) {
        match *self {
            Self::A4 => (595.28, 841.89),
            Self::Letter => (612.0, 792.0),
            Self::Legal => (612.0, 1008.0),
            Self::Custom { width, height } => (width, height),
        }
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Document information dictionary entries
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl DocumentInfo {
    fn to_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        if let Some(title) = &self.title {
            dict.set("Title", Object::string_literal(title.as_str()));
        }
        if let Some(producer) = &self.producer {
            dict.set("Producer", Object::string_literal(producer.as_str()));
        }
        if let Some(date) = &self.creation_date {
            dict.set("CreationDate", Object::string_literal(pdf_date(date)));
        }
        dict
    }
}

/// Format a timestamp as a PDF date string (e.g., "D:20220216093000Z")
fn pdf_date(date: &DateTime<Utc>) -> String {
    date.format("D:%Y%m%d%H%M%SZ").to_string()
}

/// A page being drawn into
#[derive(Debug)]
struct PageEntry {
    page_id: ObjectId,
    contents_id: ObjectId,
    width: f64,
    height: f64,
}

/// PDF Document wrapper providing high-level drawing operations
///
/// Drawing calls buffer content operators per page. Content streams, the
/// page tree and the info dictionary are written when the document is
/// serialized.
#[derive(Debug)]
pub struct PdfDocument {
    /// The underlying lopdf document
    inner: Document,
    /// Root of the page tree
    pages_id: ObjectId,
    /// Pages in order (page number - 1)
    pages: Vec<PageEntry>,
    /// Current font
    current_font: Option<BuiltinFont>,
    /// Current font size
    current_font_size: f32,
    /// Current line width
    current_line_width: f64,
    /// Buffered content operators per page (page number -> operators)
    page_content_buffer: HashMap<usize, Vec<u8>>,
    /// Info dictionary entries
    info: Option<DocumentInfo>,
}

impl PdfDocument {
    /// Create an empty document
    ///
    /// The page tree carries a shared resource dictionary with every
    /// [`BuiltinFont`], so pages do not need their own.
    pub fn new() -> Self {
        let mut inner = Document::with_version("1.5");
        let pages_id = inner.new_object_id();

        let mut fonts = Dictionary::new();
        for font in BuiltinFont::ALL {
            let font_id = inner.add_object(font.dictionary());
            fonts.set(font.resource_name(), font_id);
        }
        let resources_id = inner.add_object(dictionary! {
            "Font" => fonts,
        });

        inner.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => Vec::<Object>::new(),
                "Count" => 0,
                "Resources" => resources_id,
            }),
        );

        let catalog_id = inner.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        inner.trailer.set("Root", catalog_id);

        Self {
            inner,
            pages_id,
            pages: Vec::new(),
            current_font: None,
            current_font_size: 12.0,
            current_line_width: 1.0,
            page_content_buffer: HashMap::new(),
            info: None,
        }
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Append a blank page and return its page number (1-indexed)
    ///
    /// # Arguments
    /// * `size` - Paper size
    /// * `orientation` - Landscape swaps width and height
    pub fn add_page(&mut self, size: PageSize, orientation: Orientation) -> Result<usize> {
        let (mut width, mut height) = size.dimensions();
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(PdfError::InvalidPageSize(width, height));
        }
        if orientation == Orientation::Landscape {
            std::mem::swap(&mut width, &mut height);
        }

        let contents_id = self
            .inner
            .add_object(Stream::new(Dictionary::new(), Vec::new()));
        let page_id = self.inner.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(width as f32),
                Object::Real(height as f32),
            ],
            "Contents" => contents_id,
        });

        self.pages.push(PageEntry {
            page_id,
            contents_id,
            width,
            height,
        });

        Ok(self.pages.len())
    }

    fn page(&self, page: usize) -> Result<&PageEntry> {
        page.checked_sub(1)
            .and_then(|index| self.pages.get(index))
            .ok_or(PdfError::InvalidPage(page, self.pages.len()))
    }

    /// Width of a page in points
    pub fn page_width(&self, page: usize) -> Result<f64> {
        Ok(self.page(page)?.width)
    }

    /// Height of a page in points
    pub fn page_height(&self, page: usize) -> Result<f64> {
        Ok(self.page(page)?.height)
    }

    /// Set the current font and size
    ///
    /// # Example
    /// ```ignore
    /// doc.set_font(BuiltinFont::HelveticaBold, 10.0)?;
    /// let width = doc.get_text_width("ACME HOLDINGS LLC")?;
    /// ```
    pub fn set_font(&mut self, font: BuiltinFont, size: f32) -> Result<()> {
        if !(size.is_finite() && size > 0.0) {
            return Err(PdfError::InvalidFontSize(size));
        }

        self.current_font = Some(font);
        self.current_font_size = size;
        Ok(())
    }

    /// Set only the font size (keeps current font)
    pub fn set_font_size(&mut self, size: f32) -> Result<()> {
        let font = self.current_font.ok_or(PdfError::FontNotSet)?;
        self.set_font(font, size)
    }

    /// Set the stroke width used by [`PdfDocument::draw_line`]
    pub fn set_line_width(&mut self, width: f64) {
        self.current_line_width = width;
    }

    /// Get current font's text width for a string, in points
    pub fn get_text_width(&self, text: &str) -> Result<f64> {
        let font = self.current_font.ok_or(PdfError::FontNotSet)?;
        Ok(font.text_width(text, self.current_font_size))
    }

    /// Insert text at a specific position
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate in points
    /// * `y` - Baseline Y coordinate in points (from bottom)
    /// * `align` - Which edge of the text `x` refers to
    pub fn insert_text(
        &mut self,
        text: &str,
        page: usize,
        x: f64,
        y: f64,
        align: Align,
    ) -> Result<()> {
        self.page(page)?;

        // Skip empty text - nothing to render
        if text.is_empty() {
            return Ok(());
        }

        let font = self.current_font.ok_or(PdfError::FontNotSet)?;
        let encoded = font.encode(text)?;

        let ctx = TextRenderContext {
            font_name: font.resource_name().to_string(),
            font_size: self.current_font_size,
            text_width: font.text_width(text, self.current_font_size),
            color: Color::black(),
        };
        let ops = generate_text_operators(&to_hex(&encoded), x, y, align, &ctx);
        self.buffer_content(page, &ops);

        Ok(())
    }

    /// Draw a straight line between two points (PDF coordinates)
    pub fn draw_line(&mut self, page: usize, from: (f64, f64), to: (f64, f64)) -> Result<()> {
        self.page(page)?;

        let ops = generate_line_operators(
            from,
            to,
            self.current_line_width,
            Color::black(),
        );
        self.buffer_content(page, &ops);

        Ok(())
    }

    /// Set the document information dictionary
    pub fn set_info(&mut self, info: DocumentInfo) {
        self.info = Some(info);
    }

    /// Buffer content operators for a page
    fn buffer_content(&mut self, page: usize, content: &[u8]) {
        self.page_content_buffer
            .entry(page)
            .or_default()
            .extend_from_slice(content);
    }

    /// Write the page tree, content streams and info dictionary
    ///
    /// Buffers are kept, so finalizing again after more drawing rewrites the
    /// same objects instead of adding new ones.
    fn finalize(&mut self) {
        let kids: Vec<Object> = self
            .pages
            .iter()
            .map(|entry| Object::Reference(entry.page_id))
            .collect();
        let count = kids.len() as i64;

        if let Some(Object::Dictionary(pages)) = self.inner.objects.get_mut(&self.pages_id) {
            pages.set("Kids", kids);
            pages.set("Count", count);
        }

        for (index, entry) in self.pages.iter().enumerate() {
            let content = self
                .page_content_buffer
                .get(&(index + 1))
                .cloned()
                .unwrap_or_default();
            self.inner.objects.insert(
                entry.contents_id,
                Object::Stream(Stream::new(Dictionary::new(), content)),
            );
        }

        if let Some(info) = &self.info {
            let info_dict = info.to_dictionary();
            match self.inner.trailer.get(b"Info").and_then(Object::as_reference) {
                Ok(info_id) => {
                    self.inner.objects.insert(info_id, Object::Dictionary(info_dict));
                }
                Err(_) => {
                    let info_id = self.inner.add_object(info_dict);
                    self.inner.trailer.set("Info", info_id);
                }
            }
        }
    }

    /// Save the document to bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        self.finalize();

        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        Ok(buffer)
    }

    /// Save the document to a file
    ///
    /// The document is serialized in memory and written to a temporary file
    /// next to `path`, which is then renamed over `path`. On failure the
    /// temporary file is removed and `path` is left untouched.
    ///
    /// # Arguments
    /// * `path` - Output file path
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        let partial = partial_path(path);
        if let Err(err) = fs::write(&partial, &bytes).and_then(|_| fs::rename(&partial, path)) {
            let _ = fs::remove_file(&partial);
            return Err(PdfError::SaveError(format!("{}: {}", path.display(), err)));
        }

        Ok(())
    }
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Temporary sibling path used while saving (e.g., "report.pdf.partial")
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}
