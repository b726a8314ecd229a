//! Page geometry

use crate::{ensure_dimension, LayoutError, Result};

/// Largest page side in points (PDF implementation limit)
pub const MAX_PAGE_SIDE: f64 = 14400.0;

/// A point in PDF user space (origin at the bottom-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Page size and margin in points
///
/// The margin applies to all four sides. It bounds the header underline
/// horizontally, anchors right-justified columns and is the lowest baseline
/// a row may use before it moves to the next page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    width: f64,
    height: f64,
    margin: f64,
}

impl PageGeometry {
    /// Create a new page geometry
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidDimension`] for negative or non-finite
    /// values, sides longer than [`MAX_PAGE_SIDE`], or when the margins leave
    /// no printable area.
    pub fn new(width: f64, height: f64, margin: f64) -> Result<Self> {
        let width = ensure_page_side("page width", width)?;
        let height = ensure_page_side("page height", height)?;
        let margin = ensure_dimension("margin", margin)?;

        if margin * 2.0 > width || margin * 2.0 > height {
            return Err(LayoutError::InvalidDimension {
                name: "margin",
                value: margin,
            });
        }

        Ok(Self {
            width,
            height,
            margin,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// X coordinate right-justified content aligns to
    pub fn right_edge(&self) -> f64 {
        self.width - self.margin
    }
}

fn ensure_page_side(name: &'static str, value: f64) -> Result<f64> {
    let value = ensure_dimension(name, value)?;
    if value > MAX_PAGE_SIDE {
        return Err(LayoutError::InvalidDimension { name, value });
    }
    Ok(value)
}
