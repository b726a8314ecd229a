//! Report definition types

use report_layout::RowRecord;
use serde::{Deserialize, Serialize};

/// Embedded JSON Schema for report definitions
/// This schema can be used by IDEs and validators when authoring reports
pub const REPORT_SCHEMA: &str = include_str!("../data/report-schema.json");

/// Root report definition
///
/// Every field is optional in JSON; missing fields take the values of the
/// built-in ACME report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportDefinition {
    /// Centered heading
    pub title: String,

    /// Line below the title
    pub subtitle: String,

    /// Paper and margin
    pub page: PageSetup,

    /// Fonts per text slot
    pub typography: Typography,

    /// Table rows, top to bottom
    pub rows: Vec<RowRecord>,
}

impl Default for ReportDefinition {
    fn default() -> Self {
        Self {
            title: "ACME HOLDINGS LLC".to_string(),
            subtitle: "CONSOLIDATED EXPENSE REPORT - FISCAL YEAR 2022".to_string(),
            page: PageSetup::default(),
            typography: Typography::default(),
            rows: vec![
                RowRecord::new(
                    "2022-02-16",
                    "\"GA January\"",
                    "Transportation",
                    "USD",
                    "32.33",
                ),
                RowRecord::new(
                    "2022-02-17",
                    "\"ICU Expenses\"",
                    "Education",
                    "USD",
                    "438.21",
                ),
                RowRecord::new(
                    "2022-02-18",
                    "\"GCP Servers\"",
                    "Cloud Services",
                    "CHF",
                    "3.57",
                ),
            ],
        }
    }
}

/// Paper size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
    Legal,
    /// Explicit size in points
    Custom { width: f64, height: f64 },
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}

/// Page configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSetup {
    pub size: PaperSize,
    pub orientation: PageOrientation,
    /// Margin in points on every side
    pub margin: f64,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            size: PaperSize::A4,
            orientation: PageOrientation::Portrait,
            margin: 60.0,
        }
    }
}

/// Font style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
}

/// Font specification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    #[serde(default)]
    pub style: FontStyle,
    /// Size in points
    pub size: f32,
}

impl Font {
    pub fn regular(size: f32) -> Self {
        Self {
            style: FontStyle::Regular,
            size,
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            style: FontStyle::Bold,
            size,
        }
    }
}

/// Fonts for title, subtitle and table text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub title: Font,
    pub subtitle: Font,
    /// Header labels and cells
    pub body: Font,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title: Font::bold(10.0),
            subtitle: Font::regular(9.0),
            body: Font::regular(8.0),
        }
    }
}
