//! Columns, rows and draw instructions

use crate::geometry::{PageGeometry, Point};
use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Left edge of the DATE column
pub const DATE_OFFSET: f64 = 60.0;
/// Left edge of the EXPENSE column
pub const EXPENSE_OFFSET: f64 = 120.0;
/// Left edge of the ACCOUNT column
pub const ACCOUNT_OFFSET: f64 = 240.0;
/// Left edge of the CURRENCY column
pub const CURRENCY_OFFSET: f64 = 400.0;

/// How a string is anchored horizontally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    /// Left edge at the column offset
    #[default]
    Left,
    /// Right edge at the page's right margin
    Right,
}

/// Which typographic slot a string belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    Title,
    Subtitle,
    /// Header labels and table cells
    Body,
}

/// A report column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Header label, drawn as-is
    pub name: String,
    /// Left edge for left-justified columns; unused for right-justified ones
    #[serde(default)]
    pub x_offset: f64,
    #[serde(default)]
    pub justification: Justification,
}

impl ColumnSpec {
    /// Create a left-justified column
    pub fn left(name: impl Into<String>, x_offset: f64) -> Self {
        Self {
            name: name.into(),
            x_offset,
            justification: Justification::Left,
        }
    }

    /// Create a column right-justified against the right margin
    pub fn right(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x_offset: 0.0,
            justification: Justification::Right,
        }
    }

    /// The five expense report columns in drawing order
    pub fn expense_columns() -> Vec<ColumnSpec> {
        vec![
            Self::left("DATE", DATE_OFFSET),
            Self::left("EXPENSE", EXPENSE_OFFSET),
            Self::left("ACCOUNT", ACCOUNT_OFFSET),
            Self::left("CURRENCY", CURRENCY_OFFSET),
            Self::right("AMOUNT"),
        ]
    }

    /// X coordinate this column's text is anchored to
    pub fn anchor_x(&self, geometry: &PageGeometry) -> f64 {
        match self.justification {
            Justification::Left => self.x_offset,
            Justification::Right => geometry.right_edge(),
        }
    }
}

/// One expense line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRecord {
    pub date: String,
    pub expense_name: String,
    pub account_name: String,
    pub currency: String,
    pub amount: String,
}

impl RowRecord {
    pub fn new(
        date: impl Into<String>,
        expense_name: impl Into<String>,
        account_name: impl Into<String>,
        currency: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            expense_name: expense_name.into(),
            account_name: account_name.into(),
            currency: currency.into(),
            amount: amount.into(),
        }
    }

    /// Zip five parallel columns into rows
    ///
    /// # Errors
    /// Returns [`LayoutError::LengthMismatch`] naming the first column whose
    /// length differs from `dates`.
    pub fn from_columns<S: AsRef<str>>(
        dates: &[S],
        expense_names: &[S],
        account_names: &[S],
        currencies: &[S],
        amounts: &[S],
    ) -> Result<Vec<RowRecord>> {
        let expected = dates.len();
        for (what, len) in [
            ("expense names", expense_names.len()),
            ("account names", account_names.len()),
            ("currencies", currencies.len()),
            ("amounts", amounts.len()),
        ] {
            if len != expected {
                return Err(LayoutError::LengthMismatch {
                    what,
                    expected,
                    actual: len,
                });
            }
        }

        Ok((0..expected)
            .map(|i| {
                RowRecord::new(
                    dates[i].as_ref(),
                    expense_names[i].as_ref(),
                    account_names[i].as_ref(),
                    currencies[i].as_ref(),
                    amounts[i].as_ref(),
                )
            })
            .collect())
    }

    /// Cell values in the order of [`ColumnSpec::expense_columns`]
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.date,
            &self.expense_name,
            &self.account_name,
            &self.currency,
            &self.amount,
        ]
    }
}

/// A string placed at an absolute baseline position
#[derive(Debug, Clone, PartialEq)]
pub struct DrawInstruction {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl DrawInstruction {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// A straight stroked line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleInstruction {
    pub from: Point,
    pub to: Point,
}

/// Header labels plus the underline drawn beneath them
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRow {
    pub labels: Vec<DrawInstruction>,
    pub rule: RuleInstruction,
}
