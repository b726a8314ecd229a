//! Content stream operators for text and lines

use crate::document::Color;
use crate::Align;

/// Context for rendering text
pub struct TextRenderContext {
    /// PDF font resource name (e.g., "F1")
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
    /// Text width in points (for alignment)
    pub text_width: f64,
    /// Text color (RGB)
    pub color: Color,
}

/// Calculate X offset for text alignment
///
/// # Arguments
/// * `text_width` - Width of text in points
/// * `align` - Desired alignment
pub fn calculate_x_offset(text_width: f64, align: Align) -> f64 {
    match align {
        Align::Left => 0.0,
        Align::Center => -text_width / 2.0,
        Align::Right => -text_width,
    }
}

/// Hex-encode string bytes for use as a PDF string (e.g., "<414D>")
pub fn to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2 + 2);
    hex.push('<');
    for byte in bytes {
        hex.push_str(&format!("{byte:02X}"));
    }
    hex.push('>');
    hex
}

/// Format a number for a content stream, dropping trailing zeros
pub(crate) fn format_number(value: f64) -> String {
    let formatted = format!("{value:.4}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Generate PDF operators for text insertion
///
/// Creates the text operators (BT, rg, Tf, Td, Tj, ET) to render text at a
/// specific position with alignment support.
///
/// # Arguments
/// * `text_hex` - Hex-encoded text (e.g., "<414D4F554E54>")
/// * `x` - X coordinate in points (PDF coordinates, from left)
/// * `y` - Y coordinate in points (PDF coordinates, from bottom)
/// * `align` - Text alignment
/// * `ctx` - Text rendering context
///
/// # Returns
/// Vector of bytes containing the PDF operators
pub fn generate_text_operators(
    text_hex: &str,
    x: f64,
    y: f64,
    align: Align,
    ctx: &TextRenderContext,
) -> Vec<u8> {
    let mut ops = String::new();

    let final_x = x + calculate_x_offset(ctx.text_width, align);

    ops.push_str("BT\n");

    // Non-stroking color
    ops.push_str(&format!(
        "{} {} {} rg\n",
        format_number(ctx.color.r.into()),
        format_number(ctx.color.g.into()),
        format_number(ctx.color.b.into())
    ));

    ops.push_str(&format!(
        "/{} {} Tf\n",
        ctx.font_name,
        format_number(ctx.font_size.into())
    ));
    ops.push_str(&format!(
        "{} {} Td\n",
        format_number(final_x),
        format_number(y)
    ));
    ops.push_str(&format!("{text_hex} Tj\n"));

    ops.push_str("ET\n");

    ops.into_bytes()
}

/// Generate PDF operators for a stroked straight line
///
/// # Arguments
/// * `from` - Start point (PDF coordinates)
/// * `to` - End point (PDF coordinates)
/// * `line_width` - Stroke width in points
/// * `color` - Stroke color
pub fn generate_line_operators(
    from: (f64, f64),
    to: (f64, f64),
    line_width: f64,
    color: Color,
) -> Vec<u8> {
    let mut ops = String::new();

    ops.push_str("q\n");
    ops.push_str(&format!(
        "{} {} {} RG\n",
        format_number(color.r.into()),
        format_number(color.g.into()),
        format_number(color.b.into())
    ));
    ops.push_str(&format!("{} w\n", format_number(line_width)));
    ops.push_str(&format!(
        "{} {} m\n{} {} l\nS\n",
        format_number(from.0),
        format_number(from.1),
        format_number(to.0),
        format_number(to.1)
    ));
    ops.push_str("Q\n");

    ops.into_bytes()
}
