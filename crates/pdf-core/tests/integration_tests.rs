//! Integration tests for pdf-core
//!
//! These tests write documents, load them back with lopdf and inspect the
//! resulting objects and content streams.

use chrono::{TimeZone, Utc};
use lopdf::content::Content;
use lopdf::Object;
use pdf_core::{Align, BuiltinFont, DocumentInfo, Orientation, PageSize, PdfDocument, PdfError};
use pretty_assertions::assert_eq;

/// Reload serialized bytes with lopdf
fn reload(bytes: &[u8]) -> lopdf::Document {
    lopdf::Document::load_mem(bytes).expect("Failed to reload PDF")
}

/// Decode the content stream of a page (1-indexed)
fn page_content(doc: &lopdf::Document, page: u32) -> Content {
    let page_id = doc.get_pages()[&page];
    let data = doc.get_page_content(page_id).expect("Failed to read content");
    Content::decode(&data).expect("Failed to decode content")
}

/// Strings shown with Tj, in order
fn shown_strings(content: &Content) -> Vec<String> {
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .map(|op| match &op.operands[0] {
            Object::String(bytes, _) => String::from_utf8_lossy(bytes).into_owned(),
            other => panic!("unexpected Tj operand {other:?}"),
        })
        .collect()
}

/// Operands of every operation with the given operator, as floats
fn operands_of(content: &Content, operator: &str) -> Vec<Vec<f32>> {
    content
        .operations
        .iter()
        .filter(|op| op.operator == operator)
        .map(|op| op.operands.iter().map(|o| o.as_float().unwrap()).collect())
        .collect()
}

fn assert_points(actual: &[Vec<f32>], expected: &[[f32; 2]]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a[0] - e[0]).abs() < 1e-3 && (a[1] - e[1]).abs() < 1e-3,
            "{a:?} != {e:?}"
        );
    }
}

fn a4_document() -> PdfDocument {
    let mut doc = PdfDocument::new();
    doc.add_page(PageSize::A4, Orientation::Portrait)
        .expect("Failed to add page");
    doc
}

#[test]
fn test_empty_page_roundtrip() {
    let mut doc = a4_document();
    let bytes = doc.to_bytes().expect("Failed to save PDF");

    let loaded = reload(&bytes);
    assert_eq!(loaded.get_pages().len(), 1);
    assert!(page_content(&loaded, 1).operations.is_empty());
}

#[test]
fn test_media_box() {
    let mut doc = PdfDocument::new();
    doc.add_page(PageSize::Letter, Orientation::Landscape)
        .unwrap();
    let loaded = reload(&doc.to_bytes().unwrap());

    let page_id = loaded.get_pages()[&1];
    let page = loaded.get_object(page_id).unwrap().as_dict().unwrap();
    let media_box: Vec<f32> = page
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o.as_float().unwrap())
        .collect();
    assert_eq!(media_box, vec![0.0, 0.0, 792.0, 612.0]);
}

#[test]
fn test_insert_text_left() {
    let mut doc = a4_document();
    doc.set_font(BuiltinFont::Helvetica, 8.0).unwrap();
    doc.insert_text("2022-02-16", 1, 60.0, 725.89, Align::Left)
        .unwrap();

    let loaded = reload(&doc.to_bytes().unwrap());
    let content = page_content(&loaded, 1);

    assert_eq!(shown_strings(&content), vec!["2022-02-16"]);
    assert_points(&operands_of(&content, "Td"), &[[60.0, 725.89]]);
}

#[test]
fn test_insert_text_right_aligned() {
    let mut doc = a4_document();
    doc.set_font(BuiltinFont::Helvetica, 8.0).unwrap();
    let width = doc.get_text_width("AMOUNT").unwrap();
    doc.insert_text("AMOUNT", 1, 535.28, 741.89, Align::Right)
        .unwrap();

    let loaded = reload(&doc.to_bytes().unwrap());
    let td = &operands_of(&page_content(&loaded, 1), "Td")[0];

    assert!((f64::from(td[0]) - (535.28 - width)).abs() < 1e-3);
}

#[test]
fn test_font_resources() {
    let mut doc = a4_document();
    doc.set_font(BuiltinFont::HelveticaBold, 10.0).unwrap();
    doc.insert_text("ACME HOLDINGS LLC", 1, 100.0, 791.89, Align::Left)
        .unwrap();

    let loaded = reload(&doc.to_bytes().unwrap());
    let mut names: Vec<String> = loaded
        .objects
        .values()
        .filter_map(|object| object.as_dict().ok())
        .filter(|dict| {
            dict.get(b"Type").and_then(Object::as_name).ok() == Some(b"Font".as_slice())
        })
        .map(|font| {
            String::from_utf8_lossy(font.get(b"BaseFont").unwrap().as_name().unwrap())
                .into_owned()
        })
        .collect();
    names.sort();
    assert_eq!(names, vec!["Helvetica", "Helvetica-Bold"]);

    let tf = page_content(&loaded, 1)
        .operations
        .into_iter()
        .find(|op| op.operator == "Tf")
        .unwrap();
    assert_eq!(tf.operands[0].as_name().unwrap(), b"F2");
}

#[test]
fn test_draw_line() {
    let mut doc = a4_document();
    doc.draw_line(1, (60.0, 737.89), (535.28, 737.89)).unwrap();

    let loaded = reload(&doc.to_bytes().unwrap());
    let content = page_content(&loaded, 1);

    assert_points(&operands_of(&content, "m"), &[[60.0, 737.89]]);
    assert_points(&operands_of(&content, "l"), &[[535.28, 737.89]]);
    assert!(content.operations.iter().any(|op| op.operator == "S"));
    assert_eq!(operands_of(&content, "w"), vec![vec![1.0]]);
}

#[test]
fn test_line_width() {
    let mut doc = a4_document();
    doc.set_line_width(0.5);
    doc.draw_line(1, (60.0, 700.0), (535.28, 700.0)).unwrap();

    let loaded = reload(&doc.to_bytes().unwrap());
    let content = page_content(&loaded, 1);
    assert_eq!(operands_of(&content, "w"), vec![vec![0.5]]);
}

#[test]
fn test_multiple_pages() {
    let mut doc = a4_document();
    let second = doc.add_page(PageSize::A4, Orientation::Portrait).unwrap();
    assert_eq!(second, 2);

    doc.set_font(BuiltinFont::Helvetica, 8.0).unwrap();
    doc.insert_text("first", 1, 60.0, 700.0, Align::Left).unwrap();
    doc.insert_text("second", 2, 60.0, 700.0, Align::Left).unwrap();

    let loaded = reload(&doc.to_bytes().unwrap());
    assert_eq!(loaded.get_pages().len(), 2);
    assert_eq!(shown_strings(&page_content(&loaded, 1)), vec!["first"]);
    assert_eq!(shown_strings(&page_content(&loaded, 2)), vec!["second"]);
}

#[test]
fn test_to_bytes_twice() {
    let mut doc = a4_document();
    doc.set_font(BuiltinFont::Helvetica, 8.0).unwrap();
    doc.insert_text("once", 1, 60.0, 700.0, Align::Left).unwrap();

    let first = doc.to_bytes().unwrap();
    let second = doc.to_bytes().unwrap();

    assert_eq!(first.len(), second.len());
    assert_eq!(shown_strings(&page_content(&reload(&second), 1)), vec!["once"]);
}

#[test]
fn test_invalid_page() {
    let mut doc = a4_document();
    doc.set_font(BuiltinFont::Helvetica, 8.0).unwrap();

    let result = doc.insert_text("Hello", 5, 100.0, 100.0, Align::Left);
    assert!(matches!(result, Err(PdfError::InvalidPage(5, 1))));

    let result = doc.draw_line(0, (0.0, 0.0), (1.0, 1.0));
    assert!(matches!(result, Err(PdfError::InvalidPage(0, 1))));
}

#[test]
fn test_unsupported_character() {
    let mut doc = a4_document();
    doc.set_font(BuiltinFont::Helvetica, 8.0).unwrap();

    let result = doc.insert_text("\u{51fa}\u{5f35}", 1, 60.0, 700.0, Align::Left);
    assert!(matches!(
        result,
        Err(PdfError::UnsupportedCharacter {
            character: '\u{51fa}',
            ..
        })
    ));
}

#[test]
fn test_win_ansi_text() {
    let mut doc = a4_document();
    doc.set_font(BuiltinFont::Helvetica, 8.0).unwrap();
    doc.insert_text("Zürich €5", 1, 60.0, 700.0, Align::Left)
        .unwrap();

    let loaded = reload(&doc.to_bytes().unwrap());
    let content = page_content(&loaded, 1);
    let shown = content
        .operations
        .iter()
        .find(|op| op.operator == "Tj")
        .unwrap();
    match &shown.operands[0] {
        Object::String(bytes, _) => assert_eq!(bytes.as_slice(), b"Z\xfcrich \x805"),
        other => panic!("unexpected Tj operand {other:?}"),
    }
}

#[test]
fn test_document_info() {
    let mut doc = a4_document();
    doc.set_info(DocumentInfo {
        title: Some("ACME HOLDINGS LLC".to_string()),
        producer: Some("expense-report".to_string()),
        creation_date: Some(Utc.with_ymd_and_hms(2022, 2, 16, 0, 0, 0).unwrap()),
    });

    let loaded = reload(&doc.to_bytes().unwrap());
    let info_id = loaded.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = loaded.get_object(info_id).unwrap().as_dict().unwrap();

    let entry = |key: &[u8]| match info.get(key).unwrap() {
        Object::String(bytes, _) => String::from_utf8_lossy(bytes).into_owned(),
        other => panic!("unexpected info entry {other:?}"),
    };
    assert_eq!(entry(b"Title"), "ACME HOLDINGS LLC");
    assert_eq!(entry(b"Producer"), "expense-report");
    assert_eq!(entry(b"CreationDate"), "D:20220216000000Z");
}

#[test]
fn test_save_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");

    let mut doc = a4_document();
    doc.save(&path).expect("Failed to save PDF");

    let loaded = lopdf::Document::load(&path).expect("Failed to load saved PDF");
    assert_eq!(loaded.get_pages().len(), 1);
    assert!(!dir.path().join("report.pdf.partial").exists());
}

#[test]
fn test_save_failure_leaves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.pdf");

    let mut doc = a4_document();
    let result = doc.save(&path);

    assert!(matches!(result, Err(PdfError::SaveError(_))));
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
