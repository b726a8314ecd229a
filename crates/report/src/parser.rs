//! Report definition parsing

use crate::{ReportDefinition, ReportError, Result};
use std::path::Path;

/// Parse a report definition from JSON string
pub fn parse_report(json: &str) -> Result<ReportDefinition> {
    serde_json::from_str(json).map_err(|e| ReportError::ParseError(e.to_string()))
}

/// Read and parse a report definition file
pub fn load_report<P: AsRef<Path>>(path: P) -> Result<ReportDefinition> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ReportError::ReadError {
        path: path.display().to_string(),
        source,
    })?;

    parse_report(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PageOrientation, PaperSize};

    #[test]
    fn test_parse_empty_object_uses_defaults() {
        let report = parse_report("{}").unwrap();
        assert_eq!(report, ReportDefinition::default());
    }

    #[test]
    fn test_parse_partial() {
        let report = parse_report(
            r#"{
                "title": "Q1",
                "page": { "size": "letter", "orientation": "landscape" },
                "rows": []
            }"#,
        )
        .unwrap();

        assert_eq!(report.title, "Q1");
        assert_eq!(report.page.size, PaperSize::Letter);
        assert_eq!(report.page.orientation, PageOrientation::Landscape);
        assert_eq!(report.page.margin, 60.0);
        assert!(report.rows.is_empty());
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse_report(r#"{ "rows": [ { "date": "2022-02-16" } ] }"#).unwrap_err();
        assert!(matches!(err, ReportError::ParseError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_report("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ReportError::ReadError { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
