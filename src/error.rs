use thiserror::Error;

use crate::labels::Namespace;

/// Errors that can occur while building or writing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("missing label: {namespace}.{key}")]
    MissingLabel { namespace: Namespace, key: String },

    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("invalid context: {0}")]
    InvalidContext(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ReportError::from(io_err);
        let msg = err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_excel_error_display() {
        let err = ReportError::Excel("bad sheet".to_string());
        assert_eq!(err.to_string(), "Excel error: bad sheet");
    }

    #[test]
    fn test_missing_label_names_namespace_and_key() {
        let err = ReportError::MissingLabel {
            namespace: Namespace::Metadata,
            key: "W_CORK".to_string(),
        };
        assert_eq!(err.to_string(), "missing label: metadata.W_CORK");
    }

    #[test]
    fn test_unknown_locale_display() {
        let err = ReportError::UnknownLocale("xx".to_string());
        assert_eq!(err.to_string(), "unknown locale: xx");
    }

    #[test]
    fn test_json_error_from_conversion() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("not valid json{{{");
        let json_err = result.unwrap_err();
        let err: ReportError = json_err.into();
        assert!(matches!(err, ReportError::Json(_)));
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_error_is_debug() {
        let err = ReportError::InvalidContext("empty plot id".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("InvalidContext"));
    }
}
