//! Error types for POTX generation.

use potxforge_core::ConfigError;
use thiserror::Error;

/// Result type for POTX operations
pub type Result<T> = std::result::Result<T, PotxError>;

/// Errors that can occur while building a template package
#[derive(Error, Debug)]
pub enum PotxError {
    /// Layout index outside the catalog
    #[error("Invalid slide layout index {index}: the catalog has {count} layouts")]
    InvalidLayoutIndex { index: usize, count: usize },

    /// Configuration rejected before any XML was written
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The same part path was written twice
    #[error("Duplicate package part: {path}")]
    DuplicatePart { path: String },

    /// A generated part is not well-formed XML
    #[error("Malformed part {path}: {reason}")]
    MalformedPart { path: String, reason: String },

    /// A bundled font binary is missing
    #[error("Font file for '{font_id}' not found: {reason}")]
    MissingFontFile { font_id: String, reason: String },

    /// XML generation or parsing error
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// ZIP archive error
    #[error("Archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error (bundle manifest)
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PotxError {
    /// Create an invalid layout index error
    pub fn invalid_layout(index: usize, count: usize) -> Self {
        Self::InvalidLayoutIndex { index, count }
    }

    /// Create a duplicate part error
    pub fn duplicate_part(path: impl Into<String>) -> Self {
        Self::DuplicatePart { path: path.into() }
    }

    /// Create a malformed part error
    pub fn malformed_part(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPart {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing font file error
    pub fn missing_font_file(font_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MissingFontFile {
            font_id: font_id.into(),
            reason: reason.into(),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidLayoutIndex { .. } => "POTX001",
            Self::Config(_) => "POTX002",
            Self::DuplicatePart { .. } => "POTX003",
            Self::MalformedPart { .. } => "POTX004",
            Self::MissingFontFile { .. } => "POTX005",
            Self::XmlError(_) => "POTX006",
            Self::ZipError(_) => "POTX007",
            Self::IoError(_) => "POTX008",
            Self::JsonError(_) => "POTX009",
        }
    }

    /// Whether the error comes from the configuration rather than from writing
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidLayoutIndex { .. } | Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PotxError::invalid_layout(11, 11);
        assert_eq!(err.code(), "POTX001");
        assert_eq!(
            err.to_string(),
            "Invalid slide layout index 11: the catalog has 11 layouts"
        );
        assert!(err.is_config_error());
    }

    #[test]
    fn test_config_error_wraps() {
        let err: PotxError = ConfigError::invalid_color("#12").into();
        assert_eq!(err.code(), "POTX002");
        assert!(err.to_string().contains("#12"));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_write_errors_are_not_config_errors() {
        let err = PotxError::duplicate_part("ppt/presentation.xml");
        assert_eq!(err.code(), "POTX003");
        assert!(!err.is_config_error());
    }
}
