//! Error types for configuration loading and validation.

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading, migrating or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Color value is not a `#RRGGBB` string
    #[error("Invalid color '{value}': expected #RRGGBB")]
    InvalidColor { value: String },

    /// Layout id is not part of the catalog
    #[error("Unknown layout id '{id}'")]
    UnknownLayout { id: String },

    /// Schema version newer than this build understands
    #[error("Unsupported config version {found} (newest supported is {supported})")]
    UnsupportedVersion { found: u64, supported: u64 },

    /// Document is structurally wrong for the schema
    #[error("Malformed config: {reason}")]
    Malformed { reason: String },

    /// A field holds a value outside its valid range
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Create an invalid color error
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Create an unknown layout error
    pub fn unknown_layout(id: impl Into<String>) -> Self {
        Self::UnknownLayout { id: id.into() }
    }

    /// Create a malformed document error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidColor { .. } => "CFG001",
            Self::UnknownLayout { .. } => "CFG002",
            Self::UnsupportedVersion { .. } => "CFG003",
            Self::Malformed { .. } => "CFG004",
            Self::InvalidValue { .. } => "CFG005",
            Self::Json(_) => "CFG006",
            Self::TomlDe(_) => "CFG007",
            Self::TomlSer(_) => "CFG008",
            Self::Io(_) => "CFG009",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ConfigError::invalid_color("red");
        assert_eq!(err.code(), "CFG001");
        assert!(err.to_string().contains("red"));

        let err = ConfigError::unknown_layout("four-content");
        assert_eq!(err.code(), "CFG002");
        assert!(err.to_string().contains("four-content"));
    }

    #[test]
    fn test_unsupported_version_display() {
        let err = ConfigError::UnsupportedVersion {
            found: 9,
            supported: 3,
        };
        assert_eq!(err.code(), "CFG003");
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::invalid_value("typography.heading.fontSize", "must be positive");
        assert_eq!(err.code(), "CFG005");
        assert!(err.to_string().contains("typography.heading.fontSize"));
    }
}
