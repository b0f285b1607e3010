//! CLI settings from `potxforge.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "potxforge.toml";

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub export: ExportSettings,
}

/// Defaults applied to `export` and `bundle`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExportSettings {
    /// Creator written when the configuration has no author
    pub author: Option<String>,
    /// Application name in `docProps/app.xml`
    pub application: Option<String>,
    /// Where outputs go when no `--output` is given
    pub output_dir: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load a settings file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))
    }

    /// Load `potxforge.toml` from `dir` if present, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILE);
        if path.is_file() {
            tracing::debug!("Using settings from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Output path for a file name, honouring `output-dir`
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        match &self.export.output_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}
