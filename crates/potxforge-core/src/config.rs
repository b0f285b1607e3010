//! The template configuration aggregate.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::color::{CustomColor, ThemeColorSet};
use crate::error::{ConfigError, Result};
use crate::font::{default_fonts, FontAsset, FontSlots};
use crate::layout::{catalog_ids, resolve_selection};
use crate::migrate::{self, CURRENT_VERSION};
use crate::slide::{Guide, SlideSize};
use crate::typography::Typography;

/// Everything needed to export a template.
///
/// Loaded from JSON (the editor's export format) or TOML (hand-written).
/// Older documents are upgraded on load; see [`crate::migrate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    /// Schema version; always [`CURRENT_VERSION`] after loading
    #[serde(default = "current_version")]
    pub version: u64,

    #[serde(default = "new_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub colors: ThemeColorSet,

    #[serde(default)]
    pub custom_colors: Vec<CustomColor>,

    /// Heading and body theme fonts
    #[serde(default)]
    pub fonts: FontSlots,

    #[serde(default = "default_fonts")]
    pub font_assets: Vec<FontAsset>,

    #[serde(default = "Typography::defaults")]
    pub typography: Typography,

    #[serde(default)]
    pub slide_size: SlideSize,

    #[serde(default)]
    pub guides: Vec<Guide>,

    /// Layout ids to export; empty exports the whole catalog
    #[serde(default = "catalog_ids")]
    pub selected_layouts: Vec<String>,
}

fn current_version() -> u64 {
    CURRENT_VERSION
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self::new("Untitled Template")
    }
}

impl TemplateConfig {
    /// A configuration with the brand defaults and a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: CURRENT_VERSION,
            id: new_id(),
            name: name.into(),
            author: String::new(),
            colors: ThemeColorSet::default(),
            custom_colors: Vec::new(),
            fonts: FontSlots::default(),
            font_assets: default_fonts(),
            typography: Typography::defaults(),
            slide_size: SlideSize::default(),
            guides: Vec::new(),
            selected_layouts: catalog_ids(),
        }
    }

    /// Load from a file, picking the format by extension (`.toml` or JSON)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Parse a JSON document of any supported schema version
    pub fn from_json_str(content: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(content)?;
        Self::from_document(doc)
    }

    /// Parse a TOML document of any supported schema version
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let doc: Value = toml::from_str(content)?;
        Self::from_document(doc)
    }

    /// Upgrade, deserialize and validate a raw document
    pub fn from_document(doc: Value) -> Result<Self> {
        let doc = migrate::upgrade(doc)?;
        let config: TemplateConfig = serde_json::from_value(doc)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to a file, picking the format by extension
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
        let content = if is_toml {
            self.to_toml_string()?
        } else {
            self.to_json_string()?
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check the invariants serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::invalid_value("name", "must not be empty"));
        }

        if self.version != CURRENT_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: CURRENT_VERSION,
            });
        }

        for (role, style) in self.typography.iter() {
            if !(style.font_size > 0.0 && style.font_size.is_finite()) {
                return Err(ConfigError::invalid_value(
                    format!("typography.{}.fontSize", role.as_str()),
                    "must be a positive number",
                ));
            }
            if !(style.line_height > 0.0 && style.line_height.is_finite()) {
                return Err(ConfigError::invalid_value(
                    format!("typography.{}.lineHeight", role.as_str()),
                    "must be a positive number",
                ));
            }
        }

        let mut seen = HashSet::new();
        let mut file_names = HashSet::new();
        for asset in &self.font_assets {
            if !seen.insert(asset.id.as_str()) {
                return Err(ConfigError::invalid_value(
                    "fontAssets",
                    format!("duplicate font id '{}'", asset.id),
                ));
            }
            if let Some(file_name) = asset.checked_file_name()? {
                if !file_names.insert(file_name) {
                    return Err(ConfigError::invalid_value(
                        "fontAssets.fileName",
                        format!("'{file_name}' is used by more than one font"),
                    ));
                }
            }
        }

        for guide in &self.guides {
            if !guide.position.is_finite() {
                return Err(ConfigError::invalid_value(
                    "guides",
                    "guide position must be a finite number",
                ));
            }
        }

        resolve_selection(&self.selected_layouts)?;
        Ok(())
    }

    /// Find a font asset by id
    pub fn font(&self, id: &str) -> Option<&FontAsset> {
        self.font_assets.iter().find(|f| f.id == id)
    }

    /// Uploaded font assets, the ones whose binaries travel with the bundle
    pub fn uploaded_fonts(&self) -> impl Iterator<Item = &FontAsset> {
        self.font_assets.iter().filter(|f| f.is_uploaded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typography::TypographyRole;

    #[test]
    fn test_default_config_is_valid() {
        let config = TemplateConfig::default();
        config.validate().unwrap();
        assert_eq!(config.version, CURRENT_VERSION);
        assert_eq!(config.selected_layouts.len(), 11);
        assert!(Uuid::parse_str(&config.id).is_ok());
    }

    #[test]
    fn test_minimal_json_takes_defaults() {
        let config = TemplateConfig::from_json_str(r#"{ "name": "Brand" }"#).unwrap();
        assert_eq!(config.name, "Brand");
        assert_eq!(config.colors, ThemeColorSet::cbre());
        assert_eq!(config.slide_size, SlideSize::Widescreen);
        assert!(config.guides.is_empty());
        assert_eq!(config.font_assets.len(), default_fonts().len());
        assert!(config.typography.get(TypographyRole::Display).is_some());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = TemplateConfig::new("Roundtrip");
        config.guides.push(Guide::vertical(960.0));
        config.selected_layouts = vec!["blank".to_string()];

        let json = config.to_json_string().unwrap();
        let back = TemplateConfig::from_json_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = TemplateConfig::new("Roundtrip");
        config.slide_size = SlideSize::A4Landscape;
        config.guides.push(Guide::horizontal(540.0));

        let toml = config.to_toml_string().unwrap();
        let back = TemplateConfig::from_toml_str(&toml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_hand_written_toml() {
        let toml = r##"
name = "Hand Written"
slideSize = "A4-landscape"
selectedLayouts = ["title-slide", "blank"]

[colors]
accent1 = "#FF6600"

[[guides]]
orientation = "vertical"
position = 100
"##;
        let config = TemplateConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.slide_size, SlideSize::A4Landscape);
        assert_eq!(config.colors.accent1.as_str(), "#FF6600");
        assert_eq!(config.guides, vec![Guide::vertical(100.0)]);
        assert_eq!(config.selected_layouts.len(), 2);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = TemplateConfig::from_json_str(r#"{ "name": "  " }"#).unwrap_err();
        assert_eq!(err.code(), "CFG005");
    }

    #[test]
    fn test_unknown_layout_rejected() {
        let err =
            TemplateConfig::from_json_str(r#"{ "name": "x", "selectedLayouts": ["nope"] }"#)
                .unwrap_err();
        assert_eq!(err.code(), "CFG002");
    }

    #[test]
    fn test_bad_hex_rejected() {
        let err = TemplateConfig::from_json_str(r#"{ "name": "x", "colors": { "dark1": "red" } }"#)
            .unwrap_err();
        assert_eq!(err.code(), "CFG006");
    }

    #[test]
    fn test_zero_font_size_rejected() {
        let json = r##"{
            "name": "x",
            "typography": {
                "heading": { "fontId": "calibre-regular", "fontSize": 0, "color": "#000000" }
            }
        }"##;
        let err = TemplateConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("typography.heading.fontSize"));
    }

    #[test]
    fn test_duplicate_font_ids_rejected() {
        let mut config = TemplateConfig::new("x");
        let dup = config.font_assets[0].clone();
        config.font_assets.push(dup);
        assert_eq!(config.validate().unwrap_err().code(), "CFG005");
    }

    #[test]
    fn test_font_file_name_outside_directory_rejected() {
        let mut config = TemplateConfig::new("x");
        config.font_assets.push(FontAsset::uploaded(
            "sneaky",
            "Sneaky",
            "Sneaky",
            400,
            "../../secret.ttf",
        ));
        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), "CFG005");
        assert!(err.to_string().contains("fontAssets.fileName"));
    }

    #[test]
    fn test_shared_font_file_name_rejected() {
        let mut config = TemplateConfig::new("x");
        config
            .font_assets
            .push(FontAsset::uploaded("a", "Acme", "Acme", 400, "Acme.ttf"));
        config
            .font_assets
            .push(FontAsset::uploaded("b", "Acme Bold", "Acme", 700, "Acme.ttf"));
        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), "CFG005");
        assert!(err.to_string().contains("Acme.ttf"));
    }

    #[test]
    fn test_font_file_name_checked_on_load() {
        let json = r#"{
            "name": "x",
            "version": 3,
            "fontAssets": [
                { "id": "up", "name": "Up", "family": "Up", "source": "uploaded", "fileName": "/etc/passwd" }
            ]
        }"#;
        let err = TemplateConfig::from_json_str(json).unwrap_err();
        assert_eq!(err.code(), "CFG005");
    }

    #[test]
    fn test_future_version_rejected() {
        let err = TemplateConfig::from_json_str(r#"{ "name": "x", "version": 7 }"#).unwrap_err();
        assert_eq!(err.code(), "CFG003");
    }

    #[test]
    fn test_save_and_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let config = TemplateConfig::new("On Disk");

        let json_path = dir.path().join("theme.json");
        config.save(&json_path).unwrap();
        assert!(std::fs::read_to_string(&json_path).unwrap().starts_with('{'));
        assert_eq!(TemplateConfig::from_file(&json_path).unwrap(), config);

        let toml_path = dir.path().join("theme.toml");
        config.save(&toml_path).unwrap();
        assert_eq!(TemplateConfig::from_file(&toml_path).unwrap(), config);
    }
}
