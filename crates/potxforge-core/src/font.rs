//! Font assets and the heading/body font slots.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Upright or italic face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Where a font asset came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSource {
    /// Bundled with the application
    #[default]
    Default,
    /// Uploaded by the user
    Uploaded,
}

/// A single font face the typography can reference by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontAsset {
    /// Stable identifier referenced by typography entries
    pub id: String,

    /// Display name, e.g. "Calibre Light"
    pub name: String,

    /// Family name, e.g. "Calibre"
    pub family: String,

    /// Numeric weight on the 100-900 scale
    #[serde(default = "default_weight")]
    pub weight: u16,

    #[serde(default)]
    pub style: FontStyle,

    #[serde(default)]
    pub source: FontSource,

    /// Where the bundled file is served from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// File name of an uploaded binary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Whether the file already encodes its weight (a "Light" or "Semibold"
    /// cut) rather than needing PowerPoint to synthesize bold.
    /// `None` falls back to inspecting the display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_distinct_weight_file: Option<bool>,
}

fn default_weight() -> u16 {
    400
}

fn weight_variant_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(r"(?i)\b(extra[\s-]?bold|semi[\s-]?bold|light|medium|thin|black)\b").ok()
        })
        .as_ref()
}

impl FontAsset {
    /// Create a bundled font asset
    pub fn bundled(
        id: impl Into<String>,
        name: impl Into<String>,
        family: impl Into<String>,
        weight: u16,
    ) -> Self {
        let id = id.into();
        Self {
            url: Some(format!("/fonts/{id}.woff2")),
            id,
            name: name.into(),
            family: family.into(),
            weight,
            style: FontStyle::Normal,
            source: FontSource::Default,
            file_name: None,
            is_distinct_weight_file: None,
        }
    }

    /// Create an uploaded font asset
    pub fn uploaded(
        id: impl Into<String>,
        name: impl Into<String>,
        family: impl Into<String>,
        weight: u16,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            family: family.into(),
            weight,
            style: FontStyle::Normal,
            source: FontSource::Uploaded,
            url: None,
            file_name: Some(file_name.into()),
            is_distinct_weight_file: None,
        }
    }

    /// Set the face style
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Declare explicitly whether the file is a pre-built weight cut
    pub fn with_distinct_weight(mut self, distinct: bool) -> Self {
        self.is_distinct_weight_file = Some(distinct);
        self
    }

    /// Whether this face is a pre-built weight variant.
    ///
    /// Uses the explicit flag when present, otherwise matches the display name
    /// against Light/Medium/Thin/Black/Semibold/ExtraBold.
    pub fn is_weight_variant(&self) -> bool {
        self.is_distinct_weight_file
            .unwrap_or_else(|| weight_variant_pattern().is_some_and(|re| re.is_match(&self.name)))
    }

    pub fn is_italic(&self) -> bool {
        self.style == FontStyle::Italic
    }

    pub fn is_uploaded(&self) -> bool {
        self.source == FontSource::Uploaded
    }

    /// The recorded file name, checked with [`check_file_name`]
    pub fn checked_file_name(&self) -> Result<Option<&str>> {
        self.file_name.as_deref().map(check_file_name).transpose()
    }
}

/// Accept only a bare file name: no directories, no `.`/`..`, not empty.
///
/// The name is joined onto the font directory and reused as the bundle
/// entry `fonts/<name>`.
pub fn check_file_name(name: &str) -> Result<&str> {
    let bare = Path::new(name).file_name().and_then(|n| n.to_str());
    match bare {
        Some(bare) if bare == name && !name.contains(['/', '\\']) => Ok(name),
        _ => Err(ConfigError::invalid_value(
            "fontAssets.fileName",
            format!("'{name}' is not a plain file name"),
        )),
    }
}

/// Find an asset by id
pub fn find_font<'a>(fonts: &'a [FontAsset], id: &str) -> Option<&'a FontAsset> {
    fonts.iter().find(|f| f.id == id)
}

/// The bundled font list: Calibre, Financier Display and Space Mono across weights
pub fn default_fonts() -> Vec<FontAsset> {
    vec![
        FontAsset::bundled("calibre-light", "Calibre Light", "Calibre", 300),
        FontAsset::bundled("calibre-regular", "Calibre", "Calibre", 400),
        FontAsset::bundled("calibre-medium", "Calibre Medium", "Calibre", 500),
        FontAsset::bundled("calibre-semibold", "Calibre Semibold", "Calibre", 600),
        FontAsset::bundled("calibre-bold", "Calibre Bold", "Calibre", 700),
        FontAsset::bundled(
            "financier-display-light",
            "Financier Display Light",
            "Financier Display",
            300,
        ),
        FontAsset::bundled(
            "financier-display-regular",
            "Financier Display",
            "Financier Display",
            400,
        ),
        FontAsset::bundled(
            "financier-display-medium",
            "Financier Display Medium",
            "Financier Display",
            500,
        ),
        FontAsset::bundled(
            "financier-display-semibold",
            "Financier Display Semibold",
            "Financier Display",
            600,
        ),
        FontAsset::bundled("space-mono-regular", "Space Mono", "Space Mono", 400),
        FontAsset::bundled("space-mono-bold", "Space Mono Bold", "Space Mono", 700),
    ]
}

/// One of the two theme font slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontConfig {
    /// Family name written into the theme font scheme
    pub family: String,

    /// Asset the slot was picked from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_id: Option<String>,
}

impl FontConfig {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            font_id: None,
        }
    }
}

/// Heading (major) and body (minor) font slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSlots {
    pub heading: FontConfig,
    pub body: FontConfig,
}

impl Default for FontSlots {
    fn default() -> Self {
        Self {
            heading: FontConfig {
                family: "Financier Display".to_string(),
                font_id: Some("financier-display-regular".to_string()),
            },
            body: FontConfig {
                family: "Calibre".to_string(),
                font_id: Some("calibre-regular".to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_variant_from_name() {
        let light = FontAsset::bundled("a", "Calibre Light", "Calibre", 300);
        let semibold = FontAsset::bundled("b", "Calibre SemiBold", "Calibre", 600);
        let extra = FontAsset::bundled("c", "Acme Extra-Bold", "Acme", 800);
        let bold = FontAsset::bundled("d", "Calibre Bold", "Calibre", 700);
        let regular = FontAsset::bundled("e", "Calibre", "Calibre", 400);

        assert!(light.is_weight_variant());
        assert!(semibold.is_weight_variant());
        assert!(extra.is_weight_variant());
        assert!(!bold.is_weight_variant());
        assert!(!regular.is_weight_variant());
    }

    #[test]
    fn test_plain_file_names_accepted() {
        assert_eq!(check_file_name("AcmeSans.ttf").unwrap(), "AcmeSans.ttf");
        assert_eq!(check_file_name("Acme Sans-Bold.otf").unwrap(), "Acme Sans-Bold.otf");
    }

    #[test]
    fn test_path_like_file_names_rejected() {
        for name in [
            "",
            ".",
            "..",
            "../x.ttf",
            "../../secret.ttf",
            "/etc/passwd",
            "sub/x.ttf",
            "x.ttf/",
            "..\\x.ttf",
            "C:\\fonts\\x.ttf",
        ] {
            let err = check_file_name(name).unwrap_err();
            assert_eq!(err.code(), "CFG005", "{name:?} should be rejected");
        }
    }

    #[test]
    fn test_checked_file_name_on_asset() {
        let bundled = FontAsset::bundled("a", "Calibre", "Calibre", 400);
        assert_eq!(bundled.checked_file_name().unwrap(), None);

        let ok = FontAsset::uploaded("b", "Acme", "Acme", 400, "Acme.ttf");
        assert_eq!(ok.checked_file_name().unwrap(), Some("Acme.ttf"));

        let bad = FontAsset::uploaded("c", "Acme", "Acme", 400, "../Acme.ttf");
        assert!(bad.checked_file_name().is_err());
    }

    #[test]
    fn test_name_match_needs_word_boundary() {
        // "Lighthouse" is a family name, not a weight cut
        let font = FontAsset::bundled("a", "Lighthouse Sans", "Lighthouse Sans", 400);
        assert!(!font.is_weight_variant());
    }

    #[test]
    fn test_explicit_flag_wins_over_name() {
        let font = FontAsset::uploaded("a", "Brand Hairline", "Brand", 200, "brand-hairline.otf")
            .with_distinct_weight(true);
        assert!(font.is_weight_variant());

        let font =
            FontAsset::bundled("b", "Calibre Light", "Calibre", 300).with_distinct_weight(false);
        assert!(!font.is_weight_variant());
    }

    #[test]
    fn test_default_fonts_have_unique_ids() {
        let fonts = default_fonts();
        let mut ids: Vec<&str> = fonts.iter().map(|f| f.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), fonts.len());
        assert!(find_font(&fonts, "calibre-light").is_some());
        assert!(find_font(&fonts, "missing").is_none());
    }

    #[test]
    fn test_font_asset_json_shape() {
        let json = r#"{
            "id": "brand-italic",
            "name": "Brand Italic",
            "family": "Brand",
            "weight": 400,
            "style": "italic",
            "source": "uploaded",
            "fileName": "Brand-Italic.ttf"
        }"#;
        let font: FontAsset = serde_json::from_str(json).unwrap();
        assert!(font.is_italic());
        assert!(font.is_uploaded());
        assert_eq!(font.file_name.as_deref(), Some("Brand-Italic.ttf"));
        assert_eq!(font.is_distinct_weight_file, None);
    }
}
