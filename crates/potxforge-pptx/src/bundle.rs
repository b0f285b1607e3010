//! The distributable bundle: the template, uploaded fonts, a manifest and a
//! README, zipped together.

use std::path::Path;

use chrono::{DateTime, Utc};
use potxforge_core::{check_file_name, resolve_selection, FontAsset, TemplateConfig};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::archive::{PackageArchive, ZipPackage};
use crate::docprops::w3cdtf;
use crate::error::{PotxError, Result};

/// Manifest path inside the bundle
pub const MANIFEST_PATH: &str = "manifest.json";

/// README path inside the bundle
pub const README_PATH: &str = "README.md";

/// Folder holding font binaries
pub const FONTS_DIR: &str = "fonts";

/// An uploaded font binary travelling with the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    pub asset: FontAsset,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FontFile {
    pub fn new(asset: FontAsset, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            asset,
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read an uploaded asset's binary from `dir`
    pub fn load(asset: &FontAsset, dir: &Path) -> Result<Self> {
        let file_name = asset
            .checked_file_name()?
            .ok_or_else(|| PotxError::missing_font_file(&asset.id, "no file name recorded"))?
            .to_string();
        let path = dir.join(&file_name);
        let bytes = std::fs::read(&path).map_err(|e| {
            PotxError::missing_font_file(&asset.id, format!("{}: {e}", path.display()))
        })?;
        Ok(Self::new(asset.clone(), file_name, bytes))
    }

    /// Hex SHA-256 of the binary
    pub fn sha256(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.bytes);
        format!("{:x}", hasher.finalize())
    }

    /// Path inside the bundle
    pub fn bundle_path(&self) -> String {
        format!("{FONTS_DIR}/{}", self.file_name)
    }
}

/// One font in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestFont {
    pub id: String,
    pub name: String,
    pub family: String,
    pub weight: u16,
    pub file: String,
    pub sha256: String,
}

/// `manifest.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleManifest {
    /// Generator identifier, e.g. "potxforge v1.0.0"
    pub generator: String,
    /// W3CDTF timestamp of generation
    pub generated_at: String,
    pub template: String,
    pub template_id: String,
    /// File name of the `.potx` inside the bundle
    pub template_file: String,
    pub slide_size: String,
    pub layouts: Vec<String>,
    #[serde(default)]
    pub fonts: Vec<ManifestFont>,
}

impl BundleManifest {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A template with everything needed to install it
#[derive(Debug, Clone)]
pub struct Bundle {
    config: TemplateConfig,
    potx: Vec<u8>,
    fonts: Vec<FontFile>,
    generated_at: DateTime<Utc>,
}

impl Bundle {
    /// Bundle an already generated `.potx`
    pub fn new(config: &TemplateConfig, potx: Vec<u8>) -> Self {
        Self {
            config: config.clone(),
            potx,
            fonts: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    /// Pin the manifest timestamp
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.generated_at = timestamp;
        self
    }

    pub fn add_font(&mut self, font: FontFile) {
        self.fonts.push(font);
    }

    /// Load every uploaded font of the configuration from `dir`.
    ///
    /// A missing binary is an error; bundled fonts are never copied.
    pub fn with_fonts_from(mut self, dir: &Path) -> Result<Self> {
        let uploaded: Vec<FontAsset> = self.config.uploaded_fonts().cloned().collect();
        for asset in &uploaded {
            let font = FontFile::load(asset, dir)?;
            log::debug!(
                "Bundling font '{}' from {} ({} bytes)",
                asset.id,
                font.file_name,
                font.bytes.len()
            );
            self.fonts.push(font);
        }
        Ok(self)
    }

    pub fn fonts(&self) -> &[FontFile] {
        &self.fonts
    }

    /// File name of the template inside the bundle
    pub fn template_file_name(&self) -> String {
        format!("{}.potx", file_stem(&self.config.name))
    }

    pub fn manifest(&self) -> Result<BundleManifest> {
        let layouts = resolve_selection(&self.config.selected_layouts)?
            .into_iter()
            .map(|l| l.id.to_string())
            .collect();
        Ok(BundleManifest {
            generator: format!("potxforge v{}", env!("CARGO_PKG_VERSION")),
            generated_at: w3cdtf(&self.generated_at),
            template: self.config.name.clone(),
            template_id: self.config.id.clone(),
            template_file: self.template_file_name(),
            slide_size: self.config.slide_size.to_string(),
            layouts,
            fonts: self
                .fonts
                .iter()
                .map(|f| ManifestFont {
                    id: f.asset.id.clone(),
                    name: f.asset.name.clone(),
                    family: f.asset.family.clone(),
                    weight: f.asset.weight,
                    file: f.bundle_path(),
                    sha256: f.sha256(),
                })
                .collect(),
        })
    }

    /// `README.md` with installation steps
    pub fn readme(&self) -> String {
        let mut readme = format!("# {}\n\n", self.config.name);
        readme.push_str(&format!(
            "PowerPoint template `{}` for {} slides.\n\n",
            self.template_file_name(),
            self.config.slide_size
        ));

        if !self.fonts.is_empty() {
            readme.push_str("## 1. Install the fonts\n\n");
            readme.push_str(
                "Install every file in `fonts/` before opening the template, then restart PowerPoint.\n\n",
            );
            for font in &self.fonts {
                readme.push_str(&format!(
                    "- `{}`: {} ({})\n",
                    font.bundle_path(),
                    font.asset.name,
                    font.asset.weight
                ));
            }
            readme.push('\n');
            readme.push_str("## 2. Install the template\n\n");
        } else {
            readme.push_str("## Install the template\n\n");
        }

        readme.push_str(&format!(
            "- Windows: copy `{name}` to `Documents\\Custom Office Templates`.\n\
             - macOS: copy `{name}` to `~/Library/Group Containers/UBF8T346G9.Office/User Content/Templates`.\n\n\
             The template then appears under *File > New > Custom*.\n",
            name = self.template_file_name()
        ));
        readme
    }

    /// Write the bundle into an archive
    pub fn write_into<A: PackageArchive>(&self, mut archive: A) -> Result<A::Output> {
        let manifest = self.manifest()?;
        archive.add_bytes(&self.template_file_name(), &self.potx)?;
        for font in &self.fonts {
            check_file_name(&font.file_name)?;
            archive.add_bytes(&font.bundle_path(), &font.bytes)?;
        }
        archive.add_text(MANIFEST_PATH, &manifest.to_json()?)?;
        archive.add_text(README_PATH, &self.readme())?;
        archive.finish()
    }

    /// The bundle as ZIP bytes
    pub fn to_zip_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.write_into(ZipPackage::in_memory())?.into_inner())
    }
}

/// A file-system friendly stem for a template name
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    let stem = stem
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if stem.is_empty() {
        "template".to_string()
    } else {
        stem
    }
}
