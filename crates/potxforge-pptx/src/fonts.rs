//! Font resolution for text styles.
//!
//! A typography role names a font asset by id. The asset decides whether
//! PowerPoint sees a theme font reference (`+mj-*` / `+mn-*`) or a literal
//! typeface, and whether bold is switched on.

use potxforge_core::{find_font, FontAsset};

use crate::xml::escape;

/// Weight at and above which a regular face is rendered bold
pub const BOLD_THRESHOLD: u16 = 600;

/// The theme's major (heading) and minor (body) font families
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontScheme {
    pub major: String,
    pub minor: String,
}

impl FontScheme {
    pub fn new(major: impl Into<String>, minor: impl Into<String>) -> Self {
        Self {
            major: major.into(),
            minor: minor.into(),
        }
    }
}

/// Typeface written on `<a:latin>`, `<a:ea>` and `<a:cs>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Typeface {
    /// Theme heading font
    Major,
    /// Theme body font
    Minor,
    /// A font outside the theme, by name
    Literal(String),
}

impl Typeface {
    /// The three typeface elements
    pub fn to_xml(&self) -> String {
        match self {
            Self::Major => {
                r#"<a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/>"#
                    .to_string()
            }
            Self::Minor => {
                r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/>"#
                    .to_string()
            }
            Self::Literal(name) => {
                let name = escape(name);
                format!(
                    r#"<a:latin typeface="{name}"/><a:ea typeface="{name}"/><a:cs typeface="{name}"/>"#
                )
            }
        }
    }
}

/// The outcome of resolving a font id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFont {
    pub typeface: Typeface,
    pub bold: bool,
    pub italic: bool,
}

impl ResolvedFont {
    /// `b` attribute value
    pub fn bold_attr(&self) -> &'static str {
        if self.bold {
            "1"
        } else {
            "0"
        }
    }

    /// `i` attribute value
    pub fn italic_attr(&self) -> &'static str {
        if self.italic {
            "1"
        } else {
            "0"
        }
    }
}

/// Resolve a font id against the asset list.
///
/// `declared_weight` is the role's own weight, used only when the id does not
/// resolve; in that case the minor theme font is used.
pub fn resolve_font(
    font_id: &str,
    fonts: &[FontAsset],
    scheme: &FontScheme,
    declared_weight: u16,
) -> ResolvedFont {
    let Some(asset) = find_font(fonts, font_id) else {
        log::debug!(
            "Font '{}' not found, falling back to the minor theme font",
            font_id
        );
        return ResolvedFont {
            typeface: Typeface::Minor,
            bold: declared_weight >= BOLD_THRESHOLD,
            italic: false,
        };
    };
    resolve_asset(asset, scheme)
}

/// Resolve a known asset
pub fn resolve_asset(asset: &FontAsset, scheme: &FontScheme) -> ResolvedFont {
    if asset.is_weight_variant() {
        // Pre-built weight cuts never get synthesized bold
        return ResolvedFont {
            typeface: Typeface::Literal(asset.name.clone()),
            bold: false,
            italic: asset.is_italic(),
        };
    }

    let typeface = if asset.family == scheme.major {
        Typeface::Major
    } else if asset.family == scheme.minor {
        Typeface::Minor
    } else {
        Typeface::Literal(asset.family.clone())
    };

    ResolvedFont {
        typeface,
        bold: asset.weight >= BOLD_THRESHOLD,
        italic: asset.is_italic(),
    }
}
