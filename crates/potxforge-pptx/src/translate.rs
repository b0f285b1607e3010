//! Translation from the application configuration to the OOXML one.
//!
//! This is where application color names become scheme slot names
//! (`dark1` → `dk1`) and the heading/body font slots become the theme's
//! major/minor fonts. Generators only ever see an [`OoxmlConfig`].

use potxforge_core::{
    resolve_selection, ColorKey, CustomColor, FontAsset, Guide, HexColor, LayoutTemplate,
    SlideSize, TemplateConfig, ThemeColorSet, Typography, TypographyRole,
};

use crate::error::Result;
use crate::fonts::FontScheme;
use crate::text_style::TextStyle;

/// The twelve colors keyed by OOXML scheme slot, in scheme order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    slots: Vec<(&'static str, HexColor)>,
}

impl ColorScheme {
    pub fn from_theme(colors: &ThemeColorSet) -> Self {
        Self {
            slots: colors
                .iter()
                .map(|(key, color)| (key.ooxml_key(), color.clone()))
                .collect(),
        }
    }

    /// Color of a scheme slot (`dk1`, `accent3`, `folHlink`, ...)
    pub fn get(&self, slot: &str) -> Option<&HexColor> {
        self.slots.iter().find(|(k, _)| *k == slot).map(|(_, c)| c)
    }

    /// Color of an application key
    pub fn by_key(&self, key: ColorKey) -> Option<&HexColor> {
        self.get(key.ooxml_key())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &HexColor)> {
        self.slots.iter().map(|(k, c)| (*k, c))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Everything the part generators read
#[derive(Debug, Clone)]
pub struct OoxmlConfig {
    /// Theme and document title
    pub name: String,
    pub author: String,
    pub colors: ColorScheme,
    pub custom_colors: Vec<CustomColor>,
    pub fonts: FontScheme,
    pub font_assets: Vec<FontAsset>,
    pub typography: Typography,
    pub slide_size: SlideSize,
    /// Guides as configured; conversion and dedup happen at assembly
    pub guides: Vec<Guide>,
    /// Resolved layouts, in catalog order
    pub layouts: Vec<&'static LayoutTemplate>,
}

impl OoxmlConfig {
    /// Translate an application configuration.
    ///
    /// Fails on an invalid configuration, before any XML exists.
    pub fn from_template(config: &TemplateConfig) -> Result<Self> {
        config.validate()?;
        let layouts = resolve_selection(&config.selected_layouts)?;

        Ok(Self {
            name: config.name.clone(),
            author: config.author.clone(),
            colors: ColorScheme::from_theme(&config.colors),
            custom_colors: config.custom_colors.clone(),
            fonts: FontScheme::new(&config.fonts.heading.family, &config.fonts.body.family),
            font_assets: config.font_assets.clone(),
            typography: config.typography.clone(),
            slide_size: config.slide_size,
            guides: config.guides.clone(),
            layouts,
        })
    }

    /// Number of slide layouts the package will contain
    pub fn layout_count(&self) -> usize {
        self.layouts.len()
    }

    /// Resolved text properties of a typography role
    pub fn text_style(&self, role: TypographyRole) -> TextStyle {
        TextStyle::from_role(&self.typography.style(role), &self.font_assets, &self.fonts)
    }
}
