//! # potxforge-core
//!
//! The theme configuration model behind potxforge.
//!
//! A [`TemplateConfig`] gathers everything a PowerPoint template is built
//! from: the twelve theme colors, heading/body font slots, font assets,
//! per-role typography, the slide size, alignment guides and the selected
//! layouts from the fixed catalog. It has no knowledge of OOXML; the
//! `potxforge-pptx` crate turns it into a package.
//!
//! ## Example
//!
//! ```rust,ignore
//! use potxforge_core::TemplateConfig;
//!
//! let config = TemplateConfig::from_file("brand.json")?;
//! println!("{} layouts selected", config.selected_layouts.len());
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod layout;
pub mod migrate;
pub mod slide;
pub mod typography;

// Re-exports
pub use color::{ColorKey, CustomColor, HexColor, ThemeColorSet};
pub use config::TemplateConfig;
pub use error::{ConfigError, Result};
pub use font::{check_file_name, default_fonts, find_font, FontAsset, FontConfig, FontSlots, FontSource, FontStyle};
pub use layout::{
    find_layout, layout_at, resolve_selection, Anchor, GridRect, LayoutTemplate, PlaceholderKind,
    PlaceholderSpec, PlaceholderType, CATALOG,
};
pub use migrate::CURRENT_VERSION;
pub use slide::{Guide, Orientation, SlideSize};
pub use typography::{
    BulletStyle, TextAlign, TextTransform, Typography, TypographyRole, TypographyStyle,
};
