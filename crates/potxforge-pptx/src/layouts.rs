//! Slide layout parts (`ppt/slideLayouts/slideLayoutN.xml`).
//!
//! One renderer walks a catalog entry's placeholder list; the geometry is
//! scaled from the reference grid onto the configured slide size.

use potxforge_core::{
    layout_at, LayoutTemplate, PlaceholderKind, PlaceholderSpec, TypographyRole, CATALOG,
};

use crate::constants::*;
use crate::error::{PotxError, Result};
use crate::master::body_levels;
use crate::relationships::Relationships;
use crate::shapes::{prompt, shape_tree, PlaceholderRef, PlaceholderShape};
use crate::text_style::{TextColor, TextStyle};
use crate::translate::OoxmlConfig;
use crate::units::GridScale;
use crate::xml::{self, escape};

/// Generate the layout at a catalog position
pub fn generate_layout_at(index: usize, config: &OoxmlConfig) -> Result<String> {
    let layout =
        layout_at(index).ok_or_else(|| PotxError::invalid_layout(index, CATALOG.len()))?;
    Ok(generate_layout(layout, config))
}

/// Generate one layout part
pub fn generate_layout(layout: &LayoutTemplate, config: &OoxmlConfig) -> String {
    let scale = GridScale::for_size(config.slide_size);

    let shapes: Vec<PlaceholderShape> = layout
        .indexed_placeholders()
        .into_iter()
        .enumerate()
        .map(|(i, (idx, spec))| {
            let number = i as u32 + 1;
            PlaceholderShape::new(
                number + 1,
                format!("{} {}", spec.name, number),
                PlaceholderRef::new(spec.ph_type.ooxml_type(), idx),
                scale.rect(&spec.rect),
            )
            .with_anchor(spec.anchor)
            .with_list_style(list_style(spec, config))
            .with_paragraphs(prompt(prompt_text(spec)))
        })
        .collect();

    let body = format!(
        r#"<p:sldLayout xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}" type="{layout_type}" preserve="1">
  <p:cSld name="{name}">
    {tree}
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#,
        layout_type = layout.layout_type,
        name = escape(layout.name),
        tree = shape_tree(&shapes),
    );
    xml::document(&body)
}

/// `ppt/slideLayouts/_rels/slideLayoutN.xml.rels`
pub fn layout_relationships() -> Relationships {
    let mut rels = Relationships::new();
    rels.add("../slideMasters/slideMaster1.xml", REL_TYPE_SLIDE_MASTER);
    rels
}

/// The placeholder's role style with the layout's overrides applied
fn placeholder_style(spec: &PlaceholderSpec, config: &OoxmlConfig) -> TextStyle {
    let mut style = config.text_style(spec.role);
    if let Some(align) = spec.align {
        style = style.with_alignment(align);
    }
    if let Some(key) = spec.color {
        style = style.with_color(TextColor::Scheme(key));
    }
    style
}

fn list_style(spec: &PlaceholderSpec, config: &OoxmlConfig) -> String {
    match spec.kind {
        PlaceholderKind::Image | PlaceholderKind::Chart | PlaceholderKind::Table => String::new(),
        PlaceholderKind::Body if spec.role == TypographyRole::BodyLarge => {
            let base = placeholder_style(spec, config);
            body_levels(&base)
                .iter()
                .enumerate()
                .map(|(i, style)| style.paragraph_properties(&format!("a:lvl{}pPr", i + 1)))
                .collect()
        }
        _ => placeholder_style(spec, config)
            .without_bullet()
            .paragraph_properties("a:lvl1pPr"),
    }
}

fn prompt_text(spec: &PlaceholderSpec) -> &'static str {
    match spec.kind {
        PlaceholderKind::Title => "Click to edit Master title style",
        PlaceholderKind::Subtitle if spec.ph_type.ooxml_type() == Some("subTitle") => {
            "Click to edit Master subtitle style"
        }
        PlaceholderKind::Body if spec.role == TypographyRole::Quote => "Click to add quote",
        PlaceholderKind::Subtitle | PlaceholderKind::Body => "Click to edit Master text styles",
        PlaceholderKind::Image => "Click icon to add picture",
        PlaceholderKind::Chart => "Click icon to add chart",
        PlaceholderKind::Table => "Click icon to add table",
    }
}
