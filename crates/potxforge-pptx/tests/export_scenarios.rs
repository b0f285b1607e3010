//! End-to-end export tests
//!
//! Each test builds a real `.potx`, reads it back with `zip::ZipArchive`
//! and checks the parts PowerPoint is strict about.

use std::io::{Cursor, Read};

use chrono::{TimeZone, Utc};
use potxforge_core::{
    FontConfig, Guide, HexColor, SlideSize, TemplateConfig, ThemeColorSet, TypographyRole,
};
use potxforge_pptx::constants::{CT_SLIDE_LAYOUT, POTX_MIME_TYPE};
use potxforge_pptx::xml::check_well_formed;
use potxforge_pptx::{DocProps, PotxPackage};
use zip::ZipArchive;

fn build(config: &TemplateConfig) -> ZipArchive<Cursor<Vec<u8>>> {
    let props = DocProps::new(config.name.clone(), "Tests")
        .at(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    let bytes = PotxPackage::new().with_props(props).build(config).unwrap();
    ZipArchive::new(Cursor::new(bytes)).unwrap()
}

fn read(zip: &mut ZipArchive<Cursor<Vec<u8>>>, path: &str) -> String {
    let mut file = zip.by_name(path).unwrap();
    let mut text = String::new();
    file.read_to_string(&mut text).unwrap();
    text
}

fn names(zip: &ZipArchive<Cursor<Vec<u8>>>) -> Vec<String> {
    zip.file_names().map(|s| s.to_string()).collect()
}

#[test]
fn minimal_export_has_one_blank_layout() {
    let mut config = TemplateConfig::new("Minimal");
    config.selected_layouts = vec!["blank".to_string()];
    let mut zip = build(&config);

    let layouts: Vec<String> = names(&zip)
        .into_iter()
        .filter(|n| n.starts_with("ppt/slideLayouts/slideLayout"))
        .collect();
    assert_eq!(layouts, vec!["ppt/slideLayouts/slideLayout1.xml".to_string()]);

    let layout = read(&mut zip, "ppt/slideLayouts/slideLayout1.xml");
    assert!(layout.contains(r#"type="blank""#));
    assert!(!layout.contains("<p:sp>"));

    let types = read(&mut zip, "[Content_Types].xml");
    assert_eq!(types.matches(CT_SLIDE_LAYOUT).count(), 1);

    let view = read(&mut zip, "ppt/viewProps.xml");
    assert!(!view.contains("guideLst"));
}

#[test]
fn every_part_is_well_formed_and_declared() {
    let mut config = TemplateConfig::new("Full & Complete");
    config.guides = vec![Guide::vertical(960.0), Guide::horizontal(540.0)];
    let mut zip = build(&config);
    let types = read(&mut zip, "[Content_Types].xml");

    for name in names(&zip) {
        let xml = read(&mut zip, &name);
        check_well_formed(&name, &xml).unwrap();
        if !name.ends_with(".rels") && name != "[Content_Types].xml" {
            assert!(
                types.contains(&format!(r#"PartName="/{name}""#)),
                "no override for {name}"
            );
        }
    }
    assert_eq!(names(&zip).len(), 12 + 2 * 11);
}

#[test]
fn layout_count_consistency() {
    for selection in [vec![], vec!["title-slide", "comparison", "quote"]] {
        let mut config = TemplateConfig::new("Count");
        config.selected_layouts = selection.iter().map(|s| s.to_string()).collect();
        let expected = if selection.is_empty() { 11 } else { 3 };
        let mut zip = build(&config);

        let types = read(&mut zip, "[Content_Types].xml");
        let master = read(&mut zip, "ppt/slideMasters/slideMaster1.xml");
        let rels = read(&mut zip, "ppt/slideMasters/_rels/slideMaster1.xml.rels");
        let files = names(&zip)
            .iter()
            .filter(|n| n.starts_with("ppt/slideLayouts/slideLayout") && n.ends_with(".xml"))
            .count();

        assert_eq!(types.matches(CT_SLIDE_LAYOUT).count(), expected);
        assert_eq!(master.matches("<p:sldLayoutId ").count(), expected);
        assert_eq!(rels.matches("/relationships/slideLayout\"").count(), expected);
        assert_eq!(files, expected);
    }
}

#[test]
fn center_guide_literal_in_view_props() {
    let mut config = TemplateConfig::new("Guides");
    config.guides = vec![
        Guide::vertical(960.0),
        Guide::vertical(960.0),
        Guide::horizontal(5000.0),
    ];
    let mut zip = build(&config);
    let view = read(&mut zip, "ppt/viewProps.xml");
    assert!(view.contains(r#"<p:guide orient="vert" pos="3840"/>"#));
    assert_eq!(view.matches("<p:guide ").count(), 1);
}

#[test]
fn color_scheme_follows_rename_table() {
    let mut config = TemplateConfig::new("Colors");
    config.colors = ThemeColorSet::cbre();
    config.colors.hyperlink = HexColor::parse("#112233").unwrap();
    config.colors.followed_hyperlink = HexColor::parse("#445566").unwrap();
    let mut zip = build(&config);
    let theme = read(&mut zip, "ppt/theme/theme1.xml");
    assert!(theme.contains(r#"<a:hlink><a:srgbClr val="112233"/></a:hlink>"#));
    assert!(theme.contains(r#"<a:folHlink><a:srgbClr val="445566"/></a:folHlink>"#));
}

#[test]
fn unresolved_font_falls_back_to_minor_theme_font() {
    let mut config = TemplateConfig::new("Fallback");
    let mut heading = config.typography.style(TypographyRole::Heading);
    heading.font_id = "not-installed".to_string();
    heading.font_weight = 700;
    config.typography.set(TypographyRole::Heading, heading);

    let mut zip = build(&config);
    let master = read(&mut zip, "ppt/slideMasters/slideMaster1.xml");
    let start = master.find("<p:titleStyle>").unwrap();
    let end = master.find("</p:titleStyle>").unwrap();
    let title = &master[start..end];
    assert!(title.contains(
        r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/>"#
    ));
    assert!(title.contains(r#"b="1""#));
}

#[test]
fn weight_variant_emits_literal_typeface() {
    let mut config = TemplateConfig::new("Variant");
    config.fonts.body = FontConfig::new("Arial");
    for asset in &mut config.font_assets {
        if asset.id == "calibre-light" {
            asset.weight = 700;
        }
    }
    config.selected_layouts = vec!["title-slide".to_string()];

    let mut zip = build(&config);
    let layout = read(&mut zip, "ppt/slideLayouts/slideLayout1.xml");
    let literal = r#"b="0" i="0"><a:solidFill><a:schemeClr val="dk2"/></a:solidFill><a:latin typeface="Calibre Light"/><a:ea typeface="Calibre Light"/><a:cs typeface="Calibre Light"/>"#;
    assert!(layout.contains(literal), "{layout}");
}

#[test]
fn a4_package_declares_slide_type() {
    let mut config = TemplateConfig::new("Paper");
    config.slide_size = SlideSize::A4Landscape;
    let mut zip = build(&config);
    let pres = read(&mut zip, "ppt/presentation.xml");
    assert!(pres.contains(r#"<p:sldSz cx="10692000" cy="7560000" type="A4"/>"#));
    let app = read(&mut zip, "docProps/app.xml");
    assert!(app.contains("A4 Paper"));
}

#[test]
fn template_content_type_and_mime() {
    let mut zip = build(&TemplateConfig::new("Mime"));
    let types = read(&mut zip, "[Content_Types].xml");
    assert!(types.contains(&format!("{POTX_MIME_TYPE}.main+xml")));
}

#[test]
fn export_is_reproducible_with_pinned_props() {
    let config = TemplateConfig::new("Stable");
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let builder = || PotxPackage::new().with_props(DocProps::new("Stable", "x").at(at));
    let a = builder().generate_parts(&config).unwrap();
    let b = builder().generate_parts(&config).unwrap();
    assert_eq!(a, b);
}
