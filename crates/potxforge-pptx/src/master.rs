//! The slide master (`ppt/slideMasters/slideMaster1.xml`) and its
//! relationships.

use potxforge_core::layout::{
    BODY_HEIGHT, BODY_TOP, GRID_CONTENT_WIDTH, GRID_MARGIN, TITLE_HEIGHT, TITLE_TOP,
};
use potxforge_core::{Anchor, GridRect, SlideSize, TextAlign, TypographyRole};

use crate::constants::*;
use crate::relationships::Relationships;
use crate::shapes::{prompt, prompt_at_level, shape_tree, PlaceholderRef, PlaceholderShape};
use crate::text_style::TextStyle;
use crate::translate::OoxmlConfig;
use crate::units::{percent_of, pixels_to_emu, EmuRect, GridScale};
use crate::xml;

/// Size ratio and bullet glyph of each body outline level
pub const BODY_LEVELS: [(f64, &str); 5] = [
    (1.0, "•"),
    (0.9, "–"),
    (0.8, "•"),
    (0.7, "–"),
    (0.7, "»"),
];

/// Left margin added per body outline level, in pixels
const LEVEL_INDENT_PX: f64 = 24.0;

/// Footer band boxes as percentages of the slide: x, y, width, height
const DATE_BOX: [f64; 4] = [4.2, 92.6, 20.0, 5.3];
const FOOTER_BOX: [f64; 4] = [33.3, 92.6, 33.4, 5.3];
const SLIDE_NUMBER_BOX: [f64; 4] = [75.8, 92.6, 20.0, 5.3];

const DATE_FIELD_ID: &str = "{1D8BD707-D9CF-40AE-B4C6-C98DA3205C09}";
const SLIDE_NUMBER_FIELD_ID: &str = "{B6F15528-21DE-4FAA-801E-634DDDAF4B2B}";

/// The color map every layout inherits
const COLOR_MAP: &str = r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#;

/// Generate the slide master for `config.layout_count()` layouts.
///
/// Layout ids run from [`SLIDE_LAYOUT_ID_BASE`] and reference `rId2`
/// onwards; `rId1` is the theme.
pub fn generate_slide_master(config: &OoxmlConfig) -> String {
    let shapes = master_placeholders(config);

    let mut layout_ids = String::from("<p:sldLayoutIdLst>");
    for n in 0..config.layout_count() {
        layout_ids.push_str(&format!(
            "\n    <p:sldLayoutId id=\"{}\" r:id=\"rId{}\"/>",
            SLIDE_LAYOUT_ID_BASE as u64 + n as u64,
            n + 2
        ));
    }
    layout_ids.push_str("\n  </p:sldLayoutIdLst>");

    let body = format!(
        r#"<p:sldMaster xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:cSld>
    <p:bg>
      <p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef>
    </p:bg>
    {tree}
  </p:cSld>
  {COLOR_MAP}
  {layout_ids}
  {text_styles}
</p:sldMaster>"#,
        tree = shape_tree(&shapes),
        text_styles = text_styles(config),
    );
    xml::document(&body)
}

/// `ppt/slideMasters/_rels/slideMaster1.xml.rels`
pub fn master_relationships(layout_count: usize) -> Relationships {
    let mut rels = Relationships::new();
    rels.add("../theme/theme1.xml", REL_TYPE_THEME);
    for n in 1..=layout_count {
        rels.add(
            format!("../slideLayouts/slideLayout{n}.xml"),
            REL_TYPE_SLIDE_LAYOUT,
        );
    }
    rels
}

fn percent_rect(size: SlideSize, [x, y, cx, cy]: [f64; 4]) -> EmuRect {
    let (width, height) = (size.width_emu(), size.height_emu());
    EmuRect::new(
        percent_of(width, x),
        percent_of(height, y),
        percent_of(width, cx),
        percent_of(height, cy),
    )
}

fn master_placeholders(config: &OoxmlConfig) -> Vec<PlaceholderShape> {
    let scale = GridScale::for_size(config.slide_size);
    let footer_style = config.text_style(TypographyRole::Footnote).without_bullet();

    let title = PlaceholderShape::new(
        2,
        "Title Placeholder 1",
        PlaceholderRef::new(Some("title"), None),
        scale.rect(&GridRect::new(
            GRID_MARGIN,
            TITLE_TOP,
            GRID_CONTENT_WIDTH,
            TITLE_HEIGHT,
        )),
    )
    .with_anchor(Anchor::Center)
    .with_paragraphs(prompt("Click to edit Master title style"));

    let levels = [
        "Click to edit Master text styles",
        "Second level",
        "Third level",
        "Fourth level",
        "Fifth level",
    ];
    let body = PlaceholderShape::new(
        3,
        "Text Placeholder 2",
        PlaceholderRef::new(Some("body"), Some(1)),
        scale.rect(&GridRect::new(
            GRID_MARGIN,
            BODY_TOP,
            GRID_CONTENT_WIDTH,
            BODY_HEIGHT,
        )),
    )
    .with_anchor(Anchor::Top)
    .with_paragraphs(
        levels
            .iter()
            .zip(0u8..)
            .map(|(text, level)| prompt_at_level(text, level))
            .collect(),
    );

    let date = PlaceholderShape::new(
        4,
        "Date Placeholder 3",
        PlaceholderRef::new(Some("dt"), Some(2)).sized("half"),
        percent_rect(config.slide_size, DATE_BOX),
    )
    .with_anchor(Anchor::Center)
    .with_list_style(footer_list_style(&footer_style, TextAlign::Left))
    .with_paragraphs(field_paragraph(
        DATE_FIELD_ID,
        "datetimeFigureOut",
        "1/1/2025",
    ));

    let footer = PlaceholderShape::new(
        5,
        "Footer Placeholder 4",
        PlaceholderRef::new(Some("ftr"), Some(3)).sized("quarter"),
        percent_rect(config.slide_size, FOOTER_BOX),
    )
    .with_anchor(Anchor::Center)
    .with_list_style(footer_list_style(&footer_style, TextAlign::Center))
    .with_paragraphs(r#"<a:p><a:endParaRPr lang="en-US"/></a:p>"#.to_string());

    let slide_number = PlaceholderShape::new(
        6,
        "Slide Number Placeholder 5",
        PlaceholderRef::new(Some("sldNum"), Some(4)).sized("quarter"),
        percent_rect(config.slide_size, SLIDE_NUMBER_BOX),
    )
    .with_anchor(Anchor::Center)
    .with_list_style(footer_list_style(&footer_style, TextAlign::Right))
    .with_paragraphs(field_paragraph(SLIDE_NUMBER_FIELD_ID, "slidenum", "‹#›"));

    vec![title, body, date, footer, slide_number]
}

fn footer_list_style(style: &TextStyle, align: TextAlign) -> String {
    style
        .clone()
        .with_alignment(align)
        .paragraph_properties("a:lvl1pPr")
}

fn field_paragraph(id: &str, field_type: &str, text: &str) -> String {
    format!(
        r#"<a:p><a:fld id="{id}" type="{field_type}"><a:rPr lang="en-US"/><a:t>{}</a:t></a:fld><a:endParaRPr lang="en-US"/></a:p>"#,
        xml::escape(text)
    )
}

/// Body outline levels derived from the base body style
pub fn body_levels(base: &TextStyle) -> Vec<TextStyle> {
    BODY_LEVELS
        .iter()
        .enumerate()
        .map(|(i, (ratio, glyph))| {
            let indent = pixels_to_emu(LEVEL_INDENT_PX);
            let margin = pixels_to_emu(LEVEL_INDENT_PX * (i + 1) as f64);
            base.scaled(*ratio).with_bullet(glyph, margin, indent)
        })
        .collect()
}

fn text_styles(config: &OoxmlConfig) -> String {
    let title = config
        .text_style(TypographyRole::Heading)
        .without_bullet()
        .paragraph_properties("a:lvl1pPr");

    let body: String = body_levels(&config.text_style(TypographyRole::BodyLarge))
        .iter()
        .enumerate()
        .map(|(i, style)| style.paragraph_properties(&format!("a:lvl{}pPr", i + 1)))
        .collect();

    let other = config
        .text_style(TypographyRole::Body)
        .without_bullet()
        .paragraph_properties("a:lvl1pPr");

    format!(
        r#"<p:txStyles>
    <p:titleStyle>{title}</p:titleStyle>
    <p:bodyStyle>{body}</p:bodyStyle>
    <p:otherStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr>{other}</p:otherStyle>
  </p:txStyles>"#
    )
}
