//! Presentation-level parts: `presentation.xml`, its properties parts and
//! the package and presentation relationships.

use potxforge_core::SlideSize;

use crate::constants::*;
use crate::guides::GuideEntry;
use crate::relationships::Relationships;
use crate::text_style::font_size_hundredths;
use crate::xml;

/// Default table style (Medium Style 2 - Accent 1)
pub const DEFAULT_TABLE_STYLE: &str = "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}";

/// Left margin step between outline levels of the default text style
const LEVEL_INDENT_EMU: i64 = 457_200;

/// `ppt/presentation.xml`.
///
/// The notes page is the slide turned on its side, so its extents are the
/// slide's swapped.
pub fn presentation_xml(size: SlideSize, default_size_pt: f64) -> String {
    let sld_type = size
        .ooxml_type()
        .map(|t| format!(r#" type="{t}""#))
        .unwrap_or_default();

    let body = format!(
        r#"<p:presentation xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}" saveSubsetFonts="1">
  <p:sldMasterIdLst>
    <p:sldMasterId id="{SLIDE_MASTER_ID}" r:id="rId1"/>
  </p:sldMasterIdLst>
  <p:sldSz cx="{cx}" cy="{cy}"{sld_type}/>
  <p:notesSz cx="{cy}" cy="{cx}"/>
  {text_style}
</p:presentation>"#,
        cx = size.width_emu(),
        cy = size.height_emu(),
        text_style = default_text_style(default_size_pt),
    );
    xml::document(&body)
}

/// `<p:defaultTextStyle>`: nine outline levels in the body font
fn default_text_style(size_pt: f64) -> String {
    let sz = font_size_hundredths(size_pt);
    let mut style = String::from(r#"<p:defaultTextStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
    for level in 1..=9 {
        style.push_str(&format!(
            concat!(
                r#"<a:lvl{n}pPr marL="{mar}" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
                r#"<a:defRPr sz="{sz}" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
                r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr>"#,
                "</a:lvl{n}pPr>"
            ),
            n = level,
            mar = (level - 1) * LEVEL_INDENT_EMU,
            sz = sz,
        ));
    }
    style.push_str("</p:defaultTextStyle>");
    style
}

/// `ppt/presProps.xml`
pub fn pres_props_xml() -> String {
    xml::document(&format!(
        r#"<p:presentationPr xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}"/>"#
    ))
}

/// `ppt/tableStyles.xml`
pub fn table_styles_xml() -> String {
    xml::document(&format!(
        r#"<a:tblStyleLst xmlns:a="{NS_DRAWING}" def="{DEFAULT_TABLE_STYLE}"/>"#
    ))
}

/// `ppt/viewProps.xml`.
///
/// `<p:guideLst>` is left out entirely when there are no guides; PowerPoint
/// asks to repair a file with an empty one.
pub fn view_props_xml(guides: &[GuideEntry]) -> String {
    let guide_list = if guides.is_empty() {
        String::new()
    } else {
        let mut list = String::from("\n      <p:guideLst>");
        for guide in guides {
            list.push_str("\n        ");
            list.push_str(&guide.to_xml());
        }
        list.push_str("\n      </p:guideLst>");
        list
    };

    let body = format!(
        r#"<p:viewPr xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:normalViewPr>
    <p:restoredLeft sz="15620"/>
    <p:restoredTop sz="94660"/>
  </p:normalViewPr>
  <p:slideViewPr>
    <p:cSldViewPr snapToGrid="0">
      <p:cViewPr varScale="1">
        <p:scale>
          <a:sx n="100" d="100"/>
          <a:sy n="100" d="100"/>
        </p:scale>
        <p:origin x="0" y="0"/>
      </p:cViewPr>{guide_list}
    </p:cSldViewPr>
  </p:slideViewPr>
  <p:gridSpacing cx="76200" cy="76200"/>
</p:viewPr>"#
    );
    xml::document(&body)
}

/// `_rels/.rels`
pub fn root_relationships() -> Relationships {
    let mut rels = Relationships::new();
    rels.add("ppt/presentation.xml", REL_TYPE_OFFICE_DOCUMENT);
    rels.add("docProps/core.xml", REL_TYPE_CORE_PROPERTIES);
    rels.add("docProps/app.xml", REL_TYPE_EXTENDED_PROPERTIES);
    rels
}

/// `ppt/_rels/presentation.xml.rels`; the master is always `rId1`
pub fn presentation_relationships() -> Relationships {
    let mut rels = Relationships::new();
    rels.add("slideMasters/slideMaster1.xml", REL_TYPE_SLIDE_MASTER);
    rels.add("presProps.xml", REL_TYPE_PRES_PROPS);
    rels.add("viewProps.xml", REL_TYPE_VIEW_PROPS);
    rels.add("theme/theme1.xml", REL_TYPE_THEME);
    rels.add("tableStyles.xml", REL_TYPE_TABLE_STYLES);
    rels
}
