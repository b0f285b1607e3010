//! The theme part (`ppt/theme/theme1.xml`).

use potxforge_core::CustomColor;

use crate::constants::NS_DRAWING;
use crate::fonts::FontScheme;
use crate::translate::ColorScheme;
use crate::xml::{self, escape};

/// Fill, line, effect and background styles. Identical in every export.
pub const FORMAT_SCHEME: &str = r#"<a:fmtScheme name="Office">
      <a:fillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:gradFill rotWithShape="1">
          <a:gsLst>
            <a:gs pos="0"><a:schemeClr val="phClr"><a:lumMod val="110000"/><a:satMod val="105000"/><a:tint val="67000"/></a:schemeClr></a:gs>
            <a:gs pos="50000"><a:schemeClr val="phClr"><a:lumMod val="105000"/><a:satMod val="103000"/><a:tint val="73000"/></a:schemeClr></a:gs>
            <a:gs pos="100000"><a:schemeClr val="phClr"><a:lumMod val="105000"/><a:satMod val="109000"/><a:tint val="81000"/></a:schemeClr></a:gs>
          </a:gsLst>
          <a:lin ang="5400000" scaled="0"/>
        </a:gradFill>
        <a:gradFill rotWithShape="1">
          <a:gsLst>
            <a:gs pos="0"><a:schemeClr val="phClr"><a:satMod val="103000"/><a:lumMod val="102000"/><a:tint val="94000"/></a:schemeClr></a:gs>
            <a:gs pos="50000"><a:schemeClr val="phClr"><a:satMod val="110000"/><a:lumMod val="100000"/><a:shade val="100000"/></a:schemeClr></a:gs>
            <a:gs pos="100000"><a:schemeClr val="phClr"><a:lumMod val="99000"/><a:satMod val="120000"/><a:shade val="78000"/></a:schemeClr></a:gs>
          </a:gsLst>
          <a:lin ang="5400000" scaled="0"/>
        </a:gradFill>
      </a:fillStyleLst>
      <a:lnStyleLst>
        <a:ln w="6350" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/><a:miter lim="800000"/></a:ln>
        <a:ln w="12700" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/><a:miter lim="800000"/></a:ln>
        <a:ln w="19050" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/><a:miter lim="800000"/></a:ln>
      </a:lnStyleLst>
      <a:effectStyleLst>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle>
          <a:effectLst>
            <a:outerShdw blurRad="57150" dist="19050" dir="5400000" algn="ctr" rotWithShape="0"><a:srgbClr val="000000"><a:alpha val="63000"/></a:srgbClr></a:outerShdw>
          </a:effectLst>
        </a:effectStyle>
      </a:effectStyleLst>
      <a:bgFillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"><a:tint val="95000"/><a:satMod val="170000"/></a:schemeClr></a:solidFill>
        <a:gradFill rotWithShape="1">
          <a:gsLst>
            <a:gs pos="0"><a:schemeClr val="phClr"><a:tint val="93000"/><a:satMod val="150000"/><a:shade val="98000"/><a:lumMod val="102000"/></a:schemeClr></a:gs>
            <a:gs pos="50000"><a:schemeClr val="phClr"><a:tint val="98000"/><a:satMod val="130000"/><a:shade val="90000"/><a:lumMod val="103000"/></a:schemeClr></a:gs>
            <a:gs pos="100000"><a:schemeClr val="phClr"><a:shade val="63000"/><a:satMod val="120000"/></a:schemeClr></a:gs>
          </a:gsLst>
          <a:lin ang="5400000" scaled="0"/>
        </a:gradFill>
      </a:bgFillStyleLst>
    </a:fmtScheme>"#;

/// Generate the theme part
pub fn generate_theme(
    name: &str,
    colors: &ColorScheme,
    fonts: &FontScheme,
    custom_colors: &[CustomColor],
) -> String {
    let name = escape(name);

    let mut clr_scheme = format!(r#"<a:clrScheme name="{name}">"#);
    for (key, color) in colors.iter() {
        clr_scheme.push_str(&format!(
            "\n        <a:{key}><a:srgbClr val=\"{}\"/></a:{key}>",
            color.ooxml()
        ));
    }
    clr_scheme.push_str("\n      </a:clrScheme>");

    let font_scheme = format!(
        r#"<a:fontScheme name="{name}">
        <a:majorFont><a:latin typeface="{}"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>
        <a:minorFont><a:latin typeface="{}"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>
      </a:fontScheme>"#,
        escape(&fonts.major),
        escape(&fonts.minor)
    );

    let body = format!(
        r#"<a:theme xmlns:a="{NS_DRAWING}" name="{name}">
  <a:themeElements>
      {clr_scheme}
      {font_scheme}
    {FORMAT_SCHEME}
  </a:themeElements>
  <a:objectDefaults/>
  <a:extraClrSchemeLst/>{custom}
</a:theme>"#,
        custom = custom_color_list(custom_colors),
    );
    xml::document(&body)
}

/// `<a:custClrLst>`, or nothing when there are no custom colors
fn custom_color_list(custom_colors: &[CustomColor]) -> String {
    if custom_colors.is_empty() {
        return String::new();
    }
    let mut list = String::from("\n  <a:custClrLst>");
    for color in custom_colors {
        list.push_str(&format!(
            r#"
    <a:custClr name="{}"><a:srgbClr val="{}"/></a:custClr>"#,
            escape(&color.name),
            color.hex.ooxml()
        ));
    }
    list.push_str("\n  </a:custClrLst>");
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use potxforge_core::{HexColor, ThemeColorSet};

    fn theme(custom: &[CustomColor]) -> String {
        generate_theme(
            "Brand",
            &ColorScheme::from_theme(&ThemeColorSet::cbre()),
            &FontScheme::new("Financier Display", "Calibre"),
            custom,
        )
    }

    #[test]
    fn test_color_scheme_uses_ooxml_names() {
        let xml = theme(&[]);
        assert!(xml.contains(r#"<a:dk1><a:srgbClr val="003F2D"/></a:dk1>"#));
        assert!(xml.contains(r#"<a:lt1><a:srgbClr val="FFFFFF"/></a:lt1>"#));
        assert!(xml.contains(r#"<a:hlink><a:srgbClr val="1F3765"/></a:hlink>"#));
        assert!(xml.contains(r#"<a:folHlink><a:srgbClr val="538184"/></a:folHlink>"#));
        assert!(!xml.contains("<a:dark1>"));
    }

    #[test]
    fn test_font_scheme() {
        let xml = theme(&[]);
        assert!(xml.contains(r#"<a:majorFont><a:latin typeface="Financier Display"/>"#));
        assert!(xml.contains(r#"<a:minorFont><a:latin typeface="Calibre"/>"#));
    }

    #[test]
    fn test_custom_colors_absent_when_empty() {
        let xml = theme(&[]);
        assert!(!xml.contains("custClrLst"));
    }

    #[test]
    fn test_custom_colors_listed_after_extra_schemes() {
        let custom = vec![
            CustomColor::new("Sunset & Dusk", HexColor::parse("#FF6600").unwrap()),
            CustomColor::new("Sky", HexColor::parse("#0099ff").unwrap()),
        ];
        let xml = theme(&custom);
        assert!(xml.contains(r#"<a:custClr name="Sunset &amp; Dusk"><a:srgbClr val="FF6600"/></a:custClr>"#));
        assert!(xml.contains(r#"<a:custClr name="Sky"><a:srgbClr val="0099FF"/></a:custClr>"#));
        assert!(xml.find("<a:extraClrSchemeLst/>").unwrap() < xml.find("<a:custClrLst>").unwrap());
    }

    #[test]
    fn test_format_scheme_is_verbatim() {
        let a = theme(&[]);
        let b = generate_theme(
            "Other",
            &ColorScheme::from_theme(&ThemeColorSet::default()),
            &FontScheme::new("Georgia", "Arial"),
            &[],
        );
        assert!(a.contains(FORMAT_SCHEME));
        assert!(b.contains(FORMAT_SCHEME));
    }

    #[test]
    fn test_well_formed() {
        let custom = vec![CustomColor::new("One", HexColor::parse("#123456").unwrap())];
        crate::xml::check_well_formed("theme1.xml", &theme(&custom)).unwrap();
        crate::xml::check_well_formed("theme1.xml", &theme(&[])).unwrap();
    }
}
