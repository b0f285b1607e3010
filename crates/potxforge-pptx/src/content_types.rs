//! The `[Content_Types].xml` part.

use crate::constants::*;
use crate::xml::{self, escape};

/// Default and override content type declarations
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    defaults: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
}

impl ContentTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// The declarations for a template with `layout_count` slide layouts
    pub fn for_template(layout_count: usize) -> Self {
        let mut types = Self::new();
        types.add_default("rels", CT_RELATIONSHIPS);
        types.add_default("xml", CT_XML);

        types.add_override("/ppt/presentation.xml", CT_TEMPLATE_MAIN);
        types.add_override("/ppt/presProps.xml", CT_PRES_PROPS);
        types.add_override("/ppt/viewProps.xml", CT_VIEW_PROPS);
        types.add_override("/ppt/tableStyles.xml", CT_TABLE_STYLES);
        types.add_override("/ppt/theme/theme1.xml", CT_THEME);
        types.add_override("/ppt/slideMasters/slideMaster1.xml", CT_SLIDE_MASTER);
        for n in 1..=layout_count {
            types.add_override(
                format!("/ppt/slideLayouts/slideLayout{n}.xml"),
                CT_SLIDE_LAYOUT,
            );
        }
        types.add_override("/docProps/core.xml", CT_CORE_PROPERTIES);
        types.add_override("/docProps/app.xml", CT_EXTENDED_PROPERTIES);
        types
    }

    /// Declare a content type for a file extension
    pub fn add_default(&mut self, extension: impl Into<String>, content_type: impl Into<String>) {
        self.defaults.push((extension.into(), content_type.into()));
    }

    /// Declare a content type for one part name (leading `/`)
    pub fn add_override(&mut self, part_name: impl Into<String>, content_type: impl Into<String>) {
        self.overrides.push((part_name.into(), content_type.into()));
    }

    /// Content type declared for a part name
    pub fn override_for(&self, part_name: &str) -> Option<&str> {
        self.overrides
            .iter()
            .find(|(name, _)| name == part_name)
            .map(|(_, ct)| ct.as_str())
    }

    /// Number of overrides with the given content type
    pub fn count_of(&self, content_type: &str) -> usize {
        self.overrides.iter().filter(|(_, ct)| ct == content_type).count()
    }

    pub fn to_xml(&self) -> String {
        let mut body = format!(r#"<Types xmlns="{}">"#, NS_CONTENT_TYPES);
        body.push('\n');
        for (extension, content_type) in &self.defaults {
            body.push_str(&format!(
                "  <Default Extension=\"{}\" ContentType=\"{}\"/>\n",
                escape(extension),
                escape(content_type)
            ));
        }
        for (part_name, content_type) in &self.overrides {
            body.push_str(&format!(
                "  <Override PartName=\"{}\" ContentType=\"{}\"/>\n",
                escape(part_name),
                escape(content_type)
            ));
        }
        body.push_str("</Types>");
        xml::document(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_overrides_follow_count() {
        let types = ContentTypes::for_template(11);
        assert_eq!(types.count_of(CT_SLIDE_LAYOUT), 11);
        assert!(types.override_for("/ppt/slideLayouts/slideLayout11.xml").is_some());
        assert!(types.override_for("/ppt/slideLayouts/slideLayout12.xml").is_none());

        let types = ContentTypes::for_template(1);
        assert_eq!(types.count_of(CT_SLIDE_LAYOUT), 1);
    }

    #[test]
    fn test_presentation_is_template_main() {
        let types = ContentTypes::for_template(2);
        assert_eq!(
            types.override_for("/ppt/presentation.xml"),
            Some(CT_TEMPLATE_MAIN)
        );
        assert!(CT_TEMPLATE_MAIN.contains("template.main"));
    }

    #[test]
    fn test_every_fixed_part_declared() {
        let types = ContentTypes::for_template(0);
        for part in [
            "/ppt/presentation.xml",
            "/ppt/presProps.xml",
            "/ppt/viewProps.xml",
            "/ppt/tableStyles.xml",
            "/ppt/theme/theme1.xml",
            "/ppt/slideMasters/slideMaster1.xml",
            "/docProps/core.xml",
            "/docProps/app.xml",
        ] {
            assert!(types.override_for(part).is_some(), "{part}");
        }
    }

    #[test]
    fn test_xml_shape() {
        let xml = ContentTypes::for_template(1).to_xml();
        crate::xml::check_well_formed("[Content_Types].xml", &xml).unwrap();
        assert!(xml.contains(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml""#));
    }
}
