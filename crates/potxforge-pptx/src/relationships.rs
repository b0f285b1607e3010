//! Relationship (`.rels`) parts.
//!
//! A template only ever writes relationships between its own parts, so this
//! is a builder: ids are handed out as `rId1`, `rId2`, ... in the order
//! targets are added, and that order is the serialization order.

use crate::constants::NS_PACKAGE_RELATIONSHIPS;
use crate::xml::{self, escape};

/// One `<Relationship>` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: &'static str,
    /// Path relative to the source part's folder
    pub target: String,
}

/// Relationships of one source part
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationships {
    entries: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its id
    pub fn add(&mut self, target: impl Into<String>, rel_type: &'static str) -> String {
        let id = format!("rId{}", self.entries.len() + 1);
        self.entries.push(Relationship {
            id: id.clone(),
            rel_type,
            target: target.into(),
        });
        id
    }

    /// Target of a relationship id
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.target.as_str())
    }

    /// Number of relationships of the given type
    pub fn count_of_type(&self, rel_type: &str) -> usize {
        self.entries.iter().filter(|r| r.rel_type == rel_type).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as a `.rels` part
    pub fn to_xml(&self) -> String {
        let mut body = format!("<Relationships xmlns=\"{NS_PACKAGE_RELATIONSHIPS}\">\n");
        for rel in &self.entries {
            body.push_str(&format!(
                "  <Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"/>\n",
                rel.id,
                rel.rel_type,
                escape(&rel.target)
            ));
        }
        body.push_str("</Relationships>");
        xml::document(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{REL_TYPE_SLIDE_LAYOUT, REL_TYPE_THEME};

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add("../theme/theme1.xml", REL_TYPE_THEME), "rId1");
        assert_eq!(
            rels.add("../slideLayouts/slideLayout1.xml", REL_TYPE_SLIDE_LAYOUT),
            "rId2"
        );
        assert_eq!(rels.len(), 2);
        assert_eq!(rels.count_of_type(REL_TYPE_SLIDE_LAYOUT), 1);
        assert_eq!(rels.get("rId2"), Some("../slideLayouts/slideLayout1.xml"));
        assert_eq!(rels.get("rId3"), None);
    }

    #[test]
    fn test_serialized_in_order() {
        let mut rels = Relationships::new();
        rels.add("../theme/theme1.xml", REL_TYPE_THEME);
        rels.add("../slideLayouts/slideLayout1.xml", REL_TYPE_SLIDE_LAYOUT);

        let xml = rels.to_xml();
        let first = xml.find(r#"Id="rId1""#).unwrap();
        let second = xml.find(r#"Id="rId2""#).unwrap();
        assert!(first < second);
        assert!(xml.contains(&format!(
            r#"<Relationship Id="rId1" Type="{REL_TYPE_THEME}" Target="../theme/theme1.xml"/>"#
        )));
        crate::xml::check_well_formed("test.rels", &xml).unwrap();
    }

    #[test]
    fn test_target_is_escaped() {
        let mut rels = Relationships::new();
        rels.add("a&b.xml", REL_TYPE_THEME);
        assert!(rels.to_xml().contains(r#"Target="a&amp;b.xml""#));
    }

    #[test]
    fn test_empty() {
        let rels = Relationships::new();
        assert!(rels.is_empty());
        let xml = rels.to_xml();
        assert!(xml.ends_with("</Relationships>"));
        crate::xml::check_well_formed("empty.rels", &xml).unwrap();
    }
}
