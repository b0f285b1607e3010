//! XML primitives shared by every part generator.
//!
//! [`escape`] is the one place user-supplied text is made safe for element
//! content and attribute values.

use std::borrow::Cow;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{PotxError, Result};

/// Declaration every part starts with
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Escape text for use in element content or a quoted attribute value
pub fn escape(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

/// Prefix a document body with the XML declaration
pub fn document(body: &str) -> String {
    let mut xml = String::with_capacity(XML_DECLARATION.len() + 1 + body.len());
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(body);
    xml
}

/// Check that a generated part parses as XML with balanced elements
pub fn check_well_formed(path: &str, xml: &str) -> Result<()> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = true;

    let mut depth: usize = 0;
    let mut roots = 0;
    loop {
        match reader.read_event()? {
            Event::Start(_) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Event::Empty(_) if depth == 0 => roots += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(PotxError::malformed_part(path, "unclosed element"));
    }
    if roots != 1 {
        return Err(PotxError::malformed_part(
            path,
            format!("expected one root element, found {roots}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_specials() {
        assert_eq!(escape(r#"A & B <"C"> 'D'"#), "A &amp; B &lt;&quot;C&quot;&gt; &apos;D&apos;");
        assert!(matches!(escape("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_document_prefix() {
        let xml = document("<a/>");
        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.ends_with("\n<a/>"));
    }

    #[test]
    fn test_well_formed() {
        check_well_formed("x.xml", &document("<a><b/></a>")).unwrap();
    }

    #[test]
    fn test_mismatched_end_rejected() {
        assert!(check_well_formed("x.xml", "<a><b></a></b>").is_err());
    }

    #[test]
    fn test_unclosed_rejected() {
        assert!(check_well_formed("x.xml", "<a><b/>").is_err());
    }

    #[test]
    fn test_two_roots_rejected() {
        assert!(check_well_formed("x.xml", "<a/><b/>").is_err());
    }
}
