//! Placeholder shapes and the shape tree shared by the master and layouts.

use potxforge_core::Anchor;

use crate::units::EmuRect;
use crate::xml::escape;

/// The `<p:ph>` element of a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaceholderRef {
    pub ph_type: Option<&'static str>,
    pub size: Option<&'static str>,
    pub idx: Option<u32>,
}

impl PlaceholderRef {
    pub fn new(ph_type: Option<&'static str>, idx: Option<u32>) -> Self {
        Self {
            ph_type,
            size: None,
            idx,
        }
    }

    /// `sz` attribute (`half`, `quarter`)
    pub fn sized(mut self, size: &'static str) -> Self {
        self.size = Some(size);
        self
    }

    pub fn to_xml(&self) -> String {
        let mut ph = String::from("<p:ph");
        if let Some(t) = self.ph_type {
            ph.push_str(&format!(r#" type="{t}""#));
        }
        if let Some(sz) = self.size {
            ph.push_str(&format!(r#" sz="{sz}""#));
        }
        if let Some(idx) = self.idx {
            ph.push_str(&format!(r#" idx="{idx}""#));
        }
        ph.push_str("/>");
        ph
    }
}

/// A placeholder `<p:sp>`
#[derive(Debug, Clone)]
pub struct PlaceholderShape {
    pub id: u32,
    pub name: String,
    pub ph: PlaceholderRef,
    pub rect: EmuRect,
    pub anchor: Option<Anchor>,
    /// Contents of `<a:lstStyle>`
    pub list_style: String,
    /// `<a:p>` elements of the prompt text
    pub paragraphs: String,
}

impl PlaceholderShape {
    pub fn new(id: u32, name: impl Into<String>, ph: PlaceholderRef, rect: EmuRect) -> Self {
        Self {
            id,
            name: name.into(),
            ph,
            rect,
            anchor: None,
            list_style: String::new(),
            paragraphs: prompt("Click to edit text"),
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_list_style(mut self, list_style: String) -> Self {
        self.list_style = list_style;
        self
    }

    pub fn with_paragraphs(mut self, paragraphs: String) -> Self {
        self.paragraphs = paragraphs;
        self
    }

    pub fn to_xml(&self) -> String {
        let body_pr = match self.anchor {
            Some(anchor) => format!(r#"<a:bodyPr vert="horz" anchor="{}"/>"#, anchor.ooxml()),
            None => r#"<a:bodyPr vert="horz"/>"#.to_string(),
        };
        let list_style = if self.list_style.is_empty() {
            "<a:lstStyle/>".to_string()
        } else {
            format!("<a:lstStyle>{}</a:lstStyle>", self.list_style)
        };

        format!(
            r#"<p:sp>
        <p:nvSpPr>
          <p:cNvPr id="{id}" name="{name}"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr>{ph}</p:nvPr>
        </p:nvSpPr>
        <p:spPr>{xfrm}</p:spPr>
        <p:txBody>{body_pr}{list_style}{paragraphs}</p:txBody>
      </p:sp>"#,
            id = self.id,
            name = escape(&self.name),
            ph = self.ph.to_xml(),
            xfrm = self.rect.xfrm(),
            paragraphs = self.paragraphs,
        )
    }
}

/// A single prompt paragraph
pub fn prompt(text: &str) -> String {
    format!(
        r#"<a:p><a:r><a:rPr lang="en-US"/><a:t>{}</a:t></a:r><a:endParaRPr lang="en-US"/></a:p>"#,
        escape(text)
    )
}

/// A prompt paragraph at an outline level (0-based)
pub fn prompt_at_level(text: &str, level: u8) -> String {
    if level == 0 {
        return prompt(text);
    }
    format!(
        r#"<a:p><a:pPr lvl="{level}"/><a:r><a:rPr lang="en-US"/><a:t>{}</a:t></a:r></a:p>"#,
        escape(text)
    )
}

/// `<p:spTree>` with the mandatory group shape properties followed by `shapes`
pub fn shape_tree(shapes: &[PlaceholderShape]) -> String {
    let mut tree = String::from(
        r#"<p:spTree>
      <p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
      <p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
    );
    for shape in shapes {
        tree.push_str("\n      ");
        tree.push_str(&shape.to_xml());
    }
    tree.push_str("\n    </p:spTree>");
    tree
}
