//! DrawingML text properties derived from a typography role.

use potxforge_core::{ColorKey, FontAsset, HexColor, TextAlign, TextTransform, TypographyStyle};

use crate::fonts::{resolve_font, FontScheme, ResolvedFont};
use crate::units::pixels_to_emu;
use crate::xml::escape;

/// Font size in hundredths of a point (`sz`)
pub fn font_size_hundredths(pt: f64) -> i64 {
    (pt * 100.0).round() as i64
}

/// Line spacing in thousandths of a percent (`spcPct`)
pub fn line_spacing_pct(line_height: f64) -> i64 {
    (line_height * 100_000.0).round() as i64
}

/// Letter spacing in hundredths of a point (`spc`)
pub fn letter_spacing(size_pt: f64, em: f64) -> i64 {
    (size_pt * 100.0 * em).round() as i64
}

/// Paragraph spacing in hundredths of a point (`spcPts`)
pub fn paragraph_spacing(pt: f64) -> i64 {
    (pt * 100.0).round() as i64
}

/// `algn` attribute value
pub fn align_attr(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "l",
        TextAlign::Center => "ctr",
        TextAlign::Right => "r",
        TextAlign::Justify => "just",
    }
}

/// A text color, by theme slot or literal RGB
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextColor {
    Scheme(ColorKey),
    Rgb(HexColor),
}

impl TextColor {
    /// `<a:solidFill>` for this color
    pub fn solid_fill(&self) -> String {
        match self {
            Self::Scheme(key) => format!(
                r#"<a:solidFill><a:schemeClr val="{}"/></a:solidFill>"#,
                key.ooxml_key()
            ),
            Self::Rgb(hex) => format!(
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                hex.ooxml()
            ),
        }
    }
}

/// Bullet glyph and its hanging indent in EMU
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bullet {
    pub glyph: String,
    pub indent: i64,
    pub margin: i64,
}

/// Resolved paragraph and run properties for one role
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: ResolvedFont,
    pub size_pt: f64,
    pub line_height: f64,
    pub letter_spacing_em: f64,
    pub color: TextColor,
    pub transform: TextTransform,
    pub alignment: TextAlign,
    pub space_after_pt: f64,
    pub bullet: Option<Bullet>,
}

impl TextStyle {
    /// Resolve a role's style against the font assets and theme fonts
    pub fn from_role(style: &TypographyStyle, fonts: &[FontAsset], scheme: &FontScheme) -> Self {
        let font = resolve_font(&style.font_id, fonts, scheme, style.font_weight);
        let color = match style.color_ref {
            Some(key) => TextColor::Scheme(key),
            None => TextColor::Rgb(style.color.clone()),
        };
        let bullet = style.bullet.as_ref().map(|b| {
            let indent = pixels_to_emu(b.indent);
            Bullet {
                glyph: b.character.clone(),
                indent,
                margin: indent,
            }
        });

        Self {
            font,
            size_pt: style.font_size,
            line_height: style.line_height,
            letter_spacing_em: style.letter_spacing,
            color,
            transform: style.text_transform,
            alignment: style.alignment,
            space_after_pt: style.paragraph_spacing,
            bullet,
        }
    }

    /// The same style at a fraction of the size
    pub fn scaled(&self, ratio: f64) -> Self {
        let mut style = self.clone();
        style.size_pt = self.size_pt * ratio;
        style
    }

    pub fn with_bullet(mut self, glyph: &str, margin: i64, indent: i64) -> Self {
        self.bullet = Some(Bullet {
            glyph: glyph.to_string(),
            indent,
            margin,
        });
        self
    }

    pub fn without_bullet(mut self) -> Self {
        self.bullet = None;
        self
    }

    pub fn with_alignment(mut self, alignment: TextAlign) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_color(mut self, color: TextColor) -> Self {
        self.color = color;
        self
    }

    /// Run properties as the given element (`a:defRPr`, `a:rPr`)
    pub fn run_properties(&self, tag: &str) -> String {
        let mut attrs = format!(
            r#"lang="en-US" sz="{}" b="{}" i="{}""#,
            font_size_hundredths(self.size_pt),
            self.font.bold_attr(),
            self.font.italic_attr()
        );
        let spc = letter_spacing(self.size_pt, self.letter_spacing_em);
        if spc != 0 {
            attrs.push_str(&format!(r#" spc="{spc}""#));
        }
        if self.transform == TextTransform::Uppercase {
            attrs.push_str(r#" cap="all""#);
        }

        format!(
            "<{tag} {attrs}>{}{}</{tag}>",
            self.color.solid_fill(),
            self.font.typeface.to_xml()
        )
    }

    /// Paragraph properties as the given element (`a:lvl1pPr`, `a:pPr`),
    /// with the run defaults nested inside
    pub fn paragraph_properties(&self, tag: &str) -> String {
        let mut attrs = String::new();
        if let Some(bullet) = &self.bullet {
            attrs.push_str(&format!(
                r#" marL="{}" indent="{}""#,
                bullet.margin, -bullet.indent
            ));
        } else {
            attrs.push_str(r#" marL="0" indent="0""#);
        }
        attrs.push_str(&format!(r#" algn="{}""#, align_attr(self.alignment)));

        let bullet = match &self.bullet {
            Some(b) => format!(
                r#"<a:buFont typeface="Arial"/><a:buChar char="{}"/>"#,
                escape(&b.glyph)
            ),
            None => "<a:buNone/>".to_string(),
        };

        format!(
            concat!(
                "<{tag}{attrs}>",
                r#"<a:lnSpc><a:spcPct val="{line}"/></a:lnSpc>"#,
                r#"<a:spcBef><a:spcPts val="0"/></a:spcBef>"#,
                r#"<a:spcAft><a:spcPts val="{after}"/></a:spcAft>"#,
                "{bullet}{rpr}</{tag}>"
            ),
            tag = tag,
            attrs = attrs,
            line = line_spacing_pct(self.line_height),
            after = paragraph_spacing(self.space_after_pt),
            bullet = bullet,
            rpr = self.run_properties("a:defRPr"),
        )
    }
}
