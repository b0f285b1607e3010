//! Typography roles and their text styles.

use serde::{Deserialize, Serialize};

use crate::color::{hex, ColorKey, HexColor};

/// A named typography role.
///
/// The first seven are the legacy set; the remaining nine were added with the
/// extended (v3) schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypographyRole {
    Heading,
    Subtitle,
    BodyLarge,
    BodySmall,
    Quote,
    Bullet,
    Link,
    Display,
    Heading2,
    Heading3,
    Heading4,
    Body,
    Caption,
    Label,
    Footnote,
    Code,
}

impl TypographyRole {
    /// The legacy seven-role set
    pub const LEGACY: [TypographyRole; 7] = [
        Self::Heading,
        Self::Subtitle,
        Self::BodyLarge,
        Self::BodySmall,
        Self::Quote,
        Self::Bullet,
        Self::Link,
    ];

    /// The extended sixteen-role set
    pub const ALL: [TypographyRole; 16] = [
        Self::Heading,
        Self::Subtitle,
        Self::BodyLarge,
        Self::BodySmall,
        Self::Quote,
        Self::Bullet,
        Self::Link,
        Self::Display,
        Self::Heading2,
        Self::Heading3,
        Self::Heading4,
        Self::Body,
        Self::Caption,
        Self::Label,
        Self::Footnote,
        Self::Code,
    ];

    /// Serialized key
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Subtitle => "subtitle",
            Self::BodyLarge => "bodyLarge",
            Self::BodySmall => "bodySmall",
            Self::Quote => "quote",
            Self::Bullet => "bullet",
            Self::Link => "link",
            Self::Display => "display",
            Self::Heading2 => "heading2",
            Self::Heading3 => "heading3",
            Self::Heading4 => "heading4",
            Self::Body => "body",
            Self::Caption => "caption",
            Self::Label => "label",
            Self::Footnote => "footnote",
            Self::Code => "code",
        }
    }

    pub fn is_legacy(self) -> bool {
        Self::LEGACY.contains(&self)
    }

    /// Legacy role an extended role is seeded from, with the size ratio applied
    pub fn seed(self) -> Option<(TypographyRole, f64)> {
        match self {
            Self::Display => Some((Self::Heading, 1.5)),
            Self::Heading2 => Some((Self::Heading, 0.8)),
            Self::Heading3 => Some((Self::Heading, 0.6)),
            Self::Heading4 => Some((Self::Heading, 0.5)),
            Self::Body => Some((Self::BodyLarge, 0.9)),
            Self::Caption => Some((Self::BodySmall, 0.85)),
            Self::Label => Some((Self::BodySmall, 0.85)),
            Self::Footnote => Some((Self::BodySmall, 0.75)),
            Self::Code => Some((Self::BodySmall, 1.0)),
            _ => None,
        }
    }
}

/// Case transform applied to a role's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Bullet glyph and hanging indent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletStyle {
    /// Bullet character
    #[serde(rename = "char")]
    pub character: String,

    /// Hanging indent in pixels
    pub indent: f64,
}

/// Text style for one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyStyle {
    /// Font asset id
    pub font_id: String,

    /// Size in points
    pub font_size: f64,

    /// Declared weight, used when the font asset cannot be resolved
    #[serde(default = "default_weight")]
    pub font_weight: u16,

    /// Line height multiplier (1.0 = single)
    #[serde(default = "default_line_height")]
    pub line_height: f64,

    /// Letter spacing in em
    #[serde(default)]
    pub letter_spacing: f64,

    pub color: HexColor,

    /// Symbolic reference into the theme palette; wins over `color`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_ref: Option<ColorKey>,

    #[serde(default)]
    pub text_transform: TextTransform,

    #[serde(default)]
    pub alignment: TextAlign,

    /// Space after each paragraph, in points
    #[serde(default)]
    pub paragraph_spacing: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet: Option<BulletStyle>,
}

fn default_weight() -> u16 {
    400
}

fn default_line_height() -> f64 {
    1.2
}

impl TypographyStyle {
    /// A plain style with single-ish line height and no spacing
    pub fn new(font_id: impl Into<String>, font_size: f64, color: HexColor) -> Self {
        Self {
            font_id: font_id.into(),
            font_size,
            font_weight: default_weight(),
            line_height: default_line_height(),
            letter_spacing: 0.0,
            color,
            color_ref: None,
            text_transform: TextTransform::None,
            alignment: TextAlign::Left,
            paragraph_spacing: 0.0,
            bullet: None,
        }
    }

    pub fn with_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }

    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_letter_spacing(mut self, em: f64) -> Self {
        self.letter_spacing = em;
        self
    }

    pub fn with_color_ref(mut self, key: ColorKey) -> Self {
        self.color_ref = Some(key);
        self
    }

    pub fn with_transform(mut self, transform: TextTransform) -> Self {
        self.text_transform = transform;
        self
    }

    pub fn with_alignment(mut self, alignment: TextAlign) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_paragraph_spacing(mut self, points: f64) -> Self {
        self.paragraph_spacing = points;
        self
    }

    pub fn with_bullet(mut self, character: impl Into<String>, indent: f64) -> Self {
        self.bullet = Some(BulletStyle {
            character: character.into(),
            indent,
        });
        self
    }

    /// Built-in style for a role
    pub fn default_for(role: TypographyRole) -> Self {
        let green = hex("#003F2D");
        let dark = hex("#012A2D");
        let grey = hex("#435254");
        match role {
            TypographyRole::Heading => Self::new("financier-display-regular", 40.0, green)
                .with_line_height(1.1)
                .with_letter_spacing(-0.01)
                .with_color_ref(ColorKey::Dark1),
            TypographyRole::Subtitle => Self::new("calibre-light", 24.0, dark)
                .with_weight(300)
                .with_color_ref(ColorKey::Dark2),
            TypographyRole::BodyLarge => Self::new("calibre-regular", 18.0, green)
                .with_line_height(1.3)
                .with_paragraph_spacing(6.0),
            TypographyRole::BodySmall => Self::new("calibre-regular", 14.0, green)
                .with_line_height(1.3)
                .with_paragraph_spacing(4.0),
            TypographyRole::Quote => Self::new("financier-display-light", 32.0, green)
                .with_weight(300)
                .with_alignment(TextAlign::Center),
            TypographyRole::Bullet => Self::new("calibre-regular", 18.0, green)
                .with_line_height(1.3)
                .with_bullet("•", 24.0),
            TypographyRole::Link => {
                Self::new("calibre-regular", 18.0, green).with_color_ref(ColorKey::Hyperlink)
            }
            TypographyRole::Display => Self::new("financier-display-light", 60.0, green)
                .with_weight(300)
                .with_line_height(1.0)
                .with_letter_spacing(-0.02),
            TypographyRole::Heading2 => {
                Self::new("financier-display-regular", 32.0, green).with_line_height(1.1)
            }
            TypographyRole::Heading3 => Self::new("calibre-medium", 24.0, green).with_weight(500),
            TypographyRole::Heading4 => {
                Self::new("calibre-semibold", 20.0, green).with_weight(600)
            }
            TypographyRole::Body => Self::new("calibre-regular", 16.0, green)
                .with_line_height(1.3)
                .with_paragraph_spacing(6.0),
            TypographyRole::Caption => Self::new("calibre-regular", 12.0, grey),
            TypographyRole::Label => Self::new("calibre-medium", 12.0, grey)
                .with_weight(500)
                .with_letter_spacing(0.05)
                .with_transform(TextTransform::Uppercase),
            TypographyRole::Footnote => Self::new("calibre-light", 10.0, grey).with_weight(300),
            TypographyRole::Code => Self::new("space-mono-regular", 14.0, green),
        }
    }
}

/// Text styles keyed by role.
///
/// Absent roles resolve to [`TypographyStyle::default_for`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_large: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_small: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading2: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading3: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading4: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footnote: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<TypographyStyle>,
}

impl Typography {
    /// Every role populated with its built-in style
    pub fn defaults() -> Self {
        let mut typography = Self::default();
        for role in TypographyRole::ALL {
            typography.set(role, TypographyStyle::default_for(role));
        }
        typography
    }

    fn slot(&self, role: TypographyRole) -> &Option<TypographyStyle> {
        match role {
            TypographyRole::Heading => &self.heading,
            TypographyRole::Subtitle => &self.subtitle,
            TypographyRole::BodyLarge => &self.body_large,
            TypographyRole::BodySmall => &self.body_small,
            TypographyRole::Quote => &self.quote,
            TypographyRole::Bullet => &self.bullet,
            TypographyRole::Link => &self.link,
            TypographyRole::Display => &self.display,
            TypographyRole::Heading2 => &self.heading2,
            TypographyRole::Heading3 => &self.heading3,
            TypographyRole::Heading4 => &self.heading4,
            TypographyRole::Body => &self.body,
            TypographyRole::Caption => &self.caption,
            TypographyRole::Label => &self.label,
            TypographyRole::Footnote => &self.footnote,
            TypographyRole::Code => &self.code,
        }
    }

    fn slot_mut(&mut self, role: TypographyRole) -> &mut Option<TypographyStyle> {
        match role {
            TypographyRole::Heading => &mut self.heading,
            TypographyRole::Subtitle => &mut self.subtitle,
            TypographyRole::BodyLarge => &mut self.body_large,
            TypographyRole::BodySmall => &mut self.body_small,
            TypographyRole::Quote => &mut self.quote,
            TypographyRole::Bullet => &mut self.bullet,
            TypographyRole::Link => &mut self.link,
            TypographyRole::Display => &mut self.display,
            TypographyRole::Heading2 => &mut self.heading2,
            TypographyRole::Heading3 => &mut self.heading3,
            TypographyRole::Heading4 => &mut self.heading4,
            TypographyRole::Body => &mut self.body,
            TypographyRole::Caption => &mut self.caption,
            TypographyRole::Label => &mut self.label,
            TypographyRole::Footnote => &mut self.footnote,
            TypographyRole::Code => &mut self.code,
        }
    }

    /// The configured style for a role, if any
    pub fn get(&self, role: TypographyRole) -> Option<&TypographyStyle> {
        self.slot(role).as_ref()
    }

    /// The configured style, or the built-in one
    pub fn style(&self, role: TypographyRole) -> TypographyStyle {
        self.get(role)
            .cloned()
            .unwrap_or_else(|| TypographyStyle::default_for(role))
    }

    pub fn set(&mut self, role: TypographyRole, style: TypographyStyle) {
        *self.slot_mut(role) = Some(style);
    }

    /// Configured `(role, style)` pairs in role order
    pub fn iter(&self) -> impl Iterator<Item = (TypographyRole, &TypographyStyle)> {
        TypographyRole::ALL
            .into_iter()
            .filter_map(move |role| self.get(role).map(|s| (role, s)))
    }
}
