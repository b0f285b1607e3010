//! Theme colors.
//!
//! A theme always carries exactly twelve colors. The application names them
//! `dark1`, `light1`, ... while the OOXML color scheme uses `dk1`, `lt1`, ...;
//! [`ColorKey::ooxml_key`] is the single place that rename lives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// An RGB color stored as `#RRGGBB` (uppercase).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse a `#RRGGBB` string. Lowercase digits are accepted and normalized.
    pub fn parse(value: &str) -> Result<Self> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ConfigError::invalid_color(value))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::invalid_color(value));
        }
        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    /// The `#RRGGBB` form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The six hex digits without `#`, as used by `<a:srgbClr val="..."/>`
    pub fn ooxml(&self) -> &str {
        &self.0[1..]
    }
}

impl FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the twelve theme color slots, by application name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorKey {
    Dark1,
    Light1,
    Dark2,
    Light2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Hyperlink,
    FollowedHyperlink,
}

impl ColorKey {
    /// All slots in OOXML color-scheme order
    pub const ALL: [ColorKey; 12] = [
        ColorKey::Dark1,
        ColorKey::Light1,
        ColorKey::Dark2,
        ColorKey::Light2,
        ColorKey::Accent1,
        ColorKey::Accent2,
        ColorKey::Accent3,
        ColorKey::Accent4,
        ColorKey::Accent5,
        ColorKey::Accent6,
        ColorKey::Hyperlink,
        ColorKey::FollowedHyperlink,
    ];

    /// Application-side key
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark1 => "dark1",
            Self::Light1 => "light1",
            Self::Dark2 => "dark2",
            Self::Light2 => "light2",
            Self::Accent1 => "accent1",
            Self::Accent2 => "accent2",
            Self::Accent3 => "accent3",
            Self::Accent4 => "accent4",
            Self::Accent5 => "accent5",
            Self::Accent6 => "accent6",
            Self::Hyperlink => "hyperlink",
            Self::FollowedHyperlink => "followedHyperlink",
        }
    }

    /// OOXML color-scheme element name for this slot
    pub fn ooxml_key(self) -> &'static str {
        match self {
            Self::Dark1 => "dk1",
            Self::Light1 => "lt1",
            Self::Dark2 => "dk2",
            Self::Light2 => "lt2",
            Self::Accent1 => "accent1",
            Self::Accent2 => "accent2",
            Self::Accent3 => "accent3",
            Self::Accent4 => "accent4",
            Self::Accent5 => "accent5",
            Self::Accent6 => "accent6",
            Self::Hyperlink => "hlink",
            Self::FollowedHyperlink => "folHlink",
        }
    }

    /// Parse an application-side key
    pub fn parse(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| ConfigError::invalid_value("colorRef", format!("unknown color key '{key}'")))
    }
}

/// The twelve theme colors.
///
/// Missing keys take the default palette value; unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ThemeColorSet {
    pub dark1: HexColor,
    pub light1: HexColor,
    pub dark2: HexColor,
    pub light2: HexColor,
    pub accent1: HexColor,
    pub accent2: HexColor,
    pub accent3: HexColor,
    pub accent4: HexColor,
    pub accent5: HexColor,
    pub accent6: HexColor,
    pub hyperlink: HexColor,
    pub followed_hyperlink: HexColor,
}

impl ThemeColorSet {
    /// Look up a slot by key
    pub fn get(&self, key: ColorKey) -> &HexColor {
        match key {
            ColorKey::Dark1 => &self.dark1,
            ColorKey::Light1 => &self.light1,
            ColorKey::Dark2 => &self.dark2,
            ColorKey::Light2 => &self.light2,
            ColorKey::Accent1 => &self.accent1,
            ColorKey::Accent2 => &self.accent2,
            ColorKey::Accent3 => &self.accent3,
            ColorKey::Accent4 => &self.accent4,
            ColorKey::Accent5 => &self.accent5,
            ColorKey::Accent6 => &self.accent6,
            ColorKey::Hyperlink => &self.hyperlink,
            ColorKey::FollowedHyperlink => &self.followed_hyperlink,
        }
    }

    /// Replace a slot
    pub fn set(&mut self, key: ColorKey, color: HexColor) {
        let slot = match key {
            ColorKey::Dark1 => &mut self.dark1,
            ColorKey::Light1 => &mut self.light1,
            ColorKey::Dark2 => &mut self.dark2,
            ColorKey::Light2 => &mut self.light2,
            ColorKey::Accent1 => &mut self.accent1,
            ColorKey::Accent2 => &mut self.accent2,
            ColorKey::Accent3 => &mut self.accent3,
            ColorKey::Accent4 => &mut self.accent4,
            ColorKey::Accent5 => &mut self.accent5,
            ColorKey::Accent6 => &mut self.accent6,
            ColorKey::Hyperlink => &mut self.hyperlink,
            ColorKey::FollowedHyperlink => &mut self.followed_hyperlink,
        };
        *slot = color;
    }

    /// Iterate `(key, color)` in OOXML scheme order
    pub fn iter(&self) -> impl Iterator<Item = (ColorKey, &HexColor)> {
        ColorKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    /// The CBRE brand palette
    pub fn cbre() -> Self {
        Self {
            dark1: hex("#003F2D"),
            light1: hex("#FFFFFF"),
            dark2: hex("#012A2D"),
            light2: hex("#E6EAEA"),
            accent1: hex("#17E88F"),
            accent2: hex("#80BBAD"),
            accent3: hex("#435254"),
            accent4: hex("#DBD99A"),
            accent5: hex("#3E7CA6"),
            accent6: hex("#CAD1D3"),
            hyperlink: hex("#1F3765"),
            followed_hyperlink: hex("#538184"),
        }
    }
}

impl Default for ThemeColorSet {
    fn default() -> Self {
        Self::cbre()
    }
}

/// Literal palette entries are known-valid
pub(crate) fn hex(value: &str) -> HexColor {
    HexColor(value.to_string())
}

/// A named color shown in PowerPoint's custom color row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColor {
    pub name: String,
    pub hex: HexColor,
}

impl CustomColor {
    /// Create a custom color
    pub fn new(name: impl Into<String>, hex: HexColor) -> Self {
        Self {
            name: name.into(),
            hex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let color = HexColor::parse("#17e88f").unwrap();
        assert_eq!(color.as_str(), "#17E88F");
        assert_eq!(color.ooxml(), "17E88F");
    }

    #[test]
    fn test_reject_malformed_hex() {
        assert!(HexColor::parse("17E88F").is_err());
        assert!(HexColor::parse("#17E88").is_err());
        assert!(HexColor::parse("#GGGGGG").is_err());
        assert!(HexColor::parse("#17E88F00").is_err());
    }

    #[test]
    fn test_ooxml_rename_is_exact() {
        let pairs: Vec<(&str, &str)> = ColorKey::ALL
            .iter()
            .map(|k| (k.as_str(), k.ooxml_key()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("dark1", "dk1"),
                ("light1", "lt1"),
                ("dark2", "dk2"),
                ("light2", "lt2"),
                ("accent1", "accent1"),
                ("accent2", "accent2"),
                ("accent3", "accent3"),
                ("accent4", "accent4"),
                ("accent5", "accent5"),
                ("accent6", "accent6"),
                ("hyperlink", "hlink"),
                ("followedHyperlink", "folHlink"),
            ]
        );
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let json = r##"{ "dark1": "#000000", "accent1": "#FF0000" }"##;
        let colors: ThemeColorSet = serde_json::from_str(json).unwrap();

        assert_eq!(colors.dark1.as_str(), "#000000");
        assert_eq!(colors.accent1.as_str(), "#FF0000");
        assert_eq!(colors.light1, ThemeColorSet::cbre().light1);
        assert_eq!(colors.iter().count(), 12);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let json = r##"{ "primary": "#000000" }"##;
        assert!(serde_json::from_str::<ThemeColorSet>(json).is_err());
    }

    #[test]
    fn test_bad_hex_in_document_is_rejected() {
        let json = r##"{ "dark1": "black" }"##;
        assert!(serde_json::from_str::<ThemeColorSet>(json).is_err());
    }

    #[test]
    fn test_set_and_get() {
        let mut colors = ThemeColorSet::default();
        colors.set(ColorKey::FollowedHyperlink, HexColor::parse("#123456").unwrap());
        assert_eq!(colors.get(ColorKey::FollowedHyperlink).ooxml(), "123456");
    }

    #[test]
    fn test_color_key_parse() {
        assert_eq!(ColorKey::parse("accent3").unwrap(), ColorKey::Accent3);
        assert!(ColorKey::parse("dk1").is_err());
    }
}
