//! Slide sizes and alignment guides.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Width of the layout reference grid in pixels
pub const REFERENCE_WIDTH_PX: f64 = 1920.0;

/// Height of the layout reference grid in pixels
pub const REFERENCE_HEIGHT_PX: f64 = 1080.0;

const MM_PER_INCH: f64 = 25.4;
const CSS_DPI: f64 = 96.0;

/// Supported slide sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SlideSize {
    /// 1920×1080 px, 13.333×7.5 in
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    /// 297×210 mm
    #[serde(rename = "A4-landscape")]
    A4Landscape,
}

impl SlideSize {
    pub const ALL: [SlideSize; 2] = [SlideSize::Widescreen, SlideSize::A4Landscape];

    /// Slide width in EMU
    pub fn width_emu(self) -> i64 {
        match self {
            Self::Widescreen => 12_192_000,
            Self::A4Landscape => 10_692_000,
        }
    }

    /// Slide height in EMU
    pub fn height_emu(self) -> i64 {
        match self {
            Self::Widescreen => 6_858_000,
            Self::A4Landscape => 7_560_000,
        }
    }

    /// Pixel-equivalent width, the extent guides are authored against
    pub fn width_px(self) -> f64 {
        match self {
            Self::Widescreen => REFERENCE_WIDTH_PX,
            Self::A4Landscape => mm_to_px(297.0),
        }
    }

    /// Pixel-equivalent height
    pub fn height_px(self) -> f64 {
        match self {
            Self::Widescreen => REFERENCE_HEIGHT_PX,
            Self::A4Landscape => mm_to_px(210.0),
        }
    }

    /// `type` attribute for `<p:sldSz>`
    pub fn ooxml_type(self) -> Option<&'static str> {
        match self {
            Self::Widescreen => None,
            Self::A4Landscape => Some("A4"),
        }
    }

    /// Serialized name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Widescreen => "16:9",
            Self::A4Landscape => "A4-landscape",
        }
    }
}

impl fmt::Display for SlideSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn mm_to_px(mm: f64) -> f64 {
    mm * CSS_DPI / MM_PER_INCH
}

/// Guide direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// A horizontal line, positioned on the y axis
    Horizontal,
    /// A vertical line, positioned on the x axis
    Vertical,
}

impl Orientation {
    /// `orient` attribute value of `<p:guide>`
    pub fn ooxml(self) -> &'static str {
        match self {
            Self::Horizontal => "horz",
            Self::Vertical => "vert",
        }
    }
}

/// An alignment guide at a pixel offset from the slide's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub orientation: Orientation,
    pub position: f64,
}

impl Guide {
    pub fn horizontal(position: f64) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            position,
        }
    }

    pub fn vertical(position: f64) -> Self {
        Self {
            orientation: Orientation::Vertical,
            position,
        }
    }

    /// Pixel extent of the slide along this guide's axis
    pub fn axis_extent_px(&self, size: SlideSize) -> f64 {
        match self.orientation {
            Orientation::Horizontal => size.height_px(),
            Orientation::Vertical => size.width_px(),
        }
    }

    /// Whether the guide lies on the slide
    pub fn is_on_slide(&self, size: SlideSize) -> bool {
        self.position.is_finite()
            && self.position >= 0.0
            && self.position <= self.axis_extent_px(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widescreen_extents() {
        let size = SlideSize::Widescreen;
        assert_eq!(size.width_emu(), 12_192_000);
        assert_eq!(size.height_emu(), 6_858_000);
        assert_eq!(size.width_px(), 1920.0);
        assert_eq!(size.height_px(), 1080.0);
        assert_eq!(size.ooxml_type(), None);
    }

    #[test]
    fn test_a4_extents() {
        let size = SlideSize::A4Landscape;
        assert_eq!(size.width_emu(), 297 * 36_000);
        assert_eq!(size.height_emu(), 210 * 36_000);
        assert!((size.width_px() - 1122.52).abs() < 0.01);
        assert!((size.height_px() - 793.70).abs() < 0.01);
    }

    #[test]
    fn test_slide_size_serde_names() {
        assert_eq!(serde_json::to_string(&SlideSize::Widescreen).unwrap(), "\"16:9\"");
        let size: SlideSize = serde_json::from_str("\"A4-landscape\"").unwrap();
        assert_eq!(size, SlideSize::A4Landscape);
        assert!(serde_json::from_str::<SlideSize>("\"4:3\"").is_err());
    }

    #[test]
    fn test_guide_bounds() {
        let size = SlideSize::Widescreen;
        assert!(Guide::vertical(0.0).is_on_slide(size));
        assert!(Guide::vertical(1920.0).is_on_slide(size));
        assert!(!Guide::vertical(1920.5).is_on_slide(size));
        assert!(Guide::horizontal(1080.0).is_on_slide(size));
        assert!(!Guide::horizontal(1200.0).is_on_slide(size));
        assert!(!Guide::horizontal(-1.0).is_on_slide(size));
        assert!(!Guide::horizontal(f64::NAN).is_on_slide(size));
    }

    #[test]
    fn test_guide_json_shape() {
        let guide: Guide =
            serde_json::from_str(r#"{ "orientation": "vertical", "position": 960.5 }"#).unwrap();
        assert_eq!(guide, Guide::vertical(960.5));
        assert_eq!(guide.orientation.ooxml(), "vert");
    }
}
