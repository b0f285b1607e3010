//! Unit conversion into EMU and guide units.
//!
//! All rounding is half away from zero (`f64::round`).

use potxforge_core::slide::{REFERENCE_HEIGHT_PX, REFERENCE_WIDTH_PX};
use potxforge_core::{GridRect, Orientation, SlideSize};

use crate::constants::{
    EMU_PER_GUIDE_UNIT, EMU_PER_INCH, EMU_PER_MM, EMU_PER_PIXEL, EMU_PER_POINT,
};

/// Convert CSS pixels (96 DPI) to EMU
pub fn pixels_to_emu(px: f64) -> i64 {
    (px * EMU_PER_PIXEL as f64).round() as i64
}

/// Convert inches to EMU
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH as f64).round() as i64
}

/// Convert points to EMU
pub fn points_to_emu(pt: f64) -> i64 {
    (pt * EMU_PER_POINT as f64).round() as i64
}

/// Convert millimeters to EMU
pub fn mm_to_emu(mm: f64) -> i64 {
    (mm * EMU_PER_MM as f64).round() as i64
}

/// A percentage of an EMU extent
pub fn percent_of(extent: i64, pct: f64) -> i64 {
    (extent as f64 * pct / 100.0).round() as i64
}

/// Convert an EMU offset to guide units
pub fn emu_to_guide_units(emu: f64) -> i64 {
    (emu / EMU_PER_GUIDE_UNIT).round() as i64
}

/// Guide position in guide units for a pixel offset on the given slide
pub fn guide_position(px: f64, orientation: Orientation, size: SlideSize) -> i64 {
    let (extent_emu, extent_px) = match orientation {
        Orientation::Vertical => (size.width_emu(), size.width_px()),
        Orientation::Horizontal => (size.height_emu(), size.height_px()),
    };
    emu_to_guide_units(px * (extent_emu as f64 / extent_px))
}

/// A rectangle in EMU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmuRect {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl EmuRect {
    pub fn new(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self { x, y, cx, cy }
    }

    /// `<a:xfrm>` element for this rectangle
    pub fn xfrm(&self) -> String {
        format!(
            r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
            self.x, self.y, self.cx, self.cy
        )
    }
}

/// Scale from the 1920×1080 reference grid onto a slide size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridScale {
    pub x: f64,
    pub y: f64,
}

impl GridScale {
    pub fn for_size(size: SlideSize) -> Self {
        Self {
            x: size.width_emu() as f64 / pixels_to_emu(REFERENCE_WIDTH_PX) as f64,
            y: size.height_emu() as f64 / pixels_to_emu(REFERENCE_HEIGHT_PX) as f64,
        }
    }

    /// Horizontal grid pixels to EMU
    pub fn x(&self, px: f64) -> i64 {
        pixels_to_emu(px * self.x)
    }

    /// Vertical grid pixels to EMU
    pub fn y(&self, px: f64) -> i64 {
        pixels_to_emu(px * self.y)
    }

    pub fn rect(&self, rect: &GridRect) -> EmuRect {
        EmuRect::new(
            self.x(rect.x),
            self.y(rect.y),
            self.x(rect.width),
            self.y(rect.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_conversions() {
        assert_eq!(pixels_to_emu(1.0), 9_525);
        assert_eq!(pixels_to_emu(0.5), 4_763);
        assert_eq!(inches_to_emu(13.333_333_333), 12_192_000);
        assert_eq!(points_to_emu(72.0), 914_400);
        assert_eq!(mm_to_emu(297.0), 10_692_000);
        assert_eq!(mm_to_emu(210.0), 7_560_000);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 0.5 px = 4762.5 EMU
        assert_eq!(pixels_to_emu(0.5), 4_763);
        assert_eq!(pixels_to_emu(-0.5), -4_763);
        assert_eq!(emu_to_guide_units(793.75), 1);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(12_192_000, 25.0), 3_048_000);
        assert_eq!(percent_of(6_858_000, 93.0), 6_377_940);
    }

    #[test]
    fn test_grid_anchors_on_widescreen() {
        let scale = GridScale::for_size(SlideSize::Widescreen);
        assert_eq!(scale.x(1920.0), 12_192_000);
        assert_eq!(scale.y(1080.0), 6_858_000);
        assert_eq!(scale.x(960.0), 6_096_000);
    }

    #[test]
    fn test_grid_anchors_on_a4() {
        let scale = GridScale::for_size(SlideSize::A4Landscape);
        assert_eq!(scale.x(1920.0), 10_692_000);
        assert_eq!(scale.y(1080.0), 7_560_000);
    }

    #[test]
    fn test_guide_position_vertical_center() {
        assert_eq!(
            guide_position(960.0, Orientation::Vertical, SlideSize::Widescreen),
            3840
        );
        assert_eq!(
            guide_position(540.0, Orientation::Horizontal, SlideSize::Widescreen),
            2160
        );
    }

    #[test]
    fn test_guide_position_a4_uses_mm_extent() {
        let size = SlideSize::A4Landscape;
        let full_width = guide_position(size.width_px(), Orientation::Vertical, size);
        assert_eq!(full_width, emu_to_guide_units(10_692_000.0));
    }

    #[test]
    fn test_rect_xfrm() {
        let scale = GridScale::for_size(SlideSize::Widescreen);
        let rect = scale.rect(&GridRect::new(81.0, 91.0, 1758.0, 80.0));
        assert_eq!(rect, EmuRect::new(514_350, 577_850, 11_163_300, 508_000));
        assert_eq!(
            rect.xfrm(),
            r#"<a:xfrm><a:off x="514350" y="577850"/><a:ext cx="11163300" cy="508000"/></a:xfrm>"#
        );
    }
}
