//! The slide layout catalog.
//!
//! Eleven fixed layouts, each a list of placeholders authored against the
//! 1920×1080 reference grid. Users pick a subset by id; the structure of a
//! layout is not editable.

use serde::Serialize;

use crate::color::ColorKey;
use crate::error::{ConfigError, Result};
use crate::typography::{TextAlign, TypographyRole};

/// Left/right margin of the design grid
pub const GRID_MARGIN: f64 = 81.0;

/// Width of the content area between the margins
pub const GRID_CONTENT_WIDTH: f64 = 1758.0;

/// Space between side-by-side placeholders
pub const GRID_GUTTER: f64 = 18.0;

/// Top of the title band
pub const TITLE_TOP: f64 = 91.0;

/// Height of the title band
pub const TITLE_HEIGHT: f64 = 80.0;

/// Top of the body region
pub const BODY_TOP: f64 = 194.0;

/// Height of the body region, ending above the footer band
pub const BODY_HEIGHT: f64 = 782.0;

/// A rectangle on the reference grid, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl GridRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// What a placeholder holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderKind {
    Title,
    Subtitle,
    Body,
    Image,
    Chart,
    Table,
}

/// The `<p:ph type>` a placeholder is emitted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlaceholderType {
    /// `title`
    Title,
    /// `ctrTitle`
    CenterTitle,
    /// `subTitle`
    Subtitle,
    /// `body`
    Body,
    /// No type attribute; PowerPoint treats it as a content object
    Object,
    /// `pic`
    Picture,
    /// `chart`
    Chart,
    /// `tbl`
    Table,
}

impl PlaceholderType {
    /// The `type` attribute value, if one is written
    pub fn ooxml_type(self) -> Option<&'static str> {
        match self {
            Self::Title => Some("title"),
            Self::CenterTitle => Some("ctrTitle"),
            Self::Subtitle => Some("subTitle"),
            Self::Body => Some("body"),
            Self::Object => None,
            Self::Picture => Some("pic"),
            Self::Chart => Some("chart"),
            Self::Table => Some("tbl"),
        }
    }

    /// Titles inherit from the master title and carry no idx
    pub fn is_title(self) -> bool {
        matches!(self, Self::Title | Self::CenterTitle)
    }
}

/// Vertical text anchor inside a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Top,
    Center,
    Bottom,
}

impl Anchor {
    /// `anchor` attribute of `<a:bodyPr>`
    pub fn ooxml(self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Center => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// One placeholder of a layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderSpec {
    pub kind: PlaceholderKind,
    pub ph_type: PlaceholderType,
    pub name: &'static str,
    pub rect: GridRect,
    pub role: TypographyRole,
    pub anchor: Anchor,
    /// Overrides the role's alignment
    pub align: Option<TextAlign>,
    /// Overrides the role's color with a theme slot
    pub color: Option<ColorKey>,
}

impl PlaceholderSpec {
    const fn new(
        kind: PlaceholderKind,
        ph_type: PlaceholderType,
        name: &'static str,
        rect: GridRect,
        role: TypographyRole,
    ) -> Self {
        Self {
            kind,
            ph_type,
            name,
            rect,
            role,
            anchor: Anchor::Top,
            align: None,
            color: None,
        }
    }

    const fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    const fn aligned(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    const fn colored(mut self, key: ColorKey) -> Self {
        self.color = Some(key);
        self
    }
}

/// A layout in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// `type` attribute of `<p:sldLayout>`
    pub layout_type: &'static str,
    pub placeholders: &'static [PlaceholderSpec],
}

impl LayoutTemplate {
    /// Placeholders paired with their `idx`.
    ///
    /// Titles get `None`; everything else is numbered from 1 in catalog order.
    pub fn indexed_placeholders(&self) -> Vec<(Option<u32>, &'static PlaceholderSpec)> {
        let mut next = 1;
        self.placeholders
            .iter()
            .map(|ph| {
                if ph.ph_type.is_title() {
                    (None, ph)
                } else {
                    let idx = next;
                    next += 1;
                    (Some(idx), ph)
                }
            })
            .collect()
    }
}

const fn title_band() -> PlaceholderSpec {
    PlaceholderSpec::new(
        PlaceholderKind::Title,
        PlaceholderType::Title,
        "Title",
        GridRect::new(GRID_MARGIN, TITLE_TOP, GRID_CONTENT_WIDTH, TITLE_HEIGHT),
        TypographyRole::Heading,
    )
}

const fn content(name: &'static str, rect: GridRect) -> PlaceholderSpec {
    PlaceholderSpec::new(
        PlaceholderKind::Body,
        PlaceholderType::Object,
        name,
        rect,
        TypographyRole::BodyLarge,
    )
}

const HALF_WIDTH: f64 = (GRID_CONTENT_WIDTH - GRID_GUTTER) / 2.0;
const THIRD_WIDTH: f64 = (GRID_CONTENT_WIDTH - 2.0 * GRID_GUTTER) / 3.0;
const RIGHT_COLUMN_X: f64 = GRID_MARGIN + HALF_WIDTH + GRID_GUTTER;
const HEADER_HEIGHT: f64 = (BODY_HEIGHT - GRID_GUTTER) / 4.0;
/// Quarter-height boxes stacked at the top of the right column
const STACKED_HEIGHT: f64 = (BODY_HEIGHT - GRID_GUTTER) / 4.0;
const SIDEBAR_WIDTH: f64 = 387.0;
const SIDEBAR_CONTENT_WIDTH: f64 = 1353.0;

static TITLE_SLIDE: [PlaceholderSpec; 2] = [
    PlaceholderSpec::new(
        PlaceholderKind::Title,
        PlaceholderType::CenterTitle,
        "Title",
        GridRect::new(GRID_MARGIN, 300.0, GRID_CONTENT_WIDTH, 240.0),
        TypographyRole::Heading,
    )
    .anchored(Anchor::Bottom)
    .aligned(TextAlign::Center),
    PlaceholderSpec::new(
        PlaceholderKind::Subtitle,
        PlaceholderType::Subtitle,
        "Subtitle",
        GridRect::new(GRID_MARGIN, 564.0, GRID_CONTENT_WIDTH, 120.0),
        TypographyRole::Subtitle,
    )
    .aligned(TextAlign::Center),
];

static TITLE_CONTENT: [PlaceholderSpec; 2] = [
    title_band(),
    content(
        "Content",
        GridRect::new(GRID_MARGIN, BODY_TOP, GRID_CONTENT_WIDTH, BODY_HEIGHT),
    ),
];

static SECTION_HEADER: [PlaceholderSpec; 1] = [title_band_at(
    GridRect::new(GRID_MARGIN, 420.0, GRID_CONTENT_WIDTH, 240.0),
)
.anchored(Anchor::Center)
.aligned(TextAlign::Center)];

const fn title_band_at(rect: GridRect) -> PlaceholderSpec {
    let mut ph = title_band();
    ph.rect = rect;
    ph
}

static TWO_CONTENT: [PlaceholderSpec; 3] = [
    title_band(),
    content(
        "Left Content",
        GridRect::new(GRID_MARGIN, BODY_TOP, HALF_WIDTH, BODY_HEIGHT),
    ),
    content(
        "Right Content",
        GridRect::new(RIGHT_COLUMN_X, BODY_TOP, HALF_WIDTH, BODY_HEIGHT),
    ),
];

const fn comparison_header(name: &'static str, x: f64) -> PlaceholderSpec {
    PlaceholderSpec::new(
        PlaceholderKind::Subtitle,
        PlaceholderType::Body,
        name,
        GridRect::new(x, BODY_TOP, HALF_WIDTH, HEADER_HEIGHT),
        TypographyRole::Subtitle,
    )
    .anchored(Anchor::Bottom)
}

const COMPARISON_BODY_TOP: f64 = BODY_TOP + HEADER_HEIGHT + GRID_GUTTER;
const COMPARISON_BODY_HEIGHT: f64 = BODY_HEIGHT - HEADER_HEIGHT - GRID_GUTTER;

static COMPARISON: [PlaceholderSpec; 5] = [
    title_band(),
    comparison_header("Left Header", GRID_MARGIN),
    content(
        "Left Content",
        GridRect::new(
            GRID_MARGIN,
            COMPARISON_BODY_TOP,
            HALF_WIDTH,
            COMPARISON_BODY_HEIGHT,
        ),
    ),
    comparison_header("Right Header", RIGHT_COLUMN_X),
    content(
        "Right Content",
        GridRect::new(
            RIGHT_COLUMN_X,
            COMPARISON_BODY_TOP,
            HALF_WIDTH,
            COMPARISON_BODY_HEIGHT,
        ),
    ),
];

static QUOTE: [PlaceholderSpec; 1] = [PlaceholderSpec::new(
    PlaceholderKind::Body,
    PlaceholderType::Body,
    "Quote",
    GridRect::new(240.0, 290.0, 1440.0, 500.0),
    TypographyRole::Quote,
)
.anchored(Anchor::Center)
.aligned(TextAlign::Center)
.colored(ColorKey::Accent1)];

static TITLE_ONLY: [PlaceholderSpec; 1] = [title_band()];

static THREE_CONTENT: [PlaceholderSpec; 4] = [
    title_band(),
    content(
        "Left Content",
        GridRect::new(GRID_MARGIN, BODY_TOP, THIRD_WIDTH, BODY_HEIGHT),
    ),
    content(
        "Middle Content",
        GridRect::new(
            GRID_MARGIN + THIRD_WIDTH + GRID_GUTTER,
            BODY_TOP,
            THIRD_WIDTH,
            BODY_HEIGHT,
        ),
    ),
    content(
        "Right Content",
        GridRect::new(
            GRID_MARGIN + 2.0 * (THIRD_WIDTH + GRID_GUTTER),
            BODY_TOP,
            THIRD_WIDTH,
            BODY_HEIGHT,
        ),
    ),
];

static CONTENT_SIDEBAR_STACKED: [PlaceholderSpec; 4] = [
    title_band(),
    content(
        "Content",
        GridRect::new(GRID_MARGIN, BODY_TOP, HALF_WIDTH, BODY_HEIGHT),
    ),
    PlaceholderSpec::new(
        PlaceholderKind::Image,
        PlaceholderType::Picture,
        "Picture",
        GridRect::new(RIGHT_COLUMN_X, BODY_TOP, HALF_WIDTH, STACKED_HEIGHT),
        TypographyRole::BodyLarge,
    ),
    PlaceholderSpec::new(
        PlaceholderKind::Chart,
        PlaceholderType::Chart,
        "Chart",
        GridRect::new(
            RIGHT_COLUMN_X,
            BODY_TOP + STACKED_HEIGHT + GRID_GUTTER,
            HALF_WIDTH,
            STACKED_HEIGHT,
        ),
        TypographyRole::BodyLarge,
    ),
];

static SIDEBAR_CONTENT: [PlaceholderSpec; 3] = [
    title_band(),
    content(
        "Sidebar",
        GridRect::new(GRID_MARGIN, BODY_TOP, SIDEBAR_WIDTH, BODY_HEIGHT),
    ),
    content(
        "Content",
        GridRect::new(
            GRID_MARGIN + SIDEBAR_WIDTH + GRID_GUTTER,
            BODY_TOP,
            SIDEBAR_CONTENT_WIDTH,
            BODY_HEIGHT,
        ),
    ),
];

/// The full catalog, in export order
pub static CATALOG: [LayoutTemplate; 11] = [
    LayoutTemplate {
        id: "title-slide",
        name: "Title Slide",
        description: "Centered title with subtitle",
        layout_type: "title",
        placeholders: &TITLE_SLIDE,
    },
    LayoutTemplate {
        id: "title-content",
        name: "Title and Content",
        description: "Title with a full-width content area",
        layout_type: "obj",
        placeholders: &TITLE_CONTENT,
    },
    LayoutTemplate {
        id: "section-header",
        name: "Section Header",
        description: "Single centered title for section breaks",
        layout_type: "secHead",
        placeholders: &SECTION_HEADER,
    },
    LayoutTemplate {
        id: "two-content",
        name: "Two Content",
        description: "Title with two side-by-side content areas",
        layout_type: "twoObj",
        placeholders: &TWO_CONTENT,
    },
    LayoutTemplate {
        id: "comparison",
        name: "Comparison",
        description: "Title with two headed content columns",
        layout_type: "twoTxTwoObj",
        placeholders: &COMPARISON,
    },
    LayoutTemplate {
        id: "blank",
        name: "Blank",
        description: "No placeholders",
        layout_type: "blank",
        placeholders: &[],
    },
    LayoutTemplate {
        id: "quote",
        name: "Quote",
        description: "Large centered quotation in the accent color",
        layout_type: "cust",
        placeholders: &QUOTE,
    },
    LayoutTemplate {
        id: "title-only",
        name: "Title Only",
        description: "Title band with an open canvas",
        layout_type: "titleOnly",
        placeholders: &TITLE_ONLY,
    },
    LayoutTemplate {
        id: "three-content",
        name: "Three Content",
        description: "Title with three equal columns",
        layout_type: "cust",
        placeholders: &THREE_CONTENT,
    },
    LayoutTemplate {
        id: "content-sidebar-stacked",
        name: "Content with Stacked Sidebar",
        description: "Half-width content beside a picture over a chart",
        layout_type: "cust",
        placeholders: &CONTENT_SIDEBAR_STACKED,
    },
    LayoutTemplate {
        id: "sidebar-content",
        name: "Sidebar and Content",
        description: "Narrow left sidebar beside wide content",
        layout_type: "cust",
        placeholders: &SIDEBAR_CONTENT,
    },
];

/// Ids of every catalog layout, in catalog order
pub fn catalog_ids() -> Vec<String> {
    CATALOG.iter().map(|l| l.id.to_string()).collect()
}

/// Look up a layout by id
pub fn find_layout(id: &str) -> Option<&'static LayoutTemplate> {
    CATALOG.iter().find(|l| l.id == id)
}

/// Look up a layout by catalog position
pub fn layout_at(index: usize) -> Option<&'static LayoutTemplate> {
    CATALOG.get(index)
}

/// Resolve a selection of layout ids against the catalog.
///
/// The result follows catalog order. Repeated ids are ignored with a warning,
/// unknown ids are an error, and an empty selection means the whole catalog.
pub fn resolve_selection(ids: &[String]) -> Result<Vec<&'static LayoutTemplate>> {
    if ids.is_empty() {
        return Ok(CATALOG.iter().collect());
    }

    let mut selected = vec![false; CATALOG.len()];
    for id in ids {
        let position = CATALOG
            .iter()
            .position(|l| l.id == id.as_str())
            .ok_or_else(|| ConfigError::unknown_layout(id))?;
        if selected[position] {
            log::warn!("Layout '{}' selected more than once, ignoring repeat", id);
        }
        selected[position] = true;
    }

    Ok(CATALOG
        .iter()
        .zip(selected)
        .filter_map(|(layout, keep)| keep.then_some(layout))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_catalog_has_eleven_unique_ids() {
        let mut all = catalog_ids();
        assert_eq!(all.len(), 11);
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 11);
    }

    #[test]
    fn test_idx_sequential_and_unique() {
        for layout in CATALOG.iter() {
            let indexed = layout.indexed_placeholders();
            let numbers: Vec<u32> = indexed.iter().filter_map(|(idx, _)| *idx).collect();
            let expected: Vec<u32> = (1..=numbers.len() as u32).collect();
            assert_eq!(numbers, expected, "layout {}", layout.id);
        }
    }

    #[test]
    fn test_geometry_stays_on_grid() {
        for layout in CATALOG.iter() {
            for ph in layout.placeholders {
                let r = ph.rect;
                assert!(r.x >= 0.0 && r.y >= 0.0, "{} / {}", layout.id, ph.name);
                assert!(r.x + r.width <= 1920.0, "{} / {}", layout.id, ph.name);
                assert!(r.y + r.height <= 1080.0, "{} / {}", layout.id, ph.name);
            }
        }
    }

    #[test]
    fn test_column_arithmetic() {
        let three = find_layout("three-content").unwrap();
        assert_eq!(three.placeholders[1].rect.width, 574.0);
        let last = three.placeholders[3].rect;
        assert_eq!(last.x + last.width, GRID_MARGIN + GRID_CONTENT_WIDTH);

        let two = find_layout("two-content").unwrap();
        assert_eq!(two.placeholders[2].rect.x, 969.0);

        let sidebar = find_layout("sidebar-content").unwrap();
        let content = sidebar.placeholders[2].rect;
        assert_eq!(content.x + content.width, GRID_MARGIN + GRID_CONTENT_WIDTH);
    }

    #[test]
    fn test_stacked_boxes_are_quarter_height() {
        let stacked = find_layout("content-sidebar-stacked").unwrap();
        let left = stacked.placeholders[1].rect;
        let upper = stacked.placeholders[2].rect;
        let lower = stacked.placeholders[3].rect;

        assert_eq!(left.height, BODY_HEIGHT);
        assert_eq!(upper.height, 191.0);
        assert_eq!(lower.height, 191.0);
        assert_eq!(upper.y, BODY_TOP);
        assert_eq!(lower.y, BODY_TOP + 191.0 + GRID_GUTTER);
        assert_eq!(upper.x, lower.x);
    }

    #[test]
    fn test_title_slide_placeholder_types() {
        let layout = find_layout("title-slide").unwrap();
        let indexed = layout.indexed_placeholders();
        assert_eq!(indexed[0].0, None);
        assert_eq!(indexed[0].1.ph_type.ooxml_type(), Some("ctrTitle"));
        assert_eq!(indexed[1].0, Some(1));
        assert_eq!(indexed[1].1.ph_type.ooxml_type(), Some("subTitle"));
    }

    #[test]
    fn test_blank_has_no_placeholders() {
        let blank = find_layout("blank").unwrap();
        assert!(blank.placeholders.is_empty());
        assert_eq!(blank.layout_type, "blank");
    }

    #[test]
    fn test_resolve_selection_follows_catalog_order() {
        let resolved = resolve_selection(&ids(&["quote", "blank", "title-slide"])).unwrap();
        let got: Vec<&str> = resolved.iter().map(|l| l.id).collect();
        assert_eq!(got, vec!["title-slide", "blank", "quote"]);
    }

    #[test]
    fn test_resolve_selection_ignores_repeats() {
        let resolved = resolve_selection(&ids(&["blank", "blank"])).unwrap();
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_resolve_selection_empty_is_full_catalog() {
        assert_eq!(resolve_selection(&[]).unwrap().len(), 11);
    }

    #[test]
    fn test_resolve_selection_rejects_unknown() {
        let err = resolve_selection(&ids(&["blank", "four-content"])).unwrap_err();
        assert_eq!(err.code(), "CFG002");
    }

    #[test]
    fn test_layout_at_bounds() {
        assert_eq!(layout_at(0).unwrap().id, "title-slide");
        assert_eq!(layout_at(10).unwrap().id, "sidebar-content");
        assert!(layout_at(11).is_none());
    }
}
