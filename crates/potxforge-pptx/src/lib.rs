//! # potxforge-pptx
//!
//! Generation of PowerPoint templates (`.potx`) from a theme configuration.
//!
//! Every part of the package is produced by a pure function from typed input
//! to an XML string. [`PotxPackage`] runs those generators in a fixed order
//! and writes the results into a [`PackageArchive`].
//!
//! ## Features
//!
//! - **Theme**: twelve-color scheme, major/minor font scheme, custom colors
//! - **Slide master**: five placeholders and master text styles
//! - **Slide layouts**: eleven catalog layouts scaled from a 1920×1080 grid
//! - **Guides**: pixel guides converted and deduplicated into `viewProps.xml`
//! - **Bundle**: the template plus uploaded fonts, manifest and README
//!
//! ## Example
//!
//! ```rust,ignore
//! use potxforge_core::TemplateConfig;
//! use potxforge_pptx::PotxPackage;
//!
//! let config = TemplateConfig::from_file("brand.json")?;
//! let bytes = PotxPackage::new().build(&config)?;
//! std::fs::write("brand.potx", bytes)?;
//! ```

pub mod archive;
pub mod bundle;
pub mod content_types;
pub mod docprops;
pub mod error;
pub mod fonts;
pub mod guides;
pub mod layouts;
pub mod master;
pub mod package;
pub mod presentation;
pub mod relationships;
pub mod shapes;
pub mod text_style;
pub mod theme;
pub mod translate;
pub mod units;
pub mod xml;

// Re-exports
pub use archive::{MemoryArchive, PackageArchive, ZipPackage};
pub use bundle::{Bundle, BundleManifest, FontFile};
pub use docprops::DocProps;
pub use error::{PotxError, Result};
pub use fonts::{FontScheme, ResolvedFont, Typeface};
pub use guides::{convert_guides, dedup_guides, GuideEntry};
pub use package::{PackageSummary, PotxPackage};
pub use relationships::Relationships;
pub use translate::{ColorScheme, OoxmlConfig};

/// Package constants: units, namespaces, content and relationship types
pub mod constants {
    /// EMU per CSS pixel (96 DPI)
    pub const EMU_PER_PIXEL: i64 = 9_525;

    /// EMU per inch
    pub const EMU_PER_INCH: i64 = 914_400;

    /// EMU per point
    pub const EMU_PER_POINT: i64 = 12_700;

    /// EMU per millimeter
    pub const EMU_PER_MM: i64 = 36_000;

    /// EMU per guide position unit (one eighth of a point)
    pub const EMU_PER_GUIDE_UNIT: f64 = 1_587.5;

    /// Id of the single slide master in `presentation.xml`
    pub const SLIDE_MASTER_ID: u32 = 2_147_483_648;

    /// First slide layout id in the master's `sldLayoutIdLst`
    pub const SLIDE_LAYOUT_ID_BASE: u32 = 2_147_483_649;

    /// MIME type of a `.potx` file
    pub const POTX_MIME_TYPE: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.template";

    /// PresentationML namespace
    pub const NS_PRESENTATION: &str =
        "http://schemas.openxmlformats.org/presentationml/2006/main";

    /// DrawingML namespace
    pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

    /// Relationships namespace used on `r:id` attributes
    pub const NS_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    /// Namespace of `.rels` parts
    pub const NS_PACKAGE_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships";

    /// Content Types namespace
    pub const NS_CONTENT_TYPES: &str =
        "http://schemas.openxmlformats.org/package/2006/content-types";

    /// Core properties namespace
    pub const NS_CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";

    /// Extended properties namespace
    pub const NS_EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";

    /// docProps variant types namespace
    pub const NS_DOC_PROPS_VTYPES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes";

    /// Content type of `.rels` parts
    pub const CT_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";

    /// Content type of plain XML parts
    pub const CT_XML: &str = "application/xml";

    /// Content type of the template's main part
    pub const CT_TEMPLATE_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.template.main+xml";

    /// Content type of `presProps.xml`
    pub const CT_PRES_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";

    /// Content type of `viewProps.xml`
    pub const CT_VIEW_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml";

    /// Content type of `tableStyles.xml`
    pub const CT_TABLE_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml";

    /// Content type of the theme part
    pub const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";

    /// Content type of the slide master
    pub const CT_SLIDE_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";

    /// Content type of a slide layout
    pub const CT_SLIDE_LAYOUT: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";

    /// Content type of `docProps/core.xml`
    pub const CT_CORE_PROPERTIES: &str =
        "application/vnd.openxmlformats-package.core-properties+xml";

    /// Content type of `docProps/app.xml`
    pub const CT_EXTENDED_PROPERTIES: &str =
        "application/vnd.openxmlformats-officedocument.extended-properties+xml";

    /// Office document relationship type
    pub const REL_TYPE_OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

    /// Core properties relationship type
    pub const REL_TYPE_CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";

    /// Extended properties relationship type
    pub const REL_TYPE_EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";

    /// Slide master relationship type
    pub const REL_TYPE_SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";

    /// Slide layout relationship type
    pub const REL_TYPE_SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

    /// Theme relationship type
    pub const REL_TYPE_THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

    /// presProps relationship type
    pub const REL_TYPE_PRES_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";

    /// viewProps relationship type
    pub const REL_TYPE_VIEW_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";

    /// tableStyles relationship type
    pub const REL_TYPE_TABLE_STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";
}
