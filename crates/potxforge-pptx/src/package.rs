//! Package assembly.
//!
//! Every part is generated and checked before the first byte reaches the
//! archive, so a failed export never leaves a partial package behind.

use potxforge_core::{TemplateConfig, TypographyRole};

use crate::archive::{PackageArchive, ZipPackage};
use crate::content_types::ContentTypes;
use crate::docprops::DocProps;
use crate::error::Result;
use crate::guides::convert_guides;
use crate::layouts::{generate_layout, layout_relationships};
use crate::master::{generate_slide_master, master_relationships};
use crate::presentation::{
    pres_props_xml, presentation_relationships, presentation_xml, root_relationships,
    table_styles_xml, view_props_xml,
};
use crate::theme::generate_theme;
use crate::translate::OoxmlConfig;
use crate::xml::check_well_formed;

/// What went into a generated package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    /// Number of slide layouts
    pub layout_count: usize,
    /// Guides written after dropping off-slide ones and duplicates
    pub guide_count: usize,
    /// Part paths in archive order
    pub parts: Vec<String>,
}

/// Builds `.potx` packages
#[derive(Debug, Clone, Default)]
pub struct PotxPackage {
    props: Option<DocProps>,
    application: Option<String>,
}

impl PotxPackage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use fixed document properties instead of ones derived at build time
    pub fn with_props(mut self, props: DocProps) -> Self {
        self.props = Some(props);
        self
    }

    /// Application name written to `docProps/app.xml`
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = Some(application.into());
        self
    }

    /// Build a `.potx` in memory
    pub fn build(&self, config: &TemplateConfig) -> Result<Vec<u8>> {
        let (archive, _) = self.build_into(config, ZipPackage::in_memory())?;
        Ok(archive.into_inner())
    }

    /// Build into any archive
    pub fn build_into<A: PackageArchive>(
        &self,
        config: &TemplateConfig,
        mut archive: A,
    ) -> Result<(A::Output, PackageSummary)> {
        let (parts, summary) = self.generate_parts(config)?;
        for (path, xml) in &parts {
            archive.add_text(path, xml)?;
        }
        let output = archive.finish()?;

        log::info!(
            "Generated template '{}': {} layouts, {} guides, {} parts",
            config.name,
            summary.layout_count,
            summary.guide_count,
            summary.parts.len()
        );
        Ok((output, summary))
    }

    /// Generate and check every part, in archive order
    pub fn generate_parts(
        &self,
        config: &TemplateConfig,
    ) -> Result<(Vec<(String, String)>, PackageSummary)> {
        let ooxml = OoxmlConfig::from_template(config)?;
        let layout_count = ooxml.layout_count();
        let guides = convert_guides(&ooxml.guides, ooxml.slide_size);
        let props = self.doc_props(&ooxml);

        let mut parts: Vec<(String, String)> = vec![
            (
                "[Content_Types].xml".into(),
                ContentTypes::for_template(layout_count).to_xml(),
            ),
            ("_rels/.rels".into(), root_relationships().to_xml()),
            ("docProps/core.xml".into(), props.core_xml()),
            ("docProps/app.xml".into(), props.app_xml(ooxml.slide_size)),
            (
                "ppt/presentation.xml".into(),
                presentation_xml(
                    ooxml.slide_size,
                    ooxml.typography.style(TypographyRole::Body).font_size,
                ),
            ),
            ("ppt/presProps.xml".into(), pres_props_xml()),
            ("ppt/viewProps.xml".into(), view_props_xml(&guides)),
            ("ppt/tableStyles.xml".into(), table_styles_xml()),
            (
                "ppt/_rels/presentation.xml.rels".into(),
                presentation_relationships().to_xml(),
            ),
            (
                "ppt/theme/theme1.xml".into(),
                generate_theme(
                    &ooxml.name,
                    &ooxml.colors,
                    &ooxml.fonts,
                    &ooxml.custom_colors,
                ),
            ),
            (
                "ppt/slideMasters/slideMaster1.xml".into(),
                generate_slide_master(&ooxml),
            ),
            (
                "ppt/slideMasters/_rels/slideMaster1.xml.rels".into(),
                master_relationships(layout_count).to_xml(),
            ),
        ];

        for (i, layout) in ooxml.layouts.iter().enumerate() {
            let n = i + 1;
            parts.push((
                format!("ppt/slideLayouts/slideLayout{n}.xml"),
                generate_layout(layout, &ooxml),
            ));
            log::debug!("Layout {} is '{}'", n, layout.id);
        }
        for n in 1..=layout_count {
            parts.push((
                format!("ppt/slideLayouts/_rels/slideLayout{n}.xml.rels"),
                layout_relationships().to_xml(),
            ));
        }

        for (path, xml) in &parts {
            check_well_formed(path, xml)?;
            log::debug!("Generated {} ({} bytes)", path, xml.len());
        }

        let summary = PackageSummary {
            layout_count,
            guide_count: guides.len(),
            parts: parts.iter().map(|(p, _)| p.clone()).collect(),
        };
        Ok((parts, summary))
    }

    fn doc_props(&self, ooxml: &OoxmlConfig) -> DocProps {
        let mut props = self
            .props
            .clone()
            .unwrap_or_else(|| DocProps::new(ooxml.name.clone(), ooxml.author.clone()));
        if let Some(application) = &self.application {
            props.application = application.clone();
        }
        props
    }
}
