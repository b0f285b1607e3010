//! Document properties (`docProps/core.xml` and `docProps/app.xml`).

use chrono::{DateTime, SecondsFormat, Utc};
use potxforge_core::SlideSize;

use crate::constants::{NS_CORE_PROPERTIES, NS_DOC_PROPS_VTYPES, NS_EXTENDED_PROPERTIES};
use crate::xml::{self, escape};

/// Application name written when none is configured
pub const DEFAULT_APPLICATION: &str = "potxforge";

/// Metadata written into the package.
///
/// Timestamps default to the time of construction; pin them with
/// [`DocProps::at`] for reproducible output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocProps {
    pub title: String,
    pub creator: String,
    pub application: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl DocProps {
    pub fn new(title: impl Into<String>, creator: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            title: title.into(),
            creator: creator.into(),
            application: DEFAULT_APPLICATION.to_string(),
            created: now,
            modified: now,
        }
    }

    /// Use one fixed timestamp for both created and modified
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.created = timestamp;
        self.modified = timestamp;
        self
    }

    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = application.into();
        self
    }

    /// `docProps/core.xml`
    pub fn core_xml(&self) -> String {
        let creator = if self.creator.is_empty() {
            self.application.as_str()
        } else {
            self.creator.as_str()
        };
        let body = format!(
            r#"<cp:coreProperties xmlns:cp="{NS_CORE_PROPERTIES}" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{title}</dc:title>
  <dc:creator>{creator}</dc:creator>
  <cp:lastModifiedBy>{creator}</cp:lastModifiedBy>
  <cp:revision>1</cp:revision>
  <dcterms:created xsi:type="dcterms:W3CDTF">{created}</dcterms:created>
  <dcterms:modified xsi:type="dcterms:W3CDTF">{modified}</dcterms:modified>
</cp:coreProperties>"#,
            title = escape(&self.title),
            creator = escape(creator),
            created = w3cdtf(&self.created),
            modified = w3cdtf(&self.modified),
        );
        xml::document(&body)
    }

    /// `docProps/app.xml`
    pub fn app_xml(&self, slide_size: SlideSize) -> String {
        let body = format!(
            r#"<Properties xmlns="{NS_EXTENDED_PROPERTIES}" xmlns:vt="{NS_DOC_PROPS_VTYPES}">
  <TotalTime>0</TotalTime>
  <Words>0</Words>
  <Application>{application}</Application>
  <PresentationFormat>{format}</PresentationFormat>
  <Paragraphs>0</Paragraphs>
  <Slides>0</Slides>
  <Notes>0</Notes>
  <HiddenSlides>0</HiddenSlides>
  <MMClips>0</MMClips>
  <ScaleCrop>false</ScaleCrop>
  <LinksUpToDate>false</LinksUpToDate>
  <SharedDoc>false</SharedDoc>
  <HyperlinksChanged>false</HyperlinksChanged>
  <AppVersion>16.0000</AppVersion>
</Properties>"#,
            application = escape(&self.application),
            format = presentation_format(slide_size),
        );
        xml::document(&body)
    }
}

/// W3CDTF timestamp, second precision, `Z` suffix
pub fn w3cdtf(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn presentation_format(size: SlideSize) -> &'static str {
    match size {
        SlideSize::Widescreen => "Widescreen",
        SlideSize::A4Landscape => "A4 Paper (210x297 mm)",
    }
}
