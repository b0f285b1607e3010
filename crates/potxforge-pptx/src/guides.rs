//! Guide conversion and deduplication for `viewProps.xml`.

use std::collections::HashSet;

use potxforge_core::{Guide, Orientation, SlideSize};

use crate::units::guide_position;

/// A guide in PowerPoint's guide units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuideEntry {
    pub orientation: Orientation,
    pub position: i64,
}

impl GuideEntry {
    pub fn to_xml(&self) -> String {
        format!(
            r#"<p:guide orient="{}" pos="{}"/>"#,
            self.orientation.ooxml(),
            self.position
        )
    }
}

/// Convert pixel guides for a slide size.
///
/// Guides off the slide are dropped, then duplicates are removed.
pub fn convert_guides(guides: &[Guide], size: SlideSize) -> Vec<GuideEntry> {
    let entries: Vec<GuideEntry> = guides
        .iter()
        .filter(|guide| {
            let keep = guide.is_on_slide(size);
            if !keep {
                log::debug!(
                    "Dropping {:?} guide at {} px: outside the slide",
                    guide.orientation,
                    guide.position
                );
            }
            keep
        })
        .map(|guide| GuideEntry {
            orientation: guide.orientation,
            position: guide_position(guide.position, guide.orientation, size),
        })
        .collect();
    dedup_guides(&entries)
}

/// Remove repeated `(orientation, position)` pairs; the first one wins
pub fn dedup_guides(entries: &[GuideEntry]) -> Vec<GuideEntry> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|entry| {
            let first = seen.insert(**entry);
            if !first {
                log::debug!(
                    "Dropping duplicate {} guide at {}",
                    entry.orientation.ooxml(),
                    entry.position
                );
            }
            first
        })
        .copied()
        .collect()
}
