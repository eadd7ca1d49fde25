use crate::ids::SectionId;
use serde::{Deserialize, Serialize};

/// A section as enumerated from the page, before any geometry is read.
///
/// Pages are not always well formed: a section without a label attribute
/// yields an empty label rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionInfo {
    pub id: SectionId,
    #[serde(default)]
    pub label: String,
}

impl SectionInfo {
    pub fn new(id: impl Into<SectionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A content region of the page tracked by the navigation helper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// The unique, stable element id.
    pub id: SectionId,
    /// The label shown in the navigation menu.
    pub label: String,
    /// Top edge relative to the viewport origin, in CSS pixels.
    ///
    /// Positive values are below the viewport top. Refreshed from live layout
    /// before every viewport scan.
    pub top_offset: f64,
}

impl Section {
    pub fn new(info: SectionInfo) -> Self {
        Self {
            id: info.id,
            label: info.label,
            top_offset: 0.0,
        }
    }
}

impl From<SectionInfo> for Section {
    fn from(info: SectionInfo) -> Self {
        Self::new(info)
    }
}

/// One menu entry, linked 1:1 to a section.
///
/// `element` is whatever handle the view surface hands back when the entry is
/// appended: an index for in-memory surfaces, a DOM element in the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationEntry<H> {
    pub section_id: SectionId,
    pub element: H,
}

impl<H> NavigationEntry<H> {
    pub fn new(section_id: SectionId, element: H) -> Self {
        Self {
            section_id,
            element,
        }
    }

    /// The link target written into the entry (`#id`).
    pub fn href(&self) -> String {
        self.section_id.to_fragment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_info_starts_at_origin() {
        let section = Section::from(SectionInfo::new("intro", "Introduction"));
        assert_eq!(section.id.as_str(), "intro");
        assert_eq!(section.label, "Introduction");
        assert_eq!(section.top_offset, 0.0);
    }

    #[test]
    fn test_section_info_missing_label_defaults_to_empty() {
        let info: SectionInfo = serde_json::from_str(r#"{ "id": "s1" }"#).unwrap();
        assert_eq!(info.label, "");
    }

    #[test]
    fn test_entry_href() {
        let entry = NavigationEntry::new(SectionId::new("s2"), 7usize);
        assert_eq!(entry.href(), "#s2");
        assert_eq!(entry.element, 7);
    }
}
