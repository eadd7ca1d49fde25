use pagenav_types::SectionId;
use serde::Serialize;

/// View-state for one page session.
///
/// Owned by the event router and handed by reference to each handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    /// The highlighted section. At most one section is active.
    pub active_section_id: Option<SectionId>,
    pub menu_visible: bool,
    /// True while a debounce window is open.
    pub scroll_debounce_active: bool,
    /// True until the user first navigates by click, hash or scroll.
    pub page_just_loaded: bool,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            active_section_id: None,
            menu_visible: true,
            scroll_debounce_active: false,
            page_just_loaded: true,
        }
    }
}

impl TrackerState {
    pub fn is_idle(&self) -> bool {
        self.active_section_id.is_none()
    }
}
