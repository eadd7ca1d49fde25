//! ViewSurface trait for abstracting the page the navigation helper drives.
//!
//! The core never touches a document directly. It reads section geometry and
//! scroll position through this trait and writes classes, visibility and the
//! URL fragment back through it, so the same state machine runs against the
//! browser DOM and against an in-memory page.

use pagenav_types::{SectionId, SectionInfo};
use std::collections::BTreeSet;
use std::fmt::Debug;
use thiserror::Error;

/// Error type for view operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("Element not found: {0}")]
    ElementMissing(String),

    #[error("DOM operation '{operation}' failed: {message}")]
    Dom { operation: String, message: String },

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

impl ViewError {
    pub fn dom(operation: impl Into<String>, message: impl Into<String>) -> Self {
        ViewError::Dom {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// The page surface the navigation core reads from and writes to.
///
/// # Implementations
///
/// - `InMemoryViewSurface`: a scripted page kept in memory (always available)
/// - `DomViewSurface`: the live browser document (in `pagenav-wasm`)
///
/// Geometry getters are infallible: a section that cannot be measured simply
/// reports `None` and is skipped by the viewport scan.
pub trait ViewSurface: Debug {
    /// Handle to a created menu entry.
    type Element: Clone + Debug;

    /// Enumerates the page sections in document order.
    fn sections(&self) -> Vec<SectionInfo>;

    /// Top edge of a section relative to the viewport origin.
    ///
    /// Returns `None` if the section is no longer on the page.
    fn section_top(&self, id: &SectionId) -> Option<f64>;

    /// Appends a link for `section` to the menu container.
    ///
    /// # Arguments
    ///
    /// * `section` - The section the link points to
    /// * `link_class` - Class applied to every menu link
    fn append_menu_entry(
        &mut self,
        section: &SectionInfo,
        link_class: &str,
    ) -> Result<Self::Element, ViewError>;

    /// Adds or removes `class` on the section element with the given id.
    fn set_section_class(
        &mut self,
        id: &SectionId,
        class: &str,
        enabled: bool,
    ) -> Result<(), ViewError>;

    /// Adds or removes `class` on a menu entry.
    fn set_entry_class(
        &mut self,
        element: &Self::Element,
        class: &str,
        enabled: bool,
    ) -> Result<(), ViewError>;

    /// Shows or hides the menu container.
    fn set_menu_visible(&mut self, visible: bool) -> Result<(), ViewError>;

    /// Rendered height of the menu container.
    fn menu_height(&self) -> f64;

    /// Vertical scroll offset of the document.
    fn scroll_offset(&self) -> f64;

    /// Scrolls the document so the section's top edge is in view.
    fn scroll_section_into_view(&mut self, id: &SectionId) -> Result<(), ViewError>;

    /// Scrolls the menu so the entry is visible within it.
    fn scroll_entry_into_view(&mut self, element: &Self::Element) -> Result<(), ViewError>;

    /// The current URL fragment including the leading `#`, if any.
    fn location_hash(&self) -> Option<String>;

    /// Replaces the URL fragment without adding a history entry.
    fn replace_hash(&mut self, fragment: &str) -> Result<(), ViewError>;

    /// Returns a human-readable name for this surface (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A menu link held by [`InMemoryViewSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub section_id: SectionId,
    pub label: String,
    pub href: String,
    pub classes: BTreeSet<String>,
}

#[derive(Debug, Clone)]
struct PageSection {
    info: SectionInfo,
    /// Top edge relative to the document origin.
    document_top: f64,
    classes: BTreeSet<String>,
}

/// An in-memory page.
///
/// Sections are laid out at fixed document positions; the viewport-relative
/// offset is `document_top - scroll_offset`, so scrolling moves every section
/// the way a real page does. Works in any environment and records what the
/// core asked for, which is what the tests assert on.
#[derive(Debug, Clone)]
pub struct InMemoryViewSurface {
    sections: Vec<PageSection>,
    menu: Vec<MenuItem>,
    menu_visible: bool,
    menu_height: f64,
    scroll_offset: f64,
    hash: Option<String>,
    revealed_entry: Option<usize>,
}

impl Default for InMemoryViewSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryViewSurface {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            menu: Vec::new(),
            menu_visible: true,
            menu_height: 0.0,
            scroll_offset: 0.0,
            hash: None,
            revealed_entry: None,
        }
    }

    /// Adds a section at the given document position.
    pub fn with_section(
        mut self,
        id: impl Into<SectionId>,
        label: impl Into<String>,
        document_top: f64,
    ) -> Self {
        self.push_section(SectionInfo::new(id, label), document_top);
        self
    }

    pub fn with_menu_height(mut self, height: f64) -> Self {
        self.menu_height = height;
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn push_section(&mut self, info: SectionInfo, document_top: f64) {
        self.sections.push(PageSection {
            info,
            document_top,
            classes: BTreeSet::new(),
        });
    }

    /// Moves a section to a new document position (e.g. after a reflow).
    ///
    /// Returns `false` if no section has the id.
    pub fn set_section_top(&mut self, id: &SectionId, document_top: f64) -> bool {
        match self.sections.iter_mut().find(|s| &s.info.id == id) {
            Some(section) => {
                section.document_top = document_top;
                true
            }
            None => false,
        }
    }

    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    pub fn set_menu_height(&mut self, height: f64) {
        self.menu_height = height;
    }

    pub fn set_hash(&mut self, hash: Option<String>) {
        self.hash = hash;
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn is_menu_visible(&self) -> bool {
        self.menu_visible
    }

    /// Index of the menu entry most recently scrolled into view.
    pub fn revealed_entry(&self) -> Option<usize> {
        self.revealed_entry
    }

    /// Ids of every section currently carrying `class`.
    pub fn sections_with_class(&self, class: &str) -> Vec<SectionId> {
        self.sections
            .iter()
            .filter(|s| s.classes.contains(class))
            .map(|s| s.info.id.clone())
            .collect()
    }

    /// Indices of every menu entry currently carrying `class`.
    pub fn entries_with_class(&self, class: &str) -> Vec<usize> {
        self.menu
            .iter()
            .enumerate()
            .filter(|(_, item)| item.classes.contains(class))
            .map(|(i, _)| i)
            .collect()
    }

    fn section(&self, id: &SectionId) -> Option<&PageSection> {
        self.sections.iter().find(|s| &s.info.id == id)
    }
}

impl ViewSurface for InMemoryViewSurface {
    type Element = usize;

    fn sections(&self) -> Vec<SectionInfo> {
        self.sections.iter().map(|s| s.info.clone()).collect()
    }

    fn section_top(&self, id: &SectionId) -> Option<f64> {
        self.section(id)
            .map(|s| s.document_top - self.scroll_offset)
    }

    fn append_menu_entry(
        &mut self,
        section: &SectionInfo,
        link_class: &str,
    ) -> Result<usize, ViewError> {
        let mut classes = BTreeSet::new();
        if !link_class.is_empty() {
            classes.insert(link_class.to_string());
        }
        self.menu.push(MenuItem {
            section_id: section.id.clone(),
            label: section.label.clone(),
            href: section.id.to_fragment(),
            classes,
        });
        Ok(self.menu.len() - 1)
    }

    fn set_section_class(
        &mut self,
        id: &SectionId,
        class: &str,
        enabled: bool,
    ) -> Result<(), ViewError> {
        let section = self
            .sections
            .iter_mut()
            .find(|s| &s.info.id == id)
            .ok_or_else(|| ViewError::ElementMissing(id.to_string()))?;
        if enabled {
            section.classes.insert(class.to_string());
        } else {
            section.classes.remove(class);
        }
        Ok(())
    }

    fn set_entry_class(
        &mut self,
        element: &usize,
        class: &str,
        enabled: bool,
    ) -> Result<(), ViewError> {
        let item = self
            .menu
            .get_mut(*element)
            .ok_or_else(|| ViewError::ElementMissing(format!("menu entry {element}")))?;
        if enabled {
            item.classes.insert(class.to_string());
        } else {
            item.classes.remove(class);
        }
        Ok(())
    }

    fn set_menu_visible(&mut self, visible: bool) -> Result<(), ViewError> {
        self.menu_visible = visible;
        Ok(())
    }

    fn menu_height(&self) -> f64 {
        self.menu_height
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn scroll_section_into_view(&mut self, id: &SectionId) -> Result<(), ViewError> {
        let top = self
            .section(id)
            .map(|s| s.document_top)
            .ok_or_else(|| ViewError::ElementMissing(id.to_string()))?;
        self.scroll_offset = top.max(0.0);
        Ok(())
    }

    fn scroll_entry_into_view(&mut self, element: &usize) -> Result<(), ViewError> {
        if *element >= self.menu.len() {
            return Err(ViewError::ElementMissing(format!("menu entry {element}")));
        }
        self.revealed_entry = Some(*element);
        Ok(())
    }

    fn location_hash(&self) -> Option<String> {
        self.hash.clone()
    }

    fn replace_hash(&mut self, fragment: &str) -> Result<(), ViewError> {
        self.hash = Some(fragment.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "InMemoryViewSurface"
    }
}
