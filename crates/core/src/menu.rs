//! Navigation menu construction.
//!
//! One entry per section, in document order, each linking to `#<section id>`.
//! The builder is consumed by [`NavigationMenuBuilder::build`], so one builder
//! appends its entries exactly once.

use crate::error::NavError;
use log::{debug, warn};
use pagenav_traits::ViewSurface;
use pagenav_types::{NavigationEntry, SectionId, SectionInfo};
use std::collections::HashMap;

/// The built menu: ordered entries plus a section id lookup.
#[derive(Debug, Clone)]
pub struct NavigationMenu<H> {
    entries: Vec<NavigationEntry<H>>,
    by_section: HashMap<SectionId, usize>,
}

impl<H> NavigationMenu<H> {
    pub fn entries(&self) -> &[NavigationEntry<H>] {
        &self.entries
    }

    /// The entry linking to `id`, if one was built.
    pub fn get(&self, id: &SectionId) -> Option<&NavigationEntry<H>> {
        self.by_section.get(id).map(|&i| &self.entries[i])
    }

    /// Position of the entry linking to `id`.
    pub fn position(&self, id: &SectionId) -> Option<usize> {
        self.by_section.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the menu from the page's sections.
#[derive(Debug, Clone)]
pub struct NavigationMenuBuilder {
    sections: Vec<SectionInfo>,
    link_class: String,
}

impl NavigationMenuBuilder {
    /// Create a builder for `sections`, given in document order.
    pub fn new(sections: Vec<SectionInfo>) -> Self {
        Self {
            sections,
            link_class: String::new(),
        }
    }

    /// Class applied to every generated link.
    pub fn with_link_class(mut self, class: impl Into<String>) -> Self {
        self.link_class = class.into();
        self
    }

    /// Append one entry per section to the surface's menu container.
    ///
    /// Sections with an empty id or label still get an entry; the link or
    /// label is simply empty. Entries with an empty id are not addressable
    /// and so never become active.
    ///
    /// # Errors
    ///
    /// Returns `NavError::View` if the surface fails to create an entry.
    pub fn build<V: ViewSurface>(
        self,
        surface: &mut V,
    ) -> Result<NavigationMenu<V::Element>, NavError> {
        let mut entries = Vec::with_capacity(self.sections.len());
        let mut by_section = HashMap::with_capacity(self.sections.len());

        for section in &self.sections {
            let element = surface.append_menu_entry(section, &self.link_class)?;

            if section.label.is_empty() {
                warn!("Section '{}' has no label; its menu entry is empty", section.id);
            }
            if section.id.is_empty() {
                warn!("Section '{}' has no id; its menu entry links nowhere", section.label);
            } else if by_section.contains_key(&section.id) {
                warn!(
                    "Duplicate section id '{}'; only the first entry is tracked",
                    section.id
                );
            } else {
                by_section.insert(section.id.clone(), entries.len());
            }

            entries.push(NavigationEntry::new(section.id.clone(), element));
        }

        debug!(
            "Built navigation menu with {} entries on {}",
            entries.len(),
            surface.name()
        );

        Ok(NavigationMenu {
            entries,
            by_section,
        })
    }
}
