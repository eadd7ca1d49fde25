//! Active section tracking.
//!
//! The tracker decides which section is "in view" and moves the active style
//! pair (section class + menu link class) to it. There are two states, idle
//! (no active section) and active; every transition goes through
//! [`ActiveSectionTracker::set_active`], which keeps exactly one section and
//! one entry styled.
//!
//! # Viewport scan
//!
//! Sections are scanned in document order and the first whose top edge lies
//! in the viewport band wins. When nothing qualifies (the reader is deep
//! inside a long section) the previous active section stays, which avoids
//! flicker between sections.

use crate::config::{NavConfig, ViewportBand};
use crate::menu::NavigationMenu;
use crate::state::TrackerState;
use log::{debug, trace, warn};
use pagenav_traits::{ViewError, ViewSurface};
use pagenav_types::{ActivationOrigin, Section, SectionId};

/// Index of the first offset inside `band`, scanning in order.
pub fn pick_nearest_index(offsets: &[f64], band: ViewportBand) -> Option<usize> {
    offsets.iter().position(|&offset| band.contains(offset))
}

#[derive(Debug, Clone)]
pub struct ActiveSectionTracker<H> {
    sections: Vec<Section>,
    menu: NavigationMenu<H>,
    band: ViewportBand,
    section_class: String,
    link_class: String,
    sync_hash: bool,
}

impl<H: Clone> ActiveSectionTracker<H> {
    pub fn new(sections: Vec<Section>, menu: NavigationMenu<H>, config: &NavConfig) -> Self {
        Self {
            sections,
            menu,
            band: config.band(),
            section_class: config.section_active_class.clone(),
            link_class: config.link_active_class.clone(),
            sync_hash: config.sync_hash,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn menu(&self) -> &NavigationMenu<H> {
        &self.menu
    }

    pub fn contains(&self, id: &SectionId) -> bool {
        !id.is_empty() && self.sections.iter().any(|s| &s.id == id)
    }

    /// Re-reads every section's top offset from live layout.
    ///
    /// A section the surface can no longer measure keeps its last offset.
    pub fn refresh_offsets<V>(&mut self, surface: &V)
    where
        V: ViewSurface<Element = H>,
    {
        for section in &mut self.sections {
            if let Some(top) = surface.section_top(&section.id) {
                section.top_offset = top;
            }
        }
    }

    /// The first section, in document order, whose top edge is in the band.
    pub fn pick_nearest_to_viewport(&self) -> Option<&Section> {
        let offsets: Vec<f64> = self.sections.iter().map(|s| s.top_offset).collect();
        let picked = pick_nearest_index(&offsets, self.band).map(|i| &self.sections[i]);
        trace!(
            "Viewport scan over {:?} picked {:?}",
            offsets,
            picked.map(|s| s.id.as_str())
        );
        picked
    }

    /// Refreshes geometry and activates the section nearest the viewport.
    ///
    /// Returns `true` if the active section changed. No match leaves the
    /// state untouched.
    pub fn activate_from_viewport<V>(&mut self, state: &mut TrackerState, surface: &mut V) -> bool
    where
        V: ViewSurface<Element = H>,
    {
        self.refresh_offsets(surface);
        let Some(id) = self.pick_nearest_to_viewport().map(|s| s.id.clone()) else {
            trace!("No section in viewport band; keeping {:?}", state.active_section_id);
            return false;
        };
        self.set_active(state, surface, &id, ActivationOrigin::Scroll)
    }

    /// Makes `id` the active section.
    ///
    /// Clears the active style from the previous section and entry, styles
    /// the new pair and, unless the activation came from a menu click,
    /// scrolls the entry into view within the menu. Unknown ids are ignored.
    ///
    /// Returns `true` if the active section changed.
    pub fn set_active<V>(
        &mut self,
        state: &mut TrackerState,
        surface: &mut V,
        id: &SectionId,
        origin: ActivationOrigin,
    ) -> bool
    where
        V: ViewSurface<Element = H>,
    {
        if !self.contains(id) {
            debug!("Ignoring activation of unknown section '{id}'");
            return false;
        }

        let previous = state.active_section_id.take();
        if let Some(prev) = previous.as_ref().filter(|prev| *prev != id) {
            report(
                "clear section class",
                surface.set_section_class(prev, &self.section_class, false),
            );
            if let Some(entry) = self.menu.get(prev) {
                report(
                    "clear link class",
                    surface.set_entry_class(&entry.element, &self.link_class, false),
                );
            }
        }

        report(
            "set section class",
            surface.set_section_class(id, &self.section_class, true),
        );
        if let Some(entry) = self.menu.get(id) {
            report(
                "set link class",
                surface.set_entry_class(&entry.element, &self.link_class, true),
            );
            if origin.reveals_entry() {
                report(
                    "reveal menu entry",
                    surface.scroll_entry_into_view(&entry.element),
                );
            }
        }

        if self.sync_hash && origin != ActivationOrigin::Hash {
            let fragment = id.to_fragment();
            if surface.location_hash().as_deref() != Some(fragment.as_str()) {
                report("replace hash", surface.replace_hash(&fragment));
            }
        }

        let changed = previous.as_ref() != Some(id);
        if changed {
            debug!("Active section {:?} -> '{}' ({:?})", previous, id, origin);
        }
        state.active_section_id = Some(id.clone());
        changed
    }
}

/// View failures during event handling are not fatal.
pub(crate) fn report(operation: &str, result: Result<(), ViewError>) {
    if let Err(e) = result {
        warn!("View operation '{operation}' failed: {e}");
    }
}
