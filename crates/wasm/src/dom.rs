//! The browser document as a [`ViewSurface`].

use crate::error::dom_err;
use log::warn;
use pagenav_core::{NavConfig, SectionId, SectionInfo, ViewError, ViewSurface};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

/// A view surface backed by the live DOM.
///
/// Sections are the elements matching the configured selector; their labels
/// come from the configured attribute (`data-nav` by default). Menu entries
/// are `<li><a href="#id">label</a></li>` items appended to the menu
/// container, and the anchor is the entry handle.
#[derive(Debug, Clone)]
pub struct DomViewSurface {
    window: Window,
    document: Document,
    menu: HtmlElement,
    section_selector: String,
    label_attribute: String,
}

impl DomViewSurface {
    /// Binds to the current window and the menu container named in `config`.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::ElementMissing` if there is no window, document or
    /// menu container.
    pub fn from_window(config: &NavConfig) -> Result<Self, ViewError> {
        let window =
            web_sys::window().ok_or_else(|| ViewError::ElementMissing("window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| ViewError::ElementMissing("document".to_string()))?;
        let menu = document
            .get_element_by_id(&config.menu_id)
            .ok_or_else(|| ViewError::ElementMissing(format!("#{}", config.menu_id)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ViewError::Unsupported(format!("#{} is not an HTML element", config.menu_id)))?;

        Ok(Self {
            window,
            document,
            menu,
            section_selector: config.section_selector.clone(),
            label_attribute: config.label_attribute.clone(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The menu container, where click listeners are attached.
    pub fn menu(&self) -> &HtmlElement {
        &self.menu
    }

    fn section_element(&self, id: &SectionId) -> Result<Element, ViewError> {
        self.document
            .get_element_by_id(id.as_str())
            .ok_or_else(|| ViewError::ElementMissing(id.to_string()))
    }
}

impl ViewSurface for DomViewSurface {
    type Element = Element;

    fn sections(&self) -> Vec<SectionInfo> {
        let nodes = match self.document.query_selector_all(&self.section_selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                warn!(
                    "Section selector '{}' failed: {}",
                    self.section_selector,
                    crate::error::describe(&e)
                );
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|el| {
                let label = el.get_attribute(&self.label_attribute).unwrap_or_default();
                SectionInfo::new(el.id(), label)
            })
            .collect()
    }

    fn section_top(&self, id: &SectionId) -> Option<f64> {
        self.document
            .get_element_by_id(id.as_str())
            .map(|el| el.get_bounding_client_rect().top())
    }

    fn append_menu_entry(
        &mut self,
        section: &SectionInfo,
        link_class: &str,
    ) -> Result<Element, ViewError> {
        let item = self
            .document
            .create_element("li")
            .map_err(dom_err("create li"))?;
        let link = self
            .document
            .create_element("a")
            .map_err(dom_err("create a"))?;

        link.set_attribute("href", &section.id.to_fragment())
            .map_err(dom_err("set href"))?;
        link.set_text_content(Some(&section.label));
        if !link_class.is_empty() {
            link.class_list()
                .add_1(link_class)
                .map_err(dom_err("add link class"))?;
        }

        item.append_child(&link).map_err(dom_err("append link"))?;
        self.menu
            .append_child(&item)
            .map_err(dom_err("append menu item"))?;
        Ok(link)
    }

    fn set_section_class(
        &mut self,
        id: &SectionId,
        class: &str,
        enabled: bool,
    ) -> Result<(), ViewError> {
        self.section_element(id)?
            .class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(dom_err("toggle section class"))
    }

    fn set_entry_class(
        &mut self,
        element: &Element,
        class: &str,
        enabled: bool,
    ) -> Result<(), ViewError> {
        element
            .class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(dom_err("toggle link class"))
    }

    fn set_menu_visible(&mut self, visible: bool) -> Result<(), ViewError> {
        let style = self.menu.style();
        if visible {
            style
                .remove_property("display")
                .map(|_| ())
                .map_err(dom_err("show menu"))
        } else {
            style
                .set_property("display", "none")
                .map_err(dom_err("hide menu"))
        }
    }

    fn menu_height(&self) -> f64 {
        f64::from(self.menu.offset_height())
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_section_into_view(&mut self, id: &SectionId) -> Result<(), ViewError> {
        self.section_element(id)?.scroll_into_view();
        Ok(())
    }

    fn scroll_entry_into_view(&mut self, element: &Element) -> Result<(), ViewError> {
        let options = ScrollIntoViewOptions::new();
        options.set_block(ScrollLogicalPosition::Nearest);
        options.set_inline(ScrollLogicalPosition::Nearest);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn location_hash(&self) -> Option<String> {
        self.window
            .location()
            .hash()
            .ok()
            .filter(|hash| !hash.is_empty())
    }

    fn replace_hash(&mut self, fragment: &str) -> Result<(), ViewError> {
        self.window
            .history()
            .map_err(dom_err("history"))?
            .replace_state_with_url(&JsValue::NULL, "", Some(fragment))
            .map_err(dom_err("replace state"))
    }

    fn name(&self) -> &'static str {
        "DomViewSurface"
    }
}
