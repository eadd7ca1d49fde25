//! PageNav: wires the browser events to the navigation router.

use crate::dom::DomViewSurface;
use crate::error::{NavJsError, describe};
use crate::scheduler::{RouterSlot, WindowScheduler};
use log::{debug, warn};
use pagenav_core::{EventRouter, NavConfig, NavEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Element, Event, EventTarget, KeyboardEvent};

/// An event listener that detaches itself when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, NavJsError> {
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| NavJsError::from(pagenav_core::ViewError::dom(kind, describe(&e))))?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
            .ok();
    }
}

fn dispatch(slot: &RouterSlot, event: NavEvent) {
    match slot.try_borrow_mut() {
        Ok(mut guard) => {
            if let Some(router) = guard.as_mut() {
                router.dispatch(event);
            }
        }
        Err(_) => warn!("Router busy; dropping {:?}", event),
    }
}

/// Link target of the clicked element or its nearest enclosing anchor.
fn clicked_href(event: &Event) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let link = target.closest("a[href]").ok()??;
    link.get_attribute("href")
}

/// The navigation helper attached to the current page.
///
/// # Example
///
/// ```javascript
/// import init, { PageNav } from '@pagenav/wasm';
///
/// await init();
/// const nav = new PageNav({ lookAhead: 400 });
/// console.log(nav.activeSection());
/// ```
#[wasm_bindgen]
pub struct PageNav {
    router: RouterSlot,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl PageNav {
    /// Build the menu, attach listeners and apply the current URL fragment.
    ///
    /// `config` is an optional object with any `NavConfig` fields in
    /// camelCase; missing fields keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PageNav, JsValue> {
        let config = parse_config(config)?;
        Ok(Self::mount(config)?)
    }

    /// The id of the active section, if any.
    #[wasm_bindgen(js_name = activeSection)]
    pub fn active_section(&self) -> Option<String> {
        self.router.borrow().as_ref().and_then(|router| {
            router
                .state()
                .active_section_id
                .as_ref()
                .map(|id| id.to_string())
        })
    }

    /// Whether the menu is currently shown.
    #[wasm_bindgen(js_name = isMenuVisible)]
    pub fn is_menu_visible(&self) -> bool {
        self.router
            .borrow()
            .as_ref()
            .is_some_and(|router| router.state().menu_visible)
    }

    /// A snapshot of the tracker state as a plain object.
    #[wasm_bindgen]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        let guard = self.router.borrow();
        let router = guard
            .as_ref()
            .ok_or_else(|| NavJsError::config("navigation is not running"))?;
        serde_wasm_bindgen::to_value(router.state())
            .map_err(|e| NavJsError::config(e.to_string()).into())
    }

    /// Activate the section named by `fragment` as if the URL had changed.
    #[wasm_bindgen(js_name = navigateTo)]
    pub fn navigate_to(&self, fragment: &str) {
        dispatch(
            &self.router,
            NavEvent::HistoryChanged {
                hash: Some(fragment.to_string()),
            },
        );
    }

    /// Detach all listeners. Pending timers become no-ops.
    #[wasm_bindgen]
    pub fn destroy(self) {
        debug!("PageNav destroyed");
    }
}

impl PageNav {
    /// Starts navigation on the current document with `config`.
    pub fn mount(config: NavConfig) -> Result<PageNav, NavJsError> {
        let surface = DomViewSurface::from_window(&config)?;
        let window = surface.window().clone();
        let document = surface.document().clone();
        let menu = surface.menu().clone();

        let slot: RouterSlot = Rc::new(RefCell::new(None));
        let scheduler = WindowScheduler::new(window.clone(), Rc::downgrade(&slot));
        let router = EventRouter::start(surface, scheduler, config)?;
        *slot.borrow_mut() = Some(router);

        let mut listeners = Vec::with_capacity(4);

        let s = slot.clone();
        listeners.push(Listener::attach(
            &menu,
            "click",
            false,
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                dispatch(&s, NavEvent::MenuClick { href: clicked_href(&event) });
            }),
        )?);

        let s = slot.clone();
        listeners.push(Listener::attach(
            &window,
            "wheel",
            true,
            Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                dispatch(&s, NavEvent::Wheel);
            }),
        )?);

        let s = slot.clone();
        listeners.push(Listener::attach(
            &document,
            "keydown",
            true,
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                    dispatch(&s, NavEvent::KeyDown { key });
                }
            }),
        )?);

        let s = slot.clone();
        let history_window = window.clone();
        listeners.push(Listener::attach(
            &window,
            "popstate",
            false,
            Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let hash = history_window
                    .location()
                    .hash()
                    .ok()
                    .filter(|h| !h.is_empty());
                dispatch(&s, NavEvent::HistoryChanged { hash });
            }),
        )?);

        let hash = window.location().hash().ok().filter(|h| !h.is_empty());
        dispatch(&slot, NavEvent::Loaded { hash });

        Ok(PageNav {
            router: slot,
            _listeners: listeners,
        })
    }
}

/// Reads an optional JS configuration object.
pub fn parse_config(value: JsValue) -> Result<NavConfig, NavJsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(NavConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}
