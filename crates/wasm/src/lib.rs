//! WebAssembly bindings for pagenav.
//!
//! This crate attaches the platform-agnostic navigation core to a live page:
//! it builds the section menu, listens for clicks, wheel and key presses and
//! history navigation, and drives the menu debouncer with `setTimeout`.
//!
//! ## Module Structure
//!
//! - [`dom`] - `DomViewSurface`, the document as a view surface
//! - [`scheduler`] - `WindowScheduler`, timers on `window.setTimeout`
//! - [`page`] - `PageNav`, listener wiring and the JavaScript API
//! - [`error`] - Error types with JavaScript interop
//!
//! # Example
//!
//! ```javascript
//! import init, { mountOnLoad } from '@pagenav/wasm';
//!
//! await init();
//! mountOnLoad({ menuId: 'navbar__list', labelAttribute: 'data-nav' });
//! ```
//!
//! Listeners run on the browser's event loop, one at a time; the router is
//! borrowed for the length of a single callback.

pub mod dom;
pub mod error;
pub mod page;
pub mod scheduler;

pub use dom::DomViewSurface;
pub use error::{ErrorCode, NavJsError};
pub use page::PageNav;
pub use scheduler::{DomRouter, WindowScheduler};

use log::info;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

thread_local! {
    /// The instance started by [`mount_on_load`], kept alive for the page session.
    static MOUNTED: RefCell<Option<PageNav>> = const { RefCell::new(None) };
}

/// Initialize the WASM module.
///
/// This function sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Start navigation once the document has loaded.
///
/// Mounts immediately if `DOMContentLoaded` has already fired. A second call
/// replaces the previous instance.
#[wasm_bindgen(js_name = mountOnLoad)]
pub fn mount_on_load(config: JsValue) -> Result<(), JsValue> {
    let config = page::parse_config(config)?;
    let window = web_sys::window().ok_or_else(|| NavJsError::config("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| NavJsError::config("no document"))?;

    let ready_state = js_sys::Reflect::get(&document, &"readyState".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();

    if ready_state != "loading" {
        let nav = PageNav::mount(config)?;
        MOUNTED.with(|slot| *slot.borrow_mut() = Some(nav));
        return Ok(());
    }

    let on_loaded = Closure::once_into_js(move || match PageNav::mount(config) {
        Ok(nav) => {
            info!("pagenav mounted on DOMContentLoaded");
            MOUNTED.with(|slot| *slot.borrow_mut() = Some(nav));
        }
        Err(e) => log::error!("pagenav failed to mount: {e}"),
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_loaded.unchecked_ref())?;
    Ok(())
}

/// Get the version of the pagenav-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
