//! `window.setTimeout` as a [`TimerScheduler`].

use crate::dom::DomViewSurface;
use log::warn;
use pagenav_core::{EventRouter, TimerScheduler, Timer};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// The router driving the live document.
pub type DomRouter = EventRouter<DomViewSurface, WindowScheduler>;

/// Shared slot holding the router once it has started.
///
/// Event listeners and timer callbacks each hold a handle to the slot and
/// borrow the router for the duration of one callback.
pub type RouterSlot = Rc<RefCell<Option<DomRouter>>>;

/// Schedules timers with `setTimeout` and delivers them to the router.
///
/// The scheduler only holds a weak handle to the router, so timers still
/// pending when the navigation is torn down fire into nothing.
pub struct WindowScheduler {
    window: Window,
    router: Weak<RefCell<Option<DomRouter>>>,
}

impl WindowScheduler {
    pub fn new(window: Window, router: Weak<RefCell<Option<DomRouter>>>) -> Self {
        Self { window, router }
    }
}

impl fmt::Debug for WindowScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowScheduler")
            .field("attached", &(self.router.strong_count() > 0))
            .finish_non_exhaustive()
    }
}

impl TimerScheduler for WindowScheduler {
    fn schedule(&mut self, delay: Duration, timer: Timer) {
        let router = self.router.clone();
        let callback = Closure::once_into_js(move || {
            let Some(slot) = router.upgrade() else {
                return;
            };
            match slot.try_borrow_mut() {
                Ok(mut guard) => {
                    if let Some(router) = guard.as_mut() {
                        router.fire(timer);
                    }
                }
                Err(_) => warn!("Router busy; dropping {:?}", timer),
            }
        });

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            warn!(
                "setTimeout failed for {:?}: {}",
                timer,
                crate::error::describe(&e)
            );
        }
    }

    fn name(&self) -> &'static str {
        "WindowScheduler"
    }
}
