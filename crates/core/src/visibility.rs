//! Menu visibility debouncing.
//!
//! This is a leaky debounce with independent show and hide edges:
//!
//! - every scroll-equivalent event shows the menu at once (opening the
//!   debounce window if it is closed) and schedules two timers, a short
//!   debounce close and a longer hide check;
//! - a hide check hides the menu only if, when it fires, the debounce window
//!   is closed, the page is no longer "just loaded", and the document has
//!   scrolled past the menu's own height.
//!
//! Timers are never cancelled. Overlapping events pile up hide checks and
//! each one re-validates the guards when it fires. A debounce close only
//! closes the window if no later event has extended it, which is tracked
//! with an epoch counter.

use crate::state::TrackerState;
use crate::tracker::report;
use log::{debug, trace};
use pagenav_traits::{TimerScheduler, ViewSurface};
use pagenav_types::Timer;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct MenuVisibility {
    debounce_window: Duration,
    hide_delay: Duration,
    epoch: u64,
}

impl MenuVisibility {
    pub fn new(debounce_window: Duration, hide_delay: Duration) -> Self {
        Self {
            debounce_window,
            hide_delay,
            epoch: 0,
        }
    }

    /// Number of scroll-equivalent events seen so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Handles one scroll-equivalent event.
    pub fn on_scroll<V, S>(&mut self, state: &mut TrackerState, surface: &mut V, scheduler: &mut S)
    where
        V: ViewSurface,
        S: TimerScheduler,
    {
        self.epoch += 1;
        let epoch = self.epoch;

        if !state.scroll_debounce_active {
            state.scroll_debounce_active = true;
            Self::show(state, surface);
        }

        scheduler.schedule(self.debounce_window, Timer::DebounceClose { epoch });
        scheduler.schedule(self.hide_delay, Timer::HideCheck { epoch });
    }

    /// Handles a fired timer.
    pub fn on_timer<V: ViewSurface>(&mut self, timer: Timer, state: &mut TrackerState, surface: &mut V) {
        let epoch = timer.epoch();
        match timer {
            Timer::DebounceClose { .. } if epoch == self.epoch => {
                trace!("Debounce window closed (epoch {epoch})");
                state.scroll_debounce_active = false;
            }
            Timer::DebounceClose { .. } => {
                trace!(
                    "Debounce close for epoch {epoch} superseded by epoch {}",
                    self.epoch
                );
            }
            Timer::HideCheck { .. } => {
                if Self::may_hide(state, surface) {
                    debug!("Hiding menu (hide check from epoch {epoch})");
                    state.menu_visible = false;
                    report("hide menu", surface.set_menu_visible(false));
                } else {
                    trace!("Hide check from epoch {epoch} kept the menu visible");
                }
            }
        }
    }

    fn may_hide<V: ViewSurface>(state: &TrackerState, surface: &V) -> bool {
        state.menu_visible
            && !state.scroll_debounce_active
            && !state.page_just_loaded
            && surface.scroll_offset() > surface.menu_height()
    }

    fn show<V: ViewSurface>(state: &mut TrackerState, surface: &mut V) {
        if !state.menu_visible {
            debug!("Showing menu");
            state.menu_visible = true;
            report("show menu", surface.set_menu_visible(true));
        }
    }
}
