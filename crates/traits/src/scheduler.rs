//! TimerScheduler trait for abstracting deferred callbacks.
//!
//! The menu debouncer never sleeps. It hands [`Timer`] values to a scheduler,
//! and the scheduler delivers each one back to the event router once its
//! delay has elapsed. Delivery is one callback at a time, on the same thread
//! that handles events.

use pagenav_types::Timer;
use std::fmt::Debug;
use std::time::Duration;

/// A trait for scheduling timers on a single-threaded event loop.
///
/// There is no cancellation: every scheduled timer fires, and the receiver
/// re-checks its guard conditions when it does.
///
/// # Implementations
///
/// - `VirtualClock`: manual clock for tests and replays (in `pagenav-core`)
/// - `WindowScheduler`: `window.setTimeout` (in `pagenav-wasm`)
pub trait TimerScheduler: Debug {
    /// Schedules `timer` to fire after `delay`.
    fn schedule(&mut self, delay: Duration, timer: Timer);

    /// Returns a human-readable name for this scheduler (for logging/debugging).
    fn name(&self) -> &'static str;
}
