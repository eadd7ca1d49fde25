//! # pagenav-core
//!
//! Platform-agnostic page navigation core.
//!
//! This crate holds all state and timing logic of the navigation helper:
//! - **menu**: builds one menu entry per page section
//! - **tracker**: decides which section is active and moves the active style
//! - **visibility**: debounces menu show/hide around scrolling
//! - **router**: owns the session state and dispatches events and timers
//! - **clock**: a manual timer scheduler for tests and replays
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**. The page is reached only
//! through [`ViewSurface`] and timers only through [`TimerScheduler`]; the
//! browser implementations live in `pagenav-wasm`.

pub use pagenav_traits as traits;
pub use pagenav_types as types;

pub mod clock;
pub mod config;
pub mod error;
pub mod menu;
pub mod router;
pub mod state;
pub mod tracker;
pub mod visibility;

pub use clock::VirtualClock;
pub use config::{NavConfig, ViewportBand};
pub use error::NavError;
pub use menu::{NavigationMenu, NavigationMenuBuilder};
pub use router::EventRouter;
pub use state::TrackerState;
pub use tracker::{ActiveSectionTracker, pick_nearest_index};
pub use visibility::MenuVisibility;

pub use traits::{InMemoryViewSurface, TimerScheduler, ViewError, ViewSurface};
pub use types::{ActivationOrigin, NavEvent, NavKey, NavigationEntry, Section, SectionId, SectionInfo, Timer};
