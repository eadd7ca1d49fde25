//! # pagenav
//!
//! Section-aware page navigation: builds a menu from the page's sections,
//! highlights the section in view while the reader scrolls or clicks, keeps
//! the URL fragment in sync and hides the menu after a quiet period.
//!
//! The state machine lives in [`pagenav_core`]; browser bindings live in
//! `pagenav-wasm`. This crate re-exports the core and adds [`replay`], a
//! scripted driver that runs the core against an in-memory page.

pub mod error;
pub mod replay;

pub use error::ReplayError;
pub use pagenav_core::*;
pub use replay::{Reflow, ReplayRecord, Scenario, ScenarioSection, Step};
