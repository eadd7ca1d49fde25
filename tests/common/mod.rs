pub mod fixtures;

use pagenav::{EventRouter, InMemoryViewSurface, NavConfig, SectionId, VirtualClock};
use std::time::Duration;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub type TestRouter = EventRouter<InMemoryViewSurface, VirtualClock>;

/// Install the test logger once per binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Start a router with the default configuration on `surface`.
pub fn start(surface: InMemoryViewSurface) -> Result<TestRouter, pagenav::NavError> {
    start_with(surface, NavConfig::default())
}

pub fn start_with(
    surface: InMemoryViewSurface,
    config: NavConfig,
) -> Result<TestRouter, pagenav::NavError> {
    init_logging();
    EventRouter::start(surface, VirtualClock::new(), config)
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

pub fn id(s: &str) -> SectionId {
    SectionId::new(s)
}

/// Assert that at most one section and one entry are styled active, and
/// that they belong to the tracked active section.
pub fn assert_single_active_pair(router: &TestRouter) {
    let surface = router.surface();
    let sections = surface.sections_with_class("section__active");
    let entries = surface.entries_with_class("link__active");
    assert!(sections.len() <= 1, "multiple active sections: {sections:?}");
    assert!(entries.len() <= 1, "multiple active entries: {entries:?}");
    assert_eq!(sections.len(), entries.len());

    match &router.state().active_section_id {
        Some(active) => {
            assert_eq!(sections.first(), Some(active));
            let entry = entries[0];
            assert_eq!(&surface.menu_items()[entry].section_id, active);
        }
        None => assert!(sections.is_empty()),
    }
}
