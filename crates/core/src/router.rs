//! Event dispatch.
//!
//! The router owns the single [`TrackerState`] of a page session together
//! with the surface, the scheduler, the tracker and the menu debouncer.
//! Events and timers are handled one at a time through `&mut self`, so no
//! handler ever observes another handler's intermediate state.

use crate::clock::VirtualClock;
use crate::config::NavConfig;
use crate::error::NavError;
use crate::menu::{NavigationMenu, NavigationMenuBuilder};
use crate::state::TrackerState;
use crate::tracker::{ActiveSectionTracker, report};
use crate::visibility::MenuVisibility;
use log::{debug, info, trace};
use pagenav_traits::{TimerScheduler, ViewSurface};
use pagenav_types::{ActivationOrigin, NavEvent, Section, SectionId, Timer};
use std::time::Duration;

#[derive(Debug)]
pub struct EventRouter<V: ViewSurface, S: TimerScheduler> {
    surface: V,
    scheduler: S,
    tracker: ActiveSectionTracker<V::Element>,
    visibility: MenuVisibility,
    state: TrackerState,
    config: NavConfig,
}

impl<V: ViewSurface, S: TimerScheduler> EventRouter<V, S> {
    /// Builds the menu and prepares the session.
    ///
    /// Call once per page. The load event itself is delivered separately
    /// through [`EventRouter::dispatch`] with [`NavEvent::Loaded`].
    ///
    /// # Errors
    ///
    /// Returns `NavError::Config` for an invalid configuration and
    /// `NavError::View` if the menu cannot be built.
    pub fn start(mut surface: V, scheduler: S, config: NavConfig) -> Result<Self, NavError> {
        config.validate()?;

        let infos = surface.sections();
        let menu = NavigationMenuBuilder::new(infos.clone())
            .with_link_class(config.menu_link_class.clone())
            .build(&mut surface)?;
        surface.set_menu_visible(true)?;

        let sections: Vec<Section> = infos.into_iter().map(Section::from).collect();
        info!(
            "Navigation started: {} sections on {}, timers on {}",
            sections.len(),
            surface.name(),
            scheduler.name()
        );

        let tracker = ActiveSectionTracker::new(sections, menu, &config);
        let visibility = MenuVisibility::new(config.debounce_window(), config.hide_delay());

        Ok(Self {
            surface,
            scheduler,
            tracker,
            visibility,
            state: TrackerState::default(),
            config,
        })
    }

    /// Handles one external event.
    pub fn dispatch(&mut self, event: NavEvent) {
        trace!("Dispatching {:?}", event);
        match event {
            NavEvent::Loaded { hash } | NavEvent::HistoryChanged { hash } => {
                let fragment = hash.or_else(|| self.surface.location_hash());
                if let Some(fragment) = fragment {
                    self.navigate_to_fragment(&fragment);
                }
            }
            NavEvent::MenuClick { href } => {
                if let Some(href) = href {
                    self.navigate_to_link(&href);
                }
            }
            ref scroll if scroll.is_scroll_equivalent() => self.on_scroll(),
            NavEvent::Wheel | NavEvent::KeyDown { .. } => {
                trace!("Ignoring {:?}", event);
            }
        }
    }

    /// Handles a timer delivered by the scheduler.
    pub fn fire(&mut self, timer: Timer) {
        self.visibility
            .on_timer(timer, &mut self.state, &mut self.surface);
    }

    /// Activates the section named by a URL fragment and scrolls it into view.
    ///
    /// Fragments that name no section are ignored.
    pub fn navigate_to_fragment(&mut self, fragment: &str) {
        let Some(id) = self.known_section(fragment) else {
            return;
        };
        report(
            "scroll section into view",
            self.surface.scroll_section_into_view(&id),
        );
        self.tracker
            .set_active(&mut self.state, &mut self.surface, &id, ActivationOrigin::Hash);
        self.state.page_just_loaded = false;
    }

    /// Activates the section a clicked menu link points to.
    pub fn navigate_to_link(&mut self, href: &str) {
        let Some(id) = self.known_section(href) else {
            return;
        };
        self.tracker
            .set_active(&mut self.state, &mut self.surface, &id, ActivationOrigin::Click);
        self.state.page_just_loaded = false;
    }

    fn on_scroll(&mut self) {
        self.visibility
            .on_scroll(&mut self.state, &mut self.surface, &mut self.scheduler);
        self.tracker
            .activate_from_viewport(&mut self.state, &mut self.surface);
        self.state.page_just_loaded = false;
    }

    fn known_section(&self, target: &str) -> Option<SectionId> {
        match SectionId::from_fragment(target) {
            Some(id) if self.tracker.contains(&id) => Some(id),
            _ => {
                debug!("No section for target '{target}'");
                None
            }
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to simulate layout changes.
    pub fn surface_mut(&mut self) -> &mut V {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn sections(&self) -> &[Section] {
        self.tracker.sections()
    }

    pub fn menu(&self) -> &NavigationMenu<V::Element> {
        self.tracker.menu()
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Scroll-equivalent events seen so far.
    pub fn scroll_epoch(&self) -> u64 {
        self.visibility.epoch()
    }
}

impl<V: ViewSurface> EventRouter<V, VirtualClock> {
    /// Fires every timer due up to `at`, then moves the clock to `at`.
    pub fn advance_to(&mut self, at: Duration) {
        while let Some(timer) = self.scheduler.pop_due(at) {
            trace!("t={:?} firing {:?}", self.scheduler.now(), timer);
            self.fire(timer);
        }
        self.scheduler.set_now(at);
    }

    pub fn advance_by(&mut self, delta: Duration) {
        let at = self.scheduler.now() + delta;
        self.advance_to(at);
    }

    /// Fires every pending timer.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.scheduler.next_due() {
            self.advance_to(due);
        }
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagenav_traits::InMemoryViewSurface;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn router(surface: InMemoryViewSurface) -> EventRouter<InMemoryViewSurface, VirtualClock> {
        EventRouter::start(surface, VirtualClock::new(), NavConfig::default()).unwrap()
    }

    fn page() -> InMemoryViewSurface {
        InMemoryViewSurface::new()
            .with_section("section1", "Section 1", 100.0)
            .with_section("section2", "Section 2", 1100.0)
            .with_section("section3", "Section 3", 2100.0)
            .with_menu_height(60.0)
    }

    #[test]
    fn test_start_builds_menu() {
        let router = router(page());
        assert_eq!(router.menu().len(), 3);
        assert_eq!(router.surface().menu_items().len(), 3);
        assert!(router.state().menu_visible);
        assert!(router.state().page_just_loaded);
    }

    #[test]
    fn test_start_rejects_bad_config() {
        let config = NavConfig {
            debounce_window_ms: 0,
            ..NavConfig::default()
        };
        let result = EventRouter::start(page(), VirtualClock::new(), config);
        assert!(matches!(result, Err(NavError::Config(_))));
    }

    #[test]
    fn test_load_with_hash() {
        let mut router = router(page());
        router.dispatch(NavEvent::Loaded {
            hash: Some("#section3".into()),
        });

        assert_eq!(
            router.state().active_section_id,
            Some(SectionId::new("section3"))
        );
        assert!(!router.state().page_just_loaded);
        assert_eq!(router.surface().scroll_offset(), 2100.0);
        assert_eq!(router.surface().revealed_entry(), Some(2));
    }

    #[test]
    fn test_load_falls_back_to_surface_hash() {
        let mut router = router(page().with_hash("#section2"));
        router.dispatch(NavEvent::Loaded { hash: None });
        assert_eq!(
            router.state().active_section_id,
            Some(SectionId::new("section2"))
        );
    }

    #[test]
    fn test_load_with_missing_hash_is_noop() {
        let mut router = router(page());
        router.dispatch(NavEvent::Loaded {
            hash: Some("#missing".into()),
        });
        assert!(router.state().is_idle());
        assert!(router.state().page_just_loaded);
        assert_eq!(router.surface().scroll_offset(), 0.0);
    }

    #[test]
    fn test_click_activates_without_scan() {
        let mut router = router(page());
        router.dispatch(NavEvent::MenuClick {
            href: Some("#section2".into()),
        });
        assert_eq!(
            router.state().active_section_id,
            Some(SectionId::new("section2"))
        );
        assert!(!router.state().page_just_loaded);
        assert_eq!(router.surface().revealed_entry(), None);
    }

    #[test]
    fn test_click_outside_link_is_ignored() {
        let mut router = router(page());
        router.dispatch(NavEvent::MenuClick { href: None });
        assert!(router.state().is_idle());
    }

    #[test]
    fn test_wheel_activates_by_geometry() {
        let mut router = router(page());
        router.dispatch(NavEvent::Wheel);
        assert_eq!(
            router.state().active_section_id,
            Some(SectionId::new("section1"))
        );
        assert!(!router.state().page_just_loaded);
        assert_eq!(router.scheduler().pending(), 2);
    }

    #[test]
    fn test_wheel_inside_active_section_clears_page_just_loaded() {
        let mut router = router(page());
        router.dispatch(NavEvent::MenuClick {
            href: Some("#section1".into()),
        });
        router.state.page_just_loaded = true;

        // section1 is already active and nothing else is in the band.
        router.surface_mut().set_scroll_offset(400.0);
        router.dispatch(NavEvent::Wheel);
        assert_eq!(
            router.state().active_section_id,
            Some(SectionId::new("section1"))
        );
        assert!(!router.state().page_just_loaded);
    }

    #[test]
    fn test_non_scroll_key_is_ignored() {
        let mut router = router(page());
        router.dispatch(NavEvent::KeyDown { key: "a".into() });
        assert_eq!(router.scroll_epoch(), 0);
        assert_eq!(router.scheduler().pending(), 0);
    }

    #[test]
    fn test_menu_hides_after_quiet_period() {
        let mut router = router(page());
        router.surface_mut().set_scroll_offset(1000.0);
        router.dispatch(NavEvent::Wheel);

        router.advance_to(ms(2999));
        assert!(router.state().menu_visible);

        router.advance_to(ms(3000));
        assert!(!router.state().menu_visible);
        assert!(!router.surface().is_menu_visible());
    }
}
