//! Events consumed by the navigation core and the timers it schedules.

use serde::{Deserialize, Serialize};

/// An external event delivered by the page environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NavEvent {
    /// The document finished loading. Carries the current URL fragment, if any.
    Loaded {
        #[serde(default)]
        hash: Option<String>,
    },
    /// History navigation (back/forward or fragment change).
    HistoryChanged {
        #[serde(default)]
        hash: Option<String>,
    },
    /// A click inside the navigation menu. `href` is the link target of the
    /// clicked element; clicks outside a link carry `None`.
    MenuClick {
        #[serde(default)]
        href: Option<String>,
    },
    /// A mouse wheel or touchpad scroll.
    Wheel,
    /// A key press anywhere on the page.
    KeyDown { key: String },
}

impl NavEvent {
    /// Whether this event scrolls the page and so feeds the menu debouncer.
    pub fn is_scroll_equivalent(&self) -> bool {
        match self {
            NavEvent::Wheel => true,
            NavEvent::KeyDown { key } => NavKey::parse(key).is_some(),
            _ => false,
        }
    }
}

/// Keys that scroll the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
    Space,
}

impl NavKey {
    /// Parses a `KeyboardEvent.key` value. Returns `None` for keys that do not scroll.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "Up" => Some(NavKey::ArrowUp),
            "ArrowDown" | "Down" => Some(NavKey::ArrowDown),
            "PageUp" => Some(NavKey::PageUp),
            "PageDown" => Some(NavKey::PageDown),
            "Home" => Some(NavKey::Home),
            "End" => Some(NavKey::End),
            " " | "Spacebar" => Some(NavKey::Space),
            _ => None,
        }
    }
}

/// What caused an activation. Only scroll-driven activations move the menu
/// entry into view; clicks come from the menu itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivationOrigin {
    Scroll,
    Click,
    Hash,
}

impl ActivationOrigin {
    pub fn reveals_entry(self) -> bool {
        !matches!(self, ActivationOrigin::Click)
    }
}

/// A deferred callback scheduled by the menu debouncer.
///
/// `epoch` identifies the scroll-equivalent event that scheduled the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Timer {
    /// Closes the debounce window, unless a later event extended it.
    DebounceClose { epoch: u64 },
    /// Evaluates whether the menu may be hidden.
    HideCheck { epoch: u64 },
}

impl Timer {
    pub fn epoch(&self) -> u64 {
        match self {
            Timer::DebounceClose { epoch } | Timer::HideCheck { epoch } => *epoch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_equivalent_events() {
        assert!(NavEvent::Wheel.is_scroll_equivalent());
        assert!(
            NavEvent::KeyDown {
                key: "ArrowDown".into()
            }
            .is_scroll_equivalent()
        );
        assert!(!NavEvent::KeyDown { key: "a".into() }.is_scroll_equivalent());
        assert!(!NavEvent::MenuClick { href: None }.is_scroll_equivalent());
        assert!(!NavEvent::Loaded { hash: None }.is_scroll_equivalent());
    }

    #[test]
    fn test_key_parse() {
        assert_eq!(NavKey::parse("ArrowUp"), Some(NavKey::ArrowUp));
        assert_eq!(NavKey::parse("Down"), Some(NavKey::ArrowDown));
        assert_eq!(NavKey::parse(" "), Some(NavKey::Space));
        assert_eq!(NavKey::parse("Enter"), None);
    }

    #[test]
    fn test_click_does_not_reveal_entry() {
        assert!(ActivationOrigin::Scroll.reveals_entry());
        assert!(ActivationOrigin::Hash.reveals_entry());
        assert!(!ActivationOrigin::Click.reveals_entry());
    }

    #[test]
    fn test_event_json_shape() {
        let event: NavEvent =
            serde_json::from_str(r##"{ "type": "menuClick", "href": "#s2" }"##).unwrap();
        assert_eq!(
            event,
            NavEvent::MenuClick {
                href: Some("#s2".into())
            }
        );

        let event: NavEvent = serde_json::from_str(r#"{ "type": "wheel" }"#).unwrap();
        assert_eq!(event, NavEvent::Wheel);

        let event: NavEvent = serde_json::from_str(r#"{ "type": "loaded" }"#).unwrap();
        assert_eq!(event, NavEvent::Loaded { hash: None });
    }

    #[test]
    fn test_timer_epoch() {
        assert_eq!(Timer::DebounceClose { epoch: 3 }.epoch(), 3);
        assert_eq!(Timer::HideCheck { epoch: 7 }.epoch(), 7);
    }
}
