use crate::error::NavError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The offset ranges that count as "in view" for the viewport scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBand {
    /// How far below the viewport origin a section top may sit.
    pub look_ahead: f64,
    /// How far above the viewport origin a section top may have scrolled.
    pub look_behind: f64,
}

impl ViewportBand {
    /// Whether a section whose top edge sits at `offset` qualifies.
    ///
    /// Both bounds are exclusive and an offset of exactly zero does not match.
    pub fn contains(&self, offset: f64) -> bool {
        (offset > 0.0 && offset < self.look_ahead) || (offset < 0.0 && offset > -self.look_behind)
    }
}

impl Default for ViewportBand {
    fn default() -> Self {
        Self {
            look_ahead: 500.0,
            look_behind: 150.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    /// Look-ahead part of the viewport band, in CSS pixels.
    ///
    /// Defaults to `500`.
    pub look_ahead: f64,
    /// Look-behind part of the viewport band, in CSS pixels.
    ///
    /// Defaults to `150`.
    pub look_behind: f64,
    /// How long a scroll-equivalent event keeps the debounce window open.
    ///
    /// Defaults to `500` ms.
    pub debounce_window_ms: u64,
    /// Delay between a scroll-equivalent event and its hide check.
    ///
    /// Defaults to `3000` ms. Must be longer than the debounce window.
    pub hide_delay_ms: u64,
    pub section_active_class: String,
    pub link_active_class: String,
    /// Class carried by every generated menu link.
    pub menu_link_class: String,
    /// CSS selector that enumerates the page sections.
    pub section_selector: String,
    /// Attribute holding a section's menu label.
    pub label_attribute: String,
    /// Element id of the menu container.
    pub menu_id: String,
    /// Write the active section's id into the URL fragment on scroll and click.
    pub sync_hash: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            look_ahead: 500.0,
            look_behind: 150.0,
            debounce_window_ms: 500,
            hide_delay_ms: 3000,
            section_active_class: "section__active".to_string(),
            link_active_class: "link__active".to_string(),
            menu_link_class: "menu__link".to_string(),
            section_selector: "section".to_string(),
            label_attribute: "data-nav".to_string(),
            menu_id: "navbar__list".to_string(),
            sync_hash: true,
        }
    }
}

impl NavConfig {
    pub fn band(&self) -> ViewportBand {
        ViewportBand {
            look_ahead: self.look_ahead,
            look_behind: self.look_behind,
        }
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_window_ms)
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    /// Checks the configuration for values the tracker cannot work with.
    pub fn validate(&self) -> Result<(), NavError> {
        if !(self.look_ahead > 0.0) || !(self.look_behind > 0.0) {
            return Err(NavError::Config(format!(
                "viewport band must be positive (lookAhead={}, lookBehind={})",
                self.look_ahead, self.look_behind
            )));
        }
        if self.debounce_window_ms == 0 {
            return Err(NavError::Config(
                "debounceWindowMs must be greater than zero".to_string(),
            ));
        }
        if self.hide_delay_ms <= self.debounce_window_ms {
            return Err(NavError::Config(format!(
                "hideDelayMs ({}) must be longer than debounceWindowMs ({})",
                self.hide_delay_ms, self.debounce_window_ms
            )));
        }
        for (name, value) in [
            ("sectionActiveClass", &self.section_active_class),
            ("linkActiveClass", &self.link_active_class),
            ("menuLinkClass", &self.menu_link_class),
        ] {
            if value.trim().is_empty() {
                return Err(NavError::Config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}
