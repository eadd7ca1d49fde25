//! Scripted replays of a navigation session.
//!
//! A scenario describes an in-memory page (sections at document positions,
//! the menu height, an initial URL fragment) and a list of timestamped steps.
//! Each step first advances the virtual clock to its time, firing any timers
//! that came due, then applies an optional scroll or layout change and an
//! optional event. The tracker state is recorded after every step.
//!
//! ```json
//! {
//!   "menuHeight": 60,
//!   "hash": "#section2",
//!   "sections": [
//!     { "id": "section1", "label": "Section 1", "top": 0 },
//!     { "id": "section2", "label": "Section 2", "top": 900 }
//!   ],
//!   "steps": [
//!     { "at": 0, "event": { "type": "loaded" } },
//!     { "at": 100, "scrollTo": 1200, "event": { "type": "wheel" } },
//!     { "at": 4000 }
//!   ]
//! }
//! ```

use crate::error::ReplayError;
use log::debug;
use pagenav_core::{
    EventRouter, InMemoryViewSurface, NavConfig, NavEvent, SectionId, SectionInfo, TrackerState,
    ViewSurface, VirtualClock,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSection {
    pub id: SectionId,
    #[serde(default)]
    pub label: String,
    /// Top edge relative to the document origin.
    pub top: f64,
}

/// A layout change: move a section to a new document position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflow {
    pub id: SectionId,
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Milliseconds since the scenario started. Steps must not go back in time.
    pub at: u64,
    #[serde(default)]
    pub scroll_to: Option<f64>,
    #[serde(default)]
    pub reflow: Vec<Reflow>,
    #[serde(default)]
    pub event: Option<NavEvent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default)]
    pub config: NavConfig,
    #[serde(default)]
    pub menu_height: f64,
    #[serde(default)]
    pub hash: Option<String>,
    pub sections: Vec<ScenarioSection>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// The state after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayRecord {
    pub at: u64,
    pub scroll_offset: f64,
    pub hash: Option<String>,
    pub state: TrackerState,
}

impl Scenario {
    pub fn from_json(source: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    fn surface(&self) -> InMemoryViewSurface {
        let mut surface = InMemoryViewSurface::new().with_menu_height(self.menu_height);
        for section in &self.sections {
            surface.push_section(
                SectionInfo::new(section.id.clone(), section.label.clone()),
                section.top,
            );
        }
        surface.set_hash(self.hash.clone());
        surface
    }

    /// Runs the scenario and returns one record per step.
    ///
    /// # Errors
    ///
    /// Returns `ReplayError::Nav` for an invalid configuration and
    /// `ReplayError::Scenario` if the steps go back in time.
    pub fn run(&self) -> Result<Vec<ReplayRecord>, ReplayError> {
        let mut router = EventRouter::start(self.surface(), VirtualClock::new(), self.config.clone())?;
        let mut records = Vec::with_capacity(self.steps.len());
        let mut last_at = 0;

        for step in &self.steps {
            if step.at < last_at {
                return Err(ReplayError::Scenario(format!(
                    "step at {} ms is earlier than the previous step at {} ms",
                    step.at, last_at
                )));
            }
            last_at = step.at;

            router.advance_to(Duration::from_millis(step.at));

            let surface = router.surface_mut();
            if let Some(offset) = step.scroll_to {
                surface.set_scroll_offset(offset);
            }
            for reflow in &step.reflow {
                if !surface.set_section_top(&reflow.id, reflow.top) {
                    debug!("Reflow of unknown section '{}' ignored", reflow.id);
                }
            }
            if let Some(event) = step.event.clone() {
                router.dispatch(event);
            }

            records.push(ReplayRecord {
                at: step.at,
                scroll_offset: router.surface().scroll_offset(),
                hash: router.surface().location_hash(),
                state: router.state().clone(),
            });
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r##"{
        "menuHeight": 60,
        "sections": [
            { "id": "section1", "label": "Section 1", "top": 0 },
            { "id": "section2", "label": "Section 2", "top": 1000 },
            { "id": "section3", "label": "Section 3", "top": 2000 }
        ],
        "steps": [
            { "at": 0, "event": { "type": "loaded", "hash": "#section2" } },
            { "at": 100, "scrollTo": 1900, "event": { "type": "wheel" } },
            { "at": 3100 }
        ]
    }"##;

    #[test]
    fn test_replay_records_each_step() {
        let scenario = Scenario::from_json(SCENARIO).unwrap();
        let records = scenario.run().unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(
            records[0].state.active_section_id,
            Some(SectionId::new("section2"))
        );
        assert_eq!(records[0].scroll_offset, 1000.0);

        assert_eq!(
            records[1].state.active_section_id,
            Some(SectionId::new("section3"))
        );
        assert_eq!(records[1].hash.as_deref(), Some("#section3"));
        assert!(records[1].state.menu_visible);

        assert!(!records[2].state.menu_visible);
    }

    #[test]
    fn test_steps_must_be_ordered() {
        let scenario = Scenario::from_json(
            r#"{ "sections": [], "steps": [ { "at": 10 }, { "at": 5 } ] }"#,
        )
        .unwrap();
        assert!(matches!(scenario.run(), Err(ReplayError::Scenario(_))));
    }

    #[test]
    fn test_invalid_config_fails_to_start() {
        let scenario =
            Scenario::from_json(r#"{ "config": { "lookAhead": -1 }, "sections": [] }"#).unwrap();
        assert!(matches!(scenario.run(), Err(ReplayError::Nav(_))));
    }
}
