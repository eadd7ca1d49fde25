mod common;

use common::{TestResult, id, init_logging};
use pagenav::{ReplayError, Scenario};
use std::io::Write;

const SCENARIO: &str = r##"{
    "config": { "hideDelayMs": 2000 },
    "menuHeight": 60,
    "hash": "#intro",
    "sections": [
        { "id": "intro", "label": "Introduction", "top": 60 },
        { "id": "body", "label": "Body", "top": 1060 },
        { "id": "end", "label": "Conclusion", "top": 2060 }
    ],
    "steps": [
        { "at": 0, "event": { "type": "loaded" } },
        { "at": 50, "event": { "type": "menuClick", "href": "#end" } },
        { "at": 100, "scrollTo": 1000, "event": { "type": "wheel" } },
        { "at": 1500, "reflow": [ { "id": "body", "top": 1200 } ], "event": { "type": "keyDown", "key": "PageDown" } },
        { "at": 3600 }
    ]
}"##;

#[test]
fn test_replay_from_file() -> TestResult {
    init_logging();
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(SCENARIO.as_bytes())?;

    let scenario = Scenario::from_file(file.path())?;
    let records = scenario.run()?;
    assert_eq!(records.len(), 5);

    assert_eq!(records[0].state.active_section_id, Some(id("intro")));
    assert_eq!(records[1].state.active_section_id, Some(id("end")));
    assert_eq!(records[1].hash.as_deref(), Some("#end"));
    assert_eq!(records[2].state.active_section_id, Some(id("body")));

    // body moved down: its top is now 200px below the viewport origin.
    assert_eq!(records[3].state.active_section_id, Some(id("body")));
    assert!(records[3].state.menu_visible);

    // Last event at 1500 with a 2000ms hide delay.
    assert!(!records[4].state.menu_visible);
    Ok(())
}

#[test]
fn test_records_serialize_as_camel_case() -> TestResult {
    let records = Scenario::from_json(SCENARIO)?.run()?;
    let line = serde_json::to_string(&records[0])?;
    assert!(line.contains("\"activeSectionId\":\"intro\""));
    assert!(line.contains("\"pageJustLoaded\":false"));
    assert!(line.contains("\"scrollOffset\":60.0"));
    Ok(())
}

#[test]
fn test_malformed_scenario_is_json_error() {
    let result = Scenario::from_json("{ \"sections\": 3 }");
    assert!(matches!(result, Err(ReplayError::Json(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = Scenario::from_file("/definitely/not/here.json");
    assert!(matches!(result, Err(ReplayError::Io(_))));
}
