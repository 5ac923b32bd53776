use std::path::PathBuf;

use focusflow_core::{Durations, Settings, Tracker, TrackerBuilder};
use jiff::tz::TimeZone;
use tempfile::TempDir;

/// Helper function to create a tracker with one-minute phases in UTC
pub fn create_test_tracker(settings: Settings) -> Tracker {
    let settings = Settings {
        durations: Durations {
            work: 1,
            short_break: 1,
            long_break: 1,
        },
        ..settings
    };
    TrackerBuilder::new()
        .with_settings(settings)
        .with_time_zone(TimeZone::UTC)
        .build()
}

/// Helper function to write a settings file into a fresh temporary directory
#[allow(dead_code)]
pub fn write_settings_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, contents).expect("Failed to write settings file");
    (temp_dir, path)
}
