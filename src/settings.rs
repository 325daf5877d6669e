//! HUD settings persisted as JSON in the user's config directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::frames::MAX_TARGET_FPS;

const APP_DIR: &str = "fps-hud";
const MIN_SAMPLE_WINDOW: u32 = 2;
const MAX_SAMPLE_WINDOW: u32 = 600;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HudSettings {
    /// Show the frame-rate badge overlay.
    #[serde(default = "default_true")]
    pub show_fps_counter: bool,
    /// Rate the frame source ticks at.
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,
    /// Number of frame intervals averaged by the tracker.
    #[serde(default = "default_sample_window")]
    pub sample_window: u32,
}

fn default_true() -> bool {
    true
}

fn default_target_fps() -> u32 {
    60
}

fn default_sample_window() -> u32 {
    30
}

impl Default for HudSettings {
    fn default() -> Self {
        Self {
            show_fps_counter: true,
            target_fps: default_target_fps(),
            sample_window: default_sample_window(),
        }
    }
}

impl HudSettings {
    /// Pull out-of-range values back into range.
    pub fn clamped(mut self) -> Self {
        self.target_fps = self.target_fps.clamp(1, MAX_TARGET_FPS);
        self.sample_window = self
            .sample_window
            .clamp(MIN_SAMPLE_WINDOW, MAX_SAMPLE_WINDOW);
        self
    }
}

fn settings_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join(APP_DIR).join("settings.json"))
}

/// Load settings from the config directory, falling back to defaults.
pub fn load_settings() -> HudSettings {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => HudSettings::default(),
    }
}

pub fn load_settings_from(path: &Path) -> HudSettings {
    match fs::read_to_string(path) {
        Ok(s) => match serde_json::from_str::<HudSettings>(&s) {
            Ok(settings) => settings.clamped(),
            Err(err) => {
                log::warn!("Failed to parse settings {}: {}", path.display(), err);
                HudSettings::default()
            }
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => HudSettings::default(),
        Err(err) => {
            log::warn!("Failed to read settings {}: {}", path.display(), err);
            HudSettings::default()
        }
    }
}

/// Save settings to the config directory.
pub fn save_settings(settings: &HudSettings) -> Result<(), SettingsError> {
    let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
    save_settings_to(&path, settings)
}

pub fn save_settings_to(path: &Path, settings: &HudSettings) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let s = serde_json::to_string_pretty(settings)?;
    fs::write(path, s)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("fps-hud-test-{}-{}", std::process::id(), name))
            .join("settings.json")
    }

    #[test]
    fn missing_fields_use_defaults() {
        let s: HudSettings = serde_json::from_str(r#"{"target_fps": 30}"#).unwrap();
        assert_eq!(s.target_fps, 30);
        assert!(s.show_fps_counter);
        assert_eq!(s.sample_window, 30);
    }

    #[test]
    fn clamps_out_of_range_values() {
        let s = HudSettings {
            show_fps_counter: false,
            target_fps: 0,
            sample_window: 100_000,
        }
        .clamped();
        assert_eq!(s.target_fps, 1);
        assert_eq!(s.sample_window, MAX_SAMPLE_WINDOW);
        assert!(!s.show_fps_counter);
    }

    #[test]
    fn save_then_load() {
        let path = scratch_path("save");
        let settings = HudSettings {
            show_fps_counter: false,
            target_fps: 144,
            sample_window: 12,
        };
        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path), settings);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_or_corrupt_file_yields_defaults() {
        let path = scratch_path("corrupt");
        assert_eq!(load_settings_from(&path), HudSettings::default());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_settings_from(&path), HudSettings::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn load_clamps_stored_values() {
        let path = scratch_path("clamp");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"target_fps": 5000, "sample_window": 1}"#).unwrap();
        let s = load_settings_from(&path);
        assert_eq!(s.target_fps, MAX_TARGET_FPS);
        assert_eq!(s.sample_window, MIN_SAMPLE_WINDOW);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
