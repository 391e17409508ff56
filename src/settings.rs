//! Game settings and preferences
//!
//! Persisted as JSON under the user config directory. Any problem
//! loading falls back to defaults; any problem saving is logged and
//! otherwise ignored - preferences are never worth crashing over.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master switch for sound cues
    pub sound: bool,
    /// Cue volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Show the FPS counter
    pub show_fps: bool,
    /// Flat bright-on-dark palette instead of the painted scene
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            sfx_volume: 0.8,
            show_fps: false,
            high_contrast: false,
        }
    }
}

impl Settings {
    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gapwing").join("settings.json"))
    }

    /// Load settings, falling back to defaults on any error
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings; also materializes the file with defaults on first
    /// run so there is something to edit.
    pub fn save(&self) {
        let Some(path) = Self::path() else { return };
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(&path, json) {
                    log::warn!("could not save {}: {err}", path.display());
                }
            }
            Err(err) => log::warn!("could not serialize settings: {err}"),
        }
    }

    /// Volume the audio layer should actually use
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.sound {
            self.sfx_volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sound_on_hud_off() {
        let settings = Settings::default();
        assert!(settings.sound);
        assert!(!settings.show_fps);
        assert_eq!(settings.effective_sfx_volume(), 0.8);
    }

    #[test]
    fn sound_switch_zeroes_the_volume() {
        let settings = Settings {
            sound: false,
            sfx_volume: 1.0,
            ..Settings::default()
        };
        assert_eq!(settings.effective_sfx_volume(), 0.0);
    }

    #[test]
    fn json_round_trip() {
        let settings = Settings {
            sound: false,
            sfx_volume: 0.3,
            show_fps: true,
            high_contrast: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sfx_volume, 0.3);
        assert!(back.show_fps);
        assert!(back.high_contrast);
        assert!(!back.sound);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let back: Settings = serde_json::from_str(r#"{"show_fps": true}"#).unwrap();
        assert!(back.show_fps);
        assert!(back.sound);
        assert_eq!(back.sfx_volume, 0.8);
    }
}
