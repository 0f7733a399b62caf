//! User settings persisted as JSON next to the executable

use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SETTINGS_FILE: &str = "vector-rocks-settings.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub master_volume: f32,
    pub sfx_volume: f32,
    pub muted: bool,
    pub show_fps: bool,
    /// Draw blinking elements at a steady brightness instead
    pub reduced_flicker: bool,
    pub particles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
            muted: false,
            show_fps: false,
            reduced_flicker: false,
            particles: true,
        }
    }
}

impl Settings {
    /// Load from disk, falling back to defaults on a missing or
    /// unreadable file so a corrupt settings file never blocks startup.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("ignoring malformed settings file {path:?}: {e}");
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("no settings file at {path:?} ({e}), using defaults");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let raw = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = Settings::load_from(Path::new("/nonexistent/settings.json"));
        assert!(settings.particles);
        assert!(!settings.muted);
        assert_eq!(settings.master_volume, 1.0);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let path = std::env::temp_dir().join("vector-rocks-malformed.json");
        std::fs::write(&path, "{not json").unwrap();
        let settings = Settings::load_from(&path);
        assert!(settings.particles);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_round_trip() {
        let path = std::env::temp_dir().join("vector-rocks-roundtrip.json");
        let mut settings = Settings::default();
        settings.muted = true;
        settings.sfx_volume = 0.25;
        settings.reduced_flicker = true;
        settings.save_to(&path).unwrap();
        let back = Settings::load_from(&path);
        assert!(back.muted);
        assert!(back.reduced_flicker);
        assert_eq!(back.sfx_volume, 0.25);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let path = std::env::temp_dir().join("vector-rocks-partial.json");
        std::fs::write(&path, r#"{"muted": true}"#).unwrap();
        let settings = Settings::load_from(&path);
        assert!(settings.muted);
        assert_eq!(settings.master_volume, 1.0);
        assert!(settings.particles);
        let _ = std::fs::remove_file(&path);
    }
}
