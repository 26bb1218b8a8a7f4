// settings.rs - Persisted User Settings
//
// Small JSON file in the platform config directory. Loads are tolerant: a
// missing or corrupt file falls back to defaults and logs what happened, so
// the samples always come up.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::constants::layout;

/// Settings shared by both sample binaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Restore the last selected item on startup
    #[serde(default = "default_true")]
    pub remember_selection: bool,
    /// Last selected index, clamped against the item list on load
    #[serde(default)]
    pub last_selected: usize,
    /// Window width at or above which the layout spans two panes
    #[serde(default = "default_span_breakpoint")]
    pub span_breakpoint: f32,
}

fn default_true() -> bool {
    true
}

fn default_span_breakpoint() -> f32 {
    layout::SPAN_BREAKPOINT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            remember_selection: true,
            last_selected: 0,
            span_breakpoint: layout::SPAN_BREAKPOINT,
        }
    }
}

impl Settings {
    /// Get the settings file path in the user's config directory
    fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("HingeView");
        let _ = fs::create_dir_all(&config_dir);
        config_dir.join("settings.json")
    }

    /// Load settings from disk, falling back to defaults on any failure.
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(contents) => match Self::from_json(&contents) {
                    Ok(settings) => {
                        info!("Settings loaded from {:?}", path);
                        return settings;
                    }
                    Err(e) => error!("Failed to parse settings: {}", e),
                },
                Err(e) => error!("Failed to read settings file: {}", e),
            }
        }
        Self::default()
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        let json = serde_json::to_string_pretty(self).context("serializing settings")?;
        fs::write(&path, json).with_context(|| format!("writing settings to {:?}", path))?;
        info!("Settings saved to {:?}", path);
        Ok(())
    }

    /// Parse and normalize a settings document.
    fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::normalized)
    }

    /// Clamp hand-edited values back into usable ranges.
    fn normalized(mut self) -> Self {
        if !self.span_breakpoint.is_finite() || self.span_breakpoint < layout::MIN_SPAN_BREAKPOINT
        {
            self.span_breakpoint = layout::SPAN_BREAKPOINT;
        }
        self
    }

    /// Initial selection for `item_count` items under these settings.
    pub fn initial_selection(&self, item_count: usize) -> usize {
        if self.remember_selection && item_count > 0 {
            self.last_selected.min(item_count - 1)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_remember_selection_from_the_top() {
        let settings = Settings::default();
        assert!(settings.remember_selection);
        assert_eq!(settings.last_selected, 0);
        assert_eq!(settings.span_breakpoint, layout::SPAN_BREAKPOINT);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert!(settings.remember_selection);
        assert_eq!(settings.span_breakpoint, layout::SPAN_BREAKPOINT);
    }

    #[test]
    fn corrupt_documents_are_rejected() {
        assert!(Settings::from_json("not json at all").is_err());
    }

    #[test]
    fn nonsense_breakpoints_are_normalized() {
        let settings = Settings::from_json(r#"{"span_breakpoint": -40.0}"#).unwrap();
        assert_eq!(settings.span_breakpoint, layout::SPAN_BREAKPOINT);
    }

    #[test]
    fn initial_selection_is_clamped() {
        let settings = Settings {
            last_selected: 99,
            ..Default::default()
        };
        assert_eq!(settings.initial_selection(3), 2);
        assert_eq!(settings.initial_selection(0), 0);
    }

    #[test]
    fn initial_selection_ignores_history_when_disabled() {
        let settings = Settings {
            remember_selection: false,
            last_selected: 2,
            ..Default::default()
        };
        assert_eq!(settings.initial_selection(5), 0);
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings = Settings {
            remember_selection: false,
            last_selected: 4,
            span_breakpoint: 1200.0,
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let loaded = Settings::from_json(&json).unwrap();
        assert!(!loaded.remember_selection);
        assert_eq!(loaded.last_selected, 4);
        assert_eq!(loaded.span_breakpoint, 1200.0);
    }
}
