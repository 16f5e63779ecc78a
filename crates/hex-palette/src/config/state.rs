//! Application state persistence

use std::path::PathBuf;

use eframe::egui;
use serde::{Deserialize, Serialize};

/// Persistent application state (window position and last alphabet)
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct AppState {
    #[serde(default)]
    position: Option<[f32; 2]>,
    #[serde(default)]
    last_alphabet: Option<String>,
}

impl AppState {
    /// Load state from disk
    pub fn load() -> Self {
        let state_path = Self::state_path();
        if state_path.exists() {
            std::fs::read_to_string(&state_path)
                .ok()
                .and_then(|s| toml::from_str(&s).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save state to disk
    pub fn save(&self) {
        let state_path = Self::state_path();
        if let Some(parent) = state_path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        if let Ok(content) = toml::to_string_pretty(self) {
            std::fs::write(&state_path, content).ok();
        }
    }

    /// Get the state file path
    fn state_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hex-palette")
            .join("state.toml")
    }

    /// Get saved window position
    pub fn position(&self) -> Option<egui::Pos2> {
        self.position.map(|p| egui::pos2(p[0], p[1]))
    }

    /// Set window position
    pub fn set_position(&mut self, pos: egui::Pos2) {
        self.position = Some([pos.x, pos.y]);
    }

    /// Get the alphabet from the previous session
    pub fn last_alphabet(&self) -> Option<&str> {
        self.last_alphabet.as_deref()
    }

    /// Remember the alphabet for the next session
    pub fn set_last_alphabet(&mut self, alphabet: &str) {
        if alphabet.is_empty() {
            self.last_alphabet = None;
        } else {
            self.last_alphabet = Some(alphabet.to_string());
        }
    }
}
