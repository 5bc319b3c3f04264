//! Persist and restore window geometry across sessions.
//!
//! A small JSON file in the platform data dir; any read or parse failure
//! falls back to the defaults.

use iced::{Point, Size};
use serde::{Deserialize, Serialize};

const FILE_NAME: &str = "window.json";

/// Persisted window geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowState {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 680.0,
            // Negative means "never saved": let the runtime center us.
            x: -1.0,
            y: -1.0,
        }
    }
}

impl WindowState {
    /// Saved size, clamped so a corrupt file can't shrink the window away.
    pub fn size(&self) -> Size {
        Size::new(self.width.max(480.0), self.height.max(320.0))
    }

    /// Saved position, if one was ever recorded.
    pub fn position(&self) -> Option<Point> {
        (self.x >= 0.0 && self.y >= 0.0).then(|| Point::new(self.x, self.y))
    }

    /// Load from disk, returning defaults if absent or unreadable.
    pub fn load() -> Self {
        state_path()
            .and_then(|path| std::fs::read_to_string(&path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save to disk. Errors are logged, never propagated.
    pub fn save(&self) {
        let Some(path) = state_path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    tracing::warn!("failed to save window state: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to serialize window state: {e}"),
        }
    }
}

fn state_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("", "", "reelist").map(|dirs| dirs.data_dir().join(FILE_NAME))
}
