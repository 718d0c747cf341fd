//! Pointer settings: drag threshold and how it is probed.
//!
//! Settings are plain JSON. Missing fields fall back to their defaults so a
//! file written by an older build keeps loading.

use crate::constants::{DEFAULT_DRAG_THRESHOLD, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};
use crate::error::{PointerError, PointerResult};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which position the drag threshold is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdProbe {
    /// Coordinates of the move event being processed
    #[default]
    EventPosition,
    /// Position recorded before this event. Detection lags one event behind;
    /// kept for hosts that need parity with older recordings.
    LastPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerSettings {
    /// Per-axis displacement from the press point that starts a drag
    pub drag_threshold: f64,
    pub threshold_probe: ThresholdProbe,
}

impl Default for PointerSettings {
    fn default() -> Self {
        Self {
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            threshold_probe: ThresholdProbe::default(),
        }
    }
}

impl PointerSettings {
    pub fn with_drag_threshold(mut self, threshold: f64) -> Self {
        self.drag_threshold = threshold;
        self
    }

    pub fn with_threshold_probe(mut self, probe: ThresholdProbe) -> Self {
        self.threshold_probe = probe;
        self
    }

    pub fn validate(&self) -> PointerResult<()> {
        if !self.drag_threshold.is_finite() || self.drag_threshold < 0.0 {
            return Err(PointerError::InvalidThreshold(self.drag_threshold));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> PointerResult<Self> {
        let settings: PointerSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json_string(&self) -> PointerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> PointerResult<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No pointer settings file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let settings = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            drag_threshold = settings.drag_threshold,
            "Loaded pointer settings"
        );
        Ok(settings)
    }

    /// Write settings to `path` atomically (temp file in the same directory,
    /// then rename).
    pub fn save(&self, path: &Path) -> PointerResult<()> {
        self.validate()?;
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(self.to_json_string()?.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| PointerError::Io(e.error))?;
        Ok(())
    }
}

/// Platform location of the settings file, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
