use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{error::SettingsError, score::DEFAULT_HIGHSCORE_FILE};

pub const DEFAULT_SETTINGS_FILE: &str = "snake_settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub highscore_path: PathBuf,
    pub sound_volume: f32,
    pub muted: bool,
    /// Fixed apple sequence for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_FILE),
            sound_volume: 1.0,
            muted: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Settings file named by `SNAKE_SETTINGS` (or the default file) with
    /// environment overrides applied.
    pub fn from_env() -> Self {
        let path = env::var_os("SNAKE_SETTINGS")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
        let mut settings = Self::load_or_default(&path);
        settings.apply_overrides(|key| env::var(key).ok());
        settings
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings: Settings =
            serde_json::from_str(&text).map_err(|source| SettingsError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        settings.sound_volume = settings.sound_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|err| {
            tracing::warn!("{err}; using default settings");
            Self::default()
        })
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("SNAKE_HIGHSCORE_FILE").filter(|v| !v.trim().is_empty()) {
            self.highscore_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup("SNAKE_MUTED") {
            match raw.trim() {
                "1" | "true" | "yes" => self.muted = true,
                "0" | "false" | "no" => self.muted = false,
                other => tracing::warn!("SNAKE_MUTED={other:?} is not a boolean, ignoring"),
            }
        }
        if let Some(raw) = lookup("SNAKE_SEED") {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => tracing::warn!("SNAKE_SEED={raw:?} is not a number, ignoring"),
            }
        }
    }

    /// Master volume after muting.
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.sound_volume.clamp(0.0, 1.0) }
    }
}
