//! User settings loaded from a JSON file at startup.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::{RulesEngine, ShakmatyEngine};
use crate::ui::theme::ThemeId;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "CHESS_BOARD_SETTINGS";

/// Settings file used when the environment variable is unset
const DEFAULT_SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Board color theme
    pub theme: ThemeId,
    /// Draw rank and file labels along the board edge
    pub show_coordinates: bool,
    /// Position to start the first game from, as FEN. New games always
    /// start from the standard position.
    pub start_fen: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeId::default(),
            show_coordinates: true,
            start_fen: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("settings are not valid JSON for this schema")
    }

    /// Read settings from `path`. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Settings file location: `$CHESS_BOARD_SETTINGS` or `./settings.json`
    pub fn path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Load from [`Settings::path`], falling back to defaults on any error
    pub fn load_or_default() -> Self {
        let path = Self::path();
        match Self::load(&path) {
            Ok(settings) => {
                info!(path = %path.display(), theme = ?settings.theme, "settings loaded");
                settings
            }
            Err(err) => {
                warn!("{err:#}; using default settings");
                Self::default()
            }
        }
    }

    /// Engine for the first game, honoring `start_fen`
    pub fn initial_engine(&self) -> Result<ShakmatyEngine> {
        match &self.start_fen {
            Some(fen) => ShakmatyEngine::from_fen(fen).context("start_fen is not usable"),
            None => Ok(ShakmatyEngine::new_game()),
        }
    }

    /// JSON schema of the settings file
    #[allow(dead_code)]
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(Settings);
        serde_json::to_string_pretty(&schema).context("failed to serialize settings schema")
    }
}
