use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::theme::ThemeId;

const SETTINGS_FILE: &str = "theme-tasks.json";
const DEFAULT_FILES_DIR: &str = "files";
const DEFAULT_THEMES_DIR: &str = "../frontend/themes";
const DEFAULT_STYLESHEET: &str = "phone.scss";

const REPLACEMENTS_FILE: &str = "replacements.json";
const PRESETS_FILE: &str = "presets.json";
const SCSS_OUTPUT_DIR: &str = "scss";
const CSS_OUTPUT_DIR: &str = "css";

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {path}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file: {path}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and parses a JSON document.
///
/// A missing file is not an error and yields `Ok(None)`. Anything that exists
/// but cannot be read or parsed is reported to the caller.
pub fn read_config_file<T: DeserializeOwned>(path: &Path) -> ConfigResult<Option<T>> {
    if !path.exists() {
        tracing::debug!(?path, "config file not found");
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = serde_json::from_str(&contents).map_err(|source| ConfigError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(parsed))
}

/// Project settings from `theme-tasks.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub files_dir: Option<PathBuf>,
    #[serde(default)]
    pub themes_dir: Option<PathBuf>,
    #[serde(default)]
    pub stylesheet: Option<String>,
}

impl Settings {
    /// Applies `overrides` on top of these settings.
    pub fn merged_with(&self, overrides: &Settings) -> Settings {
        Settings {
            files_dir: overrides
                .files_dir
                .clone()
                .or_else(|| self.files_dir.clone()),
            themes_dir: overrides
                .themes_dir
                .clone()
                .or_else(|| self.themes_dir.clone()),
            stylesheet: overrides
                .stylesheet
                .clone()
                .or_else(|| self.stylesheet.clone()),
        }
    }

    pub fn into_layout(self) -> ProjectLayout {
        ProjectLayout {
            files_dir: self
                .files_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FILES_DIR)),
            themes_dir: self
                .themes_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_THEMES_DIR)),
            stylesheet: self
                .stylesheet
                .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string()),
        }
    }
}

/// Loads project settings, falling back to defaults when the file is missing
/// or unusable.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let path = path.map_or_else(|| PathBuf::from(SETTINGS_FILE), Path::to_path_buf);
    match read_config_file::<Settings>(&path) {
        Ok(Some(settings)) => settings,
        Ok(None) => Settings::default(),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to load settings; using defaults");
            Settings::default()
        }
    }
}

/// Where each theme's inputs and outputs live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub files_dir: PathBuf,
    pub themes_dir: PathBuf,
    pub stylesheet: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Settings::default().into_layout()
    }
}

impl ProjectLayout {
    fn source_dir(&self, theme: &ThemeId) -> PathBuf {
        self.files_dir.join(theme.key())
    }

    fn theme_dir(&self, theme: &ThemeId) -> PathBuf {
        self.themes_dir.join(theme.key())
    }

    pub fn replacements_path(&self, theme: &ThemeId) -> PathBuf {
        self.source_dir(theme).join(REPLACEMENTS_FILE)
    }

    pub fn replace_source_path(&self, theme: &ThemeId) -> PathBuf {
        self.source_dir(theme).join(&self.stylesheet)
    }

    pub fn scss_output_dir(&self, theme: &ThemeId) -> PathBuf {
        self.theme_dir(theme).join(SCSS_OUTPUT_DIR)
    }

    pub fn presets_path(&self, theme: &ThemeId) -> PathBuf {
        self.theme_dir(theme).join(PRESETS_FILE)
    }

    pub fn compile_source_path(&self, theme: &ThemeId) -> PathBuf {
        self.scss_output_dir(theme).join(&self.stylesheet)
    }

    pub fn css_output_dir(&self, theme: &ThemeId) -> PathBuf {
        self.theme_dir(theme).join(CSS_OUTPUT_DIR)
    }
}
