//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/dossier/dossier.toml`
//! 3. Environment variables: `DOSSIER_*` prefix
//! 4. Command line flags (applied by the CLI layer)

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// How `dossier show` prints the tree.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Indented, marker-prefixed lines
    #[default]
    Plain,
    /// Box-drawing tree
    Tree,
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Plain => write!(f, "plain"),
            RenderStyle::Tree => write!(f, "tree"),
        }
    }
}

impl FromStr for RenderStyle {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(RenderStyle::Plain),
            "tree" => Ok(RenderStyle::Tree),
            other => Err(ApplicationError::Config {
                message: format!("unknown style '{}' (expected plain or tree)", other),
            }),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub style: Option<RenderStyle>,
    pub color: Option<bool>,
    pub data: Option<PathBuf>,
}

/// Unified configuration for dossier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Display style of `show` (default: plain)
    pub style: RenderStyle,
    /// Colored terminal output (default: true)
    pub color: bool,
    /// Dossier data file; built-in sample data when unset
    pub data: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            style: RenderStyle::Plain,
            color: true,
            data: None,
        }
    }
}

/// Get the XDG config directory for dossier.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dossier").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("dossier.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings from defaults, the global config file and `DOSSIER_*` variables.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Like [`Settings::load`], reading the global layer from `global_path`.
    pub fn load_from(global_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = global_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            style: overlay.style.unwrap_or(self.style),
            color: overlay.color.unwrap_or(self.color),
            data: overlay.data.clone().or_else(|| self.data.clone()),
        }
    }

    /// Apply DOSSIER_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("DOSSIER"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("style") {
            settings.style = val.parse()?;
        }
        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }
        if let Ok(val) = config.get_string("data") {
            settings.data = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Expand `~` and `$VAR` in the data path.
    fn expand_paths(&mut self) {
        if let Some(data) = &self.data {
            let raw = data.to_string_lossy();
            let expanded = shellexpand::full(raw.as_ref())
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            self.data = Some(PathBuf::from(expanded));
        }
    }

    /// Serialize to TOML for `dossier config show`.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}
