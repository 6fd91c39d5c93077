// Handles configuration loading, saving, and defaults.
use crate::paths::AppPaths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
pub enum AppTheme {
    #[default]
    Dark,
    Light,
    Dracula,
    Nord,
    GruvboxDark,
    CatppuccinMocha,
    TokyoNight,
    Ferra,
}

impl fmt::Display for AppTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppTheme::Dark => write!(f, "Dark"),
            AppTheme::Light => write!(f, "Light"),
            AppTheme::Dracula => write!(f, "Dracula"),
            AppTheme::Nord => write!(f, "Nord"),
            AppTheme::GruvboxDark => write!(f, "Gruvbox Dark"),
            AppTheme::CatppuccinMocha => write!(f, "Catppuccin Mocha"),
            AppTheme::TokyoNight => write!(f, "Tokyo Night"),
            AppTheme::Ferra => write!(f, "Ferra"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Overrides where teams.txt / favorites.txt / events.txt are looked up.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub theme: AppTheme,
}

impl Config {
    /// Loads the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let path = AppPaths::get_config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = AppPaths::get_config_file_path()?;
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("writing config file {}", path.display()))
    }
}
