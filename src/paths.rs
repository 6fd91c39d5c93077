// File: src/paths.rs
use crate::config::Config;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Set once from the `--root` CLI flag, before the GUI starts.
static ROOT_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

pub struct AppPaths;

impl AppPaths {
    fn get_proj_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "matchday", "matchday")
    }

    /// Helper to ensure a directory exists before returning it.
    fn ensure_exists(path: PathBuf) -> Result<PathBuf> {
        if !path.exists() {
            fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(path)
    }

    pub fn set_root_override(path: PathBuf) {
        let _ = ROOT_OVERRIDE.set(path);
    }

    /// Where the data files (teams.txt, favorites.txt, events.txt, logos/)
    /// live. Resolution order: `--root` flag, then the `MATCHDAY_DATA_DIR`
    /// environment override used by tests, then the configured `data_dir`,
    /// then the current working directory.
    pub fn data_dir(config: &Config) -> PathBuf {
        if let Some(root) = ROOT_OVERRIDE.get() {
            return root.clone();
        }
        if let Ok(dir) = env::var("MATCHDAY_DATA_DIR") {
            return PathBuf::from(dir);
        }
        if let Some(dir) = &config.data_dir {
            return dir.clone();
        }
        PathBuf::from(".")
    }

    pub fn teams_path(data_dir: &Path) -> PathBuf {
        data_dir.join("teams.txt")
    }

    pub fn favorites_path(data_dir: &Path) -> PathBuf {
        data_dir.join("favorites.txt")
    }

    pub fn events_path(data_dir: &Path) -> PathBuf {
        data_dir.join("events.txt")
    }

    pub fn get_config_file_path() -> Result<PathBuf> {
        let proj = Self::get_proj_dirs()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        let dir = Self::ensure_exists(proj.config_dir().to_path_buf())?;
        Ok(dir.join("config.toml"))
    }

    pub fn get_log_file_path() -> Result<PathBuf> {
        let proj = Self::get_proj_dirs()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let dir = Self::ensure_exists(proj.data_dir().to_path_buf())?;
        Ok(dir.join("matchday.log"))
    }
}
