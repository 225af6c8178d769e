// File: src/paths.rs
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the platform config directory (sandboxes, packaging tests).
pub const CONFIG_DIR_ENV: &str = "DRAPE_CONFIG_DIR";

pub struct AppPaths;

impl AppPaths {
    pub fn get_config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let proj = ProjectDirs::from("org", "drape", "drape")
            .context("Could not determine a home directory")?;
        Ok(proj.config_dir().to_path_buf())
    }

    pub fn get_config_file_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }
}
