// File: src/config.rs
use crate::model::Hemisphere;
use crate::paths::AppPaths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Closet snapshot used when none is given on the command line.
    pub closet_path: Option<String>,
    pub default_season: Option<String>,
    pub default_occasion: Option<String>,
    /// Derive the season from today's date when no season is configured.
    pub derive_season_from_date: bool,
    pub hemisphere: Hemisphere,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            closet_path: None,
            default_season: None,
            default_occasion: None,
            derive_season_from_date: true,
            hemisphere: Hemisphere::North,
            seed: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::get_config_file_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::get_config_file_path()?)
    }

    /// Missing file means defaults; a file that exists must parse.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Reading config {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str).with_context(|| format!("Writing config {}", path.display()))?;
        log::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.derive_season_from_date);
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            closet_path: Some("/tmp/closet.json".to_string()),
            default_season: Some("Fall".to_string()),
            default_occasion: Some("Casual".to_string()),
            derive_season_from_date: false,
            hemisphere: Hemisphere::South,
            seed: Some(7),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_occasion = \"Formal\"\nhemisphere = \"south\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_occasion.as_deref(), Some("Formal"));
        assert_eq!(config.hemisphere, Hemisphere::South);
        assert!(config.derive_season_from_date);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "seed = \"not a number\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
