//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::store::get_app_dir;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding tasks.json. None means the default app dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Destination of the plain-text export, relative to the current
    /// directory unless absolute.
    #[serde(default = "default_export_path")]
    pub path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_export_path(),
        }
    }
}

fn default_export_path() -> PathBuf {
    PathBuf::from("tasks_export.txt")
}

impl Config {
    /// Load `config.toml` from the app dir. A missing file yields the
    /// defaults; an unreadable or malformed file is a startup error.
    pub fn load() -> Result<Self> {
        let path = get_app_dir()?.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_default_export_path() {
        let config = Config::default();
        assert_eq!(config.export.path, PathBuf::from("tasks_export.txt"));
        assert!(config.data_dir.is_none());
    }

    #[test]
    #[serial]
    fn test_load_missing_config_is_default() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var("HOME", temp.path());

        let config = Config::load()?;
        assert!(config.data_dir.is_none());
        Ok(())
    }

    #[test]
    #[serial]
    fn test_load_reads_overrides() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var("HOME", temp.path());

        let app_dir = temp.path().join(".tasktrack");
        fs::create_dir_all(&app_dir)?;
        fs::write(
            app_dir.join(CONFIG_FILE),
            "data_dir = \"/tmp/tasks\"\n\n[export]\npath = \"out.txt\"\n",
        )?;

        let config = Config::load()?;
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/tasks")));
        assert_eq!(config.export.path, PathBuf::from("out.txt"));
        Ok(())
    }

    #[test]
    #[serial]
    fn test_load_malformed_config_is_error() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var("HOME", temp.path());

        let app_dir = temp.path().join(".tasktrack");
        fs::create_dir_all(&app_dir)?;
        fs::write(app_dir.join(CONFIG_FILE), "data_dir = [not toml")?;

        assert!(Config::load().is_err());
        Ok(())
    }
}
