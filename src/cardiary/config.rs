use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for the CLI client, stored next to the data as config.json.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiaryConfig {
    /// Where diary documents live. `None` means the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl DiaryConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DiaryConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_missing_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = DiaryConfig::load(dir.path()).unwrap();
        assert_eq!(config, DiaryConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let config = DiaryConfig {
            data_dir: Some(PathBuf::from("/tmp/diaries")),
        };
        config.save(dir.path()).unwrap();

        let loaded = DiaryConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
