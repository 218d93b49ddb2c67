//! CLI Configuration

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use doublon_core::MatchConfig;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory for the session file and match configuration.
    pub data_dir: PathBuf,
    /// Path to the records JSON file acting as the store.
    pub records_path: PathBuf,
}

impl CliConfig {
    /// Returns the session file path (active duplicate groups).
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join("session.json")
    }

    /// Returns the match configuration file path.
    pub fn match_config_path(&self) -> PathBuf {
        self.data_dir.join("match.json")
    }

    /// Loads the match configuration, falling back to defaults.
    ///
    /// Deployments tune weights, thresholds and the phone country prefix
    /// by dropping a `match.json` into the data directory.
    pub fn match_config(&self) -> Result<MatchConfig> {
        let path = self.match_config_path();
        if !path.exists() {
            return Ok(MatchConfig::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("invalid match configuration in {}", path.display()))?;
        Ok(config)
    }
}
