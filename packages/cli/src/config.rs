use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use stencil_engine::EngineOptions;

pub const DEFAULT_CONFIG_NAME: &str = "stencil.config.json";

/// Stencil configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Check props against component contracts while rendering
    #[serde(default = "default_dev_mode")]
    pub dev_mode: bool,

    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_dev_mode() -> bool {
    EngineOptions::default().dev_mode
}

fn default_pretty() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Engine options, with a command-line override for dev mode
    pub fn engine_options(&self, dev_mode: Option<bool>) -> EngineOptions {
        EngineOptions {
            dev_mode: dev_mode.unwrap_or(self.dev_mode),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dev_mode: default_dev_mode(),
            pretty: default_pretty(),
        }
    }
}
