use serde::{Deserialize, Serialize};

/// Options for the resolution engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineOptions {
    /// Check every instance against its contract and report violations.
    /// Off in release builds by default.
    pub dev_mode: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            dev_mode: cfg!(debug_assertions),
        }
    }
}

impl EngineOptions {
    pub fn dev() -> Self {
        Self { dev_mode: true }
    }

    pub fn production() -> Self {
        Self { dev_mode: false }
    }
}
