//! Jump key configuration: the caller-owned id-to-key table, loadable from
//! a JSON file.

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{fmt, fs, io};

use crate::jump::JumpAssignment;

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "cannot read config: {}", err),
            ConfigError::Parse(err) => write!(f, "cannot parse config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// On-disk shape: `{ "keys": { "widget-id": "key", ... } }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpConfig {
    pub keys: FxHashMap<CompactString, CompactString>,
}

impl JumpConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn assignment(&self) -> JumpAssignment {
        JumpAssignment::new(self.keys.iter().map(|(id, key)| (id.clone(), key.clone())))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
