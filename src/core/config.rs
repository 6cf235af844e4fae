use crate::bio::GxfMode;
use crate::core::resolver::MatchStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub gxf: GxfConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub strategy: MatchStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GxfConfig {
    #[serde(default)]
    pub mode: GxfMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Maximum number of unmatched identifiers listed in the text summary (0 = all)
    #[serde(default = "default_max_listed")]
    pub max_listed: usize,
}

fn default_max_listed() -> usize {
    20
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_listed: default_max_listed(),
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, crate::RenameError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| crate::RenameError::Config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}
