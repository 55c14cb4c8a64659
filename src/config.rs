use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, VersionGenError};

/// Represents the complete configuration for gitversion-gen.
///
/// Controls which external version tool is invoked and the default project
/// name used when renaming artifacts.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tool: ToolConfig,

    #[serde(default)]
    pub project: ProjectConfig,
}

/// Configuration for the external version-computation tool.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ToolConfig {
    #[serde(default = "default_tool_command")]
    pub command: String,
}

fn default_tool_command() -> String {
    "gitversion".to_string()
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            command: default_tool_command(),
        }
    }
}

/// Default project settings for the rename subcommand.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub name: Option<String>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitversion-gen.toml` in current directory
/// 3. `gitversion-gen.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitversion-gen.toml").exists() {
        fs::read_to_string("./gitversion-gen.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("gitversion-gen.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| VersionGenError::config(e.to_string()))?;
    Ok(config)
}
