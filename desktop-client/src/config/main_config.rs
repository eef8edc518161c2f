use common::config::{GameConfig, Validate};
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub const CONFIG_FILE: &str = "neon_snake_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.window.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub cell_size: f32,
    pub event_log_size: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            cell_size: 24.0,
            event_log_size: 32,
        }
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !(8.0..=64.0).contains(&self.cell_size) {
            return Err("cell_size must be between 8 and 64".to_string());
        }
        if self.event_log_size == 0 {
            return Err("event_log_size must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub prefix: Option<String>,
    pub verbose: bool,
}
