use serde::{Deserialize, Serialize};

use super::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size: u32,
    pub tick_interval_ms: u32,
    pub frame_interval_ms: u32,
    pub score_per_food: u32,
    pub level_threshold: u32,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            tick_interval_ms: 120,
            frame_interval_ms: 8,
            score_per_food: 10,
            level_threshold: 50,
            seed: None,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size < 5 || self.grid_size > 100 {
            return Err("grid_size must be between 5 and 100".to_string());
        }
        if self.tick_interval_ms < 20 || self.tick_interval_ms > 5000 {
            return Err("tick_interval_ms must be between 20 and 5000".to_string());
        }
        if self.frame_interval_ms == 0 {
            return Err("frame_interval_ms must be greater than 0".to_string());
        }
        if self.frame_interval_ms > self.tick_interval_ms {
            return Err("frame_interval_ms must not exceed tick_interval_ms".to_string());
        }
        if self.score_per_food == 0 {
            return Err("score_per_food must be greater than 0".to_string());
        }
        if self.level_threshold == 0 {
            return Err("level_threshold must be greater than 0".to_string());
        }
        Ok(())
    }
}
