use std::time::Duration;

use crate::config::GameConfig;
use super::types::{Direction, Point};

pub const START_DIRECTION: Direction = Direction::Right;

#[derive(Clone, Debug)]
pub struct SnakeSessionSettings {
    pub grid_size: usize,
    pub tick_interval: Duration,
    pub frame_interval: Duration,
    pub score_per_food: u32,
    pub level_threshold: u32,
    pub seed: Option<u64>,
}

impl SnakeSessionSettings {
    pub fn start_position(&self) -> Point {
        Point::new(self.grid_size / 2, self.grid_size / 2)
    }

    pub fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

impl From<&GameConfig> for SnakeSessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            grid_size: config.grid_size.max(1) as usize,
            tick_interval: Duration::from_millis(config.tick_interval_ms as u64),
            frame_interval: Duration::from_millis(config.frame_interval_ms.max(1) as u64),
            score_per_food: config.score_per_food,
            level_threshold: config.level_threshold.max(1),
            seed: config.seed,
        }
    }
}
