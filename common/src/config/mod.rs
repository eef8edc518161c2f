mod config_content_provider;
mod config_manager;
mod config_serializer;
mod error;
mod game_config;
mod validate;

pub use config_content_provider::{
    ConfigContentProvider, FileContentConfigProvider, InMemoryConfigProvider,
};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use error::ConfigError;
pub use game_config::GameConfig;
pub use validate::Validate;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_neon_snake_config_{}.yaml", random_number))
    }

    fn memory_manager(
        content: &str,
    ) -> ConfigManager<InMemoryConfigProvider, GameConfig, YamlConfigSerializer> {
        ConfigManager::new(
            InMemoryConfigProvider::with_content(content),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_survives_yaml() {
        let serializer = YamlConfigSerializer::new();
        let yaml = serializer.serialize(&GameConfig::default()).unwrap();
        let parsed: GameConfig = serializer.deserialize(&yaml).unwrap();
        assert_eq!(parsed, GameConfig::default());
    }

    #[test]
    fn test_missing_file_yields_default() {
        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::from_yaml_file(get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let manager = memory_manager("grid_size: 30\nseed: 7\n");
        let config = manager.get_config().unwrap();
        assert_eq!(config.grid_size, 30);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.tick_interval_ms, 120);
    }

    #[test]
    fn test_invalid_values_are_rejected_on_load() {
        let manager = memory_manager("grid_size: 2\n");
        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let manager = memory_manager("grid_size: [oops");
        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_frame_interval_must_not_exceed_tick() {
        let config = GameConfig {
            frame_interval_ms: 200,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_set_config_round_trips_through_file() {
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, GameConfig> = ConfigManager::from_yaml_file(&file_path);
        let config = GameConfig {
            grid_size: 25,
            seed: Some(99),
            ..GameConfig::default()
        };
        manager.set_config(&config).unwrap();

        let reloaded: ConfigManager<_, GameConfig> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(reloaded.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_set_config_rejects_invalid() {
        let manager = memory_manager("");
        let config = GameConfig {
            level_threshold: 0,
            ..GameConfig::default()
        };
        assert!(matches!(manager.set_config(&config), Err(ConfigError::Invalid(_))));
    }
}
