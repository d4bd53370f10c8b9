use serde::Deserialize;

use crate::infrastructure::observability::MetricsConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// In-memory storage settings
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Start with the demo users `user1` (normal) and `user2` (premium)
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

fn default_seed_demo_data() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.metrics.enabled);
        assert!(config.storage.seed_demo_data);
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let json = r#"{
            "server": {"host": "127.0.0.1", "port": 3000},
            "logging": {"level": "debug", "format": "json"}
        }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.metrics.path, "/metrics");
        assert!(config.storage.seed_demo_data);
    }
}
