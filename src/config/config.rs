use once_cell::sync::Lazy;
use serde::Deserialize;

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::load().unwrap_or_else(|e| panic!("Failed to load configuration: {}", e)));

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

impl AppConfig {
    /// Reads configuration from the environment. Nested fields use a double
    /// underscore separator, e.g. `SERVER__PORT`.
    fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("server.address", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}
