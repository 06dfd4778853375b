mod auth_config;
mod config;
mod cors_config;
mod database_config;
mod error;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use cors_config::CorsConfig;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use logging_config::{LogLevel, LoggingConfig};
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "SALUS_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".salus";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "salus.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

/// Insecure fallback used when no secret is configured
pub const DEFAULT_SECRET_KEY: &str = "clave_por_defecto";
const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://172.25.48.1:8080",
    "http://localhost:8080",
];

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
