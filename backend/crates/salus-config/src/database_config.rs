use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, DEFAULT_DATABASE_MAX_CONNECTIONS,
    MAX_DATABASE_MAX_CONNECTIONS, MIN_DATABASE_MAX_CONNECTIONS,
};

use std::path::{Component, Path};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
    /// Pool size
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_FILENAME.to_string(),
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::invalid("database", "path is empty"));
        }

        let path = Path::new(&self.path);
        if path.is_absolute() {
            return Err(ConfigError::invalid(
                "database",
                format!("path '{}' must be relative to the config dir", self.path),
            ));
        }
        if path.components().any(|c| c == Component::ParentDir) {
            return Err(ConfigError::invalid(
                "database",
                format!("path '{}' must not contain '..'", self.path),
            ));
        }

        let allowed = MIN_DATABASE_MAX_CONNECTIONS..=MAX_DATABASE_MAX_CONNECTIONS;
        if !allowed.contains(&self.max_connections) {
            return Err(ConfigError::invalid(
                "database",
                format!(
                    "max_connections {} outside {}..={}",
                    self.max_connections, MIN_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_MAX_CONNECTIONS
                ),
            ));
        }

        Ok(())
    }
}
