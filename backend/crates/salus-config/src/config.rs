use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, CorsConfig,
    DEFAULT_CONFIG_DIRECTORY, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{info, warn};
use serde::Deserialize;

/// Everything the server needs at startup.
///
/// Built once in `main`, validated, then handed to the pieces that need it.
/// Nothing reads configuration from globals after that point.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Resolve the config directory (creating it if needed), read
    /// `config.toml` from it when present, then apply environment overrides.
    ///
    /// A missing file is not an error. Validation is separate, see
    /// [`Config::validate`].
    pub fn load() -> ConfigErrorResult<Self> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir).map_err(|source| ConfigError::Io {
            path: dir.clone(),
            source,
        })?;

        let file = dir.join(CONFIG_FILENAME);
        let mut config = match file.is_file() {
            true => Self::from_file(&file)?,
            false => Self::default(),
        };

        config.apply_env();
        Ok(config)
    }

    fn from_file(path: &Path) -> ConfigErrorResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&raw).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `$SALUS_CONFIG_DIR`, or `.salus` under the working directory
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        match env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => env::current_dir()
                .map(|cwd| cwd.join(DEFAULT_CONFIG_DIRECTORY))
                .map_err(|e| {
                    ConfigError::invalid("config", format!("working directory unavailable: {e}"))
                }),
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.cors.validate()
    }

    /// Database file location; `database.path` is relative to the config dir
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Startup summary. The secret itself is never printed.
    pub fn log_summary(&self) {
        info!(
            "Config: listening on {}, database {} (pool {})",
            self.bind_addr(),
            self.database.path,
            self.database.max_connections
        );
        info!(
            "Config: HS256 tokens valid for {} minutes",
            self.auth.token_ttl_minutes
        );
        info!(
            "Config: CORS origins [{}]",
            self.cors.allowed_origins.join(", ")
        );
        info!(
            "Config: log level {}, colored {}",
            *self.logging.level, self.logging.colored
        );

        if self.auth.uses_default_secret() {
            warn!("SECRET_KEY is not set; tokens are signed with the built-in insecure default");
        }
    }

    fn apply_env(&mut self) {
        override_from_env("SALUS_SERVER_HOST", &mut self.server.host);
        override_from_env("SALUS_SERVER_PORT", &mut self.server.port);

        override_from_env("SALUS_DATABASE_PATH", &mut self.database.path);
        override_from_env(
            "SALUS_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Unprefixed for compatibility with existing deployments
        override_from_env("SECRET_KEY", &mut self.auth.secret_key);
        override_from_env(
            "SALUS_AUTH_TOKEN_TTL_MINUTES",
            &mut self.auth.token_ttl_minutes,
        );

        if let Some(origins) = env_value("SALUS_CORS_ALLOWED_ORIGINS") {
            self.cors.allowed_origins = CorsConfig::parse_origin_list(&origins);
        }

        override_from_env("SALUS_LOG_LEVEL", &mut self.logging.level);
        if let Some(colored) = env_value("SALUS_LOG_COLORED") {
            self.logging.colored = matches!(colored.as_str(), "1" | "true");
        }
        if let Some(file) = env_value("SALUS_LOG_FILE") {
            self.logging.file = Some(file);
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Replace `target` when `name` is set and parses; otherwise keep it
fn override_from_env<T: FromStr>(name: &str, target: &mut T) {
    if let Some(parsed) = env_value(name).and_then(|raw| raw.parse().ok()) {
        *target = parsed;
    }
}
