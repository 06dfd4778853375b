use crate::{ConfigError, ConfigErrorResult, DEFAULT_SECRET_KEY, DEFAULT_TOKEN_TTL_MINUTES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Falls back to an insecure built-in value.
    pub secret_key: String,
    /// Lifetime of issued tokens
    pub token_ttl_minutes: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.secret_key.is_empty() {
            return Err(ConfigError::invalid("auth", "secret_key is empty"));
        }

        if self.token_ttl_minutes <= 0 {
            return Err(ConfigError::invalid(
                "auth",
                format!(
                    "token_ttl_minutes must be positive, got {}",
                    self.token_ttl_minutes
                ),
            ));
        }

        Ok(())
    }

    /// True when no secret was configured and the built-in fallback is in use
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}
