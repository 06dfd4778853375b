use crate::{ConfigError, ConfigErrorResult, DEFAULT_ALLOWED_ORIGINS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Exact origins (scheme://host[:port]) allowed to call the API with credentials
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.map(String::from).to_vec(),
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.allowed_origins
            .iter()
            .try_for_each(|origin| Self::validate_origin(origin))
    }

    fn validate_origin(origin: &str) -> ConfigErrorResult<()> {
        // Credentialed CORS cannot use a wildcard origin
        if origin == "*" {
            return Err(ConfigError::invalid(
                "cors",
                "'*' is not allowed because credentials are enabled",
            ));
        }

        let Some(authority) = origin
            .strip_prefix("http://")
            .or_else(|| origin.strip_prefix("https://"))
        else {
            return Err(ConfigError::invalid(
                "cors",
                format!("origin '{origin}' must start with http:// or https://"),
            ));
        };

        if authority.is_empty()
            || authority.contains('/')
            || authority.chars().any(char::is_whitespace)
        {
            return Err(ConfigError::invalid(
                "cors",
                format!("origin '{origin}' must be scheme://host[:port] with no path"),
            ));
        }

        Ok(())
    }

    /// Parse a comma separated origin list, ignoring blank entries
    pub fn parse_origin_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect()
    }
}
