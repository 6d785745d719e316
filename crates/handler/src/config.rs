use model::env::{
    DEFAULT_JOKE_API_URL, DEFAULT_WEATHER_API_URL, JOKE_API_URL, LOGS_TABLE_NAME,
    OPENWEATHER_API_KEY, WEATHER_API_URL,
};
use std::fmt::{Debug, Formatter};

/// Settings read once at cold start.
#[derive(Clone)]
pub struct HandlerConfig {
    pub weather_api_key: String,
    pub logs_table_name: String,
    pub weather_api_url: String,
    pub joke_api_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing {0} environment variable")]
    MissingVariable(&'static str),
}

impl HandlerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingVariable(key))
        };

        Ok(HandlerConfig {
            weather_api_key: required(OPENWEATHER_API_KEY)?,
            logs_table_name: required(LOGS_TABLE_NAME)?,
            weather_api_url: lookup(WEATHER_API_URL)
                .unwrap_or_else(|| DEFAULT_WEATHER_API_URL.to_string()),
            joke_api_url: lookup(JOKE_API_URL).unwrap_or_else(|| DEFAULT_JOKE_API_URL.to_string()),
        })
    }
}

impl Debug for HandlerConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerConfig")
            .field("weather_api_key", &"<redacted>")
            .field("logs_table_name", &self.logs_table_name)
            .field("weather_api_url", &self.weather_api_url)
            .field("joke_api_url", &self.joke_api_url)
            .finish()
    }
}
