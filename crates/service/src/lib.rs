use async_trait::async_trait;

pub mod service_joke;
pub mod service_weather;

pub use service_joke::JokeService;
pub use service_weather::{WeatherService, extract_city};

/// An external API which satisfies one kind of query.
///
/// Fulfillment never fails the invocation: any failure is reported to the
/// user as the returned text.
#[async_trait]
pub trait Fulfiller: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fulfill(&self, query: &str) -> String;
}

/// Errors arising from calling an external API.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    // No usable response, either unreachable or a non-success status
    #[error("{0}")]
    Transport(reqwest::Error),
    // The service returned something we couldn't use
    #[error("{0}")]
    BadResponse(String),
}

impl From<reqwest::Error> for ServiceError {
    // The request url carries credentials, keep it out of anything user facing
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Transport(err.without_url())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::BadResponse(err.to_string())
    }
}
