use crate::{Fulfiller, ServiceError};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Number;

pub const DEFAULT_CITY: &str = "New York";

const UNAVAILABLE: &str = "Sorry, I couldn't get the weather right now.";

/// Current conditions from OpenWeatherMap.
#[derive(Clone)]
pub struct WeatherService {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

#[derive(Deserialize, Debug)]
struct WeatherReport {
    name: String,
    main: MainReadings,
    weather: Vec<Conditions>,
}

#[derive(Deserialize, Debug)]
struct MainReadings {
    // Kept as the provider's number so it's rendered as sent
    temp: Number,
}

#[derive(Deserialize, Debug)]
struct Conditions {
    description: String,
}

/// The word following the first standalone `in`, otherwise the default city.
pub fn extract_city(query: &str) -> &str {
    let mut words = query.split_whitespace();

    match words.position(|word| word == "in") {
        Some(_) => words.next().unwrap_or(DEFAULT_CITY),
        None => DEFAULT_CITY,
    }
}

impl WeatherService {
    pub fn new(http: reqwest::Client, api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        WeatherService {
            http,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Describe the current weather in `city`.
    pub async fn weather_in(&self, city: &str) -> String {
        match self.fetch(city).await {
            Ok(sentence) => sentence,
            Err(ServiceError::Transport(err)) => {
                tracing::warn!(city, "Weather request failed: {err}");
                format!("Error fetching weather data: {err}")
            }
            Err(err) => {
                tracing::warn!(city, "Unusable weather response: {err}");
                format!("Error: {err}")
            }
        }
    }

    async fn fetch(&self, city: &str) -> Result<String, ServiceError> {
        let response: reqwest::Response = self
            .http
            .get(&self.api_url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            tracing::warn!(status = response.status().as_u16(), "Weather provider refused");
            return Ok(UNAVAILABLE.to_string());
        }

        let body: String = response.text().await?;
        let report: WeatherReport = serde_json::from_str(&body)?;

        let description: &str = report
            .weather
            .first()
            .map(|conditions| conditions.description.as_str())
            .ok_or_else(|| ServiceError::BadResponse("no weather conditions reported".to_string()))?;

        Ok(format!(
            "The weather in {} is {}°C with {}.",
            report.name, report.main.temp, description
        ))
    }
}

#[async_trait]
impl Fulfiller for WeatherService {
    fn name(&self) -> &'static str {
        "WeatherService"
    }

    async fn fulfill(&self, query: &str) -> String {
        let city: &str = extract_city(query);
        tracing::debug!(city, "Looking up weather");

        self.weather_in(city).await
    }
}
