use crate::{Fulfiller, ServiceError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;

pub const JOKE_USER_AGENT: &str = "AWS Lambda Chatbot (test@example.com)";

const NO_JOKE: &str = "Hmm, I couldn't find a joke right now!";

/// Random dad jokes from icanhazdadjoke.
#[derive(Clone)]
pub struct JokeService {
    http: reqwest::Client,
    api_url: String,
}

impl JokeService {
    pub fn new(http: reqwest::Client, api_url: impl Into<String>) -> Self {
        JokeService {
            http,
            api_url: api_url.into(),
        }
    }

    pub async fn random_joke(&self) -> String {
        match self.fetch().await {
            Ok(joke) => joke,
            Err(ServiceError::Transport(err)) => {
                tracing::warn!("Joke request failed: {err}");
                format!("Error fetching a joke: {err}")
            }
            Err(err) => {
                tracing::warn!("Unusable joke response: {err}");
                format!("Error: {err}")
            }
        }
    }

    async fn fetch(&self) -> Result<String, ServiceError> {
        let body: String = self
            .http
            .get(&self.api_url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, JOKE_USER_AGENT)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let payload: Value = serde_json::from_str(&body)?;

        let fields = payload
            .as_object()
            .ok_or_else(|| ServiceError::BadResponse("joke response is not an object".to_string()))?;

        let joke: String = fields
            .get("joke")
            .and_then(Value::as_str)
            .unwrap_or(NO_JOKE)
            .to_string();

        Ok(joke)
    }
}

#[async_trait]
impl Fulfiller for JokeService {
    fn name(&self) -> &'static str {
        "JokeService"
    }

    async fn fulfill(&self, _query: &str) -> String {
        self.random_joke().await
    }
}
