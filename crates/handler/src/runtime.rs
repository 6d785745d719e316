use crate::config::HandlerConfig;
use crate::intent::{FALLBACK_RESPONSE, Intent};
use lambda_runtime::tracing;
use model::{Error, IncomingRequest, LogRecord, OutgoingResponse};
use service::{Fulfiller, JokeService, WeatherService};
use state::{LogStore, StateError};
use std::sync::Arc;

/// Everything an invocation needs, built once per cold start and shared
/// across invocations. Holds no per-request state.
pub struct HandlerRuntime {
    log_store: Arc<dyn LogStore>,
    weather: Arc<dyn Fulfiller>,
    joke: Arc<dyn Fulfiller>,
}

impl HandlerRuntime {
    pub fn new(
        log_store: Arc<dyn LogStore>,
        weather: Arc<dyn Fulfiller>,
        joke: Arc<dyn Fulfiller>,
    ) -> Self {
        HandlerRuntime {
            log_store,
            weather,
            joke,
        }
    }

    /// Create the runtime with the provider endpoints from `config`.
    pub fn from_config(
        config: &HandlerConfig,
        log_store: Arc<dyn LogStore>,
        http: reqwest::Client,
    ) -> Self {
        let weather = WeatherService::new(
            http.clone(),
            config.weather_api_url.clone(),
            config.weather_api_key.clone(),
        );
        let joke = JokeService::new(http, config.joke_api_url.clone());

        Self::new(log_store, Arc::new(weather), Arc::new(joke))
    }

    /// Handle one request: classify, fulfill, log, respond.
    ///
    /// A body that can't be read is answered with a 400.
    /// Failing to persist the record fails the invocation.
    pub async fn handle(&self, request: IncomingRequest) -> Result<OutgoingResponse, Error> {
        let query: String = match request.query() {
            Ok(query) => query,
            Err(err) => {
                tracing::warn!("Rejecting request: {err}");
                return Ok(OutgoingResponse::bad_request(&err.to_string())?);
            }
        };

        let response: String = self.respond(&query).await;
        let request_id: String = self.log_interaction(&query, &response).await?;

        Ok(OutgoingResponse::ok(&request_id, &response)?)
    }

    /// The answer to an already lowercased query.
    pub async fn respond(&self, query: &str) -> String {
        let intent: Intent = Intent::classify(query);

        let fulfiller: &Arc<dyn Fulfiller> = match intent {
            Intent::Weather => &self.weather,
            Intent::Joke => &self.joke,
            Intent::Fallback => {
                tracing::info!("No intent matched");
                return FALLBACK_RESPONSE.to_string();
            }
        };

        tracing::info!(service = fulfiller.name(), "Handling {:?} intent", intent);

        fulfiller.fulfill(query).await
    }

    /// Persist the interaction, returning the id it was stored under.
    pub async fn log_interaction(&self, query: &str, response: &str) -> Result<String, StateError> {
        let record: LogRecord = LogRecord::new(query, response);
        let request_id: String = record.request_id.clone();

        self.log_store.put_record(record).await?;

        tracing::info!(request_id = request_id.as_str(), "Logged interaction");

        Ok(request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::response::ResponseBody;
    use serde_json::json;
    use state_dynamodb::DynamoDbLogStore;
    use state_in_memory::InMemoryLogStore;
    use test_utils::{
        TEST_API_KEY, TEST_TABLE, WEATHER_PATH, create_failing_dynamodb_client, joke_payload,
        request_with_query, response_body, weather_payload,
    };
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const JOKE_PATH: &str = "/joke";

    fn runtime_for(server: &MockServer, store: Arc<dyn LogStore>) -> HandlerRuntime {
        let config = HandlerConfig {
            weather_api_key: TEST_API_KEY.to_string(),
            logs_table_name: TEST_TABLE.to_string(),
            weather_api_url: format!("{}{}", server.uri(), WEATHER_PATH),
            joke_api_url: format!("{}{}", server.uri(), JOKE_PATH),
        };

        HandlerRuntime::from_config(&config, store, reqwest::Client::new())
    }

    async fn mount_weather(server: &MockServer, city: &str, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path(WEATHER_PATH))
            .and(query_param("q", city))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(weather_payload("Paris", json!(18.5), "clear sky")),
            )
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    async fn mount_joke(server: &MockServer, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path(JOKE_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(joke_payload("Why did the chicken cross the road?")),
            )
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn weather_query_is_answered_and_logged() {
        let server = MockServer::start().await;
        mount_weather(&server, "paris", 1).await;
        mount_joke(&server, 0).await;

        let store = InMemoryLogStore::default();
        let runtime = runtime_for(&server, Arc::new(store.clone()));

        let response = runtime
            .handle(request_with_query("What's the Weather in Paris"))
            .await
            .expect("Invocation should succeed");

        assert_eq!(200, response.status_code);

        let body: ResponseBody = response_body(&response);
        assert_eq!("The weather in Paris is 18.5°C with clear sky.", body.response);

        let records: Vec<LogRecord> = store.records();
        assert_eq!(1, records.len());
        assert_eq!(body.request_id, records[0].request_id);
        assert_eq!("what's the weather in paris", records[0].query);
        assert_eq!(body.response, records[0].response);
    }

    #[tokio::test]
    async fn weather_wins_when_both_keywords_present() {
        let server = MockServer::start().await;
        mount_weather(&server, "New York", 1).await;
        mount_joke(&server, 0).await;

        let runtime = runtime_for(&server, Arc::new(InMemoryLogStore::default()));

        let answer: String = runtime.respond("tell me a joke about the weather").await;

        assert_eq!("The weather in Paris is 18.5°C with clear sky.", answer);
    }

    #[tokio::test]
    async fn joke_query_is_answered() {
        let server = MockServer::start().await;
        mount_joke(&server, 1).await;

        let runtime = runtime_for(&server, Arc::new(InMemoryLogStore::default()));

        let response = runtime
            .handle(request_with_query("Tell me a joke"))
            .await
            .unwrap();

        assert_eq!(
            "Why did the chicken cross the road?",
            response_body(&response).response
        );
    }

    #[tokio::test]
    async fn unknown_query_gets_fallback_without_calls() {
        let server = MockServer::start().await;
        mount_weather(&server, "New York", 0).await;
        mount_joke(&server, 0).await;

        let store = InMemoryLogStore::default();
        let runtime = runtime_for(&server, Arc::new(store.clone()));

        let response = runtime.handle(request_with_query("hello")).await.unwrap();

        assert_eq!(200, response.status_code);
        assert_eq!(FALLBACK_RESPONSE, response_body(&response).response);
        // Fallback answers are logged too
        assert_eq!(1, store.records().len());
    }

    #[tokio::test]
    async fn missing_query_gets_fallback() {
        let server = MockServer::start().await;
        let runtime = runtime_for(&server, Arc::new(InMemoryLogStore::default()));

        let response = runtime.handle(IncomingRequest::default()).await.unwrap();

        assert_eq!(FALLBACK_RESPONSE, response_body(&response).response);
    }

    #[tokio::test]
    async fn provider_failure_is_still_a_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(WEATHER_PATH))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let runtime = runtime_for(&server, Arc::new(InMemoryLogStore::default()));

        let response = runtime
            .handle(request_with_query("weather in paris"))
            .await
            .unwrap();

        assert_eq!(200, response.status_code);
        assert_eq!(
            "Sorry, I couldn't get the weather right now.",
            response_body(&response).response
        );
    }

    #[tokio::test]
    async fn repeated_queries_get_distinct_ids() {
        let server = MockServer::start().await;
        mount_joke(&server, 2).await;

        let store = InMemoryLogStore::default();
        let runtime = runtime_for(&server, Arc::new(store.clone()));

        let first = runtime.handle(request_with_query("joke")).await.unwrap();
        let second = runtime.handle(request_with_query("joke")).await.unwrap();

        let first: ResponseBody = response_body(&first);
        let second: ResponseBody = response_body(&second);

        assert_ne!(first.request_id, second.request_id);
        assert_eq!(first.response, second.response);

        let ids: Vec<String> = store.records().into_iter().map(|r| r.request_id).collect();
        assert_eq!(vec![first.request_id, second.request_id], ids);
    }

    #[tokio::test]
    async fn malformed_body_is_a_bad_request() {
        let server = MockServer::start().await;
        let store = InMemoryLogStore::default();
        let runtime = runtime_for(&server, Arc::new(store.clone()));

        let response = runtime
            .handle(IncomingRequest::with_body(json!("{not json")))
            .await
            .unwrap();

        assert_eq!(400, response.status_code);
        assert!(response.body.contains("not valid JSON"), "{}", response.body);
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn store_failure_fails_the_invocation() {
        let server = MockServer::start().await;
        let store = DynamoDbLogStore::new(create_failing_dynamodb_client(), TEST_TABLE);
        let runtime = runtime_for(&server, Arc::new(store));

        let result = runtime.handle(request_with_query("hello")).await;

        assert!(result.is_err());
    }
}
