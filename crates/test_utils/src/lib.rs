use aws_sdk_dynamodb::operation::put_item::{PutItemError, PutItemOutput};
use aws_sdk_dynamodb::types::error::ResourceNotFoundException;
use aws_smithy_mocks::{Rule, mock, mock_client};
use model::response::ResponseBody;
use model::{IncomingRequest, OutgoingResponse};
use model::env::{LOGS_TABLE_NAME, OPENWEATHER_API_KEY};
use serde_json::{Value, json};
use std::env;

/// Test configuration values
pub const TEST_TABLE: &str = "chatbot_logs";
pub const TEST_API_KEY: &str = "test-api-key";

/// Path the mocked weather provider is served from
pub const WEATHER_PATH: &str = "/data/2.5/weather";

/// A default mock DynamoDB client which accepts every write
pub fn create_mock_dynamodb_client() -> aws_sdk_dynamodb::Client {
    let put_item_rule: Rule = mock!(aws_sdk_dynamodb::Client::put_item)
        .match_requests(|_| true)
        .then_output(|| PutItemOutput::builder().build());

    mock_client!(aws_sdk_dynamodb, [&put_item_rule])
}

/// A mock DynamoDB client whose table doesn't exist
pub fn create_failing_dynamodb_client() -> aws_sdk_dynamodb::Client {
    let put_item_rule: Rule = mock!(aws_sdk_dynamodb::Client::put_item)
        .match_requests(|_| true)
        .then_error(|| {
            PutItemError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("Requested resource not found")
                    .build(),
            )
        });

    mock_client!(aws_sdk_dynamodb, [&put_item_rule])
}

/// Setup default environment variables used in testing
pub fn setup_default_env() {
    unsafe {
        env::set_var(OPENWEATHER_API_KEY, TEST_API_KEY);
        env::set_var(LOGS_TABLE_NAME, TEST_TABLE);
    }
}

/// A proxy style request with the query JSON encoded into the body
pub fn request_with_query(query: &str) -> IncomingRequest {
    let body: String = json!({ "query": query }).to_string();

    IncomingRequest::with_body(Value::String(body))
}

/// Weather provider payload in the shape OpenWeatherMap returns
pub fn weather_payload(name: &str, temp: Value, description: &str) -> Value {
    json!({
        "name": name,
        "main": { "temp": temp, "humidity": 72 },
        "weather": [{ "main": "Clear", "description": description }]
    })
}

/// Joke provider payload in the shape icanhazdadjoke returns
pub fn joke_payload(joke: &str) -> Value {
    json!({ "id": "R7UfaahVfFd", "joke": joke, "status": 200 })
}

/// Decode the body of a 200 response
pub fn response_body(response: &OutgoingResponse) -> ResponseBody {
    serde_json::from_str(&response.body).expect("Response body should be a ResponseBody")
}
