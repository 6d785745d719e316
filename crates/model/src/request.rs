use serde::{Deserialize, Serialize};
use serde_json::Value;

const QUERY_FIELD: &str = "query";

/// The event the handler is invoked with.
///
/// Proxy integrations deliver `body` as a JSON encoded string, direct
/// invocations may pass the object itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomingRequest {
    #[serde(default)]
    pub body: Option<Value>,
}

/// The body couldn't be turned into a query.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("request body is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("`query` must be a string")]
    InvalidQuery,
}

impl IncomingRequest {
    pub fn with_body(body: Value) -> Self {
        IncomingRequest { body: Some(body) }
    }

    /// Extract the lowercased query text.
    /// A missing body or query is treated as an empty query.
    pub fn query(&self) -> Result<String, RequestError> {
        let parsed: Value;

        let body: &Value = match &self.body {
            None | Some(Value::Null) => return Ok(String::new()),
            // Only parse if it's a string
            Some(Value::String(raw)) => {
                parsed = serde_json::from_str(raw)?;
                &parsed
            }
            Some(value) => value,
        };

        let fields = body.as_object().ok_or(RequestError::NotAnObject)?;

        match fields.get(QUERY_FIELD) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(query)) => Ok(query.to_lowercase()),
            Some(_) => Err(RequestError::InvalidQuery),
        }
    }
}
