use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

/// Proxy integration response envelope. `body` holds the encoded JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingResponse {
    pub status_code: u16,
    pub body: String,
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub request_id: String,
    pub response: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl OutgoingResponse {
    /// A handled query. Fulfillment failures are reported in `response`, so this is always a 200.
    pub fn ok(request_id: &str, response: &str) -> Result<Self, serde_json::Error> {
        let body = ResponseBody {
            request_id: request_id.to_string(),
            response: response.to_string(),
        };

        Ok(Self::json(200, serde_json::to_string(&body)?))
    }

    /// The request body couldn't be read.
    pub fn bad_request(message: &str) -> Result<Self, serde_json::Error> {
        let body: String = serde_json::to_string(&ErrorBody { error: message })?;

        Ok(Self::json(400, body))
    }

    fn json(status_code: u16, body: String) -> Self {
        OutgoingResponse {
            status_code,
            body,
            headers: HashMap::from([(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())]),
        }
    }
}
