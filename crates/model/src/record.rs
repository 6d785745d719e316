use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One handled query, as written to the logs table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogRecord {
    pub request_id: String,
    pub query: String,
    pub response: String,
    pub timestamp: String,
}

impl LogRecord {
    /// Create a record with a fresh v4 request id, stamped with the current UTC time.
    pub fn new(query: impl Into<String>, response: impl Into<String>) -> Self {
        LogRecord {
            request_id: Uuid::new_v4().to_string(),
            query: query.into(),
            response: response.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}
