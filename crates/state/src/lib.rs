use async_trait::async_trait;
use model::{Error, LogRecord};

/// Append-only store for handled queries.
///
/// Records are keyed by their request id, which is freshly generated per
/// invocation, so concurrent writers never collide.
#[async_trait]
pub trait LogStore: Send + Sync {
    async fn put_record(&self, record: LogRecord) -> Result<(), StateError>;
}

/// Errors arising from persisting a record.
#[derive(Debug, thiserror::Error)]
#[error("failed to store record {request_id}: {reason}")]
pub struct StateError {
    pub request_id: String,
    pub reason: StateErrorReason,
}

#[derive(Debug, thiserror::Error)]
pub enum StateErrorReason {
    // The record couldn't be converted for the backend
    #[error("bad state: {0}")]
    BadState(String),
    // An error from the underlying state store
    #[error("backend failure: {0}")]
    BackendFailure(Error),
}

impl StateError {
    pub fn new(request_id: impl Into<String>, reason: StateErrorReason) -> Self {
        StateError {
            request_id: request_id.into(),
            reason,
        }
    }
}
