use async_trait::async_trait;
use model::LogRecord;
use state::{LogStore, StateError, StateErrorReason};
use std::sync::{Arc, Mutex};

/// Keeps records in process. Used for local runs and tests.
#[derive(Clone, Default)]
pub struct InMemoryLogStore {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl InMemoryLogStore {
    /// Snapshot of every record written so far, in write order.
    pub fn records(&self) -> Vec<LogRecord> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl LogStore for InMemoryLogStore {
    async fn put_record(&self, record: LogRecord) -> Result<(), StateError> {
        let mut guard = self.records.lock().map_err(|err| {
            StateError::new(
                record.request_id.clone(),
                StateErrorReason::BadState(err.to_string()),
            )
        })?;

        guard.push(record);

        Ok(())
    }
}
