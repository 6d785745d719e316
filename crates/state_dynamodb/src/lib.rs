use async_trait::async_trait;
use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::{PutItemError, PutItemOutput};
use aws_sdk_dynamodb::types::AttributeValue;
use model::LogRecord;
use state::StateErrorReason::{BackendFailure, BadState};
use state::{LogStore, StateError};
use std::collections::HashMap;

/// Writes records to a DynamoDB table keyed on `RequestId`.
pub struct DynamoDbLogStore {
    table_name: String,
    dynamodb_client: aws_sdk_dynamodb::Client,
}

impl DynamoDbLogStore {
    pub fn new(dynamodb_client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        DynamoDbLogStore {
            table_name: table_name.into(),
            dynamodb_client,
        }
    }

    async fn put_item(
        &self,
        item: HashMap<String, AttributeValue>,
    ) -> Result<PutItemOutput, SdkError<PutItemError, HttpResponse>> {
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
    }
}

#[async_trait]
impl LogStore for DynamoDbLogStore {
    async fn put_record(&self, record: LogRecord) -> Result<(), StateError> {
        let item: HashMap<String, AttributeValue> = serde_dynamo::to_item(&record)
            .map_err(|err| StateError::new(record.request_id.clone(), BadState(err.to_string())))?;

        self.put_item(item).await.map_err(|err| {
            StateError::new(record.request_id.clone(), BackendFailure(err.into()))
        })?;

        tracing::debug!(request_id = record.request_id, table = self.table_name, "Stored record");

        Ok(())
    }
}
