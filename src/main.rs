use aws_config::BehaviorVersion;
use handler::{HandlerConfig, HandlerLambdaEvent, HandlerRuntime, handle_event};
use lambda_runtime::{service_fn, tracing};
use model::Error;
use state_dynamodb::DynamoDbLogStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Fail the cold start before taking any requests
    let config: HandlerConfig = HandlerConfig::from_env()?;
    tracing::info!("Starting with {:?}", config);

    let dynamodb_client: aws_sdk_dynamodb::Client =
        aws_sdk_dynamodb::Client::new(&aws_config::load_defaults(BehaviorVersion::latest()).await);
    let log_store = DynamoDbLogStore::new(dynamodb_client, config.logs_table_name.clone());

    let runtime: HandlerRuntime =
        HandlerRuntime::from_config(&config, Arc::new(log_store), reqwest::Client::new());
    let runtime: &HandlerRuntime = &runtime;

    lambda_runtime::run(service_fn(move |event: HandlerLambdaEvent| async move {
        handle_event(runtime, event).await
    }))
    .await
}
