use lambda_runtime::tracing::{Instrument, Span};
use lambda_runtime::{LambdaEvent, tracing};
use model::{Error, IncomingRequest, OutgoingResponse};

pub mod config;
pub mod intent;
pub mod runtime;

pub use config::{ConfigError, HandlerConfig};
pub use intent::Intent;
pub use runtime::HandlerRuntime;

pub type HandlerLambdaEvent = LambdaEvent<IncomingRequest>;

/// Handle a single Lambda invocation, designed for use with `lambda_runtime::run()`
///
/// ```ignore
/// let runtime: &HandlerRuntime = &runtime;
///
/// lambda_runtime::run(service_fn(move |event: HandlerLambdaEvent| async move {
///     handle_event(runtime, event).await
/// }))
/// .await
/// ```
pub async fn handle_event(
    runtime: &HandlerRuntime,
    event: HandlerLambdaEvent,
) -> Result<OutgoingResponse, Error> {
    let (request, context) = event.into_parts();

    let invocation_span: Span = tracing::span!(
        tracing::Level::INFO,
        "Invocation",
        lambda_request_id = context.request_id.as_str()
    );

    runtime.handle(request).instrument(invocation_span).await
}
