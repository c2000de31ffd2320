use lambda_runtime::tracing::info_span;
use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;

use crate::adapter::adapt_event;
use crate::logging::TracingLogger;
use crate::models::OutputEnvelope;

/// Adapts one event under a span carrying the invocation's request id.
///
/// The context is otherwise unused.
#[must_use]
pub fn handle(event: Value, context: &Context) -> OutputEnvelope {
    let span = info_span!("adapt_event", request_id = %context.request_id);
    let _guard = span.enter();

    adapt_event(event, &TracingLogger)
}

/// Lambda event handler. Returns the claims and request info found in the event.
/// Logs full event when `RUST_LOG=debug/trace`, only `event_size` in production.
///
/// # Errors
///
/// Never returns an error: missing or malformed fields are replaced by defaults.
// `service_fn` needs a future even though nothing here awaits.
#[allow(clippy::unused_async)]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<OutputEnvelope, Error> {
    let (payload, context) = event.into_parts();
    Ok(handle(payload, &context))
}
