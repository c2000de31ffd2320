//! Diagnostic logging for the event adapter.
//!
//! The adapter core never writes logs itself; it reports what it saw through
//! an [`InvocationLogger`]. Production uses [`TracingLogger`], which emits
//! `tracing` events that the Lambda runtime's subscriber ships to `CloudWatch`.

use lambda_runtime::tracing::{debug, info, warn};
use serde_json::Value;

use crate::models::{Claims, RequestInfo};

/// Observer for the three stages of an invocation plus shape problems.
#[cfg_attr(test, mockall::automock)]
pub trait InvocationLogger {
    /// Called once with the raw inbound event, before extraction.
    fn inbound_event(&self, event: &Value);

    /// Called with the claims that will be returned.
    fn claims(&self, claims: &Claims);

    /// Called with the assembled request info.
    fn request_info(&self, request_info: &RequestInfo);

    /// A value was present at `pointer` but was not of the `expected` JSON type,
    /// so the default was used instead.
    fn unexpected_shape(&self, pointer: &str, expected: &str, found: &Value);
}

/// [`InvocationLogger`] backed by `tracing`.
///
/// Full payloads (event body, claim values, headers) and caller identifiers are
/// only logged at `debug`; `info` carries sizes, counts, method and path.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl InvocationLogger for TracingLogger {
    fn inbound_event(&self, event: &Value) {
        info!(event_size = event.to_string().len(), "Received event");
        debug!(event = %event, "Inbound event payload");
    }

    fn claims(&self, claims: &Claims) {
        info!(claim_count = claims.len(), "Extracted authorizer claims");
        debug!(
            subject = claims.subject().unwrap_or("-"),
            username = claims.username().unwrap_or("-"),
            claims = ?claims,
            "Authorizer claims"
        );
    }

    fn request_info(&self, request_info: &RequestInfo) {
        info!(
            method = request_info.method.as_deref().unwrap_or("-"),
            path = request_info.path.as_deref().unwrap_or("-"),
            header_count = request_info.headers.len(),
            "Assembled request info"
        );
        debug!(headers = ?request_info.headers, "Request headers");
    }

    fn unexpected_shape(&self, pointer: &str, expected: &str, found: &Value) {
        warn!(
            pointer = %pointer,
            expected = expected,
            found = json_kind(found),
            "Unexpected value in event, using default"
        );
    }
}

/// Name of the JSON type of `value`, for log fields.
#[must_use]
pub const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::{Map, json};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Runs `f` with a subscriber capped at `level` and returns what it logged.
    fn capture(level: tracing::Level, f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    fn cognito_claims() -> Claims {
        serde_json::from_value(json!({
            "sub": "7d8ca528-4931-4254-9273-ea5ee853f271",
            "cognito:username": "minji",
            "email": "minji@example.com"
        }))
        .unwrap()
    }

    #[test]
    fn test_claims_at_info_level_carry_no_identifiers() {
        let output = capture(tracing::Level::INFO, || TracingLogger.claims(&cognito_claims()));

        assert!(output.contains("claim_count=3"), "unexpected output: {output}");
        assert!(!output.contains("7d8ca528"));
        assert!(!output.contains("minji"));
    }

    #[test]
    fn test_claims_at_debug_level_include_identifiers() {
        let output = capture(tracing::Level::DEBUG, || TracingLogger.claims(&cognito_claims()));

        assert!(output.contains("subject="), "unexpected output: {output}");
        assert!(output.contains("7d8ca528-4931-4254-9273-ea5ee853f271"));
        assert!(output.contains("minji"));
    }

    #[test]
    fn test_request_info_at_info_level_omits_headers() {
        let mut headers = Map::new();
        headers.insert("Authorization".to_string(), json!("eyJraWQiOi"));
        let info = RequestInfo {
            method: Some("GET".to_string()),
            path: Some("/profile".to_string()),
            headers,
        };

        let output = capture(tracing::Level::INFO, || TracingLogger.request_info(&info));

        assert!(output.contains("method="), "unexpected output: {output}");
        assert!(output.contains("/profile"));
        assert!(output.contains("header_count=1"));
        assert!(!output.contains("eyJraWQiOi"));
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&Value::Null), "null");
        assert_eq!(json_kind(&json!(true)), "boolean");
        assert_eq!(json_kind(&json!(1.5)), "number");
        assert_eq!(json_kind(&json!("GET")), "string");
        assert_eq!(json_kind(&json!([])), "array");
        assert_eq!(json_kind(&json!({})), "object");
    }

    #[test]
    fn test_tracing_logger_accepts_every_stage() {
        // No subscriber installed: this only checks the calls don't panic on odd input.
        let logger = TracingLogger;
        logger.inbound_event(&json!([1, 2, 3]));
        logger.claims(&Claims::default());
        logger.request_info(&RequestInfo::default());
        logger.unexpected_shape("/headers", "object", &json!("oops"));
    }
}
