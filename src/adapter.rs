//! Maps an API Gateway event onto an [`OutputEnvelope`].
//!
//! Every lookup defaults on its own: a missing `requestContext`, `authorizer`
//! or `claims` level yields empty claims, a missing `httpMethod` or `path`
//! yields `None`, missing `headers` yields an empty mapping. Explicit `null`
//! counts as missing. A value of the wrong JSON type is replaced by the
//! default and reported to the logger. Extraction never fails.

use serde_json::{Map, Value};

use crate::logging::InvocationLogger;
use crate::models::{Claims, OutputEnvelope, RequestInfo};

pub const CLAIMS_POINTER: &str = "/requestContext/authorizer/claims";
pub const METHOD_POINTER: &str = "/httpMethod";
pub const PATH_POINTER: &str = "/path";
pub const HEADERS_POINTER: &str = "/headers";

/// Extracts claims and request metadata from `event`.
///
/// The extracted values are moved out of `event`, which is consumed.
/// A non-object event produces the default envelope.
#[must_use]
pub fn adapt_event<L: InvocationLogger>(mut event: Value, logger: &L) -> OutputEnvelope {
    logger.inbound_event(&event);

    if !event.is_object() {
        logger.unexpected_shape("", "object", &event);
        event = Value::Object(Map::new());
    }

    let claims = Claims::new(take_object(&mut event, CLAIMS_POINTER, logger));
    logger.claims(&claims);

    let request_info = RequestInfo {
        method: take_string(&mut event, METHOD_POINTER, logger),
        path: take_string(&mut event, PATH_POINTER, logger),
        headers: take_object(&mut event, HEADERS_POINTER, logger),
    };
    logger.request_info(&request_info);

    OutputEnvelope {
        claims,
        request_info,
    }
}

fn take_object<L: InvocationLogger>(
    event: &mut Value,
    pointer: &str,
    logger: &L,
) -> Map<String, Value> {
    match event.pointer_mut(pointer).map(Value::take) {
        Some(Value::Object(map)) => map,
        None | Some(Value::Null) => Map::new(),
        Some(other) => {
            logger.unexpected_shape(pointer, "object", &other);
            Map::new()
        }
    }
}

fn take_string<L: InvocationLogger>(
    event: &mut Value,
    pointer: &str,
    logger: &L,
) -> Option<String> {
    match event.pointer_mut(pointer).map(Value::take) {
        Some(Value::String(s)) => Some(s),
        None | Some(Value::Null) => None,
        Some(other) => {
            logger.unexpected_shape(pointer, "string", &other);
            None
        }
    }
}
