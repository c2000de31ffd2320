//! JSON Schema for the handler's response.

use schemars::schema_for;
use serde_json::Value;

use crate::models::OutputEnvelope;

/// Schema of [`OutputEnvelope`] with the `$schema` meta key removed.
#[must_use]
pub fn output_schema() -> Value {
    let mut schema: Value = schema_for!(OutputEnvelope).into();
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
    }
    schema
}
