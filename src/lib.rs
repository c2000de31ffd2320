//! Lambda adapter that returns the authorizer claims and basic request
//! metadata (method, path, headers) of an API Gateway event.

pub mod adapter;
pub mod handler;
pub mod logging;
pub mod models;
pub mod schema;

pub use handler::{function_handler, handle};
pub use models::OutputEnvelope;
