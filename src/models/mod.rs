pub mod claims;
pub mod envelope;

pub use claims::Claims;
pub use envelope::{OutputEnvelope, RequestInfo};
