//! Response types for HTTP handlers.

mod errors;
mod monitors;
mod runs;

pub use errors::ErrorResponse;
pub use monitors::HealthResponse;
pub use runs::{AckResponse, RunsPage};
