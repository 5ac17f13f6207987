//! Request types for HTTP handlers.

mod paths;
mod runs;

pub use paths::{RunPathParams, WorkflowPathParams};
pub use runs::{PageQuery, SubmitRunRequest};
