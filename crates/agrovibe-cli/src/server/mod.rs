//! HTTP server startup with graceful lifecycle management.

mod error;
mod http_server;
mod shutdown;

pub use error::{ServerError, ServerResult};
pub use http_server::serve;
pub(crate) use shutdown::shutdown_signal;
