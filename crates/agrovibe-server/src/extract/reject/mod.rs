//! Extractors that reject with the API's JSON error shape.

mod json;
mod path;
mod query;

pub use json::Json;
pub use path::Path;
pub use query::Query;
