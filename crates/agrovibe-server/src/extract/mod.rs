//! HTTP request extractors with JSON error responses.
//!
//! Drop-in replacements for the stock axum extractors whose rejections
//! serialize to the `{"error": ...}` object the rest of the API speaks,
//! instead of axum's plain-text defaults. All of them carry the OpenAPI
//! metadata of their wrapped counterpart.

mod reject;

pub use crate::extract::reject::{Json, Path, Query};
