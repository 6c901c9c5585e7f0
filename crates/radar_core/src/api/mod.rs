//! JSON API surface
//!
//! String-in/string-out endpoints for embedding in an HTTP handler or any
//! other host. Every endpoint returns a serialized [`ApiResponse`] envelope.

pub mod stats_json;

pub use stats_json::{
    compare_stats_json, normalize_stats_json, ApiError, ApiResponse, CompareRequest,
    CompareResponse, DiffHighlight, NormalizeRequest, API_VERSION,
};
