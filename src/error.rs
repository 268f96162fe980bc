//! Error types for lookups and client setup

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Why a weather lookup failed.
///
/// Travels inside actions, so it carries plain data instead of the
/// underlying transport error.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LookupError {
    /// No response reached us (connection refused, DNS, reset...)
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("request rejected: HTTP {status}")]
    Rejected { status: u16 },

    /// The body was not JSON or lacked the current weather fields
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Blank city text; never sent over the wire
    #[error("city name is empty")]
    EmptyQuery,
}

/// Errors building a [`crate::api::WeatherClient`]
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid endpoint URL '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("endpoint must use http or https, got '{0}'")]
    UnsupportedScheme(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}
