use thiserror::Error;

/// Errors returned by the keyword planner client.
#[derive(Debug, Error)]
pub enum KeywordsError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("Google Ads API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The OAuth refresh-token exchange was rejected.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown location '{0}'")]
    UnknownLocation(String),

    #[error("invalid customer ID '{0}': expected 10 digits, dashes allowed")]
    InvalidCustomerId(String),

    #[error("pagination limit reached: exceeded {max_pages} pages of keyword ideas")]
    PaginationLimit { max_pages: usize },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
