//! Client error types

use thiserror::Error;

/// Generic message shown when the server gives no usable detail.
pub const NETWORK_ERROR_MESSAGE: &str = "Errore di rete.";

/// Client error type
///
/// Every variant renders to the human-readable text that ends up in a
/// status slot; nothing structured crosses into the presentation layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, refused connection, timeout)
    #[error("Errore di rete.")]
    Network(#[source] reqwest::Error),

    /// Non-success HTTP status, message taken from the body `detail` field
    /// when present
    #[error("{message}")]
    Api {
        status: http::StatusCode,
        message: String,
    },

    /// Success response whose body could not be interpreted
    #[error("Risposta non valida: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;
