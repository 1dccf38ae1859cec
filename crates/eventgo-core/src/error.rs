// ── Core error types ──
//
// User-facing errors from eventgo-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<eventgo_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the events service at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("Conversion error: {message}")]
    Conversion { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<eventgo_api::Error> for CoreError {
    fn from(err: eventgo_api::Error) -> Self {
        match err {
            eventgo_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.to_string())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            eventgo_api::Error::InvalidBaseUrl(e) => CoreError::Config {
                message: format!("Invalid base URL: {e}"),
            },
            eventgo_api::Error::NotFound { resource, id } => CoreError::NotFound {
                entity: resource.to_owned(),
                id: id.to_string(),
            },
            eventgo_api::Error::Api { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            eventgo_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
