use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Signing secret is empty or not configured")]
    MissingSecret,

    #[error("Unsupported signing algorithm: {0} (symmetric HMAC only)")]
    UnsupportedAlgorithm(String),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
