//! Error types for authentication operations

/// Errors that can occur while building or using credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A required credential field was empty
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// The API secret could not be used as an HMAC key
    #[error("Invalid secret: {0}")]
    InvalidSecret(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
