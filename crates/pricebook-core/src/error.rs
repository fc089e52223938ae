use thiserror::Error;

/// Application-wide error types for pricebook.
#[derive(Error, Debug)]
pub enum AppError {
    /// Supplied username/password pair does not match the fixed credentials.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Signing or verifying a token failed.
    #[error("Token error: {0}")]
    TokenError(String),

    /// Configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl AppError {
    /// Returns true if the caller caused this error (bad credentials, bad input).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidCredentials | AppError::SerializationError(_)
        )
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::TokenError(err.to_string())
    }
}
