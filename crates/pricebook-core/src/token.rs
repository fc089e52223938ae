//! Mock login: a fixed credential pair exchanged for a short-lived HS256 token.
//!
//! The secret and credentials are compile-time constants. They are read-only
//! for the life of the process, so the issuer needs no locking.

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::models::Credentials;

pub const MOCK_USERNAME: &str = "user";
pub const MOCK_PASSWORD: &str = "password";
pub const SIGNING_SECRET: &[u8] = b"secret";
pub const TOKEN_TTL: Duration = Duration::from_secs(5 * 60);

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Token payload: only the expiry, as Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub exp: i64,
}

impl Claims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Validates the fixed credential pair and mints signed expiry claims.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Default for TokenIssuer {
    fn default() -> Self {
        Self::new(SIGNING_SECRET)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &ALGORITHM)
            .field("keys", &"<redacted>")
            .finish()
    }
}

impl TokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Exact, case-sensitive match of both fields against the mock pair.
    pub fn authenticate(&self, credentials: &Credentials) -> Result<(), AppError> {
        let username_ok = credentials
            .username
            .as_bytes()
            .ct_eq(MOCK_USERNAME.as_bytes());
        let password_ok = credentials
            .password
            .as_bytes()
            .ct_eq(MOCK_PASSWORD.as_bytes());

        if bool::from(username_ok & password_ok) {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }

    /// Sign a token expiring [`TOKEN_TTL`] from now.
    pub fn issue_token(&self) -> Result<String, AppError> {
        self.issue_token_at(Utc::now())
    }

    /// Sign a token expiring [`TOKEN_TTL`] after `now`.
    pub fn issue_token_at(&self, now: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims {
            exp: now.timestamp() + TOKEN_TTL.as_secs() as i64,
        };
        let token = jsonwebtoken::encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Authenticate, then issue a token.
    pub fn login(&self, credentials: &Credentials) -> Result<String, AppError> {
        match self.authenticate(credentials) {
            Ok(()) => {
                tracing::info!(username = %credentials.username, "Login succeeded");
                self.issue_token()
            }
            Err(e) => {
                tracing::warn!(username = %credentials.username, "Login rejected");
                Err(e)
            }
        }
    }

    /// Check the signature and expiry of `token` and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let data = jsonwebtoken::decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(ALGORITHM),
        )?;
        Ok(data.claims)
    }
}
