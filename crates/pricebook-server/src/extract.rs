use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor that never rejects.
///
/// Unreadable, empty, or malformed bodies decode to `T::default()` and the
/// handler proceeds. The content type is not checked.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                tracing::warn!(error = %rejection, "Failed to read request body, using defaults");
                return Ok(Self(T::default()));
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Self(value)),
            Err(e) => {
                tracing::warn!(error = %e, "Malformed JSON body, using defaults");
                Ok(Self(T::default()))
            }
        }
    }
}
