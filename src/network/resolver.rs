//! # Response Resolver
//!
//! Classifies a raw `(bytes, status)` pair into either a typed value or
//! exactly one [`NetworkError`] kind. Total: every input has one outcome.
//!
//! ```text
//! status ∉ 200..=299          → InvalidStatusCode(status)
//! String shape, bad UTF-8     → InvalidResponse
//! Json shape, bad syntax/shape→ JsonParsingFailure (an empty body included)
//! otherwise                   → Ok(value)
//! ```

use log::debug;
use serde::de::DeserializeOwned;

use super::error::NetworkError;
use super::transport::RawResponse;

/// The shape a caller expects a successful body to have.
pub trait ResponseShape: Sized {
    fn decode(bytes: &[u8]) -> Result<Self, NetworkError>;
}

/// Raw text: the body must be valid UTF-8.
impl ResponseShape for String {
    fn decode(bytes: &[u8]) -> Result<Self, NetworkError> {
        String::from_utf8(bytes.to_vec()).map_err(|_| NetworkError::InvalidResponse)
    }
}

/// Structured JSON decoded into `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct Json<T>(pub T);

impl<T: DeserializeOwned> ResponseShape for Json<T> {
    fn decode(bytes: &[u8]) -> Result<Self, NetworkError> {
        // The parser's own error stays here; callers only see the kind.
        serde_json::from_slice(bytes).map(Json).map_err(|e| {
            debug!("JSON decode failed: {}", e);
            NetworkError::JsonParsingFailure
        })
    }
}

pub fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

pub fn resolve<S: ResponseShape>(response: &RawResponse) -> Result<S, NetworkError> {
    if !is_success(response.status) {
        return Err(NetworkError::InvalidStatusCode(response.status));
    }
    S::decode(&response.bytes)
}
