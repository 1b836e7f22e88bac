use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Every way a typed request can fail.
///
/// Each variant is a terminal classification: errors are never nested inside
/// one another. The human-readable text for each kind lives in
/// [`NetworkError::message`], which is the only place kinds become strings.
#[derive(Debug, Clone)]
pub enum NetworkError {
    InvalidUrl,
    Unauthorized,
    InvalidResponse,
    InvalidData,
    JsonParsingFailure,
    RequestFailed(String),
    InvalidStatusCode(u16),
    UnknownError(Arc<dyn Error + Send + Sync>),
    UnknownGenericError(String),
}

impl NetworkError {
    /// Wraps an arbitrary fault as `UnknownError`, keeping the cause.
    pub fn unknown<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        NetworkError::UnknownError(Arc::new(cause))
    }

    /// Fixed user-facing text for this error kind.
    pub fn message(&self) -> String {
        match self {
            NetworkError::InvalidUrl => "Invalid URL".to_string(),
            NetworkError::Unauthorized => "Unauthorized user".to_string(),
            NetworkError::InvalidResponse => "Invalid Response".to_string(),
            NetworkError::InvalidData => "Invalid data".to_string(),
            NetworkError::JsonParsingFailure => "Failed to parse JSON".to_string(),
            NetworkError::RequestFailed(detail) => format!("Request failed: {detail}"),
            NetworkError::InvalidStatusCode(code) => format!("Invalid status code: {code}"),
            NetworkError::UnknownError(cause) => {
                format!("An unknown error occured: {cause}")
            }
            NetworkError::UnknownGenericError(detail) => {
                format!("An generic unknown error occurred: {detail}")
            }
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl Error for NetworkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NetworkError::UnknownError(cause) => Some(cause.as_ref()),
            _ => None,
        }
    }
}

// Causes are opaque trait objects, so two `UnknownError`s are equal when
// their causes render the same.
impl PartialEq for NetworkError {
    fn eq(&self, other: &Self) -> bool {
        use NetworkError::*;
        match (self, other) {
            (InvalidUrl, InvalidUrl)
            | (Unauthorized, Unauthorized)
            | (InvalidResponse, InvalidResponse)
            | (InvalidData, InvalidData)
            | (JsonParsingFailure, JsonParsingFailure) => true,
            (RequestFailed(a), RequestFailed(b)) => a == b,
            (InvalidStatusCode(a), InvalidStatusCode(b)) => a == b,
            (UnknownError(a), UnknownError(b)) => a.to_string() == b.to_string(),
            (UnknownGenericError(a), UnknownGenericError(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed_per_kind() {
        assert_eq!(NetworkError::InvalidUrl.to_string(), "Invalid URL");
        assert_eq!(NetworkError::Unauthorized.to_string(), "Unauthorized user");
        assert_eq!(NetworkError::JsonParsingFailure.to_string(), "Failed to parse JSON");
        assert_eq!(
            NetworkError::InvalidStatusCode(404).to_string(),
            "Invalid status code: 404"
        );
        assert_eq!(
            NetworkError::RequestFailed("connection refused".into()).to_string(),
            "Request failed: connection refused"
        );
        assert_eq!(
            NetworkError::UnknownGenericError("request failed".into()).to_string(),
            "An generic unknown error occurred: request failed"
        );
    }

    #[test]
    fn test_unknown_error_keeps_cause() {
        let io = std::io::Error::other("socket closed");
        let err = NetworkError::unknown(io);
        assert_eq!(err.to_string(), "An unknown error occured: socket closed");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_equality_compares_payloads() {
        assert_eq!(NetworkError::InvalidStatusCode(500), NetworkError::InvalidStatusCode(500));
        assert_ne!(NetworkError::InvalidStatusCode(500), NetworkError::InvalidStatusCode(404));
        assert_ne!(NetworkError::InvalidData, NetworkError::InvalidResponse);
        assert_eq!(
            NetworkError::unknown(std::io::Error::other("x")),
            NetworkError::unknown(std::io::Error::other("x"))
        );
    }
}
