use std::sync::Arc;

use super::error::NetworkError;
use super::request::NetworkRequest;
use super::resolver::{ResponseShape, resolve};
use super::transport::{ReqwestTransport, Transport};

/// Generic typed request layer: send through a [`Transport`], then resolve
/// the raw response into the shape the caller asked for.
#[derive(Clone)]
pub struct NetworkManager {
    transport: Arc<dyn Transport>,
}

impl NetworkManager {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Performs `request` and decodes the body as `S`.
    ///
    /// Use `String` for raw text or `Json<T>` for structured data. Failures
    /// come back as values; nothing here panics.
    pub async fn base_request<S: ResponseShape>(
        &self,
        request: &NetworkRequest,
    ) -> Result<S, NetworkError> {
        let response = self.transport.execute(request).await?;
        resolve(&response)
    }
}

impl Default for NetworkManager {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestTransport::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Json;
    use crate::network::transport::{RawResponse, TransportError};
    use crate::test_support::FakeTransport;
    use reqwest::Url;

    fn request() -> NetworkRequest {
        NetworkRequest::new(Url::parse("https://example.com/data.json").unwrap())
    }

    #[tokio::test]
    async fn test_base_request_decodes_json() {
        let transport = FakeTransport::new(vec![Ok(RawResponse::new(200, b"[1,2,3]".to_vec()))]);
        let manager = NetworkManager::new(Arc::new(transport));
        let Json(numbers) = manager.base_request::<Json<Vec<u32>>>(&request()).await.unwrap();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_base_request_passes_request_to_transport() {
        let transport = Arc::new(FakeTransport::new(vec![Ok(RawResponse::new(200, b"ok".to_vec()))]));
        let manager = NetworkManager::new(transport.clone());
        let text: String = manager.base_request(&request()).await.unwrap();
        assert_eq!(text, "ok");

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], request());
    }

    #[tokio::test]
    async fn test_transport_failure_is_returned_as_value() {
        let transport = FakeTransport::new(vec![Err(TransportError::Request("timed out".into()))]);
        let manager = NetworkManager::new(Arc::new(transport));
        let err = manager.base_request::<String>(&request()).await.unwrap_err();
        assert_eq!(err, NetworkError::RequestFailed("timed out".into()));
    }
}
