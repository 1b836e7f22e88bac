//! # Catalog Fetch Service
//!
//! One fixed endpoint: `GET <base_url>/MockSports/sports.json`, decoded as a
//! [`Catalog`]. Failures are returned exactly as the network layer produced
//! them, no wrapping and no retry.

use async_trait::async_trait;
use log::{info, warn};
use reqwest::Url;

use crate::core::model::Catalog;
use crate::network::{Json, NetworkError, NetworkManager, NetworkRequest};

pub const DEFAULT_BASE_URL: &str = "https://ios-kaizen.github.io/";
pub const CATALOG_PATH: &str = "MockSports/sports.json";

#[async_trait]
pub trait EventsApi: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Catalog, NetworkError>;
}

pub struct EventsApiService {
    network: NetworkManager,
    base_url: String,
    catalog_path: String,
}

impl EventsApiService {
    pub fn new(network: NetworkManager, base_url: impl Into<String>) -> Self {
        Self {
            network,
            base_url: base_url.into(),
            catalog_path: CATALOG_PATH.to_string(),
        }
    }

    pub fn with_catalog_path(mut self, path: impl Into<String>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Joins base and path. A base without a trailing slash still keeps its
    /// last segment.
    pub fn catalog_url(&self) -> Result<Url, NetworkError> {
        let base = if self.base_url.ends_with('/') {
            Url::parse(&self.base_url)
        } else {
            Url::parse(&format!("{}/", self.base_url))
        }
        .map_err(|_| NetworkError::InvalidUrl)?;

        if base.cannot_be_a_base() {
            return Err(NetworkError::InvalidUrl);
        }
        base.join(self.catalog_path.trim_start_matches('/'))
            .map_err(|_| NetworkError::InvalidUrl)
    }
}

#[async_trait]
impl EventsApi for EventsApiService {
    async fn fetch_catalog(&self) -> Result<Catalog, NetworkError> {
        let url = match self.catalog_url() {
            Ok(url) => url,
            Err(e) => {
                warn!("fetch_catalog: bad base URL {:?}", self.base_url);
                return Err(e);
            }
        };

        let request = NetworkRequest::new(url);
        match self.network.base_request::<Json<Catalog>>(&request).await {
            Ok(Json(catalog)) => {
                info!("Fetched catalog: {} sports", catalog.len());
                Ok(catalog)
            }
            Err(e) => {
                warn!("fetch_catalog failed: {}", e);
                Err(e)
            }
        }
    }
}
