//! Catalog backend talking to the WeWantWaste by-location API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use skipyard_core::model::SkipRecord;
use skipyard_core::ports::{CatalogPort, PortError};

/// Production endpoint serving skips for the Hinckley LE10 area.
const DEFAULT_ENDPOINT: &str =
    "https://app.wewantwaste.co.uk/api/skips/by-location?postcode=LE10&area=Hinckley";

/// Envelope wrapping the skip list on the wire.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    skips: Vec<SkipRecord>,
}

/// Catalog port backed by the WeWantWaste HTTP API.
pub struct WeWantWasteCatalog {
    client: Client,
    endpoint: String,
}

impl WeWantWasteCatalog {
    /// Create a catalog port against the production endpoint.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, DEFAULT_ENDPOINT)
    }

    /// Create a catalog port against a custom endpoint.
    #[must_use]
    pub fn with_endpoint<E: Into<String>>(client: Client, endpoint: E) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CatalogPort for WeWantWasteCatalog {
    async fn fetch(&self) -> Result<Vec<SkipRecord>, PortError> {
        let response = self.client.get(self.endpoint.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortError::Status(status));
        }

        let payload: CatalogResponse = response
            .json()
            .await
            .map_err(|err| PortError::MalformedPayload(err.to_string()))?;

        Ok(payload.skips)
    }
}
