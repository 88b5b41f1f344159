//! # REST Transport
//!
//! The [`Transport`] trait is the seam between the record stores and the
//! remote service: one collection per record type, with list, create,
//! update and delete. [`ApiClient`] implements it over HTTP with `reqwest`.
//!
//! Requests carry no timeout and are never retried: a hung request stays
//! pending, a failed one is reported once.

use std::future::Future;

use clinica_core::{RecordId, Resource};
use reqwest::{Client, Response, Url};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

// ============================================================================
// Transport Trait
// ============================================================================

/// Remote operations on a record collection
pub trait Transport {
    /// `GET {collection}`: every record, in server order
    fn fetch_all<E: Resource>(&self) -> impl Future<Output = ClientResult<Vec<E>>>;

    /// `POST {collection}` with the record minus its id
    fn create<E: Resource>(&self, payload: &E::Payload) -> impl Future<Output = ClientResult<()>>;

    /// `PUT {collection}/{id}` with the full replacement record
    fn update<E: Resource>(
        &self,
        id: RecordId,
        payload: &E::Payload,
    ) -> impl Future<Output = ClientResult<()>>;

    /// `DELETE {collection}/{id}`
    fn delete<E: Resource>(&self, id: RecordId) -> impl Future<Output = ClientResult<()>>;
}

// ============================================================================
// API Client
// ============================================================================

/// HTTP client for the clinic's REST API.
///
/// Response bodies of create, update and delete are not interpreted; any
/// 2xx status counts as success.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying reqwest HTTP client.
    client: Client,
    /// Base URL of the backend API, ending in `/`.
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the configured service.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::Url(format!("{path}: {e}")))
    }

    /// Turn a non-success response into an error.
    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

impl Transport for ApiClient {
    async fn fetch_all<E: Resource>(&self) -> ClientResult<Vec<E>> {
        let url = self.url(E::collection_path())?;
        tracing::debug!(%url, "GET");

        let response = Self::check(self.client.get(url).send().await?).await?;
        response
            .json::<Vec<E>>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn create<E: Resource>(&self, payload: &E::Payload) -> ClientResult<()> {
        let url = self.url(E::collection_path())?;
        tracing::debug!(%url, "POST");

        Self::check(self.client.post(url).json(payload).send().await?).await?;
        Ok(())
    }

    async fn update<E: Resource>(&self, id: RecordId, payload: &E::Payload) -> ClientResult<()> {
        let url = self.url(&E::record_path(id))?;
        tracing::debug!(%url, "PUT");

        Self::check(self.client.put(url).json(payload).send().await?).await?;
        Ok(())
    }

    async fn delete<E: Resource>(&self, id: RecordId) -> ClientResult<()> {
        let url = self.url(&E::record_path(id))?;
        tracing::debug!(%url, "DELETE");

        Self::check(self.client.delete(url).send().await?).await?;
        Ok(())
    }
}
