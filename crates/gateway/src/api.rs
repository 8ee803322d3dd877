//! HTTP client for the client-directory REST endpoints.

use menuflow_core::client::{Client, NewClient};
use menuflow_core::types::ClientId;

/// HTTP client for the client-directory backend.
pub struct ClientApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the gateway layer.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend has no client with the given id (HTTP 404 on a keyed
    /// mutation).
    #[error("client {id} not found")]
    NotFound { id: ClientId },

    /// The backend returned any other non-2xx status. The status is not
    /// interpreted further.
    #[error("gateway error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ClientApi {
    /// Create a new API client.
    ///
    /// * `base_url` - versioned base URL, e.g. `http://localhost:8080/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Versioned base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List all clients. `GET /client`.
    pub async fn list_clients(&self) -> Result<Vec<Client>, GatewayError> {
        let response = self
            .client
            .get(format!("{}/client", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Create a client. `POST /client`; the backend assigns the id.
    pub async fn create_client(&self, client: &NewClient) -> Result<Client, GatewayError> {
        let response = self
            .client
            .post(format!("{}/client", self.base_url))
            .json(client)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Update a client by id. `PUT /client/{id}`.
    pub async fn update_client(
        &self,
        id: ClientId,
        client: &NewClient,
    ) -> Result<Client, GatewayError> {
        let response = self
            .client
            .put(format!("{}/client/{id}", self.base_url))
            .json(client)
            .send()
            .await?;
        Self::keyed(id, Self::parse_response(response).await)
    }

    /// Delete a client by id. `DELETE /client/{id}`.
    pub async fn delete_client(&self, id: ClientId) -> Result<(), GatewayError> {
        let response = self
            .client
            .delete(format!("{}/client/{id}", self.base_url))
            .send()
            .await?;
        Self::keyed(id, Self::check_status(response).await)
    }

    /// Deserialize a JSON response body after checking the status.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Gateway returned non-success status");
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }

    /// Check the status of a response with no interesting body.
    async fn check_status(response: reqwest::Response) -> Result<(), GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    /// Refine a 404 on a keyed mutation into [`GatewayError::NotFound`].
    fn keyed<T>(id: ClientId, result: Result<T, GatewayError>) -> Result<T, GatewayError> {
        match result {
            Err(GatewayError::Api { status: 404, .. }) => Err(GatewayError::NotFound { id }),
            other => other,
        }
    }
}
