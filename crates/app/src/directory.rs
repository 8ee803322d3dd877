//! Gateway-backed client directory with a cached listing.
//!
//! Mutations are not optimistic: the cache is only invalidated after the
//! gateway confirms success, so a failed request leaves the local list
//! exactly as it was. Responses that arrive after the cache has been
//! invalidated again are dropped (last response to resolve wins).

use menuflow_core::client::{Client, NewClient};
use menuflow_core::types::ClientId;
use menuflow_gateway::{ClientApi, GatewayError};

use crate::error::AppResult;

/// Cached, server-synced collection of client records.
pub struct ClientDirectory {
    api: ClientApi,
    cache: Option<Vec<Client>>,
    loading: bool,
    /// Bumped on every invalidation; a fetch started under an older
    /// generation may not fill the cache.
    generation: u64,
}

impl ClientDirectory {
    pub fn new(api: ClientApi) -> Self {
        Self {
            api,
            cache: None,
            loading: false,
            generation: 0,
        }
    }

    /// Whether a listing fetch is currently outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The cached listing, if the cache is currently valid.
    pub fn cached(&self) -> Option<&[Client]> {
        self.cache.as_deref()
    }

    /// Current known clients, fetching from the gateway when the cache is
    /// invalid.
    pub async fn list(&mut self) -> Result<&[Client], GatewayError> {
        if self.cache.is_none() {
            self.refresh().await?;
        }
        Ok(self.cache.as_deref().unwrap_or_default())
    }

    /// Fetch the listing from the gateway.
    ///
    /// If the cache was invalidated while the request was in flight, the
    /// response is stale and is dropped instead of applied.
    pub async fn refresh(&mut self) -> Result<(), GatewayError> {
        let generation = self.generation;
        self.loading = true;
        let result = self.api.list_clients().await;
        self.loading = false;

        let rows = result?;
        if self.generation == generation {
            self.cache = Some(rows);
        } else {
            tracing::debug!("Dropping stale client listing response");
        }
        Ok(())
    }

    /// Create a client. Validates the form first; on gateway success the
    /// cache is invalidated so the next listing reflects the addition.
    pub async fn create(&mut self, form: &NewClient) -> AppResult<Client> {
        form.validate()?;
        let created = self.api.create_client(form).await?;
        tracing::info!(client_id = ?created.id, name = %created.name, "Client created");
        self.invalidate();
        Ok(created)
    }

    /// Update a client by id. Same contract as [`create`](Self::create);
    /// fails with [`GatewayError::NotFound`] if the id is unknown
    /// server-side.
    pub async fn update(&mut self, id: ClientId, form: &NewClient) -> AppResult<Client> {
        form.validate()?;
        let updated = self.api.update_client(id, form).await?;
        tracing::info!(client_id = id, "Client updated");
        self.invalidate();
        Ok(updated)
    }

    /// Delete a client by id.
    pub async fn delete(&mut self, id: ClientId) -> AppResult<()> {
        self.api.delete_client(id).await?;
        tracing::info!(client_id = id, "Client deleted");
        self.invalidate();
        Ok(())
    }

    /// Drop the cached listing; the next [`list`](Self::list) refetches.
    pub fn invalidate(&mut self) {
        self.cache = None;
        self.generation += 1;
    }
}
