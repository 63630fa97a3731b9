//! Collections service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Collection, CreateCollectionParams, FortemResponse};
use crate::Result;

/// Service for collection operations.
///
/// # Example
///
/// ```no_run
/// use fortem_rs::models::CreateCollectionParams;
///
/// # async fn example(client: fortem_rs::FortemClient) -> fortem_rs::Result<()> {
/// let collections = client.collections().list().await?;
///
/// let created = client
///     .collections()
///     .create(&CreateCollectionParams::new("Genesis", "First drop"))
///     .await?;
/// println!("created collection {}", created.data.id);
/// # Ok(())
/// # }
/// ```
pub struct CollectionsService {
    inner: Arc<ClientInner>,
}

impl CollectionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all collections of the developer account.
    pub async fn list(&self) -> Result<FortemResponse<Vec<Collection>>> {
        self.inner.get("/collections").await
    }

    /// Create a new collection.
    ///
    /// Creating a collection is a minting operation that consumes the access
    /// token, so the cached token is invalidated once the call succeeds.
    pub async fn create(
        &self,
        params: &CreateCollectionParams,
    ) -> Result<FortemResponse<Collection>> {
        let response = self.inner.post("/collections", params).await?;
        self.inner.auth.invalidate().await;
        Ok(response)
    }
}
