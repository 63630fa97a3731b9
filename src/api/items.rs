//! Items service.

use std::sync::Arc;

use super::encode_segment;
use crate::client::{ClientInner, FormPart};
use crate::models::{
    CollectionId, CreateItemParams, FortemResponse, ImageUpload, ImageUploadResponse, Item,
    RedeemCode,
};
use crate::Result;

/// Multipart field carrying the uploaded image.
const IMAGE_FIELD: &str = "file";

/// Service for item operations.
///
/// # Example
///
/// ```no_run
/// use fortem_rs::{CollectionId, RedeemCode};
/// use fortem_rs::models::{CreateItemParams, ImageUpload};
///
/// # async fn example(client: fortem_rs::FortemClient) -> fortem_rs::Result<()> {
/// let collection = CollectionId::new(42);
///
/// let image = client
///     .items()
///     .upload_image(collection, ImageUpload::from_path("sword.png").await?)
///     .await?;
///
/// let params = CreateItemParams::new("Sword", 1, "REDEEM-001", "0xrecipient")
///     .with_item_image(image.data.item_image);
/// let item = client.items().create(collection, &params).await?;
///
/// let same = client.items().get(collection, &RedeemCode::new("REDEEM-001")).await?;
/// assert_eq!(item.data.id, same.data.id);
/// # Ok(())
/// # }
/// ```
pub struct ItemsService {
    inner: Arc<ClientInner>,
}

impl ItemsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get an item by its redeem code.
    pub async fn get(
        &self,
        collection_id: CollectionId,
        code: &RedeemCode,
    ) -> Result<FortemResponse<Item>> {
        self.inner
            .get(&format!(
                "/collections/{}/items/{}",
                collection_id,
                encode_segment(code.as_str())
            ))
            .await
    }

    /// Mint a new item in a collection.
    ///
    /// Minting consumes the access token, so the cached token is invalidated
    /// once the call succeeds.
    pub async fn create(
        &self,
        collection_id: CollectionId,
        params: &CreateItemParams,
    ) -> Result<FortemResponse<Item>> {
        let response = self
            .inner
            .post(&format!("/collections/{}/items", collection_id), params)
            .await?;
        self.inner.auth.invalidate().await;
        Ok(response)
    }

    /// Upload an item image.
    ///
    /// The image is sent as a `multipart/form-data` body with a single `file`
    /// field.
    pub async fn upload_image(
        &self,
        collection_id: CollectionId,
        image: ImageUpload,
    ) -> Result<FortemResponse<ImageUploadResponse>> {
        let part = FormPart {
            name: IMAGE_FIELD.to_string(),
            file_name: Some(image.file_name),
            content_type: image.content_type,
            bytes: image.bytes,
        };
        self.inner
            .put_multipart(
                &format!("/collections/{}/items/image-upload", collection_id),
                vec![part],
            )
            .await
    }
}
