//! Item models.

use std::path::Path;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Processing state of a minted item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    /// Mint accepted and still being processed on-chain
    #[default]
    Processing,
    /// Any status this client does not know about yet
    #[serde(untagged)]
    Other(String),
}

/// A name/value trait attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAttribute {
    /// Attribute name
    pub name: String,
    /// Attribute value
    pub value: String,
}

impl ItemAttribute {
    /// Create an attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Current owner of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOwner {
    /// Owner display name
    #[serde(default)]
    pub nickname: String,
    /// Owner wallet address
    pub wallet_address: String,
}

/// An item minted in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Numeric item ID
    pub id: u64,
    /// On-chain object ID, empty until the mint lands
    #[serde(default)]
    pub object_id: String,
    /// Item name
    pub name: String,
    /// Item description
    #[serde(default)]
    pub description: String,
    /// NFT serial number, assigned once the mint completes
    #[serde(default)]
    pub nft_number: Option<u64>,
    /// Image URL
    #[serde(default)]
    pub item_image: String,
    /// Number of copies
    pub quantity: u64,
    /// Item traits
    #[serde(default)]
    pub attributes: Vec<ItemAttribute>,
    /// Current owner, absent until the mint completes
    #[serde(default)]
    pub owner: Option<ItemOwner>,
    /// Processing state, [`ItemStatus::Processing`] when not reported
    #[serde(default)]
    pub status: ItemStatus,
    /// When the item was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the item was last updated
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Parameters for minting an item.
///
/// # Example
///
/// ```
/// use fortem_rs::models::{CreateItemParams, ItemAttribute};
///
/// let params = CreateItemParams::new("Sword", 1, "REDEEM-001", "0xrecipient")
///     .with_description("A shiny sword")
///     .with_attribute(ItemAttribute::new("rarity", "epic"));
/// assert_eq!(params.attributes.as_ref().map(Vec::len), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemParams {
    /// Item name
    pub name: String,
    /// Number of copies to mint
    pub quantity: u64,
    /// Code the recipient uses to redeem the item
    pub redeem_code: String,
    /// Item description
    pub description: String,
    /// Wallet that receives the item
    pub recipient_address: String,
    /// Image URL, typically from [`ImageUploadResponse`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_image: Option<String>,
    /// Item traits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<ItemAttribute>>,
}

impl CreateItemParams {
    /// Create parameters with the required fields and an empty description.
    pub fn new(
        name: impl Into<String>,
        quantity: u64,
        redeem_code: impl Into<String>,
        recipient_address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            redeem_code: redeem_code.into(),
            description: String::new(),
            recipient_address: recipient_address.into(),
            item_image: None,
            attributes: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL.
    pub fn with_item_image(mut self, url: impl Into<String>) -> Self {
        self.item_image = Some(url.into());
        self
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, attribute: ItemAttribute) -> Self {
        self.attributes.get_or_insert_with(Vec::new).push(attribute);
        self
    }
}

/// Result of an image upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadResponse {
    /// URL of the stored image
    pub item_image: String,
}

/// An image file to upload for an item.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// File name sent with the multipart part
    pub file_name: String,
    /// MIME type, left to the server to sniff when absent
    pub content_type: Option<String>,
    /// Raw file contents
    pub bytes: Bytes,
}

impl ImageUpload {
    /// Create an upload from in-memory bytes.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_image_mime(&file_name).map(String::from);
        Self {
            file_name,
            content_type,
            bytes: bytes.into(),
        }
    }

    /// Read an upload from disk, inferring the MIME type from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if the file
    /// cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            crate::Error::InvalidInput(format!("cannot read {}: {}", path.display(), e))
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }

    /// Override the MIME type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

fn guess_image_mime(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> serde_json::Value {
        serde_json::json!({
            "id": 1,
            "objectId": "item-obj-1",
            "name": "Test Item",
            "description": "A test item",
            "nftNumber": 100,
            "itemImage": "https://example.com/item.png",
            "quantity": 1,
            "attributes": [{ "name": "color", "value": "blue" }],
            "owner": { "nickname": "owner1", "walletAddress": "0xowner" },
            "status": "PROCESSING",
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-01T00:00:00Z"
        })
    }

    #[test]
    fn test_item_deserialize() {
        let item: Item = serde_json::from_value(sample_item()).unwrap();
        assert_eq!(item.nft_number, Some(100));
        assert_eq!(item.status, ItemStatus::Processing);
        assert_eq!(item.attributes, vec![ItemAttribute::new("color", "blue")]);
        assert_eq!(item.owner.unwrap().wallet_address, "0xowner");
    }

    #[test]
    fn test_processing_item_with_sparse_fields() {
        let json = serde_json::json!({
            "id": 7,
            "name": "Pending",
            "quantity": 1
        });
        let item: Item = serde_json::from_value(json).unwrap();
        assert_eq!(item.object_id, "");
        assert_eq!(item.nft_number, None);
        assert_eq!(item.status, ItemStatus::Processing);
        assert!(item.created_at.is_none());
        assert!(item.owner.is_none());
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let mut json = sample_item();
        json["status"] = serde_json::json!("REDEEMED");
        let item: Item = serde_json::from_value(json).unwrap();
        assert_eq!(item.status, ItemStatus::Other("REDEEMED".to_string()));
        assert_eq!(serde_json::to_value(&item.status).unwrap(), "REDEEMED");
    }

    #[test]
    fn test_create_item_params_wire_format() {
        let params = CreateItemParams::new("Item", 1, "CODE", "0xrecipient").with_description("Desc");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({
                "name": "Item",
                "quantity": 1,
                "redeemCode": "CODE",
                "description": "Desc",
                "recipientAddress": "0xrecipient"
            })
        );
    }

    #[test]
    fn test_image_upload_guesses_mime() {
        assert_eq!(ImageUpload::new("a.PNG", vec![1u8]).content_type.as_deref(), Some("image/png"));
        assert_eq!(ImageUpload::new("a.jpeg", vec![1u8]).content_type.as_deref(), Some("image/jpeg"));
        assert_eq!(ImageUpload::new("noext", vec![1u8]).content_type, None);
    }
}
