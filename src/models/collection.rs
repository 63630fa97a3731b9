//! Collection models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An NFT collection owned by the developer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Numeric collection ID
    pub id: u64,
    /// On-chain object ID
    #[serde(default)]
    pub object_id: String,
    /// Collection name
    pub name: String,
    /// Collection description
    #[serde(default)]
    pub description: String,
    /// Total traded volume
    #[serde(default)]
    pub trade_volume: f64,
    /// Number of items minted in the collection
    #[serde(default)]
    pub item_count: u64,
    /// When the collection was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the collection was last updated
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// External links shown on a collection page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionLink {
    /// Project website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Parameters for creating a collection.
///
/// # Example
///
/// ```
/// use fortem_rs::models::CreateCollectionParams;
///
/// let params = CreateCollectionParams::new("Genesis", "First drop")
///     .with_website("https://example.com");
/// assert_eq!(params.link.unwrap().website.as_deref(), Some("https://example.com"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCollectionParams {
    /// Collection name
    pub name: String,
    /// Collection description
    pub description: String,
    /// Optional external links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<CollectionLink>,
}

impl CreateCollectionParams {
    /// Create parameters with a name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            link: None,
        }
    }

    /// Set the project website link.
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.link.get_or_insert_with(CollectionLink::default).website = Some(website.into());
        self
    }
}
