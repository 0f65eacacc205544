use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::Item;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub main_image_url: String,
    pub brand_name: String,
    pub created_at: OffsetDateTime,
}

/// A collection merged with its full item list, built by the detail fetch.
/// Never persisted; `items` is empty (not null) for a childless collection.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionWithItems {
    #[serde(flatten)]
    pub collection: Collection,
    pub items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCollection {
    pub name: String,
    pub description: String,
    pub main_image_url: String,
    pub brand_name: String,
}

/// Partial update: absent fields are left untouched in the store write.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCollection {
    pub name: Option<String>,
    pub description: Option<String>,
    pub main_image_url: Option<String>,
    pub brand_name: Option<String>,
}

impl UpdateCollection {
    /// True when no field beyond the id was supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.main_image_url.is_none()
            && self.brand_name.is_none()
    }
}
