use uuid::Uuid;

use window_catalog::models::{Collection, CreateCollection, CreateItem, Item};
use window_catalog::repositories::{CollectionRepository, ItemRepository};
use window_catalog::state::AppState;

/// Factory for creating test data
#[allow(dead_code)]
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Create a test collection with a unique name
    pub async fn create_collection(&self) -> Collection {
        let name = format!("Test Collection {}", Uuid::new_v4());
        self.create_collection_with_name(&name).await
    }

    /// Create a test collection with a specific name
    pub async fn create_collection_with_name(&self, name: &str) -> Collection {
        let input = CreateCollection {
            name: name.to_string(),
            description: "Triple-glazed showcase line".to_string(),
            main_image_url: "https://example.com/collections/main.jpg".to_string(),
            brand_name: "Fenstra".to_string(),
        };

        CollectionRepository::create(&self.state.db, &input)
            .await
            .unwrap()
    }

    /// Create a test item in the given collection
    pub async fn create_item(&self, collection_id: i32) -> Item {
        self.create_item_with_price(collection_id, 499.99).await
    }

    /// Create a test item with a specific price
    pub async fn create_item_with_price(&self, collection_id: i32, price: f64) -> Item {
        let input = CreateItem {
            collection_id,
            price,
            description: format!("Test window {}", Uuid::new_v4()),
            main_image_url: "https://example.com/windows/main.jpg".to_string(),
            gallery_image_urls: vec![
                "https://example.com/windows/angle.jpg".to_string(),
                "https://example.com/windows/detail.jpg".to_string(),
            ],
        };

        ItemRepository::create(&self.state.db, &input)
            .await
            .unwrap()
    }
}
