use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entity::item::{self, ActiveModel, Column, Entity as ItemEntity};
use crate::error::{AppError, AppResult};
use crate::models::{decode_gallery, price_to_decimal, price_to_f64};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repositories::{CollectionRepository, Repository};

/// Item repository for database operations
pub struct ItemRepository;

#[async_trait]
impl Repository<Item> for ItemRepository {
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Option<Item>> {
        let model = ItemEntity::find_by_id(id).one(db).await?;

        Ok(model.map(Into::into))
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<bool> {
        let result = ItemEntity::delete_by_id(id).exec(db).await?;

        Ok(result.rows_affected > 0)
    }
}

impl ItemRepository {
    /// Create a new item after verifying its collection exists.
    /// The pre-check turns the common miss into a clear NotFound instead of
    /// a raw foreign-key violation; check and insert are not atomic, so the
    /// constraint still backstops the race where the collection disappears
    /// in between.
    pub async fn create(db: &DatabaseConnection, input: &CreateItem) -> AppResult<Item> {
        CollectionRepository::find_by_id(db, input.collection_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Collection with id {}", input.collection_id))
            })?;

        let price = price_to_decimal(input.price).ok_or_else(|| {
            AppError::Validation("Price is not a representable amount".to_string())
        })?;
        let gallery = serde_json::to_value(&input.gallery_image_urls)
            .map_err(|e| AppError::Validation(format!("Invalid gallery JSON: {}", e)))?;

        let model = ActiveModel {
            collection_id: Set(input.collection_id),
            price: Set(price),
            description: Set(input.description.clone()),
            main_image_url: Set(input.main_image_url.clone()),
            gallery_image_urls: Set(gallery),
            created_at: Set(time::OffsetDateTime::now_utc()),
            ..Default::default()
        };

        let result = model.insert(db).await?;
        Ok(result.into())
    }

    /// List all items owned by a collection, in store order.
    /// An unknown collection id yields the empty list; absence of rows and
    /// absence of the collection are indistinguishable here.
    pub async fn list_by_collection(
        db: &DatabaseConnection,
        collection_id: i32,
    ) -> AppResult<Vec<Item>> {
        let models = ItemEntity::find()
            .filter(Column::CollectionId.eq(collection_id))
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    /// Apply the supplied fields to an existing item.
    /// None when the id does not exist, and also when the input carries no
    /// fields; collections answer an empty update with the current record,
    /// items answer it with None.
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: &UpdateItem,
    ) -> AppResult<Option<Item>> {
        if input.is_empty() {
            return Ok(None);
        }

        let Some(model) = ItemEntity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();

        if let Some(collection_id) = input.collection_id {
            // reassignment trusts the foreign key; no existence pre-check here
            active.collection_id = Set(collection_id);
        }
        if let Some(new_price) = input.price {
            let price = price_to_decimal(new_price).ok_or_else(|| {
                AppError::Validation("Price is not a representable amount".to_string())
            })?;
            active.price = Set(price);
        }
        if let Some(description) = &input.description {
            active.description = Set(description.clone());
        }
        if let Some(main_image_url) = &input.main_image_url {
            active.main_image_url = Set(main_image_url.clone());
        }
        if let Some(gallery_image_urls) = &input.gallery_image_urls {
            let gallery = serde_json::to_value(gallery_image_urls)
                .map_err(|e| AppError::Validation(format!("Invalid gallery JSON: {}", e)))?;
            active.gallery_image_urls = Set(gallery);
        }

        let result = active.update(db).await?;
        Ok(Some(result.into()))
    }
}

// Conversion from SeaORM model to our domain model, coercing the stored
// decimal price and JSONB gallery into their API shapes
impl From<item::Model> for Item {
    fn from(m: item::Model) -> Self {
        Self {
            id: m.id,
            collection_id: m.collection_id,
            price: price_to_f64(m.price),
            description: m.description,
            main_image_url: m.main_image_url,
            gallery_image_urls: decode_gallery(m.gallery_image_urls),
            created_at: m.created_at,
        }
    }
}
