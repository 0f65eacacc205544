use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entity::collection::{self, ActiveModel, Entity as CollectionEntity};
use crate::entity::item::{Column as ItemColumn, Entity as ItemEntity};
use crate::error::AppResult;
use crate::models::{Collection, CollectionWithItems, CreateCollection, UpdateCollection};
use crate::repositories::Repository;

/// Collection repository for database operations
pub struct CollectionRepository;

#[async_trait]
impl Repository<Collection> for CollectionRepository {
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Option<Collection>> {
        let model = CollectionEntity::find_by_id(id).one(db).await?;

        Ok(model.map(Into::into))
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<bool> {
        // owned items go with the row through the store-level cascade
        let result = CollectionEntity::delete_by_id(id).exec(db).await?;

        Ok(result.rows_affected > 0)
    }
}

impl CollectionRepository {
    /// Create a new collection
    pub async fn create(
        db: &DatabaseConnection,
        input: &CreateCollection,
    ) -> AppResult<Collection> {
        let model = ActiveModel {
            name: Set(input.name.clone()),
            description: Set(input.description.clone()),
            main_image_url: Set(input.main_image_url.clone()),
            brand_name: Set(input.brand_name.clone()),
            created_at: Set(time::OffsetDateTime::now_utc()),
            ..Default::default()
        };

        let result = model.insert(db).await?;
        Ok(result.into())
    }

    /// List all collections in store order
    pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<Collection>> {
        let models = CollectionEntity::find().all(db).await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    /// Fetch a collection merged with its full item list.
    /// Two simple queries instead of a left join: parent first, then
    /// children, so a childless collection needs no null-row handling.
    pub async fn find_with_items(
        db: &DatabaseConnection,
        id: i32,
    ) -> AppResult<Option<CollectionWithItems>> {
        let Some(model) = CollectionEntity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let items = ItemEntity::find()
            .filter(ItemColumn::CollectionId.eq(id))
            .all(db)
            .await?;

        Ok(Some(CollectionWithItems {
            collection: model.into(),
            items: items.into_iter().map(|m| m.into()).collect(),
        }))
    }

    /// Apply the supplied fields to an existing collection.
    /// None when the id does not exist; an input with no fields answers
    /// with the current record unchanged (a no-op read, not an error).
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: &UpdateCollection,
    ) -> AppResult<Option<Collection>> {
        let Some(model) = CollectionEntity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        if input.is_empty() {
            return Ok(Some(model.into()));
        }

        let mut active: ActiveModel = model.into();

        if let Some(name) = &input.name {
            active.name = Set(name.clone());
        }
        if let Some(description) = &input.description {
            active.description = Set(description.clone());
        }
        if let Some(main_image_url) = &input.main_image_url {
            active.main_image_url = Set(main_image_url.clone());
        }
        if let Some(brand_name) = &input.brand_name {
            active.brand_name = Set(brand_name.clone());
        }

        let result = active.update(db).await?;
        Ok(Some(result.into()))
    }
}

// Conversion from SeaORM model to our domain model
impl From<collection::Model> for Collection {
    fn from(m: collection::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            main_image_url: m.main_image_url,
            brand_name: m.brand_name,
            created_at: m.created_at,
        }
    }
}
