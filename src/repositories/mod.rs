pub mod collection;
pub mod item;

pub use collection::CollectionRepository;
pub use item::ItemRepository;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::error::AppResult;

/// Base repository trait for operations shared by both entities
#[async_trait]
pub trait Repository<T>
where
    T: Send + Sync,
{
    /// Find entity by ID; None when no such row exists
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Option<T>>;

    /// Delete entity by ID; true when a row existed and was removed
    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<bool>;
}
