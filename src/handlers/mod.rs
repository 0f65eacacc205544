pub mod collection;
pub mod common;
pub mod health;
pub mod item;

pub use collection::{
    create_collection, delete_collection, get_collection_by_id, get_collections,
    update_collection, CollectionResponse, CollectionWithItemsResponse, CreateCollectionRequest,
    UpdateCollectionRequest,
};
pub use common::{
    validate_optional, validate_optional_url, validate_positive, validate_required, validate_url,
    validate_url_list, CollectionIdParams, DeleteRequest, IdParams,
};
pub use health::{healthcheck, HealthcheckResponse};
pub use item::{
    create_item, delete_item, get_items_by_collection, update_item, CreateItemRequest,
    ItemResponse, UpdateItemRequest,
};
