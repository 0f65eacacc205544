use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::{
    validate_optional, validate_optional_url, validate_positive, validate_required, validate_url,
    validate_url_list, CollectionIdParams, DeleteRequest,
};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repositories::{ItemRepository, Repository};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub collection_id: i32,
    pub price: f64,
    pub description: String,
    pub main_image_url: String,
    #[serde(default)]
    pub gallery_image_urls: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub id: i32,
    pub collection_id: Option<i32>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub main_image_url: Option<String>,
    pub gallery_image_urls: Option<Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    pub id: i32,
    pub collection_id: i32,
    pub price: f64,
    pub description: String,
    pub main_image_url: String,
    pub gallery_image_urls: Vec<String>,
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
}

impl From<Item> for ItemResponse {
    fn from(i: Item) -> Self {
        Self {
            id: i.id,
            collection_id: i.collection_id,
            price: i.price,
            description: i.description,
            main_image_url: i.main_image_url,
            gallery_image_urls: i.gallery_image_urls,
            created_at: i.created_at,
        }
    }
}

// ============ Handlers ============

/// Create a new item in a collection
#[utoipa::path(
    post,
    path = "/rpc/createItem",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Item created", body = ItemResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Collection not found")
    ),
    tag = "Items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateItemRequest>,
) -> AppResult<Json<ItemResponse>> {
    validate_positive(payload.price, "Price")?;
    validate_required(&payload.description, "Description")?;
    validate_url(&payload.main_image_url, "Main image URL")?;
    validate_url_list(&payload.gallery_image_urls, "Gallery image URL")?;

    let create_item = CreateItem {
        collection_id: payload.collection_id,
        price: payload.price,
        description: payload.description,
        main_image_url: payload.main_image_url,
        gallery_image_urls: payload.gallery_image_urls,
    };

    let item = ItemRepository::create(&state.db, &create_item).await?;
    Ok(Json(item.into()))
}

/// List all items owned by a collection
#[utoipa::path(
    get,
    path = "/rpc/getItemsByCollection",
    params(CollectionIdParams),
    responses(
        (status = 200, description = "Items of the collection", body = [ItemResponse])
    ),
    tag = "Items"
)]
pub async fn get_items_by_collection(
    State(state): State<AppState>,
    Query(params): Query<CollectionIdParams>,
) -> AppResult<Json<Vec<ItemResponse>>> {
    let items = ItemRepository::list_by_collection(&state.db, params.collection_id).await?;

    Ok(Json(items.into_iter().map(|i| i.into()).collect()))
}

/// Update an item; null when the id is unknown or no fields were supplied
#[utoipa::path(
    post,
    path = "/rpc/updateItem",
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Updated item, or null", body = Option<ItemResponse>),
        (status = 400, description = "Validation error")
    ),
    tag = "Items"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Json(payload): Json<UpdateItemRequest>,
) -> AppResult<Json<Option<ItemResponse>>> {
    if let Some(price) = payload.price {
        validate_positive(price, "Price")?;
    }
    validate_optional(&payload.description, "Description")?;
    validate_optional_url(&payload.main_image_url, "Main image URL")?;
    if let Some(gallery) = &payload.gallery_image_urls {
        validate_url_list(gallery, "Gallery image URL")?;
    }

    let update_item = UpdateItem {
        collection_id: payload.collection_id,
        price: payload.price,
        description: payload.description,
        main_image_url: payload.main_image_url,
        gallery_image_urls: payload.gallery_image_urls,
    };

    let item = ItemRepository::update(&state.db, payload.id, &update_item).await?;
    Ok(Json(item.map(Into::into)))
}

/// Delete an item
#[utoipa::path(
    post,
    path = "/rpc/deleteItem",
    request_body = DeleteRequest,
    responses(
        (status = 200, description = "Whether an item existed and was removed", body = bool)
    ),
    tag = "Items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Json(payload): Json<DeleteRequest>,
) -> AppResult<Json<bool>> {
    let removed = ItemRepository::delete(&state.db, payload.id).await?;

    Ok(Json(removed))
}
