use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::{
    validate_optional, validate_optional_url, validate_required, validate_url, DeleteRequest,
    IdParams, ItemResponse,
};
use crate::models::{Collection, CollectionWithItems, CreateCollection, UpdateCollection};
use crate::repositories::{CollectionRepository, Repository};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCollectionRequest {
    pub name: String,
    pub description: String,
    pub main_image_url: String,
    pub brand_name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCollectionRequest {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub main_image_url: Option<String>,
    pub brand_name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub main_image_url: String,
    pub brand_name: String,
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
}

impl From<Collection> for CollectionResponse {
    fn from(c: Collection) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            main_image_url: c.main_image_url,
            brand_name: c.brand_name,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionWithItemsResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub main_image_url: String,
    pub brand_name: String,
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    pub items: Vec<ItemResponse>,
}

impl From<CollectionWithItems> for CollectionWithItemsResponse {
    fn from(c: CollectionWithItems) -> Self {
        Self {
            id: c.collection.id,
            name: c.collection.name,
            description: c.collection.description,
            main_image_url: c.collection.main_image_url,
            brand_name: c.collection.brand_name,
            created_at: c.collection.created_at,
            items: c.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}

// ============ Handlers ============

/// Create a new collection
#[utoipa::path(
    post,
    path = "/rpc/createCollection",
    request_body = CreateCollectionRequest,
    responses(
        (status = 200, description = "Collection created", body = CollectionResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "Collections"
)]
pub async fn create_collection(
    State(state): State<AppState>,
    Json(payload): Json<CreateCollectionRequest>,
) -> AppResult<Json<CollectionResponse>> {
    validate_required(&payload.name, "Name")?;
    validate_required(&payload.description, "Description")?;
    validate_url(&payload.main_image_url, "Main image URL")?;
    validate_required(&payload.brand_name, "Brand name")?;

    let create_collection = CreateCollection {
        name: payload.name,
        description: payload.description,
        main_image_url: payload.main_image_url,
        brand_name: payload.brand_name,
    };

    let collection = CollectionRepository::create(&state.db, &create_collection).await?;
    Ok(Json(collection.into()))
}

/// List all collections
#[utoipa::path(
    get,
    path = "/rpc/getCollections",
    responses(
        (status = 200, description = "All collections", body = [CollectionResponse])
    ),
    tag = "Collections"
)]
pub async fn get_collections(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CollectionResponse>>> {
    let collections = CollectionRepository::list(&state.db).await?;

    Ok(Json(collections.into_iter().map(|c| c.into()).collect()))
}

/// Get a collection with its full item list; null when the id is unknown
#[utoipa::path(
    get,
    path = "/rpc/getCollectionById",
    params(IdParams),
    responses(
        (status = 200, description = "Collection with items, or null", body = Option<CollectionWithItemsResponse>)
    ),
    tag = "Collections"
)]
pub async fn get_collection_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<Json<Option<CollectionWithItemsResponse>>> {
    let collection = CollectionRepository::find_with_items(&state.db, params.id).await?;

    Ok(Json(collection.map(Into::into)))
}

/// Update a collection; null when the id is unknown
#[utoipa::path(
    post,
    path = "/rpc/updateCollection",
    request_body = UpdateCollectionRequest,
    responses(
        (status = 200, description = "Updated collection, or null", body = Option<CollectionResponse>),
        (status = 400, description = "Validation error")
    ),
    tag = "Collections"
)]
pub async fn update_collection(
    State(state): State<AppState>,
    Json(payload): Json<UpdateCollectionRequest>,
) -> AppResult<Json<Option<CollectionResponse>>> {
    validate_optional(&payload.name, "Name")?;
    validate_optional(&payload.description, "Description")?;
    validate_optional_url(&payload.main_image_url, "Main image URL")?;
    validate_optional(&payload.brand_name, "Brand name")?;

    let update_collection = UpdateCollection {
        name: payload.name,
        description: payload.description,
        main_image_url: payload.main_image_url,
        brand_name: payload.brand_name,
    };

    let collection =
        CollectionRepository::update(&state.db, payload.id, &update_collection).await?;
    Ok(Json(collection.map(Into::into)))
}

/// Delete a collection and, through the store cascade, all of its items
#[utoipa::path(
    post,
    path = "/rpc/deleteCollection",
    request_body = DeleteRequest,
    responses(
        (status = 200, description = "Whether a collection existed and was removed", body = bool)
    ),
    tag = "Collections"
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    Json(payload): Json<DeleteRequest>,
) -> AppResult<Json<bool>> {
    let removed = CollectionRepository::delete(&state.db, payload.id).await?;

    Ok(Json(removed))
}
