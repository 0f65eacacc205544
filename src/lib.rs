// Library crate for the window catalog service
// Exports modules for use by the server binary and tests

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{
    create_collection, create_item, delete_collection, delete_item, get_collection_by_id,
    get_collections, get_items_by_collection, healthcheck, update_collection, update_item,
};
use crate::state::AppState;

/// Build the application router with the given state.
/// One route per remote procedure: queries are GET with query-string
/// inputs, mutations are POST with JSON bodies.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Window catalog API" }))
        .route("/rpc/healthcheck", get(healthcheck))
        // Collection procedures
        .route("/rpc/createCollection", post(create_collection))
        .route("/rpc/getCollections", get(get_collections))
        .route("/rpc/getCollectionById", get(get_collection_by_id))
        .route("/rpc/updateCollection", post(update_collection))
        .route("/rpc/deleteCollection", post(delete_collection))
        // Item procedures
        .route("/rpc/createItem", post(create_item))
        .route("/rpc/getItemsByCollection", get(get_items_by_collection))
        .route("/rpc/updateItem", post(update_item))
        .route("/rpc/deleteItem", post(delete_item))
        .with_state(state)
}
