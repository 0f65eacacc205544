mod common;

use axum::http::StatusCode;
use serde_json::json;
use time::OffsetDateTime;
use uuid::Uuid;

use common::{Factory, TestApp};

#[tokio::test]
async fn test_create_collection() {
    let app = TestApp::new().await;

    let name = format!("Skyline {}", Uuid::new_v4());
    let response = app
        .server
        .post("/rpc/createCollection")
        .json(&json!({
            "name": name,
            "description": "Floor-to-ceiling panorama windows",
            "main_image_url": "https://example.com/skyline/main.jpg",
            "brand_name": "Fenstra"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["name"].as_str().unwrap(), name);
    assert_eq!(
        body["description"].as_str().unwrap(),
        "Floor-to-ceiling panorama windows"
    );
    assert_eq!(
        body["main_image_url"].as_str().unwrap(),
        "https://example.com/skyline/main.jpg"
    );
    assert_eq!(body["brand_name"].as_str().unwrap(), "Fenstra");
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_collection_timestamp_within_call_bounds() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let before = OffsetDateTime::now_utc();
    let collection = factory.create_collection().await;
    let after = OffsetDateTime::now_utc();

    assert!(collection.created_at >= before);
    assert!(collection.created_at <= after);
}

#[tokio::test]
async fn test_create_collection_rejects_blank_name() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/rpc/createCollection")
        .json(&json!({
            "name": "",
            "description": "A description",
            "main_image_url": "https://example.com/main.jpg",
            "brand_name": "Fenstra"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_collection_rejects_invalid_image_url() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/rpc/createCollection")
        .json(&json!({
            "name": "Skyline",
            "description": "A description",
            "main_image_url": "not a url",
            "brand_name": "Fenstra"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_collections_returns_created() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let first = factory.create_collection().await;
    let second = factory.create_collection().await;

    let response = app.server.get("/rpc/getCollections").await;

    response.assert_status(StatusCode::OK);

    // The table is shared, so look the records up by unique name rather
    // than asserting on position or total count
    let body: serde_json::Value = response.json();
    let collections = body.as_array().unwrap();

    let found_first = collections
        .iter()
        .find(|c| c["name"].as_str() == Some(first.name.as_str()))
        .unwrap();
    assert_eq!(found_first["id"].as_i64().unwrap() as i32, first.id);
    assert_eq!(found_first["brand_name"].as_str().unwrap(), "Fenstra");

    assert!(collections
        .iter()
        .any(|c| c["name"].as_str() == Some(second.name.as_str())));
}

#[tokio::test]
async fn test_get_collection_by_id_with_items() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let collection = factory.create_collection().await;
    let item = factory.create_item(collection.id).await;
    factory.create_item(collection.id).await;

    let response = app
        .server
        .get(&format!("/rpc/getCollectionById?id={}", collection.id))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["id"].as_i64().unwrap() as i32, collection.id);
    assert_eq!(body["name"].as_str().unwrap(), collection.name);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items
        .iter()
        .any(|i| i["description"].as_str() == Some(item.description.as_str())));
    assert!(items
        .iter()
        .all(|i| i["collection_id"].as_i64().unwrap() as i32 == collection.id));
}

#[tokio::test]
async fn test_get_collection_by_id_without_items() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let collection = factory.create_collection().await;

    let response = app
        .server
        .get(&format!("/rpc/getCollectionById?id={}", collection.id))
        .await;

    response.assert_status(StatusCode::OK);

    // items must be an empty array, not null and not omitted
    let body: serde_json::Value = response.json();
    assert!(body["items"].is_array());
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_get_collection_by_id_not_found() {
    let app = TestApp::new().await;

    let response = app.server.get("/rpc/getCollectionById?id=999999").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert!(body.is_null());
}

#[tokio::test]
async fn test_update_collection_partial() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let collection = factory.create_collection().await;

    let response = app
        .server
        .post("/rpc/updateCollection")
        .json(&json!({
            "id": collection.id,
            "brand_name": "Lumina"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["brand_name"].as_str().unwrap(), "Lumina");
    // untouched fields keep their values
    assert_eq!(body["name"].as_str().unwrap(), collection.name);
    assert_eq!(
        body["description"].as_str().unwrap(),
        collection.description
    );
}

#[tokio::test]
async fn test_update_collection_with_only_id_returns_current_record() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let collection = factory.create_collection().await;

    let response = app
        .server
        .post("/rpc/updateCollection")
        .json(&json!({ "id": collection.id }))
        .await;

    response.assert_status(StatusCode::OK);

    // a field-less update is a no-op read; the item procedure answers the
    // same input with null instead
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"].as_i64().unwrap() as i32, collection.id);
    assert_eq!(body["name"].as_str().unwrap(), collection.name);
}

#[tokio::test]
async fn test_update_collection_not_found_returns_null() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/rpc/updateCollection")
        .json(&json!({
            "id": 999999,
            "name": "Renamed"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert!(body.is_null());
}

#[tokio::test]
async fn test_update_collection_rejects_blank_name() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let collection = factory.create_collection().await;

    let response = app
        .server
        .post("/rpc/updateCollection")
        .json(&json!({
            "id": collection.id,
            "name": ""
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    // the record is untouched
    let get_response = app
        .server
        .get(&format!("/rpc/getCollectionById?id={}", collection.id))
        .await;
    let body: serde_json::Value = get_response.json();
    assert_eq!(body["name"].as_str().unwrap(), collection.name);
}

#[tokio::test]
async fn test_delete_collection() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let collection = factory.create_collection().await;

    let response = app
        .server
        .post("/rpc/deleteCollection")
        .json(&json!({ "id": collection.id }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body.as_bool().unwrap(), true);

    // Verify it's gone
    let get_response = app
        .server
        .get(&format!("/rpc/getCollectionById?id={}", collection.id))
        .await;
    let get_body: serde_json::Value = get_response.json();
    assert!(get_body.is_null());
}

#[tokio::test]
async fn test_delete_collection_not_found_returns_false() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/rpc/deleteCollection")
        .json(&json!({ "id": 999999 }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body.as_bool().unwrap(), false);
}

#[tokio::test]
async fn test_delete_collection_cascades_to_items() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let collection = factory.create_collection().await;
    let first = factory.create_item(collection.id).await;
    let second = factory.create_item(collection.id).await;

    let response = app
        .server
        .post("/rpc/deleteCollection")
        .json(&json!({ "id": collection.id }))
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>().as_bool().unwrap(), true);

    // all owned items went with the collection
    let items_response = app
        .server
        .get(&format!(
            "/rpc/getItemsByCollection?collection_id={}",
            collection.id
        ))
        .await;
    let items: serde_json::Value = items_response.json();
    assert_eq!(items.as_array().unwrap().len(), 0);

    use window_catalog::repositories::{ItemRepository, Repository};
    assert!(ItemRepository::find_by_id(&app.state.db, first.id)
        .await
        .unwrap()
        .is_none());
    assert!(ItemRepository::find_by_id(&app.state.db, second.id)
        .await
        .unwrap()
        .is_none());
}
