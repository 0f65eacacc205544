use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use window_catalog::config::Config;
use window_catalog::handlers::{
    CollectionResponse, CollectionWithItemsResponse, CreateCollectionRequest, CreateItemRequest,
    DeleteRequest, HealthcheckResponse, ItemResponse, UpdateCollectionRequest, UpdateItemRequest,
};
use window_catalog::state::AppState;
use window_catalog::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::healthcheck,
        handlers::collection::create_collection,
        handlers::collection::get_collections,
        handlers::collection::get_collection_by_id,
        handlers::collection::update_collection,
        handlers::collection::delete_collection,
        handlers::item::create_item,
        handlers::item::get_items_by_collection,
        handlers::item::update_item,
        handlers::item::delete_item,
    ),
    components(schemas(
        HealthcheckResponse,
        CreateCollectionRequest,
        UpdateCollectionRequest,
        CollectionResponse,
        CollectionWithItemsResponse,
        CreateItemRequest,
        UpdateItemRequest,
        ItemResponse,
        DeleteRequest,
    )),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Collections", description = "Window collection management"),
        (name = "Items", description = "Window management within collections")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    let addr = config.server_addr();

    // Initialize application state (connects to the database, runs migrations)
    tracing::info!("Connecting to database...");
    let state = AppState::new(config)
        .await
        .expect("Failed to initialize application state");
    tracing::info!("Database connection established");

    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .client_url
                .parse::<HeaderValue>()
                .expect("CLIENT_URL must be a valid origin"),
        )
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    // Build the main application router
    let app = build_router(state.clone())
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    tracing::info!("Window catalog API ready for requests");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    state.close().await.expect("Failed to close database connections");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
