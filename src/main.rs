//! PhoneDesk Server - Office Phone Allocation Tracker
//!
//! A Rust REST API server for tracking office phones and their allocation to
//! employees.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phonedesk_server::{
    api,
    config::{AppConfig, StorageBackend},
    services::Services,
    store::{memory::MemoryStore, postgres::PgStore, RecordStore},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("phonedesk_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PhoneDesk Server v{}", env!("CARGO_PKG_VERSION"));

    // Create the record store for the configured backend
    let store: Arc<dyn RecordStore> = match config.storage.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory record store with fixture data");
            Arc::new(MemoryStore::seeded())
        }
        StorageBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .min_connections(config.database.min_connections)
                .connect(&config.database.url)
                .await
                .expect("Failed to connect to database");

            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Failed to run database migrations");

            tracing::info!("Database migrations completed");

            Arc::new(PgStore::new(pool))
        }
    };

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services and application state
    let services = Services::new(store);
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Phones
        .route("/phones", get(api::phones::list_phones))
        .route("/phones", post(api::phones::create_phone))
        .route("/phones/details", get(api::phones::list_phone_details))
        .route("/phones/:id", get(api::phones::get_phone))
        .route("/phones/:id", put(api::phones::update_phone))
        .route("/phones/:id", delete(api::phones::delete_phone))
        .route("/phones/:id/allocation", get(api::phones::get_phone_allocation))
        // Employees
        .route("/employees", get(api::employees::list_employees))
        .route("/employees", post(api::employees::create_employee))
        .route("/employees/details", get(api::employees::list_employee_details))
        .route("/employees/:id", get(api::employees::get_employee))
        .route("/employees/:id", put(api::employees::update_employee))
        .route("/employees/:id", delete(api::employees::delete_employee))
        .route(
            "/employees/:id/allocations",
            get(api::employees::get_employee_allocations),
        )
        // Allocations
        .route("/allocations", get(api::allocations::list_allocations))
        .route("/allocations", post(api::allocations::create_allocation))
        .route("/allocations/:id", delete(api::allocations::delete_allocation))
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
