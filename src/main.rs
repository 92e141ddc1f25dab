//! Server binary: reads config from env, bootstraps the database, mounts the
//! common and widget routes.

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;
use widget_backend::{
    common_routes_with_ready, ensure_database_exists, ensure_widget_tables, widget_routes,
    AppConfig, AppState,
};

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("widget_backend=info".parse()?))
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!("starting {}", config.project_name);

    ensure_database_exists(&config.database_url).await?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    ensure_widget_tables(&pool).await?;

    let state = AppState { pool };
    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest("/api/widgets", widget_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
