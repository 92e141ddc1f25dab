//! Widget backend: starter REST CRUD service backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod ports;
pub mod response;
pub mod routes;
pub mod schemas;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use response::{success, ApiResponse, Paginated};
pub use routes::{common_routes, common_routes_with_ready, widget_routes};
pub use service::{WidgetAService, WidgetBService};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_widget_tables};
