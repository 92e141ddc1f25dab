//! Persisted widget rows. These double as the API output shapes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Clone, Debug, Serialize, FromRow)]
pub struct WidgetA {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, FromRow)]
pub struct WidgetB {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Owning parent; enforced by a foreign key on `widgets_b.widget_a_id`.
    pub widget_a_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
