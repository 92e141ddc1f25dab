//! WidgetA persistence operations.

use crate::error::AppError;
use crate::models::WidgetA;
use crate::schemas::{WidgetACreate, WidgetAUpdate};
use sqlx::PgPool;

const COLUMNS: &str = "id, name, description, created_at, updated_at";

pub struct WidgetAService;

impl WidgetAService {
    /// Insert one row; id and timestamps come from the database.
    pub async fn create(pool: &PgPool, input: &WidgetACreate) -> Result<WidgetA, AppError> {
        tracing::debug!(name = %input.name, "create widget_a");
        let sql =
            format!("INSERT INTO widgets_a (name, description) VALUES ($1, $2) RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, WidgetA>(&sql)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Fetch one row by id, or None.
    pub async fn get(pool: &PgPool, id: i32) -> Result<Option<WidgetA>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM widgets_a WHERE id = $1");
        let row = sqlx::query_as::<_, WidgetA>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// One page of rows, id ascending, together with the total count.
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<WidgetA>, i64), AppError> {
        tracing::debug!(offset, limit, "list widgets_a");
        let sql = format!("SELECT {COLUMNS} FROM widgets_a ORDER BY id ASC LIMIT $1 OFFSET $2");
        let items = sqlx::query_as::<_, WidgetA>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        let total = Self::count(pool).await?;
        Ok((items, total))
    }

    /// Apply the provided fields to an existing row, or None if absent.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        patch: &WidgetAUpdate,
    ) -> Result<Option<WidgetA>, AppError> {
        let Some(mut current) = Self::get(pool, id).await? else {
            return Ok(None);
        };
        patch.apply_to(&mut current);
        tracing::debug!(id, "update widget_a");
        let sql = format!(
            "UPDATE widgets_a SET name = $2, description = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, WidgetA>(&sql)
            .bind(id)
            .bind(&current.name)
            .bind(&current.description)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Remove one row, returning its last-known value, or None if absent.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<WidgetA>, AppError> {
        tracing::debug!(id, "delete widget_a");
        let sql = format!("DELETE FROM widgets_a WHERE id = $1 RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, WidgetA>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, AppError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM widgets_a")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
