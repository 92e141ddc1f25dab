//! WidgetB persistence operations. Lists and counts accept an optional
//! parent filter.

use crate::error::AppError;
use crate::models::WidgetB;
use crate::schemas::{WidgetBCreate, WidgetBUpdate};
use sqlx::PgPool;

const COLUMNS: &str = "id, name, description, widget_a_id, created_at, updated_at";

pub struct WidgetBService;

impl WidgetBService {
    /// Insert one row. A dangling `widget_a_id` fails on the foreign key.
    pub async fn create(pool: &PgPool, input: &WidgetBCreate) -> Result<WidgetB, AppError> {
        tracing::debug!(name = %input.name, widget_a_id = input.widget_a_id, "create widget_b");
        let sql = format!(
            "INSERT INTO widgets_b (name, description, widget_a_id) VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, WidgetB>(&sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.widget_a_id)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Fetch one row by id, or None.
    pub async fn get(pool: &PgPool, id: i32) -> Result<Option<WidgetB>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM widgets_b WHERE id = $1");
        let row = sqlx::query_as::<_, WidgetB>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// One page of rows, id ascending, together with the total count.
    /// When `widget_a_id` is set, both are restricted to that parent.
    pub async fn list(
        pool: &PgPool,
        widget_a_id: Option<i32>,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<WidgetB>, i64), AppError> {
        tracing::debug!(offset, limit, ?widget_a_id, "list widgets_b");
        let items = match widget_a_id {
            Some(parent) => {
                let sql = format!(
                    "SELECT {COLUMNS} FROM widgets_b WHERE widget_a_id = $1 \
                     ORDER BY id ASC LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, WidgetB>(&sql)
                    .bind(parent)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let sql =
                    format!("SELECT {COLUMNS} FROM widgets_b ORDER BY id ASC LIMIT $1 OFFSET $2");
                sqlx::query_as::<_, WidgetB>(&sql)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?
            }
        };
        let total = Self::count(pool, widget_a_id).await?;
        Ok((items, total))
    }

    /// Apply the provided fields to an existing row, or None if absent.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        patch: &WidgetBUpdate,
    ) -> Result<Option<WidgetB>, AppError> {
        let Some(mut current) = Self::get(pool, id).await? else {
            return Ok(None);
        };
        patch.apply_to(&mut current);
        tracing::debug!(id, "update widget_b");
        let sql = format!(
            "UPDATE widgets_b SET name = $2, description = $3, widget_a_id = $4, \
             updated_at = NOW() WHERE id = $1 RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, WidgetB>(&sql)
            .bind(id)
            .bind(&current.name)
            .bind(&current.description)
            .bind(current.widget_a_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Remove one row, returning its last-known value, or None if absent.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<WidgetB>, AppError> {
        tracing::debug!(id, "delete widget_b");
        let sql = format!("DELETE FROM widgets_b WHERE id = $1 RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, WidgetB>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn count(pool: &PgPool, widget_a_id: Option<i32>) -> Result<i64, AppError> {
        let row: (i64,) = match widget_a_id {
            Some(parent) => {
                sqlx::query_as("SELECT COUNT(*) FROM widgets_b WHERE widget_a_id = $1")
                    .bind(parent)
                    .fetch_one(pool)
                    .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM widgets_b")
                    .fetch_one(pool)
                    .await?
            }
        };
        Ok(row.0)
    }
}
