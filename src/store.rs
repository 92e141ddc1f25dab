//! Database bootstrap: create the target database and the widget tables.

use crate::error::AppError;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const WIDGET_TABLES_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS widgets_a (
        id SERIAL PRIMARY KEY,
        name VARCHAR(50) NOT NULL,
        description VARCHAR(200),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_widgets_a_name ON widgets_a (name)",
    r#"
    CREATE TABLE IF NOT EXISTS widgets_b (
        id SERIAL PRIMARY KEY,
        name VARCHAR(50) NOT NULL,
        description VARCHAR(200),
        widget_a_id INTEGER NOT NULL REFERENCES widgets_a (id),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_widgets_b_name ON widgets_b (name)",
    "CREATE INDEX IF NOT EXISTS ix_widgets_b_widget_a_id ON widgets_b (widget_a_id)",
];

/// Create the widget tables and their indexes if missing. Idempotent.
pub async fn ensure_widget_tables(pool: &PgPool) -> Result<(), AppError> {
    for ddl in WIDGET_TABLES_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Ensure the database named in `database_url` exists; create it if not.
/// Connects to the default `postgres` database to run CREATE DATABASE.
/// Call before opening the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let db_name = match opts.get_database() {
        Some(name) if name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    let admin_opts = opts.database("postgres");
    let mut conn = admin_opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ident_escapes_embedded_quotes() {
        assert_eq!(quote_ident("widgets"), "\"widgets\"");
        assert_eq!(quote_ident("wid\"gets"), "\"wid\"\"gets\"");
    }
}
