//! Widget B CRUD handlers. The list endpoint accepts an optional parent
//! filter.

use crate::error::AppError;
use crate::response::{success, Paginated};
use crate::schemas::{WidgetBCreate, WidgetBListQuery, WidgetBUpdate};
use crate::service::{ValidateInput, WidgetBService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

const RESOURCE: &str = "Widget B";

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<WidgetBCreate>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let row = WidgetBService::create(&state.pool, &body).await?;
    Ok(success("Widget B created successfully", row))
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<WidgetBListQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;
    let offset = (query.page - 1) * query.limit;
    let (items, total) =
        WidgetBService::list(&state.pool, query.widget_a_id, offset, query.limit).await?;
    let page = Paginated::new(items, total, query.page, query.limit);
    Ok(success("Widget B list retrieved successfully", page))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let row = WidgetBService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESOURCE.into()))?;
    Ok(success("Widget B retrieved successfully", row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<WidgetBUpdate>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let row = WidgetBService::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| AppError::NotFound(RESOURCE.into()))?;
    Ok(success("Widget B updated successfully", row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let row = WidgetBService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESOURCE.into()))?;
    Ok(success("Widget B deleted successfully", row))
}

#[cfg(test)]
mod tests {
    use crate::routes::widget_routes;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    fn test_app() -> axum::Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/widgets_test")
            .unwrap();
        widget_routes(AppState { pool })
    }

    #[tokio::test]
    async fn create_rejects_overlong_description() {
        let body = serde_json::json!({
            "name": "child",
            "description": "y".repeat(201),
            "widget_a_id": 1
        })
        .to_string();
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/widget-b")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn list_rejects_out_of_range_limit() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/widget-b?limit=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
