//! Widget A CRUD handlers.

use crate::error::AppError;
use crate::response::{success, Paginated};
use crate::schemas::{ListQuery, WidgetACreate, WidgetAUpdate};
use crate::service::{ValidateInput, WidgetAService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

const RESOURCE: &str = "Widget A";

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<WidgetACreate>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let row = WidgetAService::create(&state.pool, &body).await?;
    Ok(success("Widget A created successfully", row))
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;
    let offset = (query.page - 1) * query.limit;
    let (items, total) = WidgetAService::list(&state.pool, offset, query.limit).await?;
    let page = Paginated::new(items, total, query.page, query.limit);
    Ok(success("Widget A list retrieved successfully", page))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let row = WidgetAService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESOURCE.into()))?;
    Ok(success("Widget A retrieved successfully", row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<WidgetAUpdate>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let row = WidgetAService::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| AppError::NotFound(RESOURCE.into()))?;
    Ok(success("Widget A updated successfully", row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let row = WidgetAService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESOURCE.into()))?;
    Ok(success("Widget A deleted successfully", row))
}
