//! Widget resource routes: five operations per resource.

use crate::handlers::{widget_a, widget_b};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn widget_routes(state: AppState) -> Router {
    Router::new()
        .route("/widget-a", get(widget_a::list).post(widget_a::create))
        .route(
            "/widget-a/:id",
            get(widget_a::read)
                .put(widget_a::update)
                .delete(widget_a::delete),
        )
        .route("/widget-b", get(widget_b::list).post(widget_b::create))
        .route(
            "/widget-b/:id",
            get(widget_b::read)
                .put(widget_b::update)
                .delete(widget_b::delete),
        )
        .with_state(state)
}
