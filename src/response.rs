//! Standard response envelopes.

use axum::Json;
use serde::Serialize;

/// Outer envelope: every successful response carries its payload plus a
/// human-readable message describing the operation.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T> Paginated<T> {
    /// Wrap one page of items together with the pre-pagination total.
    pub fn new(items: Vec<T>, total: i64, page: i64, page_size: i64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + page_size - 1) / page_size
        };
        Paginated {
            items,
            total,
            page,
            page_size,
            total_pages,
        }
    }
}

/// 200 response in the standard envelope.
pub fn success<T: Serialize>(message: &str, data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        data,
        message: message.to_string(),
    })
}
