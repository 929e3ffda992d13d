//! Shared response envelope for API handlers.
//!
//! Successful responses are `{ "success": true, "message": ..., "data": ... }`.
//! Errors use the `{ "success": false, "error", "code" }` shape produced by
//! [`AppError`](crate::error::AppError).

use serde::Serialize;

/// Standard success envelope.
///
/// ```ignore
/// Ok(Json(DataResponse::with_message("Advance issued", advance)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}
