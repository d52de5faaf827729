use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Uniform response envelope. Every endpoint, success or failure, serializes
/// to this shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub status_code: u16,
    pub message: String,
    pub is_error: bool,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// An omitted message falls back to the default for the status class.
    pub fn new(status_code: u16, message: Option<String>, data: Option<T>) -> Self {
        let message = message.unwrap_or_else(|| default_message(status_code).to_string());

        Self {
            status_code,
            message,
            is_error: status_code >= 400,
            data,
        }
    }

    pub fn ok(data: T) -> Self {
        Self::new(200, None, Some(data))
    }

    pub fn created(data: T) -> Self {
        Self::new(201, None, Some(data))
    }
}

impl ApiResponse<()> {
    pub fn deleted() -> Self {
        Self::new(200, None, None)
    }
}

fn default_message(status_code: u16) -> &'static str {
    match status_code {
        400 => "Bad request",
        401 => "Unauthorized",
        404 => "Resource not found",
        500 => "Server error",
        _ => "",
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}
