use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::common::models::ApiResponse;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, Some(msg)),
            ServerError::Validation(msg) => (StatusCode::BAD_REQUEST, Some(msg)),
            ServerError::Database(e) => {
                error!("Database failure: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
            ServerError::Internal(msg) => {
                error!("{}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        ApiResponse::<()>::new(status.as_u16(), message, None).into_response()
    }
}
