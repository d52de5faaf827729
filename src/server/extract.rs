use axum::{Json, extract::FromRequest, extract::rejection::JsonRejection};

use crate::server::error::ServerError;

/// Json extractor whose rejection is rendered through the response envelope
/// instead of the framework default.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ServerError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::Validation(rejection.body_text())
    }
}
