use std::sync::Arc;

use axum::Router;

use crate::{
    health::handlers::health_routes, question::handlers::question_routes,
    question_option::handlers::question_option_routes, quiz::handlers::quiz_routes,
    server::app_state::AppState,
};

pub mod common;
pub mod config;
pub mod health;
pub mod question;
pub mod question_option;
pub mod quiz;
pub mod server;

/// Builds the full application router. Nested resources share the path
/// parameters of their ancestors.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/health", health_routes(state.clone()))
        .nest("/quizzes", quiz_routes(state.clone()))
        .nest(
            "/quizzes/{quiz_id}/questions",
            question_routes(state.clone()),
        )
        .nest(
            "/quizzes/{quiz_id}/questions/{question_id}/questionOptions",
            question_option_routes(state),
        )
}
