use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    common::{models::ApiResponse, repository::Repository},
    quiz::{
        db::QuizRepository,
        models::{CreateQuizRequest, Quiz, QuizDto, UpdateQuizRequest},
    },
    server::{app_state::AppState, error::ServerError, extract::AppJson},
};

pub fn quiz_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_quizzes).post(create_quiz))
        .route(
            "/{quiz_id}",
            get(get_quiz_by_id).put(update_quiz).delete(delete_quiz),
        )
        .with_state(state)
}

async fn get_quizzes(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ServerError> {
    let repository = QuizRepository::new(state.get_pool());
    let quizzes = repository.get_all().await?;
    let dtos: Vec<QuizDto> = quizzes.into_iter().map(QuizDto::from).collect();

    Ok(ApiResponse::ok(dtos))
}

async fn get_quiz_by_id(
    State(state): State<Arc<AppState>>,
    Path(quiz_id): Path<Uuid>,
) -> Result<impl IntoResponse, ServerError> {
    let repository = QuizRepository::new(state.get_pool());
    let quiz = repository
        .get_by_id(&quiz_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Quiz with id {} does not exist", quiz_id)))?;

    Ok(ApiResponse::ok(QuizDto::from(quiz)))
}

async fn create_quiz(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<CreateQuizRequest>,
) -> Result<impl IntoResponse, ServerError> {
    request.validate()?;

    let repository = QuizRepository::new(state.get_pool());
    let quiz = repository.add(Quiz::from_create_request(request)).await?;
    info!("Created quiz: {}", quiz.id);

    Ok(ApiResponse::created(QuizDto::from(quiz)))
}

async fn update_quiz(
    State(state): State<Arc<AppState>>,
    Path(quiz_id): Path<Uuid>,
    AppJson(request): AppJson<UpdateQuizRequest>,
) -> Result<impl IntoResponse, ServerError> {
    request.validate()?;

    let repository = QuizRepository::new(state.get_pool());
    let mut quiz = repository
        .get_by_id(&quiz_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Quiz with id {} does not exist", quiz_id)))?;

    quiz.apply_update(request);
    let quiz = repository.update(quiz).await?;

    Ok(ApiResponse::ok(QuizDto::from(quiz)))
}

async fn delete_quiz(
    State(state): State<Arc<AppState>>,
    Path(quiz_id): Path<Uuid>,
) -> Result<impl IntoResponse, ServerError> {
    let repository = QuizRepository::new(state.get_pool());
    let quiz = repository
        .get_by_id(&quiz_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Quiz with id {} does not exist", quiz_id)))?;

    repository.delete(quiz).await?;
    info!("Deleted quiz: {}", quiz_id);

    Ok(ApiResponse::deleted())
}
