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
    question::{
        db::{QuestionRepository, get_question_in_quiz},
        models::{CreateQuestionRequest, Question, QuestionDto, UpdateQuestionRequest},
    },
    quiz::db::ensure_quiz_exists,
    server::{app_state::AppState, error::ServerError, extract::AppJson},
};

pub fn question_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_questions).post(create_question))
        .route(
            "/{question_id}",
            get(get_question_by_id)
                .put(update_question)
                .delete(delete_question),
        )
        .with_state(state)
}

async fn get_questions(
    State(state): State<Arc<AppState>>,
    Path(quiz_id): Path<Uuid>,
) -> Result<impl IntoResponse, ServerError> {
    ensure_quiz_exists(state.get_pool(), &quiz_id).await?;

    let repository = QuestionRepository::new(state.get_pool());
    let questions = repository.get_by_quiz_id(&quiz_id).await?;
    let dtos: Vec<QuestionDto> = questions.into_iter().map(QuestionDto::from).collect();

    Ok(ApiResponse::ok(dtos))
}

async fn get_question_by_id(
    State(state): State<Arc<AppState>>,
    Path((quiz_id, question_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ServerError> {
    ensure_quiz_exists(state.get_pool(), &quiz_id).await?;
    let question = get_question_in_quiz(state.get_pool(), &quiz_id, &question_id).await?;

    Ok(ApiResponse::ok(QuestionDto::from(question)))
}

async fn create_question(
    State(state): State<Arc<AppState>>,
    Path(quiz_id): Path<Uuid>,
    AppJson(request): AppJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, ServerError> {
    request.validate()?;
    ensure_quiz_exists(state.get_pool(), &quiz_id).await?;

    let repository = QuestionRepository::new(state.get_pool());
    let question = repository
        .add(Question::from_create_request(request, quiz_id))
        .await?;
    info!("Created question: {} in quiz: {}", question.id, quiz_id);

    Ok(ApiResponse::created(QuestionDto::from(question)))
}

async fn update_question(
    State(state): State<Arc<AppState>>,
    Path((quiz_id, question_id)): Path<(Uuid, Uuid)>,
    AppJson(request): AppJson<UpdateQuestionRequest>,
) -> Result<impl IntoResponse, ServerError> {
    request.validate()?;
    ensure_quiz_exists(state.get_pool(), &quiz_id).await?;

    let mut question = get_question_in_quiz(state.get_pool(), &quiz_id, &question_id).await?;
    question.apply_update(request);

    let repository = QuestionRepository::new(state.get_pool());
    let question = repository.update(question).await?;

    Ok(ApiResponse::ok(QuestionDto::from(question)))
}

async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path((quiz_id, question_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ServerError> {
    ensure_quiz_exists(state.get_pool(), &quiz_id).await?;
    let question = get_question_in_quiz(state.get_pool(), &quiz_id, &question_id).await?;

    let repository = QuestionRepository::new(state.get_pool());
    repository.delete(question).await?;
    info!("Deleted question: {} in quiz: {}", question_id, quiz_id);

    Ok(ApiResponse::deleted())
}
