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
    question::db::get_question_in_quiz,
    question_option::{
        db::{QuestionOptionRepository, get_option_in_question},
        models::{
            CreateQuestionOptionRequest, QuestionOption, QuestionOptionDto,
            UpdateQuestionOptionRequest,
        },
    },
    quiz::db::ensure_quiz_exists,
    server::{app_state::AppState, error::ServerError, extract::AppJson},
};

pub fn question_option_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_question_options).post(create_question_option))
        .route(
            "/{option_id}",
            get(get_question_option_by_id)
                .put(update_question_option)
                .delete(delete_question_option),
        )
        .with_state(state)
}

/// Ancestor checks shared by every option handler, walked left to right so
/// the first missing segment is the one reported.
async fn validate_ancestors(
    state: &AppState,
    quiz_id: &Uuid,
    question_id: &Uuid,
) -> Result<(), ServerError> {
    ensure_quiz_exists(state.get_pool(), quiz_id).await?;
    get_question_in_quiz(state.get_pool(), quiz_id, question_id).await?;
    Ok(())
}

async fn get_question_options(
    State(state): State<Arc<AppState>>,
    Path((quiz_id, question_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ServerError> {
    validate_ancestors(&state, &quiz_id, &question_id).await?;

    let repository = QuestionOptionRepository::new(state.get_pool());
    let options = repository.get_by_question_id(&question_id).await?;
    let dtos: Vec<QuestionOptionDto> = options.into_iter().map(QuestionOptionDto::from).collect();

    Ok(ApiResponse::ok(dtos))
}

async fn get_question_option_by_id(
    State(state): State<Arc<AppState>>,
    Path((quiz_id, question_id, option_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<impl IntoResponse, ServerError> {
    validate_ancestors(&state, &quiz_id, &question_id).await?;
    let option = get_option_in_question(state.get_pool(), &question_id, &option_id).await?;

    Ok(ApiResponse::ok(QuestionOptionDto::from(option)))
}

async fn create_question_option(
    State(state): State<Arc<AppState>>,
    Path((quiz_id, question_id)): Path<(Uuid, Uuid)>,
    AppJson(request): AppJson<CreateQuestionOptionRequest>,
) -> Result<impl IntoResponse, ServerError> {
    request.validate()?;
    validate_ancestors(&state, &quiz_id, &question_id).await?;

    let repository = QuestionOptionRepository::new(state.get_pool());
    let option = repository
        .add(QuestionOption::from_create_request(request, question_id))
        .await?;
    info!(
        "Created question option: {} in question: {}",
        option.id, question_id
    );

    Ok(ApiResponse::created(QuestionOptionDto::from(option)))
}

async fn update_question_option(
    State(state): State<Arc<AppState>>,
    Path((quiz_id, question_id, option_id)): Path<(Uuid, Uuid, Uuid)>,
    AppJson(request): AppJson<UpdateQuestionOptionRequest>,
) -> Result<impl IntoResponse, ServerError> {
    request.validate()?;
    validate_ancestors(&state, &quiz_id, &question_id).await?;

    let mut option = get_option_in_question(state.get_pool(), &question_id, &option_id).await?;
    option.apply_update(request);

    let repository = QuestionOptionRepository::new(state.get_pool());
    let option = repository.update(option).await?;

    Ok(ApiResponse::ok(QuestionOptionDto::from(option)))
}

async fn delete_question_option(
    State(state): State<Arc<AppState>>,
    Path((quiz_id, question_id, option_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<impl IntoResponse, ServerError> {
    validate_ancestors(&state, &quiz_id, &question_id).await?;
    let option = get_option_in_question(state.get_pool(), &question_id, &option_id).await?;

    let repository = QuestionOptionRepository::new(state.get_pool());
    repository.delete(option).await?;
    info!(
        "Deleted question option: {} in question: {}",
        option_id, question_id
    );

    Ok(ApiResponse::deleted())
}
