use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    common::repository::{Persistable, PersistOp},
    server::error::ServerError,
};

pub const TEXT_MAX_LEN: usize = 100;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Question {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub text: String,
    pub is_mandatory: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: Option<DateTime<Utc>>,
}

impl Question {
    pub fn from_create_request(request: CreateQuestionRequest, quiz_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            quiz_id,
            text: request.text,
            is_mandatory: request.is_mandatory,
            created_on: Utc::now(),
            updated_on: None,
        }
    }

    /// Applies the whitelisted mutable fields. `quiz_id` is immutable after
    /// creation.
    pub fn apply_update(&mut self, request: UpdateQuestionRequest) {
        self.text = request.text;
        self.is_mandatory = request.is_mandatory;
    }
}

impl Persistable for Question {
    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self, op: PersistOp) {
        match op {
            PersistOp::Create => {
                self.created_on = Utc::now();
                self.updated_on = None;
            }
            PersistOp::Update => self.updated_on = Some(Utc::now()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    pub text: String,
    pub is_mandatory: bool,
}

impl CreateQuestionRequest {
    pub fn validate(&self) -> Result<(), ServerError> {
        validate_text(&self.text)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionRequest {
    pub text: String,
    pub is_mandatory: bool,
}

impl UpdateQuestionRequest {
    pub fn validate(&self) -> Result<(), ServerError> {
        validate_text(&self.text)
    }
}

fn validate_text(text: &str) -> Result<(), ServerError> {
    if text.trim().is_empty() {
        return Err(ServerError::Validation("Text must not be empty".into()));
    }

    if text.chars().count() > TEXT_MAX_LEN {
        return Err(ServerError::Validation(format!(
            "Text must be at most {} characters",
            TEXT_MAX_LEN
        )));
    }

    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub text: String,
    pub is_mandatory: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: Option<DateTime<Utc>>,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            quiz_id: question.quiz_id,
            text: question.text,
            is_mandatory: question.is_mandatory,
            created_on: question.created_on,
            updated_on: question.updated_on,
        }
    }
}
