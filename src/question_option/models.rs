use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    common::repository::{Persistable, PersistOp},
    server::error::ServerError,
};

pub const TEXT_MAX_LEN: usize = 100;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct QuestionOption {
    pub id: Uuid,
    pub question_id: Uuid,
    pub text: String,
    pub is_answer: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: Option<DateTime<Utc>>,
}

impl QuestionOption {
    pub fn from_create_request(request: CreateQuestionOptionRequest, question_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            question_id,
            text: request.text,
            is_answer: request.is_answer,
            created_on: Utc::now(),
            updated_on: None,
        }
    }

    /// Applies the whitelisted mutable fields. `question_id` is immutable
    /// after creation.
    pub fn apply_update(&mut self, request: UpdateQuestionOptionRequest) {
        self.text = request.text;
        self.is_answer = request.is_answer;
    }
}

impl Persistable for QuestionOption {
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
pub struct CreateQuestionOptionRequest {
    pub text: String,
    pub is_answer: bool,
}

impl CreateQuestionOptionRequest {
    pub fn validate(&self) -> Result<(), ServerError> {
        validate_text(&self.text)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionOptionRequest {
    pub text: String,
    pub is_answer: bool,
}

impl UpdateQuestionOptionRequest {
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
pub struct QuestionOptionDto {
    pub id: Uuid,
    pub question_id: Uuid,
    pub text: String,
    pub is_answer: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: Option<DateTime<Utc>>,
}

impl From<QuestionOption> for QuestionOptionDto {
    fn from(option: QuestionOption) -> Self {
        Self {
            id: option.id,
            question_id: option.question_id,
            text: option.text,
            is_answer: option.is_answer,
            created_on: option.created_on,
            updated_on: option.updated_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_option_references_its_parent_question() {
        let question_id = Uuid::new_v4();
        let request = CreateQuestionOptionRequest {
            text: "Paris".to_string(),
            is_answer: true,
        };

        let option = QuestionOption::from_create_request(request, question_id);
        assert_eq!(option.question_id, question_id);
        assert!(option.is_answer);
        assert!(option.updated_on.is_none());
    }

    #[test]
    fn rejects_empty_text() {
        let request = UpdateQuestionOptionRequest {
            text: String::new(),
            is_answer: false,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn rejects_overlong_text() {
        let request = CreateQuestionOptionRequest {
            text: "x".repeat(TEXT_MAX_LEN + 1),
            is_answer: false,
        };
        assert!(request.validate().is_err());

        let request = CreateQuestionOptionRequest {
            text: "x".repeat(TEXT_MAX_LEN),
            is_answer: false,
        };
        assert!(request.validate().is_ok());
    }
}
