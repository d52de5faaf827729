use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    common::repository::{Persistable, PersistOp},
    server::error::ServerError,
};

pub const TITLE_MAX_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 500;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Quiz {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_on: DateTime<Utc>,
    pub updated_on: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn from_create_request(request: CreateQuizRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description,
            created_on: Utc::now(),
            updated_on: None,
        }
    }

    /// Applies the whitelisted mutable fields. Identity and `created_on`
    /// stay untouched.
    pub fn apply_update(&mut self, request: UpdateQuizRequest) {
        self.title = request.title;
        self.description = request.description;
    }
}

impl Persistable for Quiz {
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
pub struct CreateQuizRequest {
    pub title: String,
    pub description: Option<String>,
}

impl CreateQuizRequest {
    pub fn validate(&self) -> Result<(), ServerError> {
        validate_quiz_fields(&self.title, self.description.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuizRequest {
    pub title: String,
    pub description: Option<String>,
}

impl UpdateQuizRequest {
    pub fn validate(&self) -> Result<(), ServerError> {
        validate_quiz_fields(&self.title, self.description.as_deref())
    }
}

fn validate_quiz_fields(title: &str, description: Option<&str>) -> Result<(), ServerError> {
    if title.trim().is_empty() {
        return Err(ServerError::Validation("Title must not be empty".into()));
    }

    if title.chars().count() > TITLE_MAX_LEN {
        return Err(ServerError::Validation(format!(
            "Title must be at most {} characters",
            TITLE_MAX_LEN
        )));
    }

    if let Some(description) = description {
        if description.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(ServerError::Validation(format!(
                "Description must be at most {} characters",
                DESCRIPTION_MAX_LEN
            )));
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_on: DateTime<Utc>,
    pub updated_on: Option<DateTime<Utc>>,
}

impl From<Quiz> for QuizDto {
    fn from(quiz: Quiz) -> Self {
        Self {
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            created_on: quiz.created_on,
            updated_on: quiz.updated_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(title: &str) -> CreateQuizRequest {
        CreateQuizRequest {
            title: title.to_string(),
            description: Some("Geography".to_string()),
        }
    }

    #[test]
    fn new_quiz_has_creation_timestamp_only() {
        let quiz = Quiz::from_create_request(create_request("Geo"));
        assert!(quiz.updated_on.is_none());

        let other = Quiz::from_create_request(create_request("Geo"));
        assert_ne!(quiz.id, other.id);
    }

    #[test]
    fn exposes_identity_through_persistable() {
        let quiz = Quiz::from_create_request(create_request("Geo"));
        assert_eq!(quiz.id(), quiz.id);
    }

    #[test]
    fn touch_update_advances_updated_on_only() {
        let mut quiz = Quiz::from_create_request(create_request("Geo"));
        let created_on = quiz.created_on;

        quiz.touch(PersistOp::Update);
        assert_eq!(quiz.created_on, created_on);
        assert!(quiz.updated_on.is_some());
    }

    #[test]
    fn rejects_empty_or_whitespace_title() {
        assert!(create_request("").validate().is_err());
        assert!(create_request("   ").validate().is_err());
        assert!(create_request("Geo").validate().is_ok());
    }

    #[test]
    fn rejects_overlong_fields() {
        assert!(create_request(&"x".repeat(TITLE_MAX_LEN + 1)).validate().is_err());
        assert!(create_request(&"x".repeat(TITLE_MAX_LEN)).validate().is_ok());

        let request = CreateQuizRequest {
            title: "Geo".to_string(),
            description: Some("x".repeat(DESCRIPTION_MAX_LEN + 1)),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn description_is_optional() {
        let request = CreateQuizRequest {
            title: "Geo".to_string(),
            description: None,
        };
        assert!(request.validate().is_ok());
    }
}
