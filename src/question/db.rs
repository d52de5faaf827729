use sqlx::{Pool, Postgres};
use tracing::warn;
use uuid::Uuid;

use crate::{
    common::repository::{Persistable, PersistOp, Repository},
    question::models::Question,
    server::error::ServerError,
};

pub struct QuestionRepository {
    pool: Pool<Postgres>,
}

impl QuestionRepository {
    pub fn new(pool: &Pool<Postgres>) -> Self {
        Self { pool: pool.clone() }
    }

    /// Every question belonging to the given quiz. Empty for a quiz without
    /// questions, never an error.
    pub async fn get_by_quiz_id(&self, quiz_id: &Uuid) -> Result<Vec<Question>, ServerError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, quiz_id, text, is_mandatory, created_on, updated_on
            FROM "question"
            WHERE quiz_id = $1
            "#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }
}

impl Repository for QuestionRepository {
    type Entity = Question;

    async fn get_all(&self) -> Result<Vec<Question>, ServerError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, quiz_id, text, is_mandatory, created_on, updated_on
            FROM "question"
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Question>, ServerError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, quiz_id, text, is_mandatory, created_on, updated_on
            FROM "question"
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn add(&self, mut entity: Question) -> Result<Question, ServerError> {
        entity.touch(PersistOp::Create);

        let row = sqlx::query(
            r#"
            INSERT INTO "question" (id, quiz_id, text, is_mandatory, created_on)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&entity.id)
        .bind(&entity.quiz_id)
        .bind(&entity.text)
        .bind(&entity.is_mandatory)
        .bind(&entity.created_on)
        .execute(&self.pool)
        .await?;

        if row.rows_affected() == 0 {
            return Err(ServerError::Internal("Failed to persist question".into()));
        }

        Ok(entity)
    }

    async fn update(&self, mut entity: Question) -> Result<Question, ServerError> {
        entity.touch(PersistOp::Update);

        let row = sqlx::query(
            r#"
            UPDATE "question"
            SET text = $1, is_mandatory = $2, updated_on = $3
            WHERE id = $4
            "#,
        )
        .bind(&entity.text)
        .bind(&entity.is_mandatory)
        .bind(&entity.updated_on)
        .bind(&entity.id)
        .execute(&self.pool)
        .await?;

        if row.rows_affected() == 0 {
            warn!("Query failed, no question with id: {}", entity.id());
            return Err(ServerError::NotFound(format!(
                "Question with id {} does not exist",
                entity.id()
            )));
        }

        Ok(entity)
    }

    async fn delete(&self, entity: Question) -> Result<(), ServerError> {
        let row = sqlx::query(
            r#"
            DELETE FROM "question"
            WHERE id = $1
            "#,
        )
        .bind(&entity.id)
        .execute(&self.pool)
        .await?;

        if row.rows_affected() == 0 {
            warn!("Query failed, no question with id: {}", entity.id());
            return Err(ServerError::NotFound(format!(
                "Question with id {} does not exist",
                entity.id()
            )));
        }

        Ok(())
    }
}

/// Resolves a question addressed through a quiz path segment. Fails with
/// NotFound when the question is missing or belongs to a different quiz, so
/// a question is never reachable through the wrong ancestor.
pub async fn get_question_in_quiz(
    pool: &Pool<Postgres>,
    quiz_id: &Uuid,
    question_id: &Uuid,
) -> Result<Question, ServerError> {
    let question = QuestionRepository::new(pool)
        .get_by_id(question_id)
        .await?
        .ok_or_else(|| {
            ServerError::NotFound(format!("Question with id {} does not exist", question_id))
        })?;

    if question.quiz_id != *quiz_id {
        return Err(ServerError::NotFound(format!(
            "Question with id {} does not exist in quiz {}",
            question_id, quiz_id
        )));
    }

    Ok(question)
}
