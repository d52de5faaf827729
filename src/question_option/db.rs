use sqlx::{Pool, Postgres};
use tracing::warn;
use uuid::Uuid;

use crate::{
    common::repository::{Persistable, PersistOp, Repository},
    question_option::models::QuestionOption,
    server::error::ServerError,
};

pub struct QuestionOptionRepository {
    pool: Pool<Postgres>,
}

impl QuestionOptionRepository {
    pub fn new(pool: &Pool<Postgres>) -> Self {
        Self { pool: pool.clone() }
    }

    /// Every option belonging to the given question. Empty for a question
    /// without options, never an error.
    pub async fn get_by_question_id(
        &self,
        question_id: &Uuid,
    ) -> Result<Vec<QuestionOption>, ServerError> {
        let options = sqlx::query_as::<_, QuestionOption>(
            r#"
            SELECT id, question_id, text, is_answer, created_on, updated_on
            FROM "question_option"
            WHERE question_id = $1
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(options)
    }
}

impl Repository for QuestionOptionRepository {
    type Entity = QuestionOption;

    async fn get_all(&self) -> Result<Vec<QuestionOption>, ServerError> {
        let options = sqlx::query_as::<_, QuestionOption>(
            r#"
            SELECT id, question_id, text, is_answer, created_on, updated_on
            FROM "question_option"
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(options)
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<QuestionOption>, ServerError> {
        let option = sqlx::query_as::<_, QuestionOption>(
            r#"
            SELECT id, question_id, text, is_answer, created_on, updated_on
            FROM "question_option"
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(option)
    }

    async fn add(&self, mut entity: QuestionOption) -> Result<QuestionOption, ServerError> {
        entity.touch(PersistOp::Create);

        let row = sqlx::query(
            r#"
            INSERT INTO "question_option" (id, question_id, text, is_answer, created_on)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&entity.id)
        .bind(&entity.question_id)
        .bind(&entity.text)
        .bind(&entity.is_answer)
        .bind(&entity.created_on)
        .execute(&self.pool)
        .await?;

        if row.rows_affected() == 0 {
            return Err(ServerError::Internal(
                "Failed to persist question option".into(),
            ));
        }

        Ok(entity)
    }

    async fn update(&self, mut entity: QuestionOption) -> Result<QuestionOption, ServerError> {
        entity.touch(PersistOp::Update);

        let row = sqlx::query(
            r#"
            UPDATE "question_option"
            SET text = $1, is_answer = $2, updated_on = $3
            WHERE id = $4
            "#,
        )
        .bind(&entity.text)
        .bind(&entity.is_answer)
        .bind(&entity.updated_on)
        .bind(&entity.id)
        .execute(&self.pool)
        .await?;

        if row.rows_affected() == 0 {
            warn!("Query failed, no question option with id: {}", entity.id());
            return Err(ServerError::NotFound(format!(
                "Question option with id {} does not exist",
                entity.id()
            )));
        }

        Ok(entity)
    }

    async fn delete(&self, entity: QuestionOption) -> Result<(), ServerError> {
        let row = sqlx::query(
            r#"
            DELETE FROM "question_option"
            WHERE id = $1
            "#,
        )
        .bind(&entity.id)
        .execute(&self.pool)
        .await?;

        if row.rows_affected() == 0 {
            warn!("Query failed, no question option with id: {}", entity.id());
            return Err(ServerError::NotFound(format!(
                "Question option with id {} does not exist",
                entity.id()
            )));
        }

        Ok(())
    }
}

/// Resolves an option addressed through a question path segment. Fails with
/// NotFound when the option is missing or belongs to a different question.
pub async fn get_option_in_question(
    pool: &Pool<Postgres>,
    question_id: &Uuid,
    option_id: &Uuid,
) -> Result<QuestionOption, ServerError> {
    let option = QuestionOptionRepository::new(pool)
        .get_by_id(option_id)
        .await?
        .ok_or_else(|| {
            ServerError::NotFound(format!(
                "Question option with id {} does not exist",
                option_id
            ))
        })?;

    if option.question_id != *question_id {
        return Err(ServerError::NotFound(format!(
            "Question option with id {} does not exist in question {}",
            option_id, question_id
        )));
    }

    Ok(option)
}
