use sqlx::{Pool, Postgres};
use tracing::warn;
use uuid::Uuid;

use crate::{
    common::repository::{Persistable, PersistOp, Repository},
    quiz::models::Quiz,
    server::error::ServerError,
};

pub struct QuizRepository {
    pool: Pool<Postgres>,
}

impl QuizRepository {
    pub fn new(pool: &Pool<Postgres>) -> Self {
        Self { pool: pool.clone() }
    }
}

impl Repository for QuizRepository {
    type Entity = Quiz;

    async fn get_all(&self) -> Result<Vec<Quiz>, ServerError> {
        let quizzes = sqlx::query_as::<_, Quiz>(
            r#"
            SELECT id, title, description, created_on, updated_on
            FROM "quiz"
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(quizzes)
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Quiz>, ServerError> {
        let quiz = sqlx::query_as::<_, Quiz>(
            r#"
            SELECT id, title, description, created_on, updated_on
            FROM "quiz"
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quiz)
    }

    async fn add(&self, mut entity: Quiz) -> Result<Quiz, ServerError> {
        entity.touch(PersistOp::Create);

        let row = sqlx::query(
            r#"
            INSERT INTO "quiz" (id, title, description, created_on)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&entity.id)
        .bind(&entity.title)
        .bind(&entity.description)
        .bind(&entity.created_on)
        .execute(&self.pool)
        .await?;

        if row.rows_affected() == 0 {
            return Err(ServerError::Internal("Failed to persist quiz".into()));
        }

        Ok(entity)
    }

    async fn update(&self, mut entity: Quiz) -> Result<Quiz, ServerError> {
        entity.touch(PersistOp::Update);

        let row = sqlx::query(
            r#"
            UPDATE "quiz"
            SET title = $1, description = $2, updated_on = $3
            WHERE id = $4
            "#,
        )
        .bind(&entity.title)
        .bind(&entity.description)
        .bind(&entity.updated_on)
        .bind(&entity.id)
        .execute(&self.pool)
        .await?;

        if row.rows_affected() == 0 {
            warn!("Query failed, no quiz with id: {}", entity.id());
            return Err(ServerError::NotFound(format!(
                "Quiz with id {} does not exist",
                entity.id()
            )));
        }

        Ok(entity)
    }

    async fn delete(&self, entity: Quiz) -> Result<(), ServerError> {
        let row = sqlx::query(
            r#"
            DELETE FROM "quiz"
            WHERE id = $1
            "#,
        )
        .bind(&entity.id)
        .execute(&self.pool)
        .await?;

        if row.rows_affected() == 0 {
            warn!("Query failed, no quiz with id: {}", entity.id());
            return Err(ServerError::NotFound(format!(
                "Quiz with id {} does not exist",
                entity.id()
            )));
        }

        Ok(())
    }
}

/// First link of the ancestor-validation chain used by every nested route.
pub async fn ensure_quiz_exists(pool: &Pool<Postgres>, quiz_id: &Uuid) -> Result<(), ServerError> {
    let exists = sqlx::query_scalar::<_, Uuid>(r#"SELECT id FROM "quiz" WHERE id = $1"#)
        .bind(quiz_id)
        .fetch_optional(pool)
        .await?;

    exists.map(|_| ()).ok_or(ServerError::NotFound(format!(
        "Quiz with id {} does not exist",
        quiz_id
    )))
}
