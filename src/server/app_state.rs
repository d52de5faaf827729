use std::sync::Arc;

use sqlx::{Pool, Postgres};

use crate::server::error::ServerError;

pub struct AppState {
    pool: Pool<Postgres>,
}

impl AppState {
    /// Connects to the database and applies pending migrations.
    pub async fn from_connection_string(connection_string: &str) -> Result<Arc<Self>, ServerError> {
        let pool = Pool::<Postgres>::connect(connection_string).await?;

        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| ServerError::Internal(format!("Failed to run migrations: {}", e)))?;

        Ok(Arc::new(Self { pool }))
    }

    /// Wraps an already-configured pool. Used by tests that manage their own
    /// database lifecycle.
    pub fn from_pool(pool: Pool<Postgres>) -> Arc<Self> {
        Arc::new(Self { pool })
    }

    pub fn get_pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}
